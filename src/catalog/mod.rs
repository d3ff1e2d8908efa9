//! Static catalog store
//!
//! Read-only collections that populate the screens, plus the derived views
//! (dashboard totals, transfers list, invoice filters) computed from them.

pub mod data;
pub mod deck;

pub use data::FundingMethod;
pub use deck::CardDeck;

use std::sync::OnceLock;

use crate::error::{VennError, VennResult};
use crate::models::{
    Account, Beneficiary, Card, Cashflow, Currency, Invoice, InvoiceStatus, Money, Transaction,
};

/// All accounts, in display order
pub fn accounts() -> &'static [Account] {
    data::ACCOUNTS
}

/// The account money leaves from and arrives in by default
pub fn primary_account() -> &'static Account {
    &data::ACCOUNTS[0]
}

/// All transactions, newest first
pub fn transactions() -> &'static [Transaction] {
    static TRANSACTIONS: OnceLock<Vec<Transaction>> = OnceLock::new();
    TRANSACTIONS.get_or_init(data::build_transactions)
}

pub fn cards() -> &'static [Card] {
    data::CARDS
}

pub fn beneficiaries() -> &'static [Beneficiary] {
    data::BENEFICIARIES
}

pub fn invoices() -> &'static [Invoice] {
    static INVOICES: OnceLock<Vec<Invoice>> = OnceLock::new();
    INVOICES.get_or_init(data::build_invoices)
}

pub fn cashflow() -> &'static Cashflow {
    static CASHFLOW: OnceLock<Cashflow> = OnceLock::new();
    CASHFLOW.get_or_init(data::build_cashflow)
}

pub fn currencies() -> &'static [Currency] {
    data::CURRENCIES
}

pub fn funding_methods() -> &'static [FundingMethod] {
    data::FUNDING_METHODS
}

/// Find an account by ID
pub fn find_account(id: &str) -> VennResult<&'static Account> {
    accounts()
        .iter()
        .find(|a| a.id == id)
        .ok_or_else(|| VennError::account_not_found(id))
}

pub fn find_transaction(id: &str) -> VennResult<&'static Transaction> {
    transactions()
        .iter()
        .find(|t| t.id == id)
        .ok_or_else(|| VennError::transaction_not_found(id))
}

/// Find a beneficiary by ID or case-insensitive name
pub fn find_beneficiary(identifier: &str) -> VennResult<&'static Beneficiary> {
    beneficiaries()
        .iter()
        .find(|b| b.id == identifier || b.name.eq_ignore_ascii_case(identifier))
        .ok_or_else(|| VennError::beneficiary_not_found(identifier))
}

/// Find a currency by (case-insensitive) code
pub fn find_currency(code: &str) -> VennResult<&'static Currency> {
    currencies()
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(code))
        .ok_or_else(|| VennError::currency_not_found(code))
}

pub fn find_funding_method(id: &str) -> Option<&'static FundingMethod> {
    funding_methods().iter().find(|m| m.id == id)
}

/// Dashboard headline: the raw sum of every account balance
///
/// Balances are summed across currencies without conversion.
pub fn total_balance() -> Money {
    accounts().iter().map(|a| a.balance).sum()
}

/// The most recent `limit` transactions
pub fn recent_transactions(limit: usize) -> &'static [Transaction] {
    let all = transactions();
    &all[..limit.min(all.len())]
}

/// Transactions shown on the transfers screen
pub fn transfer_activity() -> impl Iterator<Item = &'static Transaction> {
    transactions().iter().filter(|t| t.is_transfer_activity())
}

/// Invoices with the given status, or all of them for `None`
pub fn invoices_with_status(
    status: Option<InvoiceStatus>,
) -> impl Iterator<Item = &'static Invoice> {
    invoices()
        .iter()
        .filter(move |i| status.map_or(true, |s| i.status == s))
}
