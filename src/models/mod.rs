//! Core data models for Venn
//!
//! This module contains the data structures behind the banking screens:
//! accounts, transactions, cards, beneficiaries, invoices, currencies and the
//! cashflow summary.

pub mod account;
pub mod amount;
pub mod beneficiary;
pub mod card;
pub mod cashflow;
pub mod currency;
pub mod invoice;
pub mod money;
pub mod transaction;

pub use account::{Account, AccountType};
pub use amount::{
    fits_in_cents, is_positive_amount, parse_leading_decimal, parse_leading_int_or_zero,
};
pub use beneficiary::Beneficiary;
pub use card::{Card, CardControl, CardNetwork, CardSettings, SpendingLimit};
pub use cashflow::{Cashflow, MonthlyCashflow};
pub use currency::Currency;
pub use invoice::{Invoice, InvoiceItem, InvoiceStatus};
pub use money::Money;
pub use transaction::{Transaction, TransactionKind, TransactionStatus};
