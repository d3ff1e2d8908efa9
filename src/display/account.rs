//! Account display formatting
//!
//! Formats accounts for terminal output in table and detail views.

use super::format::format_currency;
use crate::models::{Account, Money};

/// Format a list of accounts as a table
pub fn format_account_list(accounts: &[Account]) -> String {
    if accounts.is_empty() {
        return "No accounts found.\n".to_string();
    }

    let name_width = accounts
        .iter()
        .map(|a| a.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<3}  {:<name_width$}  {:<8}  {:<9}  {:>14}\n",
        "ID",
        "Name",
        "Type",
        "Number",
        "Balance",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<3}  {:-<name_width$}  {:-<8}  {:-<9}  {:->14}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for account in accounts {
        output.push_str(&format!(
            "{:<3}  {:<name_width$}  {:<8}  {:<9}  {:>14}\n",
            account.id,
            account.name,
            account.account_type.to_string(),
            account.account_number,
            format_currency(account.balance, account.currency),
            name_width = name_width,
        ));
    }

    output
}

/// Format a single account's details
pub fn format_account_details(account: &Account) -> String {
    let mut output = String::new();

    output.push_str(&format!("Account: {}\n", account.name));
    output.push_str(&format!("  Type:           {}\n", account.account_type));
    output.push_str(&format!("  Currency:       {}\n", account.currency));
    output.push_str(&format!("  Account number: {}\n", account.account_number));
    output.push_str(&format!("  Routing:        {}\n", account.routing_number));
    output.push_str(&format!(
        "  Balance:        {}\n",
        format_currency(account.balance, account.currency)
    ));

    output
}

/// Dashboard headline balance
pub fn format_total_balance(total: Money) -> String {
    format!("Total balance: {}\n", format_currency(total, "USD"))
}
