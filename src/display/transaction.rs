//! Transaction display formatting
//!
//! Activity rows for the dashboard and transfers views.

use chrono::NaiveDate;

use super::format::{format_currency, format_relative_date, truncate};
use crate::models::{Transaction, TransactionStatus};

/// Format a single transaction row
pub fn format_transaction_row(txn: &Transaction, today: NaiveDate) -> String {
    let status = match txn.status {
        TransactionStatus::Completed => String::new(),
        other => format!("  [{}]", other),
    };

    let amount = if txn.is_credit() {
        format!("+{}", format_currency(txn.amount, txn.currency))
    } else {
        format_currency(txn.amount, txn.currency)
    };

    format!(
        "{:<12} {:<22} {:<14} {:>13}{}",
        format_relative_date(txn.date, today),
        truncate(txn.title, 22),
        truncate(txn.category, 14),
        amount,
        status
    )
}

/// Format one transaction in full
pub fn format_transaction_details(txn: &Transaction) -> String {
    let sign = if txn.is_credit() { "+" } else { "" };
    let mut output = String::new();
    output.push_str(&format!(
        "{}{}  [{}]\n",
        sign,
        format_currency(txn.amount, txn.currency),
        txn.status
    ));
    output.push_str(&format!("  Merchant:    {}\n", txn.title));
    output.push_str(&format!("  Description: {}\n", txn.description));
    output.push_str(&format!("  Date:        {}\n", txn.date.format("%A, %B %-d, %Y")));
    output.push_str(&format!("  Category:    {}\n", txn.category));
    output.push_str(&format!("  Currency:    {}\n", txn.currency));
    output.push_str(&format!("  Reference:   {}\n", txn.reference()));
    output
}

/// Format a list of transactions
pub fn format_transaction_list<'a, I>(transactions: I, today: NaiveDate) -> String
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut rows = String::new();
    for txn in transactions {
        rows.push_str(&format_transaction_row(txn, today));
        rows.push('\n');
    }

    if rows.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = format!(
        "{:<12} {:<22} {:<14} {:>13}\n",
        "Date", "Title", "Category", "Amount"
    );
    output.push_str(&"-".repeat(64));
    output.push('\n');
    output.push_str(&rows);
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 22).unwrap()
    }

    #[test]
    fn test_row_marks_credits_and_status() {
        let txns = catalog::transactions();
        let debit = format_transaction_row(&txns[0], today());
        assert!(debit.starts_with("Today"));
        assert!(debit.contains("-$79.99"));

        let credit = format_transaction_row(&txns[1], today());
        assert!(credit.contains("+$4,500.00"));

        let pending = format_transaction_row(&txns[3], today());
        assert!(pending.ends_with("[pending]"));
    }

    #[test]
    fn test_details() {
        let output = format_transaction_details(&catalog::transactions()[1]);
        assert!(output.starts_with("+$4,500.00  [completed]"));
        assert!(output.contains("Invoice #1042 - Web Development"));
        assert!(output.contains("Saturday, February 21, 2026"));
        assert!(output.contains("TXN-00000002"));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(
            format_transaction_list(std::iter::empty(), today()),
            "No transactions found.\n"
        );
    }
}
