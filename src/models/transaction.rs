//! Transaction model
//!
//! Read-only activity entries shown in the dashboard and transfers views.

use chrono::NaiveDate;
use std::fmt;

use super::money::Money;

/// Settlement status of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed => write!(f, "completed"),
            Self::Pending => write!(f, "pending"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// Direction of money movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    /// Money in
    Credit,
    /// Money out
    Debit,
}

/// A single account transaction
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: &'static str,
    /// Counterparty or headline (e.g., "Shopify Inc.")
    pub title: &'static str,
    pub description: &'static str,
    /// Signed amount; negative for debits
    pub amount: Money,
    pub currency: &'static str,
    pub date: NaiveDate,
    pub status: TransactionStatus,
    pub category: &'static str,
    pub kind: TransactionKind,
}

impl Transaction {
    /// Whether this entry belongs on the transfers screen
    pub fn is_transfer_activity(&self) -> bool {
        self.category == "Transfer" || self.kind == TransactionKind::Debit
    }

    pub fn is_credit(&self) -> bool {
        self.kind == TransactionKind::Credit
    }

    /// Reference shown on the detail screen ("TXN-00000004")
    pub fn reference(&self) -> String {
        format!("TXN-{:0>8}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(category: &'static str, kind: TransactionKind) -> Transaction {
        Transaction {
            id: "t",
            title: "Test",
            description: "",
            amount: Money::from_cents(100),
            currency: "USD",
            date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            status: TransactionStatus::Completed,
            category,
            kind,
        }
    }

    #[test]
    fn test_transfer_activity() {
        assert!(txn("Transfer", TransactionKind::Credit).is_transfer_activity());
        assert!(txn("Software", TransactionKind::Debit).is_transfer_activity());
        assert!(!txn("Income", TransactionKind::Credit).is_transfer_activity());
    }

    #[test]
    fn test_reference_is_zero_padded() {
        assert_eq!(txn("Income", TransactionKind::Credit).reference(), "TXN-0000000t");
    }

    #[test]
    fn test_status_display() {
        assert_eq!(TransactionStatus::Pending.to_string(), "pending");
    }
}
