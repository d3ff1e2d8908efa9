//! Account model
//!
//! Represents the multi-currency bank accounts shown on the dashboard.

use std::fmt;

use super::money::Money;

/// Type of bank account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountType {
    /// Checking account
    Checking,
    /// Savings account
    Savings,
}

impl AccountType {
    /// Parse account type from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "checking" => Some(Self::Checking),
            "savings" => Some(Self::Savings),
            _ => None,
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checking => write!(f, "Checking"),
            Self::Savings => write!(f, "Savings"),
        }
    }
}

/// A bank account held in one currency
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Unique identifier
    pub id: &'static str,
    /// Display name (e.g., "US Dollar Account")
    pub name: &'static str,
    /// ISO currency code
    pub currency: &'static str,
    /// Current balance in the account currency
    pub balance: Money,
    /// Masked account number (e.g., "****4521")
    pub account_number: &'static str,
    /// Routing number or SWIFT-style code
    pub routing_number: &'static str,
    pub account_type: AccountType,
}

impl Account {
    /// Short label used on confirm screens ("USD Account ****4521")
    pub fn short_label(&self) -> String {
        format!("{} Account {}", self.currency, self.account_number)
    }
}
