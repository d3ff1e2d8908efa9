//! Payment card model

use std::fmt;

use super::amount::parse_leading_int_or_zero;
use super::money::Money;

/// Card network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardNetwork {
    Visa,
    Mastercard,
}

impl CardNetwork {
    /// Identifier used in wizard fields
    pub fn id(&self) -> &'static str {
        match self {
            Self::Visa => "visa",
            Self::Mastercard => "mastercard",
        }
    }

    /// Parse the wizard field identifier
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "visa" => Some(Self::Visa),
            "mastercard" => Some(Self::Mastercard),
            _ => None,
        }
    }
}

impl fmt::Display for CardNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Visa => write!(f, "Visa"),
            Self::Mastercard => write!(f, "Mastercard"),
        }
    }
}

/// A debit card linked to an account
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: &'static str,
    pub name: &'static str,
    pub last4: &'static str,
    /// Expiry as shown on the card ("MM/YY")
    pub expiry: &'static str,
    pub network: CardNetwork,
    pub frozen: bool,
    pub balance: Money,
    pub currency: &'static str,
}

impl Card {
    /// Masked card number ("•••• 4521")
    pub fn masked_number(&self) -> String {
        format!("•••• {}", self.last4)
    }
}

/// An on/off switch on the card settings screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardControl {
    OnlinePayments,
    InternationalTransactions,
    ContactlessPayments,
    AtmWithdrawals,
    AutoLock,
    TransactionNotifications,
    SecurityAlerts,
    MonthlyStatements,
}

impl CardControl {
    pub const ALL: [Self; 8] = [
        Self::OnlinePayments,
        Self::InternationalTransactions,
        Self::ContactlessPayments,
        Self::AtmWithdrawals,
        Self::AutoLock,
        Self::TransactionNotifications,
        Self::SecurityAlerts,
        Self::MonthlyStatements,
    ];

    /// Identifier accepted on the command line
    pub fn id(&self) -> &'static str {
        match self {
            Self::OnlinePayments => "online-payments",
            Self::InternationalTransactions => "international",
            Self::ContactlessPayments => "contactless",
            Self::AtmWithdrawals => "atm",
            Self::AutoLock => "auto-lock",
            Self::TransactionNotifications => "transaction-notifications",
            Self::SecurityAlerts => "security-alerts",
            Self::MonthlyStatements => "monthly-statements",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::OnlinePayments => "Online Payments",
            Self::InternationalTransactions => "International Transactions",
            Self::ContactlessPayments => "Contactless Payments",
            Self::AtmWithdrawals => "ATM Withdrawals",
            Self::AutoLock => "Auto Lock",
            Self::TransactionNotifications => "Transaction Notifications",
            Self::SecurityAlerts => "Security Alerts",
            Self::MonthlyStatements => "Monthly Statements",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.id().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for CardControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpendingLimit {
    Daily,
    Monthly,
}

impl SpendingLimit {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Daily => "Daily spending limit",
            Self::Monthly => "Monthly spending limit",
        }
    }
}

/// Controls and limits for the active card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSettings {
    pub online_payments: bool,
    pub international_transactions: bool,
    pub contactless_payments: bool,
    pub atm_withdrawals: bool,
    pub auto_lock: bool,
    pub transaction_notifications: bool,
    pub security_alerts: bool,
    pub monthly_statements: bool,
    pub daily_limit: Money,
    pub monthly_limit: Money,
}

impl Default for CardSettings {
    fn default() -> Self {
        Self {
            online_payments: true,
            international_transactions: true,
            contactless_payments: true,
            atm_withdrawals: true,
            auto_lock: false,
            transaction_notifications: true,
            security_alerts: true,
            monthly_statements: true,
            daily_limit: Money::from_cents(500_000),
            monthly_limit: Money::from_cents(1_500_000),
        }
    }
}

impl CardSettings {
    fn flag_mut(&mut self, control: CardControl) -> &mut bool {
        match control {
            CardControl::OnlinePayments => &mut self.online_payments,
            CardControl::InternationalTransactions => &mut self.international_transactions,
            CardControl::ContactlessPayments => &mut self.contactless_payments,
            CardControl::AtmWithdrawals => &mut self.atm_withdrawals,
            CardControl::AutoLock => &mut self.auto_lock,
            CardControl::TransactionNotifications => &mut self.transaction_notifications,
            CardControl::SecurityAlerts => &mut self.security_alerts,
            CardControl::MonthlyStatements => &mut self.monthly_statements,
        }
    }

    pub fn is_enabled(&self, control: CardControl) -> bool {
        match control {
            CardControl::OnlinePayments => self.online_payments,
            CardControl::InternationalTransactions => self.international_transactions,
            CardControl::ContactlessPayments => self.contactless_payments,
            CardControl::AtmWithdrawals => self.atm_withdrawals,
            CardControl::AutoLock => self.auto_lock,
            CardControl::TransactionNotifications => self.transaction_notifications,
            CardControl::SecurityAlerts => self.security_alerts,
            CardControl::MonthlyStatements => self.monthly_statements,
        }
    }

    pub fn set(&mut self, control: CardControl, enabled: bool) {
        *self.flag_mut(control) = enabled;
    }

    pub fn limit(&self, limit: SpendingLimit) -> Money {
        match limit {
            SpendingLimit::Daily => self.daily_limit,
            SpendingLimit::Monthly => self.monthly_limit,
        }
    }

    /// Set a limit from typed input, returning the stored value
    ///
    /// Only the leading whole number counts; input without one sets the
    /// limit to zero.
    pub fn set_limit(&mut self, limit: SpendingLimit, input: &str) -> Money {
        let value = parse_leading_int_or_zero(input)
            .checked_mul(100)
            .map(Money::from_cents)
            .unwrap_or_default();
        match limit {
            SpendingLimit::Daily => self.daily_limit = value,
            SpendingLimit::Monthly => self.monthly_limit = value,
        }
        value
    }
}
