//! Beneficiary model
//!
//! Saved recipients offered on the first step of the send-money flow.

/// A saved transfer recipient
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Beneficiary {
    pub id: &'static str,
    pub name: &'static str,
    pub bank: &'static str,
    /// Masked account number
    pub account_number: &'static str,
    /// Avatar initials
    pub avatar: &'static str,
}

impl Beneficiary {
    /// Bank and masked account number, as shown under the name
    pub fn bank_line(&self) -> String {
        format!("{} {}", self.bank, self.account_number)
    }
}
