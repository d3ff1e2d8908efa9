//! Cashflow summary model

use super::money::Money;

/// One month of the cashflow series
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyCashflow {
    /// Short month label ("Sep")
    pub month: &'static str,
    pub income: Money,
    pub expenses: Money,
}

impl MonthlyCashflow {
    pub fn net(&self) -> Money {
        self.income - self.expenses
    }
}

/// Headline cashflow figures plus the monthly series
#[derive(Debug, Clone, PartialEq)]
pub struct Cashflow {
    pub income: Money,
    pub expenses: Money,
    pub net: Money,
    pub monthly: Vec<MonthlyCashflow>,
}

impl Cashflow {
    /// Total income across the monthly series
    pub fn series_income(&self) -> Money {
        self.monthly.iter().map(|m| m.income).sum()
    }

    /// Total expenses across the monthly series
    pub fn series_expenses(&self) -> Money {
        self.monthly.iter().map(|m| m.expenses).sum()
    }
}
