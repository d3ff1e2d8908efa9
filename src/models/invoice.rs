//! Invoice model

use chrono::NaiveDate;
use std::fmt;

use super::money::Money;

/// Payment status of an invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceStatus {
    Paid,
    Unpaid,
    Overdue,
}

impl InvoiceStatus {
    /// Parse invoice status from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "paid" => Some(Self::Paid),
            "unpaid" => Some(Self::Unpaid),
            "overdue" => Some(Self::Overdue),
            _ => None,
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paid => write!(f, "paid"),
            Self::Unpaid => write!(f, "unpaid"),
            Self::Overdue => write!(f, "overdue"),
        }
    }
}

/// A billed line on an invoice
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceItem {
    pub description: &'static str,
    pub quantity: u32,
    /// Unit price
    pub price: Money,
}

impl InvoiceItem {
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.price.cents() * i64::from(self.quantity))
    }
}

/// An issued invoice
#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub id: &'static str,
    /// Human-facing number (e.g., "INV-1042")
    pub number: &'static str,
    pub client: &'static str,
    pub amount: Money,
    pub currency: &'static str,
    pub status: InvoiceStatus,
    pub due_date: NaiveDate,
    pub issued_date: NaiveDate,
    pub items: Vec<InvoiceItem>,
}

impl Invoice {
    /// Sum of line totals
    pub fn items_total(&self) -> Money {
        self.items.iter().map(InvoiceItem::line_total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse() {
        assert_eq!(InvoiceStatus::parse("Overdue"), Some(InvoiceStatus::Overdue));
        assert_eq!(InvoiceStatus::parse("void"), None);
    }

    #[test]
    fn test_line_total() {
        let item = InvoiceItem {
            description: "Consulting - 40hrs",
            quantity: 40,
            price: Money::from_cents(7000),
        };
        assert_eq!(item.line_total(), Money::from_cents(280000));
    }
}
