//! The mock dataset
//!
//! Read-only at runtime. Screens that appear to mutate catalog entities work on
//! a local copy (see [`super::CardDeck`]).

use chrono::NaiveDate;

use crate::models::{
    Account, AccountType, Beneficiary, Card, CardNetwork, Cashflow, Currency, Invoice,
    InvoiceItem, InvoiceStatus, Money, MonthlyCashflow, Transaction, TransactionKind,
    TransactionStatus,
};

pub const ACCOUNTS: &[Account] = &[
    Account {
        id: "1",
        name: "US Dollar Account",
        currency: "USD",
        balance: Money::from_cents(2485075),
        account_number: "****4521",
        routing_number: "021000021",
        account_type: AccountType::Checking,
    },
    Account {
        id: "2",
        name: "Canadian Dollar",
        currency: "CAD",
        balance: Money::from_cents(1532040),
        account_number: "****8734",
        routing_number: "001002003",
        account_type: AccountType::Checking,
    },
    Account {
        id: "3",
        name: "Euro Account",
        currency: "EUR",
        balance: Money::from_cents(894020),
        account_number: "****6192",
        routing_number: "VENNEUR2X",
        account_type: AccountType::Savings,
    },
    Account {
        id: "4",
        name: "British Pound",
        currency: "GBP",
        balance: Money::from_cents(523015),
        account_number: "****3847",
        routing_number: "VENNGB2L",
        account_type: AccountType::Savings,
    },
];

pub const CARDS: &[Card] = &[
    Card {
        id: "1",
        name: "Venn Business",
        last4: "4521",
        expiry: "09/28",
        network: CardNetwork::Visa,
        frozen: false,
        balance: Money::from_cents(2485075),
        currency: "USD",
    },
    Card {
        id: "2",
        name: "Venn Virtual",
        last4: "8392",
        expiry: "03/27",
        network: CardNetwork::Mastercard,
        frozen: false,
        balance: Money::from_cents(500000),
        currency: "USD",
    },
    Card {
        id: "3",
        name: "Venn Travel",
        last4: "6710",
        expiry: "12/27",
        network: CardNetwork::Visa,
        frozen: true,
        balance: Money::from_cents(125000),
        currency: "CAD",
    },
];

pub const BENEFICIARIES: &[Beneficiary] = &[
    Beneficiary {
        id: "1",
        name: "Saud Aziz",
        bank: "TD Bank",
        account_number: "****5621",
        avatar: "SA",
    },
    Beneficiary {
        id: "2",
        name: "Ahmed Shafik",
        bank: "RBC Royal",
        account_number: "****8843",
        avatar: "AS",
    },
    Beneficiary {
        id: "3",
        name: "Anton Riabov",
        bank: "Chase",
        account_number: "****2290",
        avatar: "AR",
    },
    Beneficiary {
        id: "4",
        name: "Saheel Bhatt",
        bank: "BBVA",
        account_number: "****7715",
        avatar: "SB",
    },
    Beneficiary {
        id: "5",
        name: "Conor O'Hanlon",
        bank: "Scotiabank",
        account_number: "****3302",
        avatar: "CO",
    },
];

pub const CURRENCIES: &[Currency] = &[
    Currency {
        code: "USD",
        name: "US Dollar",
        rate: 1.0,
        symbol: "$",
    },
    Currency {
        code: "CAD",
        name: "Canadian Dollar",
        rate: 1.36,
        symbol: "C$",
    },
    Currency {
        code: "EUR",
        name: "Euro",
        rate: 0.92,
        symbol: "\u{20AC}",
    },
    Currency {
        code: "GBP",
        name: "British Pound",
        rate: 0.79,
        symbol: "\u{00A3}",
    },
];

/// Ways to fund an account in the add-money flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FundingMethod {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    /// Expected arrival time
    pub eta: &'static str,
}

pub const FUNDING_METHODS: &[FundingMethod] = &[
    FundingMethod {
        id: "bank",
        label: "Bank Transfer",
        description: "ACH or Wire transfer",
        eta: "1-3 business days",
    },
    FundingMethod {
        id: "card",
        label: "Debit Card",
        description: "Instant deposit",
        eta: "Instant",
    },
    FundingMethod {
        id: "interac",
        label: "Interac e-Transfer",
        description: "Canadian accounts",
        eta: "< 30 minutes",
    },
];

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn txn(
    id: &'static str,
    title: &'static str,
    description: &'static str,
    cents: i64,
    currency: &'static str,
    day: u32,
    status: TransactionStatus,
    category: &'static str,
) -> Transaction {
    Transaction {
        id,
        title,
        description,
        amount: Money::from_cents(cents),
        currency,
        date: ymd(2026, 2, day),
        status,
        category,
        kind: if cents < 0 {
            TransactionKind::Debit
        } else {
            TransactionKind::Credit
        },
    }
}

pub fn build_transactions() -> Vec<Transaction> {
    use TransactionStatus::*;

    vec![
        txn("1", "Shopify Inc.", "Monthly subscription", -7999, "USD", 22, Completed, "Software"),
        txn("2", "Client Payment", "Invoice #1042 - Web Development", 450000, "USD", 21, Completed, "Income"),
        txn("3", "AWS Services", "Cloud hosting fees", -23450, "USD", 20, Completed, "Infrastructure"),
        txn("4", "Wire Transfer", "Transfer to CAD account", -200000, "USD", 19, Pending, "Transfer"),
        txn("5", "Figma Pro", "Design tool subscription", -1500, "USD", 18, Completed, "Software"),
        txn("6", "Stripe Payout", "Weekly payout", 328000, "USD", 17, Completed, "Income"),
        txn("7", "Google Workspace", "Team plan", -7200, "USD", 16, Failed, "Software"),
        txn("8", "Interac e-Transfer", "From Alex Chen", 85000, "CAD", 15, Completed, "Income"),
        txn("9", "Office Supplies", "Staples order", -15630, "CAD", 14, Completed, "Office"),
        txn("10", "Consulting Fee", "Q1 Advisory services", 750000, "USD", 13, Completed, "Income"),
        txn("11", "Slack Technologies", "Business+ plan", -1250, "USD", 12, Completed, "Software"),
        txn("12", "International Transfer", "EUR to GBP conversion", -150000, "EUR", 11, Completed, "Transfer"),
    ]
}

fn item(description: &'static str, quantity: u32, price_whole: i64) -> InvoiceItem {
    InvoiceItem {
        description,
        quantity,
        price: Money::from_cents(price_whole * 100),
    }
}

pub fn build_invoices() -> Vec<Invoice> {
    vec![
        Invoice {
            id: "1",
            number: "INV-1042",
            client: "Acme Corp",
            amount: Money::from_cents(450000),
            currency: "USD",
            status: InvoiceStatus::Paid,
            due_date: ymd(2026, 2, 15),
            issued_date: ymd(2026, 1, 15),
            items: vec![item("Web Development", 1, 3500), item("UI Design", 1, 1000)],
        },
        Invoice {
            id: "2",
            number: "INV-1043",
            client: "TechStart Inc.",
            amount: Money::from_cents(280000),
            currency: "USD",
            status: InvoiceStatus::Unpaid,
            due_date: ymd(2026, 3, 1),
            issued_date: ymd(2026, 2, 1),
            items: vec![item("Consulting - 40hrs", 40, 70)],
        },
        Invoice {
            id: "3",
            number: "INV-1044",
            client: "GlobalTrade Ltd.",
            amount: Money::from_cents(620000),
            currency: "CAD",
            status: InvoiceStatus::Overdue,
            due_date: ymd(2026, 2, 10),
            issued_date: ymd(2026, 1, 10),
            items: vec![item("API Integration", 1, 4200), item("Testing & QA", 1, 2000)],
        },
        Invoice {
            id: "4",
            number: "INV-1045",
            client: "DesignHub",
            amount: Money::from_cents(150000),
            currency: "USD",
            status: InvoiceStatus::Paid,
            due_date: ymd(2026, 2, 20),
            issued_date: ymd(2026, 1, 20),
            items: vec![item("Brand Design Package", 1, 1500)],
        },
        Invoice {
            id: "5",
            number: "INV-1046",
            client: "CloudSync",
            amount: Money::from_cents(375000),
            currency: "EUR",
            status: InvoiceStatus::Unpaid,
            due_date: ymd(2026, 3, 15),
            issued_date: ymd(2026, 2, 15),
            items: vec![
                item("Infrastructure Setup", 1, 2750),
                item("Documentation", 1, 1000),
            ],
        },
    ]
}

fn month(label: &'static str, income: i64, expenses: i64) -> MonthlyCashflow {
    MonthlyCashflow {
        month: label,
        income: Money::from_cents(income * 100),
        expenses: Money::from_cents(expenses * 100),
    }
}

pub fn build_cashflow() -> Cashflow {
    Cashflow {
        income: Money::from_cents(1613000),
        expenses: Money::from_cents(856929),
        net: Money::from_cents(756071),
        monthly: vec![
            month("Sep", 12400, 7200),
            month("Oct", 14800, 8100),
            month("Nov", 11200, 6900),
            month("Dec", 18500, 9200),
            month("Jan", 15300, 7800),
            month("Feb", 16130, 8569),
        ],
    }
}
