//! Display formatting for terminal output
//!
//! Provides the pure currency and date helpers plus table renderers for each
//! catalog collection.

pub mod account;
pub mod card;
pub mod format;
pub mod invoice;
pub mod report;
pub mod transaction;

pub use account::{format_account_details, format_account_list, format_total_balance};
pub use card::{format_card_list, format_card_settings};
pub use format::{currency_symbol, format_currency, format_major, format_relative_date};
pub use invoice::{format_invoice_details, format_invoice_list};
pub use report::format_cashflow;
pub use transaction::{
    format_transaction_details, format_transaction_list, format_transaction_row,
};
