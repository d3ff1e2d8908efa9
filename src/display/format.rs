//! Pure formatting helpers shared by every screen
//!
//! Currency amounts render with the currency's symbol, grouping commas and two
//! decimals; dates render relative to "today".

use chrono::NaiveDate;

use crate::catalog;
use crate::models::Money;

/// Symbol for a currency code, "$" when the code is unknown
pub fn currency_symbol(code: &str) -> &'static str {
    catalog::find_currency(code)
        .map(|c| c.symbol)
        .unwrap_or("$")
}

/// Format an amount in the given currency ("-C$1,234.56")
pub fn format_currency(amount: Money, code: &str) -> String {
    let abs = amount.abs();
    format!(
        "{}{}{}.{:02}",
        if amount.is_negative() { "-" } else { "" },
        currency_symbol(code),
        group_thousands(abs.whole()),
        abs.cents_part()
    )
}

/// Format a major-unit float in the given currency
pub fn format_major(value: f64, code: &str) -> String {
    format_currency(Money::from_major(value), code)
}

fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Describe `date` relative to `today`
///
/// Future dates and anything a week or more old fall back to "Mon D".
pub fn format_relative_date(date: NaiveDate, today: NaiveDate) -> String {
    match (today - date).num_days() {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        n @ 2..=6 => format!("{} days ago", n),
        _ => date.format("%b %-d").to_string(),
    }
}

/// Shorten `s` to `max` characters, ending in an ellipsis when cut
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_currency_symbols() {
        let amount = Money::from_cents(123456);
        assert_eq!(format_currency(amount, "USD"), "$1,234.56");
        assert_eq!(format_currency(amount, "CAD"), "C$1,234.56");
        assert_eq!(format_currency(amount, "EUR"), "\u{20AC}1,234.56");
        assert_eq!(format_currency(amount, "GBP"), "\u{00A3}1,234.56");
        assert_eq!(format_currency(amount, "JPY"), "$1,234.56");
    }

    #[test]
    fn test_format_currency_sign_and_grouping() {
        assert_eq!(format_currency(Money::from_cents(-7999), "USD"), "-$79.99");
        assert_eq!(format_currency(Money::zero(), "USD"), "$0.00");
        assert_eq!(format_currency(Money::from_cents(100_000_000), "USD"), "$1,000,000.00");
        assert_eq!(format_currency(Money::from_cents(99_999), "USD"), "$999.99");
        assert_eq!(format_major(150.0, "USD"), "$150.00");
    }

    #[test]
    fn test_relative_date() {
        let today = date(2026, 2, 22);
        assert_eq!(format_relative_date(today, today), "Today");
        assert_eq!(format_relative_date(date(2026, 2, 21), today), "Yesterday");
        assert_eq!(format_relative_date(date(2026, 2, 16), today), "6 days ago");
        assert_eq!(format_relative_date(date(2026, 2, 15), today), "Feb 15");
        assert_eq!(format_relative_date(date(2026, 2, 5), today), "Feb 5");
        assert_eq!(format_relative_date(date(2026, 3, 1), today), "Mar 1");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Slack", 10), "Slack");
        assert_eq!(truncate("International Transfer", 10), "Internati…");
    }
}
