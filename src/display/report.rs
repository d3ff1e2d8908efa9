//! Cashflow report formatting

use super::format::format_currency;
use crate::models::Cashflow;

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Cashflow headline plus a per-month income bar chart
pub fn format_cashflow(cashflow: &Cashflow) -> String {
    let mut output = String::new();
    output.push_str(&format!("Income:   {}\n", format_currency(cashflow.income, "USD")));
    output.push_str(&format!("Expenses: {}\n", format_currency(cashflow.expenses, "USD")));
    output.push_str(&format!("Net:      {}\n", format_currency(cashflow.net, "USD")));
    output.push_str(&separator(44));
    output.push('\n');

    let max = cashflow
        .monthly
        .iter()
        .map(|m| m.income.as_major())
        .fold(0.0, f64::max);

    for month in &cashflow.monthly {
        output.push_str(&format!(
            "{:<4} {} {:>12}\n",
            month.month,
            format_bar(month.income.as_major(), max, 20),
            format_currency(month.net(), "USD")
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(5.0, 10.0, 4), "██░░");
        assert_eq!(format_bar(0.0, 10.0, 3), "   ");
        assert_eq!(format_bar(20.0, 10.0, 2), "██");
    }

    #[test]
    fn test_cashflow_report() {
        let output = format_cashflow(catalog::cashflow());
        assert!(output.contains("Net:      $7,560.71"));
        // December has the highest income and gets a full bar
        assert!(output.contains(&format!("Dec  {}", "█".repeat(20))));
    }
}
