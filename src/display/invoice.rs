//! Invoice display formatting

use super::format::format_currency;
use crate::models::Invoice;

/// Format invoices as a table
pub fn format_invoice_list<'a, I>(invoices: I) -> String
where
    I: IntoIterator<Item = &'a Invoice>,
{
    let mut rows = String::new();
    for invoice in invoices {
        rows.push_str(&format!(
            "{:<9} {:<17} {:>13}  {:<8} {}\n",
            invoice.number,
            invoice.client,
            format_currency(invoice.amount, invoice.currency),
            invoice.status.to_string(),
            invoice.due_date.format("%b %-d, %Y"),
        ));
    }

    if rows.is_empty() {
        return "No invoices found.\n".to_string();
    }

    let mut output = format!(
        "{:<9} {:<17} {:>13}  {:<8} {}\n",
        "Number", "Client", "Amount", "Status", "Due"
    );
    output.push_str(&"-".repeat(64));
    output.push('\n');
    output.push_str(&rows);
    output
}

/// Format one invoice with its line items
pub fn format_invoice_details(invoice: &Invoice) -> String {
    let mut output = String::new();
    output.push_str(&format!("Invoice {} - {}\n", invoice.number, invoice.client));
    output.push_str(&format!("  Status: {}\n", invoice.status));
    output.push_str(&format!("  Issued: {}\n", invoice.issued_date.format("%b %-d, %Y")));
    output.push_str(&format!("  Due:    {}\n", invoice.due_date.format("%b %-d, %Y")));
    for item in &invoice.items {
        output.push_str(&format!(
            "    {:<24} x{:<3} {:>12}\n",
            item.description,
            item.quantity,
            format_currency(item.line_total(), invoice.currency)
        ));
    }
    output.push_str(&format!(
        "  Total: {}\n",
        format_currency(invoice.amount, invoice.currency)
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::models::InvoiceStatus;

    #[test]
    fn test_filtered_list() {
        let output = format_invoice_list(catalog::invoices_with_status(Some(InvoiceStatus::Overdue)));
        assert!(output.contains("INV-1044"));
        assert!(output.contains("C$6,200.00"));
        assert!(!output.contains("INV-1042"));
    }

    #[test]
    fn test_details() {
        let output = format_invoice_details(&catalog::invoices()[1]);
        assert!(output.contains("Consulting - 40hrs"));
        assert!(output.contains("x40"));
        assert!(output.contains("$2,800.00"));
    }
}
