//! Card display formatting

use super::format::format_currency;
use crate::models::{Card, CardControl, CardSettings, SpendingLimit};

/// Format the card deck, marking the active card
pub fn format_card_list(cards: &[Card], active_id: Option<&str>) -> String {
    if cards.is_empty() {
        return "No cards.\n".to_string();
    }

    let mut output = String::new();
    for card in cards {
        let marker = if Some(card.id) == active_id { ">" } else { " " };
        let frozen = if card.frozen { "  FROZEN" } else { "" };
        output.push_str(&format!(
            "{} {:<3} {:<14} {:<11} {:<9} {:>7}  {:>12}{}\n",
            marker,
            card.id,
            card.name,
            card.network.to_string(),
            card.masked_number(),
            card.expiry,
            format_currency(card.balance, card.currency),
            frozen
        ));
    }
    output
}

/// Format the settings screen for `card`
pub fn format_card_settings(card: &Card, settings: &CardSettings) -> String {
    let mut output = format!("{} {}  {}\n", card.name, card.masked_number(), card.expiry);
    for control in CardControl::ALL {
        let state = if settings.is_enabled(control) { "on" } else { "off" };
        output.push_str(&format!(
            "  {:<28} {:<3}  ({})\n",
            control.label(),
            state,
            control.id()
        ));
    }
    for limit in [SpendingLimit::Daily, SpendingLimit::Monthly] {
        output.push_str(&format!(
            "  {:<28} {}\n",
            limit.label(),
            format_currency(settings.limit(limit), card.currency)
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_card_list() {
        let output = format_card_list(catalog::cards(), Some("2"));
        assert!(output.contains("> 2"));
        assert!(output.contains("Venn Travel"));
        assert_eq!(output.matches("FROZEN").count(), 1);
    }

    #[test]
    fn test_card_settings() {
        let output = format_card_settings(&catalog::cards()[0], &CardSettings::default());
        assert!(output.starts_with("Venn Business •••• 4521  09/28"));
        assert!(output.contains("(auto-lock)"));
        assert!(output.contains("$5,000.00"));
        assert!(output.contains("$15,000.00"));
    }
}
