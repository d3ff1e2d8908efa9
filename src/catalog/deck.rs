//! Local card deck
//!
//! The cards and card settings screens edit a copy seeded from the catalog.
//! Nothing here is written back.

use crate::error::{VennError, VennResult};
use crate::models::{Card, CardControl, CardSettings, Money, SpendingLimit};
use crate::notice::{NoticeDispatcher, Severity};

/// Working copy of the card list with an active selection
#[derive(Debug, Clone)]
pub struct CardDeck {
    cards: Vec<Card>,
    active: usize,
    settings: CardSettings,
}

impl CardDeck {
    /// Seed a deck from the catalog
    pub fn from_catalog() -> Self {
        Self::new(super::cards().to_vec())
    }

    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            cards,
            active: 0,
            settings: CardSettings::default(),
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn active(&self) -> Option<&Card> {
        self.cards.get(self.active)
    }

    /// Make the card with `id` the active one
    pub fn select(&mut self, id: &str) -> VennResult<&Card> {
        let index = self.position(id)?;
        self.active = index;
        Ok(&self.cards[index])
    }

    /// Flip the frozen flag, returning the new state
    pub fn toggle_freeze(&mut self, id: &str) -> VennResult<bool> {
        let index = self.position(id)?;
        let card = &mut self.cards[index];
        card.frozen = !card.frozen;
        Ok(card.frozen)
    }

    /// Remove a card; the selection falls back to the first card
    pub fn remove(&mut self, id: &str) -> VennResult<Card> {
        let index = self.position(id)?;
        let removed = self.cards.remove(index);
        self.active = 0;
        Ok(removed)
    }

    pub fn settings(&self) -> &CardSettings {
        &self.settings
    }

    /// Switch a control and announce it ("Auto Lock enabled")
    pub fn set_control(
        &mut self,
        control: CardControl,
        enabled: bool,
        notices: &NoticeDispatcher,
    ) {
        self.settings.set(control, enabled);
        let state = if enabled { "enabled" } else { "disabled" };
        notices.show(format!("{} {}", control.label(), state), Severity::Success);
    }

    pub fn set_limit(&mut self, limit: SpendingLimit, input: &str) -> Money {
        self.settings.set_limit(limit, input)
    }

    fn position(&self, id: &str) -> VennResult<usize> {
        self.cards
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| VennError::card_not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_freeze_leaves_catalog_untouched() {
        let mut deck = CardDeck::from_catalog();

        assert!(deck.toggle_freeze("1").unwrap());
        assert!(deck.cards()[0].frozen);
        assert!(!crate::catalog::cards()[0].frozen);

        assert!(!deck.toggle_freeze("1").unwrap());
    }

    #[test]
    fn test_select_and_remove() {
        let mut deck = CardDeck::from_catalog();
        assert_eq!(deck.active().unwrap().id, "1");

        assert_eq!(deck.select("3").unwrap().name, "Venn Travel");
        assert_eq!(deck.active().unwrap().id, "3");

        let removed = deck.remove("3").unwrap();
        assert_eq!(removed.last4, "6710");
        assert_eq!(deck.cards().len(), 2);
        assert_eq!(deck.active().unwrap().id, "1");
        assert_eq!(crate::catalog::cards().len(), 3);
    }

    #[tokio::test]
    async fn test_set_control_raises_notice() {
        let notices = NoticeDispatcher::default();
        let mut deck = CardDeck::from_catalog();

        deck.set_control(CardControl::AutoLock, true, &notices);
        assert!(deck.settings().auto_lock);
        assert_eq!(
            notices.current().map(|n| n.message),
            Some("Auto Lock enabled".to_string())
        );

        deck.set_control(CardControl::AtmWithdrawals, false, &notices);
        assert!(!deck.settings().atm_withdrawals);
        assert_eq!(
            notices.current().map(|n| n.message),
            Some("ATM Withdrawals disabled".to_string())
        );
    }

    #[test]
    fn test_limits_stay_local() {
        let mut deck = CardDeck::from_catalog();
        assert_eq!(deck.set_limit(SpendingLimit::Daily, "750"), Money::from_cents(75_000));
        assert_eq!(CardDeck::from_catalog().settings(), &CardSettings::default());
    }

    #[test]
    fn test_unknown_card() {
        let mut deck = CardDeck::from_catalog();
        assert!(deck.toggle_freeze("99").unwrap_err().is_not_found());
    }
}
