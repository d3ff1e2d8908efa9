//! Create a virtual card

use std::sync::Arc;

use crate::models::CardNetwork;
use crate::notice::{NoticeDispatcher, Severity};
use crate::wizard::{FieldMap, FlowDefinition, Rejection, Settler, StepDef, Transition, Wizard};

use super::field_or_empty;

pub const NAME: &str = "name";
pub const NETWORK: &str = "network";

pub const MISSING_NAME_MESSAGE: &str = "Please enter a card name";
pub const CREATED_MESSAGE: &str = "Card created successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStep {
    Details,
    Success,
}

fn details_complete(fields: &FieldMap) -> bool {
    !field_or_empty(fields, NAME).trim().is_empty()
        && CardNetwork::parse(field_or_empty(fields, NETWORK)).is_some()
}

pub static CREATE_CARD: FlowDefinition<CardStep> = FlowDefinition {
    name: "create-card",
    steps: &[
        StepDef::commit(CardStep::Details, details_complete),
        StepDef::terminal(CardStep::Success),
    ],
};

/// Start the flow with the Visa network preselected
pub fn start(settler: Arc<dyn Settler>) -> Wizard<CardStep> {
    let wizard = Wizard::new(&CREATE_CARD, settler);
    wizard.set_field(NETWORK, CardNetwork::Visa.id());
    wizard
}

/// Commit the card details, reporting a blank name as an error notice
pub fn submit(wizard: &Wizard<CardStep>, notices: &NoticeDispatcher) -> Transition<CardStep> {
    let transition = wizard.commit();
    if transition == Transition::Ignored(Rejection::GuardFailed)
        && field_or_empty(&wizard.fields(), NAME).trim().is_empty()
    {
        notices.show(MISSING_NAME_MESSAGE, Severity::Error);
    }
    transition
}

/// The card the flow will issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRequest {
    pub name: String,
    pub network: CardNetwork,
}

impl CardRequest {
    pub fn from_fields(fields: &FieldMap) -> Option<Self> {
        let name = field_or_empty(fields, NAME).trim();
        let network = CardNetwork::parse(field_or_empty(fields, NETWORK))?;
        (!name.is_empty()).then(|| Self {
            name: name.to_string(),
            network,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::Notice;
    use crate::wizard::DelaySettler;
    use std::time::Duration;

    const ISSUE: Duration = Duration::from_millis(2000);

    fn wizard() -> Wizard<CardStep> {
        start(Arc::new(DelaySettler::new(ISSUE)))
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_name_shows_error_notice() {
        let notices = NoticeDispatcher::default();
        let w = wizard();
        w.set_field(NAME, "   ");

        assert_eq!(
            submit(&w, &notices),
            Transition::Ignored(Rejection::GuardFailed)
        );
        assert_eq!(notices.current(), Some(Notice::error(MISSING_NAME_MESSAGE)));
        assert_eq!(w.current_step(), CardStep::Details);
    }

    #[tokio::test(start_paused = true)]
    async fn test_card_issued_after_delay() {
        let notices = NoticeDispatcher::default();
        let w = wizard();
        w.set_field(NAME, "Marketing");
        w.set_field(NETWORK, "mastercard");

        let started = tokio::time::Instant::now();
        assert_eq!(submit(&w, &notices), Transition::SettlementStarted);
        let receipt = w.wait_for_settlement().await.unwrap();
        assert!(started.elapsed() >= ISSUE);
        assert_eq!(notices.current(), None);

        let request = CardRequest::from_fields(&receipt.fields).unwrap();
        assert_eq!(request.name, "Marketing");
        assert_eq!(request.network, CardNetwork::Mastercard);
    }

    #[test]
    fn test_request_requires_known_network() {
        let mut fields = FieldMap::new();
        fields.insert(NAME.into(), "Ops".into());
        fields.insert(NETWORK.into(), "amex".into());
        assert_eq!(CardRequest::from_fields(&fields), None);
        assert!(!details_complete(&fields));
    }
}
