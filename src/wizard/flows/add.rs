//! Add money: pick a funding method, then enter and submit an amount

use std::sync::Arc;

use crate::catalog::{self, FundingMethod};
use crate::error::{VennError, VennResult};
use crate::models::{Account, Money};
use crate::wizard::{FieldMap, FlowDefinition, Settler, StepDef, Wizard};

use super::{amount_is_positive, field_or_empty, AMOUNT};

pub const METHOD: &str = "method";
/// Target account ID; the primary account when unset
pub const ACCOUNT: &str = "account";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddStep {
    Method,
    Amount,
    Success,
}

/// Only listed funding methods can be picked; a bare non-empty choice is not enough
fn method_known(fields: &FieldMap) -> bool {
    catalog::find_funding_method(field_or_empty(fields, METHOD)).is_some()
}

pub static ADD_MONEY: FlowDefinition<AddStep> = FlowDefinition {
    name: "add-money",
    steps: &[
        StepDef::choice(AddStep::Method, METHOD, method_known),
        StepDef::commit(AddStep::Amount, amount_is_positive),
        StepDef::terminal(AddStep::Success),
    ],
};

pub fn start(settler: Arc<dyn Settler>) -> Wizard<AddStep> {
    Wizard::new(&ADD_MONEY, settler)
}

#[derive(Debug, Clone)]
pub struct DepositSummary {
    pub method: &'static FundingMethod,
    pub account: &'static Account,
    pub amount: Money,
}

impl DepositSummary {
    pub fn from_fields(fields: &FieldMap) -> VennResult<Self> {
        let method_id = field_or_empty(fields, METHOD);
        let method = catalog::find_funding_method(method_id).ok_or_else(|| VennError::NotFound {
            entity_type: "Funding method",
            identifier: method_id.to_string(),
        })?;
        let account = match fields.get(ACCOUNT) {
            Some(id) => catalog::find_account(id)?,
            None => catalog::primary_account(),
        };
        let amount = Money::from_input(field_or_empty(fields, AMOUNT))
            .ok_or_else(|| VennError::Validation("Enter an amount to deposit".into()))?;

        Ok(Self {
            method,
            account,
            amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::{BackAction, DelaySettler, Rejection, Transition};
    use std::time::Duration;

    fn wizard() -> Wizard<AddStep> {
        start(Arc::new(DelaySettler::new(Duration::from_millis(1500))))
    }

    #[test]
    fn test_method_must_exist() {
        let w = wizard();
        assert!(w.select_option("cheque").is_ignored());
        assert!(!w.select_option("interac").is_ignored());
        assert_eq!(w.current_step(), AddStep::Amount);
    }

    #[test]
    fn test_amount_step_commits_directly() {
        let w = wizard();
        w.select_option("bank");
        assert_eq!(w.advance(), Transition::Ignored(Rejection::WrongStep));
        w.set_field(AMOUNT, "0");
        assert_eq!(w.commit(), Transition::Ignored(Rejection::GuardFailed));
    }

    #[tokio::test(start_paused = true)]
    async fn test_deposit_into_primary_account() {
        let w = wizard();
        w.select_option("card");
        w.set_field(AMOUNT, "250");
        assert_eq!(w.commit(), Transition::SettlementStarted);

        let receipt = w.wait_for_settlement().await.unwrap();
        let summary = DepositSummary::from_fields(&receipt.fields).unwrap();
        assert_eq!(summary.method.label, "Debit Card");
        assert_eq!(summary.account.id, "1");
        assert_eq!(summary.amount, Money::from_cents(25000));
        assert_eq!(w.back(), BackAction::LeaveFlow);
    }

    #[test]
    fn test_explicit_account() {
        let mut fields = FieldMap::new();
        fields.insert(METHOD.into(), "bank".into());
        fields.insert(ACCOUNT.into(), "2".into());
        fields.insert(AMOUNT.into(), "10".into());
        assert_eq!(
            DepositSummary::from_fields(&fields).unwrap().account.currency,
            "CAD"
        );

        fields.insert(ACCOUNT.into(), "9".into());
        assert!(DepositSummary::from_fields(&fields)
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_back_from_amount_returns_to_method() {
        let w = wizard();
        w.select_option("bank");
        w.set_field(AMOUNT, "7");
        assert_eq!(w.back(), BackAction::Retreated);
        assert_eq!(w.current_step(), AddStep::Method);
        assert_eq!(w.field(AMOUNT).as_deref(), Some("7"));
    }
}
