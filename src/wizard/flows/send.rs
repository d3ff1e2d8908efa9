//! Send money: pick a beneficiary, enter an amount, confirm

use std::sync::Arc;

use crate::catalog;
use crate::error::{VennError, VennResult};
use crate::models::{Account, Beneficiary, Money};
use crate::wizard::{FieldMap, FlowDefinition, Settler, StepDef, Wizard};

use super::{amount_is_positive, field_or_empty, AMOUNT};

pub const RECIPIENT: &str = "recipient";
pub const NOTE: &str = "note";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendStep {
    Recipient,
    Amount,
    Confirm,
    Success,
}

/// Only catalog beneficiaries can be picked; a bare non-empty choice is not enough
fn recipient_known(fields: &FieldMap) -> bool {
    catalog::find_beneficiary(field_or_empty(fields, RECIPIENT)).is_ok()
}

fn ready_to_send(fields: &FieldMap) -> bool {
    recipient_known(fields) && amount_is_positive(fields)
}

pub static SEND_MONEY: FlowDefinition<SendStep> = FlowDefinition {
    name: "send-money",
    steps: &[
        StepDef::choice(SendStep::Recipient, RECIPIENT, recipient_known),
        StepDef::entry(SendStep::Amount, amount_is_positive),
        StepDef::commit(SendStep::Confirm, ready_to_send),
        StepDef::terminal(SendStep::Success),
    ],
};

pub fn start(settler: Arc<dyn Settler>) -> Wizard<SendStep> {
    Wizard::new(&SEND_MONEY, settler)
}

/// What the confirm and success screens show
#[derive(Debug, Clone)]
pub struct TransferSummary {
    pub beneficiary: &'static Beneficiary,
    pub from: &'static Account,
    pub amount: Money,
    pub fee: Money,
    pub note: Option<String>,
}

impl TransferSummary {
    pub fn from_fields(fields: &FieldMap) -> VennResult<Self> {
        let beneficiary = catalog::find_beneficiary(field_or_empty(fields, RECIPIENT))?;
        let amount = Money::from_input(field_or_empty(fields, AMOUNT))
            .ok_or_else(|| VennError::Validation("Enter an amount to send".into()))?;
        let note = fields
            .get(NOTE)
            .map(|n| n.trim())
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        Ok(Self {
            beneficiary,
            from: catalog::primary_account(),
            amount,
            fee: Money::zero(),
            note,
        })
    }

    pub fn total(&self) -> Money {
        self.amount + self.fee
    }
}
