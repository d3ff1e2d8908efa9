//! Convert money between two currency balances

use std::sync::Arc;

use crate::catalog;
use crate::error::{VennError, VennResult};
use crate::models::{Currency, Money};
use crate::wizard::{FieldMap, FlowDefinition, Settler, StepDef, Transition, Wizard};

use super::{amount_is_positive, field_or_empty, AMOUNT};

pub const FROM: &str = "from";
pub const TO: &str = "to";

pub const DEFAULT_FROM: &str = "USD";
pub const DEFAULT_TO: &str = "CAD";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertStep {
    Amount,
    Success,
}

fn currency_field<'a>(fields: &'a FieldMap, name: &str, default: &'a str) -> &'a str {
    fields.get(name).map(String::as_str).unwrap_or(default)
}

fn ready_to_convert(fields: &FieldMap) -> bool {
    amount_is_positive(fields)
        && catalog::find_currency(currency_field(fields, FROM, DEFAULT_FROM)).is_ok()
        && catalog::find_currency(currency_field(fields, TO, DEFAULT_TO)).is_ok()
}

pub static CONVERT_MONEY: FlowDefinition<ConvertStep> = FlowDefinition {
    name: "convert-money",
    steps: &[
        StepDef::commit(ConvertStep::Amount, ready_to_convert),
        StepDef::terminal(ConvertStep::Success),
    ],
};

/// Start a conversion from USD to CAD
pub fn start(settler: Arc<dyn Settler>) -> Wizard<ConvertStep> {
    let wizard = Wizard::new(&CONVERT_MONEY, settler);
    wizard.set_field(FROM, DEFAULT_FROM);
    wizard.set_field(TO, DEFAULT_TO);
    wizard
}

/// Exchange the source and target currencies
pub fn swap(wizard: &Wizard<ConvertStep>) -> Transition<ConvertStep> {
    let from = wizard.field(FROM).unwrap_or_else(|| DEFAULT_FROM.to_string());
    let to = wizard.field(TO).unwrap_or_else(|| DEFAULT_TO.to_string());

    match wizard.set_field(FROM, to) {
        Transition::Updated => wizard.set_field(TO, from),
        ignored => ignored,
    }
}

/// The amounts shown before and after a conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionQuote {
    pub from: &'static Currency,
    pub to: &'static Currency,
    pub amount: Money,
    /// Units of `to` per unit of `from`
    pub rate: f64,
    pub converted: Money,
}

impl ConversionQuote {
    pub fn new(from: &'static Currency, to: &'static Currency, amount: Money) -> Self {
        Self {
            from,
            to,
            amount,
            rate: from.cross_rate(to),
            converted: from.convert(amount.as_major(), to),
        }
    }

    pub fn from_fields(fields: &FieldMap) -> VennResult<Self> {
        let from = catalog::find_currency(currency_field(fields, FROM, DEFAULT_FROM))?;
        let to = catalog::find_currency(currency_field(fields, TO, DEFAULT_TO))?;
        let amount = Money::from_input(field_or_empty(fields, AMOUNT))
            .ok_or_else(|| VennError::Validation("Enter an amount to convert".into()))?;
        Ok(Self::new(from, to, amount))
    }

    /// e.g. `1 USD = 1.3600 CAD`
    pub fn rate_line(&self) -> String {
        format!("1 {} = {:.4} {}", self.from.code, self.rate, self.to.code)
    }
}
