//! Linear multi-step flows
//!
//! One generic state machine, [`Wizard`], drives every flow. A flow is a static
//! [`FlowDefinition`]: an ordered list of steps, each with a kind and a guard
//! over the collected input, ending in a terminal step. Committing hands the
//! input to a [`Settler`]; the result lands in the wizard only if it has not
//! been disposed in the meantime.
//!
//! # Example
//!
//! ```rust,ignore
//! let wizard = flows::send::start(Arc::new(DelaySettler::new(settings.settle_delay())));
//! wizard.select_option("Saud Aziz");
//! wizard.set_field(flows::AMOUNT, "150");
//! wizard.advance();
//! wizard.commit();
//! let receipt = wizard.wait_for_settlement().await;
//! ```

pub mod flows;
pub mod machine;
pub mod settler;
pub mod step;

pub use machine::{BackAction, Rejection, Transition, Wizard};
pub use settler::{DelaySettler, Receipt, SettlementRequest, Settler};
pub use step::{FieldMap, FlowDefinition, Guard, StepDef, StepId, StepKind};
