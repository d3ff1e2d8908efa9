//! The wizard state machine

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::settler::{Receipt, SettlementRequest, Settler};
use super::step::{FieldMap, FlowDefinition, StepDef, StepId, StepKind};

/// Why a wizard ignored a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The current step does not offer this action
    WrongStep,
    /// The step's guard rejected the collected input
    GuardFailed,
    /// A settlement is in flight
    AlreadySettling,
    /// The wizard was finished or disposed
    Closed,
}

/// Result of a wizard action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition<S> {
    Moved { from: S, to: S },
    /// A field was written; the step did not change
    Updated,
    SettlementStarted,
    Ignored(Rejection),
}

impl<S> Transition<S> {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored(_))
    }
}

/// What a platform back press did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackAction {
    Retreated,
    /// The caller should leave the flow; the wizard is disposed
    LeaveFlow,
}

#[derive(Debug, Default)]
struct WizardState {
    cursor: usize,
    input: FieldMap,
    settling: bool,
    closed: bool,
    receipt: Option<Receipt>,
    pending: Option<JoinHandle<()>>,
}

impl WizardState {
    fn check_open(&self) -> Result<(), Rejection> {
        if self.closed {
            Err(Rejection::Closed)
        } else if self.settling {
            Err(Rejection::AlreadySettling)
        } else {
            Ok(())
        }
    }
}

/// A linear multi-step flow over a static [`FlowDefinition`]
///
/// Every action takes `&self`; a settlement runs as a Tokio task that writes
/// back into the shared state unless the wizard was disposed first.
pub struct Wizard<S: StepId> {
    flow: &'static FlowDefinition<S>,
    state: Arc<Mutex<WizardState>>,
    settler: Arc<dyn Settler>,
    cancel: CancellationToken,
}

impl<S: StepId> Wizard<S> {
    pub fn new(flow: &'static FlowDefinition<S>, settler: Arc<dyn Settler>) -> Self {
        debug_assert!(flow.is_well_formed(), "flow {} is malformed", flow.name);
        Self {
            flow,
            state: Arc::new(Mutex::new(WizardState::default())),
            settler,
            cancel: CancellationToken::new(),
        }
    }

    pub fn flow(&self) -> &'static FlowDefinition<S> {
        self.flow
    }

    fn lock(&self) -> MutexGuard<'_, WizardState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn step_at(&self, cursor: usize) -> &'static StepDef<S> {
        &self.flow.steps[cursor]
    }

    pub fn current_step(&self) -> S {
        self.step_at(self.lock().cursor).id
    }

    pub fn current_kind(&self) -> StepKind {
        self.step_at(self.lock().cursor).kind
    }

    /// True on the first step
    pub fn is_initial(&self) -> bool {
        self.lock().cursor == 0
    }

    pub fn is_terminal(&self) -> bool {
        self.step_at(self.lock().cursor).is_terminal()
    }

    pub fn is_settling(&self) -> bool {
        self.lock().settling
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    pub fn field(&self, name: &str) -> Option<String> {
        self.lock().input.get(name).cloned()
    }

    /// Snapshot of the collected input
    pub fn fields(&self) -> FieldMap {
        self.lock().input.clone()
    }

    pub fn receipt(&self) -> Option<Receipt> {
        self.lock().receipt.clone()
    }

    /// Whether the current step's guard accepts the collected input
    pub fn can_advance(&self) -> bool {
        let st = self.lock();
        let step = self.step_at(st.cursor);
        !st.closed && !st.settling && !step.is_terminal() && (step.guard)(&st.input)
    }

    fn move_to(&self, st: &mut WizardState, cursor: usize) -> Transition<S> {
        let from = self.step_at(st.cursor).id;
        let to = self.step_at(cursor).id;
        st.cursor = cursor;
        debug!(flow = self.flow.name, ?from, ?to, "Step changed");
        Transition::Moved { from, to }
    }

    /// Record a choice and move to the next step
    pub fn select_option(&self, value: &str) -> Transition<S> {
        let mut st = self.lock();
        if let Err(rejection) = st.check_open() {
            return Transition::Ignored(rejection);
        }

        let step = self.step_at(st.cursor);
        let StepKind::Choice { field } = step.kind else {
            return Transition::Ignored(Rejection::WrongStep);
        };
        if value.trim().is_empty() {
            return Transition::Ignored(Rejection::GuardFailed);
        }

        let previous = st.input.insert(field.to_string(), value.to_string());
        if !(step.guard)(&st.input) {
            match previous {
                Some(previous) => st.input.insert(field.to_string(), previous),
                None => st.input.remove(field),
            };
            return Transition::Ignored(Rejection::GuardFailed);
        }

        let next = st.cursor + 1;
        self.move_to(&mut st, next)
    }

    /// Write one field without changing step
    pub fn set_field(&self, name: &str, value: impl Into<String>) -> Transition<S> {
        let mut st = self.lock();
        if let Err(rejection) = st.check_open() {
            return Transition::Ignored(rejection);
        }
        if self.step_at(st.cursor).is_terminal() {
            return Transition::Ignored(Rejection::WrongStep);
        }

        st.input.insert(name.to_string(), value.into());
        Transition::Updated
    }

    /// Leave an entry step forward if its guard passes
    ///
    /// A failing guard is a silent no-op; there is no message to show.
    pub fn advance(&self) -> Transition<S> {
        let mut st = self.lock();
        if let Err(rejection) = st.check_open() {
            return Transition::Ignored(rejection);
        }

        let step = self.step_at(st.cursor);
        if step.kind != StepKind::Entry {
            return Transition::Ignored(Rejection::WrongStep);
        }
        if !(step.guard)(&st.input) {
            return Transition::Ignored(Rejection::GuardFailed);
        }

        let next = st.cursor + 1;
        self.move_to(&mut st, next)
    }

    /// Step back one; input already collected is kept
    pub fn retreat(&self) -> Transition<S> {
        let mut st = self.lock();
        self.retreat_locked(&mut st)
    }

    fn retreat_locked(&self, st: &mut WizardState) -> Transition<S> {
        if let Err(rejection) = st.check_open() {
            return Transition::Ignored(rejection);
        }
        if st.cursor == 0 || self.step_at(st.cursor).is_terminal() {
            return Transition::Ignored(Rejection::WrongStep);
        }

        let previous = st.cursor - 1;
        self.move_to(st, previous)
    }

    /// Start settlement of the collected input
    ///
    /// At most one settlement runs per visit to the commit step; further calls
    /// while it is in flight are ignored. Must be called within a Tokio runtime.
    pub fn commit(&self) -> Transition<S> {
        let mut st = self.lock();
        if let Err(rejection) = st.check_open() {
            return Transition::Ignored(rejection);
        }

        let step = self.step_at(st.cursor);
        if step.kind != StepKind::Commit {
            return Transition::Ignored(Rejection::WrongStep);
        }
        if !(step.guard)(&st.input) {
            return Transition::Ignored(Rejection::GuardFailed);
        }

        st.settling = true;
        let request = SettlementRequest {
            flow: self.flow.name,
            fields: st.input.clone(),
        };
        let next = st.cursor + 1;
        let flow = self.flow.name;
        let state = Arc::clone(&self.state);
        let settler = Arc::clone(&self.settler);
        let token = self.cancel.clone();
        info!(flow, "Settlement started");

        st.pending = Some(tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    debug!(flow, "Settlement abandoned");
                }
                receipt = settler.settle(request) => {
                    let mut st = state.lock().unwrap_or_else(PoisonError::into_inner);
                    if token.is_cancelled() || st.closed {
                        debug!(flow, "Discarding settlement for a disposed wizard");
                        return;
                    }
                    st.settling = false;
                    st.receipt = Some(receipt);
                    st.cursor = next;
                    info!(flow, "Settlement complete");
                }
            }
        }));

        Transition::SettlementStarted
    }

    /// Wait for an in-flight settlement, returning the receipt if one exists
    pub async fn wait_for_settlement(&self) -> Option<Receipt> {
        let pending = self.lock().pending.take();
        if let Some(handle) = pending {
            if let Err(e) = handle.await {
                warn!(flow = self.flow.name, error = %e, "Settlement task failed");
            }
        }
        self.receipt()
    }

    /// The terminal action: close the flow and discard its input
    ///
    /// Returns `None` unless the wizard is on its terminal step.
    pub fn finish(&self) -> Option<Receipt> {
        let mut st = self.lock();
        if st.closed || !self.step_at(st.cursor).is_terminal() {
            return None;
        }

        st.input.clear();
        st.closed = true;
        self.cancel.cancel();
        st.receipt.take()
    }

    /// Platform back control
    ///
    /// On the initial step, the terminal step, or while settling this leaves
    /// the flow and disposes the wizard; elsewhere it retreats.
    pub fn back(&self) -> BackAction {
        let mut st = self.lock();
        let leave = st.closed
            || st.settling
            || st.cursor == 0
            || self.step_at(st.cursor).is_terminal();

        if !leave && !self.retreat_locked(&mut st).is_ignored() {
            return BackAction::Retreated;
        }

        self.dispose_locked(&mut st);
        BackAction::LeaveFlow
    }

    /// Abandon the flow; a pending settlement will not be applied
    pub fn dispose(&self) {
        let mut st = self.lock();
        self.dispose_locked(&mut st);
    }

    fn dispose_locked(&self, st: &mut WizardState) {
        self.cancel.cancel();
        if !st.closed {
            debug!(flow = self.flow.name, settling = st.settling, "Wizard disposed");
        }
        st.closed = true;
        st.settling = false;
        st.input.clear();
    }
}

impl<S: StepId> Drop for Wizard<S> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
