//! Step and flow definitions

use std::collections::BTreeMap;
use std::fmt::Debug;

/// Input collected by a wizard, keyed by field name
pub type FieldMap = BTreeMap<String, String>;

/// Predicate a step must satisfy before it can be left forward
pub type Guard = fn(&FieldMap) -> bool;

/// Marker bound for a flow's step identifiers
pub trait StepId: Copy + Eq + Debug + Send + Sync + 'static {}

impl<T: Copy + Eq + Debug + Send + Sync + 'static> StepId for T {}

/// What a step asks of the user and how it is left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Picking an option records it in `field` and moves on
    Choice { field: &'static str },
    /// Fields are edited, then `advance` moves on
    Entry,
    /// The last step before settlement; left only through `commit`
    Commit,
    /// The end of the flow
    Terminal,
}

#[derive(Clone, Copy)]
pub struct StepDef<S> {
    pub id: S,
    pub kind: StepKind,
    pub guard: Guard,
}

fn always(_: &FieldMap) -> bool {
    true
}

impl<S: StepId> StepDef<S> {
    pub const fn choice(id: S, field: &'static str, guard: Guard) -> Self {
        Self {
            id,
            kind: StepKind::Choice { field },
            guard,
        }
    }

    pub const fn entry(id: S, guard: Guard) -> Self {
        Self {
            id,
            kind: StepKind::Entry,
            guard,
        }
    }

    pub const fn commit(id: S, guard: Guard) -> Self {
        Self {
            id,
            kind: StepKind::Commit,
            guard,
        }
    }

    pub const fn terminal(id: S) -> Self {
        Self {
            id,
            kind: StepKind::Terminal,
            guard: always,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.kind == StepKind::Terminal
    }
}

impl<S: Debug> Debug for StepDef<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepDef")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// An ordered list of steps ending in a terminal step
#[derive(Debug)]
pub struct FlowDefinition<S: 'static> {
    /// Stable name, carried on settlement receipts
    pub name: &'static str,
    pub steps: &'static [StepDef<S>],
}

impl<S: StepId> FlowDefinition<S> {
    pub fn position(&self, id: S) -> Option<usize> {
        self.steps.iter().position(|s| s.id == id)
    }

    /// Check the shape every flow relies on: a non-empty list with exactly one
    /// terminal step, at the end
    pub fn is_well_formed(&self) -> bool {
        match self.steps.split_last() {
            Some((last, rest)) => last.is_terminal() && !rest.iter().any(StepDef::is_terminal),
            None => false,
        }
    }
}
