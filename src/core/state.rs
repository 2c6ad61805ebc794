//! The per-session wizard state.
//!
//! A `WizardState` is an immutable value: the engine consumes a reference
//! to one and returns the next. Nothing in it is shared between sessions.

use super::history::{NavigationHistory, StepTransition};
use super::step::{ChoiceId, StepId};
use chrono::Utc;
use serde::Serialize;

/// Current position in a decision tree plus the way back.
///
/// States are only produced by [`WizardEngine`](crate::engine::WizardEngine),
/// so `current` always names a step of the engine's tree.
///
/// # Example
///
/// ```rust
/// use csdm_wizard::catalog;
/// use csdm_wizard::engine::WizardEngine;
///
/// let engine = WizardEngine::new(catalog::csdm_v4());
/// let state = engine.start();
///
/// assert_eq!(state.current(), "start");
/// assert!(!state.can_go_back());
/// ```
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct WizardState {
    current: StepId,
    history: NavigationHistory,
}

impl WizardState {
    /// Fresh state positioned at `start` with an empty history.
    pub(crate) fn at(start: StepId) -> Self {
        Self {
            current: start,
            history: NavigationHistory::new(),
        }
    }

    /// The step currently displayed.
    pub fn current(&self) -> &StepId {
        &self.current
    }

    /// The back-stack of answered questions.
    pub fn history(&self) -> &NavigationHistory {
        &self.history
    }

    /// Whether a "back" affordance should be offered.
    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Steps visited from the start up to and including the current step.
    ///
    /// A fresh state's path is just the start step.
    pub fn path(&self) -> Vec<&StepId> {
        let mut path = self.history.back_stack();
        path.push(&self.current);
        path
    }

    /// Number of answers on the back-stack.
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Move along an edge, pushing the current step onto the history.
    ///
    /// The caller has already checked that the edge exists.
    pub(crate) fn moved(&self, choice: ChoiceId, to: StepId) -> Self {
        let transition = StepTransition {
            from: self.current.clone(),
            choice,
            to: to.clone(),
            timestamp: Utc::now(),
        };
        Self {
            current: to,
            history: self.history.record(transition),
        }
    }

    /// Pop the last transition. An empty history yields an unchanged copy.
    pub(crate) fn rewound(&self) -> Self {
        match self.history.rewind() {
            Some((last, history)) => Self {
                current: last.from,
                history,
            },
            None => self.clone(),
        }
    }
}
