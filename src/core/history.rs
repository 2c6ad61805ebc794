//! Navigation history for the back button.
//!
//! The history is a back-stack of recorded transitions. Recording and
//! rewinding return new histories and leave the original untouched.

use super::step::{ChoiceId, StepId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single answered question.
///
/// # Example
///
/// ```rust
/// use csdm_wizard::core::{ChoiceId, StepId, StepTransition};
/// use chrono::Utc;
///
/// let transition = StepTransition {
///     from: StepId::from("start"),
///     choice: ChoiceId::NO,
///     to: StepId::from("check_container"),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.from, "start");
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct StepTransition {
    /// The question step that was answered
    pub from: StepId,
    /// The choice that was taken
    pub choice: ChoiceId,
    /// The step the choice led to
    pub to: StepId,
    /// When the answer was given
    pub timestamp: DateTime<Utc>,
}

/// Ordered back-stack of transitions.
///
/// The step to return to on "back" is the `from` of the most recent
/// transition.
///
/// # Example
///
/// ```rust
/// use csdm_wizard::core::{ChoiceId, NavigationHistory, StepId, StepTransition};
/// use chrono::Utc;
///
/// let history = NavigationHistory::new().record(StepTransition {
///     from: StepId::from("start"),
///     choice: ChoiceId::NO,
///     to: StepId::from("check_container"),
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.len(), 1);
/// assert_eq!(history.back_stack(), vec![&StepId::from("start")]);
///
/// let (popped, rewound) = history.rewind().unwrap();
/// assert_eq!(popped.to, "check_container");
/// assert!(rewound.is_empty());
/// ```
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct NavigationHistory {
    transitions: Vec<StepTransition>,
}

impl NavigationHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the transition added.
    pub fn record(&self, transition: StepTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Remove the most recent transition.
    ///
    /// Returns the removed transition and the shortened history, or `None`
    /// when there is nothing to go back to.
    pub fn rewind(&self) -> Option<(StepTransition, Self)> {
        let mut transitions = self.transitions.clone();
        let last = transitions.pop()?;
        Some((last, Self { transitions }))
    }

    /// The most recent transition, if any.
    pub fn last(&self) -> Option<&StepTransition> {
        self.transitions.last()
    }

    /// Steps that "back" would return to, oldest first.
    pub fn back_stack(&self) -> Vec<&StepId> {
        self.transitions.iter().map(|t| &t.from).collect()
    }

    /// Get all transitions in order.
    pub fn transitions(&self) -> &[StepTransition] {
        &self.transitions
    }

    /// Number of recorded transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Whether there is nothing to go back to.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
