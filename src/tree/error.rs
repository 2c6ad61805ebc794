//! Errors raised while building a decision tree.

use crate::core::{ChoiceId, StepId};
use thiserror::Error;

/// A single structural defect in a tree definition.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TableViolation {
    #[error("Step '{step}' is defined more than once")]
    DuplicateStep { step: StepId },

    #[error("Start step '{step}' is not a defined question or result")]
    StartNotFound { step: StepId },

    #[error("Question '{step}' offers {count} choice(s), at least {min} required")]
    TooFewChoices {
        step: StepId,
        count: usize,
        min: usize,
    },

    #[error("Question '{step}' offers choice '{choice}' more than once")]
    DuplicateChoice { step: StepId, choice: ChoiceId },

    #[error("Choice '{choice}' of question '{step}' leads back to itself")]
    SelfLoop { step: StepId, choice: ChoiceId },

    #[error("Choice '{choice}' of question '{step}' leads to undefined step '{target}'")]
    DanglingTarget {
        step: StepId,
        choice: ChoiceId,
        target: StepId,
    },

    #[error("Step '{step}' cannot be reached from the start step")]
    Unreachable { step: StepId },

    #[error("No result step can be reached from start step '{start}'")]
    NoResultReachable { start: StepId },
}

/// Errors that can occur when building a decision tree.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Start step not specified. Call .start(step) before .build()")]
    MissingStartStep,

    #[error("No questions defined. Add at least one question")]
    NoQuestions,

    #[error("Decision tree '{name}' is invalid: {}", summarize(.violations))]
    Invalid {
        name: String,
        violations: Vec<TableViolation>,
    },
}

fn summarize(violations: &[TableViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
