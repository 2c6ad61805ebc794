//! Navigation errors.

use crate::core::{ChoiceId, StepId};
use thiserror::Error;

/// Errors that can occur while navigating a decision tree.
///
/// All of these are caller bugs: a renderer that only offers the choices
/// returned by the engine never triggers them.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum WizardError {
    #[error("No choice '{choice}' available from step '{step}'")]
    InvalidTransition { step: StepId, choice: ChoiceId },

    #[error("Step '{step}' is not a result step")]
    NotTerminal { step: StepId },

    #[error("Step '{step}' is not part of this decision tree")]
    UnknownStep { step: StepId },
}
