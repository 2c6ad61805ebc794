//! Core wizard types.
//!
//! This module contains the pure values the engine works with:
//! - Step and choice identifiers
//! - The per-session `WizardState`
//! - Immutable navigation history used for "back"
//!
//! Nothing in this module performs I/O or holds shared mutable state.

mod history;
mod state;
mod step;

pub use history::{NavigationHistory, StepTransition};
pub use state::WizardState;
pub use step::{ChoiceId, StepId};
