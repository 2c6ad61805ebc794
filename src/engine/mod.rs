//! Navigation over a decision tree.
//!
//! # Key Concepts
//!
//! - **Engine**: pure operations `advance`, `go_back`, `restart` that take a
//!   [`WizardState`](crate::core::WizardState) and return the next one
//! - **Session**: a per-user handle that owns one state and an id
//! - **View**: what a renderer needs to draw the current step
//!
//! The engine never renders anything. Callers decide when to redraw.

mod error;
mod session;
mod view;
mod wizard;

pub use error::WizardError;
pub use session::Session;
pub use view::StepView;
pub use wizard::WizardEngine;
