//! CSDM Wizard: a decision-tree classification wizard engine
//!
//! The wizard asks a sequence of discrete-choice questions about an
//! organizational item and, based on the answered path, returns a static
//! classification: a label, its CSDM domain, a definition, examples and a
//! naming template.
//!
//! The core is pure. Operations take a [`WizardState`] and return the next
//! one; the caller decides when and how to render.
//!
//! # Core Concepts
//!
//! - **Tree**: immutable steps, transition table and content ([`tree`])
//! - **Engine**: `advance`, `go_back`, `restart` over a tree ([`engine`])
//! - **State**: current step plus a back-stack of answers ([`core`])
//! - **Catalog**: built-in CSDM trees and JSON loading ([`catalog`])
//!
//! # Example
//!
//! ```rust
//! use csdm_wizard::catalog;
//! use csdm_wizard::engine::WizardEngine;
//!
//! let engine = WizardEngine::new(catalog::csdm_v4());
//!
//! let state = engine.start();
//! let state = engine.advance(&state, "no").unwrap();
//! let state = engine.advance(&state, "yes").unwrap();
//!
//! assert!(engine.is_terminal(state.current()));
//! let result = engine.lookup_result(state.current()).unwrap();
//! assert_eq!(result.title, "Service Portfolio");
//! assert_eq!(result.naming_template, "[Department/Topic] Services");
//!
//! let state = engine.go_back(&state);
//! assert_eq!(state.current(), "check_container");
//! ```

pub mod catalog;
pub mod core;
pub mod engine;
pub mod tree;

// Re-export commonly used types
pub use crate::core::{ChoiceId, NavigationHistory, StepId, StepTransition, WizardState};
pub use crate::engine::{Session, StepView, WizardEngine, WizardError};
pub use crate::tree::{DecisionTree, DecisionTreeBuilder, DomainCategory, ResultData};
