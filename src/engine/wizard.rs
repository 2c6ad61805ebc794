//! Wizard engine that navigates a decision tree.

use crate::core::{ChoiceId, StepId, WizardState};
use crate::engine::error::WizardError;
use crate::engine::view::StepView;
use crate::tree::{DecisionTree, Edge, ResultData};
use std::sync::Arc;

/// Stateless navigator over a shared, immutable decision tree.
///
/// Every operation takes the caller's [`WizardState`] by reference and
/// returns the next one; the engine itself never changes. Cloning an engine
/// only clones the `Arc` to the tree, so one engine can serve any number of
/// concurrent sessions.
#[derive(Clone, Debug)]
pub struct WizardEngine {
    tree: Arc<DecisionTree>,
}

impl WizardEngine {
    /// Create an engine owning `tree`.
    pub fn new(tree: DecisionTree) -> Self {
        Self::shared(Arc::new(tree))
    }

    /// Create an engine over an already shared tree.
    pub fn shared(tree: Arc<DecisionTree>) -> Self {
        Self { tree }
    }

    /// The tree being navigated.
    pub fn tree(&self) -> &DecisionTree {
        &self.tree
    }

    /// A fresh state at the start step (pure).
    pub fn start(&self) -> WizardState {
        WizardState::at(self.tree.start().clone())
    }

    /// Answer the current question.
    ///
    /// Pushes the current step onto the history and moves to the step the
    /// choice leads to. Fails with `InvalidTransition` when the current step
    /// offers no such choice; the given state is left as it was.
    ///
    /// # Example
    ///
    /// ```rust
    /// use csdm_wizard::catalog;
    /// use csdm_wizard::engine::{WizardEngine, WizardError};
    ///
    /// let engine = WizardEngine::new(catalog::csdm_v4());
    /// let state = engine.start();
    ///
    /// let next = engine.advance(&state, false).unwrap();
    /// assert_eq!(next.current(), "check_container");
    /// assert_eq!(next.depth(), 1);
    ///
    /// let err = engine.advance(&state, "maybe").unwrap_err();
    /// assert!(matches!(err, WizardError::InvalidTransition { .. }));
    /// ```
    pub fn advance(
        &self,
        state: &WizardState,
        choice: impl Into<ChoiceId>,
    ) -> Result<WizardState, WizardError> {
        let choice = choice.into();
        let current = self.ensure_known(state.current())?;

        let Some(next) = self.tree.table().next(current, &choice) else {
            log::warn!("Rejected choice '{}' at step '{}'", choice, current);
            return Err(WizardError::InvalidTransition {
                step: current.clone(),
                choice,
            });
        };

        log::debug!("Step '{}' --{}--> '{}'", current, choice, next);
        Ok(state.moved(choice, next.clone()))
    }

    /// Undo the last answer. With an empty history the state is returned unchanged.
    pub fn go_back(&self, state: &WizardState) -> WizardState {
        let previous = state.rewound();
        if state.can_go_back() {
            log::debug!("Back from '{}' to '{}'", state.current(), previous.current());
        }
        previous
    }

    /// Discard all progress and return to the start step.
    pub fn restart(&self, state: &WizardState) -> WizardState {
        log::debug!(
            "Restart from '{}' after {} answer(s)",
            state.current(),
            state.depth()
        );
        self.start()
    }

    /// True iff `step` is a result step.
    pub fn is_terminal(&self, step: &StepId) -> bool {
        self.tree.is_terminal(step)
    }

    /// The classification record of a result step.
    pub fn lookup_result(&self, step: &StepId) -> Result<&ResultData, WizardError> {
        self.tree
            .result(step)
            .ok_or_else(|| WizardError::NotTerminal { step: step.clone() })
    }

    /// Choices offered by a step, in display order. Empty for results.
    pub fn choices(&self, step: &StepId) -> &[Edge] {
        self.tree.table().edges(step)
    }

    /// What a renderer should show for `state`.
    pub fn view<'a>(&'a self, state: &'a WizardState) -> Result<StepView<'a>, WizardError> {
        let step = state.current();
        let can_go_back = state.can_go_back();

        if let Some(data) = self.tree.result(step) {
            return Ok(StepView::Result {
                step,
                data,
                can_go_back,
            });
        }

        match self.tree.question(step) {
            Some(content) => Ok(StepView::Question {
                step,
                content,
                can_go_back,
            }),
            None => Err(WizardError::UnknownStep { step: step.clone() }),
        }
    }

    /// Steps visited from the start up to the current step.
    pub fn path<'a>(&self, state: &'a WizardState) -> Vec<&'a StepId> {
        state.path()
    }

    fn ensure_known<'a>(&self, step: &'a StepId) -> Result<&'a StepId, WizardError> {
        if self.tree.contains(step) {
            Ok(step)
        } else {
            Err(WizardError::UnknownStep { step: step.clone() })
        }
    }
}
