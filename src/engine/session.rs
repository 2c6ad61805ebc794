//! Session-scoped handle around a wizard state.

use crate::core::{ChoiceId, WizardState};
use crate::engine::error::WizardError;
use crate::engine::view::StepView;
use crate::engine::wizard::WizardEngine;
use crate::tree::ResultData;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One user's walk through a decision tree.
///
/// A session owns its [`WizardState`] exclusively and replaces it after
/// each successful operation. Failed operations leave it untouched, so
/// [`restart`](Session::restart) is always a way back to a known state.
///
/// # Example
///
/// ```rust
/// use csdm_wizard::catalog;
/// use csdm_wizard::engine::{Session, WizardEngine};
///
/// let engine = WizardEngine::new(catalog::csdm_v4());
/// let mut session = Session::new(engine);
///
/// session.advance(false).unwrap();
/// session.advance(true).unwrap();
/// assert_eq!(session.result().unwrap().title, "Service Portfolio");
///
/// session.go_back();
/// assert_eq!(session.state().current(), "check_container");
/// assert!(session.result().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    id: Uuid,
    created_at: DateTime<Utc>,
    engine: WizardEngine,
    state: WizardState,
}

impl Session {
    /// Start a new session at the tree's start step.
    pub fn new(engine: WizardEngine) -> Self {
        let id = Uuid::new_v4();
        let state = engine.start();
        log::debug!("Session {} started on tree '{}'", id, engine.tree().name());
        Self {
            id,
            created_at: Utc::now(),
            engine,
            state,
        }
    }

    /// Unique identifier of this session.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// When the session was started.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// The engine this session navigates with.
    pub fn engine(&self) -> &WizardEngine {
        &self.engine
    }

    /// Current state (pure)
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Answer the current question.
    pub fn advance(&mut self, choice: impl Into<ChoiceId>) -> Result<&WizardState, WizardError> {
        let next = self.engine.advance(&self.state, choice).map_err(|e| {
            log::warn!("Session {}: {}", self.id, e);
            e
        })?;
        self.state = next;
        Ok(&self.state)
    }

    /// Undo the last answer; no-op at the start.
    pub fn go_back(&mut self) -> &WizardState {
        self.state = self.engine.go_back(&self.state);
        &self.state
    }

    /// Return to the start step with an empty history.
    pub fn restart(&mut self) -> &WizardState {
        log::debug!("Session {} restarted", self.id);
        self.state = self.engine.restart(&self.state);
        &self.state
    }

    /// What a renderer should show now.
    pub fn view(&self) -> Result<StepView<'_>, WizardError> {
        self.engine.view(&self.state)
    }

    /// The classification record, once a result step is reached.
    pub fn result(&self) -> Option<&ResultData> {
        self.engine.tree().result(self.state.current())
    }

    /// Whether the session has reached a result step.
    pub fn is_complete(&self) -> bool {
        self.engine.is_terminal(self.state.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use std::thread;

    #[test]
    fn sessions_get_distinct_ids() {
        let engine = WizardEngine::new(catalog::csdm_v4());
        let a = Session::new(engine.clone());
        let b = Session::new(engine);

        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn failed_advance_keeps_state() {
        let mut session = Session::new(WizardEngine::new(catalog::csdm_v4()));
        session.advance(false).unwrap();
        let before = session.state().clone();

        assert!(session.advance("product").is_err());
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn restart_recovers_from_any_state() {
        let mut session = Session::new(WizardEngine::new(catalog::csdm_v4()));
        session.advance(false).unwrap();
        session.advance(false).unwrap();
        session.advance(true).unwrap();

        let state = session.restart().clone();

        assert_eq!(state.current(), "start");
        assert!(!state.can_go_back());
        assert!(!session.is_complete());
    }

    #[test]
    fn independent_sessions_share_one_engine() {
        let engine = WizardEngine::new(catalog::csdm_v4());

        let handles: Vec<_> = [true, false]
            .into_iter()
            .map(|answer| {
                let engine = engine.clone();
                thread::spawn(move || {
                    let mut session = Session::new(engine);
                    session.advance(answer).unwrap();
                    session.state().current().clone()
                })
            })
            .collect();

        let finals: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(finals[0], "res_bus_cap");
        assert_eq!(finals[1], "check_container");
    }
}
