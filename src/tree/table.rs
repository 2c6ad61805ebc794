//! The transition table: (question step, choice) → next step.

use crate::core::{ChoiceId, StepId};
use serde::Serialize;
use std::collections::BTreeMap;

/// One outgoing edge of a question step.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct Edge {
    pub choice: ChoiceId,
    pub next: StepId,
}

/// Immutable mapping from question steps to their ordered edges.
///
/// Only question steps appear as keys; result steps have no edges.
#[derive(Clone, PartialEq, Debug, Default, Serialize)]
pub struct TransitionTable {
    edges: BTreeMap<StepId, Vec<Edge>>,
}

impl TransitionTable {
    pub(crate) fn insert(&mut self, step: StepId, edges: Vec<Edge>) {
        self.edges.insert(step, edges);
    }

    /// Look up the step a choice leads to.
    pub fn next(&self, step: &StepId, choice: &ChoiceId) -> Option<&StepId> {
        self.edges
            .get(step)?
            .iter()
            .find(|edge| &edge.choice == choice)
            .map(|edge| &edge.next)
    }

    /// Edges of a step in declaration order. Empty for unknown or result steps.
    pub fn edges(&self, step: &StepId) -> &[Edge] {
        self.edges.get(step).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `step` is a source step (a question).
    pub fn contains(&self, step: &StepId) -> bool {
        self.edges.contains_key(step)
    }

    /// All source steps.
    pub fn steps(&self) -> impl Iterator<Item = &StepId> {
        self.edges.keys()
    }

    /// Every (source, edge) pair.
    pub fn iter(&self) -> impl Iterator<Item = (&StepId, &Edge)> {
        self.edges
            .iter()
            .flat_map(|(step, edges)| edges.iter().map(move |edge| (step, edge)))
    }

    /// Number of source steps.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the table has no source steps.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
