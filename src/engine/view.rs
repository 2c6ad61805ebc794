//! Renderer-facing projection of the current step.

use crate::core::StepId;
use crate::tree::{QuestionContent, ResultData};
use serde::Serialize;

/// What a renderer should show for the current step.
#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepView<'a> {
    /// A question with its choices in display order
    Question {
        step: &'a StepId,
        content: &'a QuestionContent,
        can_go_back: bool,
    },

    /// A classification result
    Result {
        step: &'a StepId,
        data: &'a ResultData,
        can_go_back: bool,
    },
}

impl<'a> StepView<'a> {
    /// The step being shown.
    pub fn step(&self) -> &'a StepId {
        match self {
            Self::Question { step, .. } | Self::Result { step, .. } => *step,
        }
    }

    /// Whether a "back" affordance should be offered.
    pub fn can_go_back(&self) -> bool {
        match self {
            Self::Question { can_go_back, .. } | Self::Result { can_go_back, .. } => *can_go_back,
        }
    }

    /// True when this view shows a classification.
    pub fn is_result(&self) -> bool {
        matches!(self, Self::Result { .. })
    }

    /// The classification record, when this is a result.
    pub fn result(&self) -> Option<&'a ResultData> {
        match self {
            Self::Result { data, .. } => Some(*data),
            Self::Question { .. } => None,
        }
    }
}
