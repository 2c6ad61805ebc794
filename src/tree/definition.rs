//! Serializable decision tree definitions.
//!
//! A `TreeDefinition` is the content-store format: it is what the built-in
//! catalog produces and what JSON tree files deserialize into. It is not
//! validated until it is built into a [`DecisionTree`](super::DecisionTree).

use super::content::{DomainCategory, ResultData};
use crate::core::{ChoiceId, StepId};
use serde::{Deserialize, Serialize};

/// Unvalidated description of a whole decision tree.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct TreeDefinition {
    /// Short machine name, e.g. "csdm-v4"
    pub name: String,
    /// Display title
    #[serde(default)]
    pub title: String,
    /// The step every session starts at
    pub start: StepId,
    #[serde(default)]
    pub questions: Vec<QuestionDef>,
    #[serde(default)]
    pub results: Vec<ResultDef>,
}

/// One question step and its outgoing choices.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct QuestionDef {
    pub id: StepId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub litmus_test: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
    pub choices: Vec<ChoiceDef>,
}

impl QuestionDef {
    /// Create a question with no choices yet.
    pub fn new(id: impl Into<StepId>, prompt: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            heading: None,
            prompt: prompt.into(),
            definition: None,
            litmus_test: None,
            examples: Vec::new(),
            choices: Vec::new(),
        }
    }

    /// Set the short heading shown above the prompt.
    pub fn heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    /// Set the explanatory text.
    pub fn definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = Some(definition.into());
        self
    }

    /// Set the litmus test that helps answer the question.
    pub fn litmus_test(mut self, test: impl Into<String>) -> Self {
        self.litmus_test = Some(test.into());
        self
    }

    /// Set example items that fit this question.
    pub fn examples<I, T>(mut self, examples: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.examples = examples.into_iter().map(Into::into).collect();
        self
    }

    /// Add a choice leading to `next`.
    pub fn choice(
        self,
        id: impl Into<ChoiceId>,
        label: impl Into<String>,
        next: impl Into<StepId>,
    ) -> Self {
        self.add_choice(ChoiceDef::new(id, label, next))
    }

    /// Add a pre-built choice.
    pub fn add_choice(mut self, choice: ChoiceDef) -> Self {
        self.choices.push(choice);
        self
    }
}

/// One outgoing edge of a question.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ChoiceDef {
    pub id: ChoiceId,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    pub next: StepId,
}

impl ChoiceDef {
    /// Create a choice leading to `next`.
    pub fn new(id: impl Into<ChoiceId>, label: impl Into<String>, next: impl Into<StepId>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            hint: None,
            next: next.into(),
        }
    }

    /// Set the hint shown next to the label.
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// One result step and its classification record.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ResultDef {
    pub id: StepId,
    #[serde(flatten)]
    pub data: ResultData,
}

impl ResultDef {
    /// Create a result with only a title and domain.
    pub fn new(id: impl Into<StepId>, title: impl Into<String>, domain: DomainCategory) -> Self {
        Self {
            id: id.into(),
            data: ResultData {
                title: title.into(),
                domain,
                definition: String::new(),
                examples: Vec::new(),
                naming_template: String::new(),
            },
        }
    }

    /// Set the definition of the class.
    pub fn definition(mut self, definition: impl Into<String>) -> Self {
        self.data.definition = definition.into();
        self
    }

    /// Set example records of this class.
    pub fn examples<I, T>(mut self, examples: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.data.examples = examples.into_iter().map(Into::into).collect();
        self
    }

    /// Set the naming convention for records of this class.
    pub fn naming_template(mut self, template: impl Into<String>) -> Self {
        self.data.naming_template = template.into();
        self
    }
}
