//! Static display content attached to steps.

use crate::core::ChoiceId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// CSDM domain a classification result belongs to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainCategory {
    /// Strategy and portfolio planning
    Design,
    /// Operational, technical service management
    ManageTechnical,
    /// What is offered to and consumed by users
    SellConsume,
    /// Shared reference data
    Foundation,
}

impl DomainCategory {
    /// Human-readable domain name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Design => "Design",
            Self::ManageTechnical => "Manage Technical",
            Self::SellConsume => "Sell/Consume",
            Self::Foundation => "Foundation",
        }
    }
}

impl fmt::Display for DomainCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classification record shown when a result step is reached.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ResultData {
    /// Classification label, e.g. "Business Capability"
    pub title: String,
    /// Domain the classification belongs to
    pub domain: DomainCategory,
    /// One-line definition
    #[serde(default)]
    pub definition: String,
    /// Illustrative examples
    #[serde(default)]
    pub examples: Vec<String>,
    /// Naming convention, e.g. "[Vendor] [Product Name]"
    #[serde(default)]
    pub naming_template: String,
}

/// Display label for one choice of a question.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct ChoiceLabel {
    pub choice: ChoiceId,
    pub label: String,
    /// Optional helper text shown next to the choice
    pub hint: Option<String>,
}

/// Prompt and helper text for a question step.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct QuestionContent {
    /// Section heading, e.g. "Step 2: The Container Check"
    pub heading: Option<String>,
    pub prompt: String,
    pub definition: Option<String>,
    /// A quick test the user can apply to decide
    pub litmus_test: Option<String>,
    pub examples: Vec<String>,
    /// Choice labels in edge order
    pub choices: Vec<ChoiceLabel>,
}

impl QuestionContent {
    /// Label for a choice, if the question offers it.
    pub fn label_for(&self, choice: &ChoiceId) -> Option<&ChoiceLabel> {
        self.choices.iter().find(|c| &c.choice == choice)
    }
}
