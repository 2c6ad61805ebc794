//! Builder for constructing decision trees.

use crate::core::StepId;
use crate::tree::definition::{QuestionDef, ResultDef, TreeDefinition};
use crate::tree::error::BuildError;
use crate::tree::DecisionTree;

/// Builder for constructing decision trees with a fluent API.
///
/// # Example
///
/// ```
/// use csdm_wizard::tree::{DecisionTreeBuilder, DomainCategory, QuestionDef, ResultDef};
///
/// let tree = DecisionTreeBuilder::new("software")
///     .start("software_split")
///     .question(
///         QuestionDef::new("software_split", "Product or running instance?")
///             .choice("product", "It's the Product (Concept)", "res_bus_app")
///             .choice("instance", "It's the Running Instance", "res_app_svc"),
///     )
///     .result(ResultDef::new("res_bus_app", "Business Application", DomainCategory::Design))
///     .result(ResultDef::new(
///         "res_app_svc",
///         "Application Service",
///         DomainCategory::ManageTechnical,
///     ))
///     .build()
///     .unwrap();
///
/// assert_eq!(tree.len(), 3);
/// ```
pub struct DecisionTreeBuilder {
    name: String,
    title: String,
    start: Option<StepId>,
    questions: Vec<QuestionDef>,
    results: Vec<ResultDef>,
}

impl DecisionTreeBuilder {
    /// Create a new builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: String::new(),
            start: None,
            questions: Vec::new(),
            results: Vec::new(),
        }
    }

    /// Set the display title (optional).
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the start step (required).
    pub fn start(mut self, step: impl Into<StepId>) -> Self {
        self.start = Some(step.into());
        self
    }

    /// Add a question step.
    pub fn question(mut self, question: QuestionDef) -> Self {
        self.questions.push(question);
        self
    }

    /// Add a result step.
    pub fn result(mut self, result: ResultDef) -> Self {
        self.results.push(result);
        self
    }

    /// Add multiple result steps at once.
    pub fn results(mut self, results: impl IntoIterator<Item = ResultDef>) -> Self {
        self.results.extend(results);
        self
    }

    /// Produce the unvalidated definition.
    /// Returns an error if required fields are missing.
    pub fn definition(self) -> Result<TreeDefinition, BuildError> {
        let start = self.start.ok_or(BuildError::MissingStartStep)?;

        Ok(TreeDefinition {
            name: self.name,
            title: self.title,
            start,
            questions: self.questions,
            results: self.results,
        })
    }

    /// Build and validate the tree.
    pub fn build(self) -> Result<DecisionTree, BuildError> {
        DecisionTree::from_definition(self.definition()?)
    }
}
