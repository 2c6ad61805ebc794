//! Decision tree model, builder and validation.
//!
//! A [`DecisionTree`] is the immutable data a [`WizardEngine`](crate::engine::WizardEngine)
//! runs over: the start step, the transition table, and the static content
//! for every step. Trees are built from a [`TreeDefinition`], either through
//! the fluent [`DecisionTreeBuilder`] or by deserializing JSON.

pub mod builder;
pub mod content;
pub mod definition;
pub mod error;
pub mod table;
pub mod validation;

pub use builder::DecisionTreeBuilder;
pub use content::{ChoiceLabel, DomainCategory, QuestionContent, ResultData};
pub use definition::{ChoiceDef, QuestionDef, ResultDef, TreeDefinition};
pub use error::{BuildError, TableViolation};
pub use table::{Edge, TransitionTable};

use crate::core::StepId;
use std::collections::BTreeMap;
use stillwater::validation::Validation;

/// A validated, immutable decision tree.
///
/// Every edge target is a defined step, no step is both a question and a
/// result, and every step is reachable from the start.
#[derive(Clone, Debug)]
pub struct DecisionTree {
    name: String,
    title: String,
    start: StepId,
    table: TransitionTable,
    questions: BTreeMap<StepId, QuestionContent>,
    results: BTreeMap<StepId, ResultData>,
}

impl DecisionTree {
    /// Validate a definition and build the tree from it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use csdm_wizard::tree::{DecisionTree, DomainCategory, QuestionDef, ResultDef, TreeDefinition};
    ///
    /// let definition = TreeDefinition {
    ///     name: "tiny".to_string(),
    ///     title: String::new(),
    ///     start: "q".into(),
    ///     questions: vec![QuestionDef::new("q", "Is it abstract?")
    ///         .choice("yes", "Yes", "cap")
    ///         .choice("no", "No", "svc")],
    ///     results: vec![
    ///         ResultDef::new("cap", "Business Capability", DomainCategory::Design),
    ///         ResultDef::new("svc", "Business Service", DomainCategory::SellConsume),
    ///     ],
    /// };
    ///
    /// let tree = DecisionTree::from_definition(definition).unwrap();
    /// assert!(tree.is_terminal(&"cap".into()));
    /// assert!(tree.is_question(&"q".into()));
    /// ```
    pub fn from_definition(definition: TreeDefinition) -> Result<Self, BuildError> {
        if definition.questions.is_empty() {
            return Err(BuildError::NoQuestions);
        }

        if let Validation::Failure(errors) = validation::validate(&definition) {
            let violations: Vec<TableViolation> = errors.iter().cloned().collect();
            log::warn!(
                "Rejected decision tree '{}' with {} violation(s)",
                definition.name,
                violations.len()
            );
            return Err(BuildError::Invalid {
                name: definition.name,
                violations,
            });
        }

        let mut table = TransitionTable::default();
        let mut questions = BTreeMap::new();
        for question in definition.questions {
            let edges = question
                .choices
                .iter()
                .map(|c| Edge {
                    choice: c.id.clone(),
                    next: c.next.clone(),
                })
                .collect();
            table.insert(question.id.clone(), edges);

            let choices = question
                .choices
                .into_iter()
                .map(|c| ChoiceLabel {
                    choice: c.id,
                    label: c.label,
                    hint: c.hint,
                })
                .collect();
            questions.insert(
                question.id,
                QuestionContent {
                    heading: question.heading,
                    prompt: question.prompt,
                    definition: question.definition,
                    litmus_test: question.litmus_test,
                    examples: question.examples,
                    choices,
                },
            );
        }

        let results = definition
            .results
            .into_iter()
            .map(|r| (r.id, r.data))
            .collect();

        log::debug!(
            "Built decision tree '{}' with {} question(s)",
            definition.name,
            table.len()
        );

        Ok(Self {
            name: definition.name,
            title: definition.title,
            start: definition.start,
            table,
            questions,
            results,
        })
    }

    /// Catalog name of the tree.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display title; may be empty.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The designated start step.
    pub fn start(&self) -> &StepId {
        &self.start
    }

    /// The transition table over question steps.
    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    /// True iff `step` is a result (terminal) step.
    pub fn is_terminal(&self, step: &StepId) -> bool {
        self.results.contains_key(step)
    }

    /// True iff `step` is a question step.
    pub fn is_question(&self, step: &StepId) -> bool {
        self.table.contains(step)
    }

    /// True iff `step` is defined at all.
    pub fn contains(&self, step: &StepId) -> bool {
        self.is_question(step) || self.is_terminal(step)
    }

    /// Content for a question step.
    pub fn question(&self, step: &StepId) -> Option<&QuestionContent> {
        self.questions.get(step)
    }

    /// Classification record for a result step.
    pub fn result(&self, step: &StepId) -> Option<&ResultData> {
        self.results.get(step)
    }

    /// All result steps with their records.
    pub fn results(&self) -> impl Iterator<Item = (&StepId, &ResultData)> {
        self.results.iter()
    }

    /// Total number of steps.
    pub fn len(&self) -> usize {
        self.table.len() + self.results.len()
    }

    /// Whether the tree defines no steps.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ChoiceId;

    fn definition() -> TreeDefinition {
        TreeDefinition {
            name: "sample".to_string(),
            title: "Sample".to_string(),
            start: StepId::from("start"),
            questions: vec![
                QuestionDef::new("start", "Is this a High-Level Business Ability?")
                    .choice("yes", "Yes, it's a Business Ability", "res_bus_cap")
                    .choice("no", "No, it's something else", "check_container"),
                QuestionDef::new("check_container", "Is this just a Folder or Container?")
                    .choice("yes", "Yes, it's a Portfolio/Container", "res_svc_port")
                    .choice("no", "No, continue", "res_bus_svc"),
            ],
            results: vec![
                ResultDef::new("res_bus_cap", "Business Capability", DomainCategory::Design),
                ResultDef::new("res_svc_port", "Service Portfolio", DomainCategory::SellConsume),
                ResultDef::new("res_bus_svc", "Business Service", DomainCategory::SellConsume),
            ],
        }
    }

    #[test]
    fn builds_table_and_content() {
        let tree = DecisionTree::from_definition(definition()).unwrap();

        assert_eq!(tree.name(), "sample");
        assert_eq!(tree.start(), "start");
        assert_eq!(tree.len(), 5);
        assert_eq!(
            tree.table()
                .next(&StepId::from("start"), &ChoiceId::NO)
                .unwrap(),
            "check_container"
        );

        let content = tree.question(&StepId::from("check_container")).unwrap();
        assert_eq!(content.choices[0].label, "Yes, it's a Portfolio/Container");
        assert_eq!(
            tree.result(&StepId::from("res_svc_port")).unwrap().title,
            "Service Portfolio"
        );
    }

    #[test]
    fn questions_and_results_are_disjoint() {
        let tree = DecisionTree::from_definition(definition()).unwrap();

        for step in tree.table().steps() {
            assert!(!tree.is_terminal(step));
        }
        for (step, _) in tree.results() {
            assert!(!tree.is_question(step));
        }
    }

    #[test]
    fn empty_definition_is_rejected() {
        let mut definition = definition();
        definition.questions.clear();

        assert!(matches!(
            DecisionTree::from_definition(definition),
            Err(BuildError::NoQuestions)
        ));
    }

    #[test]
    fn invalid_definition_reports_violations() {
        let mut definition = definition();
        definition.results.pop();

        match DecisionTree::from_definition(definition) {
            Err(BuildError::Invalid { name, violations }) => {
                assert_eq!(name, "sample");
                assert_eq!(
                    violations,
                    vec![TableViolation::DanglingTarget {
                        step: StepId::from("check_container"),
                        choice: ChoiceId::NO,
                        target: StepId::from("res_bus_svc"),
                    }]
                );
            }
            other => panic!("Expected Invalid, got {other:?}"),
        }
    }
}
