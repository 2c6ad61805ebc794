//! Structural checks for tree definitions using Validation.
//!
//! Every check runs and every defect is reported, so a content author sees
//! all problems in a tree file at once instead of fixing them one by one.

use super::definition::TreeDefinition;
use super::error::TableViolation;
use crate::core::StepId;
use std::collections::{HashMap, HashSet, VecDeque};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Fewest choices a question may offer.
pub const MIN_CHOICES: usize = 2;

type Check = Validation<(), NonEmptyVec<TableViolation>>;

fn check(violation: Option<TableViolation>) -> Check {
    match violation {
        Some(violation) => Validation::fail(violation),
        None => Validation::success(()),
    }
}

/// Run all structural checks against a definition.
/// Returns Validation::Failure with ALL violations if any fail.
pub fn validate(definition: &TreeDefinition) -> Validation<(), NonEmptyVec<TableViolation>> {
    let mut checks: Vec<Check> = Vec::new();

    let mut seen: HashSet<&StepId> = HashSet::new();
    let ids = definition
        .questions
        .iter()
        .map(|q| &q.id)
        .chain(definition.results.iter().map(|r| &r.id));
    for id in ids {
        let duplicate = !seen.insert(id);
        checks.push(check(duplicate.then(|| TableViolation::DuplicateStep {
            step: id.clone(),
        })));
    }

    let start_known = seen.contains(&definition.start);
    checks.push(check((!start_known).then(|| {
        TableViolation::StartNotFound {
            step: definition.start.clone(),
        }
    })));

    for question in &definition.questions {
        let count = question.choices.len();
        checks.push(check((count < MIN_CHOICES).then(|| {
            TableViolation::TooFewChoices {
                step: question.id.clone(),
                count,
                min: MIN_CHOICES,
            }
        })));

        let mut offered = HashSet::new();
        for choice in &question.choices {
            let repeated = !offered.insert(&choice.id);
            checks.push(check(repeated.then(|| TableViolation::DuplicateChoice {
                step: question.id.clone(),
                choice: choice.id.clone(),
            })));

            let self_loop = choice.next == question.id;
            checks.push(check(self_loop.then(|| TableViolation::SelfLoop {
                step: question.id.clone(),
                choice: choice.id.clone(),
            })));

            let dangling = !seen.contains(&choice.next);
            checks.push(check(dangling.then(|| TableViolation::DanglingTarget {
                step: question.id.clone(),
                choice: choice.id.clone(),
                target: choice.next.clone(),
            })));
        }
    }

    if start_known {
        let reachable = reachable_from(definition);
        for id in definition
            .questions
            .iter()
            .map(|q| &q.id)
            .chain(definition.results.iter().map(|r| &r.id))
        {
            checks.push(check((!reachable.contains(id)).then(|| {
                TableViolation::Unreachable { step: id.clone() }
            })));
        }

        let classifies = definition
            .results
            .iter()
            .any(|r| reachable.contains(&r.id));
        checks.push(check((!classifies).then(|| {
            TableViolation::NoResultReachable {
                start: definition.start.clone(),
            }
        })));
    }

    // Accumulate ALL failures using all_vec
    Validation::all_vec(checks).map(|_| ())
}

/// Collect the violations of a definition into a plain list.
pub fn violations(definition: &TreeDefinition) -> Vec<TableViolation> {
    match validate(definition) {
        Validation::Success(()) => Vec::new(),
        Validation::Failure(errors) => errors.iter().cloned().collect(),
    }
}

fn reachable_from(definition: &TreeDefinition) -> HashSet<&StepId> {
    let edges: HashMap<&StepId, Vec<&StepId>> = definition
        .questions
        .iter()
        .map(|q| (&q.id, q.choices.iter().map(|c| &c.next).collect()))
        .collect();

    let mut reached = HashSet::new();
    let mut queue = VecDeque::from([&definition.start]);
    while let Some(step) = queue.pop_front() {
        if !reached.insert(step) {
            continue;
        }
        if let Some(targets) = edges.get(step) {
            queue.extend(targets.iter().copied());
        }
    }
    reached
}
