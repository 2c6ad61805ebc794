//! Identifiers for decision tree nodes and the edges between them.
//!
//! Steps and choices are addressed purely by identifier. They carry no
//! per-visit state, so a step revisited through a different path behaves
//! exactly like the first visit.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identifier of one node in a decision tree.
///
/// A step is either a *question* (it has outgoing choices) or a *result*
/// (it is terminal and carries classification data). The identifier alone
/// does not say which; ask the tree.
///
/// # Example
///
/// ```rust
/// use csdm_wizard::core::StepId;
///
/// let step = StepId::from("check_container");
/// assert_eq!(step.as_str(), "check_container");
/// assert_eq!(step, "check_container");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepId(String);

impl StepId {
    /// Create a step identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StepId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for StepId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&StepId> for StepId {
    fn from(id: &StepId) -> Self {
        id.clone()
    }
}

impl Borrow<str> for StepId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for StepId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for StepId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Identifier of one answer offered by a question step.
///
/// Most questions are strict yes/no, so `bool` converts to the choices
/// `"yes"` and `"no"`. Multi-way questions use their own identifiers.
///
/// # Example
///
/// ```rust
/// use csdm_wizard::core::ChoiceId;
///
/// assert_eq!(ChoiceId::from(true), ChoiceId::YES);
/// assert_eq!(ChoiceId::from(false).as_str(), "no");
/// assert_eq!(ChoiceId::from("it_team").as_str(), "it_team");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChoiceId(std::borrow::Cow<'static, str>);

impl ChoiceId {
    /// The affirmative answer of a yes/no question.
    pub const YES: ChoiceId = ChoiceId(std::borrow::Cow::Borrowed("yes"));

    /// The negative answer of a yes/no question.
    pub const NO: ChoiceId = ChoiceId(std::borrow::Cow::Borrowed("no"));

    /// Create a choice identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(std::borrow::Cow::Owned(id.into()))
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<bool> for ChoiceId {
    fn from(answer: bool) -> Self {
        if answer {
            Self::YES
        } else {
            Self::NO
        }
    }
}

impl From<&str> for ChoiceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ChoiceId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl From<&ChoiceId> for ChoiceId {
    fn from(id: &ChoiceId) -> Self {
        id.clone()
    }
}

impl PartialEq<str> for ChoiceId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ChoiceId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
