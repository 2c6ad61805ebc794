//! Built-in decision trees and JSON tree loading.
//!
//! Every tree runs on the same engine; variants differ only in data.
//! A [`CatalogSource`] names where a tree comes from:
//!
//! - `builtin:<name>` for a tree shipped with the crate
//! - anything else is a path to a JSON [`TreeDefinition`] file
//!
//! # Example
//!
//! ```rust
//! use csdm_wizard::catalog::{self, CatalogSource};
//!
//! let source: CatalogSource = "builtin:csdm-v4-express".parse().unwrap();
//! let tree = source.load().unwrap();
//! assert_eq!(tree.name(), "csdm-v4-express");
//!
//! let tree = catalog::from_json_str(r#"{
//!     "name": "tiny",
//!     "start": "q",
//!     "questions": [{"id": "q", "prompt": "Abstract?", "choices": [
//!         {"id": "yes", "label": "Yes", "next": "cap"},
//!         {"id": "no", "label": "No", "next": "svc"}
//!     ]}],
//!     "results": [
//!         {"id": "cap", "title": "Business Capability", "domain": "design"},
//!         {"id": "svc", "title": "Business Service", "domain": "sell_consume"}
//!     ]
//! }"#).unwrap();
//! assert_eq!(tree.len(), 3);
//! ```

pub mod csdm;
pub mod error;

pub use csdm::{CSDM_V4, CSDM_V4_EXPRESS};
pub use error::CatalogError;

use crate::tree::{DecisionTree, TreeDefinition};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Names of all built-in trees.
pub const BUILTIN: &[&str] = &[CSDM_V4, CSDM_V4_EXPRESS];

const BUILTIN_PREFIX: &str = "builtin:";

/// The definition of a built-in tree.
pub fn builtin_definition(name: &str) -> Result<TreeDefinition, CatalogError> {
    match name {
        CSDM_V4 => Ok(csdm::csdm_v4_definition()),
        CSDM_V4_EXPRESS => Ok(csdm::csdm_v4_express_definition()),
        _ => Err(CatalogError::UnknownCatalog {
            name: name.to_string(),
            available: BUILTIN.join(", "),
        }),
    }
}

/// Build a built-in tree by name.
pub fn builtin(name: &str) -> Result<DecisionTree, CatalogError> {
    let tree = DecisionTree::from_definition(builtin_definition(name)?)?;
    log::info!("Loaded built-in decision tree '{}'", name);
    Ok(tree)
}

/// The full CSDM v4 tree.
pub fn csdm_v4() -> DecisionTree {
    DecisionTree::from_definition(csdm::csdm_v4_definition())
        .expect("Built-in CSDM v4 tree should always build")
}

/// The three-way express variant of the CSDM v4 tree.
pub fn csdm_v4_express() -> DecisionTree {
    DecisionTree::from_definition(csdm::csdm_v4_express_definition())
        .expect("Built-in CSDM v4 express tree should always build")
}

/// Parse and build a tree from JSON text.
pub fn from_json_str(json: &str) -> Result<DecisionTree, CatalogError> {
    let definition: TreeDefinition = serde_json::from_str(json)?;
    let tree = DecisionTree::from_definition(definition)?;
    log::info!("Loaded decision tree '{}'", tree.name());
    Ok(tree)
}

/// Read, parse and build a tree from a JSON file.
pub fn from_path(path: impl AsRef<Path>) -> Result<DecisionTree, CatalogError> {
    let path = path.as_ref();
    log::debug!("Reading decision tree file {}", path.display());
    let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    from_json_str(&json)
}

/// Where a decision tree is loaded from.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum CatalogSource {
    /// A tree shipped with the crate
    Builtin(String),
    /// A JSON definition file
    File(PathBuf),
}

impl CatalogSource {
    /// Load and validate the tree.
    pub fn load(&self) -> Result<DecisionTree, CatalogError> {
        match self {
            Self::Builtin(name) => builtin(name),
            Self::File(path) => from_path(path),
        }
    }
}

impl Default for CatalogSource {
    fn default() -> Self {
        Self::Builtin(CSDM_V4.to_string())
    }
}

impl FromStr for CatalogSource {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(CatalogError::InvalidSource(s.to_string()));
        }
        match s.strip_prefix(BUILTIN_PREFIX) {
            Some("") => Err(CatalogError::InvalidSource(s.to_string())),
            Some(name) => Ok(Self::Builtin(name.to_string())),
            None => Ok(Self::File(PathBuf::from(s))),
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin(name) => write!(f, "{BUILTIN_PREFIX}{name}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
