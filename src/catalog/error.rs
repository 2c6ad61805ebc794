//! Catalog error types.

use crate::tree::BuildError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a decision tree.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Tree file could not be read
    #[error("Failed to read tree file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Tree JSON did not match the definition format
    #[error("Failed to parse tree definition: {0}")]
    Parse(#[from] serde_json::Error),

    /// Definition parsed but is not a valid tree
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("Unknown built-in tree '{name}', available: {available}")]
    UnknownCatalog { name: String, available: String },

    #[error("Invalid tree source '{0}'")]
    InvalidSource(String),
}
