//! Error types for the contract toolkit.
//!
//! # Design
//! Translation and matching never fail; a mismatch is a value, not an error.
//! Errors only come from the boundary: reading and writing persisted
//! schemas, encoding reports, and user-supplied mode strings. Filesystem
//! variants carry the path so callers can report which sibling failed and
//! carry on with the rest.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContractError {
    /// The validation mode was neither `consumer` nor `provider`.
    #[error("invalid mode '{0}': use 'consumer' or 'provider'")]
    InvalidMode(String),

    #[error("failed to serialize schema: {0}")]
    SerializationError(#[from] serde_yaml::Error),

    #[error("failed to parse schema {path}: {source}")]
    DeserializationError {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Two files in one directory share a stem, e.g. `x.yaml` and `x.yml`.
    #[error("duplicate schema '{name}' in {dir}")]
    DuplicateSchema { name: String, dir: PathBuf },

    #[error("failed to encode report: {0}")]
    ReportEncoding(#[from] serde_json::Error),
}
