//! Catalog error types.
//!
//! All failure modes live in catalog construction: parsing board
//! definition files and resolving platform references. Identification
//! itself has no error states — an empty result is a valid outcome.

use std::path::PathBuf;

/// Errors that can occur while building or filtering the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A property line that is neither a comment nor a `key=value` pair.
    #[error("malformed property at line {line}: '{text}'")]
    MalformedLine { line: usize, text: String },

    /// A board definition without the mandatory `name` property.
    #[error("board '{board_id}' has no name property")]
    MissingBoardName { board_id: String },

    /// A definition file that failed to parse or validate.
    #[error("invalid definition file {path}: {detail}")]
    InvalidDefinition { path: PathBuf, detail: String },

    /// A malformed `PACKAGER:ARCH[@VERSION]` platform reference.
    #[error("invalid platform reference '{reference}': {detail}")]
    InvalidPlatformReference { reference: String, detail: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
