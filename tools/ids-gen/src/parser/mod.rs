//! Readers that turn an export (or a previously generated table) into an [`IdTable`]
//!
//! [`IdTable`]: crate::model::IdTable

pub mod header;
pub mod rust;

use thiserror::Error;

/// Errors produced while reading identifier sources
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: value {value} does not fit in 32 bits")]
    ValueOutOfRange { line: usize, value: String },

    #[error("line {line}: constant {name} is not inside a category namespace")]
    ConstantOutsideCategory { line: usize, name: String },

    #[error("line {line}: unexpected closing brace")]
    UnbalancedClose { line: usize },

    #[error("unterminated namespace {0}")]
    Unterminated(String),

    #[error("line {line}: unrecognized declaration: {text}")]
    Unrecognized { line: usize, text: String },

    #[error("{module}::{name}: {reason}")]
    InvalidConstant {
        module: String,
        name: String,
        reason: String,
    },

    #[error("failed to parse Rust source: {0}")]
    Syntax(#[from] syn::Error),
}
