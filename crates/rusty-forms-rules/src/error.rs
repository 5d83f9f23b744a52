// File: src/error.rs
// Purpose: Error type shared by the form model, message tables and renderer

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while building a form model or rendering its rules
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("constraint name `{name}` does not start with `constraint.`")]
    MissingPrefix { name: String },

    #[error("constraint name `{name}` has nothing after the prefix")]
    EmptyConstraint { name: String },

    /// Neither the field-qualified nor the generic message key is defined
    #[error("no message for `{constraint}` on field `{field}` (tried {})", .tried.join(", "))]
    MissingMessage {
        field: String,
        constraint: String,
        tried: Vec<String>,
    },

    #[error("invalid messages entry on line {line}: `{content}`")]
    MessagesParse { line: usize, content: String },

    #[error("failed to read {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid form definition: {0}")]
    FormParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, RulesError>;
