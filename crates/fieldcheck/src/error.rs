use thiserror::Error;

use crate::value::FieldKind;

/// Configuration problems: a tag that cannot be evaluated against its field.
///
/// A value that merely violates a rule is not an error; it is recorded as a
/// message in the run's [`FailureSink`](crate::sink::FailureSink).
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Unknown rule: {0:?}")]
    UnknownRule(String),

    #[error("Rule already registered: {0}")]
    DuplicateRule(String),

    #[error("Unexpected type: rule '{rule}' cannot test a {kind} field")]
    UnexpectedType { rule: &'static str, kind: FieldKind },

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ValidationError>;
