//! Application-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add decoding and config context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("input is not valid JSON: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    #[error("input is empty")]
    EmptyInput,

    #[error("cannot read input: {context}")]
    Input {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("config error: {message}")]
    Config { message: String },
}

impl From<serde_json::Error> for ApplicationError {
    fn from(source: serde_json::Error) -> Self {
        Self::Decode { source }
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
