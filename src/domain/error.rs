//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent failures of the key-path build itself.
/// These are independent of input decoding and I/O concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("no root name found")]
    MissingRootName,

    #[error("cyclic precomp reference: {id}")]
    CyclicReference { id: String },

    #[error("document nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
