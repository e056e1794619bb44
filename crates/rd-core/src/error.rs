//! Shared error type.
//!
//! Sub-crates define their own error enums and either wrap `CoreError` as one
//! variant or convert it via `From`.

use thiserror::Error;

use crate::LocationCode;

/// Errors raised by `rd-core` validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown location {0}")]
    UnknownLocation(LocationCode),

    #[error("invalid location code {0:?}: expected a single character")]
    InvalidCode(String),

    #[error("location {0} is defined twice")]
    DuplicateLocation(LocationCode),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `rd-core`.
pub type CoreResult<T> = Result<T, CoreError>;
