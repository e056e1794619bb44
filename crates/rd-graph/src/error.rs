//! Graph-subsystem error type.

use thiserror::Error;

use rd_core::LocationCode;

/// Errors produced by `rd-graph`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("location {0} is not part of the road graph")]
    UnknownLocation(LocationCode),

    #[error("no route from {from} to {to}")]
    NoRoute { from: LocationCode, to: LocationCode },
}

pub type GraphResult<T> = Result<T, GraphError>;
