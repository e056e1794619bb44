use rd_core::{CoreError, LocationCode};
use rd_fleet::FleetError;
use rd_graph::GraphError;
use thiserror::Error;

/// Reasons a request is refused or a dispatcher cannot be built.
///
/// "No cab available" is deliberately absent: it is an ordinary
/// [`DispatchOutcome`](crate::DispatchOutcome), not a failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("unknown location {0}")]
    UnknownLocation(LocationCode),

    #[error("pickup and drop-off are both {0}")]
    SameOriginDestination(LocationCode),

    #[error("invalid input: {0}")]
    Input(CoreError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("routing error: {0}")]
    Graph(GraphError),

    #[error("fleet error: {0}")]
    Fleet(#[from] FleetError),
}

impl From<CoreError> for DispatchError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::UnknownLocation(code) => DispatchError::UnknownLocation(code),
            CoreError::Config(msg) => DispatchError::Config(msg),
            other => DispatchError::Input(other),
        }
    }
}

impl From<GraphError> for DispatchError {
    fn from(e: GraphError) -> Self {
        match e {
            GraphError::UnknownLocation(code) => DispatchError::UnknownLocation(code),
            other => DispatchError::Graph(other),
        }
    }
}

pub type DispatchResult<T> = Result<T, DispatchError>;
