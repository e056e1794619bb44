use rd_core::CabId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FleetError {
    #[error("cab {0} is not registered")]
    CabNotFound(CabId),

    #[error("cab {0} is already registered")]
    DuplicateCab(CabId),
}

pub type FleetResult<T> = Result<T, FleetError>;
