//! COM boundary error types

use thiserror::Error;

use crate::types::{HResult, Iid};

/// Result type for COM boundary operations
pub type Result<T> = std::result::Result<T, ComError>;

/// Errors raised at the foreign call boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComError {
    /// A foreign call returned a non-success status
    #[error("foreign call failed: {0}")]
    ForeignCallFailed(HResult),

    /// A call reported success but wrote no interface pointer
    #[error("call succeeded without returning an interface for {iid}")]
    NullOutput { iid: Iid },

    /// The returned interface pointer does not have the requested shape
    #[error("interface pointer does not implement {iid}")]
    InterfaceMismatch { iid: Iid },

    /// Output data could not be converted
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Operation not valid in the current state
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// Native subsystem initialization failed
    #[error("runtime initialization failed: {0}")]
    RuntimeInit(HResult),
}

impl ComError {
    /// Status code carried by this error, if it came from a foreign call
    pub fn hresult(&self) -> Option<HResult> {
        match self {
            ComError::ForeignCallFailed(hr) | ComError::RuntimeInit(hr) => Some(*hr),
            _ => None,
        }
    }
}
