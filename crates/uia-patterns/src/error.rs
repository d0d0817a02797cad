//! Pattern error types

use thiserror::Error;
use uia_com::{hresult, ComError, HResult};

use crate::PatternKind;

/// Result type for pattern operations
pub type Result<T> = std::result::Result<T, PatternError>;

/// Errors returned by pattern operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// Underlying foreign call error
    #[error("COM error: {0}")]
    Com(#[from] ComError),

    /// The element does not support this pattern
    #[error("{0} pattern is not supported by the element")]
    Unavailable(PatternKind),

    /// Operation invoked on a pattern that cannot be bound
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// A foreign enumeration value outside the known set
    #[error("invalid {name} value: {value}")]
    InvalidEnumValue { name: &'static str, value: i32 },
}

impl PatternError {
    /// Status code of the failed foreign call, if any
    pub fn hresult(&self) -> Option<HResult> {
        match self {
            PatternError::Com(e) => e.hresult(),
            _ => None,
        }
    }

    /// True when the foreign call failed with exactly `hr`
    pub fn is_hresult(&self, hr: HResult) -> bool {
        self.hresult() == Some(hr)
    }

    /// True when the element has gone away on the foreign side
    pub fn is_element_gone(&self) -> bool {
        self.is_hresult(hresult::UIA_E_ELEMENTNOTAVAILABLE)
            || self.is_hresult(hresult::RPC_E_DISCONNECTED)
    }
}
