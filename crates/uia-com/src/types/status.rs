//! Native call status codes
//!
//! Every foreign call returns a 32-bit status. Zero is success; every other
//! value is a failure reason. `S_FALSE` and the other positive codes that the
//! platform's `SUCCEEDED` macro would accept are deliberately treated as
//! failures by [`HResult::ok`], since no pattern call in this layer defines a
//! meaning for them.

use std::fmt;

use crate::types::{ComError, Result};

/// Status code returned by a foreign call
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HResult(pub i32);

impl HResult {
    /// Create from the unsigned form used in documentation (`0x8000_4002`)
    pub const fn from_u32(code: u32) -> Self {
        Self(code as i32)
    }

    /// Get the signed status value
    pub const fn code(self) -> i32 {
        self.0
    }

    /// Get the unsigned status value
    pub const fn as_u32(self) -> u32 {
        self.0 as u32
    }

    /// True only for `S_OK`
    pub const fn is_ok(self) -> bool {
        self.0 == 0
    }

    /// The platform's `SUCCEEDED` test (severity bit clear)
    pub const fn succeeded(self) -> bool {
        self.0 >= 0
    }

    /// Facility field (bits 16..=26)
    pub const fn facility(self) -> u16 {
        ((self.as_u32() >> 16) & 0x1fff) as u16
    }

    /// Convert into a typed outcome
    pub fn ok(self) -> Result<()> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(ComError::ForeignCallFailed(self))
        }
    }

    /// Well-known symbolic name, if any
    pub fn name(self) -> Option<&'static str> {
        let name = match self {
            hresult::S_OK => "S_OK",
            hresult::S_FALSE => "S_FALSE",
            hresult::E_NOTIMPL => "E_NOTIMPL",
            hresult::E_NOINTERFACE => "E_NOINTERFACE",
            hresult::E_POINTER => "E_POINTER",
            hresult::E_FAIL => "E_FAIL",
            hresult::E_UNEXPECTED => "E_UNEXPECTED",
            hresult::E_ACCESSDENIED => "E_ACCESSDENIED",
            hresult::E_OUTOFMEMORY => "E_OUTOFMEMORY",
            hresult::E_INVALIDARG => "E_INVALIDARG",
            hresult::CO_E_NOTINITIALIZED => "CO_E_NOTINITIALIZED",
            hresult::RPC_E_CHANGED_MODE => "RPC_E_CHANGED_MODE",
            hresult::RPC_E_DISCONNECTED => "RPC_E_DISCONNECTED",
            hresult::UIA_E_ELEMENTNOTENABLED => "UIA_E_ELEMENTNOTENABLED",
            hresult::UIA_E_ELEMENTNOTAVAILABLE => "UIA_E_ELEMENTNOTAVAILABLE",
            hresult::UIA_E_NOCLICKABLEPOINT => "UIA_E_NOCLICKABLEPOINT",
            hresult::UIA_E_PROXYASSEMBLYNOTLOADED => "UIA_E_PROXYASSEMBLYNOTLOADED",
            hresult::UIA_E_NOTSUPPORTED => "UIA_E_NOTSUPPORTED",
            hresult::UIA_E_INVALIDOPERATION => "UIA_E_INVALIDOPERATION",
            hresult::UIA_E_TIMEOUT => "UIA_E_TIMEOUT",
            _ => return None,
        };
        Some(name)
    }
}

impl From<i32> for HResult {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

impl fmt::Debug for HResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HRESULT({})", self)
    }
}

impl fmt::Display for HResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "0x{:08x} ({})", self.as_u32(), name),
            None => write!(f, "0x{:08x}", self.as_u32()),
        }
    }
}

/// HRESULT codes used by COM and UI Automation
pub mod hresult {
    use super::HResult;

    /// Operation successful
    pub const S_OK: HResult = HResult::from_u32(0x00000000);
    /// Operation successful, returning false
    pub const S_FALSE: HResult = HResult::from_u32(0x00000001);
    /// Not implemented
    pub const E_NOTIMPL: HResult = HResult::from_u32(0x80004001);
    /// No such interface supported
    pub const E_NOINTERFACE: HResult = HResult::from_u32(0x80004002);
    /// Invalid pointer
    pub const E_POINTER: HResult = HResult::from_u32(0x80004003);
    /// Unspecified error
    pub const E_FAIL: HResult = HResult::from_u32(0x80004005);
    /// Catastrophic failure
    pub const E_UNEXPECTED: HResult = HResult::from_u32(0x8000FFFF);
    /// Access denied
    pub const E_ACCESSDENIED: HResult = HResult::from_u32(0x80070005);
    /// Out of memory
    pub const E_OUTOFMEMORY: HResult = HResult::from_u32(0x8007000E);
    /// Invalid argument
    pub const E_INVALIDARG: HResult = HResult::from_u32(0x80070057);
    /// COM has not been initialized on this thread
    pub const CO_E_NOTINITIALIZED: HResult = HResult::from_u32(0x800401F0);
    /// Thread already initialized with a different apartment model
    pub const RPC_E_CHANGED_MODE: HResult = HResult::from_u32(0x80010106);
    /// Object invoked has disconnected from its clients
    pub const RPC_E_DISCONNECTED: HResult = HResult::from_u32(0x80010108);
    /// Element is not enabled
    pub const UIA_E_ELEMENTNOTENABLED: HResult = HResult::from_u32(0x80040200);
    /// Element is no longer available
    pub const UIA_E_ELEMENTNOTAVAILABLE: HResult = HResult::from_u32(0x80040201);
    /// Element has no clickable point
    pub const UIA_E_NOCLICKABLEPOINT: HResult = HResult::from_u32(0x80040202);
    /// Proxy assembly could not be loaded
    pub const UIA_E_PROXYASSEMBLYNOTLOADED: HResult = HResult::from_u32(0x80040203);
    /// Operation is not supported by the provider
    pub const UIA_E_NOTSUPPORTED: HResult = HResult::from_u32(0x80040204);
    /// Operation is invalid for the element's current state
    pub const UIA_E_INVALIDOPERATION: HResult = HResult::from_u32(0x80131509);
    /// Provider did not respond in time
    pub const UIA_E_TIMEOUT: HResult = HResult::from_u32(0x80131505);
}
