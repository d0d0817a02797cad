//! Core COM boundary types
//!
//! - Identifiers: GUID / IID
//! - Status codes: HRESULT
//! - Strings: BSTR

mod bstr;
mod error;
mod guid;
mod status;

pub use bstr::Bstr;
pub use error::*;
pub use guid::{Guid, Iid};
pub use status::{hresult, HResult};

/// Well-known interface IDs of the COM base layer
pub mod iid {
    use super::Iid;

    /// IUnknown
    pub const IUNKNOWN: Iid = Iid::from_u128(0x00000000_0000_0000_c000_000000000046);
}
