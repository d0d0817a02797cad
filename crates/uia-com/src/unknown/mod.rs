//! IUnknown contract and interface pointers
//!
//! The foreign side speaks the IUnknown protocol:
//! - `add_ref` / `release` - manual reference counting
//! - `query_interface` - obtain another interface of the same object,
//!   written through an output slot
//!
//! [`RawInterface`] is what a successful `query_interface` writes: one
//! counted reference that is released on drop unless it is turned into a
//! [`ForeignHandle`].

mod handle;

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use crate::types::{iid, ComError, HResult, Iid, Result};

pub use handle::ForeignHandle;

/// The IUnknown vtable as seen from Rust
///
/// Implementations follow the platform rules: `query_interface` writes a
/// pointer that already carries one reference for the caller, and writes
/// nothing when it fails.
pub trait RawUnknown {
    /// Increment the foreign reference count, returning the new count
    fn add_ref(&self) -> u32;

    /// Decrement the foreign reference count, returning the new count
    fn release(&self) -> u32;

    /// Ask the object for the interface named by `iid`
    fn query_interface(&self, iid: &Iid, out: &mut Option<RawInterface>) -> HResult;
}

/// A foreign contract with a fixed interface identity
///
/// Implemented on trait-object types (`dyn RawSomethingPattern`) so that a
/// handle's type names the contract it was queried for.
pub trait Interface: RawUnknown + 'static {
    /// Interface identity of this contract
    const IID: Iid;
}

impl Interface for dyn RawUnknown {
    const IID: Iid = iid::IUNKNOWN;
}

struct RawParts {
    unknown: Rc<dyn RawUnknown>,
    typed: Box<dyn Any>,
}

/// One counted interface pointer, not yet owned by a handle
///
/// Dropping a `RawInterface` releases its reference, so an interface written
/// by a query is released on every path that does not convert it.
pub struct RawInterface {
    iid: Iid,
    parts: Option<RawParts>,
}

impl RawInterface {
    /// Adopt a pointer whose reference has already been counted
    pub fn new<I>(typed: Rc<I>, unknown: Rc<dyn RawUnknown>) -> Self
    where
        I: ?Sized + Interface,
    {
        Self {
            iid: I::IID,
            parts: Some(RawParts {
                unknown,
                typed: Box::new(typed),
            }),
        }
    }

    /// Count a new reference and wrap the pointer
    pub fn acquire<I>(typed: Rc<I>, unknown: Rc<dyn RawUnknown>) -> Self
    where
        I: ?Sized + Interface,
    {
        unknown.add_ref();
        Self::new(typed, unknown)
    }

    /// Interface identity the pointer was written for
    pub fn iid(&self) -> Iid {
        self.iid
    }

    /// Take ownership of the reference as a typed handle
    ///
    /// Fails with [`ComError::InterfaceMismatch`] when the pointer was not
    /// written for `I`; the reference is released in that case.
    pub fn into_handle<I>(mut self) -> Result<ForeignHandle<I>>
    where
        I: ?Sized + Interface,
    {
        if self.iid != I::IID {
            return Err(ComError::InterfaceMismatch { iid: I::IID });
        }

        let parts = self
            .parts
            .take()
            .ok_or_else(|| ComError::InvalidState("interface pointer already consumed".to_string()))?;

        match parts.typed.downcast::<Rc<I>>() {
            Ok(typed) => Ok(ForeignHandle::adopt(*typed, parts.unknown)),
            Err(typed) => {
                self.parts = Some(RawParts {
                    unknown: parts.unknown,
                    typed,
                });
                Err(ComError::InterfaceMismatch { iid: I::IID })
            }
        }
    }
}

impl Drop for RawInterface {
    fn drop(&mut self) {
        if let Some(parts) = self.parts.take() {
            let remaining = parts.unknown.release();
            tracing::trace!(iid = %self.iid, remaining, "released unclaimed interface pointer");
        }
    }
}

impl fmt::Debug for RawInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawInterface")
            .field("iid", &self.iid)
            .field("owned", &self.parts.is_some())
            .finish()
    }
}
