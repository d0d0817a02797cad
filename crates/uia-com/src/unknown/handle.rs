//! Owned foreign interface handles

use std::fmt;
use std::rc::Rc;

use super::{Interface, RawInterface, RawUnknown};
use crate::marshal;
use crate::types::Result;

/// Owned reference to a foreign object, typed by interface
///
/// A handle holds exactly one foreign reference. `Clone` counts a new one
/// with `add_ref`; `Drop` gives it back with `release`. There is no other
/// way to duplicate or discard a handle, so every acquire is paired with
/// exactly one release.
///
/// Handles are `!Send` and `!Sync`: the foreign reference is bound to the
/// thread that obtained it.
pub struct ForeignHandle<I: ?Sized + Interface> {
    ptr: Rc<I>,
    unknown: Rc<dyn RawUnknown>,
}

impl<I: ?Sized + Interface> ForeignHandle<I> {
    /// Adopt an already counted reference
    pub(crate) fn adopt(ptr: Rc<I>, unknown: Rc<dyn RawUnknown>) -> Self {
        Self { ptr, unknown }
    }

    /// Take ownership of a pointer written by a foreign call
    pub fn from_raw(raw: RawInterface) -> Result<Self> {
        raw.into_handle()
    }

    /// Borrow the typed vtable
    pub fn raw(&self) -> &I {
        &self.ptr
    }

    /// Interface identity of this handle
    pub fn iid(&self) -> crate::types::Iid {
        I::IID
    }

    /// Query the object for another interface
    ///
    /// `E_NOINTERFACE` and every other failure come back as
    /// [`ComError::ForeignCallFailed`](crate::ComError::ForeignCallFailed);
    /// deciding which ones are expected is up to the caller.
    pub fn query<J: ?Sized + Interface>(&self) -> Result<ForeignHandle<J>> {
        let raw = marshal::call_interface(&J::IID, |out| {
            self.ptr.query_interface(&J::IID, out)
        })?;
        raw.into_handle()
    }

    /// Counted IUnknown view of the same object
    pub fn to_unknown(&self) -> ForeignHandle<dyn RawUnknown> {
        self.unknown.add_ref();
        ForeignHandle {
            ptr: self.unknown.clone(),
            unknown: self.unknown.clone(),
        }
    }

    /// True if both handles refer to the same foreign object
    pub fn same_object<J: ?Sized + Interface>(&self, other: &ForeignHandle<J>) -> bool {
        std::ptr::eq(
            Rc::as_ptr(&self.unknown) as *const (),
            Rc::as_ptr(&other.unknown) as *const (),
        )
    }
}

impl<I: ?Sized + Interface> Clone for ForeignHandle<I> {
    fn clone(&self) -> Self {
        let count = self.unknown.add_ref();
        tracing::trace!(iid = %I::IID, count, "add_ref");
        Self {
            ptr: self.ptr.clone(),
            unknown: self.unknown.clone(),
        }
    }
}

impl<I: ?Sized + Interface> Drop for ForeignHandle<I> {
    fn drop(&mut self) {
        let remaining = self.unknown.release();
        tracing::trace!(iid = %I::IID, remaining, "release");
    }
}

impl<I: ?Sized + Interface> fmt::Debug for ForeignHandle<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForeignHandle")
            .field("iid", &I::IID)
            .field("object", &(Rc::as_ptr(&self.unknown) as *const ()))
            .finish()
    }
}
