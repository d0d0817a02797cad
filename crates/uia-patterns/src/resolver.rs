//! Pattern resolution
//!
//! Turns "does this element support pattern X" into either a bound pattern
//! or a recorded absence. `E_NOINTERFACE` from the query is the expected
//! "not supported" answer; every other failure status is an error.
//!
//! The query's output pointer is held by a [`uia_com::RawInterface`] until
//! it is converted into a handle, so it is released on every path that
//! does not hand it to a pattern.

use uia_com::{hresult, ComError, ForeignHandle, Interface};

use crate::error::Result;
use crate::Pattern;

/// Query `owner` for interface `I`
///
/// Returns `Ok(None)` when the object answers `E_NOINTERFACE`.
pub fn query<I, O>(owner: &ForeignHandle<O>) -> Result<Option<ForeignHandle<I>>>
where
    I: ?Sized + Interface,
    O: ?Sized + Interface,
{
    match owner.query::<I>() {
        Ok(handle) => {
            tracing::trace!(iid = %I::IID, "interface resolved");
            Ok(Some(handle))
        }
        Err(ComError::ForeignCallFailed(hr)) if hr == hresult::E_NOINTERFACE => {
            tracing::trace!(iid = %I::IID, "interface not supported");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Resolve pattern `P` from `owner`
///
/// On success the returned pattern is bound. When the owner does not
/// support the pattern it is returned unbound and marked unsupported, so
/// its operations fail with
/// [`PatternError::Unavailable`](crate::PatternError::Unavailable).
pub fn resolve<P, O>(owner: &ForeignHandle<O>) -> Result<P>
where
    P: Pattern,
    O: ?Sized + Interface,
{
    match query::<P::Raw, O>(owner)? {
        Some(handle) => {
            let mut pattern = P::new();
            pattern.bind(handle);
            Ok(pattern)
        }
        None => Ok(P::from_slot(crate::PatternSlot::unsupported(P::KIND))),
    }
}
