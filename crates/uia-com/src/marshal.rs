//! Output-parameter marshaling
//!
//! Foreign calls report data by writing into output slots and report
//! failure only through the returned status. The helpers here are the one
//! place where a slot is read: each one runs the call, checks the status,
//! and hands the slot back only when the status is `S_OK`. On failure the
//! slot is dropped unread.

use crate::types::{Bstr, ComError, HResult, Iid, Result};
use crate::unknown::RawInterface;

/// Platform `BOOL` value meaning true
pub const TRUE: i32 = 1;

/// Check the status of a call with no outputs
pub fn call(hr: HResult) -> Result<()> {
    hr.ok()
}

/// Run a call with one output slot and return the slot on success
pub fn call_out<T, F>(f: F) -> Result<T>
where
    T: Default,
    F: FnOnce(&mut T) -> HResult,
{
    let mut slot = T::default();
    f(&mut slot).ok()?;
    Ok(slot)
}

/// Run a call that writes a platform `BOOL`
///
/// Only the exact value `1` is true. Any other value, including negative
/// or otherwise nonzero ones, is false.
pub fn call_bool<F>(f: F) -> Result<bool>
where
    F: FnOnce(&mut i32) -> HResult,
{
    call_out(f).map(bool_from_int)
}

/// Run a call that writes a UTF-16 string and convert it
pub fn call_string<F>(f: F) -> Result<String>
where
    F: FnOnce(&mut Bstr) -> HResult,
{
    call_out(f)?.to_string_checked()
}

/// Run a call that writes an interface pointer
///
/// A success status with an empty slot is reported as
/// [`ComError::NullOutput`]. On failure any pointer the callee wrote anyway
/// is released without being used.
pub fn call_interface<F>(iid: &Iid, f: F) -> Result<RawInterface>
where
    F: FnOnce(&mut Option<RawInterface>) -> HResult,
{
    call_out(f)?.ok_or(ComError::NullOutput { iid: *iid })
}

/// Platform `BOOL` to `bool` by exact comparison with [`TRUE`]
pub fn bool_from_int(value: i32) -> bool {
    value == TRUE
}

/// `bool` to platform `BOOL`
pub fn bool_to_int(value: bool) -> i32 {
    if value {
        TRUE
    } else {
        0
    }
}
