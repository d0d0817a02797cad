//! RangeValue pattern (IUIAutomationRangeValuePattern)
//!
//! Numeric value within a range. Values are passed through as `f64`
//! without clamping; range enforcement is the provider's business.

use uia_com::{marshal, HResult, Interface, Iid, RawUnknown};

use crate::error::Result;
use crate::patterns::AnyPattern;
use crate::{Pattern, PatternKind, PatternSlot};

/// IUIAutomationRangeValuePattern vtable
pub trait RawRangeValuePattern: RawUnknown {
    fn set_value(&self, value: f64) -> HResult;
    fn get_current_value(&self, out: &mut f64) -> HResult;
    fn get_current_is_read_only(&self, out: &mut i32) -> HResult;
    fn get_current_maximum(&self, out: &mut f64) -> HResult;
    fn get_current_minimum(&self, out: &mut f64) -> HResult;
    fn get_current_large_change(&self, out: &mut f64) -> HResult;
    fn get_current_small_change(&self, out: &mut f64) -> HResult;
}

impl Interface for dyn RawRangeValuePattern {
    const IID: Iid = PatternKind::RangeValue.iid();
}

/// Range value control pattern
#[derive(Debug)]
pub struct RangeValue {
    slot: PatternSlot<dyn RawRangeValuePattern>,
}

impl RangeValue {
    /// Current value
    pub fn value(&mut self) -> Result<f64> {
        let raw = self.slot.resolve()?.raw();
        Ok(marshal::call_out(|out| raw.get_current_value(out))?)
    }

    /// Set the value
    pub fn set_value(&mut self, value: f64) -> Result<()> {
        let raw = self.slot.resolve()?.raw();
        Ok(marshal::call(raw.set_value(value))?)
    }

    /// Minimum value
    pub fn minimum(&mut self) -> Result<f64> {
        let raw = self.slot.resolve()?.raw();
        Ok(marshal::call_out(|out| raw.get_current_minimum(out))?)
    }

    /// Maximum value
    pub fn maximum(&mut self) -> Result<f64> {
        let raw = self.slot.resolve()?.raw();
        Ok(marshal::call_out(|out| raw.get_current_maximum(out))?)
    }

    /// Step for small changes (arrow keys)
    pub fn small_change(&mut self) -> Result<f64> {
        let raw = self.slot.resolve()?.raw();
        Ok(marshal::call_out(|out| raw.get_current_small_change(out))?)
    }

    /// Step for large changes (page keys)
    pub fn large_change(&mut self) -> Result<f64> {
        let raw = self.slot.resolve()?.raw();
        Ok(marshal::call_out(|out| raw.get_current_large_change(out))?)
    }

    /// Whether the value is read-only
    pub fn is_read_only(&mut self) -> Result<bool> {
        let raw = self.slot.resolve()?.raw();
        Ok(marshal::call_bool(|out| raw.get_current_is_read_only(out))?)
    }
}

impl Pattern for RangeValue {
    type Raw = dyn RawRangeValuePattern;
    const KIND: PatternKind = PatternKind::RangeValue;

    fn from_slot(slot: PatternSlot<Self::Raw>) -> Self {
        Self { slot }
    }

    fn slot(&self) -> &PatternSlot<Self::Raw> {
        &self.slot
    }

    fn slot_mut(&mut self) -> &mut PatternSlot<Self::Raw> {
        &mut self.slot
    }

    fn into_any(self) -> AnyPattern {
        AnyPattern::RangeValue(self)
    }

    fn from_any_mut(any: &mut AnyPattern) -> Option<&mut Self> {
        match any {
            AnyPattern::RangeValue(p) => Some(p),
            _ => None,
        }
    }
}
