//! Value pattern (IUIAutomationValuePattern)
//!
//! String values travel as UTF-16. Reads are converted strictly: an
//! unpaired surrogate is an error, not a replacement character.

use uia_com::{marshal, Bstr, HResult, Interface, Iid, RawUnknown};

use crate::error::Result;
use crate::patterns::AnyPattern;
use crate::{Pattern, PatternKind, PatternSlot};

/// IUIAutomationValuePattern vtable
pub trait RawValuePattern: RawUnknown {
    fn set_value(&self, value: &Bstr) -> HResult;
    fn get_current_value(&self, out: &mut Bstr) -> HResult;
    fn get_current_is_read_only(&self, out: &mut i32) -> HResult;
}

impl Interface for dyn RawValuePattern {
    const IID: Iid = PatternKind::Value.iid();
}

/// Value control pattern (edit boxes, combo box text)
#[derive(Debug)]
pub struct Value {
    slot: PatternSlot<dyn RawValuePattern>,
}

impl Value {
    /// Current value
    pub fn value(&mut self) -> Result<String> {
        let raw = self.slot.resolve()?.raw();
        Ok(marshal::call_string(|out| raw.get_current_value(out))?)
    }

    /// Set the value
    pub fn set_value(&mut self, value: &str) -> Result<()> {
        let raw = self.slot.resolve()?.raw();
        Ok(marshal::call(raw.set_value(&Bstr::from(value)))?)
    }

    /// Whether the value is read-only
    pub fn is_read_only(&mut self) -> Result<bool> {
        let raw = self.slot.resolve()?.raw();
        Ok(marshal::call_bool(|out| raw.get_current_is_read_only(out))?)
    }
}

impl Pattern for Value {
    type Raw = dyn RawValuePattern;
    const KIND: PatternKind = PatternKind::Value;

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
        AnyPattern::Value(self)
    }

    fn from_any_mut(any: &mut AnyPattern) -> Option<&mut Self> {
        match any {
            AnyPattern::Value(p) => Some(p),
            _ => None,
        }
    }
}
