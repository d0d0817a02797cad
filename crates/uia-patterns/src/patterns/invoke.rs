//! Invoke pattern (IUIAutomationInvokePattern)

use uia_com::{marshal, HResult, Interface, Iid, RawUnknown};

use crate::error::Result;
use crate::patterns::AnyPattern;
use crate::{Pattern, PatternKind, PatternSlot};

/// IUIAutomationInvokePattern vtable
pub trait RawInvokePattern: RawUnknown {
    fn invoke(&self) -> HResult;
}

impl Interface for dyn RawInvokePattern {
    const IID: Iid = PatternKind::Invoke.iid();
}

/// Invoke control pattern (buttons, menu items, links)
#[derive(Debug)]
pub struct Invoke {
    slot: PatternSlot<dyn RawInvokePattern>,
}

impl Invoke {
    /// Perform the control's action
    pub fn invoke(&mut self) -> Result<()> {
        let raw = self.slot.resolve()?.raw();
        Ok(marshal::call(raw.invoke())?)
    }
}

impl Pattern for Invoke {
    type Raw = dyn RawInvokePattern;
    const KIND: PatternKind = PatternKind::Invoke;

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
        AnyPattern::Invoke(self)
    }

    fn from_any_mut(any: &mut AnyPattern) -> Option<&mut Self> {
        match any {
            AnyPattern::Invoke(p) => Some(p),
            _ => None,
        }
    }
}
