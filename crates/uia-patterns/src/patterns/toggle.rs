//! Toggle pattern (IUIAutomationTogglePattern)

use std::fmt;

use uia_com::{marshal, HResult, Interface, Iid, RawUnknown};

use crate::error::{PatternError, Result};
use crate::patterns::AnyPattern;
use crate::{Pattern, PatternKind, PatternSlot};

/// IUIAutomationTogglePattern vtable
pub trait RawTogglePattern: RawUnknown {
    fn toggle(&self) -> HResult;
    fn get_current_toggle_state(&self, out: &mut i32) -> HResult;
}

impl Interface for dyn RawTogglePattern {
    const IID: Iid = PatternKind::Toggle.iid();
}

/// Toggle state (`ToggleState` enumeration)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToggleState {
    /// ToggleState_Off
    Off = 0,
    /// ToggleState_On
    On = 1,
    /// ToggleState_Indeterminate
    Indeterminate = 2,
}

impl TryFrom<i32> for ToggleState {
    type Error = PatternError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            0 => Ok(ToggleState::Off),
            1 => Ok(ToggleState::On),
            2 => Ok(ToggleState::Indeterminate),
            _ => Err(PatternError::InvalidEnumValue {
                name: "ToggleState",
                value,
            }),
        }
    }
}

impl From<ToggleState> for i32 {
    fn from(state: ToggleState) -> Self {
        state as i32
    }
}

impl fmt::Display for ToggleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToggleState::Off => f.write_str("off"),
            ToggleState::On => f.write_str("on"),
            ToggleState::Indeterminate => f.write_str("indeterminate"),
        }
    }
}

/// Toggle control pattern (check boxes, toggle buttons)
#[derive(Debug)]
pub struct Toggle {
    slot: PatternSlot<dyn RawTogglePattern>,
}

impl Toggle {
    /// Advance to the next state
    pub fn toggle(&mut self) -> Result<()> {
        let raw = self.slot.resolve()?.raw();
        Ok(marshal::call(raw.toggle())?)
    }

    /// Current state
    pub fn current_state(&mut self) -> Result<ToggleState> {
        let raw = self.slot.resolve()?.raw();
        let value = marshal::call_out(|out| raw.get_current_toggle_state(out))?;
        ToggleState::try_from(value)
    }
}

impl Pattern for Toggle {
    type Raw = dyn RawTogglePattern;
    const KIND: PatternKind = PatternKind::Toggle;

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
        AnyPattern::Toggle(self)
    }

    fn from_any_mut(any: &mut AnyPattern) -> Option<&mut Self> {
        match any {
            AnyPattern::Toggle(p) => Some(p),
            _ => None,
        }
    }
}
