//! ExpandCollapse pattern (IUIAutomationExpandCollapsePattern)

use uia_com::{marshal, HResult, Interface, Iid, RawUnknown};

use crate::error::{PatternError, Result};
use crate::patterns::AnyPattern;
use crate::{Pattern, PatternKind, PatternSlot};

/// IUIAutomationExpandCollapsePattern vtable
pub trait RawExpandCollapsePattern: RawUnknown {
    fn expand(&self) -> HResult;
    fn collapse(&self) -> HResult;
    fn get_current_expand_collapse_state(&self, out: &mut i32) -> HResult;
}

impl Interface for dyn RawExpandCollapsePattern {
    const IID: Iid = PatternKind::ExpandCollapse.iid();
}

/// Expand/collapse state (`ExpandCollapseState` enumeration)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExpandCollapseState {
    Collapsed = 0,
    Expanded = 1,
    PartiallyExpanded = 2,
    /// Nothing to expand
    LeafNode = 3,
}

impl TryFrom<i32> for ExpandCollapseState {
    type Error = PatternError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            0 => Ok(ExpandCollapseState::Collapsed),
            1 => Ok(ExpandCollapseState::Expanded),
            2 => Ok(ExpandCollapseState::PartiallyExpanded),
            3 => Ok(ExpandCollapseState::LeafNode),
            _ => Err(PatternError::InvalidEnumValue {
                name: "ExpandCollapseState",
                value,
            }),
        }
    }
}

/// Expand/collapse control pattern (tree items, combo boxes, menus)
#[derive(Debug)]
pub struct ExpandCollapse {
    slot: PatternSlot<dyn RawExpandCollapsePattern>,
}

impl ExpandCollapse {
    /// Show all child nodes
    pub fn expand(&mut self) -> Result<()> {
        let raw = self.slot.resolve()?.raw();
        Ok(marshal::call(raw.expand())?)
    }

    /// Hide all child nodes
    pub fn collapse(&mut self) -> Result<()> {
        let raw = self.slot.resolve()?.raw();
        Ok(marshal::call(raw.collapse())?)
    }

    /// Current state
    pub fn current_state(&mut self) -> Result<ExpandCollapseState> {
        let raw = self.slot.resolve()?.raw();
        let value = marshal::call_out(|out| raw.get_current_expand_collapse_state(out))?;
        ExpandCollapseState::try_from(value)
    }
}

impl Pattern for ExpandCollapse {
    type Raw = dyn RawExpandCollapsePattern;
    const KIND: PatternKind = PatternKind::ExpandCollapse;

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
        AnyPattern::ExpandCollapse(self)
    }

    fn from_any_mut(any: &mut AnyPattern) -> Option<&mut Self> {
        match any {
            AnyPattern::ExpandCollapse(p) => Some(p),
            _ => None,
        }
    }
}
