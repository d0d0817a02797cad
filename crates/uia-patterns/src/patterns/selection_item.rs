//! SelectionItem pattern (IUIAutomationSelectionItemPattern)

use uia_com::{marshal, HResult, Interface, Iid, RawUnknown};

use crate::error::Result;
use crate::patterns::AnyPattern;
use crate::{Pattern, PatternKind, PatternSlot};

/// IUIAutomationSelectionItemPattern vtable
pub trait RawSelectionItemPattern: RawUnknown {
    fn select(&self) -> HResult;
    fn add_to_selection(&self) -> HResult;
    fn remove_from_selection(&self) -> HResult;
    fn get_current_is_selected(&self, out: &mut i32) -> HResult;
}

impl Interface for dyn RawSelectionItemPattern {
    const IID: Iid = PatternKind::SelectionItem.iid();
}

/// Selectable item in a list, tree or tab control
#[derive(Debug)]
pub struct SelectionItem {
    slot: PatternSlot<dyn RawSelectionItemPattern>,
}

impl SelectionItem {
    /// Select this item, deselecting the others
    pub fn select(&mut self) -> Result<()> {
        let raw = self.slot.resolve()?.raw();
        Ok(marshal::call(raw.select())?)
    }

    /// Add this item to a multiple selection
    pub fn add_to_selection(&mut self) -> Result<()> {
        let raw = self.slot.resolve()?.raw();
        Ok(marshal::call(raw.add_to_selection())?)
    }

    /// Remove this item from the selection
    pub fn remove_from_selection(&mut self) -> Result<()> {
        let raw = self.slot.resolve()?.raw();
        Ok(marshal::call(raw.remove_from_selection())?)
    }

    /// Whether the item is selected
    ///
    /// The platform writes a `BOOL`. Only the value `1` reads as selected;
    /// every other value, including other nonzero values, reads as not
    /// selected.
    pub fn is_selected(&mut self) -> Result<bool> {
        let raw = self.slot.resolve()?.raw();
        Ok(marshal::call_bool(|out| raw.get_current_is_selected(out))?)
    }
}

impl Pattern for SelectionItem {
    type Raw = dyn RawSelectionItemPattern;
    const KIND: PatternKind = PatternKind::SelectionItem;

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
        AnyPattern::SelectionItem(self)
    }

    fn from_any_mut(any: &mut AnyPattern) -> Option<&mut Self> {
        match any {
            AnyPattern::SelectionItem(p) => Some(p),
            _ => None,
        }
    }
}
