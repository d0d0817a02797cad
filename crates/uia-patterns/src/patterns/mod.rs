//! Concrete control patterns
//!
//! One module per pattern. Each binds exactly one foreign interface and
//! exposes only the operations of that interface. [`AnyPattern`] is the
//! tagged union used where the kind is only known at runtime.

mod expand_collapse;
mod invoke;
mod range_value;
mod selection_item;
mod toggle;
mod value;

pub use expand_collapse::{ExpandCollapse, ExpandCollapseState, RawExpandCollapsePattern};
pub use invoke::{Invoke, RawInvokePattern};
pub use range_value::{RangeValue, RawRangeValuePattern};
pub use selection_item::{RawSelectionItemPattern, SelectionItem};
pub use toggle::{RawTogglePattern, Toggle, ToggleState};
pub use value::{RawValuePattern, Value};

use uia_com::{ForeignHandle, Interface};

use crate::error::Result;
use crate::{resolver, Pattern, PatternKind};

/// A pattern of any kind
#[derive(Debug)]
pub enum AnyPattern {
    Invoke(Invoke),
    Value(Value),
    RangeValue(RangeValue),
    ExpandCollapse(ExpandCollapse),
    SelectionItem(SelectionItem),
    Toggle(Toggle),
}

impl AnyPattern {
    /// Resolve the pattern of `kind` from `owner`
    pub fn resolve<O>(kind: PatternKind, owner: &ForeignHandle<O>) -> Result<Self>
    where
        O: ?Sized + Interface,
    {
        let pattern = match kind {
            PatternKind::Invoke => resolver::resolve::<Invoke, O>(owner)?.into_any(),
            PatternKind::Value => resolver::resolve::<Value, O>(owner)?.into_any(),
            PatternKind::RangeValue => resolver::resolve::<RangeValue, O>(owner)?.into_any(),
            PatternKind::ExpandCollapse => {
                resolver::resolve::<ExpandCollapse, O>(owner)?.into_any()
            }
            PatternKind::SelectionItem => {
                resolver::resolve::<SelectionItem, O>(owner)?.into_any()
            }
            PatternKind::Toggle => resolver::resolve::<Toggle, O>(owner)?.into_any(),
        };
        Ok(pattern)
    }

    /// Which pattern this is
    pub fn kind(&self) -> PatternKind {
        match self {
            AnyPattern::Invoke(_) => PatternKind::Invoke,
            AnyPattern::Value(_) => PatternKind::Value,
            AnyPattern::RangeValue(_) => PatternKind::RangeValue,
            AnyPattern::ExpandCollapse(_) => PatternKind::ExpandCollapse,
            AnyPattern::SelectionItem(_) => PatternKind::SelectionItem,
            AnyPattern::Toggle(_) => PatternKind::Toggle,
        }
    }

    /// True iff no foreign handle is bound
    pub fn is_available(&self) -> bool {
        !self.is_bound()
    }

    /// True iff a foreign handle is bound
    pub fn is_bound(&self) -> bool {
        match self {
            AnyPattern::Invoke(p) => p.is_bound(),
            AnyPattern::Value(p) => p.is_bound(),
            AnyPattern::RangeValue(p) => p.is_bound(),
            AnyPattern::ExpandCollapse(p) => p.is_bound(),
            AnyPattern::SelectionItem(p) => p.is_bound(),
            AnyPattern::Toggle(p) => p.is_bound(),
        }
    }

    /// Release the bound handle, if any
    pub fn unbind(&mut self) {
        match self {
            AnyPattern::Invoke(p) => p.unbind(),
            AnyPattern::Value(p) => p.unbind(),
            AnyPattern::RangeValue(p) => p.unbind(),
            AnyPattern::ExpandCollapse(p) => p.unbind(),
            AnyPattern::SelectionItem(p) => p.unbind(),
            AnyPattern::Toggle(p) => p.unbind(),
        }
    }
}
