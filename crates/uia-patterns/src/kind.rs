//! Pattern kinds and their platform identities
//!
//! Each control pattern has two fixed identifiers from the platform
//! catalog: the integer pattern id (`UIA_*PatternId`) and the IID of its
//! foreign interface. Both are defined here and nowhere else.

use std::fmt;

use uia_com::Iid;

/// Well-known UI Automation interface UUIDs
pub mod iid {
    use uia_com::Iid;

    /// IUIAutomationInvokePattern
    pub const INVOKE_PATTERN: Iid = Iid::from_u128(0xFB377FBE_8EA6_46D5_9C73_6499642D3059);
    /// IUIAutomationValuePattern
    pub const VALUE_PATTERN: Iid = Iid::from_u128(0xA94CD8B1_0844_4CD6_9D2D_640537AB39E9);
    /// IUIAutomationRangeValuePattern
    pub const RANGE_VALUE_PATTERN: Iid = Iid::from_u128(0x59213F4F_7346_49E5_B120_80555987A148);
    /// IUIAutomationExpandCollapsePattern
    pub const EXPAND_COLLAPSE_PATTERN: Iid =
        Iid::from_u128(0x619BE086_1F4E_4EE4_BAFA_210128738730);
    /// IUIAutomationSelectionItemPattern
    pub const SELECTION_ITEM_PATTERN: Iid =
        Iid::from_u128(0xA8EFA66A_0FDA_421A_9194_38021F3578EA);
    /// IUIAutomationTogglePattern
    pub const TOGGLE_PATTERN: Iid = Iid::from_u128(0x94CF8058_9B8D_4AB9_8BFD_4CD0A33C8C70);
}

/// Pattern ids (`UIA_*PatternId`)
pub mod pattern_id {
    /// UIA_InvokePatternId
    pub const INVOKE: i32 = 10000;
    /// UIA_ValuePatternId
    pub const VALUE: i32 = 10002;
    /// UIA_RangeValuePatternId
    pub const RANGE_VALUE: i32 = 10003;
    /// UIA_ExpandCollapsePatternId
    pub const EXPAND_COLLAPSE: i32 = 10005;
    /// UIA_SelectionItemPatternId
    pub const SELECTION_ITEM: i32 = 10010;
    /// UIA_TogglePatternId
    pub const TOGGLE: i32 = 10015;
}

/// The closed set of supported control patterns
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PatternKind {
    /// Invoke - single unambiguous action (buttons, menu items)
    Invoke,
    /// Value - string value (edit boxes)
    Value,
    /// RangeValue - numeric value within a range (sliders, spinners)
    RangeValue,
    /// ExpandCollapse - shows and hides content (tree nodes, combo boxes)
    ExpandCollapse,
    /// SelectionItem - selectable child of a container (list items)
    SelectionItem,
    /// Toggle - cycles through a set of states (check boxes)
    Toggle,
}

impl PatternKind {
    /// Every kind, in pattern id order
    pub const ALL: [PatternKind; 6] = [
        PatternKind::Invoke,
        PatternKind::Value,
        PatternKind::RangeValue,
        PatternKind::ExpandCollapse,
        PatternKind::SelectionItem,
        PatternKind::Toggle,
    ];

    /// IID of the foreign interface for this pattern
    pub const fn iid(self) -> Iid {
        match self {
            PatternKind::Invoke => iid::INVOKE_PATTERN,
            PatternKind::Value => iid::VALUE_PATTERN,
            PatternKind::RangeValue => iid::RANGE_VALUE_PATTERN,
            PatternKind::ExpandCollapse => iid::EXPAND_COLLAPSE_PATTERN,
            PatternKind::SelectionItem => iid::SELECTION_ITEM_PATTERN,
            PatternKind::Toggle => iid::TOGGLE_PATTERN,
        }
    }

    /// Platform pattern id
    pub const fn pattern_id(self) -> i32 {
        match self {
            PatternKind::Invoke => pattern_id::INVOKE,
            PatternKind::Value => pattern_id::VALUE,
            PatternKind::RangeValue => pattern_id::RANGE_VALUE,
            PatternKind::ExpandCollapse => pattern_id::EXPAND_COLLAPSE,
            PatternKind::SelectionItem => pattern_id::SELECTION_ITEM,
            PatternKind::Toggle => pattern_id::TOGGLE,
        }
    }

    /// Look up a kind by platform pattern id
    pub fn from_pattern_id(id: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.pattern_id() == id)
    }

    /// Look up a kind by interface identity
    pub fn from_iid(iid: &Iid) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.iid() == *iid)
    }

    /// Display name
    pub const fn name(self) -> &'static str {
        match self {
            PatternKind::Invoke => "Invoke",
            PatternKind::Value => "Value",
            PatternKind::RangeValue => "RangeValue",
            PatternKind::ExpandCollapse => "ExpandCollapse",
            PatternKind::SelectionItem => "SelectionItem",
            PatternKind::Toggle => "Toggle",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
