//! UI Automation control patterns
//!
//! Typed access to the optional capabilities ("patterns") a UI Automation
//! element may expose. Each pattern wraps exactly one foreign interface,
//! resolved from the element's handle and released when the pattern is
//! dropped or rebound.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  AutomationElement (owning handle, one cached pattern/kind) │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Resolver             │  Patterns                           │
//! │  - QueryInterface     │  - RangeValue     - Value           │
//! │  - E_NOINTERFACE      │  - SelectionItem  - Invoke          │
//! │    is "unsupported"   │  - Toggle         - ExpandCollapse  │
//! ├─────────────────────────────────────────────────────────────┤
//! │                   COM boundary (uia-com)                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`kind`]: pattern catalog (IIDs and pattern ids)
//! - [`pattern`]: the base contract shared by every pattern
//! - [`resolver`]: resolution of a pattern from an owning handle
//! - [`patterns`]: the concrete patterns and their tagged union
//! - [`element`]: automation element and its pattern cache
//! - `platform`: adapters over the platform's own UI Automation
//!   interfaces (Windows only)

pub mod element;
pub mod error;
pub mod kind;
pub mod pattern;
pub mod patterns;
pub mod resolver;

#[cfg(windows)]
pub mod platform;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use element::AutomationElement;
pub use error::{PatternError, Result};
pub use kind::PatternKind;
pub use pattern::{Pattern, PatternSlot};
pub use patterns::{
    AnyPattern, ExpandCollapse, ExpandCollapseState, Invoke, RangeValue, SelectionItem, Toggle,
    ToggleState, Value,
};
