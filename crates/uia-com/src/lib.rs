//! COM boundary for UI Automation
//!
//! This crate is the trust boundary between Rust code and the platform's
//! reference-counted foreign interfaces. It owns three concerns:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Pattern layer (uia-patterns)                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ForeignHandle        │  Marshaling        │  ComRuntime    │
//! │  - AddRef on clone    │  - HRESULT check   │  - init        │
//! │  - Release on drop    │  - output slots    │  - shutdown    │
//! │  - QueryInterface     │  - BOOL / BSTR     │                │
//! ├─────────────────────────────────────────────────────────────┤
//! │             IUnknown vtables (RawUnknown & co.)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`]: GUID, HRESULT, BSTR and the error type
//! - [`unknown`]: IUnknown contract, interface pointers and handles
//! - [`marshal`]: status checking and output-slot reading
//! - [`runtime`]: native subsystem lifecycle

pub mod marshal;
pub mod runtime;
pub mod types;
pub mod unknown;

pub use runtime::{ApartmentType, ComRuntime, NativeSubsystem, RuntimeConfig, RuntimeState};
pub use types::{hresult, iid, Bstr, ComError, Guid, HResult, Iid, Result};
pub use unknown::{ForeignHandle, Interface, RawInterface, RawUnknown};
