//! Reference-counting test doubles
//!
//! [`FakeControl`] is an in-process foreign object that implements IUnknown
//! and every pattern vtable. It counts references exactly as the platform
//! does, so tests can assert that every acquire is paired with one release.
//! Its status codes and raw output values can be scripted to exercise the
//! failure paths.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use uia_com::{
    hresult, iid, ApartmentType, Bstr, ForeignHandle, HResult, Iid, Interface, NativeSubsystem,
    RawInterface, RawUnknown,
};

use crate::patterns::{
    RawExpandCollapsePattern, RawInvokePattern, RawRangeValuePattern, RawSelectionItemPattern,
    RawTogglePattern, RawValuePattern,
};
use crate::PatternKind;

struct FakeObject {
    this: Weak<FakeObject>,
    refs: Cell<u32>,
    queries: Cell<u32>,
    supported: Vec<PatternKind>,

    query_status: Cell<HResult>,
    write_on_failure: Cell<bool>,
    null_on_success: Cell<bool>,
    call_status: Cell<HResult>,

    range_value: Cell<f64>,
    range_minimum: Cell<f64>,
    range_maximum: Cell<f64>,
    range_small_change: Cell<f64>,
    range_large_change: Cell<f64>,
    range_read_only: Cell<i32>,
    selected: Cell<i32>,
    toggle_state: Cell<i32>,
    text: RefCell<Bstr>,
    text_read_only: Cell<bool>,
    expand_state: Cell<i32>,
    invocations: Cell<u32>,
}

impl FakeObject {
    /// Status for the next pattern call, if it should fail
    fn failure(&self) -> Option<HResult> {
        let status = self.call_status.get();
        (!status.is_ok()).then_some(status)
    }

    fn interface_for(&self, requested: &Iid) -> Option<RawInterface> {
        let this = self.this.upgrade()?;
        let unknown: Rc<dyn RawUnknown> = this.clone();

        if *requested == iid::IUNKNOWN {
            return Some(RawInterface::acquire::<dyn RawUnknown>(this, unknown));
        }

        let kind = PatternKind::from_iid(requested)?;
        if !self.supported.contains(&kind) {
            return None;
        }

        let raw = match kind {
            PatternKind::Invoke => RawInterface::acquire::<dyn RawInvokePattern>(this, unknown),
            PatternKind::Value => RawInterface::acquire::<dyn RawValuePattern>(this, unknown),
            PatternKind::RangeValue => {
                RawInterface::acquire::<dyn RawRangeValuePattern>(this, unknown)
            }
            PatternKind::ExpandCollapse => {
                RawInterface::acquire::<dyn RawExpandCollapsePattern>(this, unknown)
            }
            PatternKind::SelectionItem => {
                RawInterface::acquire::<dyn RawSelectionItemPattern>(this, unknown)
            }
            PatternKind::Toggle => RawInterface::acquire::<dyn RawTogglePattern>(this, unknown),
        };
        Some(raw)
    }
}

impl RawUnknown for FakeObject {
    fn add_ref(&self) -> u32 {
        let count = self.refs.get() + 1;
        self.refs.set(count);
        count
    }

    fn release(&self) -> u32 {
        let count = self.refs.get();
        assert!(count > 0, "release without a matching add_ref");
        self.refs.set(count - 1);
        count - 1
    }

    fn query_interface(&self, requested: &Iid, out: &mut Option<RawInterface>) -> HResult {
        self.queries.set(self.queries.get() + 1);

        let status = self.query_status.get();
        if !status.is_ok() {
            if self.write_on_failure.get() {
                *out = self.interface_for(&iid::IUNKNOWN);
            }
            return status;
        }

        if self.null_on_success.get() {
            return hresult::S_OK;
        }

        match self.interface_for(requested) {
            Some(raw) => {
                *out = Some(raw);
                hresult::S_OK
            }
            None => hresult::E_NOINTERFACE,
        }
    }
}

impl RawRangeValuePattern for FakeObject {
    fn set_value(&self, value: f64) -> HResult {
        if let Some(hr) = self.failure() {
            return hr;
        }
        if self.range_read_only.get() == 1 {
            return hresult::UIA_E_INVALIDOPERATION;
        }
        self.range_value.set(value);
        hresult::S_OK
    }

    fn get_current_value(&self, out: &mut f64) -> HResult {
        *out = self.range_value.get();
        self.failure().unwrap_or(hresult::S_OK)
    }

    fn get_current_is_read_only(&self, out: &mut i32) -> HResult {
        *out = self.range_read_only.get();
        self.failure().unwrap_or(hresult::S_OK)
    }

    fn get_current_maximum(&self, out: &mut f64) -> HResult {
        *out = self.range_maximum.get();
        self.failure().unwrap_or(hresult::S_OK)
    }

    fn get_current_minimum(&self, out: &mut f64) -> HResult {
        *out = self.range_minimum.get();
        self.failure().unwrap_or(hresult::S_OK)
    }

    fn get_current_large_change(&self, out: &mut f64) -> HResult {
        *out = self.range_large_change.get();
        self.failure().unwrap_or(hresult::S_OK)
    }

    fn get_current_small_change(&self, out: &mut f64) -> HResult {
        *out = self.range_small_change.get();
        self.failure().unwrap_or(hresult::S_OK)
    }
}

impl RawSelectionItemPattern for FakeObject {
    fn select(&self) -> HResult {
        if let Some(hr) = self.failure() {
            return hr;
        }
        self.selected.set(1);
        hresult::S_OK
    }

    fn add_to_selection(&self) -> HResult {
        self.select()
    }

    fn remove_from_selection(&self) -> HResult {
        if let Some(hr) = self.failure() {
            return hr;
        }
        self.selected.set(0);
        hresult::S_OK
    }

    fn get_current_is_selected(&self, out: &mut i32) -> HResult {
        *out = self.selected.get();
        self.failure().unwrap_or(hresult::S_OK)
    }
}

impl RawTogglePattern for FakeObject {
    fn toggle(&self) -> HResult {
        if let Some(hr) = self.failure() {
            return hr;
        }
        let next = if self.toggle_state.get() == 0 { 1 } else { 0 };
        self.toggle_state.set(next);
        hresult::S_OK
    }

    fn get_current_toggle_state(&self, out: &mut i32) -> HResult {
        *out = self.toggle_state.get();
        self.failure().unwrap_or(hresult::S_OK)
    }
}

impl RawValuePattern for FakeObject {
    fn set_value(&self, value: &Bstr) -> HResult {
        if let Some(hr) = self.failure() {
            return hr;
        }
        if self.text_read_only.get() {
            return hresult::UIA_E_INVALIDOPERATION;
        }
        *self.text.borrow_mut() = value.clone();
        hresult::S_OK
    }

    fn get_current_value(&self, out: &mut Bstr) -> HResult {
        *out = self.text.borrow().clone();
        self.failure().unwrap_or(hresult::S_OK)
    }

    fn get_current_is_read_only(&self, out: &mut i32) -> HResult {
        *out = i32::from(self.text_read_only.get());
        self.failure().unwrap_or(hresult::S_OK)
    }
}

impl RawInvokePattern for FakeObject {
    fn invoke(&self) -> HResult {
        if let Some(hr) = self.failure() {
            return hr;
        }
        self.invocations.set(self.invocations.get() + 1);
        hresult::S_OK
    }
}

impl RawExpandCollapsePattern for FakeObject {
    fn expand(&self) -> HResult {
        if let Some(hr) = self.failure() {
            return hr;
        }
        if self.expand_state.get() == 3 {
            return hresult::UIA_E_INVALIDOPERATION;
        }
        self.expand_state.set(1);
        hresult::S_OK
    }

    fn collapse(&self) -> HResult {
        if let Some(hr) = self.failure() {
            return hr;
        }
        if self.expand_state.get() == 3 {
            return hresult::UIA_E_INVALIDOPERATION;
        }
        self.expand_state.set(0);
        hresult::S_OK
    }

    fn get_current_expand_collapse_state(&self, out: &mut i32) -> HResult {
        *out = self.expand_state.get();
        self.failure().unwrap_or(hresult::S_OK)
    }
}

/// Scriptable foreign control with an observable reference count
///
/// The control itself holds no counted reference; [`refs`](Self::refs)
/// is the number of handles and pointers currently outstanding.
pub struct FakeControl {
    object: Rc<FakeObject>,
}

impl FakeControl {
    /// Control supporting every pattern
    pub fn new() -> Self {
        Self::supporting(&PatternKind::ALL)
    }

    /// Control supporting only `kinds`
    pub fn supporting(kinds: &[PatternKind]) -> Self {
        let object = Rc::new_cyclic(|this| FakeObject {
            this: this.clone(),
            refs: Cell::new(0),
            queries: Cell::new(0),
            supported: kinds.to_vec(),
            query_status: Cell::new(hresult::S_OK),
            write_on_failure: Cell::new(false),
            null_on_success: Cell::new(false),
            call_status: Cell::new(hresult::S_OK),
            range_value: Cell::new(0.0),
            range_minimum: Cell::new(0.0),
            range_maximum: Cell::new(100.0),
            range_small_change: Cell::new(1.0),
            range_large_change: Cell::new(10.0),
            range_read_only: Cell::new(0),
            selected: Cell::new(0),
            toggle_state: Cell::new(0),
            text: RefCell::new(Bstr::new()),
            text_read_only: Cell::new(false),
            expand_state: Cell::new(0),
            invocations: Cell::new(0),
        });
        Self { object }
    }

    /// New counted IUnknown handle to the control
    pub fn unknown(&self) -> ForeignHandle<dyn RawUnknown> {
        let unknown: Rc<dyn RawUnknown> = self.object.clone();
        RawInterface::acquire::<dyn RawUnknown>(unknown.clone(), unknown)
            .into_handle()
            .expect("IUnknown pointer converts to an IUnknown handle")
    }

    /// New counted handle for interface `I`
    pub fn handle<I: ?Sized + Interface>(&self) -> ForeignHandle<I> {
        self.unknown()
            .query::<I>()
            .expect("control supports the requested interface")
    }

    /// Outstanding foreign references
    pub fn refs(&self) -> u32 {
        self.object.refs.get()
    }

    /// Number of `query_interface` calls received
    pub fn queries(&self) -> u32 {
        self.object.queries.get()
    }

    /// Make every `query_interface` return `status`
    pub fn set_query_status(&self, status: HResult) {
        self.object.query_status.set(status);
    }

    /// Write a pointer even when the query fails
    pub fn set_write_on_failure(&self, write: bool) {
        self.object.write_on_failure.set(write);
    }

    /// Report success from queries without writing a pointer
    pub fn set_null_on_success(&self, null: bool) {
        self.object.null_on_success.set(null);
    }

    /// Make every pattern call return `status`
    ///
    /// Getters still write their output slot before failing, so tests can
    /// check that the value is never read.
    pub fn fail_calls_with(&self, status: HResult) {
        self.object.call_status.set(status);
    }

    /// Make pattern calls succeed again
    pub fn clear_failure(&self) {
        self.object.call_status.set(hresult::S_OK);
    }

    pub fn set_range_bounds(&self, minimum: f64, maximum: f64) {
        self.object.range_minimum.set(minimum);
        self.object.range_maximum.set(maximum);
    }

    pub fn set_range_steps(&self, small: f64, large: f64) {
        self.object.range_small_change.set(small);
        self.object.range_large_change.set(large);
    }

    pub fn set_range_read_only_raw(&self, raw: i32) {
        self.object.range_read_only.set(raw);
    }

    pub fn set_selected_raw(&self, raw: i32) {
        self.object.selected.set(raw);
    }

    pub fn set_toggle_raw(&self, raw: i32) {
        self.object.toggle_state.set(raw);
    }

    pub fn set_text_raw(&self, units: Vec<u16>) {
        *self.object.text.borrow_mut() = Bstr::from_wide(units);
    }

    pub fn set_text_read_only(&self, read_only: bool) {
        self.object.text_read_only.set(read_only);
    }

    pub fn set_expand_raw(&self, raw: i32) {
        self.object.expand_state.set(raw);
    }

    /// Number of successful `invoke` calls
    pub fn invocations(&self) -> u32 {
        self.object.invocations.get()
    }
}

impl Default for FakeControl {
    fn default() -> Self {
        Self::new()
    }
}

/// Calls observed by a [`FakeSubsystem`]
#[derive(Debug, Default)]
pub struct SubsystemCalls {
    pub initialize: Cell<u32>,
    pub uninitialize: Cell<u32>,
    pub last_apartment: Cell<Option<ApartmentType>>,
}

/// Native subsystem double returning a fixed initialization status
pub struct FakeSubsystem {
    status: HResult,
    calls: Rc<SubsystemCalls>,
}

impl FakeSubsystem {
    /// Subsystem whose initialization returns `status`
    pub fn new(status: HResult) -> (Self, Rc<SubsystemCalls>) {
        let calls = Rc::new(SubsystemCalls::default());
        (
            Self {
                status,
                calls: calls.clone(),
            },
            calls,
        )
    }
}

impl NativeSubsystem for FakeSubsystem {
    fn initialize(&self, apartment: ApartmentType) -> HResult {
        let calls = &self.calls;
        calls.initialize.set(calls.initialize.get() + 1);
        calls.last_apartment.set(Some(apartment));
        self.status
    }

    fn uninitialize(&self) {
        let calls = &self.calls;
        calls.uninitialize.set(calls.uninitialize.get() + 1);
    }
}
