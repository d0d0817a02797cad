//! Platform UI Automation objects
//!
//! Adapts interface pointers from the `windows` crate to the vtable traits,
//! so patterns resolve from a real element exactly as they do from any
//! other foreign object. Status codes, `BOOL` values and `BSTR` strings are
//! passed through unchanged; decoding them is left to `uia_com::marshal`.
//!
//! Each adapter owns one platform smart pointer, which keeps a reference of
//! its own until the adapter is freed. `add_ref` and `release` count the
//! handles on top of it through the object's IUnknown entries.

use std::ffi::c_void;
use std::rc::Rc;

use uia_com::{
    hresult, iid, Bstr, ComError, ComRuntime, ForeignHandle, HResult, Iid, RawInterface,
    RawUnknown,
};
use windows::core::{IUnknown, IUnknown_Vtbl, Interface as ComInterface, BSTR};
use windows::Win32::UI::Accessibility::{
    IUIAutomationExpandCollapsePattern, IUIAutomationInvokePattern,
    IUIAutomationRangeValuePattern, IUIAutomationSelectionItemPattern,
    IUIAutomationTogglePattern, IUIAutomationValuePattern,
};

use crate::error::Result;
use crate::patterns::{
    RawExpandCollapsePattern, RawInvokePattern, RawRangeValuePattern, RawSelectionItemPattern,
    RawTogglePattern, RawValuePattern,
};
use crate::{AutomationElement, PatternKind};

/// One platform interface pointer behind the vtable traits
struct PlatformObject<T: ComInterface> {
    inner: T,
}

impl<T: ComInterface + 'static> PlatformObject<T> {
    fn adopt(inner: T) -> (Rc<Self>, Rc<dyn RawUnknown>) {
        let object = Rc::new(Self { inner });
        let unknown: Rc<dyn RawUnknown> = object.clone();
        (object, unknown)
    }

    fn unknown_vtable(&self) -> (*mut c_void, &IUnknown_Vtbl) {
        let raw = self.inner.as_raw();
        // Every COM vtable starts with the three IUnknown entries
        let vtable = unsafe { &**(raw as *const *const IUnknown_Vtbl) };
        (raw, vtable)
    }
}

impl<T: ComInterface + 'static> RawUnknown for PlatformObject<T> {
    fn add_ref(&self) -> u32 {
        let (raw, vtable) = self.unknown_vtable();
        unsafe { (vtable.AddRef)(raw) }
    }

    fn release(&self) -> u32 {
        let (raw, vtable) = self.unknown_vtable();
        unsafe { (vtable.Release)(raw) }
    }

    fn query_interface(&self, requested: &Iid, out: &mut Option<RawInterface>) -> HResult {
        match query(&self.inner, requested) {
            Ok(raw) => {
                *out = Some(raw);
                hresult::S_OK
            }
            Err(hr) => hr,
        }
    }
}

fn status(error: &windows::core::Error) -> HResult {
    HResult(error.code().0)
}

fn completed(result: windows::core::Result<()>) -> HResult {
    match result {
        Ok(()) => hresult::S_OK,
        Err(e) => status(&e),
    }
}

fn written<V, W>(result: windows::core::Result<V>, out: &mut W, convert: impl FnOnce(V) -> W) -> HResult {
    match result {
        Ok(value) => {
            *out = convert(value);
            hresult::S_OK
        }
        Err(e) => status(&e),
    }
}

/// QueryInterface `object` for `U` and wrap the result
fn adopt_as<T, U>(object: &T) -> std::result::Result<(Rc<PlatformObject<U>>, Rc<dyn RawUnknown>), HResult>
where
    T: ComInterface,
    U: ComInterface + 'static,
{
    let inner = object.cast::<U>().map_err(|e| status(&e))?;
    Ok(PlatformObject::adopt(inner))
}

fn query<T: ComInterface>(object: &T, requested: &Iid) -> std::result::Result<RawInterface, HResult> {
    if *requested == iid::IUNKNOWN {
        let (typed, unknown) = adopt_as::<_, IUnknown>(object)?;
        return Ok(RawInterface::acquire::<dyn RawUnknown>(typed, unknown));
    }

    let kind = PatternKind::from_iid(requested).ok_or(hresult::E_NOINTERFACE)?;
    let raw = match kind {
        PatternKind::Invoke => {
            let (typed, unknown) = adopt_as::<_, IUIAutomationInvokePattern>(object)?;
            RawInterface::acquire::<dyn RawInvokePattern>(typed, unknown)
        }
        PatternKind::Value => {
            let (typed, unknown) = adopt_as::<_, IUIAutomationValuePattern>(object)?;
            RawInterface::acquire::<dyn RawValuePattern>(typed, unknown)
        }
        PatternKind::RangeValue => {
            let (typed, unknown) = adopt_as::<_, IUIAutomationRangeValuePattern>(object)?;
            RawInterface::acquire::<dyn RawRangeValuePattern>(typed, unknown)
        }
        PatternKind::ExpandCollapse => {
            let (typed, unknown) = adopt_as::<_, IUIAutomationExpandCollapsePattern>(object)?;
            RawInterface::acquire::<dyn RawExpandCollapsePattern>(typed, unknown)
        }
        PatternKind::SelectionItem => {
            let (typed, unknown) = adopt_as::<_, IUIAutomationSelectionItemPattern>(object)?;
            RawInterface::acquire::<dyn RawSelectionItemPattern>(typed, unknown)
        }
        PatternKind::Toggle => {
            let (typed, unknown) = adopt_as::<_, IUIAutomationTogglePattern>(object)?;
            RawInterface::acquire::<dyn RawTogglePattern>(typed, unknown)
        }
    };
    tracing::trace!(pattern = %kind, "platform interface wrapped");
    Ok(raw)
}

impl RawInvokePattern for PlatformObject<IUIAutomationInvokePattern> {
    fn invoke(&self) -> HResult {
        completed(unsafe { self.inner.Invoke() })
    }
}

impl RawValuePattern for PlatformObject<IUIAutomationValuePattern> {
    fn set_value(&self, value: &Bstr) -> HResult {
        // `Bstr` values headed out are always built from `&str`
        let value = BSTR::from(value.to_string_lossy().as_str());
        completed(unsafe { self.inner.SetValue(&value) })
    }

    fn get_current_value(&self, out: &mut Bstr) -> HResult {
        written(unsafe { self.inner.CurrentValue() }, out, |value| {
            Bstr::from_wide(value.as_wide().to_vec())
        })
    }

    fn get_current_is_read_only(&self, out: &mut i32) -> HResult {
        written(unsafe { self.inner.CurrentIsReadOnly() }, out, |value| value.0)
    }
}

impl RawRangeValuePattern for PlatformObject<IUIAutomationRangeValuePattern> {
    fn set_value(&self, value: f64) -> HResult {
        completed(unsafe { self.inner.SetValue(value) })
    }

    fn get_current_value(&self, out: &mut f64) -> HResult {
        written(unsafe { self.inner.CurrentValue() }, out, |value| value)
    }

    fn get_current_is_read_only(&self, out: &mut i32) -> HResult {
        written(unsafe { self.inner.CurrentIsReadOnly() }, out, |value| value.0)
    }

    fn get_current_maximum(&self, out: &mut f64) -> HResult {
        written(unsafe { self.inner.CurrentMaximum() }, out, |value| value)
    }

    fn get_current_minimum(&self, out: &mut f64) -> HResult {
        written(unsafe { self.inner.CurrentMinimum() }, out, |value| value)
    }

    fn get_current_large_change(&self, out: &mut f64) -> HResult {
        written(unsafe { self.inner.CurrentLargeChange() }, out, |value| value)
    }

    fn get_current_small_change(&self, out: &mut f64) -> HResult {
        written(unsafe { self.inner.CurrentSmallChange() }, out, |value| value)
    }
}

impl RawExpandCollapsePattern for PlatformObject<IUIAutomationExpandCollapsePattern> {
    fn expand(&self) -> HResult {
        completed(unsafe { self.inner.Expand() })
    }

    fn collapse(&self) -> HResult {
        completed(unsafe { self.inner.Collapse() })
    }

    fn get_current_expand_collapse_state(&self, out: &mut i32) -> HResult {
        written(unsafe { self.inner.CurrentExpandCollapseState() }, out, |state| state.0)
    }
}

impl RawSelectionItemPattern for PlatformObject<IUIAutomationSelectionItemPattern> {
    fn select(&self) -> HResult {
        completed(unsafe { self.inner.Select() })
    }

    fn add_to_selection(&self) -> HResult {
        completed(unsafe { self.inner.AddToSelection() })
    }

    fn remove_from_selection(&self) -> HResult {
        completed(unsafe { self.inner.RemoveFromSelection() })
    }

    fn get_current_is_selected(&self, out: &mut i32) -> HResult {
        written(unsafe { self.inner.CurrentIsSelected() }, out, |value| value.0)
    }
}

impl RawTogglePattern for PlatformObject<IUIAutomationTogglePattern> {
    fn toggle(&self) -> HResult {
        completed(unsafe { self.inner.Toggle() })
    }

    fn get_current_toggle_state(&self, out: &mut i32) -> HResult {
        written(unsafe { self.inner.CurrentToggleState() }, out, |state| state.0)
    }
}

/// Counted handle to a platform COM object
///
/// Accepts any interface of the object, typically `IUIAutomationElement`.
pub fn handle_from<T: ComInterface>(object: &T) -> uia_com::Result<ForeignHandle<dyn RawUnknown>> {
    let (typed, unknown) =
        adopt_as::<_, IUnknown>(object).map_err(ComError::ForeignCallFailed)?;
    RawInterface::acquire::<dyn RawUnknown>(typed, unknown).into_handle()
}

impl<'rt> AutomationElement<'rt> {
    /// Wrap a platform element, e.g. an `IUIAutomationElement`
    pub fn from_platform<T: ComInterface>(runtime: &'rt ComRuntime, object: &T) -> Result<Self> {
        Self::new(runtime, handle_from(object)?)
    }
}
