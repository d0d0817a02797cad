//! Resolver Tests - pattern resolution against scripted controls
//!
//! Covers the three outcomes of resolving a pattern:
//! - Supported: the pattern comes back bound
//! - Not supported (`E_NOINTERFACE`): unbound, no error
//! - Any other failure: an error carrying the status, nothing leaked

use integration_tests::*;
use uia_com::{hresult, iid, ComError, ForeignHandle, RawUnknown};
use uia_patterns::patterns::RawTogglePattern;
use uia_patterns::resolver;
use uia_patterns::testing::FakeControl;
use uia_patterns::{
    AnyPattern, Invoke, Pattern, PatternError, PatternKind, RangeValue, SelectionItem, Toggle,
};

#[test]
fn test_every_kind_resolves_when_supported() {
    init_logging();
    let control = FakeControl::new();
    let owner = control.unknown();

    let patterns: Vec<_> = PatternKind::ALL
        .iter()
        .map(|&kind| AnyPattern::resolve(kind, &owner).unwrap())
        .collect();

    assert!(patterns.iter().all(AnyPattern::is_bound));
    assert_eq!(control.refs(), 1 + PatternKind::ALL.len() as u32);

    drop(patterns);
    assert_eq!(control.refs(), 1);
}

#[test]
fn test_unsupported_is_not_an_error() {
    init_logging();
    let control = FakeControl::supporting(&[]);
    let owner = control.unknown();

    for kind in PatternKind::ALL {
        let pattern = AnyPattern::resolve(kind, &owner).unwrap();
        assert!(pattern.is_available(), "{}", kind);
    }
    assert_eq!(control.refs(), 1);
}

#[test]
fn test_unsupported_pattern_operations_fail() {
    init_logging();
    let control = FakeControl::supporting(&[PatternKind::Toggle]);
    let owner = control.unknown();

    let mut item: SelectionItem = resolver::resolve(&owner).unwrap();
    assert_eq!(item.select(), Err(PatternError::Unavailable(PatternKind::SelectionItem)));
    assert_eq!(item.is_selected(), Err(PatternError::Unavailable(PatternKind::SelectionItem)));
}

#[test]
fn test_failure_status_propagates() {
    init_logging();
    for status in [hresult::E_FAIL, hresult::E_ACCESSDENIED, hresult::UIA_E_ELEMENTNOTAVAILABLE] {
        let control = FakeControl::new();
        control.set_query_status(status);
        let owner = control.unknown();

        let err = resolver::resolve::<RangeValue, _>(&owner).unwrap_err();
        assert_eq!(err.hresult(), Some(status));
        assert_eq!(control.refs(), 1);
    }
}

#[test]
fn test_pointer_written_on_failure_is_released() {
    init_logging();
    let control = FakeControl::new();
    control.set_query_status(hresult::E_UNEXPECTED);
    control.set_write_on_failure(true);
    let owner = control.unknown();

    assert!(resolver::query::<dyn RawTogglePattern, _>(&owner).is_err());
    assert_eq!(control.refs(), 1);
}

#[test]
fn test_success_without_pointer() {
    init_logging();
    let control = FakeControl::new();
    control.set_null_on_success(true);
    let owner = control.unknown();

    let err = resolver::resolve::<Invoke, _>(&owner).unwrap_err();
    assert_eq!(
        err,
        PatternError::Com(ComError::NullOutput { iid: PatternKind::Invoke.iid() })
    );
    assert_eq!(control.refs(), 1);
}

#[test]
fn test_lazy_resolution_from_owner() {
    init_logging();
    let control = FakeControl::new();

    let mut toggle = Toggle::with_owner(control.unknown());
    assert!(toggle.is_available());
    assert_eq!(control.queries(), 0);

    toggle.toggle().unwrap();
    toggle.toggle().unwrap();
    assert!(toggle.is_bound());
    assert_eq!(control.queries(), 1);
}

#[test]
fn test_lazy_unsupported_queries_once() {
    init_logging();
    let control = FakeControl::supporting(&[]);

    let mut toggle = Toggle::with_owner(control.unknown());
    for _ in 0..3 {
        assert_eq!(toggle.toggle(), Err(PatternError::Unavailable(PatternKind::Toggle)));
    }
    assert_eq!(control.queries(), 1);
}

#[test]
fn test_resolve_from_typed_owner() {
    init_logging();
    let control = FakeControl::new();
    let toggle_handle: ForeignHandle<dyn RawTogglePattern> = control.handle();

    // Any interface on the object can serve as the owner
    let range: RangeValue = resolver::resolve(&toggle_handle).unwrap();
    assert!(range.is_bound());

    let unknown: ForeignHandle<dyn RawUnknown> = toggle_handle.to_unknown();
    assert_eq!(unknown.iid(), iid::IUNKNOWN);
    assert!(unknown.same_object(&toggle_handle));
}
