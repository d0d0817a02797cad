//! Lifecycle Tests - reference counting and subsystem initialization
//!
//! These tests check that every foreign reference taken is given back
//! exactly once:
//! - Handle clone and drop
//! - Pattern bind, rebind and unbind
//! - Native subsystem init and shutdown pairing

use integration_tests::*;
use uia_com::{hresult, ApartmentType, ComError, ComRuntime, RuntimeConfig, RuntimeState};
use uia_patterns::patterns::{RawRangeValuePattern, RawTogglePattern};
use uia_patterns::testing::{FakeControl, FakeSubsystem};
use uia_patterns::{Pattern, RangeValue, Toggle, ToggleState};

#[test]
fn test_handle_clone_and_drop_balance() {
    init_logging();
    let control = FakeControl::new();

    let handle = control.unknown();
    let clones: Vec<_> = (0..16).map(|_| handle.clone()).collect();
    assert_eq!(control.refs(), 17);

    drop(clones);
    assert_eq!(control.refs(), 1);
    drop(handle);
    assert_eq!(control.refs(), 0);
}

#[test]
fn test_new_pattern_is_unbound() {
    init_logging();
    let toggle = Toggle::new();
    assert!(toggle.is_available());
    assert!(!toggle.is_bound());
}

#[test]
fn test_bind_takes_one_reference() {
    init_logging();
    let control = FakeControl::new();

    let mut range = RangeValue::new();
    range.bind(control.handle::<dyn RawRangeValuePattern>());
    assert!(range.is_bound());
    assert_eq!(control.refs(), 1);

    drop(range);
    assert_eq!(control.refs(), 0);
}

#[test]
fn test_rebind_releases_previous_exactly_once() {
    init_logging();
    let first = FakeControl::new();
    let second = FakeControl::new();

    let mut toggle = Toggle::new();
    toggle.bind(first.handle::<dyn RawTogglePattern>());
    toggle.bind(second.handle::<dyn RawTogglePattern>());

    assert_eq!(first.refs(), 0);
    assert_eq!(second.refs(), 1);

    // The new binding is the one that is used
    second.set_toggle_raw(1);
    assert_eq!(toggle.current_state(), Ok(ToggleState::On));
}

#[test]
fn test_repeated_rebind_does_not_leak() {
    init_logging();
    let control = FakeControl::new();
    let keep = control.unknown();

    let mut toggle = Toggle::new();
    for _ in 0..1000 {
        toggle.bind(control.handle::<dyn RawTogglePattern>());
    }

    assert_eq!(control.refs(), 2);
    toggle.unbind();
    assert_eq!(control.refs(), 1);
    drop(keep);
    assert_eq!(control.refs(), 0);
}

#[test]
fn test_unbind_is_idempotent() {
    init_logging();
    let control = FakeControl::new();

    let mut toggle = Toggle::new();
    toggle.bind(control.handle::<dyn RawTogglePattern>());
    toggle.unbind();
    toggle.unbind();

    assert!(toggle.is_available());
    assert_eq!(control.refs(), 0);
}

#[test]
fn test_runtime_init_and_shutdown_pair() {
    init_logging();
    let (subsystem, calls) = FakeSubsystem::new(hresult::S_OK);
    let config = RuntimeConfig::new().apartment(ApartmentType::Mta);

    let mut runtime = ComRuntime::init(subsystem, config).unwrap();
    assert_eq!(runtime.state(), RuntimeState::Owned);
    assert_eq!(calls.initialize.get(), 1);
    assert_eq!(calls.last_apartment.get(), Some(ApartmentType::Mta));

    runtime.shutdown();
    runtime.shutdown();
    drop(runtime);
    assert_eq!(calls.uninitialize.get(), 1);
}

#[test]
fn test_runtime_already_initialized() {
    init_logging();
    let (subsystem, calls) = FakeSubsystem::new(hresult::S_FALSE);

    let runtime = ComRuntime::init(subsystem, RuntimeConfig::new()).unwrap();
    assert_eq!(runtime.state(), RuntimeState::Owned);
    drop(runtime);
    assert_eq!(calls.uninitialize.get(), 1);
}

#[test]
fn test_runtime_changed_mode() {
    init_logging();
    let (subsystem, _) = FakeSubsystem::new(hresult::RPC_E_CHANGED_MODE);
    let err = ComRuntime::init(subsystem, RuntimeConfig::new()).unwrap_err();
    assert_eq!(err, ComError::RuntimeInit(hresult::RPC_E_CHANGED_MODE));

    let (subsystem, calls) = FakeSubsystem::new(hresult::RPC_E_CHANGED_MODE);
    let config = RuntimeConfig::new().allow_changed_mode(true);
    let runtime = ComRuntime::init(subsystem, config).unwrap();
    assert_eq!(runtime.state(), RuntimeState::Borrowed);
    assert!(runtime.is_active());

    drop(runtime);
    assert_eq!(calls.uninitialize.get(), 0);
}

#[test]
fn test_runtime_init_failure_never_uninitializes() {
    init_logging();
    let (subsystem, calls) = FakeSubsystem::new(hresult::E_OUTOFMEMORY);

    assert!(ComRuntime::init(subsystem, RuntimeConfig::new()).is_err());
    assert_eq!(calls.initialize.get(), 1);
    assert_eq!(calls.uninitialize.get(), 0);
}
