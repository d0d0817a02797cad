//! Element Tests - pattern cache and runtime coupling
//!
//! The element keeps one pattern per kind, holds a reference for each
//! cached pattern and gives all of them back on release or drop.

use integration_tests::*;
use uia_com::hresult;
use uia_patterns::{
    ExpandCollapse, Invoke, Pattern, PatternError, PatternKind, RangeValue, SelectionItem,
    Toggle, Value,
};

#[test]
fn test_cache_holds_one_reference_per_kind() {
    let runtime = runtime();
    let (control, mut element) = element_with(&runtime, &PatternKind::ALL);

    element.pattern_mut::<RangeValue>().unwrap();
    element.pattern_mut::<SelectionItem>().unwrap();
    element.pattern_mut::<Toggle>().unwrap();
    element.pattern_mut::<Value>().unwrap();
    element.pattern_mut::<Invoke>().unwrap();
    element.pattern_mut::<ExpandCollapse>().unwrap();
    element.pattern_mut::<Toggle>().unwrap();

    assert_eq!(element.cached_kinds(), PatternKind::ALL.to_vec());
    assert_eq!(control.refs(), 7);
    assert_eq!(control.queries(), 6);

    element.release_patterns();
    assert_eq!(control.refs(), 1);

    drop(element);
    assert_eq!(control.refs(), 0);
}

#[test]
fn test_cached_state_survives_between_calls() {
    let runtime = runtime();
    let (_control, mut element) = element_with(&runtime, &[PatternKind::SelectionItem]);

    element.pattern_mut::<SelectionItem>().unwrap().select().unwrap();
    assert_eq!(element.pattern_mut::<SelectionItem>().unwrap().is_selected(), Ok(true));
}

#[test]
fn test_uncached_patterns_are_independent() {
    let runtime = runtime();
    let (control, element) = element_with(&runtime, &[PatternKind::Toggle]);

    let a: Toggle = element.pattern().unwrap();
    let b: Toggle = element.pattern().unwrap();
    assert!(a.is_bound() && b.is_bound());
    assert_eq!(control.refs(), 3);
    assert!(element.cached_kinds().is_empty());

    drop(a);
    assert_eq!(control.refs(), 2);
}

#[test]
fn test_lazy_pattern_outlives_element() {
    let runtime = runtime();
    let (control, element) = element_with(&runtime, &[PatternKind::Invoke]);

    let mut invoke = element.lazy_pattern::<Invoke>();
    drop(element);
    assert_eq!(control.refs(), 1);

    invoke.invoke().unwrap();
    assert_eq!(control.invocations(), 1);

    drop(invoke);
    assert_eq!(control.refs(), 0);
}

#[test]
fn test_supports_reports_catalog() {
    let runtime = runtime();
    let (_control, element) =
        element_with(&runtime, &[PatternKind::Value, PatternKind::ExpandCollapse]);

    let supported: Vec<_> = PatternKind::ALL
        .into_iter()
        .filter(|&kind| element.supports(kind).unwrap())
        .collect();
    assert_eq!(supported, vec![PatternKind::Value, PatternKind::ExpandCollapse]);
}

#[test]
fn test_unsupported_kind_fails_without_requery() {
    let runtime = runtime();
    let (control, mut element) = element_with(&runtime, &[]);

    for _ in 0..3 {
        let err = element.pattern_mut::<Toggle>().unwrap().toggle().unwrap_err();
        assert_eq!(err, PatternError::Unavailable(PatternKind::Toggle));
    }
    assert_eq!(control.queries(), 1);
}

#[test]
fn test_element_requires_active_runtime() {
    let mut runtime = runtime();
    runtime.shutdown();

    let control = uia_patterns::testing::FakeControl::new();
    let err = uia_patterns::AutomationElement::new(&runtime, control.unknown()).unwrap_err();
    assert!(matches!(err, PatternError::InvalidState(_)));
    assert_eq!(control.refs(), 0);
}

#[test]
fn test_query_failure_leaves_cache_empty() {
    let runtime = runtime();
    let (control, mut element) = element_with(&runtime, &PatternKind::ALL);
    control.set_query_status(hresult::RPC_E_DISCONNECTED);

    let err = element.pattern_mut::<RangeValue>().unwrap_err();
    assert!(err.is_element_gone());
    assert!(element.cached_kinds().is_empty());
    assert_eq!(control.refs(), 1);
}

#[test]
fn test_unbind_through_cache_then_use() {
    let runtime = runtime();
    let (control, mut element) = element_with(&runtime, &[PatternKind::Toggle]);

    element.pattern_mut::<Toggle>().unwrap().unbind();
    element.pattern_mut::<Toggle>().unwrap().toggle().unwrap();

    let toggle = element.pattern_mut::<Toggle>().unwrap();
    assert_eq!(toggle.current_state(), Ok(uia_patterns::ToggleState::On));
    assert_eq!(control.refs(), 2);
}

#[test]
fn test_unsupported_entry_is_not_requeried_after_unbind() {
    let runtime = runtime();
    let (control, mut element) = element_with(&runtime, &[]);

    element.pattern_mut::<Toggle>().unwrap().unbind();
    let err = element.pattern_mut::<Toggle>().unwrap().toggle().unwrap_err();
    assert_eq!(err, PatternError::Unavailable(PatternKind::Toggle));
    assert_eq!(control.queries(), 1);
}
