//! Pattern Tests - typed operations end to end
//!
//! Each pattern is resolved from a fake element and driven through its
//! operations, including the failure paths where the provider rejects a
//! call or reports a value outside the known set.

use integration_tests::*;
use uia_com::{hresult, ComError};
use uia_patterns::{
    ExpandCollapse, ExpandCollapseState, Invoke, PatternError, PatternKind, RangeValue,
    SelectionItem, Toggle, ToggleState, Value,
};

#[test]
fn test_slider_workflow() {
    let runtime = runtime();
    let (control, mut element) = element_with(&runtime, &[PatternKind::RangeValue]);
    control.set_range_bounds(-50.0, 50.0);
    control.set_range_steps(0.5, 5.0);

    let slider = element.pattern_mut::<RangeValue>().unwrap();
    assert_eq!(slider.is_read_only(), Ok(false));
    assert_eq!(slider.minimum(), Ok(-50.0));
    assert_eq!(slider.maximum(), Ok(50.0));

    let step = slider.large_change().unwrap();
    let start = slider.value().unwrap();
    slider.set_value(start + step).unwrap();
    assert_eq!(slider.value(), Ok(5.0));
    assert_eq!(slider.small_change(), Ok(0.5));
}

#[test]
fn test_read_only_slider_rejects_writes() {
    let runtime = runtime();
    let (control, mut element) = element_with(&runtime, &[PatternKind::RangeValue]);
    control.set_range_read_only_raw(1);

    let slider = element.pattern_mut::<RangeValue>().unwrap();
    assert_eq!(slider.is_read_only(), Ok(true));
    let err = slider.set_value(1.0).unwrap_err();
    assert!(err.is_hresult(hresult::UIA_E_INVALIDOPERATION));
    assert_eq!(slider.value(), Ok(0.0));
}

#[test]
fn test_checkbox_cycle() {
    let runtime = runtime();
    let (_control, mut element) = element_with(&runtime, &[PatternKind::Toggle]);

    let checkbox = element.pattern_mut::<Toggle>().unwrap();
    let mut seen = Vec::new();
    for _ in 0..4 {
        seen.push(checkbox.current_state().unwrap());
        checkbox.toggle().unwrap();
    }
    assert_eq!(
        seen,
        vec![ToggleState::Off, ToggleState::On, ToggleState::Off, ToggleState::On]
    );
}

#[test]
fn test_unknown_toggle_state_is_an_error() {
    let runtime = runtime();
    let (control, mut element) = element_with(&runtime, &[PatternKind::Toggle]);
    control.set_toggle_raw(-1);

    let checkbox = element.pattern_mut::<Toggle>().unwrap();
    assert_eq!(
        checkbox.current_state(),
        Err(PatternError::InvalidEnumValue { name: "ToggleState", value: -1 })
    );
}

#[test]
fn test_list_item_selection() {
    let runtime = runtime();
    let (control, mut element) = element_with(&runtime, &[PatternKind::SelectionItem]);

    let item = element.pattern_mut::<SelectionItem>().unwrap();
    assert_eq!(item.is_selected(), Ok(false));
    item.add_to_selection().unwrap();
    assert_eq!(item.is_selected(), Ok(true));
    item.remove_from_selection().unwrap();
    assert_eq!(item.is_selected(), Ok(false));

    // Only exactly 1 reads as selected
    control.set_selected_raw(2);
    assert_eq!(item.is_selected(), Ok(false));
}

#[test]
fn test_edit_box_value() {
    let runtime = runtime();
    let (_control, mut element) = element_with(&runtime, &[PatternKind::Value]);

    let edit = element.pattern_mut::<Value>().unwrap();
    assert_eq!(edit.is_read_only(), Ok(false));
    edit.set_value("hello, wörld").unwrap();
    assert_eq!(edit.value(), Ok("hello, wörld".to_string()));
}

#[test]
fn test_edit_box_malformed_text() {
    let runtime = runtime();
    let (control, mut element) = element_with(&runtime, &[PatternKind::Value]);
    control.set_text_raw(vec![0xDC00, 0x0041]);

    let edit = element.pattern_mut::<Value>().unwrap();
    assert!(matches!(edit.value(), Err(PatternError::Com(ComError::InvalidData(_)))));
}

#[test]
fn test_button_invoke() {
    let runtime = runtime();
    let (control, mut element) = element_with(&runtime, &[PatternKind::Invoke]);

    element.pattern_mut::<Invoke>().unwrap().invoke().unwrap();
    assert_eq!(control.invocations(), 1);

    control.fail_calls_with(hresult::UIA_E_ELEMENTNOTENABLED);
    let err = element.pattern_mut::<Invoke>().unwrap().invoke().unwrap_err();
    assert!(err.is_hresult(hresult::UIA_E_ELEMENTNOTENABLED));
    assert_eq!(control.invocations(), 1);

    control.clear_failure();
    element.pattern_mut::<Invoke>().unwrap().invoke().unwrap();
    assert_eq!(control.invocations(), 2);
}

#[test]
fn test_tree_node_expand_collapse() {
    let runtime = runtime();
    let (_control, mut element) = element_with(&runtime, &[PatternKind::ExpandCollapse]);

    let node = element.pattern_mut::<ExpandCollapse>().unwrap();
    node.expand().unwrap();
    assert_eq!(node.current_state(), Ok(ExpandCollapseState::Expanded));
    node.collapse().unwrap();
    assert_eq!(node.current_state(), Ok(ExpandCollapseState::Collapsed));
}

#[test]
fn test_failed_getter_output_is_discarded() {
    let runtime = runtime();
    let (control, mut element) = element_with(&runtime, &PatternKind::ALL);
    control.set_range_bounds(0.0, 10.0);
    control.set_toggle_raw(1);
    control.fail_calls_with(hresult::E_FAIL);

    let err = element.pattern_mut::<RangeValue>().unwrap().maximum().unwrap_err();
    assert_eq!(err, PatternError::Com(ComError::ForeignCallFailed(hresult::E_FAIL)));

    let err = element.pattern_mut::<Toggle>().unwrap().current_state().unwrap_err();
    assert!(err.is_hresult(hresult::E_FAIL));
}

#[test]
fn test_positive_status_is_failure() {
    let runtime = runtime();
    let (control, mut element) = element_with(&runtime, &[PatternKind::SelectionItem]);
    control.set_selected_raw(1);
    control.fail_calls_with(hresult::S_FALSE);

    let err = element.pattern_mut::<SelectionItem>().unwrap().is_selected().unwrap_err();
    assert!(err.is_hresult(hresult::S_FALSE));
}

#[test]
fn test_element_gone() {
    let runtime = runtime();
    let (control, mut element) = element_with(&runtime, &[PatternKind::Toggle]);
    control.fail_calls_with(hresult::UIA_E_ELEMENTNOTAVAILABLE);

    let err = element.pattern_mut::<Toggle>().unwrap().toggle().unwrap_err();
    assert!(err.is_element_gone());
}
