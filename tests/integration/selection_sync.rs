//! Selection and external sync between a caller-owned value and the group
//!
//! The caller holds an `Observable`; the group follows it and reports clicks
//! through `value-changed` and `change`.

use std::cell::RefCell;
use std::rc::Rc;

use super::common::fixtures::{named_options, three_options};
use button_group::{
    ButtonGroup, ButtonGroupEvent, ButtonGroupState, FieldValue, Observable, OptionRecord,
    Subscription,
};
use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

type EventLog = Rc<RefCell<Vec<ButtonGroupEvent>>>;

fn record_events(state: &ButtonGroupState) -> (EventLog, Subscription) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let log_clone = Rc::clone(&log);
    let sub = state.on_event(move |event| log_clone.borrow_mut().push(event.clone()));
    (log, sub)
}

fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_click_second_of_three() {
    let options = three_options();
    let selected = Observable::new(FieldValue::from("option1"));
    let state = ButtonGroupState::bound(&selected);
    let group = ButtonGroup::new(&options);
    let area = Rect::new(0, 0, 40, 1);
    let (log, _sub) = record_events(&state);

    assert_eq!(group.active_index(&state), Some(0));

    // Column 15 lies inside " Option 2 "
    group.handle_mouse(area, &state, left_click(15, 0));

    assert_eq!(state.active_value(), FieldValue::from("option2"));
    assert_eq!(
        *log.borrow(),
        vec![
            ButtonGroupEvent::ValueChanged(FieldValue::from("option2")),
            ButtonGroupEvent::Change(FieldValue::from("option2")),
        ]
    );
    // The component never writes the caller's value itself
    assert_eq!(selected.get(), FieldValue::from("option1"));
}

#[test]
fn test_empty_options_with_null_selection() {
    let options: Vec<OptionRecord> = Vec::new();
    let selected = Observable::new(FieldValue::Null);
    let state = ButtonGroupState::bound(&selected);
    let group = ButtonGroup::new(&options);
    let area = Rect::new(0, 0, 20, 1);
    let (log, _sub) = record_events(&state);

    assert!(group.layout(area, &state).is_empty());
    assert_eq!(group.handle_mouse(area, &state, left_click(0, 0)), None);
    assert_eq!(state.select(&options, group.field_names(), 0), None);
    assert!(log.borrow().is_empty());
}

#[test]
fn test_custom_fields_click() {
    let options = named_options();
    let selected = Observable::new(FieldValue::Int(1));
    let state = ButtonGroupState::bound(&selected);
    let group = ButtonGroup::new(&options)
        .label_field("name")
        .value_field("id");
    let area = Rect::new(0, 0, 20, 1);

    let labels: Vec<String> = group
        .layout(area, &state)
        .into_iter()
        .map(|slot| slot.label)
        .collect();
    assert_eq!(labels, vec!["One", "Two"]);

    // "▐ One │ Two ▌": the second button starts at column 7
    group.handle_mouse(area, &state, left_click(8, 0));

    assert_eq!(state.active_value(), FieldValue::Int(2));
}

#[test]
fn test_external_update_rederives_active_marker() {
    let options = three_options();
    let selected = Observable::new(FieldValue::from("option1"));
    let state = ButtonGroupState::bound(&selected);
    let group = ButtonGroup::new(&options);
    let (log, _sub) = record_events(&state);

    selected.set(FieldValue::from("option3"));

    let active: Vec<bool> = group
        .layout(Rect::new(0, 0, 40, 1), &state)
        .iter()
        .map(|slot| slot.active)
        .collect();
    assert_eq!(active, vec![false, false, true]);
    assert!(log.borrow().is_empty(), "external sync must not emit");
}

#[test]
fn test_two_way_binding_through_value_changed() {
    let options = three_options();
    let selected = Observable::new(FieldValue::from("option1"));
    let state = ButtonGroupState::bound(&selected);
    let group = ButtonGroup::new(&options);

    let sink = selected.clone();
    let _binding = state.on_value_changed(move |value| sink.set(value.clone()));

    let side_effects = Rc::new(RefCell::new(Vec::new()));
    let effects_clone = Rc::clone(&side_effects);
    let _change = state.on_change(move |value| effects_clone.borrow_mut().push(value.clone()));

    state.select(group.options(), group.field_names(), 2);

    assert_eq!(selected.get(), FieldValue::from("option3"));
    assert_eq!(state.active_value(), FieldValue::from("option3"));
    assert_eq!(*side_effects.borrow(), vec![FieldValue::from("option3")]);
    assert_eq!(selected.version(), 1);
}

#[test]
fn test_unadopted_click_is_reverted_by_next_external_change() {
    let options = three_options();
    let selected = Observable::new(FieldValue::from("option1"));
    let state = ButtonGroupState::bound(&selected);
    let group = ButtonGroup::new(&options);

    state.select(group.options(), group.field_names(), 1);
    assert_eq!(group.active_index(&state), Some(1));

    // Re-asserting the same value is not a change
    selected.set(FieldValue::from("option1"));
    assert_eq!(group.active_index(&state), Some(1));

    selected.set(FieldValue::from("option2"));
    selected.set(FieldValue::from("option1"));
    assert_eq!(group.active_index(&state), Some(0));
}

#[test]
fn test_dropped_listener_stops_receiving() {
    let options = three_options();
    let state = ButtonGroupState::default();
    let (log, sub) = record_events(&state);

    state.select(&options, &Default::default(), 0);
    drop(sub);
    state.select(&options, &Default::default(), 1);

    assert_eq!(log.borrow().len(), 2);
}
