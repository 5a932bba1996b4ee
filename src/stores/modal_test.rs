use super::*;

// =============================================================
// ModalState
// =============================================================

#[test]
fn modal_state_default_is_hidden_and_empty() {
    let state = ModalState::default();
    assert!(!state.visible);
    assert!(state.lesson_number.is_none());
    assert!(state.message.is_none());
}

#[test]
fn for_lesson_accepts_numbers_and_strings() {
    assert_eq!(ModalState::for_lesson(3_i64).lesson_number, Some(LessonNumber::Number(3)));
    assert_eq!(ModalState::for_lesson("A-12").lesson_number, Some(LessonNumber::Text("A-12".to_owned())));
}

#[test]
fn lesson_number_displays_plainly() {
    assert_eq!(LessonNumber::Number(7).to_string(), "7");
    assert_eq!(LessonNumber::Text("A-12".to_owned()).to_string(), "A-12");
}

#[test]
fn modal_state_serializes_camel_case_without_empty_fields() {
    let json = serde_json::to_value(ModalState::for_lesson(4_i64)).unwrap();
    assert_eq!(json, serde_json::json!({"visible": true, "lessonNumber": 4}));

    let json = serde_json::to_value(ModalState::default()).unwrap();
    assert_eq!(json, serde_json::json!({"visible": false}));
}

#[test]
fn lesson_number_deserializes_either_shape() {
    let state: ModalState = serde_json::from_str(r#"{"visible": true, "lessonNumber": "B-2"}"#).unwrap();
    assert_eq!(state.lesson_number, Some(LessonNumber::Text("B-2".to_owned())));
    let state: ModalState = serde_json::from_str(r#"{"visible": true, "lessonNumber": 2}"#).unwrap();
    assert_eq!(state.lesson_number, Some(LessonNumber::Number(2)));
}

// =============================================================
// Store<ModalState>
// =============================================================

#[test]
fn show_and_hide_toggle_visibility() {
    let store = Store::<ModalState>::default();
    store.show_lesson(5_i64);
    assert!(store.is_visible());
    assert_eq!(store.get().lesson_number, Some(LessonNumber::Number(5)));

    store.hide();
    assert!(!store.is_visible());
    assert_eq!(store.get(), ModalState::default());
}

#[test]
fn show_message_sets_message() {
    let store = Store::<ModalState>::default();
    store.show_message("Not found");
    assert_eq!(store.get().message.as_deref(), Some("Not found"));
}

// =============================================================
// ModalStores
// =============================================================

#[test]
fn report_success_shows_target_modal() {
    let modals = ModalStores::default();
    modals.report(&modals.success, 1_i64, &Ok::<(), String>(()));
    assert!(modals.success.is_visible());
    assert!(!modals.error.is_visible());
}

#[test]
fn report_failure_shows_error_modal_with_message() {
    let modals = ModalStores::default();
    modals.report(&modals.cancel, 1_i64, &Err::<(), String>("Conflict".to_owned()));
    assert!(!modals.cancel.is_visible());
    assert_eq!(modals.error.get().message.as_deref(), Some("Conflict"));
}

#[test]
fn hide_all_clears_every_modal() {
    let modals = ModalStores::default();
    modals.success.show_lesson(1_i64);
    modals.error.show_message("x");
    modals.hide_all();
    assert!(!modals.success.is_visible());
    assert!(!modals.error.is_visible());
}
