use super::*;
use crate::mount::Mount;

fn field_set() -> FieldSet {
    let mut mount = Mount::new();
    let mut fields = FieldSet::new();
    fields.add_field("assertions", mount.element("assertions_editor"), "a == 1");
    fields.add_field("hint", mount.element("hint_editor"), "try again");
    fields
}

#[test]
fn seeding_produces_no_events() {
    let fields = field_set();
    assert_eq!(fields.value("assertions").as_deref(), Some("a == 1"));
    assert_eq!(fields.value("hint").as_deref(), Some("try again"));
}

#[test]
fn remote_overwrite_wins_over_pending_edit() {
    let mut fields = field_set();
    fields.focus("hint");
    fields.input("half-typed");

    fields.apply_remote("hint", "X");
    assert_eq!(fields.value("hint").as_deref(), Some("X"));

    // The discarded edit never commits.
    assert!(fields.blur().is_none());
}

#[test]
fn blur_commits_exactly_one_event_for_the_edited_field() {
    let mut fields = field_set();
    fields.focus("hint");
    fields.input("Y");

    let event = fields.blur().expect("commit");
    assert_eq!(event.name, "update_hint");
    assert_eq!(event.require_str("hint").unwrap(), "Y");

    // Nothing further pending anywhere.
    fields.focus("assertions");
    assert!(fields.blur().is_none());
}

#[test]
fn blur_without_edit_is_silent() {
    let mut fields = field_set();
    fields.focus("assertions");
    assert!(fields.blur().is_none());
}

#[test]
fn flush_commits_pending_edit_and_keeps_focus() {
    let mut fields = field_set();
    fields.focus("assertions");
    fields.input("Z");

    let event = fields.flush().expect("commit");
    assert_eq!(event.require_str("assertions").unwrap(), "Z");

    // Focus survives the flush; a later edit still commits on blur.
    fields.input("Z2");
    assert_eq!(fields.blur().unwrap().require_str("assertions").unwrap(), "Z2");
}

#[test]
fn flush_without_pending_edit_is_silent() {
    let mut fields = field_set();
    assert!(fields.flush().is_none());

    fields.focus("hint");
    assert!(fields.flush().is_none());
}

#[test]
fn moving_focus_commits_the_previous_field() {
    let mut fields = field_set();
    fields.focus("assertions");
    fields.input("edited");

    let event = fields.focus("hint").expect("commit on focus change");
    assert_eq!(event.name, "update_assertions");
    assert_eq!(event.require_str("assertions").unwrap(), "edited");
}

#[test]
fn input_without_focus_is_ignored() {
    let mut fields = field_set();
    fields.input("nowhere");
    assert_eq!(fields.value("assertions").as_deref(), Some("a == 1"));
    assert!(fields.flush().is_none());
}

#[test]
fn refocusing_the_same_field_keeps_the_edit_pending() {
    let mut fields = field_set();
    fields.focus("hint");
    fields.input("draft");
    assert!(fields.focus("hint").is_none());
    assert_eq!(fields.flush().unwrap().require_str("hint").unwrap(), "draft");
}
