use std::rc::Rc;

use super::*;
use crate::event::{Data, Event};

fn payload(hide: bool) -> TestedCellPayload {
    TestedCellPayload {
        hide,
        assertions: "a == 1".into(),
        hint: "try again".into(),
        hint_html: "<code>foo</code>".into(),
    }
}

fn build(hide: bool) -> (Mount, Rc<Channel>, TestedCellWidget) {
    let mut mount = Mount::new();
    let channel = Rc::new(Channel::new());
    let widget = TestedCellWidget::init(&mut mount, &channel, &payload(hide));
    (mount, channel, widget)
}

#[test]
fn hidden_construction_scenario() {
    let (mount, channel, widget) = build(true);

    assert!(!widget.editor_visible());
    assert!(!widget.hint_visible());
    assert_eq!(widget.field_value(FIELD_ASSERTIONS).as_deref(), Some("a == 1"));
    assert_eq!(widget.field_value(FIELD_HINT).as_deref(), Some("try again"));

    // Seeding comes straight from the payload, never through the channel.
    assert!(channel.drain_outbound().is_empty());
    assert_eq!(mount.style_imports(), ["main.css"]);
    assert!(mount.markup().contains("<code><span class=\"new-line\"></span>foo</code>"));
}

#[test]
fn editor_visibility_is_fixed_at_construction() {
    let (_mount, channel, widget) = build(false);
    assert!(widget.editor_visible());

    channel.dispatch(&Event::field_update(FIELD_HINT, "new")).unwrap();
    channel.dispatch(&Event::attempt(5)).unwrap();
    channel.flush();
    assert!(widget.editor_visible());
}

#[test]
fn remote_update_overwrites_pending_edit() {
    let (_mount, channel, widget) = build(false);

    widget.focus(FIELD_HINT);
    widget.input("half-typed");
    channel.dispatch(&Event::field_update(FIELD_HINT, "X")).unwrap();

    assert_eq!(widget.field_value(FIELD_HINT).as_deref(), Some("X"));

    // The discarded edit never commits.
    widget.blur();
    assert!(channel.drain_outbound().is_empty());
}

#[test]
fn blur_commits_exactly_one_event() {
    let (_mount, channel, widget) = build(false);

    widget.focus(FIELD_ASSERTIONS);
    widget.input("a == 2");
    widget.blur();

    let drained = channel.drain_outbound();
    assert_eq!(drained.len(), 1);
    assert_eq!(drained[0].name, "update_assertions");
    assert_eq!(drained[0].require_str(FIELD_ASSERTIONS).unwrap(), "a == 2");
}

#[test]
fn flush_commits_pending_edit_before_returning() {
    let (_mount, channel, widget) = build(false);

    widget.focus(FIELD_HINT);
    widget.input("Z");
    channel.flush();

    let drained = channel.drain_outbound();
    assert_eq!(drained.len(), 1);
    assert_eq!(drained[0].require_str(FIELD_HINT).unwrap(), "Z");

    // No pending edit, no commit.
    channel.flush();
    assert!(channel.drain_outbound().is_empty());
}

#[test]
fn hint_gate_recomputes_per_attempt() {
    let (_mount, channel, widget) = build(true);

    for (attempt, visible) in [(1, false), (2, false), (3, true), (2, false)] {
        channel.dispatch(&Event::attempt(attempt)).unwrap();
        assert_eq!(widget.hint_visible(), visible, "attempt {attempt}");
    }
}

#[test]
fn sync_still_runs_while_the_editor_is_hidden() {
    let (_mount, channel, widget) = build(true);

    channel.dispatch(&Event::field_update(FIELD_ASSERTIONS, "b == 2")).unwrap();
    assert_eq!(widget.field_value(FIELD_ASSERTIONS).as_deref(), Some("b == 2"));

    widget.focus(FIELD_HINT);
    widget.input("still syncing");
    channel.flush();
    assert_eq!(channel.drain_outbound().len(), 1);
}

#[test]
fn malformed_update_fails_fast_and_changes_nothing() {
    let (_mount, channel, widget) = build(false);

    let malformed = Event::new("update_hint", Data::new());
    assert!(channel.dispatch(&malformed).is_err());
    assert_eq!(widget.field_value(FIELD_HINT).as_deref(), Some("try again"));
}

#[test]
fn moving_focus_commits_the_previous_field() {
    let (_mount, channel, widget) = build(false);

    widget.focus(FIELD_ASSERTIONS);
    widget.input("edited");
    widget.focus(FIELD_HINT);

    let drained = channel.drain_outbound();
    assert_eq!(drained.len(), 1);
    assert_eq!(drained[0].name, "update_assertions");
}
