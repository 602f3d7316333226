//! Tested-cell widget — teacher editor with synced fields, plus the hint
//! gate students see.
//!
//! DESIGN
//! ======
//! The editor section's visibility is fixed at construction from the
//! payload's `hide` flag and never reacts to later traffic. Field sync runs
//! either way: a hidden editor still applies remote overwrites and still
//! answers the flush hook.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;
use uuid::Uuid;

use crate::channel::Channel;
use crate::event::{EVENT_ATTEMPT, EVENT_UPDATE_ASSERTIONS, EVENT_UPDATE_HINT};
use crate::field::FieldSet;
use crate::gate::HintGate;
use crate::markup;
use crate::mount::{ElementRef, Mount};
use crate::payload::TestedCellPayload;

/// Synced field backing the assertions textarea.
pub const FIELD_ASSERTIONS: &str = "assertions";

/// Synced field backing the hint textarea.
pub const FIELD_HINT: &str = "hint";

pub struct TestedCellWidget {
    id: Uuid,
    editor: ElementRef,
    hint_panel: ElementRef,
    fields: Rc<RefCell<FieldSet>>,
    channel: Rc<Channel>,
}

impl TestedCellWidget {
    /// Render both sections, seed the fields from the payload, and register
    /// every inbound handler plus the flush hook.
    pub fn init(mount: &mut Mount, channel: &Rc<Channel>, payload: &TestedCellPayload) -> Self {
        mount.import_style("main.css");
        mount.append_markup(markup::teacher_editor_section());
        mount.append_markup(&markup::hint_section(&markup::hint_fragment(&payload.hint_html)));

        let editor = mount.element("teacher_editor");
        editor.borrow_mut().visible = !payload.hide;

        let hint_panel = mount.element("hint");
        hint_panel.borrow_mut().visible = false;

        let mut set = FieldSet::new();
        set.add_field(FIELD_ASSERTIONS, mount.element("assertions_editor"), &payload.assertions);
        set.add_field(FIELD_HINT, mount.element("hint_editor"), &payload.hint);
        let fields = Rc::new(RefCell::new(set));

        let id = Uuid::new_v4();

        // Inbound remote-wins overwrites, one handler per synced field.
        for (event_name, field) in
            [(EVENT_UPDATE_ASSERTIONS, FIELD_ASSERTIONS), (EVENT_UPDATE_HINT, FIELD_HINT)]
        {
            let fields = Rc::clone(&fields);
            channel.handle_event(event_name, Box::new(move |event| {
                let value = event.require_str(field)?.to_string();
                fields.borrow_mut().apply_remote(field, &value);
                debug!(widget = %id, field, "tested_cell: remote overwrite");
                Ok(())
            }));
        }

        // Flush hook. Weak channel reference: the channel owns this closure,
        // a strong one would cycle and leak the instance.
        let weak = Rc::downgrade(channel);
        let flush_fields = Rc::clone(&fields);
        channel.handle_sync(Box::new(move || {
            if let Some(event) = flush_fields.borrow_mut().flush() {
                debug!(widget = %id, event = %event.name, "tested_cell: flush commit");
                if let Some(channel) = weak.upgrade() {
                    channel.push_event(event);
                }
            }
        }));

        let panel = Rc::clone(&hint_panel);
        let mut gate = HintGate::new();
        channel.handle_event(EVENT_ATTEMPT, Box::new(move |event| {
            let attempt = event.require_u64("attempt")?;
            let visible = gate.observe(attempt);
            panel.borrow_mut().visible = visible;
            debug!(widget = %id, attempt, visible, "tested_cell: hint gate updated");
            Ok(())
        }));

        debug!(widget = %id, hidden = payload.hide, "tested_cell: ready");
        Self { id, editor, hint_panel, fields, channel: Rc::clone(channel) }
    }
}

// =============================================================================
// LOCAL EDIT SURFACE
// =============================================================================

impl TestedCellWidget {
    /// Give a field input focus. If another field held a pending edit, its
    /// commit goes outbound first.
    pub fn focus(&self, field: &str) {
        if let Some(event) = self.fields.borrow_mut().focus(field) {
            self.channel.push_event(event);
        }
    }

    /// Type into the focused field. Stays local until a commit.
    pub fn input(&self, text: &str) {
        self.fields.borrow_mut().input(text);
    }

    /// Blur the focused field; a pending edit commits outbound.
    pub fn blur(&self) {
        if let Some(event) = self.fields.borrow_mut().blur() {
            self.channel.push_event(event);
        }
    }
}

// =============================================================================
// INSPECTION
// =============================================================================

impl TestedCellWidget {
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn editor_visible(&self) -> bool {
        self.editor.borrow().visible
    }

    #[must_use]
    pub fn hint_visible(&self) -> bool {
        self.hint_panel.borrow().visible
    }

    #[must_use]
    pub fn field_value(&self, field: &str) -> Option<String> {
        self.fields.borrow().value(field)
    }
}

#[cfg(test)]
#[path = "tested_cell_test.rs"]
mod tests;
