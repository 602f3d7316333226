//! Field sync — keeps editable controls consistent with remote values.
//!
//! DESIGN
//! ======
//! Each field pairs a local editable control with a remote authoritative
//! value owned by the host. Inbound updates overwrite the local value
//! unconditionally; there is no merge and no conflict detection. Local edits
//! only travel outward on a commit: blur after an edit, or a host-driven
//! flush. Keystroke-level traffic never crosses the channel.
//!
//! The set tracks the focused field explicitly rather than relying on
//! ambient focus state. At most one control holds focus, so at most one
//! uncommitted edit can exist at a time — which is exactly what flush has to
//! hand over.

use tracing::warn;

use crate::event::Event;
use crate::mount::ElementRef;

// =============================================================================
// EDITABLE FIELD
// =============================================================================

/// One synced control. The element's `value` is the local value; `pending`
/// marks an uncommitted edit. Whenever `pending` is false, the local value
/// equals the last committed or remote value.
pub struct EditableField {
    name: String,
    element: ElementRef,
    pending: bool,
}

impl EditableField {
    /// Seed the control straight from the initialization payload. No channel
    /// round trip, no outbound event.
    pub fn new(name: impl Into<String>, element: ElementRef, initial: &str) -> Self {
        element.borrow_mut().value = initial.to_string();
        Self { name: name.into(), element, pending: false }
    }

    /// Unconditional remote-wins overwrite. Discards any uncommitted edit.
    pub fn apply_remote(&mut self, value: &str) {
        self.element.borrow_mut().value = value.to_string();
        self.pending = false;
    }

    /// Record uncommitted local input.
    pub fn edit(&mut self, text: &str) {
        self.element.borrow_mut().value = text.to_string();
        self.pending = true;
    }

    /// One-shot outbound push of the current local value, iff an edit is
    /// pending. Clears the pending mark.
    pub fn commit(&mut self) -> Option<Event> {
        if !self.pending {
            return None;
        }
        self.pending = false;
        Some(Event::field_update(&self.name, &self.element.borrow().value))
    }

    #[must_use]
    pub fn value(&self) -> String {
        self.element.borrow().value.clone()
    }
}

// =============================================================================
// FIELD SET
// =============================================================================

/// The editor's synced fields plus the explicitly tracked focused field.
#[derive(Default)]
pub struct FieldSet {
    fields: Vec<EditableField>,
    active: Option<usize>,
}

impl FieldSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_field(&mut self, name: impl Into<String>, element: ElementRef, initial: &str) {
        self.fields.push(EditableField::new(name, element, initial));
    }

    /// Move focus to a field. If another field was focused with an edit
    /// pending, that edit commits first — focus can only move after the
    /// previous control blurs.
    pub fn focus(&mut self, name: &str) -> Option<Event> {
        let Some(idx) = self.index_of(name) else {
            warn!(field = name, "fields: focus on unknown field");
            return None;
        };
        let committed = match self.active {
            Some(prev) if prev != idx => self.fields[prev].commit(),
            _ => None,
        };
        self.active = Some(idx);
        committed
    }

    /// Apply local input to the focused field. Ignored when nothing has
    /// focus.
    pub fn input(&mut self, text: &str) {
        if let Some(idx) = self.active {
            self.fields[idx].edit(text);
        }
    }

    /// Blur the focused field, committing its pending edit if any.
    pub fn blur(&mut self) -> Option<Event> {
        let idx = self.active.take()?;
        self.fields[idx].commit()
    }

    /// Host-driven flush: commit the focused field's pending edit without
    /// moving focus. Nothing pending, nothing pushed.
    pub fn flush(&mut self) -> Option<Event> {
        let idx = self.active?;
        self.fields[idx].commit()
    }

    /// Inbound remote-wins overwrite for one field.
    pub fn apply_remote(&mut self, name: &str, value: &str) {
        let Some(idx) = self.index_of(name) else {
            warn!(field = name, "fields: remote update for unknown field");
            return;
        };
        self.fields[idx].apply_remote(value);
    }

    #[must_use]
    pub fn value(&self, name: &str) -> Option<String> {
        self.index_of(name).map(|idx| self.fields[idx].value())
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }
}

#[cfg(test)]
#[path = "field_test.rs"]
mod tests;
