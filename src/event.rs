//! Event — the message type exchanged between host and widget.
//!
//! DESIGN
//! ======
//! Every message on the channel is an Event: a name plus a flat key-value
//! payload. The channel routes on `name` and never inspects `data`; typed
//! access happens at the handler via the `require_*` accessors, which fail
//! fast on missing or mistyped fields (see `error`).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::WidgetError;

// =============================================================================
// EVENT NAMES
// =============================================================================

/// Inbound: the host reports a new cumulative attempt count.
pub const EVENT_ATTEMPT: &str = "attempt";

/// Bidirectional: authoritative overwrite inbound, local commit outbound.
pub const EVENT_UPDATE_ASSERTIONS: &str = "update_assertions";

/// Bidirectional: authoritative overwrite inbound, local commit outbound.
pub const EVENT_UPDATE_HINT: &str = "update_hint";

// =============================================================================
// TYPES
// =============================================================================

/// Flat key-value payload. Alias to reduce noise in signatures.
pub type Data = HashMap<String, Value>;

/// A single named message on the widget channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    pub data: Data,
}

// =============================================================================
// CONSTRUCTORS
// =============================================================================

impl Event {
    pub fn new(name: impl Into<String>, data: Data) -> Self {
        Self { name: name.into(), data }
    }

    /// Inbound attempt notification, `{ attempt: n }`.
    #[must_use]
    pub fn attempt(attempt: u64) -> Self {
        Self::new(EVENT_ATTEMPT, Data::new()).with_field("attempt", attempt)
    }

    /// Commit event for an editable field: name `update_<field>`, payload
    /// `{ <field>: value }`. Both directions of field sync use this shape.
    #[must_use]
    pub fn field_update(field: &str, value: &str) -> Self {
        Self::new(format!("update_{field}"), Data::new()).with_field(field, value)
    }

    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }
}

// =============================================================================
// ACCESSORS
// =============================================================================

impl Event {
    /// Read a required unsigned integer field.
    ///
    /// # Errors
    ///
    /// `MissingField` if `key` is absent, `InvalidField` if it is not an
    /// unsigned integer.
    pub fn require_u64(&self, key: &str) -> Result<u64, WidgetError> {
        self.require(key)?
            .as_u64()
            .ok_or_else(|| self.invalid(key, "an unsigned integer"))
    }

    /// Read a required string field.
    ///
    /// # Errors
    ///
    /// `MissingField` if `key` is absent, `InvalidField` if it is not a
    /// string.
    pub fn require_str(&self, key: &str) -> Result<&str, WidgetError> {
        self.require(key)?
            .as_str()
            .ok_or_else(|| self.invalid(key, "a string"))
    }

    fn require(&self, key: &str) -> Result<&Value, WidgetError> {
        self.data.get(key).ok_or_else(|| WidgetError::MissingField {
            event: self.name.clone(),
            field: key.to_string(),
        })
    }

    fn invalid(&self, key: &str, expected: &'static str) -> WidgetError {
        WidgetError::InvalidField { event: self.name.clone(), field: key.to_string(), expected }
    }
}

#[cfg(test)]
#[path = "event_test.rs"]
mod tests;
