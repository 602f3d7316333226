//! Widget error taxonomy.
//!
//! POLICY
//! ======
//! The inbound channel is trusted and ordered, so malformed events are a
//! host defect, not something widgets paper over. The crate fails fast:
//! missing or mistyped payload fields surface as `Err` from dispatch and
//! leave the widget's visual state untouched. Widgets never panic on bad
//! input and never silently no-op.

/// Error returned by event accessors, payload parsing, and dispatch.
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    /// A recognized event arrived without a required payload field.
    #[error("event '{event}' missing required field '{field}'")]
    MissingField { event: String, field: String },
    /// A payload field is present but carries the wrong JSON type.
    #[error("event '{event}' field '{field}' is not {expected}")]
    InvalidField { event: String, field: String, expected: &'static str },
    /// An inbound event name no handler was registered for.
    #[error("no handler registered for event '{0}'")]
    UnknownEvent(String),
    /// The initialization payload could not be deserialized.
    #[error("invalid widget payload: {0}")]
    Payload(#[from] serde_json::Error),
}
