//! Initialization payloads handed to widgets at construction.
//!
//! Payloads arrive as JSON from the host. Parsing is strict apart from
//! `hide`, which defaults to false so older hosts that never send the flag
//! still get a visible editor.

use serde::{Deserialize, Serialize};

use crate::error::WidgetError;

/// Payload for the exercise widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExercisePayload {
    /// HTML fragment shown inside the hint panel, newline-delimited.
    pub possible_solution: String,
}

/// Payload for the tested-cell widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestedCellPayload {
    /// Hide the teacher editor for this instance. Fixed at construction.
    #[serde(default)]
    pub hide: bool,
    /// Initial value of the assertions field.
    pub assertions: String,
    /// Initial value of the hint field.
    pub hint: String,
    /// HTML fragment shown inside the hint panel, newline-delimited.
    pub hint_html: String,
}

impl ExercisePayload {
    /// Parse from the host's JSON payload.
    ///
    /// # Errors
    ///
    /// `Payload` if the value does not match the expected shape.
    pub fn from_value(value: serde_json::Value) -> Result<Self, WidgetError> {
        Ok(serde_json::from_value(value)?)
    }
}

impl TestedCellPayload {
    /// Parse from the host's JSON payload.
    ///
    /// # Errors
    ///
    /// `Payload` if the value does not match the expected shape.
    pub fn from_value(value: serde_json::Value) -> Result<Self, WidgetError> {
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
#[path = "payload_test.rs"]
mod tests;
