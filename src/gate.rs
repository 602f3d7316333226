//! Hint gate — attempt-gated disclosure, as a pure state machine.
//!
//! DESIGN
//! ======
//! Visibility is a function of the latest attempt count only, recomputed
//! fresh on every event. That means a count dropping back below the
//! threshold hides the hint again; the gate is deliberately not monotonic.
//! Attempts start at 1 on the first render, so the hint appears after two
//! failed attempts.

/// Attempt count at which the hint becomes visible.
pub const HINT_ATTEMPT_THRESHOLD: u64 = 3;

/// Tracks whether the hint panel is disclosed. Constructed hidden.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HintGate {
    visible: bool,
}

impl HintGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute visibility from the latest cumulative attempt count and
    /// return the new state. Idempotent for repeated values.
    pub fn observe(&mut self, attempt: u64) -> bool {
        self.visible = attempt >= HINT_ATTEMPT_THRESHOLD;
        self.visible
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        self.visible
    }
}

#[cfg(test)]
#[path = "gate_test.rs"]
mod tests;
