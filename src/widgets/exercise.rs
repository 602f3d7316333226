//! Exercise widget — a possible solution disclosed after repeated attempts.

use std::rc::Rc;

use tracing::debug;
use uuid::Uuid;

use crate::channel::Channel;
use crate::event::EVENT_ATTEMPT;
use crate::gate::HintGate;
use crate::markup;
use crate::mount::{ElementRef, Mount};
use crate::payload::ExercisePayload;

/// Hint panel gated on the host's attempt counter. Construction is the
/// entire lifecycle: once `init` returns the widget is ready and stays so.
pub struct ExerciseWidget {
    id: Uuid,
    hint: ElementRef,
}

impl ExerciseWidget {
    /// Render the hint panel hidden and subscribe to attempt notifications.
    pub fn init(mount: &mut Mount, channel: &Rc<Channel>, payload: &ExercisePayload) -> Self {
        mount.import_style("main.css");
        mount.append_markup(&markup::hint_section(&markup::hint_fragment(
            &payload.possible_solution,
        )));

        let hint = mount.element("hint");
        hint.borrow_mut().visible = false;

        let id = Uuid::new_v4();

        // The gate lives inside the handler; the element is its only output.
        let panel = Rc::clone(&hint);
        let mut gate = HintGate::new();
        channel.handle_event(EVENT_ATTEMPT, Box::new(move |event| {
            let attempt = event.require_u64("attempt")?;
            let visible = gate.observe(attempt);
            panel.borrow_mut().visible = visible;
            debug!(widget = %id, attempt, visible, "exercise: hint gate updated");
            Ok(())
        }));

        debug!(widget = %id, "exercise: ready");
        Self { id, hint }
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn hint_visible(&self) -> bool {
        self.hint.borrow().visible
    }
}

#[cfg(test)]
#[path = "exercise_test.rs"]
mod tests;
