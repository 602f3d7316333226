//! Notebook cell widgets — attempt-gated hints and teacher-editor field sync.
//!
//! ARCHITECTURE
//! ============
//! Two widget kinds embed in a host notebook runtime. The host owns the
//! transport and the document model; this crate owns the widget state
//! machines behind them:
//! - `ExerciseWidget` — a hint panel revealed once the attempt count crosses
//!   a threshold.
//! - `TestedCellWidget` — the same hint gate plus a teacher-facing editor
//!   whose fields sync bidirectionally with a remote authoritative value.
//!
//! The host hands each widget a [`Mount`] (its exclusively owned render
//! surface), a [`Channel`] (duplex named-event channel), and a JSON payload
//! at construction. After that, state changes arrive as inbound events or
//! originate from local edits and are pushed outbound.
//!
//! CONCURRENCY
//! ===========
//! Everything runs on the host's UI event loop: single-threaded, `Rc` and
//! `RefCell` throughout, deliberately not `Send`. The one ordering-critical
//! contract is [`Channel::flush`] — any commit it triggers is queued before
//! the call returns, so the host never snapshots stale editor state.

pub mod channel;
pub mod error;
pub mod event;
pub mod field;
pub mod gate;
pub mod markup;
pub mod mount;
pub mod payload;
pub mod widgets;

pub use channel::Channel;
pub use error::WidgetError;
pub use event::{Data, Event, EVENT_ATTEMPT, EVENT_UPDATE_ASSERTIONS, EVENT_UPDATE_HINT};
pub use field::{EditableField, FieldSet};
pub use gate::{HINT_ATTEMPT_THRESHOLD, HintGate};
pub use mount::{Element, ElementRef, Mount};
pub use payload::{ExercisePayload, TestedCellPayload};
pub use widgets::exercise::ExerciseWidget;
pub use widgets::tested_cell::TestedCellWidget;
