//! The widget instances the host constructs.
//!
//! ARCHITECTURE
//! ============
//! Widgets own wiring, not policy: construction renders static markup,
//! hides what starts hidden, seeds editable fields from the payload, and
//! registers channel handlers that delegate to the gate and field modules.
//! A widget is ready the moment `init` returns; there is no teardown beyond
//! the host dropping the instance.

pub mod exercise;
pub mod tested_cell;
