//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::SlotAction`]s. Independent
//! of any UI framework; the runner decides when to poll.

pub mod map;

pub use tui_slots_types as types;

pub use map::{handle_key_event, should_quit};
