//! TUI Slots (workspace facade crate).
//!
//! Re-exports the member crates as `tui_slots::{core,input,term,types}` and
//! hosts the pieces shared by both binaries: command-line options and logger
//! setup.

pub mod cli;
pub mod logging;

pub use tui_slots_core as core;
pub use tui_slots_input as input;
pub use tui_slots_term as term;
pub use tui_slots_types as types;
