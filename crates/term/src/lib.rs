//! Terminal presentation layer for the slot machine.
//!
//! Renders a [`core::MachineSnapshot`] into a framebuffer of styled character
//! cells and flushes only the changed runs to the terminal. No widgets or
//! layout engine: reels are drawn cell by cell so scrolling offsets map
//! directly to terminal rows.
//!
//! - [`fb`]: framebuffer and style types
//! - [`machine_view`]: pure snapshot-to-framebuffer mapping (unit-testable)
//! - [`renderer`]: diffing terminal writer

pub mod fb;
pub mod machine_view;
pub mod renderer;

pub use tui_slots_core as core;
pub use tui_slots_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use machine_view::{AnchorY, Layout, MachineView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
