//! Core slot machine logic - pure, deterministic, and testable
//!
//! This crate contains the reel mechanics, win rules and spin orchestration of
//! a 5-reel, 3-row slot machine. It has **zero dependencies** on terminals,
//! windows or clocks:
//!
//! - **Deterministic**: same seed and same `now_ms` samples produce identical runs
//! - **Testable**: every component works on plain data
//! - **Portable**: drive it from a terminal, a GUI or a headless simulator
//!
//! # Module Structure
//!
//! - [`tween`]: time-based easing of a value toward a target
//! - [`reel`]: the five reels and their four-slot windows
//! - [`grid`]: per-frame offset sampling, rollover detection, visible 5x3 grid
//! - [`win`]: payline matching and payout tier classification
//! - [`machine`]: the [`SlotMachine`] engine object tying it all together
//! - [`catalogue`]: the symbol kinds available for random assignment
//! - [`rng`]: seeded LCG used for every random decision
//!
//! # Example
//!
//! ```
//! use tui_slots_core::SlotMachine;
//! use tui_slots_types::{PayoutTier, SymbolKind};
//!
//! let mut machine = SlotMachine::new(12345);
//! machine.force_symbol(SymbolKind::A);
//! assert!(machine.start_spin(0));
//!
//! let mut now = 0;
//! let mut shown = None;
//! while machine.is_spinning() {
//!     now += 16;
//!     if let Some(win) = machine.tick(now).displayed {
//!         shown = Some(win);
//!     }
//! }
//!
//! let win = shown.unwrap();
//! assert_eq!(win.tier, PayoutTier::Special);
//! assert_eq!(win.label, "50€");
//! assert_eq!(win.celebrations, 50);
//! ```
//!
//! # Timing
//!
//! The machine never reads a clock. Call [`SlotMachine::tick`] once per frame
//! with a monotonic millisecond timestamp; a spin of reel `i` lasts
//! `1000 + 600 * i + 600 * extra` ms where `extra` is a random step in `0..3`.

pub mod catalogue;
pub mod grid;
pub mod machine;
pub mod reel;
pub mod rng;
pub mod snapshot;
pub mod tween;
pub mod win;

pub use tui_slots_types as types;

// Re-export commonly used types for convenience
pub use catalogue::{Catalogue, MachineError};
pub use grid::{GridCell, SampleReport, VisibleGrid};
pub use machine::{CellOverlay, Celebration, SlotMachine, SpinState, TickReport, WinDisplay};
pub use reel::{Reel, ReelBank, Slot};
pub use rng::SimpleRng;
pub use snapshot::{MachineSnapshot, ReelSnapshot, SlotSnapshot};
pub use tween::{Completion, Easing, TweenHandle, TweenScheduler, TweenTarget};
pub use win::{WinEvaluator, WinPattern, WinResult};
