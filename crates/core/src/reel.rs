//! Reel module - scroll state of the five reels
//!
//! Each reel holds a continuous `position` (in slot units) and a fixed window
//! of [`WINDOW_SIZE`] slots, one more than the visible rows so a slot can wrap
//! from the bottom back above the top without a visible gap. Only the kind and
//! derived offset of a slot ever change; the window length never does.

use crate::catalogue::Catalogue;
use crate::rng::SimpleRng;
use crate::tween::TweenTarget;
use crate::types::{SymbolKind, REEL_COUNT, SLOT_HEIGHT, WINDOW_SIZE};

/// One symbol-holding position inside a reel window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub kind: SymbolKind,
    /// Vertical pixel offset inside the reel, derived from the reel position.
    pub offset: f64,
}

/// A single vertical scroller.
#[derive(Debug, Clone, PartialEq)]
pub struct Reel {
    pub position: f64,
    pub previous_position: f64,
    /// Motion blur hint for the presentation layer.
    pub blur: f64,
    slots: [Slot; WINDOW_SIZE],
}

impl Reel {
    /// A reel at rest at position 0, slots stacked top to bottom.
    pub fn new(kinds: [SymbolKind; WINDOW_SIZE]) -> Self {
        let slots = std::array::from_fn(|j| Slot {
            kind: kinds[j],
            offset: j as f64 * SLOT_HEIGHT,
        });
        Self {
            position: 0.0,
            previous_position: 0.0,
            blur: 0.0,
            slots,
        }
    }

    /// Offset of slot `j` for a reel at `position`.
    ///
    /// Ranges over `[-SLOT_HEIGHT, (WINDOW_SIZE - 1) * SLOT_HEIGHT)`; the slot
    /// above zero is the hidden one.
    pub fn slot_offset(position: f64, j: usize) -> f64 {
        (position + j as f64).rem_euclid(WINDOW_SIZE as f64) * SLOT_HEIGHT - SLOT_HEIGHT
    }

    pub fn slots(&self) -> &[Slot; WINDOW_SIZE] {
        &self.slots
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [Slot; WINDOW_SIZE] {
        &mut self.slots
    }
}

/// The five reels of the machine.
#[derive(Debug, Clone, PartialEq)]
pub struct ReelBank {
    reels: [Reel; REEL_COUNT],
}

impl ReelBank {
    /// Reels with uniformly random initial kinds.
    pub fn new(rng: &mut SimpleRng, catalogue: &Catalogue) -> Self {
        let reels = std::array::from_fn(|_| {
            let kinds = std::array::from_fn(|_| catalogue.pick(rng));
            Reel::new(kinds)
        });
        Self { reels }
    }

    /// Reels with the given initial kinds, `kinds[reel][slot]`.
    pub fn from_kinds(kinds: [[SymbolKind; WINDOW_SIZE]; REEL_COUNT]) -> Self {
        Self {
            reels: kinds.map(Reel::new),
        }
    }

    pub fn reels(&self) -> &[Reel; REEL_COUNT] {
        &self.reels
    }

    pub fn reel(&self, index: usize) -> &Reel {
        &self.reels[index]
    }

    pub(crate) fn reels_mut(&mut self) -> &mut [Reel; REEL_COUNT] {
        &mut self.reels
    }

    pub fn positions(&self) -> [f64; REEL_COUNT] {
        std::array::from_fn(|i| self.reels[i].position)
    }
}

impl TweenTarget for ReelBank {
    fn value(&self, index: usize) -> f64 {
        self.reels[index].position
    }

    fn set_value(&mut self, index: usize, value: f64) {
        self.reels[index].position = value;
    }
}
