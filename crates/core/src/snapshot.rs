use crate::machine::{CellOverlay, Celebration};
use crate::types::{PayoutTier, SymbolKind, REEL_COUNT, ROW_COUNT, WINDOW_SIZE};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotSnapshot {
    pub kind: SymbolKind,
    pub offset: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReelSnapshot {
    pub position: f64,
    pub blur: f64,
    /// All window slots, in window order (not sorted by offset).
    pub slots: [SlotSnapshot; WINDOW_SIZE],
}

impl Default for ReelSnapshot {
    fn default() -> Self {
        Self {
            position: 0.0,
            blur: 0.0,
            slots: [SlotSnapshot {
                kind: SymbolKind::Nine,
                offset: 0.0,
            }; WINDOW_SIZE],
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct MachineSnapshot {
    pub reels: [ReelSnapshot; REEL_COUNT],
    /// Visible kinds, `[reel][row]`.
    pub grid: [[SymbolKind; ROW_COUNT]; REEL_COUNT],
    pub overlays: [[CellOverlay; ROW_COUNT]; REEL_COUNT],
    pub celebrations: Vec<Celebration>,
    pub spinning: bool,
    pub forced: Option<SymbolKind>,
    pub last_win: Option<PayoutTier>,
    pub total_won: u64,
    pub spins: u32,
    pub wins: u32,
    pub seed: u32,
}

impl MachineSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True if any visible cell carries a win highlight.
    pub fn has_highlights(&self) -> bool {
        self.overlays.iter().flatten().any(|o| o.highlighted)
    }

    /// Largest blur across the reels.
    pub fn max_blur(&self) -> f64 {
        self.reels.iter().map(|r| r.blur.abs()).fold(0.0, f64::max)
    }
}

impl Default for MachineSnapshot {
    fn default() -> Self {
        Self {
            reels: [ReelSnapshot::default(); REEL_COUNT],
            grid: [[SymbolKind::Nine; ROW_COUNT]; REEL_COUNT],
            overlays: [[CellOverlay::default(); ROW_COUNT]; REEL_COUNT],
            celebrations: Vec::new(),
            spinning: false,
            forced: None,
            last_win: None,
            total_won: 0,
            spins: 0,
            wins: 0,
            seed: 0,
        }
    }
}
