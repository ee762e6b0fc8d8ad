//! Grid sampler - per-frame reconstruction of the visible symbol grid
//!
//! [`sample`] re-derives every slot offset from its reel position, detects
//! rollovers (a slot wrapping from the bottom of the window back above the
//! top) and assigns each rolled slot a new kind. [`VisibleGrid`] is the 5x3
//! snapshot the win evaluator consumes: each reel's slots sorted by offset,
//! keeping the bottom [`ROW_COUNT`] entries.

use arrayvec::ArrayVec;
use log::trace;

use crate::catalogue::Catalogue;
use crate::reel::{Reel, ReelBank};
use crate::rng::SimpleRng;
use crate::types::{SymbolKind, BLUR_GAIN, REEL_COUNT, ROW_COUNT, SLOT_HEIGHT, WINDOW_SIZE};

/// One visible grid entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell {
    pub reel: usize,
    pub row: usize,
    pub kind: SymbolKind,
    /// Vertical pixel offset of the slot inside its reel.
    pub offset: f64,
}

/// The visible 5x3 grid, indexed `[reel][row]` with row 0 on top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleGrid {
    cells: [[GridCell; ROW_COUNT]; REEL_COUNT],
}

impl VisibleGrid {
    /// Grid at rest with the given kinds, `kinds[reel][row]`.
    pub fn from_kinds(kinds: [[SymbolKind; ROW_COUNT]; REEL_COUNT]) -> Self {
        let cells = std::array::from_fn(|reel| {
            std::array::from_fn(|row| GridCell {
                reel,
                row,
                kind: kinds[reel][row],
                offset: row as f64 * SLOT_HEIGHT,
            })
        });
        Self { cells }
    }

    /// Build from raw `(kind, offset)` columns, one per reel.
    ///
    /// # Panics
    ///
    /// Panics unless there are exactly [`REEL_COUNT`] columns holding at least
    /// [`ROW_COUNT`] entries each; a short grid means the sampler is broken.
    pub fn from_columns<C: AsRef<[(SymbolKind, f64)]>>(columns: &[C]) -> Self {
        assert_eq!(
            columns.len(),
            REEL_COUNT,
            "grid needs {} reels, got {}",
            REEL_COUNT,
            columns.len()
        );
        let cells = std::array::from_fn(|reel| {
            let mut entries = columns[reel].as_ref().to_vec();
            settle_column(reel, &mut entries)
        });
        Self { cells }
    }

    pub fn cell(&self, reel: usize, row: usize) -> &GridCell {
        &self.cells[reel][row]
    }

    pub fn kind(&self, reel: usize, row: usize) -> SymbolKind {
        self.cells[reel][row].kind
    }

    pub fn columns(&self) -> &[[GridCell; ROW_COUNT]; REEL_COUNT] {
        &self.cells
    }

    /// Kinds only, `[reel][row]`.
    pub fn kinds(&self) -> [[SymbolKind; ROW_COUNT]; REEL_COUNT] {
        self.cells.map(|col| col.map(|c| c.kind))
    }
}

/// Sort one reel's entries top to bottom and keep the visible rows.
fn settle_column(reel: usize, entries: &mut [(SymbolKind, f64)]) -> [GridCell; ROW_COUNT] {
    assert!(
        entries.len() >= ROW_COUNT,
        "reel {} has {} slots, needs at least {}",
        reel,
        entries.len(),
        ROW_COUNT
    );
    entries.sort_by(|a, b| a.1.total_cmp(&b.1));
    let visible = &entries[entries.len() - ROW_COUNT..];
    std::array::from_fn(|row| GridCell {
        reel,
        row,
        kind: visible[row].0,
        offset: visible[row].1,
    })
}

/// Outcome of one sampling pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SampleReport {
    /// True if any slot rolled over this tick.
    pub rolled_over: bool,
    pub rollovers: u32,
}

/// Recompute offsets and blur for every reel, reassigning rolled-over slots.
///
/// A rolled slot gets `forced` when set, otherwise a uniform catalogue draw.
pub fn sample(
    bank: &mut ReelBank,
    rng: &mut SimpleRng,
    catalogue: &Catalogue,
    forced: Option<SymbolKind>,
) -> SampleReport {
    let mut report = SampleReport::default();

    for (i, reel) in bank.reels_mut().iter_mut().enumerate() {
        reel.blur = (reel.position - reel.previous_position) * BLUR_GAIN;
        reel.previous_position = reel.position;

        let position = reel.position;
        for (j, slot) in reel.slots_mut().iter_mut().enumerate() {
            let previous = slot.offset;
            slot.offset = Reel::slot_offset(position, j);
            if slot.offset < 0.0 && previous > SLOT_HEIGHT {
                slot.kind = forced.unwrap_or_else(|| catalogue.pick(rng));
                report.rolled_over = true;
                report.rollovers += 1;
                trace!("reel {} slot {} rolled over to {}", i, j, slot.kind);
            }
        }
    }

    report
}

/// Current visible grid of the bank.
pub fn visible_grid(bank: &ReelBank) -> VisibleGrid {
    let cells = std::array::from_fn(|i| {
        let mut entries: ArrayVec<(SymbolKind, f64), WINDOW_SIZE> = bank
            .reel(i)
            .slots()
            .iter()
            .map(|s| (s.kind, s.offset))
            .collect();
        settle_column(i, &mut entries)
    });
    VisibleGrid { cells }
}
