//! Win evaluator - payline matching over the visible grid
//!
//! Seven paylines are checked in a fixed order: the three rows, then the V,
//! inverted V, pot and inverted pot shapes. Every matching line appends its
//! five cells to the result; a cell covered by two lines appears twice.
//!
//! The payout tier comes from the kind of the first recorded cell only.

use arrayvec::ArrayVec;

use crate::grid::{GridCell, VisibleGrid};
use crate::types::{PayoutTier, SymbolKind, REEL_COUNT, ROW_COUNT};

/// Number of paylines.
pub const PATTERN_COUNT: usize = 7;

/// Upper bound on recorded cells (every line matching).
pub const MAX_WIN_CELLS: usize = PATTERN_COUNT * REEL_COUNT;

/// A payline shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WinPattern {
    /// Straight line across row `0..3`.
    Row(usize),
    V,
    InvertedV,
    Pot,
    InvertedPot,
}

impl WinPattern {
    /// Paylines in evaluation order.
    pub const ALL: [WinPattern; PATTERN_COUNT] = [
        WinPattern::Row(0),
        WinPattern::Row(1),
        WinPattern::Row(2),
        WinPattern::V,
        WinPattern::InvertedV,
        WinPattern::Pot,
        WinPattern::InvertedPot,
    ];

    /// Row tested on each reel.
    pub fn rows(self) -> [usize; REEL_COUNT] {
        match self {
            WinPattern::Row(r) => [r; REEL_COUNT],
            WinPattern::V => [0, 1, 2, 1, 0],
            WinPattern::InvertedV => [2, 1, 0, 1, 2],
            WinPattern::Pot => [0, 1, 1, 1, 0],
            WinPattern::InvertedPot => [2, 1, 1, 1, 2],
        }
    }

    /// Shared kind along the line, if all five cells agree.
    pub fn matches(self, grid: &VisibleGrid) -> Option<SymbolKind> {
        let rows = self.rows();
        let first = grid.kind(0, rows[0]);
        rows.iter()
            .enumerate()
            .all(|(reel, &row)| grid.kind(reel, row) == first)
            .then_some(first)
    }

    pub fn name(self) -> &'static str {
        match self {
            WinPattern::Row(0) => "top row",
            WinPattern::Row(1) => "middle row",
            WinPattern::Row(_) => "bottom row",
            WinPattern::V => "v",
            WinPattern::InvertedV => "inverted v",
            WinPattern::Pot => "pot",
            WinPattern::InvertedPot => "inverted pot",
        }
    }
}

/// Matched cells of one evaluation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WinResult {
    cells: ArrayVec<GridCell, MAX_WIN_CELLS>,
    patterns: ArrayVec<WinPattern, PATTERN_COUNT>,
}

impl WinResult {
    pub fn is_win(&self) -> bool {
        !self.cells.is_empty()
    }

    /// Winning cells in match order, duplicates included.
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn patterns(&self) -> &[WinPattern] {
        &self.patterns
    }

    /// Kind of the first recorded cell.
    pub fn lead_kind(&self) -> Option<SymbolKind> {
        self.cells.first().map(|c| c.kind)
    }

    /// `None` for no win or an untiered kind.
    pub fn tier(&self) -> Option<PayoutTier> {
        self.lead_kind().and_then(PayoutTier::of_kind)
    }

    pub fn payout(&self) -> u32 {
        self.tier().map_or(0, PayoutTier::payout)
    }

    /// True if `(reel, row)` is part of any matched line.
    pub fn contains(&self, reel: usize, row: usize) -> bool {
        self.cells.iter().any(|c| c.reel == reel && c.row == row)
    }
}

/// Holds the win state between evaluations.
#[derive(Debug, Clone, Default)]
pub struct WinEvaluator {
    result: Option<WinResult>,
}

impl WinEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-evaluate `grid` if it changed since the last call.
    ///
    /// An unchanged grid leaves the current state untouched. Returns true
    /// when this call found a win.
    pub fn evaluate(&mut self, grid: &VisibleGrid, changed: bool) -> bool {
        if !changed {
            return false;
        }
        let result = evaluate_grid(grid);
        let won = result.is_win();
        self.result = won.then_some(result);
        won
    }

    /// Pending win, if any.
    pub fn result(&self) -> Option<&WinResult> {
        self.result.as_ref()
    }

    /// Consume the pending win.
    pub fn take(&mut self) -> Option<WinResult> {
        self.result.take()
    }

    pub fn clear(&mut self) {
        self.result = None;
    }
}

/// Check every payline of `grid`.
pub fn evaluate_grid(grid: &VisibleGrid) -> WinResult {
    let mut result = WinResult::default();
    for pattern in WinPattern::ALL {
        if pattern.matches(grid).is_none() {
            continue;
        }
        for (reel, &row) in pattern.rows().iter().enumerate() {
            debug_assert!(row < ROW_COUNT);
            result.cells.push(*grid.cell(reel, row));
        }
        result.patterns.push(pattern);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SymbolKind::*;

    /// A grid with no payline: every reel holds different kinds.
    fn losing_kinds() -> [[SymbolKind; ROW_COUNT]; REEL_COUNT] {
        [
            [Nine, M1, H1],
            [Ten, M2, H2],
            [A, M3, H3],
            [J, M4, H4],
            [K, M5, H5],
        ]
    }

    #[test]
    fn no_false_positive() {
        let grid = VisibleGrid::from_kinds(losing_kinds());
        let result = evaluate_grid(&grid);
        assert!(!result.is_win());
        assert!(result.cells().is_empty());
        assert_eq!(result.payout(), 0);
        assert_eq!(result.tier(), None);
    }

    #[test]
    fn middle_row_of_h1_pays_high() {
        let mut kinds = losing_kinds();
        for col in kinds.iter_mut() {
            col[1] = H1;
        }
        let result = evaluate_grid(&VisibleGrid::from_kinds(kinds));

        assert_eq!(result.patterns(), &[WinPattern::Row(1)]);
        assert_eq!(result.cells().len(), 5);
        assert!(result.cells().iter().all(|c| c.row == 1 && c.kind == H1));
        assert_eq!(result.tier(), Some(PayoutTier::High));
        assert_eq!(result.payout(), 20);
    }

    #[test]
    fn v_of_aces_pays_special() {
        let mut kinds = losing_kinds();
        for (reel, row) in WinPattern::V.rows().into_iter().enumerate() {
            kinds[reel][row] = A;
        }
        // Reel 2 already held an ace on top; keep the rest distinct.
        kinds[2][0] = Q;
        let result = evaluate_grid(&VisibleGrid::from_kinds(kinds));

        assert_eq!(result.patterns(), &[WinPattern::V]);
        assert_eq!(result.tier(), Some(PayoutTier::Special));
        assert_eq!(result.payout(), 50);
        let cells: Vec<(usize, usize)> = result.cells().iter().map(|c| (c.reel, c.row)).collect();
        assert_eq!(cells, vec![(0, 0), (1, 1), (2, 2), (3, 1), (4, 0)]);
    }

    #[test]
    fn pot_marks_the_tested_cells() {
        let mut kinds = losing_kinds();
        for (reel, row) in WinPattern::Pot.rows().into_iter().enumerate() {
            kinds[reel][row] = M6;
        }
        let result = evaluate_grid(&VisibleGrid::from_kinds(kinds));
        assert_eq!(result.patterns(), &[WinPattern::Pot]);
        let cells: Vec<(usize, usize)> = result.cells().iter().map(|c| (c.reel, c.row)).collect();
        assert_eq!(cells, vec![(0, 0), (1, 1), (2, 1), (3, 1), (4, 0)]);
        assert_eq!(result.tier(), Some(PayoutTier::Medium));
    }

    #[test]
    fn overlapping_lines_keep_duplicates() {
        let kinds = [[Ten; ROW_COUNT]; REEL_COUNT];
        let result = evaluate_grid(&VisibleGrid::from_kinds(kinds));
        assert_eq!(result.patterns(), &WinPattern::ALL);
        assert_eq!(result.cells().len(), MAX_WIN_CELLS);
        assert_eq!(result.payout(), 5);
        // (2, 1) sits on the middle row and both pots.
        let hits = result
            .cells()
            .iter()
            .filter(|c| c.reel == 2 && c.row == 1)
            .count();
        assert_eq!(hits, 3);
    }

    #[test]
    fn tier_follows_first_cell_not_best_line() {
        let mut kinds = losing_kinds();
        for col in kinds.iter_mut() {
            col[0] = Nine;
            col[2] = Q;
        }
        let result = evaluate_grid(&VisibleGrid::from_kinds(kinds));
        assert_eq!(result.patterns(), &[WinPattern::Row(0), WinPattern::Row(2)]);
        assert_eq!(result.lead_kind(), Some(Nine));
        assert_eq!(result.tier(), Some(PayoutTier::Low));
    }

    #[test]
    fn unchanged_grid_keeps_previous_state() {
        let mut kinds = losing_kinds();
        for col in kinds.iter_mut() {
            col[2] = K;
        }
        let winning = VisibleGrid::from_kinds(kinds);
        let losing = VisibleGrid::from_kinds(losing_kinds());

        let mut eval = WinEvaluator::new();
        assert!(eval.evaluate(&winning, true));
        let first = eval.result().cloned();

        assert!(!eval.evaluate(&losing, false));
        assert!(!eval.evaluate(&losing, false));
        assert_eq!(eval.result().cloned(), first);

        assert!(!eval.evaluate(&losing, true));
        assert!(eval.result().is_none());
    }

    #[test]
    fn take_consumes_the_win() {
        let mut eval = WinEvaluator::new();
        eval.evaluate(&VisibleGrid::from_kinds([[H4; ROW_COUNT]; REEL_COUNT]), true);
        assert!(eval.take().is_some());
        assert!(eval.take().is_none());
    }

    #[test]
    fn pattern_names_are_distinct() {
        let names: Vec<&str> = WinPattern::ALL.iter().map(|p| p.name()).collect();
        let mut dedup = names.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(dedup.len(), names.len());
    }
}
