//! Spin orchestrator - the slot machine engine object
//!
//! [`SlotMachine`] owns every piece of mutable state: the reel bank, the tween
//! scheduler, the win evaluator, the RNG, the forced-symbol request and the
//! win presentation (highlighted cells, labels, celebrations, total won).
//!
//! Each call to [`SlotMachine::tick`] runs five steps in a fixed order:
//!
//! 1. advance tweens and apply completions
//! 2. sample reels and detect rollovers
//! 3. evaluate the grid if anything rolled over
//! 4. show a pending result once the machine is idle
//! 5. drop finished tweens
//!
//! The spin ends when the last reel's tween completes. Reels with a long
//! random stagger can outlast the last reel, so the machine only returns to
//! idle once no tween is still running.

use log::{debug, info, trace};

use crate::catalogue::{Catalogue, MachineError};
use crate::grid::{self, GridCell, VisibleGrid};
use crate::reel::ReelBank;
use crate::rng::SimpleRng;
use crate::snapshot::{MachineSnapshot, ReelSnapshot, SlotSnapshot};
use crate::tween::{Completion, Easing, TweenScheduler};
use crate::types::{
    PayoutTier, SlotAction, SymbolKind, REEL_COUNT, ROW_COUNT, SPIN_BASE_DISTANCE, SPIN_BASE_MS,
    SPIN_EXTRA_STEPS, SPIN_REEL_DISTANCE, SPIN_REEL_STAGGER_MS, SPIN_SETTLE_AMOUNT,
};
use crate::win::{WinEvaluator, WinPattern, WinResult};

/// Frames in one celebration animation loop.
pub const CELEBRATION_FRAMES: u8 = 26;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinState {
    #[default]
    Idle,
    Spinning,
}

/// Presentation state of one visible cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellOverlay {
    /// Drawn in the "connect" style.
    pub highlighted: bool,
    /// Payout label shown over the cell.
    pub label: Option<PayoutTier>,
}

/// One celebration effect, positioned in normalised screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Celebration {
    pub x: f64,
    pub y: f64,
    /// Radians in `[0, PI)`.
    pub rotation: f64,
    /// In `[0.75, 1.25)`.
    pub scale: f64,
    pub frame: u8,
}

impl Celebration {
    fn random(rng: &mut SimpleRng) -> Self {
        Self {
            x: rng.next_unit(),
            y: rng.next_unit(),
            rotation: rng.next_unit() * std::f64::consts::PI,
            scale: 0.75 + rng.next_unit() * 0.5,
            frame: rng.next_range(u32::from(CELEBRATION_FRAMES)) as u8,
        }
    }
}

/// A win as handed to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct WinDisplay {
    pub tier: PayoutTier,
    pub cells: Vec<GridCell>,
    pub patterns: Vec<WinPattern>,
    pub label: &'static str,
    pub text_scale: u16,
    /// Celebration effects spawned, equal to the tier payout.
    pub celebrations: u32,
    /// Added to the total: payout times the number of winning cells.
    pub credited: u64,
}

/// What happened during one tick.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TickReport {
    pub rolled_over: bool,
    pub win_found: bool,
    pub spin_completed: bool,
    pub displayed: Option<WinDisplay>,
}

pub struct SlotMachine {
    reels: ReelBank,
    tweens: TweenScheduler,
    evaluator: WinEvaluator,
    rng: SimpleRng,
    catalogue: Catalogue,
    seed: u32,
    state: SpinState,
    /// Kind assigned to every rollover until the spin completes.
    forced: Option<SymbolKind>,
    /// The last reel finished but other tweens are still running.
    completion_requested: bool,
    overlays: [[CellOverlay; ROW_COUNT]; REEL_COUNT],
    celebrations: Vec<Celebration>,
    last_win: Option<PayoutTier>,
    total_won: u64,
    spins: u32,
    wins: u32,
}

impl SlotMachine {
    /// Create a machine over the full catalogue with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let catalogue = Catalogue::full();
        let reels = ReelBank::new(&mut rng, &catalogue);
        Self::from_parts(seed, rng, catalogue, reels)
    }

    /// Create a machine sampling only `kinds`.
    pub fn with_catalogue(seed: u32, kinds: Vec<SymbolKind>) -> Result<Self, MachineError> {
        let catalogue = Catalogue::new(kinds)?;
        let mut rng = SimpleRng::new(seed);
        let reels = ReelBank::new(&mut rng, &catalogue);
        Ok(Self::from_parts(seed, rng, catalogue, reels))
    }

    /// Create a machine with preset reels.
    pub fn with_reels(seed: u32, catalogue: Catalogue, reels: ReelBank) -> Self {
        Self::from_parts(seed, SimpleRng::new(seed), catalogue, reels)
    }

    fn from_parts(seed: u32, rng: SimpleRng, catalogue: Catalogue, reels: ReelBank) -> Self {
        Self {
            reels,
            tweens: TweenScheduler::new(),
            evaluator: WinEvaluator::new(),
            rng,
            catalogue,
            seed,
            state: SpinState::Idle,
            forced: None,
            completion_requested: false,
            overlays: [[CellOverlay::default(); ROW_COUNT]; REEL_COUNT],
            celebrations: Vec::new(),
            last_win: None,
            total_won: 0,
            spins: 0,
            wins: 0,
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn state(&self) -> SpinState {
        self.state
    }

    pub fn is_spinning(&self) -> bool {
        self.state == SpinState::Spinning
    }

    pub fn reels(&self) -> &ReelBank {
        &self.reels
    }

    pub fn tweens(&self) -> &TweenScheduler {
        &self.tweens
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn forced(&self) -> Option<SymbolKind> {
        self.forced
    }

    /// Win found by the latest evaluation and not yet shown.
    pub fn pending_win(&self) -> Option<&WinResult> {
        self.evaluator.result()
    }

    pub fn visible_grid(&self) -> VisibleGrid {
        grid::visible_grid(&self.reels)
    }

    pub fn overlay(&self, reel: usize, row: usize) -> CellOverlay {
        self.overlays[reel][row]
    }

    pub fn celebrations(&self) -> &[Celebration] {
        &self.celebrations
    }

    pub fn last_win(&self) -> Option<PayoutTier> {
        self.last_win
    }

    pub fn total_won(&self) -> u64 {
        self.total_won
    }

    pub fn spins(&self) -> u32 {
        self.spins
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    /// Start spinning every reel; ignored (returns false) while spinning.
    pub fn start_spin(&mut self, now_ms: u64) -> bool {
        if self.is_spinning() {
            trace!("spin request ignored, reels still moving");
            return false;
        }

        self.evaluator.clear();
        self.clear_presentation();
        self.state = SpinState::Spinning;
        self.completion_requested = false;
        self.spins += 1;

        let easing = Easing::backout(SPIN_SETTLE_AMOUNT);
        for i in 0..REEL_COUNT {
            let extra = f64::from(self.rng.next_range(SPIN_EXTRA_STEPS));
            let reel = i as f64;
            let target = self.reels.reel(i).position
                + SPIN_BASE_DISTANCE
                + reel * SPIN_REEL_DISTANCE
                + extra;
            let duration = SPIN_BASE_MS + reel * SPIN_REEL_STAGGER_MS + extra * SPIN_REEL_STAGGER_MS;
            let on_complete = if i == REEL_COUNT - 1 {
                Completion::CompleteSpin
            } else {
                Completion::NoOp
            };
            self.tweens
                .schedule(&self.reels, i, target, duration, easing, on_complete, now_ms);
        }

        debug!(
            "spin {} started at {}ms (forced: {:?})",
            self.spins, now_ms, self.forced
        );
        true
    }

    /// Assign `kind` to every slot that rolls over until the current or next spin completes.
    pub fn force_symbol(&mut self, kind: SymbolKind) {
        debug!("forcing {} into the next rollovers", kind);
        self.forced = Some(kind);
    }

    /// Force a uniformly chosen catalogue kind.
    pub fn force_random_symbol(&mut self) -> SymbolKind {
        let kind = self.catalogue.pick(&mut self.rng);
        self.force_symbol(kind);
        kind
    }

    /// Apply an operator action
    pub fn apply_action(&mut self, action: SlotAction, now_ms: u64) -> bool {
        match action {
            SlotAction::Spin => self.start_spin(now_ms),
            SlotAction::ForceRandom => {
                self.force_random_symbol();
                true
            }
            SlotAction::Force(kind) => {
                self.force_symbol(kind);
                true
            }
        }
    }

    /// Advance one frame to `now_ms`.
    pub fn tick(&mut self, now_ms: u64) -> TickReport {
        let mut report = TickReport::default();

        // 1. Tweens.
        let mut last_reel_done = false;
        self.tweens.advance(now_ms, &mut self.reels, |completion| {
            if completion == Completion::CompleteSpin {
                last_reel_done = true;
            }
        });
        if last_reel_done {
            self.completion_requested = true;
        }
        if self.completion_requested && !self.tweens.is_busy() {
            self.complete_spin(now_ms);
            report.spin_completed = true;
        }

        // 2. Rollovers.
        let sampled = grid::sample(&mut self.reels, &mut self.rng, &self.catalogue, self.forced);
        report.rolled_over = sampled.rolled_over;

        // 3. Evaluation.
        if sampled.rolled_over {
            let grid = grid::visible_grid(&self.reels);
            report.win_found = self.evaluator.evaluate(&grid, true);
        }

        // 4. Result.
        report.displayed = self.show_result();

        // 5. Cleanup.
        self.tweens.sweep();

        for c in &mut self.celebrations {
            c.frame = (c.frame + 1) % CELEBRATION_FRAMES;
        }

        report
    }

    fn complete_spin(&mut self, now_ms: u64) {
        self.state = SpinState::Idle;
        self.completion_requested = false;
        self.forced = None;
        debug!(
            "spin {} settled at {}ms on {:?}",
            self.spins,
            now_ms,
            self.reels.positions()
        );
    }

    /// Show the pending win, at most once and only while idle.
    ///
    /// Highlights and labels every winning cell, spawns one celebration per
    /// payout unit and credits the total. An untiered win is discarded.
    pub fn show_result(&mut self) -> Option<WinDisplay> {
        if self.is_spinning() {
            return None;
        }
        let result = self.evaluator.take()?;
        let Some(tier) = result.tier() else {
            debug!("win on {:?} has no payout tier", result.lead_kind());
            return None;
        };

        for cell in result.cells() {
            self.overlays[cell.reel][cell.row] = CellOverlay {
                highlighted: true,
                label: Some(tier),
            };
        }

        let payout = tier.payout();
        self.celebrations
            .extend((0..payout).map(|_| Celebration::random(&mut self.rng)));

        let credited = u64::from(payout) * result.cells().len() as u64;
        self.total_won += credited;
        self.wins += 1;
        self.last_win = Some(tier);

        info!(
            "{} win on {:?}: {} cells, +{} (total {})",
            tier.name(),
            result.patterns(),
            result.cells().len(),
            credited,
            self.total_won
        );

        Some(WinDisplay {
            tier,
            cells: result.cells().to_vec(),
            patterns: result.patterns().to_vec(),
            label: tier.label(),
            text_scale: tier.text_scale(),
            celebrations: payout,
            credited,
        })
    }

    fn clear_presentation(&mut self) {
        self.overlays = [[CellOverlay::default(); ROW_COUNT]; REEL_COUNT];
        self.celebrations.clear();
    }

    pub fn snapshot_into(&self, out: &mut MachineSnapshot) {
        for (dst, reel) in out.reels.iter_mut().zip(self.reels.reels()) {
            *dst = ReelSnapshot {
                position: reel.position,
                blur: reel.blur,
                slots: std::array::from_fn(|j| {
                    let slot = reel.slots()[j];
                    SlotSnapshot {
                        kind: slot.kind,
                        offset: slot.offset,
                    }
                }),
            };
        }
        out.grid = self.visible_grid().kinds();
        out.overlays = self.overlays;
        out.celebrations.clear();
        out.celebrations.extend_from_slice(&self.celebrations);
        out.spinning = self.is_spinning();
        out.forced = self.forced;
        out.last_win = self.last_win;
        out.total_won = self.total_won;
        out.spins = self.spins;
        out.wins = self.wins;
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> MachineSnapshot {
        let mut s = MachineSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
