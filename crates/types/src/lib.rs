//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no engine logic, making them usable from the
//! core engine, the terminal renderer and the headless simulator alike.
//!
//! # Machine Dimensions
//!
//! - **Reels**: 5 columns (indexed 0-4, left to right)
//! - **Rows**: 3 visible rows (indexed 0-2, top to bottom)
//! - **Window**: 4 slots per reel (one hidden slot for seamless wrap-around)
//!
//! # Spin Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval of the interactive runner (~60 FPS) |
//! | `SPIN_BASE_MS` | 1000 | Duration of the first reel's spin |
//! | `SPIN_REEL_STAGGER_MS` | 600 | Extra duration per reel index and per extra step |
//! | `SPIN_BASE_DISTANCE` | 10 | Slots travelled by the first reel |
//! | `SPIN_REEL_DISTANCE` | 5 | Extra slots travelled per reel index |
//!
//! # Examples
//!
//! ```
//! use tui_slots_types::{PayoutTier, SymbolKind, REEL_COUNT, ROW_COUNT};
//!
//! let kind: SymbolKind = "h1".parse().unwrap();
//! assert_eq!(kind, SymbolKind::H1);
//! assert_eq!(PayoutTier::of_kind(kind), Some(PayoutTier::High));
//! assert_eq!(PayoutTier::High.payout(), 20);
//!
//! assert_eq!(REEL_COUNT, 5);
//! assert_eq!(ROW_COUNT, 3);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of reels (columns).
pub const REEL_COUNT: usize = 5;

/// Number of visible rows per reel.
pub const ROW_COUNT: usize = 3;

/// Slots held by each reel: one more than the visible rows.
pub const WINDOW_SIZE: usize = ROW_COUNT + 1;

/// Height of one slot in presentation pixels.
pub const SLOT_HEIGHT: f64 = 150.0;

/// Horizontal distance between reels in presentation pixels.
pub const REEL_WIDTH: f64 = 160.0;

/// Motion blur gain applied to per-frame position change.
pub const BLUR_GAIN: f64 = 8.0;

/// Frame interval of the interactive runner (16ms ≈ 60 FPS).
pub const TICK_MS: u32 = 16;

/// Duration of the first reel's spin.
pub const SPIN_BASE_MS: f64 = 1000.0;

/// Added duration per reel index and per extra stagger step.
pub const SPIN_REEL_STAGGER_MS: f64 = 600.0;

/// Slots travelled by the first reel.
pub const SPIN_BASE_DISTANCE: f64 = 10.0;

/// Added slots travelled per reel index.
pub const SPIN_REEL_DISTANCE: f64 = 5.0;

/// Exclusive upper bound of the random per-reel stagger.
pub const SPIN_EXTRA_STEPS: u32 = 3;

/// Overshoot amount of the backout easing used to stop the reels.
pub const SPIN_SETTLE_AMOUNT: f64 = 0.3;

/// The closed catalogue of symbol kinds.
///
/// Kinds fall into four families that decide the payout tier of a win:
/// - **Low**: `9`, `10`
/// - **Medium**: `M1`..`M6`
/// - **High**: `H1`..`H6`
/// - **Special**: `A`, `J`, `K`, `Q`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SymbolKind {
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    M1,
    M2,
    M3,
    M4,
    M5,
    M6,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    A,
    J,
    K,
    Q,
}

impl SymbolKind {
    /// Every kind, in catalogue order.
    pub const ALL: [SymbolKind; 18] = [
        SymbolKind::Nine,
        SymbolKind::Ten,
        SymbolKind::M1,
        SymbolKind::M2,
        SymbolKind::M3,
        SymbolKind::M4,
        SymbolKind::M5,
        SymbolKind::M6,
        SymbolKind::H1,
        SymbolKind::H2,
        SymbolKind::H3,
        SymbolKind::H4,
        SymbolKind::H5,
        SymbolKind::H6,
        SymbolKind::A,
        SymbolKind::J,
        SymbolKind::K,
        SymbolKind::Q,
    ];

    /// Textual identifier of the kind (also the stem of its asset name).
    pub fn as_str(self) -> &'static str {
        match self {
            SymbolKind::Nine => "9",
            SymbolKind::Ten => "10",
            SymbolKind::M1 => "M1",
            SymbolKind::M2 => "M2",
            SymbolKind::M3 => "M3",
            SymbolKind::M4 => "M4",
            SymbolKind::M5 => "M5",
            SymbolKind::M6 => "M6",
            SymbolKind::H1 => "H1",
            SymbolKind::H2 => "H2",
            SymbolKind::H3 => "H3",
            SymbolKind::H4 => "H4",
            SymbolKind::H5 => "H5",
            SymbolKind::H6 => "H6",
            SymbolKind::A => "A",
            SymbolKind::J => "J",
            SymbolKind::K => "K",
            SymbolKind::Q => "Q",
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no symbol kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown symbol kind `{0}` (expected one of 9, 10, M1-M6, H1-H6, A, J, K, Q)")]
pub struct ParseSymbolError(pub String);

impl FromStr for SymbolKind {
    type Err = ParseSymbolError;

    /// Parse a kind from its identifier (case-insensitive).
    ///
    /// ```
    /// use tui_slots_types::SymbolKind;
    ///
    /// assert_eq!("10".parse::<SymbolKind>(), Ok(SymbolKind::Ten));
    /// assert_eq!("q".parse::<SymbolKind>(), Ok(SymbolKind::Q));
    /// assert!("X9".parse::<SymbolKind>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SymbolKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseSymbolError(s.to_string()))
    }
}

/// Payout classification of a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoutTier {
    Low,
    Medium,
    High,
    Special,
}

impl PayoutTier {
    /// Tiers in classification order.
    pub const ALL: [PayoutTier; 4] = [
        PayoutTier::Low,
        PayoutTier::Medium,
        PayoutTier::High,
        PayoutTier::Special,
    ];

    /// Identifiers whose presence in a kind name selects this tier.
    pub fn markers(self) -> &'static [&'static str] {
        match self {
            PayoutTier::Low => &["9", "10"],
            PayoutTier::Medium => &["M1", "M2", "M3", "M4", "M5", "M6"],
            PayoutTier::High => &["H1", "H2", "H3", "H4", "H5", "H6"],
            PayoutTier::Special => &["A", "J", "K", "Q"],
        }
    }

    /// Classify an identifier by substring containment, first tier wins.
    ///
    /// The match is deliberately loose: `"H1_connect"` is still high.
    ///
    /// ```
    /// use tui_slots_types::PayoutTier;
    ///
    /// assert_eq!(PayoutTier::classify("H1_connect"), Some(PayoutTier::High));
    /// assert_eq!(PayoutTier::classify("10"), Some(PayoutTier::Low));
    /// assert_eq!(PayoutTier::classify("zz"), None);
    /// ```
    pub fn classify(name: &str) -> Option<PayoutTier> {
        PayoutTier::ALL
            .into_iter()
            .find(|tier| tier.markers().iter().any(|m| name.contains(m)))
    }

    /// Tier of a catalogue kind, `None` if no family covers it.
    pub fn of_kind(kind: SymbolKind) -> Option<PayoutTier> {
        Self::classify(kind.as_str())
    }

    /// Payout value, also the number of celebration effects to play.
    pub fn payout(self) -> u32 {
        match self {
            PayoutTier::Low => 5,
            PayoutTier::Medium => 10,
            PayoutTier::High => 20,
            PayoutTier::Special => 50,
        }
    }

    /// Label shown over each winning cell.
    pub fn label(self) -> &'static str {
        match self {
            PayoutTier::Low => "5€",
            PayoutTier::Medium => "10€",
            PayoutTier::High => "20€",
            PayoutTier::Special => "50€",
        }
    }

    /// Text size of the label in presentation points.
    pub fn text_scale(self) -> u16 {
        match self {
            PayoutTier::Low => 36,
            PayoutTier::Medium => 50,
            PayoutTier::High => 60,
            PayoutTier::Special => 80,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PayoutTier::Low => "low",
            PayoutTier::Medium => "medium",
            PayoutTier::High => "high",
            PayoutTier::Special => "special",
        }
    }
}

/// Operator actions understood by the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotAction {
    /// Start a spin (ignored while spinning).
    Spin,
    /// Tease a random catalogue kind into the next rollovers.
    ForceRandom,
    /// Tease a specific kind into the next rollovers.
    Force(SymbolKind),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spin_timing_defaults() {
        assert_eq!(SPIN_BASE_MS, 1000.0);
        assert_eq!(SPIN_REEL_STAGGER_MS, 600.0);
        assert_eq!(SPIN_SETTLE_AMOUNT, 0.3);
        assert_eq!(WINDOW_SIZE, 4);
        assert_eq!(SLOT_HEIGHT, 150.0);
    }

    #[test]
    fn every_kind_round_trips_through_its_identifier() {
        for kind in SymbolKind::ALL {
            assert_eq!(kind.as_str().parse::<SymbolKind>(), Ok(kind));
        }
    }

    #[test]
    fn every_catalogue_kind_has_a_tier() {
        let count = |tier| {
            SymbolKind::ALL
                .iter()
                .filter(|k| PayoutTier::of_kind(**k) == Some(tier))
                .count()
        };
        assert_eq!(count(PayoutTier::Low), 2);
        assert_eq!(count(PayoutTier::Medium), 6);
        assert_eq!(count(PayoutTier::High), 6);
        assert_eq!(count(PayoutTier::Special), 4);
    }

    #[test]
    fn classification_is_substring_based() {
        assert_eq!(PayoutTier::classify("symbol_M4.png"), Some(PayoutTier::Medium));
        assert_eq!(PayoutTier::classify("Q"), Some(PayoutTier::Special));
        // Low is checked first, so anything mentioning 9 is low.
        assert_eq!(PayoutTier::classify("H9"), Some(PayoutTier::Low));
        assert_eq!(PayoutTier::classify("star"), None);
    }

    #[test]
    fn parse_error_names_the_input() {
        let err = "W1".parse::<SymbolKind>().unwrap_err();
        assert_eq!(err, ParseSymbolError("W1".to_string()));
        assert!(err.to_string().contains("W1"));
    }

    #[test]
    fn tier_presentation_values() {
        assert_eq!(PayoutTier::Special.name(), "special");
        assert_eq!(PayoutTier::Low.label(), "5€");
        assert_eq!(PayoutTier::High.text_scale(), 60);
    }
}
