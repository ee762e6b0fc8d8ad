//! Headless simulator: plays a number of spins on a virtual clock and prints
//! a JSON summary.

use anyhow::{ensure, Result};
use clap::Parser;
use log::debug;
use serde::Serialize;

use tui_slots::cli::MachineArgs;
use tui_slots::core::{SlotMachine, WinDisplay};
use tui_slots::logging;
use tui_slots::types::{PayoutTier, TICK_MS};

/// Upper bound on one spin, far above the longest reel stagger.
const SPIN_TIMEOUT_MS: u64 = 60_000;

#[derive(Debug, Parser)]
#[command(name = "slot-sim", version, about = "Run spins headlessly and report the results as JSON.")]
struct Cli {
    #[command(flatten)]
    machine: MachineArgs,

    /// Number of spins to play.
    #[arg(long, default_value_t = 100, value_name = "N")]
    spins: u32,

    /// Pretty-print the JSON summary.
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Default, Serialize)]
struct TierCounts {
    low: u32,
    medium: u32,
    high: u32,
    special: u32,
}

impl TierCounts {
    fn record(&mut self, tier: PayoutTier) {
        match tier {
            PayoutTier::Low => self.low += 1,
            PayoutTier::Medium => self.medium += 1,
            PayoutTier::High => self.high += 1,
            PayoutTier::Special => self.special += 1,
        }
    }
}

#[derive(Debug, Serialize)]
struct Summary {
    seed: u32,
    spins: u32,
    wins: u32,
    hit_rate: f64,
    total_won: u64,
    biggest_win: u64,
    biggest_tier: Option<PayoutTier>,
    wins_by_tier: TierCounts,
    simulated_ms: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_stderr()?;

    let mut machine = cli.machine.build()?;
    let summary = simulate(&mut machine, cli.spins)?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&summary)?
    } else {
        serde_json::to_string(&summary)?
    };
    println!("{}", json);
    Ok(())
}

fn simulate(machine: &mut SlotMachine, spins: u32) -> Result<Summary> {
    let tick = u64::from(TICK_MS);
    let mut now = 0;
    let mut by_tier = TierCounts::default();
    let mut biggest: Option<WinDisplay> = None;

    machine.tick(now);
    for spin in 0..spins {
        ensure!(machine.start_spin(now), "spin {} rejected", spin);
        let started = now;
        while machine.is_spinning() {
            now += tick;
            ensure!(
                now - started < SPIN_TIMEOUT_MS,
                "spin {} did not settle",
                spin
            );
            if let Some(win) = machine.tick(now).displayed {
                debug!("spin {}: {} {}", spin, win.tier.name(), win.credited);
                by_tier.record(win.tier);
                if biggest.as_ref().map_or(true, |b| win.credited > b.credited) {
                    biggest = Some(win);
                }
            }
        }
    }

    let wins = machine.wins();
    Ok(Summary {
        seed: machine.seed(),
        spins,
        wins,
        hit_rate: if spins == 0 {
            0.0
        } else {
            f64::from(wins) / f64::from(spins)
        },
        total_won: machine.total_won(),
        biggest_win: biggest.as_ref().map_or(0, |b| b.credited),
        biggest_tier: biggest.map(|b| b.tier),
        wins_by_tier: by_tier,
        simulated_ms: now,
    })
}
