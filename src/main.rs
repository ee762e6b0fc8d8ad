//! Terminal slot machine runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `tui_slots::term`.
//! The machine is ticked at a fixed interval with a millisecond clock measured
//! from program start.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use tui_slots::cli::MachineArgs;
use tui_slots::core::{MachineSnapshot, SlotMachine};
use tui_slots::input::{handle_key_event, should_quit};
use tui_slots::logging;
use tui_slots::term::{FrameBuffer, MachineView, TerminalRenderer, Viewport};
use tui_slots::types::TICK_MS;

/// Five reels, three rows, seven paylines.
#[derive(Debug, Parser)]
#[command(
    name = "tui-slots",
    version,
    about = "A 5x3 slot machine in the terminal.",
    long_about = "A 5x3 slot machine in the terminal.\n\n\
        CONTROLS:\n  Space/Enter/S  Spin        F  Force a random symbol\n  \
        1-4            Force 9 / M1 / H1 / A       Q / Esc  Quit"
)]
struct Cli {
    #[command(flatten)]
    machine: MachineArgs,

    /// Write engine logs to this file (nothing is logged otherwise).
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        logging::init_file(path)?;
    }
    let machine = cli.machine.build()?;
    info!("starting with seed {}", machine.seed());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, machine);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut machine: SlotMachine) -> Result<()> {
    let view = MachineView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = MachineSnapshot::default();

    let clock = Instant::now();
    let tick_duration = Duration::from_millis(u64::from(TICK_MS));
    let mut last_tick = Instant::now();

    loop {
        // Render.
        machine.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(
                            "quitting after {} spins, {} won",
                            machine.spins(),
                            machine.total_won()
                        );
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        machine.apply_action(action, elapsed_ms(clock));
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            machine.tick(elapsed_ms(clock));
        }
    }
}

fn elapsed_ms(clock: Instant) -> u64 {
    clock.elapsed().as_millis() as u64
}
