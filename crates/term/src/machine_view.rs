//! MachineView: maps a `core::MachineSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: the header, the reel window in a border, the spin
//! prompt. Each reel is a column `cell_w` characters wide; each slot spans
//! `row_h` terminal rows, and a slot's pixel offset is scaled to rows so a
//! moving reel visibly scrolls. A stats panel sits to the right when the
//! viewport is wide enough.

use crate::core::{MachineSnapshot, ReelSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PayoutTier, SymbolKind, REEL_COUNT, ROW_COUNT, SLOT_HEIGHT};

/// Title drawn above the reels.
pub const HEADER: &str = "CRAZY SLOTS!";

/// Prompt drawn below the reels while idle.
pub const SPIN_PROMPT: &str = "[ SPIN ]";

/// Drawn below the reels while spinning.
pub const SPINNING_PROMPT: &str = "spinning";

/// Reels moving faster than this (blur units) are drawn dimmed.
pub const BLUR_DIM_THRESHOLD: f64 = 1.0;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Placement of the machine inside a viewport, computed per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub header_y: u16,
    /// Top-left corner of the border.
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    pub footer_y: u16,
}

impl Layout {
    /// Column of reel `i`'s left edge.
    pub fn reel_x(&self, i: usize, cell_w: u16) -> u16 {
        self.frame_x + 1 + (i as u16) * (cell_w + 1)
    }

    /// First terminal row inside the border.
    pub fn window_y(&self) -> u16 {
        self.frame_y + 1
    }
}

pub struct MachineView {
    /// Reel column width in terminal columns.
    cell_w: u16,
    /// Slot height in terminal rows.
    row_h: u16,
    anchor_y: AnchorY,
}

impl Default for MachineView {
    fn default() -> Self {
        Self {
            cell_w: 8,
            row_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

impl MachineView {
    pub fn new(cell_w: u16, row_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(3),
            row_h: row_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn cell_w(&self) -> u16 {
        self.cell_w
    }

    pub fn row_h(&self) -> u16 {
        self.row_h
    }

    pub fn layout(&self, viewport: Viewport) -> Layout {
        let reels_w = REEL_COUNT as u16 * self.cell_w + (REEL_COUNT as u16 - 1);
        let frame_w = reels_w + 2;
        let frame_h = ROW_COUNT as u16 * self.row_h + 2;
        // Header, spacer, frame, spacer, footer.
        let total_h = frame_h + 4;

        let frame_x = viewport.width.saturating_sub(frame_w) / 2;
        let header_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };
        let frame_y = header_y + 2;
        Layout {
            header_y,
            frame_x,
            frame_y,
            frame_w,
            frame_h,
            footer_y: frame_y + frame_h + 1,
        }
    }

    /// Render a snapshot into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &MachineSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let layout = self.layout(viewport);

        let header = CellStyle::new(Rgb::new(255, 215, 80), Rgb::new(0, 0, 0)).bold();
        fb.put_str_centered(layout.frame_x, layout.header_y, layout.frame_w, HEADER, header);

        let window = CellStyle::new(Rgb::new(70, 70, 80), Rgb::new(20, 20, 28));
        let border = CellStyle::new(Rgb::new(200, 170, 90), Rgb::new(0, 0, 0));
        fb.fill_rect(
            layout.frame_x + 1,
            layout.window_y(),
            layout.frame_w - 2,
            layout.frame_h - 2,
            ' ',
            window,
        );
        draw_border(fb, layout.frame_x, layout.frame_y, layout.frame_w, layout.frame_h, border);

        for (i, reel) in snap.reels.iter().enumerate() {
            self.draw_reel(fb, snap, i, reel, &layout);
            if i + 1 < REEL_COUNT {
                let gap_x = layout.reel_x(i, self.cell_w) + self.cell_w;
                fb.fill_rect(gap_x, layout.window_y(), 1, layout.frame_h - 2, '│', window.dim());
            }
        }

        let prompt = if snap.spinning {
            (SPINNING_PROMPT, CellStyle::default().dim())
        } else {
            (SPIN_PROMPT, CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold())
        };
        fb.put_str_centered(layout.frame_x, layout.footer_y, layout.frame_w, prompt.0, prompt.1);

        self.draw_side_panel(fb, snap, viewport, &layout);
        draw_celebrations(fb, snap, viewport);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &MachineSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_reel(
        &self,
        fb: &mut FrameBuffer,
        snap: &MachineSnapshot,
        index: usize,
        reel: &ReelSnapshot,
        layout: &Layout,
    ) {
        let x = layout.reel_x(index, self.cell_w);
        let window_h = (ROW_COUNT as u16 * self.row_h) as i32;
        let blurred = reel.blur.abs() >= BLUR_DIM_THRESHOLD;

        for slot in &reel.slots {
            let top = (slot.offset / SLOT_HEIGHT * f64::from(self.row_h)).round() as i32;
            let overlay = if snap.spinning {
                None
            } else {
                resting_row(slot.offset).map(|row| snap.overlays[index][row])
            };
            let highlighted = overlay.is_some_and(|o| o.highlighted);
            let label = overlay.and_then(|o| o.label);
            let style = symbol_style(slot.kind, highlighted, blurred);

            for dy in 0..self.row_h {
                let y = top + i32::from(dy);
                if y < 0 || y >= window_h {
                    continue;
                }
                let y = layout.window_y() + y as u16;
                fb.fill_rect(x, y, self.cell_w, 1, ' ', style);

                if dy == self.row_h - 1 {
                    if let Some(tier) = label {
                        let label_style = CellStyle {
                            fg: Rgb::new(255, 240, 120),
                            bold: true,
                            ..style
                        };
                        fb.put_str_centered(x, y, self.cell_w, tier.label(), label_style);
                        continue;
                    }
                }
                if dy == self.row_h / 2 {
                    fb.put_str_centered(x, y, self.cell_w, slot.kind.as_str(), style);
                }
            }
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &MachineSnapshot,
        viewport: Viewport,
        layout: &Layout,
    ) {
        let panel_x = layout
            .frame_x
            .saturating_add(layout.frame_w)
            .saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = layout.frame_y;
        fb.put_str(panel_x, y, "WON", label);
        y += 1;
        let end = fb.put_u64(panel_x, y, snap.total_won, value);
        fb.put_char(end, y, '€', value);
        y += 2;

        fb.put_str(panel_x, y, "SPINS", label);
        y += 1;
        fb.put_u64(panel_x, y, u64::from(snap.spins), value);
        y += 2;

        fb.put_str(panel_x, y, "WINS", label);
        y += 1;
        fb.put_u64(panel_x, y, u64::from(snap.wins), value);
        y += 2;

        fb.put_str(panel_x, y, "LAST", label);
        y += 1;
        match snap.last_win {
            Some(tier) => {
                let end = fb.put_str(panel_x, y, tier.name(), tier_style(tier));
                fb.put_str(end + 1, y, tier.label(), value);
            }
            None => {
                fb.put_str(panel_x, y, "-", value);
            }
        }
        y += 2;

        fb.put_str(panel_x, y, "FORCE", label);
        y += 1;
        fb.put_str(
            panel_x,
            y,
            snap.forced.map(SymbolKind::as_str).unwrap_or("-"),
            value,
        );
    }
}

/// Visible row of a slot resting exactly on a row boundary.
fn resting_row(offset: f64) -> Option<usize> {
    let row = (offset / SLOT_HEIGHT).round();
    if row < 0.0 || row >= ROW_COUNT as f64 || (offset - row * SLOT_HEIGHT).abs() > 1e-6 {
        return None;
    }
    Some(row as usize)
}

fn tier_color(tier: Option<PayoutTier>) -> Rgb {
    match tier {
        Some(PayoutTier::Low) => Rgb::new(120, 160, 220),
        Some(PayoutTier::Medium) => Rgb::new(110, 210, 120),
        Some(PayoutTier::High) => Rgb::new(220, 110, 220),
        Some(PayoutTier::Special) => Rgb::new(255, 200, 60),
        None => Rgb::new(200, 200, 200),
    }
}

fn tier_style(tier: PayoutTier) -> CellStyle {
    CellStyle::new(tier_color(Some(tier)), Rgb::new(0, 0, 0)).bold()
}

fn symbol_style(kind: SymbolKind, highlighted: bool, blurred: bool) -> CellStyle {
    let color = tier_color(PayoutTier::of_kind(kind));
    if highlighted {
        return CellStyle::new(Rgb::new(255, 255, 255), color.darken(150)).bold();
    }
    let style = CellStyle::new(color, Rgb::new(34, 34, 46));
    if blurred {
        style.dim()
    } else {
        style
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    fb.put_char(x, y, '╔', style);
    fb.put_char(x + w - 1, y, '╗', style);
    fb.put_char(x, y + h - 1, '╚', style);
    fb.put_char(x + w - 1, y + h - 1, '╝', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '═', style);
        fb.put_char(x + dx, y + h - 1, '═', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '║', style);
        fb.put_char(x + w - 1, y + dy, '║', style);
    }
}

/// Sparks at their normalised positions; color cycles with the animation frame.
fn draw_celebrations(fb: &mut FrameBuffer, snap: &MachineSnapshot, viewport: Viewport) {
    const SPARKS: [Rgb; 3] = [
        Rgb::new(255, 220, 80),
        Rgb::new(255, 140, 40),
        Rgb::new(255, 90, 60),
    ];
    let max_x = f64::from(viewport.width.saturating_sub(1));
    let max_y = f64::from(viewport.height.saturating_sub(1));
    for c in &snap.celebrations {
        let x = (c.x * max_x).round() as u16;
        let y = (c.y * max_y).round() as u16;
        let fg = SPARKS[usize::from(c.frame) % SPARKS.len()];
        let bg = fb.get(x, y).map(|cell| cell.style.bg).unwrap_or_default();
        fb.put_char(x, y, '*', CellStyle::new(fg, bg).bold());
    }
}
