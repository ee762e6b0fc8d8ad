use tui_slots::core::{MachineSnapshot, SlotMachine};
use tui_slots::term::machine_view::{HEADER, SPINNING_PROMPT, SPIN_PROMPT};
use tui_slots::term::{AnchorY, FrameBuffer, MachineView, Viewport};
use tui_slots::types::{SymbolKind, TICK_MS};

fn settled_win(kind: SymbolKind) -> MachineSnapshot {
    let mut machine = SlotMachine::new(4);
    machine.tick(0);
    machine.force_symbol(kind);
    machine.start_spin(0);
    let mut now = 0;
    while machine.is_spinning() {
        now += u64::from(TICK_MS);
        machine.tick(now);
    }
    machine.snapshot()
}

fn text_in(fb: &FrameBuffer, x: u16, y: u16, w: u16) -> String {
    (x..x + w).filter_map(|cx| fb.get(cx, y)).map(|c| c.ch).collect()
}

#[test]
fn term_view_renders_border_corners() {
    let mut machine = SlotMachine::new(1);
    machine.tick(0);
    let view = MachineView::default();

    // 5 reels * 8 columns + 4 gaps + border = 46 wide; 3 rows * 3 + border = 11 tall,
    // plus header, footer and two spacers.
    let fb = view.render(&machine.snapshot(), Viewport::new(46, 15));

    assert_eq!(fb.get(0, 2).unwrap().ch, '╔');
    assert_eq!(fb.get(45, 2).unwrap().ch, '╗');
    assert_eq!(fb.get(0, 12).unwrap().ch, '╚');
    assert_eq!(fb.get(45, 12).unwrap().ch, '╝');
    assert_eq!(fb.find_text(HEADER), Some((17, 0)));
    assert!(fb.row_text(14).contains(SPIN_PROMPT));
}

#[test]
fn term_view_draws_each_visible_kind_in_its_cell() {
    let mut machine = SlotMachine::new(31);
    machine.tick(0);
    let grid = machine.visible_grid();
    let view = MachineView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&machine.snapshot(), Viewport::new(46, 15));
    let layout = view.layout(Viewport::new(46, 15));

    for reel in 0..5 {
        for row in 0..3u16 {
            let x = layout.reel_x(reel, view.cell_w());
            let y = layout.window_y() + row * view.row_h() + view.row_h() / 2;
            let text = text_in(&fb, x, y, view.cell_w());
            assert_eq!(
                text.trim(),
                grid.kind(reel, row as usize).as_str(),
                "reel {} row {}",
                reel,
                row
            );
        }
    }
}

#[test]
fn term_view_labels_and_highlights_winning_cells() {
    let snap = settled_win(SymbolKind::M2);
    assert!(snap.has_highlights());

    let view = MachineView::default();
    let vp = Viewport::new(46, 15);
    let fb = view.render(&snap, vp);
    let layout = view.layout(vp);

    // Bottom line of the top-left cell carries the payout label.
    let y = layout.window_y() + view.row_h() - 1;
    let x = layout.reel_x(0, view.cell_w());
    assert_eq!(text_in(&fb, x, y, view.cell_w()).trim(), "10€");
    assert!(fb.get(x, y).unwrap().style.bold);
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let snap = settled_win(SymbolKind::A);
    let view = MachineView::default();

    let narrow = view.render(&snap, Viewport::new(46, 15));
    assert_eq!(narrow.find_text("WON"), None);

    let wide = view.render(&snap, Viewport::new(80, 20));
    assert!(wide.find_text("WON").is_some());
    assert!(wide.find_text("1750€").is_some());
    assert!(wide.find_text("special").is_some());
}

#[test]
fn term_view_shows_celebration_sparks() {
    let snap = settled_win(SymbolKind::Nine);
    assert_eq!(snap.celebrations.len(), 5);
    let fb = MachineView::default().render(&snap, Viewport::new(80, 30));
    assert!(fb.cells().iter().any(|c| c.ch == '*'));
}

#[test]
fn term_view_dims_blurred_reels_while_spinning() {
    let mut machine = SlotMachine::new(6);
    machine.tick(0);
    machine.start_spin(0);
    machine.tick(16);
    machine.tick(600);
    let snap = machine.snapshot();
    assert!(snap.max_blur() >= 1.0);

    let view = MachineView::default();
    let vp = Viewport::new(46, 15);
    let fb = view.render(&snap, vp);
    let layout = view.layout(vp);
    assert!(fb.row_text(layout.footer_y).contains(SPINNING_PROMPT));

    // The fastest reel (reel 4) is drawn dimmed.
    let x = layout.reel_x(4, view.cell_w());
    let y = layout.window_y() + 1;
    assert!(fb.get(x, y).unwrap().style.dim);
}

#[test]
fn term_view_centers_machine_by_default_on_tall_viewports() {
    let machine = SlotMachine::new(1);
    let view = MachineView::default();
    let fb = view.render(&machine.snapshot(), Viewport::new(46, 25));

    // start_y = (25 - 15) / 2 = 5 => header at row 5, frame corner at row 7.
    assert_eq!(fb.find_text(HEADER).map(|(_, y)| y), Some(5));
    assert_eq!(fb.get(0, 7).unwrap().ch, '╔');
}
