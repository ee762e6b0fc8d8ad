use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_slots::core::grid::{self, VisibleGrid};
use tui_slots::core::win::evaluate_grid;
use tui_slots::core::{Catalogue, MachineSnapshot, ReelBank, SimpleRng, SlotMachine};
use tui_slots::term::{FrameBuffer, MachineView, Viewport};
use tui_slots::types::SymbolKind;

fn bench_spinning_tick(c: &mut Criterion) {
    c.bench_function("spinning_tick_16ms", |b| {
        let mut machine = SlotMachine::new(12345);
        let mut now = 0u64;
        b.iter(|| {
            if !machine.is_spinning() {
                machine.start_spin(now);
            }
            now += 16;
            black_box(machine.tick(black_box(now)));
        })
    });
}

fn bench_idle_tick(c: &mut Criterion) {
    let mut machine = SlotMachine::new(12345);
    let mut now = 0u64;

    c.bench_function("idle_tick_16ms", |b| {
        b.iter(|| {
            now += 16;
            black_box(machine.tick(black_box(now)));
        })
    });
}

fn bench_sample(c: &mut Criterion) {
    let mut bank = ReelBank::new(&mut SimpleRng::new(1), &Catalogue::full());
    let mut rng = SimpleRng::new(2);
    let catalogue = Catalogue::full();

    c.bench_function("sample_and_grid", |b| {
        b.iter(|| {
            let report = grid::sample(&mut bank, &mut rng, &catalogue, None);
            black_box((report, grid::visible_grid(&bank)));
        })
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let all_lines = VisibleGrid::from_kinds([[SymbolKind::K; 3]; 5]);

    c.bench_function("evaluate_all_lines", |b| {
        b.iter(|| black_box(evaluate_grid(black_box(&all_lines))))
    });
}

fn bench_render(c: &mut Criterion) {
    let mut machine = SlotMachine::new(7);
    machine.start_spin(0);
    machine.tick(800);
    let mut snap = MachineSnapshot::default();
    machine.snapshot_into(&mut snap);
    let view = MachineView::default();
    let mut fb = FrameBuffer::new(0, 0);

    c.bench_function("render_80x24", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), Viewport::new(80, 24), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_spinning_tick,
    bench_idle_tick,
    bench_sample,
    bench_evaluate,
    bench_render
);
criterion_main!(benches);
