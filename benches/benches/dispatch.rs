// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use trellis_pane::{
    Composition, Grid, Item, LayeredPane, OutlinePane, Palette, Pane, Priority, ToggleButton,
    VariableBar,
};

const WIDTH: u32 = 64;
const HEIGHT: u32 = 32;

/// A chain of `depth` layered panes, each offset by one cell, ending in a repeating leaf.
fn deep_tree(depth: u32) -> Composition<u32, ()> {
    let mut leaf = OutlinePane::new(0, 0, WIDTH, HEIGHT);
    leaf.add_item(Item::with_handler(1, |_| {}));
    leaf.set_repeat(true);

    let mut pane: LayeredPane<u32, ()> = LayeredPane::new(1, 0, WIDTH, HEIGHT);
    pane.add_pane(leaf);
    for _ in 1..depth {
        let mut parent = LayeredPane::new(1, 0, WIDTH, HEIGHT);
        parent.add_pane(pane);
        pane = parent;
    }
    let mut root = Composition::new();
    root.add(pane);
    root
}

/// `count` overlapping bars and toggles with mixed priorities at the root.
fn wide_root(count: u32) -> Composition<u32, ()> {
    let palette = Palette::new(1, 2, 3, 4);
    let mut root = Composition::new();
    for i in 0..count {
        let y = i % HEIGHT;
        if i % 2 == 0 {
            let mut bar = VariableBar::new(0, y, WIDTH, 1, &palette);
            let _ = bar.set_value((i % 10) as f32 / 10.0);
            root.add(bar);
        } else {
            let mut toggle: ToggleButton<u32, ()> =
                ToggleButton::new(i % WIDTH, y, 4, 1, &palette);
            toggle.set_priority(if i % 3 == 0 {
                Priority::High
            } else {
                Priority::Low
            });
            root.add(toggle);
        }
    }
    root
}

fn bench_deep_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("deep_tree");
    for &depth in &[4u32, 16, 48] {
        let mut root = deep_tree(depth);
        let mut grid = Grid::new(WIDTH, HEIGHT);
        group.throughput(Throughput::Elements(u64::from(WIDTH * HEIGHT)));

        group.bench_function(format!("display_depth{}", depth), |b| {
            b.iter(|| {
                root.display(&mut grid);
                black_box(grid.get(WIDTH - 1, HEIGHT - 1));
            });
        });

        let slot = grid.slot(WIDTH - 1, HEIGHT / 2);
        group.bench_function(format!("click_depth{}", depth), |b| {
            b.iter(|| black_box(root.click(&mut grid, &mut (), black_box(slot))));
        });
    }
    group.finish();
}

fn bench_wide_root(c: &mut Criterion) {
    let mut group = c.benchmark_group("wide_root");
    for &count in &[32u32, 256, 1024] {
        group.throughput(Throughput::Elements(u64::from(count)));

        group.bench_function(format!("display_n{}", count), |b| {
            let mut root = wide_root(count);
            let mut grid = Grid::new(WIDTH, HEIGHT);
            b.iter(|| root.display(&mut grid));
        });

        group.bench_function(format!("click_sweep_n{}", count), |b| {
            b.iter_batched(
                || (wide_root(count), Grid::new(WIDTH, HEIGHT)),
                |(mut root, mut grid)| {
                    let mut handled = 0usize;
                    for slot in (0..WIDTH * HEIGHT).step_by(7) {
                        handled += usize::from(root.click(&mut grid, &mut (), slot));
                    }
                    black_box(handled);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_deep_tree, bench_wide_root);
criterion_main!(benches);
