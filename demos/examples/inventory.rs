// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inventory window.
//!
//! Builds a 9x3 window with a toggle, a progress bar, and a slider stacked over a
//! background, then replays a few clicks and prints the grid after each one.
//!
//! Run:
//! - `RUST_LOG=trellis_pane=debug cargo run -p trellis_demos --example inventory`

use trellis_pane::{
    ClickEvent, Composition, Flippable, Grid, Item, OutlinePane, Palette, Pane, Priority,
    Slider, Surface, ToggleButton, VariableBar,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const WIDTH: u32 = 9;
const HEIGHT: u32 = 3;

/// Host event: remembers whether the default action was suppressed.
#[derive(Debug, Default)]
struct Click {
    cancelled: bool,
}

impl ClickEvent for Click {
    fn cancel(&mut self) {
        self.cancelled = true;
    }
}

fn print_grid(title: &str, grid: &Grid<char>) {
    println!("== {title} ==");
    for y in 0..grid.height() {
        let row: String = (0..grid.width())
            .map(|x| grid.get(x, y).copied().unwrap_or(' '))
            .collect();
        println!("  |{row}|");
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let palette = Palette::new('+', '-', '#', '.');
    let mut root: Composition<char, Click> = Composition::new();

    let mut background = OutlinePane::new(0, 0, WIDTH, HEIGHT);
    background.add_item(Item::new(' '));
    background.set_repeat(true);
    background.set_priority(Priority::Lowest);
    root.add(background);

    let mut toggle: ToggleButton<char, Click> = ToggleButton::new(0, 0, 2, 1, &palette);
    toggle.on_click(|_| println!("  toggle clicked"));
    let toggle = root.add(toggle);

    let mut bar = VariableBar::new(3, 0, 6, 1, &palette);
    if let Err(error) = bar.set_value(0.35) {
        eprintln!("bar: {error}");
    }
    let bar = root.add(bar);

    let mut slider = Slider::new(0, 2, WIDTH, 1, &palette);
    slider.flip_horizontally(true);
    let slider = root.add(slider);

    let mut grid = Grid::new(WIDTH, HEIGHT);
    root.display(&mut grid);
    print_grid("initial", &grid);

    let clicks = [(0, 0, "toggle"), (4, 0, "bar"), (6, 2, "slider"), (4, 1, "gap")];
    for (x, y, label) in clicks {
        let mut event = Click::default();
        let slot = grid.slot(x, y);
        let handled = root.click(&mut grid, &mut event, slot);
        println!(
            "click {label} at ({x}, {y}): handled={handled} cancelled={}",
            event.cancelled
        );
        if root.is_dirty() {
            grid.clear();
            root.display(&mut grid);
            print_grid(label, &grid);
        }
    }

    if let Some(toggle) = root.get_as::<ToggleButton<char, Click>>(toggle) {
        println!("toggle enabled: {}", toggle.is_enabled());
    }
    if let Some(bar) = root.get_as::<VariableBar<char, Click>>(bar) {
        println!("bar value: {}", bar.value());
    }
    if let Some(slider) = root.get_as::<Slider<char, Click>>(slider) {
        println!("slider value: {}", slider.value());
    }
}
