// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading panes from markup.
//!
//! Builds an element tree the way a host's parser would, loads it, and shows both a
//! successful load and the error reported for a malformed attribute.
//!
//! Run:
//! - `RUST_LOG=trellis_markup=debug cargo run -p trellis_demos --example markup`

use std::collections::HashMap;
use std::rc::Rc;

use trellis_markup::{Element, LoadContext, LoadError, Node, load};
use trellis_pane::{ClickHandler, Composition, Grid, Item, Palette, Surface};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

struct Host {
    palette: Palette<char>,
    handlers: HashMap<&'static str, ClickHandler<()>>,
}

impl LoadContext<char, ()> for Host {
    fn palette(&self) -> &Palette<char> {
        &self.palette
    }

    fn handler(&self, name: &str) -> Option<ClickHandler<()>> {
        self.handlers.get(name).cloned()
    }

    fn load_item(&self, element: &dyn Element) -> Result<Item<char, ()>, LoadError> {
        element
            .attribute("char")
            .and_then(|raw| raw.chars().next())
            .map(Item::new)
            .ok_or(LoadError::MissingAttribute { name: "char" })
    }
}

fn window() -> Node {
    let title = Node::new("outlinepane")
        .with_attribute("length", "9")
        .with_attribute("height", "1")
        .with_child(Node::new("item").with_attribute("char", "["))
        .with_child(Node::new("item").with_attribute("char", "="))
        .with_attribute("repeat", "true");
    let toggle = Node::new("togglebutton")
        .with_attribute("y", "1")
        .with_attribute("length", "3")
        .with_attribute("height", "1")
        .with_attribute("enabled", "true")
        .with_attribute("onClick", "greet");
    let bar = Node::new("percentagebar")
        .with_attribute("x", "4")
        .with_attribute("y", "1")
        .with_attribute("length", "5")
        .with_attribute("height", "1")
        .with_attribute("flipHorizontal", "true")
        .with_attribute("percentage", "0.6");
    Node::new("layeredpane")
        .with_attribute("length", "9")
        .with_attribute("height", "2")
        .with_child(title)
        .with_child(toggle)
        .with_child(bar)
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let greet: ClickHandler<()> = Rc::new(|_| println!("  hello from the toggle"));
    let host = Host {
        palette: Palette::new('+', '-', '#', '.'),
        handlers: HashMap::from([("greet", greet)]),
    };

    let pane = match load(&host, &window()) {
        Ok(pane) => pane,
        Err(error) => {
            eprintln!("load failed: {error}");
            return;
        }
    };
    let mut root: Composition<char, ()> = Composition::new();
    root.add_boxed(pane);

    let mut grid = Grid::new(9, 2);
    root.display(&mut grid);
    for y in 0..grid.height() {
        let row: String = (0..grid.width())
            .map(|x| grid.get(x, y).copied().unwrap_or(' '))
            .collect();
        println!("  |{row}|");
    }
    let slot = grid.slot(1, 1);
    println!("click toggle: handled={}", root.click(&mut grid, &mut (), slot));

    let broken = Node::new("slider")
        .with_attribute("length", "five")
        .with_attribute("height", "1");
    match load(&host, &broken) {
        Ok(_) => println!("unexpectedly loaded"),
        Err(error) => {
            print!("load failed: {error}");
            if let Some(source) = std::error::Error::source(&error) {
                print!(" ({source})");
            }
            println!();
        }
    }
}
