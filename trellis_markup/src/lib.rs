// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Markup: builds [`trellis_pane`] trees from parsed markup elements.
//!
//! This crate does not parse any markup syntax. Hosts hand it elements through the
//! [`Element`] trait (or build owned [`Node`]s) and supply a [`LoadContext`] that knows the
//! default payloads, the named click handlers, and how to turn item elements into cells.
//! [`load`] then reads the attributes, constructs the component, and configures it.
//!
//! Malformed attributes abort the load with a [`LoadError`] naming the attribute, and an
//! out-of-range bar value is an error rather than being clamped. Boolean attributes are the
//! exception: `true` in any case reads as true and anything else as false.
//!
//! ## Example
//!
//! ```
//! use trellis_markup::{Element, LoadContext, LoadError, Node, load};
//! use trellis_pane::{ClickHandler, Grid, Item, Palette};
//!
//! struct Host(Palette<char>);
//!
//! impl LoadContext<char, ()> for Host {
//!     fn palette(&self) -> &Palette<char> {
//!         &self.0
//!     }
//!
//!     fn handler(&self, _name: &str) -> Option<ClickHandler<()>> {
//!         None
//!     }
//!
//!     fn load_item(&self, element: &dyn Element) -> Result<Item<char, ()>, LoadError> {
//!         let payload = element.attribute("char").and_then(|raw| raw.chars().next());
//!         payload
//!             .map(Item::new)
//!             .ok_or(LoadError::MissingAttribute { name: "char" })
//!     }
//! }
//!
//! let markup = Node::new("togglebutton")
//!     .with_attribute("length", "3")
//!     .with_attribute("height", "1")
//!     .with_attribute("enabled", "true");
//! let host = Host(Palette::new('+', '-', '#', '.'));
//! let toggle = load(&host, &markup).unwrap();
//!
//! let mut grid = Grid::new(3, 1);
//! let area = trellis_pane::Area::of_surface(&grid);
//! toggle.display(&mut grid, area);
//! assert_eq!(grid.get(2, 0), Some(&'+'));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod attributes;
mod context;
mod element;
mod error;
mod load;

pub use context::LoadContext;
pub use element::{Element, Node};
pub use error::LoadError;
pub use load::load;
