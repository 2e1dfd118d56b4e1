// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Pane: retained-mode panes laid out on a fixed grid of cells.
//!
//! A host surface (an inventory window, a terminal grid, a LED matrix) is a rectangle of
//! `width x height` cells. Trellis lets you describe what goes into those cells as a tree of
//! panes and routes clicks, given as absolute slot indices, back to the right pane and item.
//!
//! - Every pane has an offset relative to its parent, a length and height, a [`Priority`],
//!   and [`PaneFlags`] controlling visibility and picking.
//! - Offsets accumulate down the tree and every level clips to its parent's extent; see
//!   [`Area::enter`].
//! - Siblings draw in ascending priority, ties in insertion order. Clicks visit them in the
//!   reverse order and the first pane that handles a click ends dispatch.
//!
//! ## API overview
//!
//! - [`Composition`]: the root. Owns the top-level panes and tracks when a redraw is due.
//! - [`Pane`]: the trait every pane implements. Concrete panes keep their shared state in a
//!   [`PaneCore`].
//! - [`OutlinePane`]: fills its area with [`Item`]s in reading order, optionally repeating.
//! - [`LayeredPane`]: stacks child panes over the same area.
//! - [`ToggleButton`], [`VariableBar`], [`Slider`]: ready-made components.
//! - [`Surface`]: what a host implements to receive cells. [`Grid`] is an in-memory one.
//!
//! Items and panes carry identity tokens ([`ItemId`], [`PaneId`]) that survive copies, so a
//! copy can be used to find or remove the original.
//!
//! ## Example
//!
//! ```
//! use trellis_pane::{Composition, Grid, Palette, ToggleButton, VariableBar};
//!
//! let palette = Palette::new('+', '-', '#', '.');
//! let mut root: Composition<char, ()> = Composition::new();
//!
//! let toggle = root.add(ToggleButton::new(2, 1, 2, 1, &palette));
//! let mut bar = VariableBar::new(0, 2, 10, 1, &palette);
//! bar.set_value(0.35).unwrap();
//! root.add(bar);
//!
//! let mut grid = Grid::new(10, 3);
//! root.display(&mut grid);
//! assert_eq!(grid.get(2, 1), Some(&'-'));
//! assert_eq!(grid.get(3, 2), Some(&'#'));
//! assert_eq!(grid.get(4, 2), Some(&'.'));
//!
//! // Slot 12 is column 2 of row 1: the toggle.
//! assert!(root.click(&mut grid, &mut (), 12));
//! assert!(root.get_as::<ToggleButton<char, ()>>(toggle).unwrap().is_enabled());
//! assert!(root.is_dirty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`. Enable either the `std` (default) or the `libm`
//! feature; fill rounding comes from one of them.

#![no_std]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("trellis_pane requires either the `std` or `libm` feature");

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod component;
mod composition;
mod error;
mod item;
mod layered;
mod outline;
mod palette;
mod pane;
mod surface;
mod types;

pub use component::{Slider, ToggleButton, VariableBar, scaled_extent};
pub use composition::Composition;
pub use error::PaneError;
pub use item::{ClickEvent, ClickHandler, Item};
pub use layered::LayeredPane;
pub use outline::OutlinePane;
pub use palette::Palette;
pub use pane::{Flippable, Orientable, Pane, PaneCore};
pub use surface::{Area, Grid, Surface};
pub use types::{Flip, ItemId, Orientation, PaneFlags, PaneId, Priority};
