// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render surfaces and the clipped areas panes are given to draw into.
//!
//! ## Overview
//!
//! A [`Surface`] is the addressable grid panes ultimately render into and that clicks
//! originate from. Clicks arrive as an absolute slot index; the surface's row width turns
//! that index back into a 2-D cell.
//!
//! An [`Area`] is what a parent hands a child during traversal: the accumulated origin of
//! the parent plus the maximum extents the child may occupy. Each pane narrows the area with
//! [`Area::enter`] before drawing its own content or forwarding to sub-panes.

use alloc::vec;
use alloc::vec::Vec;

/// Render surface contract consumed by panes.
pub trait Surface<I> {
    /// Number of cells per row. Used to convert absolute slots into coordinates.
    fn width(&self) -> u32;
    /// Number of rows.
    fn height(&self) -> u32;
    /// Write `item` into the cell at (`x`, `y`).
    ///
    /// Cells outside the surface must be ignored.
    fn place(&mut self, x: u32, y: u32, item: &I);
    /// Ask the surface to redraw. Fire-and-forget; the surface may defer it.
    fn request_redraw(&mut self);
}

/// Origin and maximum extents of a clipped region, in surface coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Area {
    /// Horizontal offset of the region's origin.
    pub x: u32,
    /// Vertical offset of the region's origin.
    pub y: u32,
    /// Maximum number of columns.
    pub length: u32,
    /// Maximum number of rows.
    pub height: u32,
}

impl Area {
    /// Create an area from its origin and extents.
    pub const fn new(x: u32, y: u32, length: u32, height: u32) -> Self {
        Self {
            x,
            y,
            length,
            height,
        }
    }

    /// The full bounds of `surface`, anchored at (0, 0).
    pub fn of_surface<I, S: Surface<I> + ?Sized>(surface: &S) -> Self {
        Self::new(0, 0, surface.width(), surface.height())
    }

    /// Narrow this area to a child placed at (`x`, `y`) with the given extents.
    ///
    /// The origin is translated by the child's offset; the extents are the minimum of
    /// the parent's maximum and the child's own size.
    #[must_use]
    pub fn enter(self, x: u32, y: u32, length: u32, height: u32) -> Self {
        Self {
            x: self.x.saturating_add(x),
            y: self.y.saturating_add(y),
            length: self.length.min(length),
            height: self.height.min(height),
        }
    }

    /// Convert an absolute `slot` to coordinates local to this area.
    ///
    /// Returns `None` when the slot falls outside `[0, length) x [0, height)` or when
    /// `row_width` is zero.
    pub fn localize(self, slot: u32, row_width: u32) -> Option<(u32, u32)> {
        if row_width == 0 {
            return None;
        }
        let local_x = (slot % row_width).checked_sub(self.x)?;
        let local_y = (slot / row_width).checked_sub(self.y)?;
        (local_x < self.length && local_y < self.height).then_some((local_x, local_y))
    }

    /// Number of cells covered.
    pub fn cells(self) -> usize {
        self.length as usize * self.height as usize
    }
}

/// In-memory grid surface.
///
/// Useful as a back buffer for hosts and as the surface in tests.
#[derive(Clone, Debug)]
pub struct Grid<I> {
    width: u32,
    height: u32,
    cells: Vec<Option<I>>,
    redraw_requests: usize,
}

impl<I: Clone> Grid<I> {
    /// Create an empty grid.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
            redraw_requests: 0,
        }
    }

    /// Item placed at (`x`, `y`), if any.
    pub fn get(&self, x: u32, y: u32) -> Option<&I> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells[self.index(x, y)].as_ref()
    }

    /// Item placed at an absolute slot, if any.
    pub fn get_slot(&self, slot: u32) -> Option<&I> {
        self.cells.get(slot as usize).and_then(Option::as_ref)
    }

    /// Number of redraw requests received so far.
    pub fn redraw_requests(&self) -> usize {
        self.redraw_requests
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = None);
    }

    /// Absolute slot of (`x`, `y`).
    pub fn slot(&self, x: u32, y: u32) -> u32 {
        y * self.width + x
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

impl<I: Clone> Surface<I> for Grid<I> {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn place(&mut self, x: u32, y: u32, item: &I) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = self.index(x, y);
        self.cells[index] = Some(item.clone());
    }

    fn request_redraw(&mut self) {
        self.redraw_requests += 1;
    }
}
