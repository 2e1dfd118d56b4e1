// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sequential layout: items placed one after another, optionally repeating the last.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::item::Item;
use crate::pane::{Flippable, Orientable, Pane, PaneCore};
use crate::surface::{Area, Surface};
use crate::types::{Flip, ItemId, Orientation};

/// A pane that lays its items out in order, filling its clipped rectangle.
///
/// With the default [`Orientation::Horizontal`], item `i` lands on local
/// `(i % length, i / length)`: row-major, stopping once every row is filled.
/// [`Orientation::Vertical`] fills column-major instead, and [`Flip`] mirrors the
/// finished layout along either axis.
///
/// With [`repeat`](Self::set_repeat) enabled, every cell past the last item shows the
/// last item again and resolves clicks to it.
///
/// This is the structural leaf the stateful components delegate to.
pub struct OutlinePane<I, E> {
    core: PaneCore<E>,
    items: Vec<Item<I, E>>,
    repeat: bool,
    orientation: Orientation,
    flip: Flip,
}

impl<I, E> OutlinePane<I, E> {
    /// Create an empty pane at (`x`, `y`).
    pub fn new(x: u32, y: u32, length: u32, height: u32) -> Self {
        Self {
            core: PaneCore::new(x, y, length, height),
            items: Vec::new(),
            repeat: false,
            orientation: Orientation::Horizontal,
            flip: Flip::empty(),
        }
    }

    /// Append an item.
    pub fn add_item(&mut self, item: Item<I, E>) {
        self.items.push(item);
    }

    /// Remove an item by identity. Returns the removed item.
    pub fn remove_item(&mut self, id: ItemId) -> Option<Item<I, E>> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    pub(crate) fn state_mut(&mut self) -> &mut PaneCore<E> {
        &mut self.core
    }

    /// Remove every item.
    pub fn clear_items(&mut self) {
        self.items.clear();
    }

    /// Items in layout order.
    pub fn item_list(&self) -> &[Item<I, E>] {
        &self.items
    }

    /// Whether the last item repeats into the remaining cells.
    pub fn repeats(&self) -> bool {
        self.repeat
    }

    /// Enable or disable repetition of the last item.
    pub fn set_repeat(&mut self, repeat: bool) {
        self.repeat = repeat;
    }

    /// Item occupying layout position `index`, taking repetition into account.
    pub fn item_at(&self, index: usize) -> Option<&Item<I, E>> {
        match self.items.get(index) {
            Some(item) => Some(item),
            None if self.repeat => self.items.last(),
            None => None,
        }
    }

    /// Local cell of layout position `index` inside a `length` x `height` region.
    fn cell_of(&self, index: usize, length: u32, height: u32) -> (u32, u32) {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "index is bounded by length * height, both u32."
        )]
        let (x, y) = match self.orientation {
            Orientation::Horizontal => (
                (index % length as usize) as u32,
                (index / length as usize) as u32,
            ),
            Orientation::Vertical => (
                (index / height as usize) as u32,
                (index % height as usize) as u32,
            ),
        };
        self.mirror(x, y, length, height)
    }

    /// Layout position of local cell (`x`, `y`) inside a `length` x `height` region.
    fn index_of(&self, x: u32, y: u32, length: u32, height: u32) -> usize {
        let (x, y) = self.mirror(x, y, length, height);
        match self.orientation {
            Orientation::Horizontal => y as usize * length as usize + x as usize,
            Orientation::Vertical => x as usize * height as usize + y as usize,
        }
    }

    // Mirroring is an involution, so the same mapping serves both directions.
    fn mirror(&self, x: u32, y: u32, length: u32, height: u32) -> (u32, u32) {
        let x = if self.flip.contains(Flip::HORIZONTAL) {
            length - 1 - x
        } else {
            x
        };
        let y = if self.flip.contains(Flip::VERTICAL) {
            height - 1 - y
        } else {
            y
        };
        (x, y)
    }
}

impl<I: Clone, E> OutlinePane<I, E> {
    /// Deep copy with a concrete type, see [`Pane::copy`].
    pub fn duplicate(&self) -> Self {
        self.clone()
    }
}

impl<I: Clone, E> Clone for OutlinePane<I, E> {
    fn clone(&self) -> Self {
        Self {
            core: self.core.clone(),
            items: self.items.clone(),
            repeat: self.repeat,
            orientation: self.orientation,
            flip: self.flip,
        }
    }
}

impl<I: core::fmt::Debug, E> core::fmt::Debug for OutlinePane<I, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OutlinePane")
            .field("core", &self.core)
            .field("items", &self.items)
            .field("repeat", &self.repeat)
            .field("orientation", &self.orientation)
            .field("flip", &self.flip)
            .finish()
    }
}

impl<I, E> Orientable for OutlinePane<I, E> {
    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }
}

impl<I, E> Flippable for OutlinePane<I, E> {
    fn flip(&self) -> Flip {
        self.flip
    }

    fn set_flip(&mut self, flip: Flip) {
        self.flip = flip;
    }
}

impl<I: Clone + core::fmt::Debug + 'static, E: 'static> Pane<I, E> for OutlinePane<I, E> {
    fn core(&self) -> &PaneCore<E> {
        &self.core
    }

    fn core_mut(&mut self) -> &mut PaneCore<E> {
        &mut self.core
    }

    fn display(&self, surface: &mut dyn Surface<I>, area: Area) {
        if !self.core.is_visible() {
            return;
        }
        let area = self.core.enter(area);
        for index in 0..area.cells() {
            let Some(item) = self.item_at(index) else {
                break;
            };
            let (x, y) = self.cell_of(index, area.length, area.height);
            surface.place(area.x + x, area.y + y, item.payload());
        }
    }

    fn click(
        &mut self,
        surface: &mut dyn Surface<I>,
        event: &mut E,
        slot: u32,
        area: Area,
    ) -> bool {
        if !self.core.is_visible() {
            return false;
        }
        let area = self.core.enter(area);
        let Some((x, y)) = area.localize(slot, surface.width()) else {
            return false;
        };
        self.core.fire(event);

        let index = self.index_of(x, y, area.length, area.height);
        match self.item_at(index) {
            Some(item) => {
                tracing::trace!(pane = self.core.id().get(), index, "outline.click");
                item.click(event);
                true
            }
            None => false,
        }
    }

    fn items(&self) -> Vec<&Item<I, E>> {
        self.items.iter().collect()
    }

    fn panes(&self) -> Vec<&dyn Pane<I, E>> {
        Vec::new()
    }

    fn copy(&self) -> Box<dyn Pane<I, E>> {
        Box::new(self.clone())
    }

    fn clear(&mut self) {
        self.clear_items();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Grid;
    use alloc::rc::Rc;
    use core::cell::Cell;

    fn counting(payload: char, hits: &Rc<Cell<u32>>) -> Item<char, ()> {
        let hits = hits.clone();
        Item::with_handler(payload, move |_| hits.set(hits.get() + 1))
    }

    fn pane_3x1(repeat: bool) -> (OutlinePane<char, ()>, Rc<Cell<u32>>, Rc<Cell<u32>>) {
        let a = Rc::new(Cell::new(0));
        let b = Rc::new(Cell::new(0));
        let mut pane = OutlinePane::new(0, 0, 3, 1);
        pane.add_item(counting('A', &a));
        pane.add_item(counting('B', &b));
        pane.set_repeat(repeat);
        (pane, a, b)
    }

    #[test]
    fn empty_cell_is_not_handled() {
        let (mut pane, a, b) = pane_3x1(false);
        let mut grid = Grid::new(3, 1);
        let area = Area::of_surface(&grid);

        assert!(!pane.click(&mut grid, &mut (), 2, area), "slot 2 is empty");
        assert!(pane.click(&mut grid, &mut (), 0, area));
        assert_eq!(a.get(), 1);
        assert_eq!(b.get(), 0);
    }

    #[test]
    fn repeat_resolves_to_last_item() {
        let (mut pane, a, b) = pane_3x1(true);
        let mut grid = Grid::new(3, 1);
        let area = Area::of_surface(&grid);

        assert!(pane.click(&mut grid, &mut (), 2, area));
        assert_eq!(b.get(), 1, "repeated cell fires the last item's handler");
        assert_eq!(a.get(), 0);

        pane.display(&mut grid, area);
        assert_eq!(grid.get(0, 0), Some(&'A'));
        assert_eq!(grid.get(1, 0), Some(&'B'));
        assert_eq!(grid.get(2, 0), Some(&'B'));
    }

    #[test]
    fn display_is_row_major_and_clipped() {
        let mut pane: OutlinePane<char, ()> = OutlinePane::new(1, 1, 2, 2);
        for c in ['a', 'b', 'c', 'd', 'e'] {
            pane.add_item(Item::new(c));
        }
        let mut grid = Grid::new(4, 4);
        let area = Area::of_surface(&grid);
        pane.display(&mut grid, area);
        assert_eq!(grid.get(1, 1), Some(&'a'));
        assert_eq!(grid.get(2, 1), Some(&'b'));
        assert_eq!(grid.get(1, 2), Some(&'c'));
        assert_eq!(grid.get(2, 2), Some(&'d'));
        assert_eq!(grid.get(3, 1), None, "the fifth item has no cell");
        assert_eq!(grid.get(1, 3), None);
    }

    #[test]
    fn parent_area_clips_extent() {
        let mut pane: OutlinePane<char, ()> = OutlinePane::new(0, 0, 3, 3);
        pane.add_item(Item::new('x'));
        pane.set_repeat(true);
        let mut grid = Grid::new(5, 5);
        pane.display(&mut grid, Area::new(1, 1, 2, 1));
        assert_eq!(grid.get(1, 1), Some(&'x'));
        assert_eq!(grid.get(2, 1), Some(&'x'));
        assert_eq!(grid.get(3, 1), None);
        assert_eq!(grid.get(1, 2), None);

        assert!(!pane.click(&mut grid, &mut (), 3 + 5, Area::new(1, 1, 2, 1)));
        assert!(pane.click(&mut grid, &mut (), 2 + 5, Area::new(1, 1, 2, 1)));
    }

    #[test]
    fn outside_click_skips_pane_callback() {
        let (mut pane, _, _) = pane_3x1(true);
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        pane.on_click(move |_| flag.set(true));
        let mut grid = Grid::new(9, 2);
        let area = Area::of_surface(&grid);
        assert!(!pane.click(&mut grid, &mut (), 9, area));
        assert!(!fired.get());
        assert!(pane.click(&mut grid, &mut (), 1, area));
        assert!(fired.get());
    }

    #[test]
    fn invisible_pane_is_inert() {
        let (mut pane, a, _) = pane_3x1(false);
        pane.set_visible(false);
        let mut grid = Grid::new(3, 1);
        let area = Area::of_surface(&grid);
        pane.display(&mut grid, area);
        assert_eq!(grid.get(0, 0), None);
        assert!(!pane.click(&mut grid, &mut (), 0, area));
        assert_eq!(a.get(), 0);
    }

    #[test]
    fn vertical_and_flipped_layout() {
        let mut pane: OutlinePane<char, ()> = OutlinePane::new(0, 0, 2, 2);
        for c in ['a', 'b', 'c'] {
            pane.add_item(Item::new(c));
        }
        pane.set_orientation(Orientation::Vertical);
        let mut grid = Grid::new(2, 2);
        let area = Area::of_surface(&grid);
        pane.display(&mut grid, area);
        assert_eq!(grid.get(0, 0), Some(&'a'));
        assert_eq!(grid.get(0, 1), Some(&'b'));
        assert_eq!(grid.get(1, 0), Some(&'c'));

        pane.set_orientation(Orientation::Horizontal);
        pane.flip_horizontally(true);
        grid.clear();
        pane.display(&mut grid, area);
        assert_eq!(grid.get(1, 0), Some(&'a'));
        assert_eq!(grid.get(0, 0), Some(&'b'));
        assert_eq!(grid.get(1, 1), Some(&'c'));
        assert!(pane.click(&mut grid, &mut (), 3, area));
        assert!(!pane.click(&mut grid, &mut (), 2, area));
    }

    #[test]
    fn copy_keeps_identity_but_not_storage() {
        let (pane, _, _) = pane_3x1(true);
        let mut copy = pane.duplicate();
        assert_eq!(copy.id(), pane.id());
        copy.clear();
        assert_eq!(pane.item_list().len(), 2);
        assert!(copy.item_list().is_empty());
    }
}
