// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dispatch root that owns every top-level pane of one surface.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::any::Any;

use crate::item::Item;
use crate::layered::Layers;
use crate::pane::Pane;
use crate::surface::{Area, Surface};
use crate::types::PaneId;

/// Root of a pane tree bound to one surface.
///
/// ## Usage
///
/// - [`add`](Self::add) top-level panes; they are drawn in priority order with ties
///   kept in insertion order.
/// - Call [`display`](Self::display) to render the whole tree from (0, 0) with the
///   surface's full bounds.
/// - Feed raw clicks to [`click`](Self::click) as absolute slots. The topmost visible,
///   pickable pane under the slot gets it first; the first pane that handles it ends
///   dispatch.
/// - A handled click marks the composition dirty until the next `display`.
///
/// Panes are looked up and removed by identity ([`PaneId`]), never by value.
pub struct Composition<I, E> {
    layers: Layers<I, E>,
    dirty: bool,
}

impl<I: 'static, E: 'static> Default for Composition<I, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: 'static, E: 'static> Composition<I, E> {
    /// Create an empty composition.
    pub fn new() -> Self {
        Self {
            layers: Layers::new(),
            dirty: false,
        }
    }

    /// Add a top-level pane. Returns its identity.
    pub fn add(&mut self, pane: impl Pane<I, E>) -> PaneId {
        self.add_boxed(Box::new(pane))
    }

    /// Add an already boxed top-level pane.
    pub fn add_boxed(&mut self, pane: Box<dyn Pane<I, E>>) -> PaneId {
        self.dirty = true;
        self.layers.add(pane)
    }

    /// Remove a top-level pane by identity.
    pub fn remove(&mut self, id: PaneId) -> Option<Box<dyn Pane<I, E>>> {
        let removed = self.layers.remove(id);
        self.dirty |= removed.is_some();
        removed
    }

    /// Top-level pane with the given identity.
    pub fn get(&self, id: PaneId) -> Option<&dyn Pane<I, E>> {
        self.layers.get(id)
    }

    /// Top-level pane with the given identity, mutably.
    ///
    /// Marks the composition dirty when the pane is found, since the caller may change what
    /// is shown.
    pub fn get_mut(&mut self, id: PaneId) -> Option<&mut dyn Pane<I, E>> {
        let pane = self.layers.get_mut(id)?;
        self.dirty = true;
        Some(pane)
    }

    /// Top-level pane with the given identity, as its concrete type.
    pub fn get_as<P: Pane<I, E>>(&self, id: PaneId) -> Option<&P> {
        let pane: &dyn Any = self.layers.get(id)?;
        pane.downcast_ref()
    }

    /// Top-level pane with the given identity, as its concrete type, mutably.
    pub fn get_as_mut<P: Pane<I, E>>(&mut self, id: PaneId) -> Option<&mut P> {
        let pane: &mut dyn Any = self.layers.get_mut(id)?;
        let pane = pane.downcast_mut()?;
        self.dirty = true;
        Some(pane)
    }

    /// Top-level panes in draw order.
    pub fn panes(&self) -> Vec<&dyn Pane<I, E>> {
        self.layers.ordered()
    }

    /// Every item of every top-level pane, in draw order.
    pub fn items(&self) -> Vec<&Item<I, E>> {
        self.layers.items()
    }

    /// Number of top-level panes.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns true if there are no top-level panes.
    pub fn is_empty(&self) -> bool {
        self.layers.len() == 0
    }

    /// Returns true if the surface needs to be redrawn.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Force the next [`is_dirty`](Self::is_dirty) to report true.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Render every visible pane onto `surface` and clear the dirty flag.
    pub fn display(&mut self, surface: &mut dyn Surface<I>) {
        let area = Area::of_surface(surface);
        self.layers.display(surface, area);
        self.dirty = false;
    }

    /// Route a click at absolute `slot`. Returns true if some pane handled it.
    pub fn click(&mut self, surface: &mut dyn Surface<I>, event: &mut E, slot: u32) -> bool {
        let span = tracing::debug_span!("composition.click", slot);
        let _guard = span.enter();

        let area = Area::of_surface(surface);
        match self.layers.click(surface, event, slot, area) {
            Some(id) => {
                tracing::debug!(pane = id.get(), "handled");
                self.dirty = true;
                true
            }
            None => {
                tracing::trace!("unhandled");
                false
            }
        }
    }
}

impl<I, E> core::fmt::Debug for Composition<I, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Composition")
            .field("layers", &self.layers)
            .field("dirty", &self.dirty)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{ToggleButton, VariableBar};
    use crate::layered::LayeredPane;
    use crate::outline::OutlinePane;
    use crate::palette::Palette;
    use crate::surface::Grid;
    use crate::types::Priority;
    use alloc::rc::Rc;
    use core::cell::Cell;

    fn palette() -> Palette<char> {
        Palette::new('+', '-', '#', '.')
    }

    #[test]
    fn toggle_scenario_through_root() {
        let mut root: Composition<char, ()> = Composition::new();
        let id = root.add(ToggleButton::new(2, 1, 2, 1, &palette()));
        let mut grid = Grid::new(9, 3);
        root.display(&mut grid);
        assert_eq!(grid.get(2, 1), Some(&'-'));
        assert!(!root.is_dirty());

        let slot = grid.slot(3, 1);
        assert!(root.click(&mut grid, &mut (), slot));
        assert!(root.is_dirty());
        assert_eq!(grid.redraw_requests(), 1);
        let button = root.get_as::<ToggleButton<char, ()>>(id).unwrap();
        assert!(button.is_enabled());

        root.display(&mut grid);
        assert_eq!(grid.get(3, 1), Some(&'+'));
    }

    #[test]
    fn unmatched_click_is_not_handled() {
        let mut root: Composition<char, ()> = Composition::new();
        let id = root.add(ToggleButton::new(2, 1, 2, 1, &palette()));
        let mut grid = Grid::new(9, 3);
        root.display(&mut grid);
        assert!(!root.click(&mut grid, &mut (), 0));
        assert!(!root.is_dirty());
        let button = root.get_as::<ToggleButton<char, ()>>(id).unwrap();
        assert!(!button.is_enabled());
    }

    #[test]
    fn topmost_pane_wins_and_stops_dispatch() {
        let low_hits = Rc::new(Cell::new(0));
        let high_hits = Rc::new(Cell::new(0));

        let mut root: Composition<char, ()> = Composition::new();
        let mut high = OutlinePane::new(0, 0, 3, 1);
        let counter = high_hits.clone();
        high.add_item(Item::with_handler('h', move |_| counter.set(counter.get() + 1)));
        high.set_priority(Priority::High);
        root.add(high);

        let mut low = OutlinePane::new(0, 0, 3, 1);
        let counter = low_hits.clone();
        low.add_item(Item::with_handler('l', move |_| counter.set(counter.get() + 1)));
        low.set_repeat(true);
        root.add(low);

        let mut grid = Grid::new(3, 1);
        assert!(root.click(&mut grid, &mut (), 0));
        assert_eq!((high_hits.get(), low_hits.get()), (1, 0));

        // The high pane has no item at slot 1, so the click falls through.
        assert!(root.click(&mut grid, &mut (), 1));
        assert_eq!((high_hits.get(), low_hits.get()), (1, 1));
    }

    #[test]
    fn deep_nesting_routes_to_leaf() {
        let hits = Rc::new(Cell::new(0));
        let mut leaf = OutlinePane::new(1, 0, 1, 1);
        let counter = hits.clone();
        leaf.add_item(Item::with_handler('*', move |_| counter.set(counter.get() + 1)));

        let mut pane: LayeredPane<char, ()> = LayeredPane::new(1, 0, 9, 9);
        pane.add_pane(leaf);
        for _ in 0..4 {
            let mut parent = LayeredPane::new(1, 0, 9, 9);
            parent.add_pane(pane);
            pane = parent;
        }
        // Five containers plus the leaf's own offset: column 6.
        let mut root: Composition<char, ()> = Composition::new();
        root.add(pane);
        let mut grid = Grid::new(9, 1);
        root.display(&mut grid);
        assert_eq!(grid.get(6, 0), Some(&'*'));

        assert!(!root.click(&mut grid, &mut (), 5));
        assert!(root.click(&mut grid, &mut (), 6));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn remove_by_identity_uses_copies() {
        let mut root: Composition<char, ()> = Composition::new();
        let bar: VariableBar<char, ()> = VariableBar::new(0, 0, 4, 1, &palette());
        let copy = bar.copy();
        root.add(bar);
        assert_eq!(root.len(), 1);
        assert!(root.remove(copy.id()).is_some());
        assert!(root.is_empty());
        assert!(root.remove(copy.id()).is_none());
    }

    #[test]
    fn invisible_panes_neither_draw_nor_click() {
        let mut root: Composition<char, ()> = Composition::new();
        let id = root.add(ToggleButton::new(0, 0, 1, 1, &palette()));
        root.get_mut(id).unwrap().set_visible(false);
        let mut grid = Grid::new(1, 1);
        root.display(&mut grid);
        assert_eq!(grid.get(0, 0), None);
        assert!(!root.click(&mut grid, &mut (), 0));
        assert_eq!(root.items().len(), 2);
    }

    #[test]
    fn failed_lookups_leave_composition_clean() {
        let mut root: Composition<char, ()> = Composition::new();
        let id = root.add(ToggleButton::new(0, 0, 1, 1, &palette()));
        let removed = root.add(ToggleButton::new(1, 0, 1, 1, &palette()));
        root.remove(removed);
        let mut grid = Grid::new(2, 1);
        root.display(&mut grid);
        assert!(!root.is_dirty());

        assert!(root.get_mut(removed).is_none());
        assert!(root.get_as_mut::<ToggleButton<char, ()>>(removed).is_none());
        assert!(root.get_as_mut::<VariableBar<char, ()>>(id).is_none());
        assert!(!root.is_dirty());

        assert!(root.get_as_mut::<ToggleButton<char, ()>>(id).is_some());
        assert!(root.is_dirty());
    }

    #[test]
    fn resizing_through_root_rescales_bar() {
        let mut root: Composition<char, ()> = Composition::new();
        let mut bar: VariableBar<char, ()> = VariableBar::new(0, 0, 10, 1, &palette());
        bar.set_value(0.5).unwrap();
        let id = root.add(bar);
        root.get_mut(id).unwrap().set_length(4);

        let bar = root.get_as::<VariableBar<char, ()>>(id).unwrap();
        assert_eq!(bar.fill_pane().length(), 2);
        let mut grid = Grid::new(10, 1);
        root.display(&mut grid);
        assert_eq!(grid.get(1, 0), Some(&'#'));
        assert_eq!(grid.get(2, 0), Some(&'.'));
        assert_eq!(grid.get(4, 0), None);
    }
}
