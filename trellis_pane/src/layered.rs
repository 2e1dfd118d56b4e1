// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Priority-ordered stacks of sibling panes.
//!
//! ## Ordering
//!
//! Siblings are drawn in ascending [`Priority`](crate::Priority); equal priorities keep
//! insertion order, so later panes draw over earlier ones. Clicks walk the same order
//! backwards: the pane drawn on top is offered the click first, and the first pane that
//! reports it handled ends the walk.
//!
//! Invisible panes are skipped by both walks. Panes without
//! [`PaneFlags::PICKABLE`] still draw but are skipped by clicks.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::item::Item;
use crate::pane::{Pane, PaneCore};
use crate::surface::{Area, Surface};
use crate::types::{PaneFlags, PaneId};

/// Sibling panes kept in insertion order, traversed in priority order.
pub(crate) struct Layers<I, E> {
    panes: Vec<Box<dyn Pane<I, E>>>,
}

impl<I: 'static, E: 'static> Layers<I, E> {
    pub(crate) fn new() -> Self {
        Self { panes: Vec::new() }
    }

    pub(crate) fn add(&mut self, pane: Box<dyn Pane<I, E>>) -> PaneId {
        let id = pane.id();
        self.panes.push(pane);
        id
    }

    pub(crate) fn remove(&mut self, id: PaneId) -> Option<Box<dyn Pane<I, E>>> {
        let index = self.panes.iter().position(|pane| pane.id() == id)?;
        Some(self.panes.remove(index))
    }

    pub(crate) fn get(&self, id: PaneId) -> Option<&dyn Pane<I, E>> {
        self.panes
            .iter()
            .find(|pane| pane.id() == id)
            .map(|pane| pane.as_ref())
    }

    pub(crate) fn get_mut(&mut self, id: PaneId) -> Option<&mut dyn Pane<I, E>> {
        for pane in &mut self.panes {
            if pane.id() == id {
                return Some(pane.as_mut());
            }
        }
        None
    }

    pub(crate) fn len(&self) -> usize {
        self.panes.len()
    }

    pub(crate) fn clear(&mut self) {
        self.panes.clear();
    }

    /// Indices in draw order. The sort is stable, so equal priorities keep insertion order.
    fn order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.panes.len()).collect();
        order.sort_by_key(|&index| self.panes[index].priority());
        order
    }

    /// Panes in draw order.
    pub(crate) fn ordered(&self) -> Vec<&dyn Pane<I, E>> {
        self.order()
            .into_iter()
            .map(|index| self.panes[index].as_ref())
            .collect()
    }

    pub(crate) fn items(&self) -> Vec<&Item<I, E>> {
        self.ordered()
            .into_iter()
            .flat_map(|pane| pane.items())
            .collect()
    }

    pub(crate) fn display(&self, surface: &mut dyn Surface<I>, area: Area) {
        for index in self.order() {
            let pane = &self.panes[index];
            if pane.is_visible() {
                pane.display(surface, area);
            }
        }
    }

    /// Offer a click to each pane, topmost first. Returns the pane that handled it.
    pub(crate) fn click(
        &mut self,
        surface: &mut dyn Surface<I>,
        event: &mut E,
        slot: u32,
        area: Area,
    ) -> Option<PaneId> {
        for index in self.order().into_iter().rev() {
            let pane = &mut self.panes[index];
            if !pane.is_visible() || !pane.flags().contains(PaneFlags::PICKABLE) {
                continue;
            }
            if pane.click(surface, event, slot, area) {
                return Some(pane.id());
            }
        }
        None
    }

    pub(crate) fn copy(&self) -> Self {
        Self {
            panes: self.panes.iter().map(|pane| pane.copy()).collect(),
        }
    }
}

impl<I, E> core::fmt::Debug for Layers<I, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.panes.iter()).finish()
    }
}

/// A pane that nests other panes.
///
/// Children are positioned relative to this pane's origin and clipped to its size. Any
/// pane kind can be a child, including other layered panes, so trees can nest to any
/// depth; each level narrows the area with the same translate-and-clip step.
pub struct LayeredPane<I, E> {
    core: PaneCore<E>,
    layers: Layers<I, E>,
}

impl<I: 'static, E: 'static> LayeredPane<I, E> {
    /// Create an empty container.
    pub fn new(x: u32, y: u32, length: u32, height: u32) -> Self {
        Self {
            core: PaneCore::new(x, y, length, height),
            layers: Layers::new(),
        }
    }

    /// Add a child. Returns its identity.
    pub fn add_pane(&mut self, pane: impl Pane<I, E>) -> PaneId {
        self.layers.add(Box::new(pane))
    }

    /// Add an already boxed child.
    pub fn add_boxed(&mut self, pane: Box<dyn Pane<I, E>>) -> PaneId {
        self.layers.add(pane)
    }

    /// Remove a child by identity.
    pub fn remove_pane(&mut self, id: PaneId) -> Option<Box<dyn Pane<I, E>>> {
        self.layers.remove(id)
    }

    /// Child with the given identity.
    pub fn pane(&self, id: PaneId) -> Option<&dyn Pane<I, E>> {
        self.layers.get(id)
    }

    /// Child with the given identity, mutably.
    pub fn pane_mut(&mut self, id: PaneId) -> Option<&mut dyn Pane<I, E>> {
        self.layers.get_mut(id)
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns true if there are no children.
    pub fn is_empty(&self) -> bool {
        self.layers.len() == 0
    }
}

impl<I, E> core::fmt::Debug for LayeredPane<I, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LayeredPane")
            .field("core", &self.core)
            .field("layers", &self.layers)
            .finish()
    }
}

impl<I: 'static, E: 'static> Pane<I, E> for LayeredPane<I, E> {
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
        self.layers.display(surface, self.core.enter(area));
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
        if area.localize(slot, surface.width()).is_none() {
            return false;
        }
        self.core.fire(event);
        self.layers.click(surface, event, slot, area).is_some()
    }

    fn items(&self) -> Vec<&Item<I, E>> {
        self.layers.items()
    }

    fn panes(&self) -> Vec<&dyn Pane<I, E>> {
        self.layers.ordered()
    }

    fn copy(&self) -> Box<dyn Pane<I, E>> {
        Box::new(Self {
            core: self.core.clone(),
            layers: self.layers.copy(),
        })
    }

    fn clear(&mut self) {
        self.layers.clear();
    }
}
