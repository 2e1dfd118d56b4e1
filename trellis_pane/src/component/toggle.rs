// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-state button switching between an enabled and a disabled layout.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::item::Item;
use crate::outline::OutlinePane;
use crate::palette::Palette;
use crate::pane::{Pane, PaneCore};
use crate::surface::{Area, Surface};

/// A button that flips between an enabled and a disabled sub-layout on every click.
///
/// Both sub-layouts are [`OutlinePane`]s the size of the button, each filled with a single
/// repeating item. Exactly one of them is displayed and receives clicks, matching the
/// current state. The button starts disabled.
pub struct ToggleButton<I, E> {
    core: PaneCore<E>,
    enabled_pane: OutlinePane<I, E>,
    disabled_pane: OutlinePane<I, E>,
    enabled: bool,
}

impl<I: Clone, E> ToggleButton<I, E> {
    /// Create a disabled button using the palette's enabled/disabled payloads.
    pub fn new(x: u32, y: u32, length: u32, height: u32, palette: &Palette<I>) -> Self {
        let mut enabled_pane = OutlinePane::new(0, 0, length, height);
        enabled_pane.add_item(Item::new(palette.enabled.clone()));
        enabled_pane.set_repeat(true);

        let mut disabled_pane = OutlinePane::new(0, 0, length, height);
        disabled_pane.add_item(Item::new(palette.disabled.clone()));
        disabled_pane.set_repeat(true);

        Self {
            core: PaneCore::new(x, y, length, height),
            enabled_pane,
            disabled_pane,
            enabled: false,
        }
    }
}

impl<I, E> ToggleButton<I, E> {
    /// Returns true while the button is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Switch to the other state.
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
        tracing::debug!(pane = self.core.id().get(), enabled = self.enabled, "toggle.state");
    }

    /// Replace the item shown while enabled.
    pub fn set_enabled_item(&mut self, item: Item<I, E>) {
        self.enabled_pane.clear_items();
        self.enabled_pane.add_item(item);
    }

    /// Replace the item shown while disabled.
    pub fn set_disabled_item(&mut self, item: Item<I, E>) {
        self.disabled_pane.clear_items();
        self.disabled_pane.add_item(item);
    }

    /// Sub-layout shown while enabled.
    pub fn enabled_pane(&self) -> &OutlinePane<I, E> {
        &self.enabled_pane
    }

    /// Sub-layout shown while disabled.
    pub fn disabled_pane(&self) -> &OutlinePane<I, E> {
        &self.disabled_pane
    }

    fn active_pane_mut(&mut self) -> &mut OutlinePane<I, E> {
        if self.enabled {
            &mut self.enabled_pane
        } else {
            &mut self.disabled_pane
        }
    }
}

impl<I: Clone, E> Clone for ToggleButton<I, E> {
    fn clone(&self) -> Self {
        Self {
            core: self.core.clone(),
            enabled_pane: self.enabled_pane.clone(),
            disabled_pane: self.disabled_pane.clone(),
            enabled: self.enabled,
        }
    }
}

impl<I: core::fmt::Debug, E> core::fmt::Debug for ToggleButton<I, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ToggleButton")
            .field("core", &self.core)
            .field("enabled", &self.enabled)
            .field("enabled_pane", &self.enabled_pane)
            .field("disabled_pane", &self.disabled_pane)
            .finish()
    }
}

impl<I: Clone + core::fmt::Debug + 'static, E: 'static> Pane<I, E> for ToggleButton<I, E> {
    fn core(&self) -> &PaneCore<E> {
        &self.core
    }

    fn core_mut(&mut self) -> &mut PaneCore<E> {
        &mut self.core
    }

    fn set_length(&mut self, length: u32) {
        self.core.set_length(length);
        self.enabled_pane.set_length(length);
        self.disabled_pane.set_length(length);
    }

    fn set_height(&mut self, height: u32) {
        self.core.set_height(height);
        self.enabled_pane.set_height(height);
        self.disabled_pane.set_height(height);
    }

    fn display(&self, surface: &mut dyn Surface<I>, area: Area) {
        if !self.core.is_visible() {
            return;
        }
        let area = self.core.enter(area);
        if self.enabled {
            self.enabled_pane.display(surface, area);
        } else {
            self.disabled_pane.display(surface, area);
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
        if area.localize(slot, surface.width()).is_none() {
            return false;
        }

        self.toggle();
        self.core.fire(event);
        // Whether the new layout has an item there does not matter; the toggle consumed it.
        let _ = self.active_pane_mut().click(surface, event, slot, area);
        surface.request_redraw();
        true
    }

    fn items(&self) -> Vec<&Item<I, E>> {
        let mut items = Pane::items(&self.enabled_pane);
        items.extend(Pane::items(&self.disabled_pane));
        items
    }

    fn panes(&self) -> Vec<&dyn Pane<I, E>> {
        alloc::vec![
            &self.enabled_pane as &dyn Pane<I, E>,
            &self.disabled_pane as &dyn Pane<I, E>,
        ]
    }

    fn copy(&self) -> Box<dyn Pane<I, E>> {
        Box::new(self.clone())
    }

    fn clear(&mut self) {}
}
