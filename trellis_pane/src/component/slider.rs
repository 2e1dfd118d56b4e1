// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A variable bar whose value follows the clicked cell.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::component::bar::VariableBar;
use crate::error::PaneError;
use crate::item::{ClickEvent, Item};
use crate::palette::Palette;
use crate::pane::{Flippable, Orientable, Pane, PaneCore};
use crate::surface::{Area, Surface};
use crate::types::{Flip, Orientation};

/// A [`VariableBar`] the user drags, or rather clicks, to a new value.
///
/// Clicking cell `x` of a horizontal slider `length` cells long sets the value to
/// `(x + 1) / length`, so the fill reaches up to and including the clicked cell. When the
/// slider is flipped the fill grows from the other edge and the value becomes
/// `(length - x) / length`. Vertical sliders do the same along rows.
///
/// `length` is always the slider's own length, even when a parent clips part of it away,
/// so a clicked cell maps to the same value the fill would reach at that cell.
pub struct Slider<I, E> {
    bar: VariableBar<I, E>,
}

impl<I: Clone, E: ClickEvent + 'static> Slider<I, E> {
    /// Create an empty horizontal slider.
    pub fn new(x: u32, y: u32, length: u32, height: u32, palette: &Palette<I>) -> Self {
        Self {
            bar: VariableBar::new(x, y, length, height, palette),
        }
    }
}

impl<I, E> Slider<I, E> {
    /// Current value.
    pub fn value(&self) -> f32 {
        self.bar.value()
    }

    /// Set the value; see [`VariableBar::set_value`].
    pub fn set_value(&mut self, value: f32) -> Result<(), PaneError> {
        self.bar.set_value(value)
    }

    /// The underlying bar.
    pub fn bar(&self) -> &VariableBar<I, E> {
        &self.bar
    }

    /// The underlying bar, mutably.
    pub fn bar_mut(&mut self) -> &mut VariableBar<I, E> {
        &mut self.bar
    }

    #[allow(
        clippy::cast_precision_loss,
        reason = "Grid extents are far below f32's exact integer range."
    )]
    fn value_at(&self, x: u32, y: u32) -> f32 {
        let core = self.bar.state();
        let (position, extent, flipped) = match self.bar.orientation() {
            Orientation::Horizontal => (x, core.length(), self.bar.is_flipped_horizontally()),
            Orientation::Vertical => (y, core.height(), self.bar.is_flipped_vertically()),
        };
        let cells = if flipped { extent - position } else { position + 1 };
        cells as f32 / extent as f32
    }
}

impl<I: Clone, E> Clone for Slider<I, E> {
    fn clone(&self) -> Self {
        Self {
            bar: self.bar.clone(),
        }
    }
}

impl<I: core::fmt::Debug, E> core::fmt::Debug for Slider<I, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Slider").field("bar", &self.bar).finish()
    }
}

impl<I, E> Orientable for Slider<I, E> {
    fn orientation(&self) -> Orientation {
        self.bar.orientation()
    }

    fn set_orientation(&mut self, orientation: Orientation) {
        self.bar.set_orientation(orientation);
    }
}

impl<I, E> Flippable for Slider<I, E> {
    fn flip(&self) -> Flip {
        self.bar.flip()
    }

    fn set_flip(&mut self, flip: Flip) {
        self.bar.set_flip(flip);
    }
}

impl<I: Clone + core::fmt::Debug + 'static, E: 'static> Pane<I, E> for Slider<I, E> {
    fn core(&self) -> &PaneCore<E> {
        self.bar.state()
    }

    fn core_mut(&mut self) -> &mut PaneCore<E> {
        self.bar.state_mut()
    }

    fn set_length(&mut self, length: u32) {
        self.bar.set_length(length);
    }

    fn set_height(&mut self, height: u32) {
        self.bar.set_height(height);
    }

    fn display(&self, surface: &mut dyn Surface<I>, area: Area) {
        self.bar.display(surface, area);
    }

    fn click(
        &mut self,
        surface: &mut dyn Surface<I>,
        event: &mut E,
        slot: u32,
        area: Area,
    ) -> bool {
        if !self.bar.is_visible() {
            return false;
        }
        let inner = self.bar.state().enter(area);
        let Some((x, y)) = inner.localize(slot, surface.width()) else {
            return false;
        };

        let value = self.value_at(x, y);
        self.bar.set_value_in_range(value);
        tracing::debug!(pane = self.bar.id().get(), value, "slider.value");

        let handled = self
            .bar
            .click_parts(surface, event, slot, area)
            .unwrap_or(false);
        surface.request_redraw();
        handled
    }

    fn items(&self) -> Vec<&Item<I, E>> {
        self.bar.items()
    }

    fn panes(&self) -> Vec<&dyn Pane<I, E>> {
        self.bar.panes()
    }

    fn copy(&self) -> Box<dyn Pane<I, E>> {
        Box::new(self.clone())
    }

    fn clear(&mut self) {}
}
