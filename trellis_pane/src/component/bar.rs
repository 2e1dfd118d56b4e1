// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Proportional fill bar with orientation and flip transforms.
//!
//! ## Fill sizing
//!
//! The bar owns a background pane covering its whole rectangle and a fill pane drawn on
//! top of it. Whenever the value, the size, the orientation, or the flip changes, the
//! fill pane is re-derived:
//!
//! - Horizontal: the fill is `round(length * value)` columns wide and as tall as the bar.
//!   With [`Flip::HORIZONTAL`] it is anchored to the right edge instead of the left.
//! - Vertical: the fill is `round(height * value)` rows tall and as wide as the bar.
//!   With [`Flip::VERTICAL`] it is anchored to the bottom edge instead of the top.
//!
//! A fill extent of zero hides the fill pane.
//!
//! Rounding is half away from zero, computed in `f32` so that e.g. `10 * 0.35` rounds
//! to 4.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::error::PaneError;
use crate::item::{ClickEvent, Item};
use crate::outline::OutlinePane;
use crate::palette::Palette;
use crate::pane::{Flippable, Orientable, Pane, PaneCore};
use crate::surface::{Area, Surface};
use crate::types::{Flip, Orientation};

/// `round(extent * value)`, half away from zero.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "The product lies in [0, extent] for values in [0, 1]."
)]
pub fn scaled_extent(extent: u32, value: f32) -> u32 {
    round(extent as f32 * value) as u32
}

#[cfg(feature = "std")]
fn round(value: f32) -> f32 {
    value.round()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
fn round(value: f32) -> f32 {
    libm::roundf(value)
}

/// A bar showing a value in `[0, 1]` as a proportionally sized fill over a background.
///
/// The bar is not a click target of its own: its default fill and background items
/// cancel the host event. A click inside the bar fires the bar's callback and is then
/// offered to the fill pane and, failing that, the background pane.
pub struct VariableBar<I, E> {
    core: PaneCore<E>,
    fill_pane: OutlinePane<I, E>,
    background_pane: OutlinePane<I, E>,
    value: f32,
    orientation: Orientation,
    flip: Flip,
}

impl<I: Clone, E: ClickEvent + 'static> VariableBar<I, E> {
    /// Create an empty horizontal bar using the palette's fill/background payloads.
    pub fn new(x: u32, y: u32, length: u32, height: u32, palette: &Palette<I>) -> Self {
        let mut fill_pane = OutlinePane::new(0, 0, length, height);
        fill_pane.add_item(Item::with_handler(palette.fill.clone(), E::cancel));
        fill_pane.set_repeat(true);

        let mut background_pane = OutlinePane::new(0, 0, length, height);
        background_pane.add_item(Item::with_handler(palette.background.clone(), E::cancel));
        background_pane.set_repeat(true);

        let mut bar = Self {
            core: PaneCore::new(x, y, length, height),
            fill_pane,
            background_pane,
            value: 0.0,
            orientation: Orientation::Horizontal,
            flip: Flip::empty(),
        };
        bar.resize_fill();
        bar
    }
}

impl<I, E> VariableBar<I, E> {
    /// Current value, in `[0, 1]`.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Set the value.
    ///
    /// Values outside `[0, 1]`, and NaN, are rejected and leave the bar unchanged.
    pub fn set_value(&mut self, value: f32) -> Result<(), PaneError> {
        if !(0.0..=1.0).contains(&value) {
            tracing::debug!(pane = self.core.id().get(), value, "bar.rejected");
            return Err(PaneError::ValueOutOfRange { value });
        }
        self.value = value;
        self.resize_fill();
        Ok(())
    }

    /// Value as a percentage-style fraction; alias of [`value`](Self::value).
    pub fn percentage(&self) -> f32 {
        self.value
    }

    /// Alias of [`set_value`](Self::set_value).
    pub fn set_percentage(&mut self, percentage: f32) -> Result<(), PaneError> {
        self.set_value(percentage)
    }

    /// Replace the fill item.
    pub fn set_fill_item(&mut self, item: Item<I, E>) {
        self.fill_pane.clear_items();
        self.fill_pane.add_item(item);
    }

    /// Replace the background item.
    pub fn set_background_item(&mut self, item: Item<I, E>) {
        self.background_pane.clear_items();
        self.background_pane.add_item(item);
    }

    /// The proportionally sized pane.
    pub fn fill_pane(&self) -> &OutlinePane<I, E> {
        &self.fill_pane
    }

    /// The pane covering the whole bar.
    pub fn background_pane(&self) -> &OutlinePane<I, E> {
        &self.background_pane
    }

    pub(crate) fn state(&self) -> &PaneCore<E> {
        &self.core
    }

    pub(crate) fn state_mut(&mut self) -> &mut PaneCore<E> {
        &mut self.core
    }

    /// Set a value already known to lie in `[0, 1]`.
    pub(crate) fn set_value_in_range(&mut self, value: f32) {
        debug_assert!((0.0..=1.0).contains(&value), "value must lie in [0, 1]");
        self.value = value;
        self.resize_fill();
    }

    /// Resize the bar's whole rectangle.
    pub(crate) fn resize(&mut self, length: u32, height: u32) {
        self.core.set_length(length);
        self.core.set_height(height);
        let background = self.background_pane.state_mut();
        background.set_length(length);
        background.set_height(height);
        self.resize_fill();
    }

    /// Re-derive the fill pane from the value, size, orientation, and flip.
    fn resize_fill(&mut self) {
        let length = self.core.length();
        let height = self.core.height();
        let fill = self.fill_pane.state_mut();
        let extent = match self.orientation {
            Orientation::Horizontal => {
                let fill_length = scaled_extent(length, self.value);
                fill.set_length(fill_length);
                fill.set_height(height);
                fill.set_y(0);
                fill.set_x(if self.flip.contains(Flip::HORIZONTAL) {
                    length - fill_length
                } else {
                    0
                });
                fill_length
            }
            Orientation::Vertical => {
                let fill_height = scaled_extent(height, self.value);
                fill.set_height(fill_height);
                fill.set_length(length);
                fill.set_x(0);
                fill.set_y(if self.flip.contains(Flip::VERTICAL) {
                    height - fill_height
                } else {
                    0
                });
                fill_height
            }
        };
        fill.set_visible(extent != 0);
        tracing::trace!(
            pane = self.core.id().get(),
            orientation = ?self.orientation,
            value = self.value,
            extent,
            "bar.fill"
        );
    }

    /// Shared click path: bounds check, callback, fill, then background.
    pub(crate) fn click_parts(
        &mut self,
        surface: &mut dyn Surface<I>,
        event: &mut E,
        slot: u32,
        area: Area,
    ) -> Option<bool>
    where
        I: Clone + core::fmt::Debug + 'static,
        E: 'static,
    {
        if !self.core.is_visible() {
            return None;
        }
        let area = self.core.enter(area);
        area.localize(slot, surface.width())?;
        self.core.fire(event);
        let handled = self.fill_pane.click(surface, event, slot, area)
            || self.background_pane.click(surface, event, slot, area);
        Some(handled)
    }
}

impl<I: Clone, E> Clone for VariableBar<I, E> {
    fn clone(&self) -> Self {
        Self {
            core: self.core.clone(),
            fill_pane: self.fill_pane.clone(),
            background_pane: self.background_pane.clone(),
            value: self.value,
            orientation: self.orientation,
            flip: self.flip,
        }
    }
}

impl<I: core::fmt::Debug, E> core::fmt::Debug for VariableBar<I, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VariableBar")
            .field("core", &self.core)
            .field("value", &self.value)
            .field("orientation", &self.orientation)
            .field("flip", &self.flip)
            .field("fill_pane", &self.fill_pane)
            .field("background_pane", &self.background_pane)
            .finish()
    }
}

impl<I, E> Orientable for VariableBar<I, E> {
    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        self.resize_fill();
    }
}

impl<I, E> Flippable for VariableBar<I, E> {
    fn flip(&self) -> Flip {
        self.flip
    }

    fn set_flip(&mut self, flip: Flip) {
        self.flip = flip;
        self.resize_fill();
    }
}

impl<I: Clone + core::fmt::Debug + 'static, E: 'static> Pane<I, E> for VariableBar<I, E> {
    fn core(&self) -> &PaneCore<E> {
        &self.core
    }

    fn core_mut(&mut self) -> &mut PaneCore<E> {
        &mut self.core
    }

    fn set_length(&mut self, length: u32) {
        self.resize(length, self.core.height());
    }

    fn set_height(&mut self, height: u32) {
        self.resize(self.core.length(), height);
    }

    fn display(&self, surface: &mut dyn Surface<I>, area: Area) {
        if !self.core.is_visible() {
            return;
        }
        let area = self.core.enter(area);
        self.background_pane.display(surface, area);
        self.fill_pane.display(surface, area);
    }

    fn click(
        &mut self,
        surface: &mut dyn Surface<I>,
        event: &mut E,
        slot: u32,
        area: Area,
    ) -> bool {
        self.click_parts(surface, event, slot, area).is_some()
    }

    fn items(&self) -> Vec<&Item<I, E>> {
        let mut items = Pane::items(&self.fill_pane);
        items.extend(Pane::items(&self.background_pane));
        items
    }

    fn panes(&self) -> Vec<&dyn Pane<I, E>> {
        alloc::vec![
            &self.fill_pane as &dyn Pane<I, E>,
            &self.background_pane as &dyn Pane<I, E>,
        ]
    }

    fn copy(&self) -> Box<dyn Pane<I, E>> {
        Box::new(self.clone())
    }

    fn clear(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Grid;

    #[derive(Debug, Default)]
    struct Event {
        cancelled: bool,
    }

    impl ClickEvent for Event {
        fn cancel(&mut self) {
            self.cancelled = true;
        }
    }

    fn bar(length: u32, height: u32) -> VariableBar<char, Event> {
        VariableBar::new(0, 0, length, height, &Palette::new('+', '-', '#', '.'))
    }

    #[test]
    fn rounding_half_away_from_zero() {
        assert_eq!(scaled_extent(10, 0.35), 4);
        assert_eq!(scaled_extent(3, 0.5), 2);
        assert_eq!(scaled_extent(5, 0.5), 3);
        assert_eq!(scaled_extent(4, 0.5), 2);
        assert_eq!(scaled_extent(9, 0.0), 0);
        assert_eq!(scaled_extent(9, 1.0), 9);
        assert_eq!(scaled_extent(10, 0.04), 0);
        assert_eq!(scaled_extent(10, 0.05), 1);
    }

    #[test]
    fn horizontal_fill_scenario() {
        let mut bar = bar(10, 1);
        bar.set_value(0.35).unwrap();
        assert_eq!(bar.fill_pane().length(), 4);
        assert!(bar.fill_pane().is_visible());
        assert_eq!(bar.fill_pane().height(), 1);
    }

    #[test]
    fn zero_value_hides_fill() {
        let mut bar = bar(10, 1);
        assert!(!bar.fill_pane().is_visible(), "new bars start empty");
        bar.set_value(0.5).unwrap();
        assert!(bar.fill_pane().is_visible());
        bar.set_value(0.0).unwrap();
        assert!(!bar.fill_pane().is_visible());
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let mut bar = bar(10, 1);
        bar.set_value(0.3).unwrap();
        assert_eq!(
            bar.set_value(1.5),
            Err(PaneError::ValueOutOfRange { value: 1.5 })
        );
        assert!(bar.set_value(-0.1).is_err());
        assert!(bar.set_value(f32::NAN).is_err());
        assert_eq!(bar.value(), 0.3, "rejected values leave the bar unchanged");
        assert_eq!(bar.fill_pane().length(), 3);
    }

    #[test]
    fn horizontal_flip_anchors_right() {
        let mut bar = bar(10, 2);
        bar.set_value(0.3).unwrap();
        bar.flip_horizontally(true);
        assert_eq!(bar.fill_pane().x(), 7);
        assert_eq!(bar.background_pane().x(), 0);

        let mut grid = Grid::new(10, 2);
        let area = Area::of_surface(&grid);
        bar.display(&mut grid, area);
        assert_eq!(grid.get(6, 0), Some(&'.'));
        assert_eq!(grid.get(7, 0), Some(&'#'));
        assert_eq!(grid.get(9, 1), Some(&'#'));

        bar.flip_horizontally(false);
        assert_eq!(bar.fill_pane().x(), 0);
    }

    #[test]
    fn vertical_fill_and_flip() {
        let mut bar = bar(2, 10);
        bar.set_orientation(Orientation::Vertical);
        bar.set_value(0.25).unwrap();
        assert_eq!(bar.fill_pane().height(), 3);
        assert_eq!(bar.fill_pane().length(), 2, "static axis spans the bar");
        bar.flip_vertically(true);
        assert_eq!(bar.fill_pane().y(), 7);
        bar.flip_horizontally(true);
        assert_eq!(bar.fill_pane().x(), 0, "horizontal flip is inert when vertical");
    }

    #[test]
    fn orientation_change_resets_static_axis() {
        let mut bar = bar(8, 4);
        bar.set_value(0.5).unwrap();
        assert_eq!(bar.fill_pane().length(), 4);
        assert_eq!(bar.fill_pane().height(), 4);

        bar.set_orientation(Orientation::Vertical);
        assert_eq!(bar.fill_pane().length(), 8);
        assert_eq!(bar.fill_pane().height(), 2);

        bar.set_orientation(Orientation::Horizontal);
        assert_eq!(bar.fill_pane().length(), 4);
        assert_eq!(bar.fill_pane().height(), 4);
    }

    #[test]
    fn resizing_rescales_fill() {
        let mut bar = bar(10, 1);
        bar.set_value(0.5).unwrap();
        bar.flip_horizontally(true);
        bar.set_length(4);
        assert_eq!(bar.fill_pane().length(), 2);
        assert_eq!(bar.fill_pane().x(), 2);
        assert_eq!(bar.background_pane().length(), 4);
        bar.set_height(3);
        assert_eq!(bar.fill_pane().height(), 3);
        assert_eq!(bar.background_pane().height(), 3);
    }

    #[test]
    fn resizing_through_trait_object_rescales_fill() {
        let mut bar = bar(10, 1);
        bar.set_value(0.5).unwrap();
        let pane: &mut dyn Pane<char, Event> = &mut bar;
        pane.set_length(4);
        assert_eq!(pane.length(), 4);
        assert_eq!(bar.fill_pane().length(), 2);
        assert_eq!(bar.background_pane().length(), 4);
    }

    #[test]
    fn clicks_are_swallowed() {
        let mut bar = bar(4, 1);
        bar.set_value(0.5).unwrap();
        let mut grid = Grid::new(6, 1);
        let area = Area::of_surface(&grid);
        let mut event = Event::default();
        assert!(bar.click(&mut grid, &mut event, 3, area));
        assert!(event.cancelled, "background cell cancels the event");

        let mut event = Event::default();
        assert!(!bar.click(&mut grid, &mut event, 5, area));
        assert!(!event.cancelled);
    }

    #[test]
    fn copy_is_independent() {
        let mut bar = bar(10, 1);
        bar.set_value(0.5).unwrap();
        let copy = bar.clone();
        bar.set_value(1.0).unwrap();
        assert_eq!(copy.value(), 0.5);
        assert_eq!(copy.fill_pane().length(), 5);
        assert_eq!(copy.id(), bar.id());
        assert_eq!(Pane::items(&copy).len(), 2);
    }
}
