// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pane contract shared by every pane kind, plus the orientation and flip capabilities.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::any::Any;

use crate::item::{ClickHandler, Item};
use crate::surface::{Area, Surface};
use crate::types::{Flip, Orientation, PaneFlags, PaneId, Priority};

/// State common to every pane: identity, placement, size, priority, flags, and callback.
pub struct PaneCore<E> {
    id: PaneId,
    x: u32,
    y: u32,
    length: u32,
    height: u32,
    priority: Priority,
    flags: PaneFlags,
    on_click: Option<ClickHandler<E>>,
}

impl<E> PaneCore<E> {
    /// Create a core with a fresh identity, `Normal` priority, and default flags.
    pub fn new(x: u32, y: u32, length: u32, height: u32) -> Self {
        Self {
            id: PaneId::next(),
            x,
            y,
            length,
            height,
            priority: Priority::default(),
            flags: PaneFlags::default(),
            on_click: None,
        }
    }

    /// Identity token.
    pub fn id(&self) -> PaneId {
        self.id
    }

    /// Horizontal offset within the parent.
    pub fn x(&self) -> u32 {
        self.x
    }

    /// Vertical offset within the parent.
    pub fn y(&self) -> u32 {
        self.y
    }

    /// Number of columns.
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Priority among siblings.
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Current flags.
    pub fn flags(&self) -> PaneFlags {
        self.flags
    }

    /// Returns true if [`PaneFlags::VISIBLE`] is set.
    pub fn is_visible(&self) -> bool {
        self.flags.contains(PaneFlags::VISIBLE)
    }

    /// Set the horizontal offset.
    pub fn set_x(&mut self, x: u32) {
        self.x = x;
    }

    /// Set the vertical offset.
    pub fn set_y(&mut self, y: u32) {
        self.y = y;
    }

    /// Set the number of columns. Outside the crate, resize through [`Pane::set_length`].
    pub(crate) fn set_length(&mut self, length: u32) {
        self.length = length;
    }

    /// Set the number of rows. Crate-private like [`PaneCore::set_length`].
    pub(crate) fn set_height(&mut self, height: u32) {
        self.height = height;
    }

    /// Set the priority.
    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    /// Replace all flags.
    pub fn set_flags(&mut self, flags: PaneFlags) {
        self.flags = flags;
    }

    /// Set or clear [`PaneFlags::VISIBLE`].
    pub fn set_visible(&mut self, visible: bool) {
        self.flags.set(PaneFlags::VISIBLE, visible);
    }

    /// Replace the pane's own click callback.
    pub fn set_on_click(&mut self, handler: Option<ClickHandler<E>>) {
        self.on_click = handler;
    }

    /// Run the pane's own click callback, if any.
    pub fn fire(&self, event: &mut E) {
        if let Some(handler) = &self.on_click {
            handler(event);
        }
    }

    /// Narrow a parent area to this pane's clipped rectangle.
    pub fn enter(&self, parent: Area) -> Area {
        parent.enter(self.x, self.y, self.length, self.height)
    }
}

impl<E> Clone for PaneCore<E> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            x: self.x,
            y: self.y,
            length: self.length,
            height: self.height,
            priority: self.priority,
            flags: self.flags,
            on_click: self.on_click.clone(),
        }
    }
}

impl<E> core::fmt::Debug for PaneCore<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PaneCore")
            .field("id", &self.id)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("length", &self.length)
            .field("height", &self.height)
            .field("priority", &self.priority)
            .field("flags", &self.flags)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

/// A positioned, prioritized rectangle that renders cell items and absorbs clicks.
///
/// ## Traversal
///
/// Both operations receive the parent's [`Area`]: its accumulated origin and the
/// maximum extents this pane may use. Implementations narrow it with
/// [`PaneCore::enter`], giving `origin = parent origin + (x, y)` and
/// `extent = min(parent extent, own extent)`, and then render or dispatch within it.
///
/// An invisible pane renders nothing and never handles a click.
///
/// ## Extension
///
/// The trait is open: downstream crates add pane kinds by implementing it. Only
/// [`core`](Self::core), [`core_mut`](Self::core_mut), and the traversal methods are
/// required. Kinds whose children depend on their size override the setters.
pub trait Pane<I, E>: Any + core::fmt::Debug {
    /// Shared pane state.
    fn core(&self) -> &PaneCore<E>;

    /// Shared pane state, mutably.
    ///
    /// Size is not writable through the core; use [`Pane::set_length`] and
    /// [`Pane::set_height`] so composites can rescale their children.
    ///
    /// ```compile_fail
    /// use trellis_pane::{Palette, Pane, VariableBar};
    ///
    /// let palette = Palette::new('+', '-', '#', '.');
    /// let mut bar: VariableBar<char, ()> = VariableBar::new(0, 0, 10, 1, &palette);
    /// bar.core_mut().set_length(4);
    /// ```
    fn core_mut(&mut self) -> &mut PaneCore<E>;

    /// Render into `surface` within `area`.
    fn display(&self, surface: &mut dyn Surface<I>, area: Area);

    /// Route a click at absolute `slot`.
    ///
    /// Returns `false`, without side effects, when the slot lies outside this pane's
    /// clipped rectangle. Returns `true` when the click was consumed.
    fn click(&mut self, surface: &mut dyn Surface<I>, event: &mut E, slot: u32, area: Area)
    -> bool;

    /// Items owned by this pane and its sub-panes, in traversal order.
    fn items(&self) -> Vec<&Item<I, E>>;

    /// Direct sub-panes, in traversal order.
    fn panes(&self) -> Vec<&dyn Pane<I, E>>;

    /// Structurally independent deep copy sharing identity and click handlers.
    fn copy(&self) -> Box<dyn Pane<I, E>>;

    /// Remove the pane's content. Composites with fixed structure ignore this.
    fn clear(&mut self);

    /// Identity token.
    fn id(&self) -> PaneId {
        self.core().id()
    }

    /// Horizontal offset within the parent.
    fn x(&self) -> u32 {
        self.core().x()
    }

    /// Vertical offset within the parent.
    fn y(&self) -> u32 {
        self.core().y()
    }

    /// Number of columns.
    fn length(&self) -> u32 {
        self.core().length()
    }

    /// Number of rows.
    fn height(&self) -> u32 {
        self.core().height()
    }

    /// Priority among siblings.
    fn priority(&self) -> Priority {
        self.core().priority()
    }

    /// Current flags.
    fn flags(&self) -> PaneFlags {
        self.core().flags()
    }

    /// Returns true if the pane renders and takes clicks.
    fn is_visible(&self) -> bool {
        self.core().is_visible()
    }

    /// Set the horizontal offset.
    fn set_x(&mut self, x: u32) {
        self.core_mut().set_x(x);
    }

    /// Set the vertical offset.
    fn set_y(&mut self, y: u32) {
        self.core_mut().set_y(y);
    }

    /// Set the number of columns.
    fn set_length(&mut self, length: u32) {
        self.core_mut().set_length(length);
    }

    /// Set the number of rows.
    fn set_height(&mut self, height: u32) {
        self.core_mut().set_height(height);
    }

    /// Set the priority.
    fn set_priority(&mut self, priority: Priority) {
        self.core_mut().set_priority(priority);
    }

    /// Replace all flags.
    fn set_flags(&mut self, flags: PaneFlags) {
        self.core_mut().set_flags(flags);
    }

    /// Show or hide the pane.
    fn set_visible(&mut self, visible: bool) {
        self.core_mut().set_visible(visible);
    }

    /// Set the pane's own click callback.
    fn set_on_click(&mut self, handler: Option<ClickHandler<E>>) {
        self.core_mut().set_on_click(handler);
    }

    /// Convenience wrapper around [`set_on_click`](Self::set_on_click).
    fn on_click(&mut self, handler: impl Fn(&mut E) + 'static)
    where
        Self: Sized,
    {
        self.set_on_click(Some(Rc::new(handler)));
    }
}

/// Panes whose layout or growth follows an axis.
pub trait Orientable {
    /// Current orientation.
    fn orientation(&self) -> Orientation;
    /// Change the orientation and re-derive anything that depends on it.
    fn set_orientation(&mut self, orientation: Orientation);
}

/// Panes that can be mirrored along either axis.
pub trait Flippable {
    /// Current mirroring.
    fn flip(&self) -> Flip;
    /// Replace the mirroring and re-derive anything that depends on it.
    fn set_flip(&mut self, flip: Flip);

    /// Mirror (or stop mirroring) along the horizontal axis.
    fn flip_horizontally(&mut self, flipped: bool) {
        let mut flip = self.flip();
        flip.set(Flip::HORIZONTAL, flipped);
        self.set_flip(flip);
    }

    /// Mirror (or stop mirroring) along the vertical axis.
    fn flip_vertically(&mut self, flipped: bool) {
        let mut flip = self.flip();
        flip.set(Flip::VERTICAL, flipped);
        self.set_flip(flip);
    }

    /// Returns true if mirrored horizontally.
    fn is_flipped_horizontally(&self) -> bool {
        self.flip().contains(Flip::HORIZONTAL)
    }

    /// Returns true if mirrored vertically.
    fn is_flipped_vertically(&self) -> bool {
        self.flip().contains(Flip::VERTICAL)
    }
}
