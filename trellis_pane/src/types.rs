// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types shared by every pane: identity tokens, flags, priorities, and orientation.

use core::sync::atomic::{AtomicU64, Ordering};

static NEXT_TOKEN: AtomicU64 = AtomicU64::new(1);

fn next_token() -> u64 {
    NEXT_TOKEN.fetch_add(1, Ordering::Relaxed)
}

/// Identity token of a pane.
///
/// A fresh token is assigned when a pane is constructed and it never changes afterwards.
/// Copies made with [`Pane::copy`](crate::Pane::copy) carry the same token, so a copy can
/// stand in for the original when a composite looks panes up or removes them by identity.
///
/// Tokens are process-unique: two independently constructed panes never share one.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct PaneId(u64);

impl PaneId {
    pub(crate) fn next() -> Self {
        Self(next_token())
    }

    /// Raw value of the token, for hosts that key their own tables by it.
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Identity token of a cell item. Same semantics as [`PaneId`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ItemId(u64);

impl ItemId {
    pub(crate) fn next() -> Self {
        Self(next_token())
    }

    /// Raw value of the token.
    pub const fn get(self) -> u64 {
        self.0
    }
}

bitflags::bitflags! {
    /// Pane flags controlling rendering and click routing.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PaneFlags: u8 {
        /// Pane is visible. Invisible panes neither render nor receive clicks.
        const VISIBLE  = 0b0000_0001;
        /// Pane takes part in click routing from its parent container.
        const PICKABLE = 0b0000_0010;
    }
}

impl Default for PaneFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::PICKABLE
    }
}

bitflags::bitflags! {
    /// Mirroring applied by [`Flippable`](crate::Flippable) panes.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Flip: u8 {
        /// Mirror along the horizontal axis (right to left).
        const HORIZONTAL = 0b0000_0001;
        /// Mirror along the vertical axis (bottom to top).
        const VERTICAL   = 0b0000_0010;
    }
}

/// Ordering key among sibling panes sharing a surface region.
///
/// Higher priorities draw later, so they end up on top, and are offered clicks first.
/// Equal priorities keep insertion order.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Priority {
    /// Drawn first.
    Lowest,
    /// Below normal.
    Low,
    /// The default.
    #[default]
    Normal,
    /// Above normal.
    High,
    /// Above everything an application normally places.
    Highest,
    /// Drawn last; intended for overlays that observe rather than own a region.
    Monitor,
}

/// Axis along which a length/height-dependent pane lays out or grows.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// Left to right.
    #[default]
    Horizontal,
    /// Top to bottom.
    Vertical,
}
