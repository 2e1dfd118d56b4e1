// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Default cell payloads injected into component constructors.

/// Default payloads for the stateful components.
///
/// Components never bake concrete visuals in. Hosts build one palette with their own
/// payload type and hand it to every constructor; each component clones what it needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette<I> {
    /// Cell shown by a [`ToggleButton`](crate::ToggleButton) while enabled.
    pub enabled: I,
    /// Cell shown by a [`ToggleButton`](crate::ToggleButton) while disabled.
    pub disabled: I,
    /// Filled part of a [`VariableBar`](crate::VariableBar).
    pub fill: I,
    /// Unfilled part of a [`VariableBar`](crate::VariableBar).
    pub background: I,
}

impl<I> Palette<I> {
    /// Create a palette from its four payloads.
    pub fn new(enabled: I, disabled: I, fill: I, background: I) -> Self {
        Self {
            enabled,
            disabled,
            fill,
            background,
        }
    }
}
