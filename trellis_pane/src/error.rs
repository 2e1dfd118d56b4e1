// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors raised by pane setters.

/// A pane was asked to take a configuration it cannot represent.
///
/// Values are never clamped or defaulted; the setter leaves the pane untouched and
/// reports the rejected input instead.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum PaneError {
    /// A bar value fell outside `[0, 1]` (or was NaN).
    #[error("value {value} is out of range [0, 1]")]
    ValueOutOfRange {
        /// The rejected value.
        value: f32,
    },
}
