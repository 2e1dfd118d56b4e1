// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ready-made panes built out of [`OutlinePane`](crate::OutlinePane)s.

mod bar;
mod slider;
mod toggle;

pub use bar::{VariableBar, scaled_extent};
pub use slider::Slider;
pub use toggle::ToggleButton;
