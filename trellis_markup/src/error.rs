// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::num::{ParseFloatError, ParseIntError};

use trellis_pane::PaneError;

/// Reasons a markup element could not be turned into a pane.
///
/// Attribute errors name the offending attribute. No pane is constructed when loading
/// fails, not even partially.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum LoadError {
    /// A required attribute is absent.
    #[error("missing required attribute `{name}`")]
    MissingAttribute {
        /// Attribute name.
        name: &'static str,
    },
    /// An attribute that must be a non-negative integer is not one.
    #[error("attribute `{name}` is not a non-negative integer")]
    InvalidInteger {
        /// Attribute name.
        name: &'static str,
        /// Underlying parse failure.
        #[source]
        source: ParseIntError,
    },
    /// An attribute that must be a number is not one.
    #[error("attribute `{name}` is not a number")]
    InvalidFloat {
        /// Attribute name.
        name: &'static str,
        /// Underlying parse failure.
        #[source]
        source: ParseFloatError,
    },
    /// The `orientation` attribute names no known orientation.
    #[error("unknown orientation `{0}`")]
    UnknownOrientation(String),
    /// The `priority` attribute names no known priority.
    #[error("unknown priority `{0}`")]
    UnknownPriority(String),
    /// The host has no click handler under the given name.
    #[error("no click handler named `{0}`")]
    UnknownHandler(String),
    /// The element's tag is not a known component.
    #[error("unknown component `{0}`")]
    UnknownComponent(String),
    /// The attributes were well formed but the pane rejected them.
    #[error("invalid pane configuration")]
    Pane(#[from] PaneError),
}
