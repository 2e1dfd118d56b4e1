// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use trellis_pane::{ClickHandler, Item, Palette};

use crate::element::Element;
use crate::error::LoadError;

/// What the host provides while a markup tree is loaded.
pub trait LoadContext<I, E> {
    /// Default payloads for components built by the loader.
    fn palette(&self) -> &Palette<I>;

    /// Click handler registered under `name`, referenced by `onClick` attributes.
    fn handler(&self, name: &str) -> Option<ClickHandler<E>>;

    /// Build a cell item from a child element of an `outlinepane`.
    fn load_item(&self, element: &dyn Element) -> Result<Item<I, E>, LoadError>;
}
