// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cell items: the smallest placeable and clickable unit.

use alloc::rc::Rc;

use crate::types::ItemId;

/// Shared click callback.
///
/// Handlers are reference counted: copying an item or a pane shares the handler
/// instead of duplicating it.
pub type ClickHandler<E> = Rc<dyn Fn(&mut E)>;

/// Host click event as seen by the core.
///
/// The core forwards events untouched. The only thing it ever asks of one is to
/// suppress the host's default behavior, which bar cells do for every click.
pub trait ClickEvent {
    /// Ask the host to suppress its default handling of this click.
    fn cancel(&mut self);
}

impl ClickEvent for () {
    fn cancel(&mut self) {}
}

/// A single placeable cell: a rendering payload plus an optional click handler.
pub struct Item<I, E> {
    id: ItemId,
    payload: I,
    handler: Option<ClickHandler<E>>,
}

impl<I, E> Item<I, E> {
    /// Create an item without a click handler.
    pub fn new(payload: I) -> Self {
        Self {
            id: ItemId::next(),
            payload,
            handler: None,
        }
    }

    /// Create an item that runs `handler` when clicked.
    pub fn with_handler(payload: I, handler: impl Fn(&mut E) + 'static) -> Self {
        Self {
            id: ItemId::next(),
            payload,
            handler: Some(Rc::new(handler)),
        }
    }

    /// Identity token, preserved by copies.
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Rendering payload placed onto the surface.
    pub fn payload(&self) -> &I {
        &self.payload
    }

    /// Replace the click handler.
    pub fn set_handler(&mut self, handler: Option<ClickHandler<E>>) {
        self.handler = handler;
    }

    /// Returns true if a click handler is registered.
    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    /// Run the click handler, if any.
    pub fn click(&self, event: &mut E) {
        if let Some(handler) = &self.handler {
            handler(event);
        }
    }
}

impl<I: Clone, E> Item<I, E> {
    /// Deep copy: duplicated payload, same identity, same handler reference.
    pub fn copy(&self) -> Self {
        self.clone()
    }
}

impl<I: Clone, E> Clone for Item<I, E> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            payload: self.payload.clone(),
            handler: self.handler.clone(),
        }
    }
}

impl<I: core::fmt::Debug, E> core::fmt::Debug for Item<I, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Item")
            .field("id", &self.id)
            .field("payload", &self.payload)
            .field("handler", &self.handler.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    #[test]
    fn copy_shares_handler_and_identity() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let item: Item<char, ()> = Item::with_handler('a', move |_| counter.set(counter.get() + 1));
        let copy = item.copy();
        assert_eq!(copy.id(), item.id());
        assert_eq!(copy.payload(), &'a');

        item.click(&mut ());
        copy.click(&mut ());
        assert_eq!(hits.get(), 2, "both copies fire the same handler");
    }

    #[test]
    fn item_without_handler_is_inert() {
        let item: Item<char, ()> = Item::new('b');
        assert!(!item.has_handler());
        item.click(&mut ());
        assert_ne!(Item::<char, ()>::new('b').id(), item.id());
    }
}
