// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

/// A parsed markup element, as seen by the loader.
///
/// The loader never parses markup itself. Hosts implement this for whatever their parser
/// produces, or build [`Node`]s directly.
pub trait Element {
    /// Tag name, e.g. `togglebutton`.
    fn tag(&self) -> &str;

    /// Raw value of the named attribute.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Child elements in document order.
    fn children(&self) -> Vec<&dyn Element>;
}

/// An owned element tree.
///
/// ```
/// use trellis_markup::{Element, Node};
///
/// let node = Node::new("togglebutton")
///     .with_attribute("length", "2")
///     .with_attribute("height", "1");
/// assert_eq!(node.attribute("length"), Some("2"));
/// assert!(node.children().is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Node {
    tag: String,
    attributes: BTreeMap<String, String>,
    children: Vec<Node>,
}

impl Node {
    /// Create an element without attributes or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Builder form of [`set_attribute`](Self::set_attribute).
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Builder form of [`push_child`](Self::push_child).
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.push_child(child);
        self
    }

    /// Set an attribute, replacing any previous value.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Append a child element.
    pub fn push_child(&mut self, child: Self) {
        self.children.push(child);
    }
}

impl Element for Node {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    fn children(&self) -> Vec<&dyn Element> {
        self.children
            .iter()
            .map(|child| child as &dyn Element)
            .collect()
    }
}
