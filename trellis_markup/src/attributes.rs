// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed attribute extraction.

use alloc::string::ToString;

use trellis_pane::{Orientation, Priority};

use crate::element::Element;
use crate::error::LoadError;

pub(crate) fn required_u32(element: &dyn Element, name: &'static str) -> Result<u32, LoadError> {
    optional_u32(element, name)?.ok_or(LoadError::MissingAttribute { name })
}

pub(crate) fn optional_u32(
    element: &dyn Element,
    name: &'static str,
) -> Result<Option<u32>, LoadError> {
    element
        .attribute(name)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|source| LoadError::InvalidInteger { name, source })
        })
        .transpose()
}

pub(crate) fn optional_f32(
    element: &dyn Element,
    name: &'static str,
) -> Result<Option<f32>, LoadError> {
    element
        .attribute(name)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|source| LoadError::InvalidFloat { name, source })
        })
        .transpose()
}

/// `Some(true)` only for `true` in any ASCII case; every other spelling reads as `false`.
pub(crate) fn optional_bool(element: &dyn Element, name: &'static str) -> Option<bool> {
    element
        .attribute(name)
        .map(|raw| raw.trim().eq_ignore_ascii_case("true"))
}

pub(crate) fn orientation(element: &dyn Element) -> Result<Option<Orientation>, LoadError> {
    let Some(raw) = element.attribute("orientation") else {
        return Ok(None);
    };
    let value = raw.trim();
    if value.eq_ignore_ascii_case("horizontal") {
        Ok(Some(Orientation::Horizontal))
    } else if value.eq_ignore_ascii_case("vertical") {
        Ok(Some(Orientation::Vertical))
    } else {
        Err(LoadError::UnknownOrientation(raw.to_string()))
    }
}

const PRIORITIES: [(&str, Priority); 6] = [
    ("lowest", Priority::Lowest),
    ("low", Priority::Low),
    ("normal", Priority::Normal),
    ("high", Priority::High),
    ("highest", Priority::Highest),
    ("monitor", Priority::Monitor),
];

pub(crate) fn priority(element: &dyn Element) -> Result<Option<Priority>, LoadError> {
    let Some(raw) = element.attribute("priority") else {
        return Ok(None);
    };
    let value = raw.trim();
    PRIORITIES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(value))
        .map(|&(_, priority)| Some(priority))
        .ok_or_else(|| LoadError::UnknownPriority(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Node;

    #[test]
    fn integers() {
        let node = Node::new("pane")
            .with_attribute("length", " 9 ")
            .with_attribute("height", "-1");
        assert_eq!(required_u32(&node, "length"), Ok(9));
        assert!(matches!(
            required_u32(&node, "height"),
            Err(LoadError::InvalidInteger { name: "height", .. })
        ));
        assert_eq!(
            required_u32(&node, "x"),
            Err(LoadError::MissingAttribute { name: "x" })
        );
        assert_eq!(optional_u32(&node, "x"), Ok(None));
    }

    #[test]
    fn booleans_default_to_false() {
        let node = Node::new("pane")
            .with_attribute("a", "TRUE")
            .with_attribute("b", "false")
            .with_attribute("c", "yes")
            .with_attribute("d", "");
        assert_eq!(optional_bool(&node, "a"), Some(true));
        assert_eq!(optional_bool(&node, "b"), Some(false));
        assert_eq!(optional_bool(&node, "c"), Some(false));
        assert_eq!(optional_bool(&node, "d"), Some(false));
        assert_eq!(optional_bool(&node, "e"), None);
    }

    #[test]
    fn floats() {
        let node = Node::new("bar")
            .with_attribute("value", "0.35")
            .with_attribute("percentage", "half");
        assert_eq!(optional_f32(&node, "value"), Ok(Some(0.35)));
        assert!(matches!(
            optional_f32(&node, "percentage"),
            Err(LoadError::InvalidFloat {
                name: "percentage",
                ..
            })
        ));
    }

    #[test]
    fn enumerations() {
        let node = Node::new("bar")
            .with_attribute("orientation", "Vertical")
            .with_attribute("priority", "HIGHEST");
        assert_eq!(orientation(&node), Ok(Some(Orientation::Vertical)));
        assert_eq!(priority(&node), Ok(Some(Priority::Highest)));

        let node = Node::new("bar")
            .with_attribute("orientation", "diagonal")
            .with_attribute("priority", "urgent");
        assert_eq!(
            orientation(&node),
            Err(LoadError::UnknownOrientation("diagonal".to_string()))
        );
        assert_eq!(
            priority(&node),
            Err(LoadError::UnknownPriority("urgent".to_string()))
        );
    }
}
