// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::string::ToString;
use core::fmt::Debug;

use trellis_pane::{
    ClickEvent, Flippable, LayeredPane, Orientable, OutlinePane, Pane, Slider, ToggleButton,
    VariableBar,
};

use crate::attributes;
use crate::context::LoadContext;
use crate::element::Element;
use crate::error::LoadError;

/// Build a pane tree from `element`.
///
/// The tag selects the component, case-insensitively:
///
/// | Tag | Component | Children |
/// |---|---|---|
/// | `outlinepane` | [`OutlinePane`] | items, via [`LoadContext::load_item`] |
/// | `togglebutton` | [`ToggleButton`] | ignored |
/// | `percentagebar`, `variablebar` | [`VariableBar`] | ignored |
/// | `slider` | [`Slider`] | ignored |
/// | `layeredpane` | [`LayeredPane`] | panes, loaded recursively |
///
/// Every component requires `length` and `height` and accepts `x`, `y`, `priority`,
/// `visible` and `onClick`. Outline panes also take `repeat`; toggles take `enabled`;
/// outline panes, bars and sliders take `orientation`, `flipHorizontal` and
/// `flipVertical`; bars and sliders take `value` (or its alias `percentage`).
pub fn load<I, E, C>(context: &C, element: &dyn Element) -> Result<Box<dyn Pane<I, E>>, LoadError>
where
    I: Clone + Debug + 'static,
    E: ClickEvent + 'static,
    C: LoadContext<I, E> + ?Sized,
{
    let kind = Kind::from_tag(element.tag())
        .ok_or_else(|| LoadError::UnknownComponent(element.tag().to_string()))?;
    let bounds = Bounds::read(element)?;
    let pane: Box<dyn Pane<I, E>> = match kind {
        Kind::Outline => {
            let mut pane: OutlinePane<I, E> =
                OutlinePane::new(bounds.x, bounds.y, bounds.length, bounds.height);
            configure(&mut pane, context, element)?;
            orient(&mut pane, element)?;
            if let Some(repeat) = attributes::optional_bool(element, "repeat") {
                pane.set_repeat(repeat);
            }
            for child in element.children() {
                pane.add_item(context.load_item(child)?);
            }
            Box::new(pane)
        }
        Kind::Toggle => {
            let mut button: ToggleButton<I, E> = ToggleButton::new(
                bounds.x,
                bounds.y,
                bounds.length,
                bounds.height,
                context.palette(),
            );
            configure(&mut button, context, element)?;
            if attributes::optional_bool(element, "enabled") == Some(true) {
                button.toggle();
            }
            Box::new(button)
        }
        Kind::Bar => {
            let mut bar: VariableBar<I, E> = VariableBar::new(
                bounds.x,
                bounds.y,
                bounds.length,
                bounds.height,
                context.palette(),
            );
            configure(&mut bar, context, element)?;
            orient(&mut bar, element)?;
            if let Some(value) = value(element)? {
                bar.set_value(value)?;
            }
            Box::new(bar)
        }
        Kind::Slider => {
            let mut slider: Slider<I, E> =
                Slider::new(bounds.x, bounds.y, bounds.length, bounds.height, context.palette());
            configure(&mut slider, context, element)?;
            orient(&mut slider, element)?;
            if let Some(value) = value(element)? {
                slider.set_value(value)?;
            }
            Box::new(slider)
        }
        Kind::Layered => {
            let mut layered: LayeredPane<I, E> =
                LayeredPane::new(bounds.x, bounds.y, bounds.length, bounds.height);
            configure(&mut layered, context, element)?;
            for child in element.children() {
                layered.add_boxed(load(context, child)?);
            }
            Box::new(layered)
        }
    };

    tracing::debug!(
        ?kind,
        pane = pane.id().get(),
        length = bounds.length,
        height = bounds.height,
        "markup.load"
    );
    Ok(pane)
}

#[derive(Clone, Copy, Debug)]
enum Kind {
    Outline,
    Toggle,
    Bar,
    Slider,
    Layered,
}

impl Kind {
    fn from_tag(tag: &str) -> Option<Self> {
        const TAGS: [(&str, Kind); 6] = [
            ("outlinepane", Kind::Outline),
            ("togglebutton", Kind::Toggle),
            ("percentagebar", Kind::Bar),
            ("variablebar", Kind::Bar),
            ("slider", Kind::Slider),
            ("layeredpane", Kind::Layered),
        ];
        TAGS.iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(tag))
            .map(|&(_, kind)| kind)
    }
}

#[derive(Clone, Copy, Debug)]
struct Bounds {
    x: u32,
    y: u32,
    length: u32,
    height: u32,
}

impl Bounds {
    fn read(element: &dyn Element) -> Result<Self, LoadError> {
        Ok(Self {
            x: attributes::optional_u32(element, "x")?.unwrap_or(0),
            y: attributes::optional_u32(element, "y")?.unwrap_or(0),
            length: attributes::required_u32(element, "length")?,
            height: attributes::required_u32(element, "height")?,
        })
    }
}

/// Attributes every pane understands.
fn configure<I, E, C, P>(pane: &mut P, context: &C, element: &dyn Element) -> Result<(), LoadError>
where
    C: LoadContext<I, E> + ?Sized,
    P: Pane<I, E>,
{
    if let Some(priority) = attributes::priority(element)? {
        pane.set_priority(priority);
    }
    if let Some(visible) = attributes::optional_bool(element, "visible") {
        pane.set_visible(visible);
    }
    if let Some(name) = element.attribute("onClick") {
        let handler = context
            .handler(name)
            .ok_or_else(|| LoadError::UnknownHandler(name.to_string()))?;
        pane.set_on_click(Some(handler));
    }
    Ok(())
}

fn orient<P: Orientable + Flippable>(pane: &mut P, element: &dyn Element) -> Result<(), LoadError> {
    if let Some(orientation) = attributes::orientation(element)? {
        pane.set_orientation(orientation);
    }
    if let Some(flipped) = attributes::optional_bool(element, "flipHorizontal") {
        pane.flip_horizontally(flipped);
    }
    if let Some(flipped) = attributes::optional_bool(element, "flipVertical") {
        pane.flip_vertically(flipped);
    }
    Ok(())
}

fn value(element: &dyn Element) -> Result<Option<f32>, LoadError> {
    match attributes::optional_f32(element, "value")? {
        Some(value) => Ok(Some(value)),
        None => attributes::optional_f32(element, "percentage"),
    }
}
