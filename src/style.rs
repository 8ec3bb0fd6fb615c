//! Layered style resolution for the popover box and overlay.
//!
//! Layers apply in order: built-in defaults, then the layout computed for
//! this render, then caller overrides. The result is a plain value that the
//! tooltip turns into gpui styling.

use gpui::{prelude::*, px, Div, Hsla};

use crate::config::TooltipConfig;
use crate::geometry::{Coordinate, Frame, ScreenBounds};
use crate::placement::{pointer_placement, tooltip_coordinate, PointerPlacement};
use crate::ui::theme::TooltipColors;

const DEFAULT_CORNER_RADIUS: f32 = 10.0;
const DEFAULT_PADDING: f32 = 10.0;

/// Caller overrides for the popover box. Unset fields keep the lower layer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StyleOverrides {
    pub background: Option<Hsla>,
    pub text_color: Option<Hsla>,
    pub border_color: Option<Hsla>,
    pub corner_radius: Option<f32>,
    pub padding: Option<f32>,
}

impl StyleOverrides {
    pub fn background(mut self, color: impl Into<Hsla>) -> Self {
        self.background = Some(color.into());
        self
    }

    pub fn text_color(mut self, color: impl Into<Hsla>) -> Self {
        self.text_color = Some(color.into());
        self
    }

    pub fn border_color(mut self, color: impl Into<Hsla>) -> Self {
        self.border_color = Some(color.into());
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = Some(padding);
        self
    }
}

/// Fully resolved popover box style for one render
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopoverStyle {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub background: Hsla,
    pub text_color: Hsla,
    pub border_color: Option<Hsla>,
    pub corner_radius: f32,
    pub padding: f32,
}

impl PopoverStyle {
    /// Applies the style to an absolutely positioned, centered flex box
    pub fn apply(&self, el: Div) -> Div {
        el.absolute()
            .left(px(self.left))
            .top(px(self.top))
            .w(px(self.width))
            .h(px(self.height))
            .flex()
            .items_center()
            .justify_center()
            .bg(self.background)
            .text_color(self.text_color)
            .rounded(px(self.corner_radius))
            .p(px(self.padding))
            .when_some(self.border_color, |el, color| {
                el.border_1().border_color(color)
            })
    }
}

/// Resolves the popover style placed at `origin`
pub fn resolve_popover_style(origin: Coordinate, config: &TooltipConfig) -> PopoverStyle {
    // Defaults
    let mut style = PopoverStyle {
        left: 0.0,
        top: 0.0,
        width: 0.0,
        height: 0.0,
        background: TooltipColors::popover_bg(),
        text_color: TooltipColors::popover_text(),
        border_color: None,
        corner_radius: DEFAULT_CORNER_RADIUS,
        padding: DEFAULT_PADDING,
    };

    // Computed layout
    style.left = origin.x;
    style.top = origin.y;
    style.width = config.width;
    style.height = config.height;
    style.background = config.background_color;

    // Caller overrides
    let overrides = &config.container_style;
    if let Some(background) = overrides.background {
        style.background = background;
    }
    if let Some(text_color) = overrides.text_color {
        style.text_color = text_color;
    }
    if overrides.border_color.is_some() {
        style.border_color = overrides.border_color;
    }
    if let Some(radius) = overrides.corner_radius {
        style.corner_radius = radius;
    }
    if let Some(padding) = overrides.padding {
        style.padding = padding;
    }

    style
}

/// Resolved style of the full-window dismiss surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    pub tint: Hsla,
    pub highlight: Hsla,
}

pub fn resolve_overlay_style(config: &TooltipConfig) -> OverlayStyle {
    OverlayStyle {
        tint: config.overlay_fill(),
        highlight: config.highlight_color,
    }
}

/// Everything the open overlay needs for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayLayout {
    pub popover: PopoverStyle,
    /// `None` when the pointer is disabled
    pub pointer: Option<PointerPlacement>,
    pub overlay: OverlayStyle,
}

pub fn layout_overlay(anchor: Frame, screen: ScreenBounds, config: &TooltipConfig) -> OverlayLayout {
    let origin = tooltip_coordinate(anchor, screen, config.popover_size(), config.with_pointer);
    let popover = resolve_popover_style(origin, config);
    let pointer = config
        .with_pointer
        .then(|| pointer_placement(anchor, popover.top));

    OverlayLayout {
        popover,
        pointer,
        overlay: resolve_overlay_style(config),
    }
}
