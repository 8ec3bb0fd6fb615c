//! Plain geometry records shared by placement, state and rendering.
//!
//! Everything is in logical pixels as `f32` so the placement math can be
//! tested without a running gpui application.

use gpui::{Bounds, Pixels, Size};

/// On-screen frame of the anchor element, in window coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Frame {
    /// Frame before the first measurement has landed
    pub const EMPTY: Frame = Frame {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn mid_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn mid_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

impl From<Bounds<Pixels>> for Frame {
    fn from(bounds: Bounds<Pixels>) -> Self {
        Self {
            x: f32::from(bounds.origin.x),
            y: f32::from(bounds.origin.y),
            width: f32::from(bounds.size.width),
            height: f32::from(bounds.size.height),
        }
    }
}

/// Size of the viewport the overlay covers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenBounds {
    pub width: f32,
    pub height: f32,
}

impl ScreenBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl From<Size<Pixels>> for ScreenBounds {
    fn from(size: Size<Pixels>) -> Self {
        Self {
            width: f32::from(size.width),
            height: f32::from(size.height),
        }
    }
}

/// Requested popover box size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopoverSize {
    pub width: f32,
    pub height: f32,
}

impl PopoverSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Top-left corner of a positioned box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub x: f32,
    pub y: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::{point, px, size};

    #[test]
    fn frame_midpoints() {
        let frame = Frame::new(50.0, 700.0, 100.0, 40.0);
        assert_eq!(frame.mid_x(), 100.0);
        assert_eq!(frame.mid_y(), 720.0);
        assert_eq!(frame.bottom(), 740.0);
    }

    #[test]
    fn default_frame_is_empty() {
        assert_eq!(Frame::default(), Frame::EMPTY);
    }

    #[test]
    fn converts_from_gpui_bounds() {
        let bounds = Bounds::new(point(px(12.0), px(30.0)), size(px(80.0), px(24.0)));
        assert_eq!(Frame::from(bounds), Frame::new(12.0, 30.0, 80.0, 24.0));
        assert_eq!(
            ScreenBounds::from(size(px(375.0), px(800.0))),
            ScreenBounds::new(375.0, 800.0)
        );
    }
}
