//! Popover and pointer placement.
//!
//! Pure functions of anchor geometry, viewport size and popover size. The
//! tooltip calls these every render while it is open.

use crate::geometry::{Coordinate, Frame, PopoverSize, ScreenBounds};

/// Vertical gap left between anchor and popover for the pointer glyph
pub const POINTER_CLEARANCE: f32 = 15.0;

/// Pointer glyph box size
pub const POINTER_WIDTH: f32 = 16.0;
pub const POINTER_HEIGHT: f32 = 16.0;

/// How far above the anchor a downward pointer starts
const POINTER_ABOVE_OFFSET: f32 = 13.0;
/// How far an upward pointer overlaps the anchor's bottom edge
const POINTER_BELOW_OVERLAP: f32 = 2.0;

/// Which side of the anchor the popover is placed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalSide {
    Above,
    Below,
}

/// Direction the pointer glyph points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerDirection {
    /// Popover below the anchor, tip points up at it
    Up,
    /// Popover above the anchor, tip points down at it
    Down,
}

/// Where the pointer glyph is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPlacement {
    pub origin: Coordinate,
    pub direction: PointerDirection,
}

/// Picks the side with more room. An anchor centered exactly on the
/// midline goes below.
pub fn vertical_side(anchor: Frame, screen: ScreenBounds) -> VerticalSide {
    if anchor.mid_y() <= screen.height / 2.0 {
        VerticalSide::Below
    } else {
        VerticalSide::Above
    }
}

/// Top-left corner of the popover box.
///
/// The box is centered over the anchor horizontally and clamped to
/// `[0, screen.width - popover.width]`; when the popover is wider than the
/// screen it sticks to the left edge.
pub fn tooltip_coordinate(
    anchor: Frame,
    screen: ScreenBounds,
    popover: PopoverSize,
    with_pointer: bool,
) -> Coordinate {
    let centered = anchor.mid_x() - popover.width / 2.0;
    let x = centered.min(screen.width - popover.width).max(0.0);

    let clearance = if with_pointer { POINTER_CLEARANCE } else { 0.0 };
    let y = match vertical_side(anchor, screen) {
        VerticalSide::Below => anchor.y + anchor.height + clearance,
        VerticalSide::Above => anchor.y - popover.height - clearance,
    };

    log::trace!(
        "tooltip placement: anchor={:?} screen={:?} popover={:?} -> ({}, {})",
        anchor,
        screen,
        popover,
        x,
        y
    );

    Coordinate { x, y }
}

/// Pointer glyph position for an anchor and the popover's top edge.
///
/// The pointer points down when the anchor sits below the popover's top,
/// i.e. the popover was placed above.
pub fn pointer_placement(anchor: Frame, popover_top: f32) -> PointerPlacement {
    let direction = if anchor.y > popover_top {
        PointerDirection::Down
    } else {
        PointerDirection::Up
    };

    let y = match direction {
        PointerDirection::Down => anchor.y - POINTER_ABOVE_OFFSET,
        PointerDirection::Up => anchor.bottom() - POINTER_BELOW_OVERLAP,
    };

    PointerPlacement {
        origin: Coordinate {
            x: anchor.mid_x() - POINTER_WIDTH / 2.0,
            y,
        },
        direction,
    }
}
