//! Anchored tooltip/popover overlay for gpui, with a directional pointer
//! glyph.
//!
//! [`ui::Tooltip`] wraps an anchor element, measures where it sits in the
//! window, and on toggle shows a popover next to it. Placement lives in
//! [`placement`] and is independent of gpui.

pub mod config;
pub mod error;
pub mod geometry;
pub mod lifecycle;
pub mod placement;
pub mod state;
pub mod style;
pub mod ui;

pub use config::{ClosePolicy, TooltipConfig, TooltipTheme};
pub use error::{Result, TooltipError};
pub use geometry::{Coordinate, Frame, PopoverSize, ScreenBounds};
pub use placement::{pointer_placement, tooltip_coordinate, PointerDirection};
