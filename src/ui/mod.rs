pub mod pointer;
pub mod showcase;
pub mod theme;
pub mod tooltip;

pub use pointer::PointerGlyph;
pub use tooltip::{register_tooltip_bindings, Tooltip, TooltipEvent};
