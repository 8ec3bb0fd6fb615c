//! Default colors for tooltips and the demo window.

use gpui::{rgb, rgba, transparent_black, Hsla};

/// Tooltip palette
pub struct TooltipColors;

impl TooltipColors {
    // ── Popover ──────────────────────────────────────────────────────────

    /// Popover box fill, also used for the pointer when no pointer color is set
    pub fn popover_bg() -> Hsla {
        rgb(0x617080).into()
    }

    /// Popover text color
    pub fn popover_text() -> Hsla {
        rgb(0xffffff).into()
    }

    // ── Overlay ──────────────────────────────────────────────────────────

    /// Translucent white tint behind an open tooltip
    pub fn overlay_tint() -> Hsla {
        rgba(0xfafafab3).into()
    }

    /// Fill behind the highlighted anchor copy
    pub fn highlight() -> Hsla {
        transparent_black()
    }

    // ── Demo window ──────────────────────────────────────────────────────

    /// Main background color
    pub fn bg_main() -> Hsla {
        rgb(0x1a1a1a).into()
    }

    /// Anchor button background
    pub fn button_bg() -> Hsla {
        rgb(0x2a2a2a).into()
    }

    /// Anchor button hover background
    pub fn button_hover() -> Hsla {
        rgb(0x3a3a3a).into()
    }

    /// Default border color
    pub fn border() -> Hsla {
        rgb(0x3a3a3a).into()
    }

    /// Primary text color
    pub fn text() -> Hsla {
        rgb(0xe0e0e0).into()
    }

    /// Muted text color
    pub fn text_muted() -> Hsla {
        rgb(0x808080).into()
    }
}
