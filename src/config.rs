//! Tooltip configuration with documented defaults, plus an optional JSON
//! theme file that can override them.

use std::path::{Path, PathBuf};
use std::time::Duration;

use gpui::{transparent_black, Hsla, Rgba};
use serde::Deserialize;

use crate::error::{Result, TooltipError};
use crate::geometry::PopoverSize;
use crate::style::StyleOverrides;
use crate::ui::theme::TooltipColors;

/// Default popover size
pub const DEFAULT_WIDTH: f32 = 150.0;
pub const DEFAULT_HEIGHT: f32 = 40.0;

/// Wait before the first measurement so the initial layout can settle
pub const DEFAULT_INITIAL_MEASURE_DELAY: Duration = Duration::from_millis(500);

/// Where `on_close` is reported from. It fires exactly once per close
/// either way.
///
/// `NotifyOnToggle` calls it from the toggle handler itself.
/// `SuppressOnToggle` keeps the toggle handler quiet and reports the close
/// from the dismissal hook after the overlay is torn down, which is how
/// iOS modals deliver it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClosePolicy {
    NotifyOnToggle,
    SuppressOnToggle,
}

impl ClosePolicy {
    pub fn platform_default() -> Self {
        if cfg!(target_os = "ios") {
            ClosePolicy::SuppressOnToggle
        } else {
            ClosePolicy::NotifyOnToggle
        }
    }
}

impl Default for ClosePolicy {
    fn default() -> Self {
        Self::platform_default()
    }
}

/// Per-tooltip configuration
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipConfig {
    /// Draw the pointer glyph between anchor and popover
    pub with_pointer: bool,
    /// Clicking the inline anchor opens the tooltip
    pub toggle_on_press: bool,
    pub width: f32,
    pub height: f32,
    pub container_style: StyleOverrides,
    /// Pointer fill, falls back to `background_color`
    pub pointer_color: Option<Hsla>,
    pub background_color: Hsla,
    /// Fill behind the highlighted anchor copy
    pub highlight_color: Hsla,
    /// Tint the window while open
    pub with_overlay: bool,
    /// Overlay tint, falls back to translucent white
    pub overlay_color: Option<Hsla>,
    pub close_policy: ClosePolicy,
    pub initial_measure_delay: Duration,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            with_pointer: true,
            toggle_on_press: true,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            container_style: StyleOverrides::default(),
            pointer_color: None,
            background_color: TooltipColors::popover_bg(),
            highlight_color: TooltipColors::highlight(),
            with_overlay: true,
            overlay_color: None,
            close_policy: ClosePolicy::default(),
            initial_measure_delay: DEFAULT_INITIAL_MEASURE_DELAY,
        }
    }
}

impl TooltipConfig {
    pub fn popover_size(&self) -> PopoverSize {
        PopoverSize::new(self.width, self.height)
    }

    pub fn pointer_fill(&self) -> Hsla {
        self.pointer_color.unwrap_or(self.background_color)
    }

    pub fn overlay_fill(&self) -> Hsla {
        if self.with_overlay {
            self.overlay_color
                .unwrap_or_else(TooltipColors::overlay_tint)
        } else {
            transparent_black()
        }
    }
}

/// Theme file contents. Every field is optional; unset fields keep the
/// value already in the config being themed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TooltipTheme {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub with_pointer: Option<bool>,
    pub with_overlay: Option<bool>,
    pub background_color: Option<String>,
    pub pointer_color: Option<String>,
    pub highlight_color: Option<String>,
    pub overlay_color: Option<String>,
}

impl TooltipTheme {
    /// Parse a theme from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        let theme: TooltipTheme = serde_json::from_str(text)?;
        // Surface bad colors at load time rather than on first render
        theme.apply(TooltipConfig::default())?;
        Ok(theme)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| TooltipError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Loads `<config dir>/anchor-tooltip/theme.json`, or `None` when the
    /// file does not exist
    pub fn load_default() -> Result<Option<Self>> {
        let path = Self::default_path()?;
        if !path.exists() {
            log::debug!("No tooltip theme at {}", path.display());
            return Ok(None);
        }
        let theme = Self::load(&path)?;
        log::info!("Loaded tooltip theme from {}", path.display());
        Ok(Some(theme))
    }

    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(TooltipError::NoConfigDir)?;
        Ok(config_dir.join("anchor-tooltip").join("theme.json"))
    }

    /// Overlays the theme's set fields onto `config`
    pub fn apply(&self, mut config: TooltipConfig) -> Result<TooltipConfig> {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(with_pointer) = self.with_pointer {
            config.with_pointer = with_pointer;
        }
        if let Some(with_overlay) = self.with_overlay {
            config.with_overlay = with_overlay;
        }
        if let Some(value) = &self.background_color {
            config.background_color = parse_color("background_color", value)?;
        }
        if let Some(value) = &self.pointer_color {
            config.pointer_color = Some(parse_color("pointer_color", value)?);
        }
        if let Some(value) = &self.highlight_color {
            config.highlight_color = parse_color("highlight_color", value)?;
        }
        if let Some(value) = &self.overlay_color {
            config.overlay_color = Some(parse_color("overlay_color", value)?);
        }
        Ok(config)
    }
}

/// Parses `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` or `transparent`
pub fn parse_color(field: &'static str, value: &str) -> Result<Hsla> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("transparent") {
        return Ok(transparent_black());
    }
    Rgba::try_from(trimmed)
        .map(Hsla::from)
        .map_err(|_| TooltipError::InvalidColor {
            field,
            value: value.to_string(),
        })
}
