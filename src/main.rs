use anyhow::Context as _;
use gpui::{px, size, App, AppContext, Application, Bounds, SharedString, WindowBounds, WindowOptions};

use anchor_tooltip::ui::register_tooltip_bindings;
use anchor_tooltip::ui::showcase::Showcase;
use anchor_tooltip::{TooltipConfig, TooltipTheme};

/// Base config for the demo, themed from the user's config dir if present
fn load_config() -> anyhow::Result<TooltipConfig> {
    let path = TooltipTheme::default_path()?;
    let Some(theme) = TooltipTheme::load_default()
        .with_context(|| format!("Failed to load theme from {}", path.display()))?
    else {
        return Ok(TooltipConfig::default());
    };
    Ok(theme.apply(TooltipConfig::default())?)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config().unwrap_or_else(|e| {
        log::warn!("{:#}, using default tooltip config", e);
        TooltipConfig::default()
    });

    Application::new().run(move |cx: &mut App| {
        // Initialize gpui-component and use its dark theme for the demo window
        gpui_component::init(cx);
        gpui_component::theme::Theme::change(gpui_component::theme::ThemeMode::Dark, None, cx);

        // Register tooltip key bindings (Escape closes an open tooltip)
        register_tooltip_bindings(cx);

        let bounds = Bounds::centered(None, size(px(480.0), px(800.0)), cx);
        let opened = cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(gpui::TitlebarOptions {
                    title: Some(SharedString::new_static("Anchor Tooltip")),
                    ..Default::default()
                }),
                ..Default::default()
            },
            |_, cx| cx.new(|cx| Showcase::new(config, cx)),
        );
        if let Err(e) = opened {
            log::error!("Failed to open showcase window: {}", e);
            cx.quit();
            return;
        }
        cx.activate(true);
    });
}
