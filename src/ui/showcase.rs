use gpui::{prelude::*, *};

use crate::config::TooltipConfig;
use crate::style::StyleOverrides;
use crate::ui::theme::TooltipColors;
use crate::ui::tooltip::{Tooltip, TooltipEvent};

/// Demo window: tooltips anchored near each corner and in the middle, so
/// both placement sides and edge clamping can be seen.
pub struct Showcase {
    top_left: Entity<Tooltip>,
    top_right: Entity<Tooltip>,
    center: Entity<Tooltip>,
    bottom_left: Entity<Tooltip>,
    bottom_right: Entity<Tooltip>,
    last_event: SharedString,
    _subscriptions: Vec<Subscription>,
}

fn anchor_button(label: &'static str) -> impl Fn(&mut Window, &mut App) -> AnyElement + 'static {
    move |_, _| {
        div()
            .px(px(12.0))
            .py(px(6.0))
            .bg(TooltipColors::button_bg())
            .border_1()
            .border_color(TooltipColors::border())
            .rounded(px(4.0))
            .text_size(px(13.0))
            .text_color(TooltipColors::text())
            .hover(|s| s.bg(TooltipColors::button_hover()))
            .child(label)
            .into_any_element()
    }
}

fn popover_text(text: &'static str) -> impl Fn(&mut Window, &mut App) -> AnyElement + 'static {
    move |_, _| div().text_size(px(12.0)).child(text).into_any_element()
}

impl Showcase {
    pub fn new(base: TooltipConfig, cx: &mut Context<Self>) -> Self {
        let top_left = cx.new(|cx| {
            Tooltip::new(
                anchor_button("Top left"),
                popover_text("Clamped to the left edge"),
                base.clone(),
                cx,
            )
            .on_open(|_, _| log::info!("Top left tooltip opened"))
            .on_close(|_, _| log::info!("Top left tooltip closed"))
        });

        let top_right = cx.new(|cx| {
            Tooltip::new(
                anchor_button("Top right"),
                popover_text("Custom pointer color"),
                TooltipConfig {
                    pointer_color: Some(TooltipColors::button_hover()),
                    ..base.clone()
                },
                cx,
            )
        });

        let center = cx.new(|cx| {
            Tooltip::new(
                anchor_button("Center"),
                popover_text("No overlay, no pointer"),
                TooltipConfig {
                    with_overlay: false,
                    with_pointer: false,
                    width: 220.0,
                    ..base.clone()
                },
                cx,
            )
        });

        let bottom_left = cx.new(|cx| {
            Tooltip::new(
                anchor_button("Bottom left"),
                popover_text("Opens above the anchor"),
                TooltipConfig {
                    highlight_color: TooltipColors::bg_main(),
                    ..base.clone()
                },
                cx,
            )
        });

        let bottom_right = cx.new(|cx| {
            Tooltip::new(
                anchor_button("Bottom right"),
                popover_text("Styled container"),
                TooltipConfig {
                    height: 56.0,
                    container_style: StyleOverrides::default()
                        .corner_radius(4.0)
                        .border_color(TooltipColors::border()),
                    ..base.clone()
                },
                cx,
            )
        });

        let subscriptions = [
            ("Top left", &top_left),
            ("Top right", &top_right),
            ("Center", &center),
            ("Bottom left", &bottom_left),
            ("Bottom right", &bottom_right),
        ]
        .into_iter()
        .map(|(name, tooltip)| {
            cx.subscribe(tooltip, move |this, _, event: &TooltipEvent, cx| {
                let verb = match event {
                    TooltipEvent::Opened => "opened",
                    TooltipEvent::Closed => "closed",
                };
                this.last_event = SharedString::from(format!("{} {}", name, verb));
                cx.notify();
            })
        })
        .collect();

        Self {
            top_left,
            top_right,
            center,
            bottom_left,
            bottom_right,
            last_event: SharedString::new_static("Click a button to open its tooltip"),
            _subscriptions: subscriptions,
        }
    }
}

impl Render for Showcase {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let row = || div().flex().flex_row().justify_between().w_full();

        div()
            .id("showcase")
            .size_full()
            .flex()
            .flex_col()
            .justify_between()
            .p(px(16.0))
            .bg(TooltipColors::bg_main())
            .child(
                row()
                    .child(self.top_left.clone())
                    .child(self.top_right.clone()),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .items_center()
                    .gap(px(8.0))
                    .child(self.center.clone())
                    .child(
                        div()
                            .text_size(px(12.0))
                            .text_color(TooltipColors::text_muted())
                            .child(self.last_event.clone()),
                    ),
            )
            .child(
                row()
                    .child(self.bottom_left.clone())
                    .child(self.bottom_right.clone()),
            )
    }
}
