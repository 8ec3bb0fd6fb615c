use gpui::{prelude::*, *};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::config::TooltipConfig;
use crate::geometry::{Frame, ScreenBounds};
use crate::lifecycle::{MeasureGuard, MeasureTicket};
use crate::state::{TooltipState, Transition};
use crate::style::layout_overlay;
use crate::ui::pointer::PointerGlyph;

gpui::actions!(tooltip, [DismissTooltip]);

/// Register key bindings for open tooltips
pub fn register_tooltip_bindings(cx: &mut App) {
    cx.bind_keys([KeyBinding::new("escape", DismissTooltip, Some("Tooltip"))]);
}

/// Builds an element on demand. The anchor builder runs twice per frame
/// while open: once inline, once for the highlighted copy.
type ElementBuilder = Rc<dyn Fn(&mut Window, &mut App) -> AnyElement + 'static>;

/// Callback type for open/close notifications
type TooltipCallback = Rc<dyn Fn(&mut Window, &mut App) + 'static>;

/// Anchor bounds recorded during the latest layout pass
type LayoutProbe = Rc<Cell<Option<Bounds<Pixels>>>>;

const OVERLAY_FADE_IN: Duration = Duration::from_millis(150);

/// Emitted on every open/close transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TooltipEvent {
    Opened,
    Closed,
}

impl EventEmitter<TooltipEvent> for Tooltip {}
impl EventEmitter<DismissEvent> for Tooltip {}

/// A popover anchored to a child element.
///
/// The anchor always renders inline. While open, a deferred full-window
/// layer shows the dismiss surface, a highlighted copy of the anchor, the
/// pointer glyph and the popover box.
pub struct Tooltip {
    id: SharedString,
    focus_handle: FocusHandle,
    config: TooltipConfig,
    anchor: ElementBuilder,
    popover: ElementBuilder,
    on_open: Option<TooltipCallback>,
    on_close: Option<TooltipCallback>,
    state: TooltipState,
    guard: MeasureGuard,
    layout_probe: LayoutProbe,
    /// Pending timer or measurement; replacing it cancels the old one
    measure_task: Option<Task<()>>,
    _release: Subscription,
}

impl Tooltip {
    pub fn new(
        anchor: impl Fn(&mut Window, &mut App) -> AnyElement + 'static,
        popover: impl Fn(&mut Window, &mut App) -> AnyElement + 'static,
        config: TooltipConfig,
        cx: &mut Context<Self>,
    ) -> Self {
        let release = cx.on_release(|this: &mut Self, _cx| {
            this.guard.deactivate();
            this.measure_task.take();
        });

        let mut tooltip = Self {
            id: SharedString::from(format!("tooltip-{}", uuid::Uuid::new_v4())),
            focus_handle: cx.focus_handle(),
            config,
            anchor: Rc::new(anchor),
            popover: Rc::new(popover),
            on_open: None,
            on_close: None,
            state: TooltipState::new(),
            guard: MeasureGuard::new(),
            layout_probe: Rc::new(Cell::new(None)),
            measure_task: None,
            _release: release,
        };
        tooltip.schedule_initial_measure(cx);
        tooltip
    }

    pub fn on_open(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_open = Some(Rc::new(handler));
        self
    }

    pub fn on_close(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_close = Some(Rc::new(handler));
        self
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    pub fn frame(&self) -> Frame {
        self.state.frame()
    }

    pub fn config(&self) -> &TooltipConfig {
        &self.config
    }

    /// Re-measures the anchor and flips visibility
    pub fn toggle(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.measure(cx);

        match self.state.toggle(self.config.close_policy) {
            Transition::Opened => {
                log::debug!("{}: opened", self.id);
                self.focus_handle.focus(window);
                if let Some(handler) = self.on_open.clone() {
                    handler(window, cx);
                }
                cx.emit(TooltipEvent::Opened);
            }
            Transition::Closed { notify_close } => {
                log::debug!("{}: closed (notify on toggle: {})", self.id, notify_close);
                if notify_close {
                    self.notify_closed(window, cx);
                } else {
                    // Reported by the dismissal hook once the overlay is torn down
                    cx.defer_in(window, |this, window, cx| {
                        this.notify_closed(window, cx);
                    });
                }
                cx.emit(TooltipEvent::Closed);
                cx.emit(DismissEvent);
            }
        }
        cx.notify();
    }

    fn notify_closed(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if let Some(handler) = self.on_close.clone() {
            handler(window, cx);
        }
    }

    pub fn open(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if !self.state.is_visible() {
            self.toggle(window, cx);
        }
    }

    pub fn close(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.state.is_visible() {
            self.toggle(window, cx);
        }
    }

    /// Reads the anchor's last laid-out bounds on the next tick. A no-op if
    /// the anchor has not been laid out yet.
    pub fn measure(&mut self, cx: &mut Context<Self>) {
        self.spawn_measure(None, cx);
    }

    fn schedule_initial_measure(&mut self, cx: &mut Context<Self>) {
        self.spawn_measure(Some(self.config.initial_measure_delay), cx);
    }

    fn spawn_measure(&mut self, delay: Option<Duration>, cx: &mut Context<Self>) {
        let ticket = self.guard.begin();
        let probe = self.layout_probe.clone();
        self.measure_task = Some(cx.spawn(async move |this, cx| {
            if let Some(delay) = delay {
                cx.background_executor().timer(delay).await;
            }
            Self::apply_probe(this, probe, ticket, cx);
        }));
    }

    fn apply_probe(
        this: WeakEntity<Self>,
        probe: LayoutProbe,
        ticket: MeasureTicket,
        cx: &mut AsyncApp,
    ) {
        let Some(bounds) = probe.get() else {
            log::debug!("Anchor not laid out yet, skipping measurement");
            return;
        };

        this.update(cx, |this, cx| {
            if !this.guard.accepts(ticket) {
                return;
            }
            let frame = Frame::from(bounds);
            if this.state.apply_measurement(frame) {
                log::debug!("{}: anchor measured at {:?}", this.id, frame);
                cx.notify();
            }
        })
        .ok();
    }

    fn dismiss(&mut self, _: &DismissTooltip, window: &mut Window, cx: &mut Context<Self>) {
        self.close(window, cx);
    }

    fn render_overlay(&mut self, window: &mut Window, cx: &mut Context<Self>) -> AnyElement {
        let viewport = window.viewport_size();
        let frame = self.state.frame();
        let layout = layout_overlay(frame, ScreenBounds::from(viewport), &self.config);
        let pointer_fill = self.config.pointer_fill();

        let highlighted_anchor = (self.anchor)(window, cx);
        let popover = (self.popover)(window, cx);

        anchored()
            .position(point(px(0.0), px(0.0)))
            .child(
                div()
                    .id(SharedString::from(format!("{}-overlay", self.id)))
                    .track_focus(&self.focus_handle)
                    .key_context("Tooltip")
                    .on_action(cx.listener(Self::dismiss))
                    .occlude()
                    .w(viewport.width)
                    .h(viewport.height)
                    .bg(layout.overlay.tint)
                    .on_click(cx.listener(|this, _, window, cx| {
                        this.toggle(window, cx);
                    }))
                    // Highlighted copy of the anchor at its measured frame
                    .child(
                        div()
                            .absolute()
                            .left(px(frame.x))
                            .top(px(frame.y))
                            .w(px(frame.width))
                            .h(px(frame.height))
                            .bg(layout.overlay.highlight)
                            .child(highlighted_anchor),
                    )
                    .when_some(layout.pointer, |el, pointer| {
                        el.child(
                            div()
                                .absolute()
                                .left(px(pointer.origin.x))
                                .top(px(pointer.origin.y))
                                .child(PointerGlyph::new(pointer.direction, pointer_fill)),
                        )
                    })
                    .child(layout.popover.apply(div()).child(popover))
                    .with_animation(
                        SharedString::from(format!("{}-fade", self.id)),
                        Animation::new(OVERLAY_FADE_IN).with_easing(ease_in_out),
                        |el, delta| el.opacity(delta),
                    ),
            )
            .into_any_element()
    }
}

impl Focusable for Tooltip {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for Tooltip {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let probe = self.layout_probe.clone();
        let inline_anchor = (self.anchor)(window, cx);
        let overlay = self
            .state
            .is_visible()
            .then(|| self.render_overlay(window, cx));
        let on_press = cx.listener(|this, _, window, cx| {
            this.toggle(window, cx);
        });

        div()
            .id(self.id.clone())
            .relative()
            // Canvas to track the anchor's window bounds
            .child(
                canvas(
                    move |bounds, _, _| {
                        probe.set(Some(bounds));
                    },
                    |_, _, _, _| {},
                )
                .absolute()
                .size_full(),
            )
            .child(inline_anchor)
            .when(self.config.toggle_on_press, |el| {
                el.cursor_pointer().on_click(on_press)
            })
            .when_some(overlay, |el, overlay| {
                el.child(deferred(overlay).with_priority(1))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClosePolicy;
    use core::prelude::v1::test;
    use std::cell::RefCell;

    fn label(text: &'static str) -> impl Fn(&mut Window, &mut App) -> AnyElement + 'static {
        move |_, _| div().child(text).into_any_element()
    }

    fn anchor_bounds() -> Bounds<Pixels> {
        Bounds::new(point(px(50.0), px(700.0)), size(px(100.0), px(40.0)))
    }

    fn config_with(policy: ClosePolicy) -> TooltipConfig {
        TooltipConfig {
            close_policy: policy,
            ..TooltipConfig::default()
        }
    }

    /// Tooltip in a test window, with open/close counters wired to its callbacks
    fn windowed_tooltip(
        cx: &mut TestAppContext,
        policy: ClosePolicy,
    ) -> (
        Entity<Tooltip>,
        &mut VisualTestContext,
        Rc<Cell<usize>>,
        Rc<Cell<usize>>,
    ) {
        let opened = Rc::new(Cell::new(0));
        let closed = Rc::new(Cell::new(0));
        let (on_open, on_close) = (opened.clone(), closed.clone());

        let (tooltip, cx) = cx.add_window_view(move |_, cx| {
            Tooltip::new(label("anchor"), label("popover"), config_with(policy), cx)
                .on_open(move |_, _| on_open.set(on_open.get() + 1))
                .on_close(move |_, _| on_close.set(on_close.get() + 1))
        });
        (tooltip, cx, opened, closed)
    }

    #[gpui::test]
    fn callbacks_fire_once_per_transition(cx: &mut TestAppContext) {
        let (tooltip, cx, opened, closed) = windowed_tooltip(cx, ClosePolicy::NotifyOnToggle);

        tooltip.update_in(cx, |tooltip, window, cx| tooltip.toggle(window, cx));
        cx.run_until_parked();
        assert!(tooltip.read_with(cx, |tooltip, _| tooltip.is_visible()));
        assert_eq!((opened.get(), closed.get()), (1, 0));

        tooltip.update_in(cx, |tooltip, window, cx| tooltip.toggle(window, cx));
        cx.run_until_parked();
        assert!(!tooltip.read_with(cx, |tooltip, _| tooltip.is_visible()));
        assert_eq!((opened.get(), closed.get()), (1, 1));
    }

    #[gpui::test]
    fn open_and_close_only_act_on_a_change(cx: &mut TestAppContext) {
        let (tooltip, cx, opened, closed) = windowed_tooltip(cx, ClosePolicy::NotifyOnToggle);

        tooltip.update_in(cx, |tooltip, window, cx| {
            tooltip.close(window, cx);
            tooltip.open(window, cx);
            tooltip.open(window, cx);
        });
        cx.run_until_parked();
        assert_eq!((opened.get(), closed.get()), (1, 0));

        tooltip.update_in(cx, |tooltip, window, cx| {
            tooltip.close(window, cx);
            tooltip.close(window, cx);
        });
        cx.run_until_parked();
        assert_eq!((opened.get(), closed.get()), (1, 1));
        assert!(!tooltip.read_with(cx, |tooltip, _| tooltip.is_visible()));
    }

    #[gpui::test]
    fn on_close_fires_once_per_close_under_both_policies(cx: &mut TestAppContext) {
        for policy in [ClosePolicy::NotifyOnToggle, ClosePolicy::SuppressOnToggle] {
            let (tooltip, cx, opened, closed) = windowed_tooltip(cx, policy);

            for round in 1..=2 {
                tooltip.update_in(cx, |tooltip, window, cx| tooltip.open(window, cx));
                cx.run_until_parked();
                // Escape goes through the dismiss action
                tooltip.update_in(cx, |tooltip, window, cx| {
                    tooltip.dismiss(&DismissTooltip, window, cx)
                });
                cx.run_until_parked();

                assert_eq!(opened.get(), round, "{policy:?}");
                assert_eq!(closed.get(), round, "{policy:?}");
            }
        }
    }

    #[gpui::test]
    fn transitions_emit_events(cx: &mut TestAppContext) {
        let (tooltip, cx, _, _) = windowed_tooltip(cx, ClosePolicy::NotifyOnToggle);
        let events = Rc::new(RefCell::new(Vec::new()));
        let dismissals = Rc::new(Cell::new(0));

        let _subscriptions = cx.update({
            let events = events.clone();
            let dismissals = dismissals.clone();
            let tooltip = tooltip.clone();
            move |_, cx| {
                [
                    cx.subscribe(&tooltip, move |_, event: &TooltipEvent, _| {
                        events.borrow_mut().push(*event);
                    }),
                    cx.subscribe(&tooltip, move |_, _: &DismissEvent, _| {
                        dismissals.set(dismissals.get() + 1);
                    }),
                ]
            }
        });

        tooltip.update_in(cx, |tooltip, window, cx| tooltip.toggle(window, cx));
        tooltip.update_in(cx, |tooltip, window, cx| tooltip.toggle(window, cx));
        cx.run_until_parked();

        assert_eq!(
            *events.borrow(),
            vec![TooltipEvent::Opened, TooltipEvent::Closed]
        );
        assert_eq!(dismissals.get(), 1);
    }

    #[gpui::test]
    fn measurement_applies_laid_out_bounds(cx: &mut TestAppContext) {
        let tooltip = cx.new(|cx| {
            Tooltip::new(label("anchor"), label("popover"), TooltipConfig::default(), cx)
        });

        tooltip.update(cx, |tooltip, cx| {
            tooltip.layout_probe.set(Some(anchor_bounds()));
            tooltip.measure(cx);
        });
        cx.run_until_parked();

        assert_eq!(
            tooltip.read_with(cx, |tooltip, _| tooltip.frame()),
            Frame::new(50.0, 700.0, 100.0, 40.0)
        );
    }

    #[gpui::test]
    fn measuring_an_unlaid_anchor_is_a_no_op(cx: &mut TestAppContext) {
        let tooltip = cx.new(|cx| {
            Tooltip::new(label("anchor"), label("popover"), TooltipConfig::default(), cx)
        });

        tooltip.update(cx, |tooltip, cx| tooltip.measure(cx));
        cx.run_until_parked();

        assert_eq!(tooltip.read_with(cx, |tooltip, _| tooltip.frame()), Frame::EMPTY);
    }

    #[gpui::test]
    fn initial_measurement_waits_for_the_delay(cx: &mut TestAppContext) {
        let tooltip = cx.new(|cx| {
            Tooltip::new(label("anchor"), label("popover"), TooltipConfig::default(), cx)
        });
        tooltip.update(cx, |tooltip, _| tooltip.layout_probe.set(Some(anchor_bounds())));

        cx.executor().advance_clock(Duration::from_millis(400));
        cx.run_until_parked();
        assert_eq!(tooltip.read_with(cx, |tooltip, _| tooltip.frame()), Frame::EMPTY);

        cx.executor().advance_clock(Duration::from_millis(100));
        cx.run_until_parked();
        assert_eq!(
            tooltip.read_with(cx, |tooltip, _| tooltip.frame()),
            Frame::new(50.0, 700.0, 100.0, 40.0)
        );
    }

    #[gpui::test]
    fn release_cancels_pending_initial_measurement(cx: &mut TestAppContext) {
        let tooltip = cx.new(|cx| {
            Tooltip::new(label("anchor"), label("popover"), TooltipConfig::default(), cx)
        });
        let probe = tooltip.read_with(cx, |tooltip, _| tooltip.layout_probe.clone());
        probe.set(Some(anchor_bounds()));
        // Held by the entity, the pending timer task and this test
        assert_eq!(Rc::strong_count(&probe), 3);

        let weak = tooltip.downgrade();
        drop(tooltip);
        cx.run_until_parked();
        cx.executor().advance_clock(Duration::from_millis(500));
        cx.run_until_parked();

        assert!(weak.upgrade().is_none());
        assert_eq!(Rc::strong_count(&probe), 1);
    }
}
