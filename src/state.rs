//! Visibility and geometry state of a single tooltip.
//!
//! Kept free of gpui so the open/close rules can be tested directly. The
//! tooltip entity owns one `TooltipState` and acts on the `Transition`
//! each toggle returns.

use crate::config::ClosePolicy;
use crate::geometry::Frame;

/// What a toggle did and which notifications the caller must fire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Opened,
    Closed { notify_close: bool },
}

#[derive(Debug, Clone, Default)]
pub struct TooltipState {
    visible: bool,
    frame: Frame,
}

impl TooltipState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    pub fn toggle(&mut self, policy: ClosePolicy) -> Transition {
        if self.visible {
            self.visible = false;
            Transition::Closed {
                notify_close: policy == ClosePolicy::NotifyOnToggle,
            }
        } else {
            self.visible = true;
            Transition::Opened
        }
    }

    /// Stores a measured anchor frame. Returns whether it changed.
    pub fn apply_measurement(&mut self, frame: Frame) -> bool {
        if self.frame == frame {
            return false;
        }
        self.frame = frame;
        true
    }
}
