//! Input contracts.
//!
//! Hosts translate window-system callbacks into [`InputEvent`]s, queue them,
//! and hand one [`InputFrame`] snapshot to `Comparison::tick` per frame.
//! Nothing here is touched from inside a callback.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    Primary,
    Secondary,
    Middle,
    Other(u16),
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Cursor position in window pixels.
    CursorMoved { x: f64, y: f64 },
    MouseButton { button: MouseButton, pressed: bool },
    Scroll { dx: f64, dy: f64 },
    /// Framebuffer size in pixels.
    Resized { width: u32, height: u32 },
}

/// Everything that happened since the previous tick.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InputFrame {
    #[serde(default)]
    pub events: Vec<InputEvent>,
    /// The UI layer is hovering/dragging a widget; camera ignores clicks and
    /// scrolls while set.
    #[serde(default)]
    pub ui_wants_mouse: bool,
}

impl InputFrame {
    pub fn new(events: Vec<InputEvent>) -> Self {
        Self {
            events,
            ui_wants_mouse: false,
        }
    }
}

/// Accumulates events between ticks.
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: Vec<InputEvent>,
    ui_wants_mouse: bool,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.pending.push(event);
    }

    /// Latest UI capture state; carried into the next drained frame.
    pub fn set_ui_wants_mouse(&mut self, wants: bool) {
        self.ui_wants_mouse = wants;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take all pending events as one frame snapshot.
    pub fn drain(&mut self) -> InputFrame {
        InputFrame {
            events: std::mem::take(&mut self.pending),
            ui_wants_mouse: self.ui_wants_mouse,
        }
    }
}
