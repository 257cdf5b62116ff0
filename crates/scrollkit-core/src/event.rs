//! Input events for widgets.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Input event types delivered by the host event loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Mouse moved to position
    MouseMove {
        /// New position
        position: Point,
    },
    /// Mouse button pressed
    MouseDown {
        /// Position of click
        position: Point,
        /// Button pressed
        button: MouseButton,
    },
    /// Mouse button released
    MouseUp {
        /// Position of release
        position: Point,
        /// Button released
        button: MouseButton,
    },
    /// Mouse wheel scrolled
    Scroll {
        /// Pointer position when the wheel moved
        position: Point,
        /// Vertical scroll delta; negative scrolls towards the start
        delta_y: f32,
    },
    /// Key pressed
    KeyDown {
        /// Key pressed
        key: Key,
    },
    /// Key released
    KeyUp {
        /// Key released
        key: Key,
    },
    /// Widget gained focus
    FocusIn,
    /// Widget lost focus
    FocusOut,
}

impl Event {
    /// Pointer position carried by the event, if any.
    #[must_use]
    pub const fn position(&self) -> Option<Point> {
        match self {
            Self::MouseMove { position }
            | Self::MouseDown { position, .. }
            | Self::MouseUp { position, .. }
            | Self::Scroll { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// Direction of a wheel event: `-1` towards the start, `1` towards the
    /// end. `None` for other events and for wheel ticks with no vertical
    /// component.
    #[must_use]
    pub fn wheel_step(&self) -> Option<isize> {
        match self {
            Self::Scroll { delta_y, .. } if *delta_y < 0.0 => Some(-1),
            Self::Scroll { delta_y, .. } if *delta_y > 0.0 => Some(1),
            _ => None,
        }
    }
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (wheel click)
    Middle,
}

/// Keyboard keys the list widgets react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Page up
    PageUp,
    /// Page down
    PageDown,
    /// Home
    Home,
    /// End
    End,
    /// Enter / Return
    Enter,
    /// Escape
    Escape,
    /// Space bar
    Space,
    /// Tab
    Tab,
}
