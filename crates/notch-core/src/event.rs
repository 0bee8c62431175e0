//! Input events delivered by the host environment.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Input event types.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Pointer pressed
    PointerDown {
        /// Pointer ID
        pointer_id: PointerId,
        /// Pointer type
        pointer_type: PointerType,
        /// Position in screen coordinates
        position: Point,
        /// Button (for mouse pointers)
        button: Option<MouseButton>,
    },
    /// Pointer moved
    PointerMove {
        /// Pointer ID
        pointer_id: PointerId,
        /// Position in screen coordinates
        position: Point,
    },
    /// Pointer released
    PointerUp {
        /// Pointer ID
        pointer_id: PointerId,
        /// Position in screen coordinates
        position: Point,
        /// Button (for mouse pointers)
        button: Option<MouseButton>,
    },
    /// Pointer cancelled by the host (lost capture, palm rejection, ...)
    PointerCancel {
        /// Pointer ID
        pointer_id: PointerId,
    },
    /// Click or tap completed at a position
    Click {
        /// Position in screen coordinates
        position: Point,
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

/// Pointer identifier for pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct PointerId(pub u32);

/// Type of pointer device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PointerType {
    /// Mouse pointer
    #[default]
    Mouse,
    /// Touch pointer
    Touch,
    /// Pen/stylus pointer
    Pen,
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

/// Keyboard key identifiers.
///
/// Only the keys a value control reacts to are named; everything else the
/// host may send arrives as [`Key::Other`].
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
    /// Home key
    Home,
    /// End key
    End,
    /// Page Up key
    PageUp,
    /// Page Down key
    PageDown,
    /// Enter/Return key
    Enter,
    /// Escape key
    Escape,
    /// Tab key
    Tab,
    /// Space key
    Space,
    /// Any key without a dedicated variant
    Other,
}

impl Key {
    /// Map a host key identifier (`KeyboardEvent.key` naming) to a [`Key`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowUp" | "Up" => Self::Up,
            "ArrowDown" | "Down" => Self::Down,
            "ArrowLeft" | "Left" => Self::Left,
            "ArrowRight" | "Right" => Self::Right,
            "Home" => Self::Home,
            "End" => Self::End,
            "PageUp" => Self::PageUp,
            "PageDown" => Self::PageDown,
            "Enter" => Self::Enter,
            "Escape" | "Esc" => Self::Escape,
            "Tab" => Self::Tab,
            " " | "Space" | "Spacebar" => Self::Space,
            _ => Self::Other,
        }
    }
}

impl Event {
    /// Check if this is a pointer event (including clicks).
    #[must_use]
    pub const fn is_pointer(&self) -> bool {
        matches!(
            self,
            Self::PointerDown { .. }
                | Self::PointerMove { .. }
                | Self::PointerUp { .. }
                | Self::PointerCancel { .. }
                | Self::Click { .. }
        )
    }

    /// Check if this is a focus event.
    #[must_use]
    pub const fn is_focus(&self) -> bool {
        matches!(self, Self::FocusIn | Self::FocusOut)
    }

    /// Convenience constructor for a primary mouse press.
    #[must_use]
    pub const fn mouse_down(position: Point) -> Self {
        Self::PointerDown {
            pointer_id: PointerId(0),
            pointer_type: PointerType::Mouse,
            position,
            button: Some(MouseButton::Left),
        }
    }

    /// Convenience constructor for a primary mouse move.
    #[must_use]
    pub const fn mouse_move(position: Point) -> Self {
        Self::PointerMove {
            pointer_id: PointerId(0),
            position,
        }
    }

    /// Convenience constructor for a primary mouse release.
    #[must_use]
    pub const fn mouse_up(position: Point) -> Self {
        Self::PointerUp {
            pointer_id: PointerId(0),
            position,
            button: Some(MouseButton::Left),
        }
    }
}
