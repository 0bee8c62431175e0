//! Widget trait and related types.
//!
//! Widgets here are headless: they own interaction state and derived view
//! state, and leave drawing to whatever host renders them. The lifecycle is
//! layout (receive track bounds from the host) followed by any number of
//! events.
//!
//! # Examples
//!
//! ```
//! use notch_core::{InteractiveState, TypeId};
//!
//! let string_type = TypeId::of::<String>();
//! let i32_type = TypeId::of::<i32>();
//! assert_ne!(string_type, i32_type);
//!
//! assert!(InteractiveState::Readonly.is_interactive());
//! assert!(!InteractiveState::Disabled.is_interactive());
//! ```

use crate::event::Event;
use crate::geometry::{Rect, Size};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Type identifier for widget types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    /// Get the type ID for a type.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Effective interaction state reported to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InteractiveState {
    /// Accepts input and mutates
    #[default]
    Enabled,
    /// Looks and focuses like an enabled control, but ignores mutation
    Readonly,
    /// Rejects input and is not focusable
    Disabled,
}

impl InteractiveState {
    /// State for a pair of flags; disabled takes precedence over readonly.
    #[must_use]
    pub const fn from_flags(disabled: bool, readonly: bool) -> Self {
        if disabled {
            Self::Disabled
        } else if readonly {
            Self::Readonly
        } else {
            Self::Enabled
        }
    }

    /// Whether the host should present an enabled affordance.
    #[must_use]
    pub const fn is_interactive(self) -> bool {
        !matches!(self, Self::Disabled)
    }

    /// Whether input is allowed to change the value.
    #[must_use]
    pub const fn allows_mutation(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

/// Core widget trait for headless controls.
pub trait Widget: Send + Sync {
    /// Get the type identifier for this widget type.
    fn type_id(&self) -> TypeId;

    /// Accept the bounds the host allocated to this widget.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Handle input events, returning a message when something changed.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>>;

    /// Get child widgets for tree traversal.
    fn children(&self) -> &[Box<dyn Widget>];

    /// Check if this widget is interactive (can receive focus/events).
    fn is_interactive(&self) -> bool {
        false
    }

    /// Check if this widget can receive keyboard focus.
    fn is_focusable(&self) -> bool {
        false
    }

    /// Effective interaction state.
    fn interactive_state(&self) -> InteractiveState {
        if self.is_interactive() {
            InteractiveState::Enabled
        } else {
            InteractiveState::Disabled
        }
    }

    /// Get the accessible name for screen readers.
    fn accessible_name(&self) -> Option<&str> {
        None
    }

    /// Get the accessible role.
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Generic
    }

    /// Get the test ID for this widget (if any).
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect {
        Rect::default()
    }
}

/// Accessible role for screen readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccessibleRole {
    /// Generic element
    #[default]
    Generic,
    /// Slider
    Slider,
    /// Static label
    Label,
    /// Group of related controls
    Group,
}
