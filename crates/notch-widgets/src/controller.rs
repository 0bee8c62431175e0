//! Input controller: turns pointer, click and key events into value actions.
//!
//! The controller never touches the value itself. It returns an [`Action`]
//! for the owner to apply to its value model, which keeps the state machine
//! testable without a model and rules out re-entrant updates.

use notch_core::{Event, Key, MouseButton, Point, PointerId, PositionMapper, Rect};

/// Value operation requested by an input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Clamp and snap a raw value
    SetValue(f64),
    /// Move by a number of ticks
    StepBy(i32),
    /// Go to the lower bound
    JumpToMin,
    /// Go to the upper bound
    JumpToMax,
}

/// Key bindings of a focused handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// One tick up (`ArrowRight`, `ArrowUp`)
    Increment,
    /// One tick down (`ArrowLeft`, `ArrowDown`)
    Decrement,
    /// A page of ticks up
    PageUp,
    /// A page of ticks down
    PageDown,
    /// To min (`Home`)
    First,
    /// To max (`End`)
    Last,
}

impl KeyAction {
    /// Binding for `key`, if any.
    #[must_use]
    pub const fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Right | Key::Up => Some(Self::Increment),
            Key::Left | Key::Down => Some(Self::Decrement),
            Key::PageUp => Some(Self::PageUp),
            Key::PageDown => Some(Self::PageDown),
            Key::Home => Some(Self::First),
            Key::End => Some(Self::Last),
            _ => None,
        }
    }

    /// Value action, given the page size in ticks.
    #[must_use]
    pub fn action(self, page_ticks: u32) -> Action {
        let page = i32::try_from(page_ticks).unwrap_or(i32::MAX);
        match self {
            Self::Increment => Action::StepBy(1),
            Self::Decrement => Action::StepBy(-1),
            Self::PageUp => Action::StepBy(page),
            Self::PageDown => Action::StepBy(-page),
            Self::First => Action::JumpToMin,
            Self::Last => Action::JumpToMax,
        }
    }
}

/// Drag session state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No pointer captured
    #[default]
    Idle,
    /// A pointer grabbed the handle and is being tracked
    Dragging {
        /// Captured pointer
        pointer_id: PointerId,
        /// Horizontal distance from the handle centre at grab time
        grab_offset: f32,
    },
}

impl DragState {
    /// Whether a drag session is active.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

/// Geometry and mapping the controller needs for one event.
#[derive(Debug, Clone, Copy)]
pub struct InputContext {
    /// Track bounds in screen coordinates
    pub track: Rect,
    /// Handle bounds in screen coordinates
    pub handle: Rect,
    /// Range mapper
    pub mapper: PositionMapper,
    /// Page size for `PageUp`/`PageDown`
    pub page_ticks: u32,
    /// Pointer input may change the value; when false it only moves focus
    pub mutable: bool,
}

impl InputContext {
    fn value_at(&self, x: f32) -> f64 {
        self.mapper.point_to_value(Point::new(x, self.track.y), self.track)
    }
}

/// Idle/Dragging state machine plus keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputController {
    drag: DragState,
    focused: bool,
    /// Where the last drag ended; the host's trailing click there is dropped.
    last_release: Option<Point>,
}

impl InputController {
    /// Create an idle, unfocused controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current drag state.
    #[must_use]
    pub const fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Whether the handle holds keyboard focus.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Give the handle focus.
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Remove focus from the handle.
    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Force-terminate any drag session and release pointer capture.
    pub fn cancel(&mut self) {
        if let DragState::Dragging { pointer_id, .. } = self.drag {
            log::trace!("slider drag force-released pointer={pointer_id:?}");
        }
        self.drag = DragState::Idle;
        self.last_release = None;
    }

    /// Advance the state machine with `event`.
    pub fn handle(&mut self, event: &Event, ctx: &InputContext) -> Option<Action> {
        let release = self.last_release.take();
        match *event {
            Event::PointerDown {
                pointer_id,
                position,
                button,
                ..
            } => {
                let primary = matches!(button, None | Some(MouseButton::Left));
                if primary && !self.drag.is_dragging() && ctx.handle.contains_point(&position) {
                    self.focused = true;
                    if !ctx.mutable {
                        return None;
                    }
                    let grab_offset = position.x - ctx.handle.center().x;
                    self.drag = DragState::Dragging {
                        pointer_id,
                        grab_offset,
                    };
                    log::trace!("slider Idle -> Dragging pointer={pointer_id:?}");
                }
                None
            }
            Event::PointerMove {
                pointer_id,
                position,
            } => match self.drag {
                DragState::Dragging {
                    pointer_id: captured,
                    grab_offset,
                } if captured == pointer_id => {
                    Some(Action::SetValue(ctx.value_at(position.x - grab_offset)))
                }
                _ => None,
            },
            Event::PointerUp {
                pointer_id,
                position,
                ..
            } => match self.drag {
                DragState::Dragging {
                    pointer_id: captured,
                    grab_offset,
                } if captured == pointer_id => {
                    self.drag = DragState::Idle;
                    self.last_release = Some(position);
                    log::trace!("slider Dragging -> Idle pointer={pointer_id:?}");
                    Some(Action::SetValue(ctx.value_at(position.x - grab_offset)))
                }
                _ => None,
            },
            Event::PointerCancel { pointer_id } => {
                if matches!(self.drag, DragState::Dragging { pointer_id: captured, .. } if captured == pointer_id)
                {
                    self.drag = DragState::Idle;
                    log::trace!("slider drag cancelled pointer={pointer_id:?}");
                }
                None
            }
            Event::Click { position } => {
                if self.drag.is_dragging() || release == Some(position) {
                    return None;
                }
                if ctx.handle.contains_point(&position) {
                    self.focused = true;
                    None
                } else if ctx.track.contains_point(&position) {
                    self.focused = true;
                    ctx.mutable.then(|| Action::SetValue(ctx.value_at(position.x)))
                } else {
                    None
                }
            }
            Event::KeyDown { key } if self.focused => {
                KeyAction::from_key(key).map(|binding| binding.action(ctx.page_ticks))
            }
            Event::KeyDown { .. } | Event::KeyUp { .. } => None,
            Event::FocusIn => {
                self.focused = true;
                None
            }
            Event::FocusOut => {
                self.focused = false;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notch_core::{PointerType, SliderConfig};

    // Track 0..500 px at y 0..20, handle 16 px wide centred on 50%.
    fn ctx() -> InputContext {
        InputContext {
            track: Rect::new(0.0, 0.0, 500.0, 20.0),
            handle: Rect::new(242.0, 0.0, 16.0, 20.0),
            mapper: PositionMapper::new(&SliderConfig::default()).unwrap(),
            page_ticks: 10,
            mutable: true,
        }
    }

    fn down(id: u32, x: f32) -> Event {
        Event::PointerDown {
            pointer_id: PointerId(id),
            pointer_type: PointerType::Mouse,
            position: Point::new(x, 10.0),
            button: Some(MouseButton::Left),
        }
    }

    fn mv(id: u32, x: f32) -> Event {
        Event::PointerMove {
            pointer_id: PointerId(id),
            position: Point::new(x, 10.0),
        }
    }

    fn up(id: u32, x: f32) -> Event {
        Event::PointerUp {
            pointer_id: PointerId(id),
            position: Point::new(x, 10.0),
            button: Some(MouseButton::Left),
        }
    }

    // =========================================================================
    // Key bindings
    // =========================================================================

    #[test]
    fn test_key_action_bindings() {
        assert_eq!(KeyAction::from_key(Key::Right), Some(KeyAction::Increment));
        assert_eq!(KeyAction::from_key(Key::Up), Some(KeyAction::Increment));
        assert_eq!(KeyAction::from_key(Key::Left), Some(KeyAction::Decrement));
        assert_eq!(KeyAction::from_key(Key::Down), Some(KeyAction::Decrement));
        assert_eq!(KeyAction::from_key(Key::Home), Some(KeyAction::First));
        assert_eq!(KeyAction::from_key(Key::End), Some(KeyAction::Last));
        assert_eq!(KeyAction::from_key(Key::Enter), None);
        assert_eq!(KeyAction::from_key(Key::Other), None);
    }

    #[test]
    fn test_key_action_page_size() {
        assert_eq!(KeyAction::PageUp.action(4), Action::StepBy(4));
        assert_eq!(KeyAction::PageDown.action(4), Action::StepBy(-4));
        assert_eq!(KeyAction::First.action(4), Action::JumpToMin);
    }

    // =========================================================================
    // Drag state machine
    // =========================================================================

    #[test]
    fn test_pointer_down_on_handle_starts_drag() {
        let mut c = InputController::new();
        assert_eq!(c.handle(&down(1, 250.0), &ctx()), None);
        assert_eq!(
            c.drag_state(),
            DragState::Dragging {
                pointer_id: PointerId(1),
                grab_offset: 0.0
            }
        );
        assert!(c.is_focused());
    }

    #[test]
    fn test_pointer_down_off_handle_stays_idle() {
        let mut c = InputController::new();
        c.handle(&down(1, 50.0), &ctx());
        assert_eq!(c.drag_state(), DragState::Idle);
    }

    #[test]
    fn test_secondary_button_does_not_drag() {
        let mut c = InputController::new();
        let event = Event::PointerDown {
            pointer_id: PointerId(1),
            pointer_type: PointerType::Mouse,
            position: Point::new(250.0, 10.0),
            button: Some(MouseButton::Right),
        };
        c.handle(&event, &ctx());
        assert!(!c.drag_state().is_dragging());
    }

    #[test]
    fn test_touch_pointer_drags() {
        let mut c = InputController::new();
        let event = Event::PointerDown {
            pointer_id: PointerId(5),
            pointer_type: PointerType::Touch,
            position: Point::new(250.0, 10.0),
            button: None,
        };
        c.handle(&event, &ctx());
        assert!(c.drag_state().is_dragging());
    }

    #[test]
    fn test_drag_move_emits_value() {
        let mut c = InputController::new();
        c.handle(&down(1, 250.0), &ctx());
        assert_eq!(c.handle(&mv(1, 400.0), &ctx()), Some(Action::SetValue(80.0)));
        assert_eq!(c.handle(&mv(1, 400.0), &ctx()), Some(Action::SetValue(80.0)));
    }

    #[test]
    fn test_drag_respects_grab_offset() {
        let mut c = InputController::new();
        c.handle(&down(1, 254.0), &ctx());
        assert_eq!(c.handle(&mv(1, 404.0), &ctx()), Some(Action::SetValue(80.0)));
    }

    #[test]
    fn test_move_from_other_pointer_ignored() {
        let mut c = InputController::new();
        c.handle(&down(1, 250.0), &ctx());
        assert_eq!(c.handle(&mv(2, 400.0), &ctx()), None);
        assert_eq!(c.handle(&up(2, 400.0), &ctx()), None);
        assert!(c.drag_state().is_dragging());
    }

    #[test]
    fn test_move_while_idle_ignored() {
        let mut c = InputController::new();
        assert_eq!(c.handle(&mv(1, 400.0), &ctx()), None);
    }

    #[test]
    fn test_pointer_up_ends_drag() {
        let mut c = InputController::new();
        c.handle(&down(1, 250.0), &ctx());
        assert_eq!(c.handle(&up(1, 400.0), &ctx()), Some(Action::SetValue(80.0)));
        assert_eq!(c.drag_state(), DragState::Idle);
    }

    #[test]
    fn test_pointer_cancel_ends_drag() {
        let mut c = InputController::new();
        c.handle(&down(1, 250.0), &ctx());
        let cancel = Event::PointerCancel {
            pointer_id: PointerId(1),
        };
        assert_eq!(c.handle(&cancel, &ctx()), None);
        assert_eq!(c.drag_state(), DragState::Idle);
    }

    #[test]
    fn test_cancel_forces_idle() {
        let mut c = InputController::new();
        c.handle(&down(1, 250.0), &ctx());
        c.cancel();
        assert_eq!(c.drag_state(), DragState::Idle);
        assert_eq!(c.handle(&mv(1, 400.0), &ctx()), None);
    }

    // =========================================================================
    // Clicks
    // =========================================================================

    #[test]
    fn test_click_on_track_sets_value() {
        let mut c = InputController::new();
        let click = Event::Click {
            position: Point::new(400.0, 1.0),
        };
        assert_eq!(c.handle(&click, &ctx()), Some(Action::SetValue(80.0)));
        assert_eq!(c.drag_state(), DragState::Idle);
    }

    #[test]
    fn test_click_on_handle_only_focuses() {
        let mut c = InputController::new();
        let click = Event::Click {
            position: Point::new(250.0, 10.0),
        };
        assert_eq!(c.handle(&click, &ctx()), None);
        assert!(c.is_focused());
    }

    #[test]
    fn test_immutable_pointer_input_only_focuses() {
        let frozen = InputContext {
            mutable: false,
            ..ctx()
        };
        let mut c = InputController::new();
        assert_eq!(c.handle(&down(1, 250.0), &frozen), None);
        assert!(c.is_focused());
        assert_eq!(c.drag_state(), DragState::Idle);

        c.blur();
        let click = Event::Click {
            position: Point::new(400.0, 1.0),
        };
        assert_eq!(c.handle(&click, &frozen), None);
        assert!(c.is_focused());
    }

    #[test]
    fn test_click_outside_track_ignored() {
        let mut c = InputController::new();
        let click = Event::Click {
            position: Point::new(400.0, 40.0),
        };
        assert_eq!(c.handle(&click, &ctx()), None);
        assert!(!c.is_focused());
    }

    #[test]
    fn test_trailing_click_after_drag_dropped() {
        let mut c = InputController::new();
        c.handle(&down(1, 254.0), &ctx());
        c.handle(&up(1, 404.0), &ctx());
        let trailing = Event::Click {
            position: Point::new(404.0, 10.0),
        };
        assert_eq!(c.handle(&trailing, &ctx()), None);
        // A later click at the same spot is a genuine click.
        assert!(c.handle(&trailing, &ctx()).is_some());
    }

    // =========================================================================
    // Keyboard
    // =========================================================================

    #[test]
    fn test_keys_need_focus() {
        let mut c = InputController::new();
        let home = Event::KeyDown { key: Key::Home };
        assert_eq!(c.handle(&home, &ctx()), None);

        c.handle(&Event::FocusIn, &ctx());
        assert_eq!(c.handle(&home, &ctx()), Some(Action::JumpToMin));
        assert_eq!(
            c.handle(&Event::KeyDown { key: Key::PageUp }, &ctx()),
            Some(Action::StepBy(10))
        );

        c.handle(&Event::FocusOut, &ctx());
        assert_eq!(c.handle(&home, &ctx()), None);
    }

    #[test]
    fn test_unbound_key_not_consumed() {
        let mut c = InputController::new();
        c.focus();
        assert_eq!(c.handle(&Event::KeyDown { key: Key::Tab }, &ctx()), None);
        assert_eq!(c.handle(&Event::KeyUp { key: Key::Home }, &ctx()), None);
    }
}
