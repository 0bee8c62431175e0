//! Slider widget for value selection.
//!
//! Input flows through a fixed pipeline: [`StateGate`] decides whether the
//! event may act, [`InputController`] turns it into an [`Action`], the
//! [`ValueModel`] clamps and snaps, and [`SliderView`] is derived fresh from
//! the result.

use notch_core::{
    widget::LayoutResult, AccessibleRole, ConfigError, Event, InteractiveState, PositionMapper,
    Rect, SliderConfig, TypeId, ValueModel, Widget,
};
use std::any::Any;

use crate::controller::{Action, DragState, InputContext, InputController};
use crate::gate::StateGate;
use crate::presentation::{format_number, SliderView};

/// Default handle width in pixels.
pub const DEFAULT_HANDLE_WIDTH: f32 = 16.0;

/// Message emitted when slider value changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderChanged {
    /// The new value
    pub value: f64,
}

/// Result of routing one event through the slider.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EventOutcome {
    /// The event mapped to a value operation, even one that left the value
    /// where it was (`Home` at min). Hosts stop propagation of consumed
    /// events; an unbound key is never consumed.
    pub consumed: bool,
    /// Set when the value moved
    pub changed: Option<SliderChanged>,
}

/// Custom display formatting for the value.
pub type ValueFormatter = Box<dyn Fn(f64) -> String + Send + Sync>;

/// Slider widget for selecting a value from a range.
pub struct Slider {
    config: SliderConfig,
    model: ValueModel,
    mapper: PositionMapper,
    gate: StateGate,
    controller: InputController,
    /// Track bounds from the last layout
    bounds: Rect,
    handle_width: f32,
    formatter: Option<ValueFormatter>,
    test_id_value: Option<String>,
    accessible_name_value: Option<String>,
}

impl std::fmt::Debug for Slider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slider")
            .field("config", &self.config)
            .field("value", &self.model.value())
            .field("drag", &self.controller.drag_state())
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}

impl Slider {
    /// Create a slider, rejecting configurations that cannot work.
    pub fn try_new(config: SliderConfig, value: f64) -> Result<Self, ConfigError> {
        let model = ValueModel::new(&config, value)?;
        let mapper = PositionMapper::new(&config)?;
        Ok(Self {
            config,
            model,
            mapper,
            gate: StateGate::from_config(&config),
            controller: InputController::new(),
            bounds: Rect::default(),
            handle_width: DEFAULT_HANDLE_WIDTH,
            formatter: None,
            test_id_value: None,
            accessible_name_value: None,
        })
    }

    /// Set the handle width used for hit-testing.
    #[must_use]
    pub fn handle_width(mut self, width: f32) -> Self {
        self.handle_width = width.max(0.0);
        self
    }

    /// Install a display formatter for the value text.
    #[must_use]
    pub fn with_formatter(mut self, formatter: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        self.formatter = Some(Box::new(formatter));
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Set accessible name.
    #[must_use]
    pub fn with_accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Get current value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.model.value()
    }

    /// Get the active configuration.
    #[must_use]
    pub const fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Current drag session state.
    #[must_use]
    pub const fn drag_state(&self) -> DragState {
        self.controller.drag_state()
    }

    /// Whether the handle holds keyboard focus.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.controller.is_focused()
    }

    /// Display text for the current value.
    #[must_use]
    pub fn text(&self) -> String {
        let value = self.model.value();
        self.formatter
            .as_ref()
            .map_or_else(|| format_number(value), |format| format(value))
    }

    /// Derived view state for the current value.
    #[must_use]
    pub fn view(&self) -> SliderView {
        SliderView::derive(&self.model, &self.mapper, self.text(), &self.gate)
    }

    /// Handle bounds, centred on the current value along the track.
    #[must_use]
    pub fn handle_bounds(&self) -> Rect {
        let center = self.mapper.value_to_x(self.model.value(), self.bounds);
        Rect::new(
            center - self.handle_width / 2.0,
            self.bounds.y,
            self.handle_width,
            self.bounds.height,
        )
    }

    /// Replace the configuration.
    ///
    /// The new configuration is validated first; on success the current
    /// value is re-clamped and re-snapped onto the new grid, and a drag in
    /// progress is terminated if mutation is no longer allowed. On failure
    /// nothing changes.
    pub fn set_config(&mut self, config: SliderConfig) -> Result<(), ConfigError> {
        if let Err(err) = config.validate() {
            log::warn!("rejected slider config {config:?}: {err}");
            return Err(err);
        }
        if !self.config.same_grid(&config) {
            let mapper = PositionMapper::new(&config)?;
            let before = self.model.value();
            let after = self.model.reconfigure(&config)?;
            self.mapper = mapper;
            if before != after {
                log::debug!("slider value {before} -> {after} after reconfigure");
            }
        }
        self.config = config;
        self.sync_gate();
        Ok(())
    }

    /// Toggle the disabled flag.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
        self.sync_gate();
    }

    /// Toggle the readonly flag.
    pub fn set_readonly(&mut self, readonly: bool) {
        self.config.readonly = readonly;
        self.sync_gate();
    }

    fn sync_gate(&mut self) {
        let change = self.gate.update(&self.config);
        if change.revoked_mutation || change.revoked_focus {
            self.controller.cancel();
        }
        if change.revoked_focus {
            self.controller.blur();
        }
        log::trace!("slider gate now {:?}", self.gate.state());
    }

    /// Route `event` through gate, controller and model.
    ///
    /// [`Widget::event`] reports only the change message; this also tells
    /// the host whether the event was consumed.
    pub fn dispatch(&mut self, event: &Event) -> EventOutcome {
        if let Err(veto) = self.gate.admit(event) {
            log::debug!("slider is {veto}, ignoring {event:?}");
            return EventOutcome::default();
        }

        let ctx = self.input_context();
        let Some(action) = self.controller.handle(event, &ctx) else {
            return EventOutcome::default();
        };

        let old_value = self.model.value();
        let new_value = self.apply(action);
        if new_value == old_value {
            return EventOutcome {
                consumed: true,
                changed: None,
            };
        }
        log::debug!("slider value {old_value} -> {new_value} via {action:?}");
        EventOutcome {
            consumed: true,
            changed: Some(SliderChanged { value: new_value }),
        }
    }

    fn input_context(&self) -> InputContext {
        InputContext {
            track: self.bounds,
            handle: self.handle_bounds(),
            mapper: self.mapper,
            page_ticks: self.config.page_ticks,
            mutable: self.gate.state().allows_mutation(),
        }
    }

    fn apply(&mut self, action: Action) -> f64 {
        match action {
            Action::SetValue(raw) => self.model.set_value(raw),
            Action::StepBy(ticks) => self.model.step_by(ticks),
            Action::JumpToMin => self.model.jump_to_min(),
            Action::JumpToMax => self.model.jump_to_max(),
        }
    }
}

impl Widget for Slider {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        self.dispatch(event)
            .changed
            .map(|changed| Box::new(changed) as Box<dyn Any + Send>)
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn is_interactive(&self) -> bool {
        self.gate.state().is_interactive()
    }

    fn is_focusable(&self) -> bool {
        self.gate.state().is_interactive()
    }

    fn interactive_state(&self) -> InteractiveState {
        self.gate.state()
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Slider
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
