//! Presentation sync: view state derived from the current value.
//!
//! Nothing here is stored between value changes; a [`SliderView`] is
//! recomputed from the model each time it is asked for.

use notch_core::{InteractiveState, PositionMapper, ValueModel};
use serde::{Deserialize, Serialize};

use crate::gate::StateGate;

/// Distance (in percent of the track) at which the handle's value label
/// collides with a boundary label.
pub const LABEL_PROXIMITY_PERCENT: f64 = 10.0;

/// Visibility of the min and max boundary labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelVisibility {
    /// Min label shown
    pub min_visible: bool,
    /// Max label shown
    pub max_visible: bool,
}

impl LabelVisibility {
    /// Visibility for a handle at `percent`.
    #[must_use]
    pub fn at(percent: f64) -> Self {
        Self {
            min_visible: percent >= LABEL_PROXIMITY_PERCENT,
            max_visible: percent <= 100.0 - LABEL_PROXIMITY_PERCENT,
        }
    }
}

/// Attribute-style state of the control, as a test harness reads it.
///
/// Flags follow the attribute-present convention: `Some("true")` when set,
/// `None` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderState {
    /// Current value
    pub value: Option<String>,
    /// Lower bound
    pub min: Option<String>,
    /// Upper bound
    pub max: Option<String>,
    /// Display text
    pub text: Option<String>,
    /// Readonly flag
    pub readonly: Option<String>,
    /// Disabled flag
    pub disabled: Option<String>,
}

impl SliderState {
    /// Ordered `(name, value)` pairs.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, Option<&str>); 6] {
        [
            ("value", self.value.as_deref()),
            ("min", self.min.as_deref()),
            ("max", self.max.as_deref()),
            ("text", self.text.as_deref()),
            ("readonly", self.readonly.as_deref()),
            ("disabled", self.disabled.as_deref()),
        ]
    }

    /// Look up one attribute by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries()
            .into_iter()
            .find(|(key, _)| *key == name)
            .and_then(|(_, value)| value)
    }
}

/// Everything a renderer needs to draw the slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderView {
    /// Current value
    pub value: f64,
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
    /// Display text for the value
    pub text: String,
    /// Handle offset along the track, in `[0, 100]`
    pub percent: f64,
    /// Boundary label visibility
    pub labels: LabelVisibility,
    /// Effective interaction state
    pub state: InteractiveState,
    /// Readonly flag as configured
    pub readonly: bool,
    /// Disabled flag as configured
    pub disabled: bool,
}

impl SliderView {
    /// Derive the view from the model.
    #[must_use]
    pub fn derive(
        model: &ValueModel,
        mapper: &PositionMapper,
        text: String,
        gate: &StateGate,
    ) -> Self {
        let percent = mapper.value_to_percent(model.value());
        Self {
            value: model.value(),
            min: model.min(),
            max: model.max(),
            text,
            percent,
            labels: LabelVisibility::at(percent),
            state: gate.state(),
            readonly: gate.readonly(),
            disabled: gate.disabled(),
        }
    }

    /// Inline style positioning the handle, e.g. `left: 75%`.
    #[must_use]
    pub fn handle_style(&self) -> String {
        format!("left: {}%", format_number(self.percent))
    }

    /// Attribute-style state map.
    #[must_use]
    pub fn state_map(&self) -> SliderState {
        let flag = |set: bool| set.then(|| "true".to_string());
        SliderState {
            value: Some(format_number(self.value)),
            min: Some(format_number(self.min)),
            max: Some(format_number(self.max)),
            text: Some(self.text.clone()),
            readonly: flag(self.readonly),
            disabled: flag(self.disabled),
        }
    }
}

/// Natural decimal rendering of a number: `75`, `0.5`, `-3.25`.
#[must_use]
pub fn format_number(v: f64) -> String {
    // Avoid "-0".
    let v = if v == 0.0 { 0.0 } else { v };
    format!("{v}")
}
