//! Slider configuration and its validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of ticks moved by `PageUp`/`PageDown`.
pub const DEFAULT_PAGE_TICKS: u32 = 10;

/// Errors raised when a configuration cannot describe a usable slider.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// `min` must be strictly below `max`, both finite.
    #[error("invalid range: min {min} must be finite and less than max {max}")]
    InvalidRange {
        /// Configured minimum
        min: f64,
        /// Configured maximum
        max: f64,
    },

    /// `step` must be finite and positive.
    #[error("invalid step {0}: must be finite and greater than zero")]
    InvalidStep(f64),

    /// A page jump has to move at least one tick.
    #[error("page jump must move at least one tick")]
    InvalidPageTicks,

    /// The initial value must be a finite number.
    #[error("invalid value {0}: must be finite")]
    InvalidValue(f64),
}

/// Host-supplied slider configuration.
///
/// Replaced wholesale at runtime; every replacement goes through
/// [`SliderConfig::validate`] before it is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Lowest selectable value
    pub min: f64,
    /// Highest selectable value
    pub max: f64,
    /// Tick granularity
    pub step: f64,
    /// Visibly inert: rejects interaction and is not focusable
    pub disabled: bool,
    /// Inert but still presented as interactive
    pub readonly: bool,
    /// Ticks moved by a page jump
    pub page_ticks: u32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
            disabled: false,
            readonly: false,
            page_ticks: DEFAULT_PAGE_TICKS,
        }
    }
}

impl SliderConfig {
    /// Create a configuration spanning `min..=max` with unit step.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            ..Self::default()
        }
    }

    /// Set the tick granularity.
    #[must_use]
    pub const fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Set disabled state.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set readonly state.
    #[must_use]
    pub const fn readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }

    /// Set the page jump size in ticks.
    #[must_use]
    pub const fn page_ticks(mut self, ticks: u32) -> Self {
        self.page_ticks = ticks;
        self
    }

    /// Check the configuration describes a usable slider.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min >= self.max {
            return Err(ConfigError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(ConfigError::InvalidStep(self.step));
        }
        if self.page_ticks == 0 {
            return Err(ConfigError::InvalidPageTicks);
        }
        Ok(())
    }

    /// Whether `other` changes the value grid (and so needs a re-snap).
    #[must_use]
    pub fn same_grid(&self, other: &Self) -> bool {
        self.min == other.min && self.max == other.max && self.step == other.step
    }
}
