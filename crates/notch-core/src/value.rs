//! Value model: clamping and tick snapping.
//!
//! The grid is `{min + k * step}` intersected with `[min, max]`, plus `max`
//! itself when the range is not a whole number of steps. Every mutation
//! leaves the value on that grid.

use crate::config::{ConfigError, SliderConfig};

/// Decimal places above which snapped values are left unrounded.
const MAX_PRECISION: usize = 12;

/// Slack when deciding whether `max` falls on a regular tick.
const GRID_EPSILON: f64 = 1e-9;

/// Owned numeric state of a slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueModel {
    value: f64,
    min: f64,
    max: f64,
    step: f64,
    /// Decimal places implied by `min` and `step`
    precision: i32,
}

impl ValueModel {
    /// Create a model, clamping and snapping `initial` onto the grid.
    pub fn new(config: &SliderConfig, initial: f64) -> Result<Self, ConfigError> {
        config.validate()?;
        if !initial.is_finite() {
            return Err(ConfigError::InvalidValue(initial));
        }
        let mut model = Self {
            value: config.min,
            min: config.min,
            max: config.max,
            step: config.step,
            precision: grid_precision(config.min, config.step),
        };
        model.value = model.snap(initial);
        Ok(model)
    }

    /// Current value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Lower bound.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Tick granularity.
    #[must_use]
    pub const fn step(&self) -> f64 {
        self.step
    }

    /// Clamp `raw` into range and snap it to the nearest tick.
    ///
    /// Exact ties resolve toward `min`. NaN snaps to the current value.
    #[must_use]
    pub fn snap(&self, raw: f64) -> f64 {
        if raw.is_nan() {
            return self.value;
        }
        let clamped = raw.clamp(self.min, self.max);
        let last = self.last_regular_tick();

        // Between the last regular tick and an irregular max.
        if clamped > last {
            let nearest = if clamped - last > self.max - clamped {
                self.max
            } else {
                last
            };
            return nearest.clamp(self.min, self.max);
        }

        let k = round_half_down((clamped - self.min) / self.step);
        self.tick(k).clamp(self.min, self.max)
    }

    /// Apply `raw` through clamp and snap; returns the new value.
    pub fn set_value(&mut self, raw: f64) -> f64 {
        self.value = self.snap(raw);
        self.value
    }

    /// Move by `delta` ticks, then clamp.
    pub fn step_by(&mut self, delta: i32) -> f64 {
        if delta == 0 {
            return self.value;
        }
        let last = self.last_regular_tick();
        // Stepping down from an irregular max lands on the last regular tick.
        let base = if delta < 0 && self.value > last {
            last + self.step
        } else {
            self.value
        };
        self.set_value(f64::from(delta).mul_add(self.step, base))
    }

    /// Set the value to `min`.
    pub fn jump_to_min(&mut self) -> f64 {
        self.value = self.min;
        self.value
    }

    /// Set the value to `max`.
    pub fn jump_to_max(&mut self) -> f64 {
        self.value = self.max;
        self.value
    }

    /// Adopt a new range/step and re-validate the current value against it.
    pub fn reconfigure(&mut self, config: &SliderConfig) -> Result<f64, ConfigError> {
        config.validate()?;
        self.min = config.min;
        self.max = config.max;
        self.step = config.step;
        self.precision = grid_precision(config.min, config.step);
        Ok(self.set_value(self.value))
    }

    /// Whether `v` is a reachable value of this model.
    #[must_use]
    pub fn is_on_grid(&self, v: f64) -> bool {
        v >= self.min && v <= self.max && self.snap(v) == v
    }

    /// Highest tick of the form `min + k * step` not above `max`.
    #[must_use]
    pub fn last_regular_tick(&self) -> f64 {
        let n = ((self.max - self.min) / self.step + GRID_EPSILON).floor();
        let tick = self.tick(n);
        let tick = if tick > self.max {
            self.tick(n - 1.0)
        } else {
            tick
        };
        tick.clamp(self.min, self.max)
    }

    fn tick(&self, k: f64) -> f64 {
        // Rounding a many-digit min can land below it.
        if k <= 0.0 {
            return self.min;
        }
        round_to(k.mul_add(self.step, self.min), self.precision)
    }
}

/// Nearest integer, exact halves toward negative infinity.
fn round_half_down(x: f64) -> f64 {
    (x - 0.5).ceil()
}

fn round_to(v: f64, precision: i32) -> f64 {
    if precision < 0 {
        return v;
    }
    let factor = 10f64.powi(precision);
    (v * factor).round() / factor
}

/// Decimal places needed to represent ticks exactly, or -1 when too many.
fn grid_precision(min: f64, step: f64) -> i32 {
    let places = decimal_places(min).max(decimal_places(step));
    if places > MAX_PRECISION {
        -1
    } else {
        places as i32
    }
}

fn decimal_places(v: f64) -> usize {
    let text = v.to_string();
    text.split_once('.').map_or(0, |(_, frac)| frac.len())
}
