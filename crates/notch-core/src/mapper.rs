//! Position mapper: value <-> percentage <-> pixel offset along the track.

use crate::config::{ConfigError, SliderConfig};
use crate::geometry::{Point, Rect};

/// Linear mapping between `[min, max]` and `[0, 100]` percent.
///
/// Only constructible from a validated configuration, so `max > min` holds
/// and the inverse is always defined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionMapper {
    min: f64,
    max: f64,
}

impl PositionMapper {
    /// Build a mapper for the configuration's range.
    pub fn new(config: &SliderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            min: config.min,
            max: config.max,
        })
    }

    fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Percentage of the track covered at value `v`, in `[0, 100]`.
    #[must_use]
    pub fn value_to_percent(&self, v: f64) -> f64 {
        ((v - self.min) / self.span() * 100.0).clamp(0.0, 100.0)
    }

    /// Raw (unsnapped) value at percentage `p`; `p` is clamped to `[0, 100]`.
    #[must_use]
    pub fn percent_to_value(&self, p: f64) -> f64 {
        let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 100.0) };
        (p / 100.0).mul_add(self.span(), self.min)
    }

    /// Percentage for a pixel offset into a track of the given length.
    ///
    /// Offsets outside the track clamp to 0% or 100%. A track with no
    /// positive length maps everything to 0%.
    #[must_use]
    pub fn offset_to_percent(offset_px: f32, track_length_px: f32) -> f64 {
        if !track_length_px.is_finite() || track_length_px <= 0.0 || offset_px.is_nan() {
            return 0.0;
        }
        (f64::from(offset_px) / f64::from(track_length_px)).clamp(0.0, 1.0) * 100.0
    }

    /// Raw value for a pixel offset into a track of the given length.
    #[must_use]
    pub fn offset_to_value(&self, offset_px: f32, track_length_px: f32) -> f64 {
        self.percent_to_value(Self::offset_to_percent(offset_px, track_length_px))
    }

    /// Raw value for a screen position over a horizontal track.
    #[must_use]
    pub fn point_to_value(&self, point: Point, track: Rect) -> f64 {
        self.offset_to_value(track.offset_x(point.x), track.width)
    }

    /// Screen x coordinate of value `v` on a horizontal track.
    #[must_use]
    pub fn value_to_x(&self, v: f64, track: Rect) -> f32 {
        let fraction = (self.value_to_percent(v) / 100.0) as f32;
        fraction.mul_add(track.width, track.x)
    }
}
