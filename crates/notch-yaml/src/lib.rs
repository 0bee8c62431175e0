//! YAML manifest parser for Notch slider configurations.

mod error;
mod manifest;

pub use error::ParseError;
pub use manifest::{Manifest, SliderSpec};
