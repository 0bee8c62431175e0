//! Slider manifest loaded from YAML.
//!
//! ```yaml
//! name: basic-demo
//! sliders:
//!   - id: basic
//!     value: 50
//!     min: 0
//!     max: 100
//!     step: 25
//! ```

use notch_core::{ConfigError, SliderConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::ParseError;

/// A set of named slider configurations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Optional manifest name
    #[serde(default)]
    pub name: Option<String>,
    /// Slider entries, in declaration order
    #[serde(default)]
    pub sliders: Vec<SliderSpec>,
}

/// One slider entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSpec {
    /// Unique id
    #[serde(default)]
    pub id: String,
    /// Initial value; defaults to `min`
    #[serde(default)]
    pub value: Option<f64>,
    /// Range, step and flags
    #[serde(flatten)]
    pub config: SliderConfig,
}

impl SliderSpec {
    /// Initial value to construct the slider with.
    #[must_use]
    pub fn initial_value(&self) -> f64 {
        self.value.unwrap_or(self.config.min)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.config.validate()?;
        match self.value {
            Some(v) if !v.is_finite() => Err(ConfigError::InvalidValue(v)),
            _ => Ok(()),
        }
    }
}

impl Manifest {
    /// Parse and validate a manifest.
    pub fn from_yaml(yaml: &str) -> Result<Self, ParseError> {
        let manifest: Self = serde_yaml_ng::from_str(yaml)?;
        manifest.validate()?;
        log::debug!(
            "loaded slider manifest {:?} with {} slider(s)",
            manifest.name,
            manifest.sliders.len()
        );
        Ok(manifest)
    }

    /// Serialize back to YAML.
    pub fn to_yaml(&self) -> Result<String, ParseError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check ids are present and unique and every configuration is usable.
    pub fn validate(&self) -> Result<(), ParseError> {
        let mut seen = HashSet::new();
        for spec in &self.sliders {
            if spec.id.is_empty() {
                return Err(ParseError::MissingField("id".to_string()));
            }
            if !seen.insert(spec.id.as_str()) {
                return Err(ParseError::DuplicateId(spec.id.clone()));
            }
            spec.validate().map_err(|source| ParseError::Config {
                id: spec.id.clone(),
                source,
            })?;
        }
        Ok(())
    }

    /// Look up a slider entry by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&SliderSpec> {
        self.sliders.iter().find(|spec| spec.id == id)
    }
}
