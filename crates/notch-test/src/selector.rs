//! Attribute selectors for addressing the parts of a slider.
//!
//! Supports:
//! - `"[data-part='handle']"` - a slider part
//! - `"[data-testid='volume']"` - the slider by test ID
//! - `"[aria-label='Volume']"` - the slider by accessible name

use notch_core::Widget;
use thiserror::Error;

/// Selector for the track (the slider element itself).
pub const SELECTOR_SLIDER: &str = "[data-part='slider']";
/// Selector for the draggable handle.
pub const SELECTOR_SLIDER_HANDLE: &str = "[data-part='handle']";
/// Selector for the min boundary label.
pub const SELECTOR_MIN_LABEL: &str = "[data-part='min-label']";
/// Selector for the max boundary label.
pub const SELECTOR_MAX_LABEL: &str = "[data-part='max-label']";

/// Addressable pieces of a rendered slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliderPart {
    /// The track / slider element
    Slider,
    /// The handle
    Handle,
    /// Label showing the lower bound
    MinLabel,
    /// Label showing the upper bound
    MaxLabel,
}

impl SliderPart {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "slider" => Some(Self::Slider),
            "handle" => Some(Self::Handle),
            "min-label" => Some(Self::MinLabel),
            "max-label" => Some(Self::MaxLabel),
            _ => None,
        }
    }
}

/// Selector parse failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// Not of the form `[name='value']`
    #[error("malformed selector: {0}")]
    Malformed(String),
    /// Attribute name not understood
    #[error("unsupported attribute: {0}")]
    UnsupportedAttribute(String),
    /// `data-part` value not understood
    #[error("unknown slider part: {0}")]
    UnknownPart(String),
}

/// Parsed selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Match a slider part
    Part(SliderPart),
    /// Match by test ID
    TestId(String),
    /// Match by accessible name
    AriaLabel(String),
}

impl Selector {
    /// Parse a selector string.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let malformed = || SelectorError::Malformed(input.to_string());
        let inner = input
            .trim()
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(malformed)?;
        let (name, raw_value) = inner.split_once('=').ok_or_else(malformed)?;
        let value = unquote(raw_value.trim()).ok_or_else(malformed)?;

        match name.trim() {
            "data-part" => SliderPart::from_name(value)
                .map(Self::Part)
                .ok_or_else(|| SelectorError::UnknownPart(value.to_string())),
            "data-testid" => Ok(Self::TestId(value.to_string())),
            "aria-label" => Ok(Self::AriaLabel(value.to_string())),
            other => Err(SelectorError::UnsupportedAttribute(other.to_string())),
        }
    }

    /// Resolve against a widget: which part of it, if any, is selected.
    #[must_use]
    pub fn resolve(&self, widget: &dyn Widget) -> Option<SliderPart> {
        match self {
            Self::Part(part) => Some(*part),
            Self::TestId(id) => (widget.test_id() == Some(id.as_str())).then_some(SliderPart::Slider),
            Self::AriaLabel(name) => {
                (widget.accessible_name() == Some(name.as_str())).then_some(SliderPart::Slider)
            }
        }
    }
}

fn unquote(value: &str) -> Option<&str> {
    ['\'', '"'].into_iter().find_map(|quote| {
        value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
    })
}
