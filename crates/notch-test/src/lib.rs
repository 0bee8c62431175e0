//! Testing harness for Notch sliders.
//!
//! Drives a [`notch_widgets::Slider`] the way a browser test drives the
//! rendered control: parts are addressed by attribute selector, pointer
//! actions land relative to an element's bounding box, and state is read
//! back as attributes.
//!
//! ```
//! use notch_test::{Harness, BASIC_DEMO_YAML, SELECTOR_SLIDER};
//!
//! let mut harness = Harness::from_manifest(BASIC_DEMO_YAML, "basic").unwrap();
//! harness.click_at_fraction(SELECTOR_SLIDER, 0.8);
//! assert_eq!(harness.state().value.as_deref(), Some("75"));
//! ```

mod harness;
mod selector;

pub use harness::{Harness, HarnessError, DEFAULT_TRACK};
pub use selector::{
    Selector, SelectorError, SliderPart, SELECTOR_MAX_LABEL, SELECTOR_MIN_LABEL, SELECTOR_SLIDER,
    SELECTOR_SLIDER_HANDLE,
};

/// Manifest for the basic demo page: a 0..100 slider on a 25-unit grid,
/// starting at 50.
pub const BASIC_DEMO_YAML: &str = "\
name: demo
sliders:
  - id: basic
    value: 50
    min: 0
    max: 100
    step: 25
";
