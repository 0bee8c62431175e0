//! Notch: a range-slider interaction engine.
//!
//! Converts pointer and keyboard input into a clamped, tick-snapped value,
//! keeps the handle position consistent with that value, and enforces
//! disabled/readonly semantics.
//!
//! ```
//! use notch::widgets::{Slider, SliderChanged};
//! use notch::{Event, Point, Rect, SliderConfig, Widget};
//!
//! let mut slider = Slider::try_new(SliderConfig::new(0.0, 100.0).step(25.0), 50.0).unwrap();
//! slider.layout(Rect::new(0.0, 0.0, 500.0, 20.0));
//!
//! let msg = slider.event(&Event::Click { position: Point::new(400.0, 10.0) });
//! let changed = msg.and_then(|m| m.downcast::<SliderChanged>().ok()).unwrap();
//! assert_eq!(changed.value, 75.0);
//! assert_eq!(slider.view().handle_style(), "left: 75%");
//! ```

pub use notch_core::*;
pub use notch_widgets as widgets;
pub use notch_yaml as yaml;

/// Load a slider from a YAML manifest by id.
pub fn slider_from_yaml(yaml: &str, id: &str) -> Result<Option<widgets::Slider>, yaml::ParseError> {
    let manifest = yaml::Manifest::from_yaml(yaml)?;
    manifest
        .get(id)
        .map(|spec| {
            widgets::Slider::try_new(spec.config, spec.initial_value())
                .map(|slider| slider.with_test_id(spec.id.clone()))
                .map_err(|source| yaml::ParseError::Config {
                    id: spec.id.clone(),
                    source,
                })
        })
        .transpose()
}
