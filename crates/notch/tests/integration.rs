//! Integration tests for the Notch slider engine.

use notch::widgets::{Slider, SliderChanged};
use notch::{Event, Key, Point, PointerId, PointerType, Rect, SliderConfig, Widget};
use proptest::prelude::*;

const TRACK: Rect = Rect::new(0.0, 0.0, 500.0, 20.0);

fn laid_out(config: SliderConfig, value: f64) -> Slider {
    let mut slider = Slider::try_new(config, value).unwrap();
    slider.layout(TRACK);
    slider
}

fn changed(slider: &mut Slider, event: Event) -> Option<f64> {
    slider
        .event(&event)
        .and_then(|m| m.downcast::<SliderChanged>().ok())
        .map(|m| m.value)
}

#[test]
fn test_click_step_one_lands_on_exact_value() {
    let mut slider = laid_out(SliderConfig::new(0.0, 100.0), 50.0);
    let value = changed(
        &mut slider,
        Event::Click {
            position: Point::new(400.0, 10.0),
        },
    );
    assert_eq!(value, Some(80.0));
}

#[test]
fn test_click_step_25_snaps() {
    let mut slider = laid_out(SliderConfig::new(0.0, 100.0).step(25.0), 50.0);
    let value = changed(
        &mut slider,
        Event::Click {
            position: Point::new(400.0, 10.0),
        },
    );
    assert_eq!(value, Some(75.0));
}

#[test]
fn test_touch_drag_with_two_pointers() {
    let mut slider = laid_out(SliderConfig::new(0.0, 100.0).step(10.0), 50.0);
    let finger = PointerId(7);
    slider.event(&Event::PointerDown {
        pointer_id: finger,
        pointer_type: PointerType::Touch,
        position: Point::new(250.0, 10.0),
        button: None,
    });

    // A second pointer does not steal the drag.
    let stray = changed(
        &mut slider,
        Event::PointerMove {
            pointer_id: PointerId(8),
            position: Point::new(0.0, 10.0),
        },
    );
    assert_eq!(stray, None);

    let moved = changed(
        &mut slider,
        Event::PointerMove {
            pointer_id: finger,
            position: Point::new(100.0, 10.0),
        },
    );
    assert_eq!(moved, Some(20.0));

    slider.event(&Event::PointerCancel { pointer_id: finger });
    assert!(!slider.drag_state().is_dragging());
    assert_eq!(slider.value(), 20.0);
}

#[test]
fn test_page_keys_use_configured_jump() {
    let mut slider = laid_out(SliderConfig::new(0.0, 100.0).page_ticks(5), 50.0);
    slider.event(&Event::FocusIn);
    assert_eq!(changed(&mut slider, Event::KeyDown { key: Key::PageUp }), Some(55.0));
    assert_eq!(
        changed(&mut slider, Event::KeyDown { key: Key::PageDown }),
        Some(50.0)
    );
}

#[test]
fn test_irregular_last_tick_is_reachable() {
    let mut slider = laid_out(SliderConfig::new(0.0, 10.0).step(3.0), 9.0);
    slider.event(&Event::FocusIn);
    assert_eq!(changed(&mut slider, Event::KeyDown { key: Key::Right }), Some(10.0));
    assert_eq!(changed(&mut slider, Event::KeyDown { key: Key::Right }), None);
    assert_eq!(changed(&mut slider, Event::KeyDown { key: Key::Left }), Some(9.0));
}

#[test]
fn test_fractional_step_has_no_float_noise() {
    let mut slider = laid_out(SliderConfig::new(0.0, 1.0).step(0.1), 0.2);
    slider.event(&Event::FocusIn);
    assert_eq!(changed(&mut slider, Event::KeyDown { key: Key::Up }), Some(0.3));
    assert_eq!(slider.view().state_map().value.as_deref(), Some("0.3"));
}

#[test]
fn test_formatter_drives_text() {
    let slider = Slider::try_new(SliderConfig::default(), 42.0)
        .unwrap()
        .with_formatter(|v| format!("{v} dB"));
    assert_eq!(slider.view().state_map().text.as_deref(), Some("42 dB"));
    assert_eq!(slider.view().state_map().value.as_deref(), Some("42"));
}

#[test]
fn test_slider_from_yaml() {
    let yaml = "sliders:\n  - id: volume\n    value: 30\n    step: 10\n    readonly: true\n";
    let slider = notch::slider_from_yaml(yaml, "volume").unwrap().unwrap();
    assert_eq!(slider.value(), 30.0);
    assert_eq!(slider.test_id(), Some("volume"));
    assert_eq!(
        slider.view().state_map().readonly.as_deref(),
        Some("true")
    );
    assert!(notch::slider_from_yaml(yaml, "other").unwrap().is_none());
}

#[test]
fn test_slider_from_yaml_rejects_bad_config() {
    let yaml = "sliders:\n  - id: broken\n    min: 5\n    max: 5\n";
    assert!(notch::slider_from_yaml(yaml, "broken").is_err());
}

#[test]
fn test_view_serializes() {
    let slider = laid_out(SliderConfig::default(), 50.0);
    let json = serde_json::to_value(slider.view()).unwrap();
    assert_eq!(json["percent"], 50.0);
    assert_eq!(json["labels"]["min_visible"], true);
}

#[test]
fn test_harness_drives_facade_slider() {
    let slider = laid_out(SliderConfig::new(0.0, 100.0).step(25.0), 50.0);
    let mut harness = notch_test::Harness::new(slider);
    harness.click_at_fraction(notch_test::SELECTOR_SLIDER, 0.8);
    assert_eq!(harness.state().value.as_deref(), Some("75"));
}

proptest! {
    #[test]
    fn prop_any_click_yields_value_on_grid(x in -100.0f32..700.0) {
        let mut slider = laid_out(SliderConfig::new(0.0, 100.0).step(25.0), 50.0);
        slider.event(&Event::Click { position: Point::new(x, 10.0) });
        let v = slider.value();
        prop_assert!((0.0..=100.0).contains(&v));
        prop_assert_eq!(v % 25.0, 0.0);
    }
}
