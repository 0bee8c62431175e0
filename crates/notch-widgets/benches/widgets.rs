//! Benchmark tests for slider operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use notch_core::{Event, Key, Rect, SliderConfig, ValueModel, Widget};
use notch_widgets::Slider;

fn bench_value_snap(c: &mut Criterion) {
    let model = ValueModel::new(&SliderConfig::new(0.0, 1000.0).step(3.0), 0.0)
        .expect("valid config");

    c.bench_function("value_model_snap", |b| {
        b.iter(|| model.snap(black_box(517.3)))
    });
}

fn bench_slider_click(c: &mut Criterion) {
    let mut slider =
        Slider::try_new(SliderConfig::new(0.0, 100.0).step(25.0), 50.0).expect("valid config");
    slider.layout(Rect::new(0.0, 0.0, 500.0, 20.0));
    let track = slider.bounds();

    c.bench_function("slider_click_event", |b| {
        b.iter(|| {
            let position = track.point_at(black_box(0.8), 0.5);
            slider.event(&Event::Click { position })
        })
    });
}

fn bench_slider_drag(c: &mut Criterion) {
    let mut slider = Slider::try_new(SliderConfig::default(), 50.0).expect("valid config");
    slider.layout(Rect::new(0.0, 0.0, 500.0, 20.0));
    let start = slider.handle_bounds().center();
    slider.event(&Event::mouse_down(start));
    let track = slider.bounds();

    c.bench_function("slider_drag_move", |b| {
        let mut fraction = 0.0f32;
        b.iter(|| {
            fraction = (fraction + 0.01) % 1.0;
            slider.event(&Event::mouse_move(track.point_at(black_box(fraction), 0.5)))
        })
    });
}

fn bench_slider_keys(c: &mut Criterion) {
    let mut slider = Slider::try_new(SliderConfig::default(), 50.0).expect("valid config");
    slider.event(&Event::FocusIn);

    c.bench_function("slider_key_home_end", |b| {
        b.iter(|| {
            slider.event(&Event::KeyDown { key: Key::Home });
            slider.event(&Event::KeyDown { key: Key::End })
        })
    });
}

fn bench_slider_view(c: &mut Criterion) {
    let slider = Slider::try_new(SliderConfig::default(), 42.0).expect("valid config");

    c.bench_function("slider_view_state_map", |b| {
        b.iter(|| black_box(slider.view()).state_map())
    });
}

criterion_group!(
    benches,
    bench_value_snap,
    bench_slider_click,
    bench_slider_drag,
    bench_slider_keys,
    bench_slider_view
);
criterion_main!(benches);
