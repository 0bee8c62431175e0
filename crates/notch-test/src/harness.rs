//! Test harness for driving a slider headlessly.
//!
//! Mirrors the way a browser test drives the rendered control: elements are
//! addressed by selector, pointer actions land at positions relative to an
//! element's bounding box, and state is read back as attributes.

use notch_core::{ConfigError, Event, Key, Point, Rect, Widget};
use notch_widgets::{Slider, SliderChanged, SliderState, SliderView};
use notch_yaml::{Manifest, ParseError};
use std::collections::VecDeque;
use thiserror::Error;

use crate::selector::{Selector, SliderPart};

/// Track bounds the harness lays sliders out into.
pub const DEFAULT_TRACK: Rect = Rect::new(100.0, 200.0, 500.0, 24.0);

/// Width of the boundary labels.
const LABEL_WIDTH: f32 = 32.0;

/// Errors building a harness.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Manifest failed to parse
    #[error(transparent)]
    Manifest(#[from] ParseError),
    /// Slider rejected its configuration
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Manifest has no slider with this id
    #[error("no slider '{0}' in manifest")]
    UnknownSlider(String),
}

/// Test harness owning one slider.
#[derive(Debug)]
pub struct Harness {
    slider: Slider,
    event_queue: VecDeque<Event>,
    messages: Vec<SliderChanged>,
}

impl Harness {
    /// Create a harness laying the slider out on [`DEFAULT_TRACK`].
    pub fn new(slider: Slider) -> Self {
        Self::with_track(slider, DEFAULT_TRACK)
    }

    /// Create a harness with explicit track bounds.
    pub fn with_track(mut slider: Slider, track: Rect) -> Self {
        slider.layout(track);
        Self {
            slider,
            event_queue: VecDeque::new(),
            messages: Vec::new(),
        }
    }

    /// Build the slider named `id` from a YAML manifest.
    pub fn from_manifest(yaml: &str, id: &str) -> Result<Self, HarnessError> {
        let manifest = Manifest::from_yaml(yaml)?;
        let spec = manifest
            .get(id)
            .ok_or_else(|| HarnessError::UnknownSlider(id.to_string()))?;
        let slider = Slider::try_new(spec.config, spec.initial_value())?.with_test_id(id);
        Ok(Self::new(slider))
    }

    /// The slider under test.
    pub const fn slider(&self) -> &Slider {
        &self.slider
    }

    /// Mutable access for host-side changes.
    pub fn slider_mut(&mut self) -> &mut Slider {
        &mut self.slider
    }

    /// Change messages emitted so far.
    pub fn messages(&self) -> &[SliderChanged] {
        &self.messages
    }

    // === Queries ===

    fn part(&self, selector: &str) -> Option<SliderPart> {
        match Selector::parse(selector) {
            Ok(sel) => sel.resolve(&self.slider),
            Err(err) => {
                log::warn!("harness ignoring selector: {err}");
                None
            }
        }
    }

    /// Bounding box of the selected element, `None` when absent or hidden.
    #[must_use]
    pub fn bounding_box(&self, selector: &str) -> Option<Rect> {
        let track = self.slider.bounds();
        let label_y = track.y + track.height;
        match self.part(selector)? {
            SliderPart::Slider => Some(track),
            SliderPart::Handle => Some(self.slider.handle_bounds()),
            SliderPart::MinLabel => self
                .is_visible(selector)
                .then(|| Rect::new(track.x, label_y, LABEL_WIDTH, 16.0)),
            SliderPart::MaxLabel => self
                .is_visible(selector)
                .then(|| Rect::new(track.right() - LABEL_WIDTH, label_y, LABEL_WIDTH, 16.0)),
        }
    }

    /// Whether the selected element is shown.
    #[must_use]
    pub fn is_visible(&self, selector: &str) -> bool {
        let labels = self.slider.view().labels;
        match self.part(selector) {
            Some(SliderPart::Slider | SliderPart::Handle) => true,
            Some(SliderPart::MinLabel) => labels.min_visible,
            Some(SliderPart::MaxLabel) => labels.max_visible,
            None => false,
        }
    }

    /// Whether the selected element presents an enabled affordance.
    #[must_use]
    pub fn is_enabled(&self, selector: &str) -> bool {
        match self.part(selector) {
            Some(SliderPart::Slider | SliderPart::Handle) => self.slider.is_interactive(),
            Some(SliderPart::MinLabel | SliderPart::MaxLabel) => true,
            None => false,
        }
    }

    /// Attribute state of the slider.
    #[must_use]
    pub fn state(&self) -> SliderState {
        self.slider.view().state_map()
    }

    /// Inline style of the handle.
    #[must_use]
    pub fn handle_state(&self) -> String {
        self.slider.view().handle_style()
    }

    /// Full derived view.
    #[must_use]
    pub fn view(&self) -> SliderView {
        self.slider.view()
    }

    // === Event Simulation ===

    /// Click the centre of the selected element.
    pub fn click(&mut self, selector: &str) -> &mut Self {
        if let Some(bounds) = self.bounding_box(selector) {
            self.click_point(bounds.center());
        }
        self
    }

    /// Click at `position`, relative to the selected element's top-left.
    pub fn click_at(&mut self, selector: &str, position: Point) -> &mut Self {
        if let Some(bounds) = self.bounding_box(selector) {
            self.click_point(bounds.origin() + position);
        }
        self
    }

    /// Click at a fraction of the selected element's width, one pixel down.
    pub fn click_at_fraction(&mut self, selector: &str, fraction: f32) -> &mut Self {
        if let Some(bounds) = self.bounding_box(selector) {
            let position = Point::new(bounds.width * fraction, 1.0);
            self.click_point(bounds.origin() + position);
        }
        self
    }

    /// Drag the centre of `source` to `position` relative to `target`.
    pub fn drag_to(&mut self, source: &str, target: &str, position: Point) -> &mut Self {
        let (Some(from), Some(to)) = (self.bounding_box(source), self.bounding_box(target)) else {
            return self;
        };
        let start = from.center();
        let end = to.origin() + position;
        self.event_queue.push_back(Event::mouse_move(start));
        self.event_queue.push_back(Event::mouse_down(start));
        self.event_queue.push_back(Event::mouse_move(end));
        self.event_queue.push_back(Event::mouse_up(end));
        self.process_events();
        self
    }

    /// Press and release a key identified by host name (`"Home"`, `"ArrowUp"`).
    pub fn send_key(&mut self, name: &str) -> &mut Self {
        self.press_key(Key::from_name(name))
    }

    /// Press and release a key.
    pub fn press_key(&mut self, key: Key) -> &mut Self {
        self.event_queue.push_back(Event::KeyDown { key });
        self.event_queue.push_back(Event::KeyUp { key });
        self.process_events();
        self
    }

    /// Move focus to the slider handle.
    pub fn focus(&mut self) -> &mut Self {
        self.dispatch(Event::FocusIn)
    }

    /// Move focus away from the slider handle.
    pub fn blur(&mut self) -> &mut Self {
        self.dispatch(Event::FocusOut)
    }

    /// Send one raw event.
    pub fn dispatch(&mut self, event: Event) -> &mut Self {
        self.event_queue.push_back(event);
        self.process_events();
        self
    }

    /// Flip the disabled flag, like the demo page's checkbox.
    pub fn toggle_disabled(&mut self) -> &mut Self {
        let disabled = self.slider.config().disabled;
        self.slider.set_disabled(!disabled);
        self
    }

    /// Flip the readonly flag, like the demo page's checkbox.
    pub fn toggle_readonly(&mut self) -> &mut Self {
        let readonly = self.slider.config().readonly;
        self.slider.set_readonly(!readonly);
        self
    }

    // === Assertions ===

    /// Assert the attribute state equals `expected`.
    ///
    /// # Panics
    ///
    /// Panics if any attribute differs.
    pub fn assert_state(&self, expected: &SliderState) -> &Self {
        let actual = self.state();
        assert_eq!(
            &actual, expected,
            "Expected slider state {expected:?} but got {actual:?}"
        );
        self
    }

    /// Assert the handle style contains `fragment`.
    ///
    /// # Panics
    ///
    /// Panics if the fragment is missing.
    pub fn assert_handle_style_contains(&self, fragment: &str) -> &Self {
        let actual = self.handle_state();
        assert!(
            actual.contains(fragment),
            "Expected handle style to contain '{fragment}' but got '{actual}'"
        );
        self
    }

    /// Assert the selected element is visible.
    ///
    /// # Panics
    ///
    /// Panics if it is hidden.
    pub fn assert_visible(&self, selector: &str) -> &Self {
        assert!(self.is_visible(selector), "Expected '{selector}' to be visible");
        self
    }

    /// Assert the selected element is hidden.
    ///
    /// # Panics
    ///
    /// Panics if it is visible.
    pub fn assert_hidden(&self, selector: &str) -> &Self {
        assert!(!self.is_visible(selector), "Expected '{selector}' to be hidden");
        self
    }

    /// Assert the selected element is enabled.
    ///
    /// # Panics
    ///
    /// Panics if it is disabled.
    pub fn assert_enabled(&self, selector: &str) -> &Self {
        assert!(self.is_enabled(selector), "Expected '{selector}' to be enabled");
        self
    }

    /// Assert the selected element is disabled.
    ///
    /// # Panics
    ///
    /// Panics if it is enabled.
    pub fn assert_disabled(&self, selector: &str) -> &Self {
        assert!(!self.is_enabled(selector), "Expected '{selector}' to be disabled");
        self
    }

    // === Internal ===

    fn click_point(&mut self, position: Point) {
        self.event_queue.push_back(Event::mouse_move(position));
        self.event_queue.push_back(Event::mouse_down(position));
        self.event_queue.push_back(Event::mouse_up(position));
        self.event_queue.push_back(Event::Click { position });
        self.process_events();
    }

    fn process_events(&mut self) {
        while let Some(event) = self.event_queue.pop_front() {
            log::trace!("harness dispatch {event:?}");
            if let Some(message) = self.slider.event(&event) {
                if let Ok(changed) = message.downcast::<SliderChanged>() {
                    self.messages.push(*changed);
                }
            }
        }
    }
}
