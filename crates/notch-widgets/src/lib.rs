//! Widget implementations for the Notch slider engine.

pub mod controller;
pub mod gate;
pub mod presentation;
pub mod slider;

pub use controller::{Action, DragState, InputContext, InputController, KeyAction};
pub use gate::{GateChange, StateGate, Veto};
pub use presentation::{
    format_number, LabelVisibility, SliderState, SliderView, LABEL_PROXIMITY_PERCENT,
};
pub use slider::{EventOutcome, Slider, SliderChanged, ValueFormatter, DEFAULT_HANDLE_WIDTH};
