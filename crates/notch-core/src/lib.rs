//! Core types for the Notch slider engine.
//!
//! This crate provides the pure building blocks used by `notch-widgets`:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Host input: [`Event`], [`Key`], [`PointerId`]
//! - Configuration: [`SliderConfig`] and [`ConfigError`]
//! - Value model: [`ValueModel`] (clamp + tick snapping)
//! - Position mapping: [`PositionMapper`] (value <-> percent <-> pixels)
//!
//! Nothing here performs I/O.

mod config;
mod event;
mod geometry;
mod mapper;
mod value;
pub mod widget;

pub use config::{ConfigError, SliderConfig, DEFAULT_PAGE_TICKS};
pub use event::{Event, Key, MouseButton, PointerId, PointerType};
pub use geometry::{Point, Rect, Size};
pub use mapper::PositionMapper;
pub use value::ValueModel;
pub use widget::{AccessibleRole, InteractiveState, LayoutResult, TypeId, Widget};
