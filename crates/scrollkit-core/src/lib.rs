//! Core types and traits for the scrollkit widget tree.
//!
//! This crate provides the host-toolkit layer the list widgets are built on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`]
//! - Layout constraints: [`Constraints`]
//! - Input events: [`Event`], [`Key`], [`MouseButton`]
//! - The [`Widget`] and [`Canvas`] traits, plus [`RecordingCanvas`] for tests

mod canvas;
mod color;
mod constraints;
mod event;
mod geometry;
pub mod widget;

pub use canvas::{DrawCommand, RecordingCanvas};
pub use color::Color;
pub use constraints::Constraints;
pub use event::{Event, Key, MouseButton};
pub use geometry::{Point, Rect, Size};
pub use widget::{
    AccessibleRole, Canvas, FontKind, LayoutResult, Message, Placeholder, TextAlign, TextStyle,
    TypeId, Widget, WidgetId,
};
