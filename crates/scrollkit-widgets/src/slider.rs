//! Scroll slider that selects the first visible row of a windowed list.

use scrollkit_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Color, Constraints, Event, Key, Message, MouseButton, Point, Rect, Size, TypeId,
    Widget,
};
use serde::{Deserialize, Serialize};

/// Thickness of a slider across its axis, in pixels.
pub const SLIDER_THICKNESS: f32 = 16.0;

/// Message emitted when the user moves the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderMoved {
    /// The new first visible position
    pub position: usize,
}

/// Axis a slider moves along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SliderOrientation {
    /// Top to bottom
    #[default]
    Vertical,
    /// Left to right
    Horizontal,
}

/// Slider color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SliderStyle {
    /// Blue scheme used on popups and option screens
    Blue,
    /// Brown scheme used on adventure-map windows
    #[default]
    Brown,
}

impl SliderStyle {
    fn track_color(self) -> Color {
        match self {
            Self::Blue => Color::rgb(0.08, 0.14, 0.35),
            Self::Brown => Color::rgb(0.29, 0.2, 0.11),
        }
    }

    fn thumb_color(self) -> Color {
        match self {
            Self::Blue => Color::rgb(0.42, 0.55, 0.85),
            Self::Brown => Color::rgb(0.75, 0.6, 0.35),
        }
    }
}

/// Integer slider over `0..=amount - capacity`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollSlider {
    /// First visible position
    value: usize,
    /// Number of positions visible at once
    capacity: usize,
    /// Number of positions in total
    amount: usize,
    /// Axis
    orientation: SliderOrientation,
    /// Color scheme
    style: SliderStyle,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    bounds: Rect,
    #[serde(skip)]
    active: bool,
    #[serde(skip)]
    dragging: bool,
    #[serde(skip)]
    redraw: bool,
}

impl ScrollSlider {
    /// Create a slider at `position` spanning `length` pixels.
    #[must_use]
    pub fn new(position: Point, length: f32, capacity: usize, amount: usize) -> Self {
        Self {
            value: 0,
            capacity,
            amount,
            orientation: SliderOrientation::Vertical,
            style: SliderStyle::Brown,
            test_id_value: None,
            bounds: Rect::new(position.x, position.y, SLIDER_THICKNESS, length.max(0.0)),
            active: false,
            dragging: false,
            redraw: false,
        }
    }

    /// Set the orientation, reshaping the bounds to match.
    #[must_use]
    pub fn orientation(mut self, orientation: SliderOrientation) -> Self {
        let length = self.length();
        self.orientation = orientation;
        self.bounds = match orientation {
            SliderOrientation::Vertical => self.bounds.with_size(Size::new(SLIDER_THICKNESS, length)),
            SliderOrientation::Horizontal => {
                self.bounds.with_size(Size::new(length, SLIDER_THICKNESS))
            }
        };
        self
    }

    /// Set the color scheme.
    #[must_use]
    pub const fn style(mut self, style: SliderStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the initial value.
    #[must_use]
    pub fn value(mut self, value: usize) -> Self {
        self.value = value.min(self.max_value());
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Current value.
    #[must_use]
    pub const fn get_value(&self) -> usize {
        self.value
    }

    /// Number of positions in total.
    #[must_use]
    pub const fn get_amount(&self) -> usize {
        self.amount
    }

    /// Number of positions visible at once.
    #[must_use]
    pub const fn get_capacity(&self) -> usize {
        self.capacity
    }

    /// Get the color scheme.
    #[must_use]
    pub const fn get_style(&self) -> SliderStyle {
        self.style
    }

    /// Get the orientation.
    #[must_use]
    pub const fn get_orientation(&self) -> SliderOrientation {
        self.orientation
    }

    /// Largest reachable value.
    #[must_use]
    pub const fn max_value(&self) -> usize {
        self.amount.saturating_sub(self.capacity)
    }

    /// Whether there is nothing to scroll.
    #[must_use]
    pub const fn is_blocked(&self) -> bool {
        self.max_value() == 0
    }

    /// Move to `value` without emitting a message.
    pub fn move_to(&mut self, value: usize) {
        let value = value.min(self.max_value());
        if value != self.value {
            self.value = value;
            self.request_redraw();
        }
    }

    /// Change the total number of positions.
    pub fn set_amount(&mut self, amount: usize) {
        self.amount = amount;
        self.value = self.value.min(self.max_value());
        self.request_redraw();
    }

    fn length(&self) -> f32 {
        match self.orientation {
            SliderOrientation::Vertical => self.bounds.height,
            SliderOrientation::Horizontal => self.bounds.width,
        }
    }

    fn thumb_length(&self) -> f32 {
        let length = self.length();
        if self.amount == 0 {
            return length;
        }
        let ratio = (self.capacity as f32 / self.amount as f32).min(1.0);
        (length * ratio).max(SLIDER_THICKNESS.min(length))
    }

    /// Rectangle of the draggable thumb.
    #[must_use]
    pub fn thumb_rect(&self) -> Rect {
        let thumb = self.thumb_length();
        let travel = self.length() - thumb;
        let max = self.max_value();
        let offset = if max == 0 {
            0.0
        } else {
            travel * self.value as f32 / max as f32
        };
        match self.orientation {
            SliderOrientation::Vertical => Rect::new(
                self.bounds.x,
                self.bounds.y + offset,
                self.bounds.width,
                thumb,
            ),
            SliderOrientation::Horizontal => Rect::new(
                self.bounds.x + offset,
                self.bounds.y,
                thumb,
                self.bounds.height,
            ),
        }
    }

    /// Value whose thumb is centered closest to `position`.
    fn value_at(&self, position: Point) -> usize {
        let along = match self.orientation {
            SliderOrientation::Vertical => position.y - self.bounds.y,
            SliderOrientation::Horizontal => position.x - self.bounds.x,
        };
        let thumb = self.thumb_length();
        let travel = self.length() - thumb;
        if travel <= 0.0 {
            return 0;
        }
        let fraction = ((along - thumb / 2.0) / travel).clamp(0.0, 1.0);
        (fraction * self.max_value() as f32).round() as usize
    }

    fn step_by(&mut self, delta: isize) -> Option<Message> {
        let target = self.value.saturating_add_signed(delta).min(self.max_value());
        self.user_move(target)
    }

    fn user_move(&mut self, target: usize) -> Option<Message> {
        let target = target.min(self.max_value());
        if target == self.value {
            return None;
        }
        self.value = target;
        self.request_redraw();
        Some(Box::new(SliderMoved { position: target }))
    }
}

impl Widget for ScrollSlider {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(self.bounds.size())
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.bounds, self.style.track_color());
        if !self.is_blocked() {
            canvas.fill_rect(self.thumb_rect(), self.style.thumb_color());
        }
    }

    fn event(&mut self, event: &Event) -> Option<Message> {
        if self.is_blocked() {
            return None;
        }

        match event {
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } if self.bounds.contains_point(position) => {
                self.dragging = true;
                let target = self.value_at(*position);
                self.user_move(target)
            }
            Event::MouseUp {
                button: MouseButton::Left,
                ..
            } => {
                self.dragging = false;
                None
            }
            Event::MouseMove { position } if self.dragging => {
                let target = self.value_at(*position);
                self.user_move(target)
            }
            Event::Scroll { position, .. } if self.bounds.contains_point(position) => {
                self.step_by(event.wheel_step()?)
            }
            Event::KeyDown { key } => match key {
                Key::Up | Key::Left => self.step_by(-1),
                Key::Down | Key::Right => self.step_by(1),
                Key::PageUp => self.step_by(-(self.capacity.max(1) as isize)),
                Key::PageDown => self.step_by(self.capacity.max(1) as isize),
                Key::Home => self.user_move(0),
                Key::End => self.user_move(self.max_value()),
                _ => None,
            },
            _ => None,
        }
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut []
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn activate(&mut self) {
        self.active = true;
    }

    fn deactivate(&mut self) {
        self.active = false;
        self.dragging = false;
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn request_redraw(&mut self) {
        if self.active {
            self.redraw = true;
        }
    }

    fn needs_redraw(&self) -> bool {
        self.redraw
    }

    fn clear_redraw(&mut self) {
        self.redraw = false;
    }

    fn is_interactive(&self) -> bool {
        !self.is_blocked()
    }

    fn is_focusable(&self) -> bool {
        !self.is_blocked()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Slider
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }
}
