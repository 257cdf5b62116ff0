//! Widget trait and related types.
//!
//! This module defines the core `Widget` trait that every element of the
//! widget tree implements, together with the `Canvas` paint abstraction.
//!
//! # Widget Lifecycle
//!
//! 1. **Create**: a parent builds the widget and takes ownership of it
//! 2. **Activate**: the widget starts receiving events and may schedule redraws
//! 3. **Layout / Paint**: the host positions and draws the tree
//! 4. **Deactivate**: the widget stops receiving events
//! 5. **Drop**: the parent releases it
//!
//! Containers forward activation to their children, so activating the root
//! of a subtree activates everything below it.
//!
//! # Examples
//!
//! ```
//! use scrollkit_core::{TypeId, WidgetId};
//!
//! let id = WidgetId::new(42);
//! assert_eq!(id.0, 42);
//!
//! assert_ne!(TypeId::of::<String>(), TypeId::of::<i32>());
//! ```

use crate::color::Color;
use crate::constraints::Constraints;
use crate::event::Event;
use crate::geometry::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Unique identifier for a widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WidgetId(pub u64);

impl WidgetId {
    /// Create a new widget ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

/// Type identifier for widget types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    /// Get the type ID for a type.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Message type returned from [`Widget::event`].
pub type Message = Box<dyn Any + Send>;

/// Core widget trait that all UI elements implement.
pub trait Widget: Send + Sync {
    /// Get the type identifier for this widget type.
    fn type_id(&self) -> TypeId;

    /// Compute intrinsic size given constraints.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Position self and children within allocated bounds.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Generate draw commands for rendering.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle an input event, optionally answering with a message.
    fn event(&mut self, event: &Event) -> Option<Message>;

    /// Get child widgets for tree traversal.
    fn children(&self) -> &[Box<dyn Widget>];

    /// Get mutable child widgets.
    fn children_mut(&mut self) -> &mut [Box<dyn Widget>];

    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect {
        Rect::default()
    }

    /// Move the widget so its top-left corner sits at `origin`.
    fn move_to(&mut self, origin: Point) {
        let bounds = self.bounds().with_origin(origin);
        self.layout(bounds);
    }

    /// Move the widget by `delta`.
    fn move_by(&mut self, delta: Point) {
        let bounds = self.bounds().translate(delta);
        self.layout(bounds);
    }

    /// Start receiving events.
    fn activate(&mut self) {
        for child in self.children_mut() {
            child.activate();
        }
    }

    /// Stop receiving events.
    fn deactivate(&mut self) {
        for child in self.children_mut() {
            child.deactivate();
        }
    }

    /// Whether the widget is currently active.
    fn is_active(&self) -> bool {
        false
    }

    /// Schedule a repaint of this widget.
    fn request_redraw(&mut self) {}

    /// Whether this widget or any child has a pending repaint.
    fn needs_redraw(&self) -> bool {
        self.children().iter().any(|c| c.needs_redraw())
    }

    /// Acknowledge pending repaints after the host painted the tree.
    fn clear_redraw(&mut self) {
        for child in self.children_mut() {
            child.clear_redraw();
        }
    }

    /// Check if this widget is interactive (can receive focus/events).
    fn is_interactive(&self) -> bool {
        false
    }

    /// Check if this widget can receive keyboard focus.
    fn is_focusable(&self) -> bool {
        false
    }

    /// Get the accessible name for screen readers.
    fn accessible_name(&self) -> Option<&str> {
        None
    }

    /// Get the accessible role.
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Generic
    }

    /// Get the test ID for this widget (if any).
    fn test_id(&self) -> Option<&str> {
        None
    }
}

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the rendering backend.
pub trait Canvas {
    /// Draw a filled rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw a stroked rectangle.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32);

    /// Draw text inside `rect` using `style`.
    fn draw_text(&mut self, text: &str, rect: Rect, style: &TextStyle);

    /// Draw a named image resource scaled into `rect`.
    fn draw_image(&mut self, name: &str, rect: Rect);

    /// Push a clip region.
    fn push_clip(&mut self, rect: Rect);

    /// Pop the clip region.
    fn pop_clip(&mut self);
}

/// Bitmap fonts available to text widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontKind {
    /// Tiny font
    Tiny,
    /// Small font, the default for list entries
    #[default]
    Small,
    /// Medium font
    Medium,
    /// Big font
    Big,
    /// Decorative font for titles
    Calligraphy,
}

impl FontKind {
    /// Line height of the font in pixels.
    #[must_use]
    pub const fn line_height(self) -> f32 {
        match self {
            Self::Tiny => 10.0,
            Self::Small => 13.0,
            Self::Medium => 16.0,
            Self::Big => 20.0,
            Self::Calligraphy => 24.0,
        }
    }

    /// Average glyph advance in pixels, used for text measurement.
    #[must_use]
    pub fn glyph_width(self) -> f32 {
        self.line_height() * 0.6
    }
}

/// Text alignment inside a text rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    /// Anchor to the top-left corner
    #[default]
    TopLeft,
    /// Center in both directions
    Center,
    /// Anchor to the bottom-right corner
    BottomRight,
}

/// Text style for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font
    pub font: FontKind,
    /// Text color
    pub color: Color,
    /// Alignment within the text rectangle
    pub align: TextAlign,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font: FontKind::Small,
            color: Color::WHITE,
            align: TextAlign::TopLeft,
        }
    }
}

/// Accessible role for screen readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccessibleRole {
    /// Generic element
    #[default]
    Generic,
    /// Static text
    Text,
    /// Image
    Image,
    /// List
    List,
    /// List item
    ListItem,
    /// Combo box / dropdown select
    ComboBox,
    /// Slider
    Slider,
    /// Tab panel
    TabPanel,
}

/// Empty widget standing in for an item a factory declined to build.
///
/// It occupies no space and paints nothing, but it still takes part in
/// the lifecycle so containers can treat every slot uniformly.
#[derive(Debug, Clone, Default)]
pub struct Placeholder {
    bounds: Rect,
    active: bool,
}

impl Placeholder {
    /// Create a new placeholder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Widget for Placeholder {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(Size::ZERO)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, _canvas: &mut dyn Canvas) {}

    fn event(&mut self, _event: &Event) -> Option<Message> {
        None
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
    }

    fn is_active(&self) -> bool {
        self.active
    }
}
