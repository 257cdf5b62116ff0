//! Single-line text label.

use scrollkit_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Color, Constraints, Event, FontKind, Message, Rect, Size, TextAlign, TextStyle, TypeId,
    Widget,
};
use serde::{Deserialize, Serialize};

/// Text drawn inside a fixed rectangle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    /// Text content
    text: String,
    /// Font
    font: FontKind,
    /// Alignment within the bounds
    align: TextAlign,
    /// Text color
    color: Color,
    /// Cached bounds
    bounds: Rect,
    #[serde(skip)]
    redraw: bool,
}

impl Label {
    /// Create a label occupying `bounds`.
    ///
    /// A zero height is replaced by the font's line height, so callers can
    /// pass only the width they want the text clipped to.
    #[must_use]
    pub fn new(bounds: Rect, font: FontKind, text: impl Into<String>) -> Self {
        let height = if bounds.height > 0.0 {
            bounds.height
        } else {
            font.line_height()
        };
        Self {
            text: text.into(),
            font,
            align: TextAlign::TopLeft,
            color: Color::WHITE,
            bounds: bounds.with_size(Size::new(bounds.width.max(0.0), height)),
            redraw: false,
        }
    }

    /// Set text color.
    #[must_use]
    pub const fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Get the text content.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the font.
    #[must_use]
    pub const fn font(&self) -> FontKind {
        self.font
    }

    /// Replace the text content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.text {
            self.text = text;
            self.redraw = true;
        }
    }

    fn style(&self) -> TextStyle {
        TextStyle {
            font: self.font,
            color: self.color,
            align: self.align,
        }
    }
}

impl Widget for Label {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let width = self.text.chars().count() as f32 * self.font.glyph_width();
        constraints.constrain(Size::new(width, self.font.line_height()))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        if self.text.is_empty() {
            return;
        }
        canvas.draw_text(&self.text, self.bounds, &self.style());
    }

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

    fn needs_redraw(&self) -> bool {
        self.redraw
    }

    fn clear_redraw(&mut self) {
        self.redraw = false;
    }

    fn accessible_name(&self) -> Option<&str> {
        Some(self.text.as_str())
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Text
    }
}
