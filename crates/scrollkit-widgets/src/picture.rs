//! Static image widget.

use scrollkit_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Constraints, Event, Message, Point, Rect, Size, TypeId, Widget,
};
use serde::{Deserialize, Serialize};

/// A named image resource drawn at a fixed size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Picture {
    /// Image resource name
    name: String,
    /// Cached bounds
    bounds: Rect,
}

impl Picture {
    /// Create a picture of `size` with its top-left corner at `position`.
    #[must_use]
    pub fn new(name: impl Into<String>, position: Point, size: Size) -> Self {
        Self {
            name: name.into(),
            bounds: Rect::from_origin_size(position, size),
        }
    }

    /// Image resource name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Widget for Picture {
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
        if self.name.is_empty() || self.bounds.size().is_empty() {
            return;
        }
        canvas.draw_image(&self.name, self.bounds);
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

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Image
    }
}
