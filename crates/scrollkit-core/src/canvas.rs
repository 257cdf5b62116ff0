//! Canvas implementations for rendering.

use crate::widget::{Canvas, TextStyle};
use crate::{Color, Rect};
use serde::{Deserialize, Serialize};

/// A single recorded paint operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Filled rectangle
    FillRect {
        /// Rectangle bounds
        bounds: Rect,
        /// Fill color
        color: Color,
    },
    /// Rectangle outline
    StrokeRect {
        /// Rectangle bounds
        bounds: Rect,
        /// Stroke color
        color: Color,
        /// Stroke width
        width: f32,
    },
    /// Text run
    Text {
        /// Text content
        content: String,
        /// Text rectangle
        bounds: Rect,
        /// Text style
        style: TextStyle,
    },
    /// Named image
    Image {
        /// Image resource name
        name: String,
        /// Destination rectangle
        bounds: Rect,
    },
    /// Clip region pushed
    PushClip {
        /// Clip bounds
        bounds: Rect,
    },
    /// Clip region popped
    PopClip,
}

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// Tests use it to verify what a widget painted.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    clip_depth: usize,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Get the current clip stack depth.
    #[must_use]
    pub const fn clip_depth(&self) -> usize {
        self.clip_depth
    }

    /// Text runs painted so far, in paint order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Image resource names painted so far, in paint order.
    #[must_use]
    pub fn images(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Image { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Clear all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.clip_depth = 0;
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            bounds: rect,
            color,
        });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        self.commands.push(DrawCommand::StrokeRect {
            bounds: rect,
            color,
            width,
        });
    }

    fn draw_text(&mut self, text: &str, rect: Rect, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            content: text.to_string(),
            bounds: rect,
            style: style.clone(),
        });
    }

    fn draw_image(&mut self, name: &str, rect: Rect) {
        self.commands.push(DrawCommand::Image {
            name: name.to_string(),
            bounds: rect,
        });
    }

    fn push_clip(&mut self, rect: Rect) {
        self.clip_depth += 1;
        self.commands.push(DrawCommand::PushClip { bounds: rect });
    }

    fn pop_clip(&mut self) {
        self.clip_depth = self.clip_depth.saturating_sub(1);
        self.commands.push(DrawCommand::PopClip);
    }
}
