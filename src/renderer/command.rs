//! Draw request types handed to the renderer

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::Aabb;

/// One renderer request. Positions are arena coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Fill the whole frame
    Clear { color: [f32; 4] },
    /// Filled axis-aligned rectangle from its top-left corner
    Rect {
        origin: Vec2,
        size: Vec2,
        color: [f32; 4],
    },
    /// Text centered on `center`
    Text {
        text: String,
        center: Vec2,
        font_size: f32,
        color: [f32; 4],
    },
}

impl DrawCommand {
    /// Filled rectangle covering `bounds`
    pub fn rect(bounds: &Aabb, color: [f32; 4]) -> Self {
        DrawCommand::Rect {
            origin: bounds.top_left(),
            size: Vec2::new(bounds.width(), bounds.height()),
            color,
        }
    }

    pub fn text(text: impl Into<String>, center: Vec2, font_size: f32, color: [f32; 4]) -> Self {
        DrawCommand::Text {
            text: text.into(),
            center,
            font_size,
            color,
        }
    }

    /// Text payload, if this is a text command
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const BALL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const PADDLE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const SCORE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const STREAK: [f32; 4] = [1.0, 0.85, 0.3, 1.0];
    pub const VICTORY: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}
