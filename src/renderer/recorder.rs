//! Draw surface that records calls instead of painting

use glam::Vec2;

use super::{Color, DrawSurface};

/// A single recorded primitive, with the style in effect when it was issued
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect { x: f32, y: f32, w: f32, h: f32, color: Color },
    FillCircle { center: Vec2, radius: f32, color: Color },
    StrokeCircle { center: Vec2, radius: f32, color: Color, line_width: f32 },
}

#[derive(Debug, Clone)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
    fill: Color,
    stroke: Color,
    line_width: f32,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            fill: Color::BLACK,
            stroke: Color::BLACK,
            line_width: 1.0,
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Number of filled circles recorded (one per live ball per frame)
    pub fn filled_circles(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillCircle { .. }))
            .count()
    }
}

impl DrawSurface for RecordingSurface {
    fn set_fill_style(&mut self, color: Color) {
        self.fill = color;
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.stroke = color;
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCommand::FillRect { x, y, w, h, color: self.fill });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        self.commands.push(DrawCommand::FillCircle { center, radius, color: self.fill });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            color: self.stroke,
            line_width: self.line_width,
        });
    }
}
