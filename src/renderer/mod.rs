//! Rendering module
//!
//! The simulation only ever talks to a [`DrawSurface`], which offers the handful
//! of canvas-style primitives it needs. Implementations:
//! - [`RecordingSurface`]: keeps a list of calls (tests, headless runs)
//! - [`TrailCanvas`]: tessellates into triangles and reproduces overlay fading
//! - [`RenderState`]: WebGPU pipeline presenting a `TrailCanvas`

pub mod canvas;
pub mod pipeline;
pub mod recorder;
pub mod shapes;
pub mod vertex;

pub use canvas::TrailCanvas;
pub use pipeline::RenderState;
pub use recorder::{DrawCommand, RecordingSurface};
pub use vertex::Vertex;

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An sRGB color with straight alpha
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Normalized `[r, g, b, a]` for vertex data
    pub fn to_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a,
        ]
    }
}

/// CSS color string, as a 2D canvas would accept it
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a >= 1.0 {
            write!(f, "rgb({},{},{})", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
        }
    }
}

/// Minimal 2D drawing collaborator.
///
/// Mirrors the stateful style of a canvas context: styles are set first and
/// apply to every following fill or stroke.
pub trait DrawSurface {
    fn set_fill_style(&mut self, color: Color);
    fn set_stroke_style(&mut self, color: Color);
    fn set_line_width(&mut self, width: f32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    /// Filled circle (full 0..2π arc)
    fn fill_circle(&mut self, center: Vec2, radius: f32);
    /// Circle outline centered on the radius, `line_width` wide
    fn stroke_circle(&mut self, center: Vec2, radius: f32);
}
