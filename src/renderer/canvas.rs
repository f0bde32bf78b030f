//! Tessellating canvas with overlay-fade trails
//!
//! A 2D canvas keeps its pixels between frames, and painting a translucent
//! rectangle over everything fades older strokes into motion trails. A GPU
//! swapchain does not keep pixels, so instead every frame's triangles are kept
//! as a layer. A full-canvas translucent fill composites the fill color into
//! each retained vertex (`c' = c * (1 - a) + fill * a`) and into the backdrop.
//! Drawing the layers oldest first over the backdrop then gives the same image
//! the canvas would hold.

use std::collections::VecDeque;

use glam::Vec2;

use super::shapes;
use super::vertex::Vertex;
use super::{Color, DrawSurface};

/// Layers whose contrast to the backdrop drops below one 8-bit step are gone
pub const FADE_CUTOFF: f32 = 1.0 / 255.0;

/// Triangles drawn during one frame
#[derive(Debug, Clone, Default)]
struct Layer {
    vertices: Vec<Vertex>,
    /// Remaining contrast against the backdrop (1.0 when freshly drawn)
    weight: f32,
}

#[derive(Debug, Clone)]
pub struct TrailCanvas {
    width: f32,
    height: f32,
    backdrop: [f32; 3],
    /// Oldest first; the last layer receives new draws
    layers: VecDeque<Layer>,
    fill: Color,
    stroke: Color,
    line_width: f32,
}

impl TrailCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            backdrop: [0.0; 3],
            layers: VecDeque::new(),
            fill: Color::BLACK,
            stroke: Color::BLACK,
            line_width: 1.0,
        }
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Resizing a canvas wipes it
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.layers.clear();
        self.backdrop = [0.0; 3];
    }

    /// Color of pixels no retained layer covers
    pub fn backdrop(&self) -> [f32; 4] {
        [self.backdrop[0], self.backdrop[1], self.backdrop[2], 1.0]
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// All retained triangles, oldest first
    pub fn vertices(&self) -> Vec<Vertex> {
        let total = self.layers.iter().map(|l| l.vertices.len()).sum();
        let mut out = Vec::with_capacity(total);
        for layer in &self.layers {
            out.extend_from_slice(&layer.vertices);
        }
        out
    }

    fn covers_canvas(&self, x: f32, y: f32, w: f32, h: f32) -> bool {
        x <= 0.0 && y <= 0.0 && x + w >= self.width && y + h >= self.height
    }

    fn current_layer(&mut self) -> &mut Layer {
        if self.layers.is_empty() {
            self.layers.push_back(Layer {
                vertices: Vec::new(),
                weight: 1.0,
            });
        }
        let last = self.layers.len() - 1;
        &mut self.layers[last]
    }

    fn push(&mut self, vertices: Vec<Vertex>) {
        self.current_layer().vertices.extend(vertices);
    }

    /// Composite a translucent full-canvas fill over everything retained
    fn fade(&mut self, color: Color) {
        let a = color.a.clamp(0.0, 1.0);
        let keep = 1.0 - a;
        let fill = color.to_array();

        for channel in 0..3 {
            self.backdrop[channel] = self.backdrop[channel] * keep + fill[channel] * a;
        }
        for layer in self.layers.iter_mut() {
            layer.weight *= keep;
            for v in layer.vertices.iter_mut() {
                for channel in 0..3 {
                    v.color[channel] = v.color[channel] * keep + fill[channel] * a;
                }
            }
        }
        self.layers.retain(|l| l.weight >= FADE_CUTOFF);

        // Draws after an overlay belong to the next frame
        self.layers.push_back(Layer {
            vertices: Vec::new(),
            weight: 1.0,
        });
    }
}

impl DrawSurface for TrailCanvas {
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
        if self.covers_canvas(x, y, w, h) {
            if self.fill.a >= 1.0 {
                // Opaque wipe
                let [r, g, b, _] = self.fill.to_array();
                self.backdrop = [r, g, b];
                self.layers.clear();
            } else {
                self.fade(self.fill);
            }
            return;
        }
        let verts = shapes::rect(x, y, w, h, self.fill.to_array());
        self.push(verts);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        let segments = shapes::segments_for_radius(radius);
        let verts = shapes::circle(center, radius, self.fill.to_array(), segments);
        self.push(verts);
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32) {
        let half = self.line_width / 2.0;
        let segments = shapes::segments_for_radius(radius + half);
        let verts = shapes::ring(
            center,
            (radius - half).max(0.0),
            radius + half,
            self.stroke.to_array(),
            segments,
        );
        self.push(verts);
    }
}
