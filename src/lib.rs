//! Ball Hunt - bouncing balls on a fading canvas, hunted by a steerable circle
//!
//! Core modules:
//! - `sim`: Entities, per-frame physics, collisions and the run loop
//! - `renderer`: Drawing surface abstraction, trail canvas and WebGPU pipeline
//! - `rng`: Seeded random integers and colors
//! - `hud`: Live ball counter text
//! - `error`: Startup failures

pub mod error;
pub mod hud;
pub mod renderer;
pub mod rng;
pub mod sim;

pub use error::InitError;
pub use hud::{CounterSink, Hud};
pub use renderer::{Color, DrawSurface};

use glam::Vec2;

/// Fixed game constants
pub mod consts {
    /// Default canvas size when the host does not supply one (native runs)
    pub const DEFAULT_WIDTH: f32 = 800.0;
    pub const DEFAULT_HEIGHT: f32 = 600.0;

    /// Number of balls spawned at startup
    pub const BALL_COUNT: usize = 25;
    /// Ball radius range (inclusive)
    pub const BALL_MIN_SIZE: i32 = 10;
    pub const BALL_MAX_SIZE: i32 = 20;
    /// Ball velocity range per axis (inclusive, pixels per frame)
    pub const BALL_MAX_SPEED: i32 = 7;

    /// Hunter radius
    pub const HUNTER_SIZE: f32 = 10.0;
    /// Distance moved per key press on either axis
    pub const HUNTER_STEP: f32 = 20.0;
    /// Outline width
    pub const HUNTER_LINE_WIDTH: f32 = 3.0;

    /// Alpha of the black overlay painted each frame (trail length)
    pub const TRAIL_FADE_ALPHA: f32 = 0.25;
}

/// Euclidean distance between two circle centers
#[inline]
pub fn center_distance(a: Vec2, b: Vec2) -> f32 {
    let d = a - b;
    (d.x * d.x + d.y * d.y).sqrt()
}

/// True when two circles overlap (touching edges do not count)
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    center_distance(a, b) < ra + rb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circles_overlap() {
        assert!(circles_overlap(Vec2::ZERO, 10.0, Vec2::new(19.0, 0.0), 10.0));
        // Exactly touching is not a collision
        assert!(!circles_overlap(Vec2::ZERO, 10.0, Vec2::new(20.0, 0.0), 10.0));
        assert!(circles_overlap(Vec2::new(5.0, 5.0), 10.0, Vec2::new(5.0, 5.0), 10.0));
    }

    #[test]
    fn test_center_distance() {
        assert!((center_distance(Vec2::ZERO, Vec2::new(3.0, 4.0)) - 5.0).abs() < 1e-6);
    }
}
