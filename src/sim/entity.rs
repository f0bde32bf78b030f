//! Shared positional state for everything that moves

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Position and per-frame velocity, in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Motion {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Motion {
    pub fn new(x: f32, y: f32, vel_x: f32, vel_y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vel_x, vel_y),
        }
    }

    /// Move one frame along the current velocity
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }
}
