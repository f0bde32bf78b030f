//! The player's hunter circle
//!
//! The hunter has no automatic motion. Its velocity holds the fixed step
//! taken per key press, and every step is followed by a hard clamp.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::Motion;
use super::input::Direction;
use crate::consts::*;
use crate::renderer::{Color, DrawSurface};
use crate::rng::random_int;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hunter {
    pub motion: Motion,
    pub size: f32,
    pub color: Color,
    /// Outline stroke width
    pub line_width: f32,
}

impl Hunter {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            motion: Motion::new(x, y, HUNTER_STEP, HUNTER_STEP),
            size: HUNTER_SIZE,
            color: Color::WHITE,
            line_width: HUNTER_LINE_WIDTH,
        }
    }

    /// Hunter at a random position with its whole circle on the canvas
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> Self {
        let margin = HUNTER_SIZE as i32;
        let x = random_int(rng, margin, width as i32 - margin);
        let y = random_int(rng, margin, height as i32 - margin);
        Self::new(x as f32, y as f32)
    }

    /// Outline only, so it reads differently from the filled balls
    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        surface.set_line_width(self.line_width);
        surface.set_stroke_style(self.color);
        surface.stroke_circle(self.motion.pos, self.size);
    }

    /// Take one step in `dir` (canvas y grows downward). Does not clamp.
    pub fn step(&mut self, dir: Direction) {
        let Motion { pos, vel } = &mut self.motion;
        match dir {
            Direction::Left => pos.x -= vel.x,
            Direction::Right => pos.x += vel.x,
            Direction::Up => pos.y -= vel.y,
            Direction::Down => pos.y += vel.y,
        }
    }

    /// Pin the hunter inside `[size, extent - size]` on both axes
    pub fn check_bounds(&mut self, width: f32, height: f32) {
        let pos = &mut self.motion.pos;

        if pos.x + self.size >= width {
            pos.x = width - self.size;
        }
        if pos.x - self.size <= 0.0 {
            pos.x = self.size;
        }
        if pos.y + self.size >= height {
            pos.y = height - self.size;
        }
        if pos.y - self.size <= 0.0 {
            pos.y = self.size;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingSurface};
    use crate::rng::seeded;
    use glam::Vec2;
    use proptest::prelude::*;

    const W: f32 = 800.0;
    const H: f32 = 600.0;

    #[test]
    fn test_left_step_clamps_to_size() {
        let mut h = Hunter::new(HUNTER_SIZE - 5.0, 300.0);
        h.step(Direction::Left);
        h.check_bounds(W, H);
        assert_eq!(h.motion.pos.x, HUNTER_SIZE);
    }

    #[test]
    fn test_clamp_does_not_touch_velocity() {
        let mut h = Hunter::new(W + 50.0, -50.0);
        h.check_bounds(W, H);
        assert_eq!(h.motion.pos, Vec2::new(W - HUNTER_SIZE, HUNTER_SIZE));
        assert_eq!(h.motion.vel, Vec2::splat(HUNTER_STEP));
    }

    #[test]
    fn test_steps_move_exactly_one_step() {
        let mut h = Hunter::new(400.0, 300.0);
        h.step(Direction::Right);
        assert_eq!(h.motion.pos, Vec2::new(420.0, 300.0));
        h.step(Direction::Up);
        assert_eq!(h.motion.pos, Vec2::new(420.0, 280.0));
        h.step(Direction::Down);
        h.step(Direction::Left);
        assert_eq!(h.motion.pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_draw_is_white_outline() {
        let h = Hunter::new(50.0, 60.0);
        let mut surface = RecordingSurface::new();
        h.draw(&mut surface);
        assert_eq!(
            surface.commands,
            vec![DrawCommand::StrokeCircle {
                center: Vec2::new(50.0, 60.0),
                radius: HUNTER_SIZE,
                color: Color::WHITE,
                line_width: HUNTER_LINE_WIDTH,
            }]
        );
    }

    #[test]
    fn test_spawn_in_bounds() {
        let mut rng = seeded(11);
        for _ in 0..100 {
            let h = Hunter::spawn(&mut rng, W, H);
            assert!(h.motion.pos.x >= HUNTER_SIZE && h.motion.pos.x <= W - HUNTER_SIZE);
            assert!(h.motion.pos.y >= HUNTER_SIZE && h.motion.pos.y <= H - HUNTER_SIZE);
        }
    }

    fn direction() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Left),
            Just(Direction::Right),
            Just(Direction::Up),
            Just(Direction::Down),
        ]
    }

    proptest! {
        #[test]
        fn any_step_sequence_stays_in_bounds(steps in prop::collection::vec(direction(), 0..200)) {
            let mut h = Hunter::new(W / 2.0, H / 2.0);
            for dir in steps {
                h.step(dir);
                h.check_bounds(W, H);
                prop_assert!(h.motion.pos.x >= HUNTER_SIZE && h.motion.pos.x <= W - HUNTER_SIZE);
                prop_assert!(h.motion.pos.y >= HUNTER_SIZE && h.motion.pos.y <= H - HUNTER_SIZE);
            }
        }
    }
}
