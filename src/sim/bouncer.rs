//! Bouncing balls
//!
//! Balls drift at a constant speed, bounce off the canvas edges and are never
//! removed: a ball caught by the hunter is only flagged dead.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::Motion;
use crate::consts::*;
use crate::renderer::{Color, DrawSurface};
use crate::rng::{random_color, random_int};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bouncer {
    pub motion: Motion,
    /// Radius in pixels
    pub size: f32,
    pub color: Color,
    /// Dead balls are skipped by every draw, update and collision pass
    pub alive: bool,
}

impl Bouncer {
    pub fn new(motion: Motion, size: f32, color: Color) -> Self {
        Self {
            motion,
            size,
            color,
            alive: true,
        }
    }

    /// Random ball placed so its whole circle is on the canvas
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> Self {
        let size = random_int(rng, BALL_MIN_SIZE, BALL_MAX_SIZE);
        let x = random_int(rng, size, width as i32 - size);
        let y = random_int(rng, size, height as i32 - size);
        let vel_x = random_int(rng, -BALL_MAX_SPEED, BALL_MAX_SPEED);
        let vel_y = random_int(rng, -BALL_MAX_SPEED, BALL_MAX_SPEED);
        let color = random_color(rng);

        Self::new(
            Motion::new(x as f32, y as f32, vel_x as f32, vel_y as f32),
            size as f32,
            color,
        )
    }

    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        if !self.alive {
            return;
        }
        surface.set_fill_style(self.color);
        surface.fill_circle(self.motion.pos, self.size);
    }

    /// Point velocity away from any wall the ball touches, then advance.
    ///
    /// The velocity sign is forced rather than flipped, so a ball that is
    /// still past the wall next frame keeps heading back in.
    pub fn update(&mut self, width: f32, height: f32) {
        if !self.alive {
            return;
        }
        let Motion { pos, vel } = &mut self.motion;

        if pos.x + self.size >= width {
            vel.x = -vel.x.abs();
        }
        if pos.x - self.size <= 0.0 {
            vel.x = vel.x.abs();
        }
        if pos.y + self.size >= height {
            vel.y = -vel.y.abs();
        }
        if pos.y - self.size <= 0.0 {
            vel.y = vel.y.abs();
        }

        self.motion.advance();
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

    fn ball(x: f32, y: f32, vx: f32, vy: f32, size: f32) -> Bouncer {
        Bouncer::new(Motion::new(x, y, vx, vy), size, Color::rgb(10, 20, 30))
    }

    #[test]
    fn test_reflects_off_right_wall() {
        let size = 10.0;
        let mut b = ball(W - size + 1.0, 300.0, 3.0, 0.0, size);
        let x0 = b.motion.pos.x;

        b.update(W, H);
        assert!(b.motion.vel.x < 0.0);
        assert_eq!(b.motion.vel.x, -3.0);
        assert!(b.motion.pos.x < x0);

        let x1 = b.motion.pos.x;
        b.update(W, H);
        assert!(b.motion.pos.x < x1);
    }

    #[test]
    fn test_reflection_is_a_sign_clamp() {
        // Already heading back in: a second wall hit must not flip it outward
        let mut b = ball(W - 5.0, 300.0, -4.0, 0.0, 10.0);
        b.update(W, H);
        assert_eq!(b.motion.vel.x, -4.0);

        let mut b = ball(300.0, 2.0, 0.0, 5.0, 10.0);
        b.update(W, H);
        assert_eq!(b.motion.vel.y, 5.0);
        assert_eq!(b.motion.pos.y, 7.0);
    }

    #[test]
    fn test_reflects_off_top_and_left() {
        let mut b = ball(5.0, 5.0, -2.0, -6.0, 10.0);
        b.update(W, H);
        assert_eq!(b.motion.vel, Vec2::new(2.0, 6.0));
        assert_eq!(b.motion.pos, Vec2::new(7.0, 11.0));
    }

    #[test]
    fn test_dead_ball_is_frozen() {
        let mut b = ball(W - 5.0, 300.0, 3.0, 1.0, 10.0);
        b.alive = false;
        let before = b.clone();

        b.update(W, H);
        let mut surface = RecordingSurface::new();
        b.draw(&mut surface);

        assert_eq!(b, before);
        assert!(surface.commands.is_empty());
    }

    #[test]
    fn test_draw_fills_with_own_color() {
        let b = ball(100.0, 120.0, 0.0, 0.0, 15.0);
        let mut surface = RecordingSurface::new();
        b.draw(&mut surface);
        assert_eq!(
            surface.commands,
            vec![DrawCommand::FillCircle {
                center: Vec2::new(100.0, 120.0),
                radius: 15.0,
                color: Color::rgb(10, 20, 30),
            }]
        );
    }

    #[test]
    fn test_spawn_fits_on_canvas() {
        let mut rng = seeded(7);
        for _ in 0..200 {
            let b = Bouncer::spawn(&mut rng, W, H);
            assert!(b.size >= 10.0 && b.size <= 20.0);
            assert!(b.motion.pos.x - b.size >= 0.0 && b.motion.pos.x + b.size <= W);
            assert!(b.motion.pos.y - b.size >= 0.0 && b.motion.pos.y + b.size <= H);
            assert!(b.motion.vel.x.abs() <= 7.0 && b.motion.vel.y.abs() <= 7.0);
            assert!(b.alive);
        }
    }

    proptest! {
        /// A ball that starts on the canvas never strays more than one
        /// step past a wall, however long it runs
        #[test]
        fn stays_within_one_step_of_canvas(
            seed in any::<u64>(),
            frames in 1usize..400,
        ) {
            let mut rng = seeded(seed);
            let mut b = Bouncer::spawn(&mut rng, W, H);
            let step = BALL_MAX_SPEED as f32;
            for _ in 0..frames {
                b.update(W, H);
                prop_assert!(b.motion.pos.x >= -step && b.motion.pos.x <= W + step);
                prop_assert!(b.motion.pos.y >= -step && b.motion.pos.y <= H + step);
            }
        }
    }
}
