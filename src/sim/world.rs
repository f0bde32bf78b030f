//! World state
//!
//! The world owns every ball, the hunter, the live counter and the RNG. The
//! counter only changes inside [`World::kill`], so it always equals the
//! number of living balls.

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bouncer::Bouncer;
use super::collision::{hunter_contacts, recolor_contacts};
use super::hunter::Hunter;
use super::input::Command;
use crate::consts::*;
use crate::error::InitError;
use crate::rng::seeded;

/// Canvas size and population, fixed for the lifetime of a run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    pub width: f32,
    pub height: f32,
    pub ball_count: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            ball_count: BALL_COUNT,
        }
    }
}

impl WorldConfig {
    pub fn with_size(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Smallest canvas edge that fits the largest ball and the hunter
    pub fn min_extent() -> f32 {
        ((2 * BALL_MAX_SIZE) as f32).max(2.0 * HUNTER_SIZE)
    }

    pub fn validate(&self) -> Result<(), InitError> {
        let min = Self::min_extent();
        if !(self.width >= min && self.height >= min) {
            return Err(InitError::CanvasTooSmall {
                width: self.width,
                height: self.height,
                min,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct World {
    pub width: f32,
    pub height: f32,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Frames completed so far
    pub frame: u64,
    /// Fixed order, never resized; dead balls stay in place
    bouncers: Vec<Bouncer>,
    pub hunter: Hunter,
    live_count: usize,
    #[serde(skip)]
    rng: Pcg32,
}

impl World {
    /// Spawn a fresh world from `seed`
    pub fn new(config: WorldConfig, seed: u64) -> Result<Self, InitError> {
        config.validate()?;
        let mut rng = seeded(seed);

        let bouncers: Vec<Bouncer> = (0..config.ball_count)
            .map(|_| Bouncer::spawn(&mut rng, config.width, config.height))
            .collect();
        let hunter = Hunter::spawn(&mut rng, config.width, config.height);

        log::info!(
            "World {}x{} spawned {} balls (seed {})",
            config.width,
            config.height,
            bouncers.len(),
            seed
        );

        Ok(Self::from_parts(config, bouncers, hunter, rng, seed))
    }

    /// Assemble a world from explicit entities (scripted scenes, tests)
    pub fn with_entities(
        config: WorldConfig,
        bouncers: Vec<Bouncer>,
        hunter: Hunter,
        seed: u64,
    ) -> Self {
        Self::from_parts(config, bouncers, hunter, seeded(seed), seed)
    }

    fn from_parts(
        config: WorldConfig,
        bouncers: Vec<Bouncer>,
        hunter: Hunter,
        rng: Pcg32,
        seed: u64,
    ) -> Self {
        let live_count = bouncers.iter().filter(|b| b.alive).count();
        Self {
            width: config.width,
            height: config.height,
            seed,
            frame: 0,
            bouncers,
            hunter,
            live_count,
            rng,
        }
    }

    pub fn bouncers(&self) -> &[Bouncer] {
        &self.bouncers
    }

    /// Balls still alive
    pub fn live_count(&self) -> usize {
        self.live_count
    }

    /// Flag ball `index` dead. Returns false if it was already dead.
    pub fn kill(&mut self, index: usize) -> bool {
        match self.bouncers.get_mut(index) {
            Some(b) if b.alive => {
                b.alive = false;
                self.live_count -= 1;
                log::debug!("Ball {} caught, {} left", index, self.live_count);
                true
            }
            _ => false,
        }
    }

    /// Advance ball `index` one frame (bounce, then move)
    pub fn update_bouncer(&mut self, index: usize) {
        let (w, h) = (self.width, self.height);
        if let Some(b) = self.bouncers.get_mut(index) {
            b.update(w, h);
        }
    }

    /// Recolor ball `index` against every other ball
    pub fn bouncer_collision_detect(&mut self, index: usize) -> usize {
        recolor_contacts(&mut self.bouncers, index, &mut self.rng)
    }

    /// Kill every living ball the hunter overlaps. Returns how many died.
    pub fn hunter_collision_detect(&mut self) -> usize {
        let mut killed = 0;
        for i in hunter_contacts(&self.hunter, &self.bouncers) {
            if self.kill(i) {
                killed += 1;
            }
        }
        killed
    }

    pub fn clamp_hunter(&mut self) {
        self.hunter.check_bounds(self.width, self.height);
    }

    /// Apply one queued input command
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Move(dir) => {
                self.hunter.step(dir);
                self.clamp_hunter();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Color;
    use crate::sim::entity::Motion;
    use crate::sim::input::Direction;

    fn still_ball(x: f32, y: f32, size: f32) -> Bouncer {
        Bouncer::new(Motion::new(x, y, 0.0, 0.0), size, Color::rgb(1, 2, 3))
    }

    #[test]
    fn test_new_world_population() {
        let world = World::new(WorldConfig::default(), 1234).expect("default config is valid");
        assert_eq!(world.bouncers().len(), BALL_COUNT);
        assert_eq!(world.live_count(), BALL_COUNT);
        assert_eq!(world.frame, 0);
    }

    #[test]
    fn test_same_seed_same_world() {
        let a = World::new(WorldConfig::default(), 77).expect("valid");
        let b = World::new(WorldConfig::default(), 77).expect("valid");
        assert_eq!(a.bouncers(), b.bouncers());
        assert_eq!(a.hunter, b.hunter);
    }

    #[test]
    fn test_canvas_too_small() {
        let err = World::new(WorldConfig::with_size(30.0, 600.0), 1).unwrap_err();
        assert!(matches!(err, InitError::CanvasTooSmall { min, .. } if min == 40.0));

        assert!(World::new(WorldConfig::with_size(40.0, 40.0), 1).is_ok());
    }

    #[test]
    fn test_kill_is_idempotent() {
        let cfg = WorldConfig::default();
        let mut world = World::with_entities(
            cfg,
            vec![still_ball(100.0, 100.0, 10.0), still_ball(200.0, 100.0, 10.0)],
            Hunter::new(500.0, 500.0),
            0,
        );
        assert!(world.kill(0));
        assert!(!world.kill(0));
        assert!(!world.kill(99));
        assert_eq!(world.live_count(), 1);
        assert_eq!(world.bouncers().len(), 2);
    }

    #[test]
    fn test_hunter_kills_n_and_counter_follows() {
        let cfg = WorldConfig::default();
        let mut balls: Vec<Bouncer> = (0..10)
            .map(|i| still_ball(50.0 + i as f32 * 60.0, 500.0, 10.0))
            .collect();
        // Stack three balls on the hunter
        for b in balls.iter_mut().take(3) {
            b.motion.pos = glam::Vec2::new(300.0, 300.0);
        }
        let mut world = World::with_entities(cfg, balls, Hunter::new(300.0, 300.0), 0);
        let before = world.live_count();

        let killed = world.hunter_collision_detect();
        assert_eq!(killed, 3);
        assert_eq!(world.live_count(), before - 3);
        assert_eq!(
            world.live_count(),
            world.bouncers().iter().filter(|b| b.alive).count()
        );

        // Nothing left to kill on a second pass
        assert_eq!(world.hunter_collision_detect(), 0);
    }

    #[test]
    fn test_dead_ball_unchanged_by_everything() {
        let cfg = WorldConfig::default();
        let mut dead = Bouncer::new(Motion::new(300.0, 300.0, 4.0, -2.0), 12.0, Color::WHITE);
        dead.alive = false;
        let live = still_ball(300.0, 300.0, 12.0);
        let mut world = World::with_entities(cfg, vec![dead.clone(), live], Hunter::new(300.0, 300.0), 3);

        world.update_bouncer(0);
        world.bouncer_collision_detect(0);
        world.bouncer_collision_detect(1);
        world.hunter_collision_detect();

        assert_eq!(world.bouncers()[0], dead);
    }

    #[test]
    fn test_apply_move_clamps() {
        let cfg = WorldConfig::default();
        let mut world = World::with_entities(cfg, Vec::new(), Hunter::new(HUNTER_SIZE + 5.0, 300.0), 0);
        world.apply(Command::Move(Direction::Left));
        assert_eq!(world.hunter.motion.pos.x, HUNTER_SIZE);
        world.apply(Command::Move(Direction::Right));
        assert_eq!(world.hunter.motion.pos.x, HUNTER_SIZE + HUNTER_STEP);
    }

    #[test]
    fn test_snapshot_serializes() {
        let world = World::new(WorldConfig::default(), 5).expect("valid");
        let json = serde_json::to_value(&world).expect("world serializes");
        assert_eq!(json["bouncers"].as_array().map(|a| a.len()), Some(BALL_COUNT));
        assert_eq!(json["live_count"], BALL_COUNT);
        assert!(json.get("rng").is_none());
    }
}
