//! Game driver and run loop
//!
//! [`Game`] bundles the world with its input queue and HUD. Hosts call
//! [`Game::frame`] once per display refresh; [`run`] does the same in a plain
//! loop until a stop condition holds.

use super::input::CommandQueue;
use super::tick::{FrameReport, frame};
use super::world::{World, WorldConfig};
use crate::error::InitError;
use crate::hud::{CounterSink, Hud};
use crate::renderer::DrawSurface;

#[derive(Debug, Clone)]
pub struct Game {
    pub world: World,
    pub commands: CommandQueue,
    pub hud: Hud,
}

impl Game {
    pub fn new(config: WorldConfig, seed: u64) -> Result<Self, InitError> {
        Ok(Self::from_world(World::new(config, seed)?))
    }

    pub fn from_world(world: World) -> Self {
        Self {
            world,
            commands: CommandQueue::new(),
            hud: Hud::new(),
        }
    }

    /// Show the starting count before the first frame
    pub fn start<C: CounterSink + ?Sized>(&mut self, sink: &mut C) {
        self.hud.sync(self.world.live_count(), sink);
    }

    /// Key-down event. Only queues; the next frame applies it.
    pub fn key_down(&mut self, key: &str) {
        if !self.commands.push_key(key) {
            log::trace!("Ignored key {:?}", key);
        }
    }

    pub fn frame<S, C>(&mut self, surface: &mut S, sink: &mut C) -> FrameReport
    where
        S: DrawSurface + ?Sized,
        C: CounterSink + ?Sized,
    {
        let report = frame(&mut self.world, &mut self.commands, surface);
        if report.killed > 0 {
            log::info!("Frame {}: caught {}, {} left", report.frame, report.killed, report.live);
        }
        self.hud.sync(report.live, sink);
        report
    }
}

/// Run frames until `stop` returns true for a frame's report.
///
/// `before_frame` runs ahead of every frame and may feed input. Returns the
/// number of frames run.
pub fn run<S, C, I, P>(
    game: &mut Game,
    surface: &mut S,
    sink: &mut C,
    mut before_frame: I,
    mut stop: P,
) -> u64
where
    S: DrawSurface + ?Sized,
    C: CounterSink + ?Sized,
    I: FnMut(&mut Game),
    P: FnMut(&FrameReport) -> bool,
{
    game.start(sink);
    let mut frames = 0;
    loop {
        before_frame(game);
        let report = game.frame(surface, sink);
        frames += 1;
        if stop(&report) {
            return frames;
        }
    }
}
