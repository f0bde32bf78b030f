//! One animation frame
//!
//! Order matters and is the only ordering guarantee:
//! 1. queued input moves the hunter (each step clamped)
//! 2. a translucent overlay fades the previous frames
//! 3. each ball draws, moves, then checks contacts in collection order, so
//!    later balls see earlier balls' new positions
//! 4. the hunter draws, clamps and catches

use serde::Serialize;

use super::input::CommandQueue;
use super::world::World;
use crate::consts::TRAIL_FADE_ALPHA;
use crate::renderer::{Color, DrawSurface};

/// Overlay painted over the whole canvas at the start of each frame
pub const TRAIL_OVERLAY: Color = Color::rgba(0, 0, 0, TRAIL_FADE_ALPHA);

/// What happened during one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FrameReport {
    /// Frame number just completed (1-based)
    pub frame: u64,
    /// Balls caught by the hunter this frame
    pub killed: usize,
    /// Living balls after the frame
    pub live: usize,
    /// Ball pairs found overlapping (counted from each initiator)
    pub contacts: usize,
}

/// Advance the world by one frame, drawing onto `surface`
pub fn frame<S: DrawSurface + ?Sized>(
    world: &mut World,
    commands: &mut CommandQueue,
    surface: &mut S,
) -> FrameReport {
    for command in commands.drain() {
        world.apply(command);
    }

    surface.set_fill_style(TRAIL_OVERLAY);
    surface.fill_rect(0.0, 0.0, world.width, world.height);

    let mut contacts = 0;
    for i in 0..world.bouncers().len() {
        world.bouncers()[i].draw(surface);
        world.update_bouncer(i);
        contacts += world.bouncer_collision_detect(i);
    }

    world.hunter.draw(surface);
    world.clamp_hunter();
    let killed = world.hunter_collision_detect();

    world.frame += 1;
    FrameReport {
        frame: world.frame,
        killed,
        live: world.live_count(),
        contacts,
    }
}
