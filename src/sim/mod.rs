//! Simulation module
//!
//! Entities, per-frame physics and the run loop. Everything here is
//! single-threaded and deterministic for a given seed and input sequence:
//! - Seeded RNG only, owned by the world
//! - Stable iteration order (collection order, fixed after spawn)
//! - Drawing goes through `DrawSurface`, never a concrete backend

pub mod bouncer;
pub mod collision;
pub mod entity;
pub mod hunter;
pub mod input;
pub mod runner;
pub mod tick;
pub mod world;

pub use bouncer::Bouncer;
pub use collision::{hunter_contacts, recolor_contacts};
pub use entity::Motion;
pub use hunter::Hunter;
pub use input::{Command, CommandQueue, Direction};
pub use runner::{Game, run};
pub use tick::{FrameReport, TRAIL_OVERLAY, frame};
pub use world::{World, WorldConfig};
