//! Random helpers
//!
//! All randomness flows through a caller-owned generator so a run can be
//! replayed from its seed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::renderer::Color;

/// Seeded generator used by the world
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Uniform integer in `[min, max]` (inclusive).
///
/// Callers must ensure `min <= max`; an empty range panics.
#[inline]
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
    rng.random_range(min..=max)
}

/// Opaque color with each channel uniform over `[0, 255]`
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    Color::rgb(
        random_int(rng, 0, 255) as u8,
        random_int(rng, 0, 255) as u8,
        random_int(rng, 0, 255) as u8,
    )
}
