//! Circle-vs-circle contact checks
//!
//! Exhaustive pairwise tests. Contacts have no physical response: ball pairs
//! only swap to a shared new color, and the hunter only reports which balls it
//! touched so the world can kill them.

use rand::Rng;

use super::bouncer::Bouncer;
use super::hunter::Hunter;
use crate::circles_overlap;
use crate::rng::random_color;

/// Recolor ball `index` and every living ball overlapping it.
///
/// Each overlapping pair gets one fresh color shared by both balls. This runs
/// every frame the overlap lasts, not once per contact. Returns the number of
/// overlapping pairs found.
pub fn recolor_contacts<R: Rng + ?Sized>(
    bouncers: &mut [Bouncer],
    index: usize,
    rng: &mut R,
) -> usize {
    let mut contacts = 0;

    for other in 0..bouncers.len() {
        if other == index {
            continue;
        }
        let (a, b) = (&bouncers[index], &bouncers[other]);
        if !a.alive || !b.alive {
            continue;
        }
        if circles_overlap(a.motion.pos, a.size, b.motion.pos, b.size) {
            let color = random_color(rng);
            bouncers[index].color = color;
            bouncers[other].color = color;
            contacts += 1;
        }
    }

    contacts
}

/// Indices of living balls the hunter currently overlaps
pub fn hunter_contacts(hunter: &Hunter, bouncers: &[Bouncer]) -> Vec<usize> {
    bouncers
        .iter()
        .enumerate()
        .filter(|(_, b)| b.alive)
        .filter(|(_, b)| circles_overlap(hunter.motion.pos, hunter.size, b.motion.pos, b.size))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Color;
    use crate::rng::seeded;
    use crate::sim::entity::Motion;

    fn ball_at(x: f32, y: f32, size: f32, color: Color) -> Bouncer {
        Bouncer::new(Motion::new(x, y, 0.0, 0.0), size, color)
    }

    #[test]
    fn test_overlapping_pair_shares_new_color() {
        let red = Color::rgb(255, 0, 0);
        let blue = Color::rgb(0, 0, 255);
        let mut balls = vec![ball_at(100.0, 100.0, 10.0, red), ball_at(100.0, 100.0, 10.0, blue)];
        let mut rng = seeded(5);

        assert_eq!(recolor_contacts(&mut balls, 0, &mut rng), 1);
        assert_eq!(balls[0].color, balls[1].color);
        // A fresh draw matching the old color is astronomically unlikely with this seed
        assert_ne!(balls[0].color, red);
        assert_ne!(balls[1].color, blue);
    }

    #[test]
    fn test_recolors_every_call_while_overlapping() {
        let mut balls = vec![
            ball_at(50.0, 50.0, 10.0, Color::BLACK),
            ball_at(55.0, 50.0, 10.0, Color::BLACK),
        ];
        let mut rng = seeded(8);

        recolor_contacts(&mut balls, 0, &mut rng);
        let first = balls[0].color;
        recolor_contacts(&mut balls, 0, &mut rng);
        assert_eq!(balls[0].color, balls[1].color);
        assert_ne!(balls[0].color, first);
    }

    #[test]
    fn test_separated_balls_keep_colors() {
        let mut balls = vec![
            ball_at(0.0, 0.0, 10.0, Color::BLACK),
            ball_at(20.0, 0.0, 10.0, Color::WHITE),
        ];
        let mut rng = seeded(1);
        assert_eq!(recolor_contacts(&mut balls, 0, &mut rng), 0);
        assert_eq!(balls[0].color, Color::BLACK);
        assert_eq!(balls[1].color, Color::WHITE);
    }

    #[test]
    fn test_dead_balls_ignored_both_ways() {
        let mut balls = vec![
            ball_at(10.0, 10.0, 10.0, Color::BLACK),
            ball_at(10.0, 10.0, 10.0, Color::WHITE),
        ];
        balls[1].alive = false;
        let mut rng = seeded(2);

        // Live initiator, dead target
        assert_eq!(recolor_contacts(&mut balls, 0, &mut rng), 0);
        // Dead initiator, live target
        assert_eq!(recolor_contacts(&mut balls, 1, &mut rng), 0);
        assert_eq!(balls[0].color, Color::BLACK);
        assert_eq!(balls[1].color, Color::WHITE);
    }

    #[test]
    fn test_hunter_contacts_skip_dead_and_distant() {
        let hunter = Hunter::new(100.0, 100.0);
        let mut balls = vec![
            ball_at(105.0, 100.0, 10.0, Color::BLACK),
            ball_at(300.0, 300.0, 10.0, Color::BLACK),
            ball_at(100.0, 95.0, 12.0, Color::BLACK),
            ball_at(100.0, 100.0, 15.0, Color::BLACK),
        ];
        balls[3].alive = false;

        assert_eq!(hunter_contacts(&hunter, &balls), vec![0, 2]);
    }
}
