/*
 * Boid Module
 *
 * This module defines the Boid view proxy. A boid is identified by its
 * column index into the Flock's state; the proxy mirrors that column's
 * position for rendering and owns nothing else. Proxies are created 1:1
 * with the flock at session start and live exactly as long as it does.
 */

use nannou::prelude::*;

use crate::flock::Flock;
use crate::BOID_SIZE;

#[derive(Clone)]
pub struct Boid {
    pub id: usize,
    pub position: Vec2,
}

impl Boid {
    pub fn new(id: usize, position: Vec2) -> Self {
        Self { id, position }
    }

    // Refresh the mirrored position from the authoritative flock state
    pub fn sync(&mut self, flock: &Flock) {
        self.position = flock.position_of(self.id);
    }

    // Draw the boid as a triangle pointing along its heading
    pub fn draw(&self, draw: &Draw, heading: Vec2) {
        let angle = heading.y.atan2(heading.x);

        let points = [
            pt2(BOID_SIZE, 0.0),
            pt2(-BOID_SIZE, BOID_SIZE / 2.0),
            pt2(-BOID_SIZE, -BOID_SIZE / 2.0),
        ];

        draw.polygon()
            .color(rgb(220u8, 220, 220))
            .points(points)
            .xy(self.position)
            .rotate(angle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FlockConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn sync_mirrors_the_flock_column() {
        let config = FlockConfig::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut flock =
            Flock::spawn_with_rng(4, [0.0, 10.0], [0.0, 10.0], &config, &mut rng).unwrap();
        let mut boids: Vec<Boid> = (0..flock.len())
            .map(|id| Boid::new(id, flock.position_of(id)))
            .collect();

        flock.update_positions(None);
        for boid in &mut boids {
            boid.sync(&flock);
        }

        for boid in &boids {
            assert_eq!(boid.position, flock.position_of(boid.id));
        }
    }
}
