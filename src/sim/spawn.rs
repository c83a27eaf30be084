use std::f64::consts::FRAC_PI_4;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::config::Config;
use super::geometry::{Offset, Point};
use super::satellite::Satellite;

/// Owned, explicitly seeded satellite source. One instance per session;
/// tests pin the seed to make spawns reproducible.
pub struct SpawnFactory {
    rng: Pcg32,
    config: Config,
}

impl SpawnFactory {
    pub fn new(seed: u64, config: Config) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            config,
        }
    }

    /// A satellite on the left or right edge, heading into the field.
    pub fn spawn(&mut self) -> Satellite {
        let position = self.random_position();
        let velocity = self.random_velocity(position.x);
        Satellite::new(position, velocity)
    }

    fn random_position(&mut self) -> Point {
        let y = self.rng.gen_range(0.0..=self.config.height);
        if self.rng.gen_range(0..2) == 0 {
            Point { x: 0.0, y }
        } else {
            Point { x: self.config.width, y }
        }
    }

    fn random_velocity(&mut self, x: f64) -> Offset {
        // Heading biased away from the spawn edge: a quarter-circle cone
        // pointing inward.
        let angle = if x == 0.0 {
            self.rng.gen_range(-FRAC_PI_4..=FRAC_PI_4)
        } else {
            self.rng.gen_range((3.0 * FRAC_PI_4)..=(5.0 * FRAC_PI_4))
        };
        let speed = self
            .rng
            .gen_range(self.config.satellite_min_speed..=self.config.satellite_max_speed);
        Offset {
            dx: speed * angle.cos(),
            dy: speed * angle.sin(),
        }
    }
}
