use super::config::Config;
use super::satellite::Satellite;

/// The defended target. Destruction is terminal: once any satellite gets
/// within capture range the flag latches and later updates are no-ops.
#[derive(Clone, Debug, Default)]
pub struct Planet {
    destroyed: bool,
}

impl Planet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Returns whether the planet is still alive.
    pub fn update(&mut self, satellites: &[Satellite], config: &Config) -> bool {
        if self.destroyed {
            return false;
        }
        self.destroyed = satellites.iter().any(|s| s.is_near_planet(config));
        !self.destroyed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geometry::{Offset, Point};

    fn parked(x: f64, y: f64) -> Satellite {
        Satellite::new(Point { x, y }, Offset::default())
    }

    #[test]
    fn survives_satellites_in_the_corners() {
        let config = Config::default();
        let satellites = vec![
            parked(0.0, 0.0),
            parked(0.0, config.height),
            parked(config.width, 0.0),
            parked(config.width, config.height),
        ];
        let mut planet = Planet::new();

        assert!(planet.update(&satellites, &config));
        assert!(!planet.is_destroyed());
    }

    #[test]
    fn dies_when_a_satellite_reaches_the_core() {
        let config = Config::default();
        let satellites = vec![
            parked(0.0, 0.0),
            parked(
                config.planet_center.x + config.planet_radius / 2.0,
                config.planet_center.y - config.planet_radius / 2.0,
            ),
        ];
        let mut planet = Planet::new();

        assert!(!planet.update(&satellites, &config));
        assert!(planet.is_destroyed());
    }

    #[test]
    fn destruction_is_terminal() {
        let config = Config::default();
        let mut planet = Planet::new();
        let lethal = vec![parked(config.planet_center.x, config.planet_center.y)];

        assert!(!planet.update(&lethal, &config));

        // Even with every satellite gone, the planet stays destroyed.
        assert!(!planet.update(&[], &config));
        assert!(!planet.update(&[parked(0.0, 0.0)], &config));
        assert!(planet.is_destroyed());
    }
}
