use super::config::Config;
use super::geometry::{distance, Offset, Point};
use super::shield::Shield;

/// A drifting satellite: bounces off the playfield edges, deflects off
/// the shield, destroys the planet on contact.
#[derive(Clone, Debug)]
pub struct Satellite {
    position: Point,
    velocity: Offset,
    /// Render-only blink phase, toggled every tick.
    blink: bool,
}

impl Satellite {
    pub fn new(position: Point, velocity: Offset) -> Self {
        Self {
            position,
            velocity,
            blink: false,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn velocity(&self) -> Offset {
        self.velocity
    }

    pub fn blink(&self) -> bool {
        self.blink
    }

    /// Within capture range of the planet.
    pub fn is_near_planet(&self, config: &Config) -> bool {
        distance(self.position, config.planet_center)
            <= config.planet_radius + config.satellite_radius
    }

    /// Advance one tick. Walls are resolved before the shield, so a
    /// satellite that bounces and grazes the shield on the same tick is
    /// tested at its post-bounce position. The bounce re-applies only the
    /// reflected axis, landing at the tick boundary rather than the exact
    /// wall. Returns true when the shield deflected the satellite.
    pub fn update(&mut self, shield: &Shield, config: &Config) -> bool {
        self.blink = !self.blink;

        self.position.x += self.velocity.dx;
        self.position.y += self.velocity.dy;

        if self.position.x >= config.width || self.position.x < 0.0 {
            self.velocity.dx = -self.velocity.dx;
            self.position.x += self.velocity.dx;
        }
        if self.position.y >= config.height || self.position.y < 0.0 {
            self.velocity.dy = -self.velocity.dy;
            self.position.y += self.velocity.dy;
        }

        if shield.is_near(self.position, config) {
            self.velocity.dx = -self.velocity.dx;
            self.velocity.dy = -self.velocity.dy;
            self.position.x += self.velocity.dx;
            self.position.y += self.velocity.dy;
            return true;
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geometry::transpose;

    #[test]
    fn near_planet_at_capture_radius() {
        let config = Config::default();
        let position = transpose(
            config.planet_center,
            Offset { dx: 0.0, dy: config.planet_radius },
        );
        let satellite = Satellite::new(position, Offset { dx: 2.0, dy: 3.0 });
        assert!(satellite.is_near_planet(&config));
    }

    #[test]
    fn not_near_planet_one_unit_outside() {
        let config = Config::default();
        let position = transpose(
            config.planet_center,
            Offset {
                dx: 0.0,
                dy: config.planet_radius + config.satellite_radius + 1.0,
            },
        );
        let satellite = Satellite::new(position, Offset { dx: 2.0, dy: 3.0 });
        assert!(!satellite.is_near_planet(&config));
    }

    #[test]
    fn bounces_off_the_left_wall() {
        let config = Config::default();
        let shield = Shield::new(&config);
        let mut satellite = Satellite::new(
            Point { x: 1.0, y: config.planet_center.y },
            Offset { dx: -2.0, dy: 0.0 },
        );

        let deflected = satellite.update(&shield, &config);

        assert!(!deflected);
        assert!(satellite.position().x >= 0.0);
        assert!(satellite.velocity().dx > 0.0);
    }

    #[test]
    fn bounces_off_the_bottom_wall() {
        let config = Config::default();
        let shield = Shield::new(&config);
        let mut satellite = Satellite::new(
            Point { x: 20.0, y: config.height - 1.0 },
            Offset { dx: 0.0, dy: 3.0 },
        );

        satellite.update(&shield, &config);

        assert!(satellite.position().y < config.height);
        assert!(satellite.velocity().dy < 0.0);
    }

    #[test]
    fn deflects_off_the_shield_and_reverses() {
        let config = Config::default();
        let shield = Shield::new(&config);
        // Drifting down onto the shield line (y = center.y - shield_radius
        // at angle 0), between the endpoints.
        let line_y = config.planet_center.y - config.shield_radius;
        let mut satellite = Satellite::new(
            Point { x: config.planet_center.x, y: line_y - 1.0 },
            Offset { dx: 0.0, dy: 1.0 },
        );

        let deflected = satellite.update(&shield, &config);

        assert!(deflected);
        assert!(satellite.velocity().dy < 0.0);
        assert!(satellite.position().y < line_y);
    }

    #[test]
    fn blink_toggles_every_tick() {
        let config = Config::default();
        let shield = Shield::new(&config);
        let mut satellite =
            Satellite::new(Point { x: 10.0, y: 10.0 }, Offset { dx: 0.5, dy: 0.5 });

        assert!(!satellite.blink());
        satellite.update(&shield, &config);
        assert!(satellite.blink());
        satellite.update(&shield, &config);
        assert!(!satellite.blink());
    }
}
