use std::f64::consts::FRAC_PI_2;

use super::config::Config;
use super::geometry::{distance, line_distance, rotate, transpose, Point, Segment};

/// Distances from a point to the shield line and to each endpoint,
/// plus the resulting near/far verdict.
#[derive(Clone, Copy, Debug)]
pub struct Proximity {
    pub near: bool,
    pub to_shield: f64,
    pub to_p1: f64,
    pub to_p2: f64,
}

/// A rotatable segment orbiting the planet at a fixed radius. The
/// segment is always derived from `angle`; it is recomputed on every
/// orientation change, never mutated directly.
#[derive(Clone, Debug)]
pub struct Shield {
    angle: f64,
    segment: Segment,
}

impl Shield {
    pub fn new(config: &Config) -> Self {
        let mut shield = Self {
            angle: 0.0,
            segment: Segment::default(),
        };
        shield.set_angle(0.0, config);
        shield
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn segment(&self) -> &Segment {
        &self.segment
    }

    /// Point the shield at the mouse: the segment ends up tangent to the
    /// circle through the mouse position, facing it. The +pi/2 turns the
    /// direction-to-mouse into the segment's perpendicular.
    pub fn aim(&mut self, mouse: Point, config: &Config) {
        let center = config.planet_center;
        let angle = (mouse.y - center.y).atan2(mouse.x - center.x) + FRAC_PI_2;
        self.set_angle(angle, config);
    }

    pub fn set_angle(&mut self, angle: f64, config: &Config) {
        self.angle = angle;
        let (left, right) = config.shield_local();
        let center = config.center_offset();
        self.segment = Segment {
            p1: transpose(rotate(left, angle), center),
            p2: transpose(rotate(right, angle), center),
        };
    }

    pub fn rotate_left(&mut self, config: &Config) {
        self.set_angle(self.angle - config.shield_angle_step, config);
    }

    pub fn rotate_right(&mut self, config: &Config) {
        self.set_angle(self.angle + config.shield_angle_step, config);
    }

    /// True iff `point` is close to the finite shield segment: within a
    /// satellite radius of the (infinite) shield line and within twice the
    /// shield span of each endpoint. Checked in that order; the endpoint
    /// conditions bound the unclamped line distance.
    pub fn is_near(&self, point: Point, config: &Config) -> bool {
        if line_distance(point, &self.segment) > config.satellite_radius {
            return false;
        }
        if distance(point, self.segment.p1) > config.shield_span * 2.0 {
            return false;
        }
        if distance(point, self.segment.p2) > config.shield_span * 2.0 {
            return false;
        }
        true
    }

    /// Same verdict as `is_near`, with all three distances reported.
    pub fn proximity(&self, point: Point, config: &Config) -> Proximity {
        let to_shield = line_distance(point, &self.segment);
        let to_p1 = distance(point, self.segment.p1);
        let to_p2 = distance(point, self.segment.p2);
        Proximity {
            near: to_shield <= config.satellite_radius
                && to_p1 <= config.shield_span * 2.0
                && to_p2 <= config.shield_span * 2.0,
            to_shield,
            to_p1,
            to_p2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geometry::Offset;

    const EPS: f64 = 1e-9;

    #[test]
    fn aim_straight_up_leaves_angle_zero() {
        let config = Config::default();
        let mut shield = Shield::new(&config);
        let mouse = transpose(config.planet_center, Offset { dx: 0.0, dy: -50.0 });

        shield.aim(mouse, &config);

        assert!(shield.angle().abs() < EPS);
        let center = config.planet_center;
        let segment = shield.segment();
        assert!((segment.p1.x - (center.x - config.shield_span)).abs() < EPS);
        assert!((segment.p1.y - (center.y - config.shield_radius)).abs() < EPS);
        assert!((segment.p2.x - (center.x + config.shield_span)).abs() < EPS);
        assert!((segment.p2.y - (center.y - config.shield_radius)).abs() < EPS);
    }

    #[test]
    fn rotate_left_and_right_step_the_angle() {
        let config = Config::default();
        let mut shield = Shield::new(&config);

        shield.rotate_left(&config);
        assert!((shield.angle() + config.shield_angle_step).abs() < EPS);

        shield.rotate_right(&config);
        shield.rotate_right(&config);
        assert!((shield.angle() - config.shield_angle_step).abs() < EPS);
    }

    #[test]
    fn is_near_respects_all_three_conditions() {
        let config = Config::default();
        let shield = Shield::new(&config);
        // At angle 0 the segment runs along y = center.y - shield_radius.
        let on_line_y = config.planet_center.y - config.shield_radius;

        // Just off the line, between the endpoints.
        assert!(shield.is_near(
            Point { x: config.planet_center.x, y: on_line_y + 1.0 },
            &config,
        ));
        // On the line but far past the endpoints.
        assert!(!shield.is_near(
            Point { x: config.planet_center.x + 60.0, y: on_line_y },
            &config,
        ));
        // Between the endpoints but too far off the line.
        assert!(!shield.is_near(
            Point {
                x: config.planet_center.x,
                y: on_line_y + config.satellite_radius + 1.0,
            },
            &config,
        ));
    }

    #[test]
    fn proximity_reports_the_distances() {
        let config = Config::default();
        let shield = Shield::new(&config);
        let on_line_y = config.planet_center.y - config.shield_radius;

        let p = shield.proximity(
            Point { x: config.planet_center.x, y: on_line_y + 1.0 },
            &config,
        );
        assert!(p.near);
        assert!((p.to_shield - 1.0).abs() < EPS);
        assert!((p.to_p1 - p.to_p2).abs() < EPS);
    }

    #[test]
    fn vertical_segment_does_not_divide_by_zero() {
        let config = Config::default();
        let mut shield = Shield::new(&config);
        // A quarter turn makes the segment vertical.
        shield.set_angle(std::f64::consts::FRAC_PI_2, &config);

        let x = shield.segment().p1.x;
        assert!((shield.segment().p2.x - x).abs() < EPS);
        let p = shield.proximity(Point { x: x + 1.5, y: config.planet_center.y }, &config);
        assert!(p.to_shield.is_finite());
        assert!((p.to_shield - 1.5).abs() < EPS);
    }
}
