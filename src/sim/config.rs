use std::f64::consts::PI;
use std::time::Duration;

use super::geometry::{Offset, Point};

/// Every named constant of the simulation in one place. Values are fixed
/// for a session; tests build variants by mutating a `Default`.
#[derive(Clone, Debug)]
pub struct Config {
    /// Playfield size in playfield units.
    pub width: f64,
    pub height: f64,
    pub planet_center: Point,
    pub planet_radius: f64,
    /// Distance from the planet center to the shield segment.
    pub shield_radius: f64,
    /// Half-length of the shield segment.
    pub shield_span: f64,
    /// Angle applied per Left/Right input.
    pub shield_angle_step: f64,
    pub satellite_radius: f64,
    pub satellite_min_speed: f64,
    pub satellite_max_speed: f64,
    pub initial_satellites: usize,
    /// One new satellite is appended every interval while playing.
    pub spawn_interval: Duration,
    /// Cadence of the host tick source.
    pub frame_interval: Duration,
    /// Cadence of the intro text crawl.
    pub intro_scroll_interval: Duration,
    /// Terminal character cell measured in playfield units (braille: 2x4).
    pub char_width: i32,
    pub char_height: i32,
    /// Device-to-playfield input scaling, matching the cell size.
    pub mouse_ratio_x: f64,
    pub mouse_ratio_y: f64,
}

impl Config {
    /// Local shield endpoints before rotation, relative to the planet center.
    pub fn shield_local(&self) -> (Point, Point) {
        (
            Point {
                x: -self.shield_span,
                y: -self.shield_radius,
            },
            Point {
                x: self.shield_span,
                y: -self.shield_radius,
            },
        )
    }

    pub fn center_offset(&self) -> Offset {
        Offset {
            dx: self.planet_center.x,
            dy: self.planet_center.y,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 300.0,
            height: 150.0,
            planet_center: Point { x: 150.0, y: 75.0 },
            planet_radius: 30.0,
            shield_radius: 40.0,
            shield_span: 10.0,
            shield_angle_step: PI / 16.0,
            satellite_radius: 2.0,
            satellite_min_speed: 1.0,
            satellite_max_speed: 2.5,
            initial_satellites: 2,
            spawn_interval: Duration::from_secs(3),
            frame_interval: Duration::from_millis(25),
            intro_scroll_interval: Duration::from_millis(100),
            char_width: 2,
            char_height: 4,
            mouse_ratio_x: 2.0,
            mouse_ratio_y: 4.0,
        }
    }
}
