pub mod config;
pub mod geometry;
pub mod planet;
pub mod satellite;
pub mod scene;
pub mod shield;
pub mod spawn;

use std::time::Instant;

pub use config::Config;
pub use geometry::Point;
pub use satellite::Satellite;
pub use scene::{Hue, Scene, Shape};
pub use shield::Shield;
pub use spawn::SpawnFactory;

use planet::Planet;
use scene::stretch_text;

const INTRO_TEXT: [&str; 7] = [
    "EARTH, 2184.",
    "The orbital junk belt has collapsed.",
    "Dead satellites rain from the sky.",
    "One deflector shield still answers.",
    "You hold its controls.",
    "Aim well. Nothing else stands between them and home.",
    "Press ENTER to begin.",
];

const EXPLOSION_TEXT: &str = "BOOOOOOOOOOOOOOOOOOOOOOM";

/// Session phase. `End` is terminal: no event leaves it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Intro,
    Play,
    End,
}

/// Abstract input fed to the universe, one per update. The host maps
/// device input onto these; `Frame` is the synthetic clock tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Frame,
    Start,
    Mouse(Point),
    Left,
    Right,
    Unknown,
}

/// Injected spawn strategy, held for the whole session.
pub type SatelliteFactory = Box<dyn FnMut() -> Satellite>;

/// The aggregate root: planet, shield and satellites under one state
/// machine. Consumes `(now, event)` pairs, produces a renderable
/// `Scene`. Time only ever arrives from outside; the universe compares
/// instants and never blocks.
pub struct Universe {
    config: Config,
    state: State,
    score: u64,
    planet: Planet,
    shield: Shield,
    satellites: Vec<Satellite>,
    factory: SatelliteFactory,
    last_spawn: Instant,
    last_scroll: Instant,
    intro_offset: i32,
}

impl Universe {
    pub fn new(config: Config, now: Instant, mut factory: SatelliteFactory) -> Self {
        let satellites = (0..config.initial_satellites).map(|_| factory()).collect();
        let intro_offset = config.height as i32;
        Self {
            shield: Shield::new(&config),
            config,
            state: State::Intro,
            score: 0,
            planet: Planet::new(),
            satellites,
            factory,
            last_spawn: now,
            last_scroll: now,
            intro_offset,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn satellites(&self) -> &[Satellite] {
        &self.satellites
    }

    pub fn shield(&self) -> &Shield {
        &self.shield
    }

    pub fn intro_text_offset(&self) -> i32 {
        self.intro_offset
    }

    pub fn update(&mut self, now: Instant, event: InputEvent) {
        match self.state {
            State::Intro => self.update_intro(now, event),
            State::Play => self.update_play(now, event),
            // Terminal: the final scene keeps rendering, untouched.
            State::End => {}
        }
    }

    fn update_intro(&mut self, now: Instant, event: InputEvent) {
        match event {
            InputEvent::Start => {
                log::info!("session started");
                self.state = State::Play;
            }
            InputEvent::Frame => {
                if now.duration_since(self.last_scroll) >= self.config.intro_scroll_interval {
                    self.last_scroll = now;
                    self.intro_offset = (self.intro_offset - self.config.char_height).max(0);
                }
            }
            _ => {}
        }
    }

    fn update_play(&mut self, now: Instant, event: InputEvent) {
        match event {
            InputEvent::Mouse(point) => self.shield.aim(point, &self.config),
            InputEvent::Left => self.shield.rotate_left(&self.config),
            InputEvent::Right => self.shield.rotate_right(&self.config),
            InputEvent::Frame => {
                // Each deflection is worth the current threat count.
                let threat = self.satellites.len() as u64;
                for satellite in &mut self.satellites {
                    if satellite.update(&self.shield, &self.config) {
                        self.score += threat;
                    }
                }

                if !self.planet.update(&self.satellites, &self.config) {
                    log::info!("planet destroyed, final score {}", self.score);
                    self.state = State::End;
                    return;
                }

                if now.duration_since(self.last_spawn) >= self.config.spawn_interval {
                    self.last_spawn = now;
                    self.satellites.push((self.factory)());
                    log::debug!("satellite spawned, {} in orbit", self.satellites.len());
                }
            }
            _ => {}
        }
    }

    pub fn scene(&self) -> Scene {
        let mut scene = Scene {
            shapes: match self.state {
                State::Intro => self.intro_shapes(),
                State::Play | State::End => self.field_shapes(),
            },
            status: vec![
                format!("Satellites: {}", self.satellites.len()),
                format!("Score: {}", self.score),
            ],
        };
        if self.state == State::End {
            scene.status.push("GAME OVER".to_string());
        }
        scene
    }

    /// The narrative crawl: lines scroll upward together, each stretched
    /// to the width available at its height. The usable width shrinks
    /// with distance from the bottom edge, which gives the crawl its
    /// vanishing perspective.
    fn intro_shapes(&self) -> Vec<Shape> {
        let cfg = &self.config;
        let mut shapes = Vec::new();
        for (i, line) in INTRO_TEXT.iter().enumerate() {
            let y = self.intro_offset + i as i32 * 2 * cfg.char_height;
            if y < 0 || y >= cfg.height as i32 {
                continue;
            }
            let inset = (cfg.height as i32 - y) / 3;
            let avail = cfg.width as i32 - 2 * inset;
            if avail < cfg.char_width {
                continue;
            }
            let text = stretch_text((avail / cfg.char_width) as usize, line);
            let x = inset + (avail - text.chars().count() as i32 * cfg.char_width).max(0) / 2;
            shapes.push(Shape::Text {
                x,
                y,
                text,
                hue: Hue::Yellow,
            });
        }
        shapes
    }

    fn field_shapes(&self) -> Vec<Shape> {
        let cfg = &self.config;
        let destroyed = self.planet.is_destroyed();
        let mut shapes = vec![
            Shape::Disc {
                center: cfg.planet_center,
                radius: cfg.planet_radius,
                hue: if destroyed { Hue::Red } else { Hue::Blue },
            },
            Shape::Ring {
                center: cfg.planet_center,
                radius: cfg.shield_radius,
                hue: Hue::White,
            },
            Shape::Beam {
                segment: *self.shield.segment(),
                hue: Hue::White,
            },
        ];
        for satellite in &self.satellites {
            shapes.push(Shape::Disc {
                center: satellite.position(),
                radius: cfg.satellite_radius,
                hue: if satellite.blink() { Hue::Red } else { Hue::Yellow },
            });
        }
        if destroyed {
            shapes.push(Shape::Text {
                x: cfg.planet_center.x as i32 - 20,
                y: cfg.planet_center.y as i32,
                text: EXPLOSION_TEXT.to_string(),
                hue: Hue::Red,
            });
        }
        shapes
    }
}
