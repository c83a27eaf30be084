use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::sim::{Config, InputEvent, Point, SpawnFactory, Universe};

/// Owns the universe and translates raw terminal input into the abstract
/// events the simulation consumes.
pub struct App {
    pub should_quit: bool,
    config: Config,
    universe: Universe,
}

impl App {
    pub fn new(seed: u64) -> Self {
        let config = Config::default();
        let mut factory = SpawnFactory::new(seed, config.clone());
        let universe = Universe::new(
            config.clone(),
            Instant::now(),
            Box::new(move || factory.spawn()),
        );
        Self {
            should_quit: false,
            config,
            universe,
        }
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn on_tick(&mut self) {
        self.universe.update(Instant::now(), InputEvent::Frame);
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        let event = match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Enter | KeyCode::Char(' ') => InputEvent::Start,
            KeyCode::Left => InputEvent::Left,
            KeyCode::Right => InputEvent::Right,
            _ => InputEvent::Unknown,
        };
        self.universe.update(Instant::now(), event);
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) | MouseEventKind::Down(_) => {
                // Terminal cells are taller than wide; the fixed ratios map
                // cell coordinates onto the square playfield space.
                let point = Point {
                    x: mouse.column as f64 * self.config.mouse_ratio_x,
                    y: mouse.row as f64 * self.config.mouse_ratio_y,
                };
                self.universe.update(Instant::now(), InputEvent::Mouse(point));
            }
            _ => {}
        }
    }
}
