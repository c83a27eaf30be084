use ratatui::prelude::*;
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine};
use ratatui::widgets::*;

use crate::app::App;
use crate::sim::{Hue, Scene, Shape};

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Playfield
            Constraint::Length(26), // Side panel
        ])
        .split(frame.area());

    let scene = app.universe().scene();
    render_field(frame, chunks[0], app, &scene);
    render_panel(frame, chunks[1], &scene);
}

fn color(hue: Hue) -> Color {
    match hue {
        Hue::Blue => Color::Blue,
        Hue::Red => Color::Red,
        Hue::Yellow => Color::Yellow,
        Hue::White => Color::White,
    }
}

fn render_field(frame: &mut Frame, area: Rect, app: &App, scene: &Scene) {
    let config = app.config();
    let height = config.height;

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .title(" Deflector ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        )
        .marker(symbols::Marker::Braille)
        .x_bounds([0.0, config.width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            // The scene uses screen-style y (down); the canvas y grows up.
            for shape in &scene.shapes {
                match shape {
                    Shape::Disc { center, radius, hue } => {
                        let mut r = *radius;
                        while r > 0.0 {
                            ctx.draw(&Circle {
                                x: center.x,
                                y: height - center.y,
                                radius: r,
                                color: color(*hue),
                            });
                            r -= 1.0;
                        }
                    }
                    Shape::Ring { center, radius, hue } => {
                        ctx.draw(&Circle {
                            x: center.x,
                            y: height - center.y,
                            radius: *radius,
                            color: color(*hue),
                        });
                    }
                    Shape::Beam { segment, hue } => {
                        ctx.draw(&CanvasLine {
                            x1: segment.p1.x,
                            y1: height - segment.p1.y,
                            x2: segment.p2.x,
                            y2: height - segment.p2.y,
                            color: color(*hue),
                        });
                    }
                    Shape::Text { x, y, text, hue } => {
                        ctx.print(
                            *x as f64,
                            height - *y as f64,
                            Line::styled(text.clone(), Style::default().fg(color(*hue))),
                        );
                    }
                }
            }
        });

    frame.render_widget(canvas, area);
}

fn render_panel(frame: &mut Frame, area: Rect, scene: &Scene) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = scene
        .status
        .iter()
        .map(|s| {
            Line::from(Span::styled(
                s.clone(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ))
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Controls",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )));
    for help in [
        "Mouse   aim shield",
        "\u{2190}/\u{2192}     rotate shield",
        "Enter   start",
        "Q/Esc   quit",
    ] {
        lines.push(Line::from(Span::styled(
            help,
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
