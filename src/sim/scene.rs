use super::geometry::{Point, Segment};

/// Semantic colors; the renderer decides what they look like.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hue {
    Blue,
    Red,
    Yellow,
    White,
}

/// One renderable primitive, in playfield coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Filled circle.
    Disc { center: Point, radius: f64, hue: Hue },
    /// Circle outline.
    Ring { center: Point, radius: f64, hue: Hue },
    /// Line segment.
    Beam { segment: Segment, hue: Hue },
    /// Block text anchored at integer grid coordinates.
    Text { x: i32, y: i32, text: String, hue: Hue },
}

/// Everything a renderer needs for one frame: the playfield shapes plus
/// the side-panel summary lines.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub shapes: Vec<Shape>,
    pub status: Vec<String>,
}

/// Pad `text` toward `desired_len` characters by widening the existing
/// inter-word gaps evenly. Lines without spaces, or already long enough,
/// come back unchanged.
pub fn stretch_text(desired_len: usize, text: &str) -> String {
    let len = text.chars().count();
    if len >= desired_len {
        return text.to_string();
    }
    let spaces = text.chars().filter(|&c| c == ' ').count();
    if spaces == 0 {
        return text.to_string();
    }
    let growth_per_space = (desired_len - len) / spaces;
    let mut stretched = String::with_capacity(desired_len);
    for c in text.chars() {
        stretched.push(c);
        if c == ' ' {
            for _ in 0..growth_per_space {
                stretched.push(' ');
            }
        }
    }
    stretched
}
