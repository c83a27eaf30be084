/// 2D coordinate in playfield units (not terminal cells).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Velocity or displacement.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

/// Two endpoints; the shield is one of these.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Segment {
    pub p1: Point,
    pub p2: Point,
}

/// Rotate `p` around the origin by `angle` radians.
pub fn rotate(p: Point, angle: f64) -> Point {
    let co = angle.cos();
    let si = angle.sin();
    Point {
        x: p.x * co - p.y * si,
        y: p.x * si + p.y * co,
    }
}

pub fn transpose(p: Point, offset: Offset) -> Point {
    Point {
        x: p.x + offset.dx,
        y: p.y + offset.dy,
    }
}

/// Euclidean distance between two points.
pub fn distance(p1: Point, p2: Point) -> f64 {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    (dx * dx + dy * dy).sqrt()
}

/// Perpendicular distance from `p` to the infinite line through `s`.
///
/// Not clamped to the segment: callers that need "near the finite
/// segment" pair this with endpoint-distance checks (see
/// `Shield::is_near`). A vertical segment falls back to the horizontal
/// difference, so the slope division is never taken with a zero
/// denominator.
pub fn line_distance(p: Point, s: &Segment) -> f64 {
    if s.p2.x != s.p1.x {
        let m = (s.p2.y - s.p1.y) / (s.p2.x - s.p1.x);
        let num = (-m * p.x + p.y - s.p1.y + m * s.p1.x).abs();
        let den = (m * m + 1.0).sqrt();
        num / den
    } else {
        (p.x - s.p1.x).abs()
    }
}
