use std::f32::consts::PI;

pub const EPS: f32 = 0.00001;

/// Eight-way direction of a displacement in screen space (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Compass {
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
    TopLeft,
    Top,
    TopRight,
}

/// Twelve 30° sectors starting at +x. Cardinal labels own two sectors, so the
/// diagonals only catch the single sector between them.
const SECTORS: [Compass; 12] = [
    Compass::Right,
    Compass::BottomRight,
    Compass::Bottom,
    Compass::Bottom,
    Compass::BottomLeft,
    Compass::Left,
    Compass::Left,
    Compass::TopLeft,
    Compass::Top,
    Compass::Top,
    Compass::TopRight,
    Compass::Right,
];

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Angle against +x in `[0, 2π)`.
    pub fn angle(&self) -> f32 {
        let angle = self.y.atan2(self.x);
        if angle < 0.0 { angle + 2.0 * PI } else { angle }
    }

    pub fn direction(&self) -> Compass {
        let sector = (self.angle() / PI * 6.0).floor() as usize;
        SECTORS[sector % SECTORS.len()]
    }

    pub fn sub(&self, other: &Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    pub fn distance_to_squared(&self, other: &Point) -> f32 {
        self.sub(other).length_squared()
    }

    pub fn distance_to(&self, other: &Point) -> f32 {
        self.distance_to_squared(other).sqrt()
    }

    pub fn approx_eq(&self, other: &Point, tolerance: f32) -> bool {
        self.distance_to_squared(other) <= tolerance
    }
}
