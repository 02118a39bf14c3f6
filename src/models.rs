use std::fmt;

/// Pixel position of a marker on a map screenshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: u32,
    pub y: u32,
}

impl Coordinate {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance. Exact, so it is safe to compare for ties.
    pub fn distance_squared(&self, other: &Coordinate) -> u64 {
        let dx = self.x.abs_diff(other.x) as u64;
        let dy = self.y.abs_diff(other.y) as u64;
        dx * dx + dy * dy
    }

    pub fn as_f32(&self) -> (f32, f32) {
        (self.x as f32, self.y as f32)
    }

    pub fn as_i32(&self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }
}

impl From<(u32, u32)> for Coordinate {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A circle found by the Hough transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center_x: f32,
    pub center_y: f32,
    pub radius: f32,
    /// Accumulator votes for the center.
    pub votes: u32,
}

impl Circle {
    /// Center rounded to the nearest pixel.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            x: self.center_x.round().max(0.0) as u32,
            y: self.center_y.round().max(0.0) as u32,
        }
    }

    /// Bounding box `(x, y, width, height)` clamped to an image.
    pub fn bounds(&self, img_width: u32, img_height: u32) -> (u32, u32, u32, u32) {
        let min_x = (self.center_x - self.radius).floor().max(0.0) as u32;
        let min_y = (self.center_y - self.radius).floor().max(0.0) as u32;
        let max_x = ((self.center_x + self.radius).ceil() as u32).min(img_width.saturating_sub(1));
        let max_y = ((self.center_y + self.radius).ceil() as u32).min(img_height.saturating_sub(1));
        (
            min_x,
            min_y,
            max_x.saturating_sub(min_x) + 1,
            max_y.saturating_sub(min_y) + 1,
        )
    }
}
