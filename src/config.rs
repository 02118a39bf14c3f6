//! Tuned constants for the in-game map rendering convention.
//!
//! These values were fitted against real 1024x1024 map screenshots. Change
//! them only together with new reference screenshots.

use image::Rgb;

/// Width and height, in pixels, of the map screenshots.
pub const MAP_SIZE_PX: f64 = 1024.0;

/// In-game units spanned by one full map image.
pub const MAP_SIZE_GAME: f64 = 44.0;

/// Legend markers live in the bottom-left corner: `x <= 300 && y >= 930`.
pub const DEAD_ZONE_MAX_X: u32 = 300;
pub const DEAD_ZONE_MIN_Y: u32 = 930;

// HSV bounds use 8-bit scaling: hue is degrees / 2, so red wraps around 180.
pub const RED_LOW_HUE: (u8, u8) = (0, 15);
pub const RED_HIGH_HUE: (u8, u8) = (160, 180);
pub const RED_MIN_SATURATION: u8 = 100;
pub const RED_MIN_VALUE: u8 = 50;

/// Closing uses a square kernel of `2 * CLOSE_RADIUS + 1` pixels.
pub const CLOSE_RADIUS: u8 = 1;

pub const HOUGH_MIN_DIST: f32 = 20.0;
pub const HOUGH_CANNY_HIGH: f32 = 40.0;
pub const HOUGH_ACCUMULATOR_THRESHOLD: u32 = 25;
pub const HOUGH_MIN_RADIUS: u32 = 8;
pub const HOUGH_MAX_RADIUS: u32 = 50;

pub const PATH_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
pub const START_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
pub const END_COLOR: Rgb<u8> = Rgb([255, 165, 0]);
pub const PATH_THICKNESS: i32 = 3;
pub const ENDPOINT_RADIUS: i32 = 10;

pub const OUTPUT_SUFFIX: &str = "_path";
pub const OUTPUT_EXTENSION: &str = "jpg";

pub const DEFAULT_MAPS_DIR: &str = "maps";
pub const DEFAULT_DATA_FILE: &str = "hunt_marks.json";
pub const DEFAULT_OUTPUT_DIR: &str = "generated_paths";

/// Coordinate-space rules of one map rendering style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapConvention {
    pub dead_zone_max_x: u32,
    pub dead_zone_min_y: u32,
    pub map_size_px: f64,
    pub map_size_game: f64,
}

impl MapConvention {
    /// Game units per pixel.
    pub fn scale(&self) -> f64 {
        self.map_size_game / self.map_size_px
    }

    pub fn in_dead_zone(&self, x: u32, y: u32) -> bool {
        x <= self.dead_zone_max_x && y >= self.dead_zone_min_y
    }
}

impl Default for MapConvention {
    fn default() -> Self {
        Self {
            dead_zone_max_x: DEAD_ZONE_MAX_X,
            dead_zone_min_y: DEAD_ZONE_MIN_Y,
            map_size_px: MAP_SIZE_PX,
            map_size_game: MAP_SIZE_GAME,
        }
    }
}

/// Inclusive HSV range, 8-bit scaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HsvBand {
    pub hue: (u8, u8),
    pub saturation: (u8, u8),
    pub value: (u8, u8),
}

impl HsvBand {
    pub fn contains(&self, [h, s, v]: [u8; 3]) -> bool {
        (self.hue.0..=self.hue.1).contains(&h)
            && (self.saturation.0..=self.saturation.1).contains(&s)
            && (self.value.0..=self.value.1).contains(&v)
    }

    /// The two bands covering red on both sides of the hue wraparound.
    pub fn red() -> [HsvBand; 2] {
        [RED_LOW_HUE, RED_HIGH_HUE].map(|hue| HsvBand {
            hue,
            saturation: (RED_MIN_SATURATION, 255),
            value: (RED_MIN_VALUE, 255),
        })
    }
}

/// Parameters of the gradient Hough circle transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoughParams {
    /// Minimum distance between accepted centers.
    pub min_dist: f32,
    /// Upper Canny threshold; the lower one is half of it.
    pub canny_high: f32,
    /// Votes a center and its radius need to be accepted.
    pub accumulator_threshold: u32,
    pub min_radius: u32,
    pub max_radius: u32,
}

impl Default for HoughParams {
    fn default() -> Self {
        Self {
            min_dist: HOUGH_MIN_DIST,
            canny_high: HOUGH_CANNY_HIGH,
            accumulator_threshold: HOUGH_ACCUMULATOR_THRESHOLD,
            min_radius: HOUGH_MIN_RADIUS,
            max_radius: HOUGH_MAX_RADIUS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dead_zone_boundaries() {
        let convention = MapConvention::default();
        assert!(convention.in_dead_zone(300, 930));
        assert!(!convention.in_dead_zone(301, 930));
        assert!(!convention.in_dead_zone(300, 929));
    }

    #[test]
    fn red_bands_cover_hue_wraparound() {
        let [low, high] = HsvBand::red();
        assert!(low.contains([0, 255, 255]));
        assert!(low.contains([15, 100, 50]));
        assert!(!low.contains([16, 255, 255]));
        assert!(high.contains([180, 255, 255]));
        assert!(!high.contains([170, 99, 255]));
        assert!(!high.contains([170, 255, 49]));
    }
}
