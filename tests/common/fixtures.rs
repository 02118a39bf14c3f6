use huntpath::Coordinate;
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_circle_mut;
use std::path::{Path, PathBuf};

/// Map background: desaturated tan, outside both red HSV bands
pub const PARCHMENT: Rgb<u8> = Rgb([200, 180, 140]);
/// Spawn circle fill
pub const MARKER_RED: Rgb<u8> = Rgb([220, 30, 30]);
pub const MARKER_RADIUS: i32 = 18;
pub const MAP_SIZE: u32 = 1024;

/// Spawn points used by the synthetic map, none inside the legend corner
pub fn spawn_points() -> Vec<Coordinate> {
    [(120, 200), (400, 150), (700, 300), (880, 620), (520, 560), (260, 800)]
        .into_iter()
        .map(Coordinate::from)
        .collect()
}

/// A legend marker in the bottom-left dead-zone
pub fn legend_point() -> Coordinate {
    Coordinate::new(150, 980)
}

/// A 1024x1024 map with red discs at `markers`
pub fn make_map(markers: &[Coordinate]) -> RgbImage {
    let mut img = RgbImage::from_pixel(MAP_SIZE, MAP_SIZE, PARCHMENT);
    for marker in markers {
        draw_filled_circle_mut(&mut img, marker.as_i32(), MARKER_RADIUS, MARKER_RED);
    }
    img
}

/// Writes the map as PNG into `dir` and returns its path.
pub fn write_map(dir: &Path, file_name: &str, markers: &[Coordinate]) -> PathBuf {
    let path = dir.join(file_name);
    make_map(markers)
        .save_with_format(&path, image::ImageFormat::Png)
        .expect("Failed to save test map");
    path
}

/// True when `found` is within 2 px of `expected` on both axes
pub fn near(found: &Coordinate, expected: &Coordinate) -> bool {
    found.x.abs_diff(expected.x) <= 2 && found.y.abs_diff(expected.y) <= 2
}
