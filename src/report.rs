use crate::config::MapConvention;
use crate::models::Coordinate;

/// Pixel position to in-game units, rounded half-to-even at two decimals.
pub fn game_coordinate(px: u32) -> f64 {
    game_coordinate_with(px, &MapConvention::default())
}

pub fn game_coordinate_with(px: u32, convention: &MapConvention) -> f64 {
    // odd multiples of 32 px land exactly on a half cent
    (px as f64 * convention.scale() * 100.0).round_ties_even() / 100.0
}

/// `Point <n>: Pixel (<px>, <py>) | Game (<gx>, <gy>)`
pub fn format_point(n: usize, point: Coordinate) -> String {
    format!(
        "Point {}: Pixel ({}, {}) | Game ({:.2}, {:.2})",
        n,
        point.x,
        point.y,
        game_coordinate(point.x),
        game_coordinate(point.y)
    )
}

/// Header plus one 1-indexed line per path point.
pub fn format_path(path: &[Coordinate]) -> String {
    std::iter::once("Path Coordinates:".to_string())
        .chain(path.iter().enumerate().map(|(i, point)| format_point(i + 1, *point)))
        .map(|line| line + "\n")
        .collect()
}
