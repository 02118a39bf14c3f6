//! Outlier exclusion and greedy nearest-neighbor routing.
//!
//! Ties are broken explicitly so the same screenshot always yields the same
//! route: the seed is the lowest `(x, y)`, and the next stop is the lowest
//! `(distance², y, x)`.

use crate::config::MapConvention;
use crate::models::Coordinate;

/// Drop points inside the legend dead-zone of the default map convention.
pub fn exclude_outliers(points: &[Coordinate]) -> Vec<Coordinate> {
    exclude_outliers_with(points, &MapConvention::default())
}

pub fn exclude_outliers_with(points: &[Coordinate], convention: &MapConvention) -> Vec<Coordinate> {
    points
        .iter()
        .filter(|p| !convention.in_dead_zone(p.x, p.y))
        .copied()
        .collect()
}

/// The point with the smallest x, lowest y on ties.
pub fn leftmost_point(points: &[Coordinate]) -> Option<Coordinate> {
    points.iter().min_by_key(|p| (p.x, p.y)).copied()
}

/// Order `points` into a route starting at `start`.
///
/// One occurrence of `start` is taken out of `points` if present; otherwise
/// `start` is an extra origin in front of every point.
pub fn nearest_neighbor_path(start: Coordinate, points: &[Coordinate]) -> Vec<Coordinate> {
    let mut remaining = points.to_vec();
    if let Some(idx) = remaining.iter().position(|p| *p == start) {
        remaining.swap_remove(idx);
    }

    let mut path = Vec::with_capacity(remaining.len() + 1);
    path.push(start);

    let mut current = start;
    while let Some(idx) = nearest(&current, &remaining) {
        current = remaining.swap_remove(idx);
        path.push(current);
    }

    path
}

fn nearest(from: &Coordinate, candidates: &[Coordinate]) -> Option<usize> {
    candidates
        .iter()
        .enumerate()
        .min_by_key(|(_, p)| (from.distance_squared(p), p.y, p.x))
        .map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(u32, u32)]) -> Vec<Coordinate> {
        raw.iter().copied().map(Coordinate::from).collect()
    }

    #[test]
    fn dead_zone_boundaries() {
        let points = pts(&[(300, 930), (301, 930), (300, 929), (0, 1023), (1000, 1000)]);
        assert_eq!(exclude_outliers(&points), pts(&[(301, 930), (300, 929), (1000, 1000)]));
    }

    #[test]
    fn filter_is_idempotent() {
        let points = pts(&[(10, 950), (500, 500), (250, 990), (299, 10)]);
        let once = exclude_outliers(&points);
        assert_eq!(exclude_outliers(&once), once);
    }

    #[test]
    fn custom_convention_moves_dead_zone() {
        let convention = MapConvention {
            dead_zone_max_x: 100,
            dead_zone_min_y: 500,
            ..MapConvention::default()
        };
        let points = pts(&[(100, 500), (200, 950)]);
        assert_eq!(exclude_outliers_with(&points, &convention), pts(&[(200, 950)]));
    }

    #[test]
    fn leftmost_breaks_ties_by_y() {
        let points = pts(&[(50, 40), (10, 90), (10, 20), (30, 0)]);
        assert_eq!(leftmost_point(&points), Some(Coordinate::new(10, 20)));
        assert_eq!(leftmost_point(&[]), None);
    }

    #[test]
    fn equidistant_neighbors_prefer_lower_y() {
        let points = pts(&[(10, 20), (20, 10), (10, 10)]);
        let start = leftmost_point(&points).unwrap();
        assert_eq!(start, Coordinate::new(10, 10));
        assert_eq!(
            nearest_neighbor_path(start, &points),
            pts(&[(10, 10), (20, 10), (10, 20)])
        );
    }

    #[test]
    fn path_is_a_permutation_starting_at_seed() {
        let points = pts(&[
            (900, 120),
            (400, 400),
            (35, 700),
            (610, 80),
            (35, 200),
            (780, 860),
            (120, 450),
        ]);
        let start = leftmost_point(&points).unwrap();
        let path = nearest_neighbor_path(start, &points);

        assert_eq!(path.len(), points.len());
        assert_eq!(path[0], Coordinate::new(35, 200));
        let mut sorted_path = path.clone();
        let mut sorted_points = points.clone();
        sorted_path.sort_by_key(|p| (p.x, p.y));
        sorted_points.sort_by_key(|p| (p.x, p.y));
        assert_eq!(sorted_path, sorted_points);
    }

    #[test]
    fn greedy_picks_closest_each_step() {
        let points = pts(&[(0, 0), (100, 0), (10, 0), (50, 0)]);
        assert_eq!(
            nearest_neighbor_path(Coordinate::new(0, 0), &points),
            pts(&[(0, 0), (10, 0), (50, 0), (100, 0)])
        );
    }

    #[test]
    fn single_point_path() {
        let points = pts(&[(42, 7)]);
        assert_eq!(nearest_neighbor_path(points[0], &points), points);
    }

    #[test]
    fn foreign_start_is_an_extra_origin() {
        let points = pts(&[(5, 5), (9, 9)]);
        let path = nearest_neighbor_path(Coordinate::new(0, 0), &points);
        assert_eq!(path, pts(&[(0, 0), (5, 5), (9, 9)]));
    }

    #[test]
    fn duplicate_points_are_all_visited() {
        let points = pts(&[(1, 1), (1, 1), (2, 2)]);
        let path = nearest_neighbor_path(Coordinate::new(1, 1), &points);
        assert_eq!(path, pts(&[(1, 1), (1, 1), (2, 2)]));
    }
}
