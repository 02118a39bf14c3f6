use image::GrayImage;
use imageproc::edges::canny;
use imageproc::filter::gaussian_blur_f32;
use imageproc::gradients::{horizontal_sobel, vertical_sobel};

use crate::config::HoughParams;
use crate::models::Circle;

const GRADIENT_SIGMA: f32 = 1.4;

/// Gradient Hough circle transform over a binary mask.
///
/// Edge pixels vote along their gradient direction for every radius in
/// `min_radius..=max_radius`. Strong local maxima become candidate centers,
/// which are visited strongest first; each needs `min_dist` clearance from
/// the circles already accepted and a radius supported by enough edge pixels.
pub fn hough_circles(mask: &GrayImage, params: &HoughParams) -> Vec<Circle> {
    let (width, height) = mask.dimensions();
    if width == 0 || height == 0 || params.min_radius > params.max_radius {
        return Vec::new();
    }

    let edges = canny(mask, params.canny_high / 2.0, params.canny_high);
    // directions from the smoothed mask, a raw binary step gives jagged normals
    let smoothed = gaussian_blur_f32(mask, GRADIENT_SIGMA);
    let gx = horizontal_sobel(&smoothed);
    let gy = vertical_sobel(&smoothed);

    let mut edge_points = Vec::new();
    let mut accumulator = Accumulator::new(width, height);

    for (x, y, pixel) in edges.enumerate_pixels() {
        if pixel[0] == 0 {
            continue;
        }
        edge_points.push((x as f32, y as f32));

        let dx = gx.get_pixel(x, y)[0] as f32;
        let dy = gy.get_pixel(x, y)[0] as f32;
        let magnitude = (dx * dx + dy * dy).sqrt();
        if magnitude == 0.0 {
            continue;
        }
        let (ux, uy) = (dx / magnitude, dy / magnitude);

        for sign in [1.0f32, -1.0] {
            for r in params.min_radius..=params.max_radius {
                let r = r as f32 * sign;
                let cx = (x as f32 + ux * r).round();
                let cy = (y as f32 + uy * r).round();
                if cx < 0.0 || cy < 0.0 || cx >= width as f32 || cy >= height as f32 {
                    break;
                }
                accumulator.vote(cx as u32, cy as u32);
            }
        }
    }

    let mut candidates = accumulator.peaks(params.accumulator_threshold);
    candidates.sort_by(|a, b| b.2.cmp(&a.2).then(a.1.cmp(&b.1)).then(a.0.cmp(&b.0)));

    let min_dist_sq = params.min_dist * params.min_dist;
    let mut circles: Vec<Circle> = Vec::new();

    for (cx, cy, votes) in candidates {
        let (cx, cy) = (cx as f32, cy as f32);
        let crowded = circles.iter().any(|c| {
            let dx = c.center_x - cx;
            let dy = c.center_y - cy;
            dx * dx + dy * dy < min_dist_sq
        });
        if crowded {
            continue;
        }

        if let Some((radius, support)) = best_radius(&edge_points, cx, cy, params) {
            if support > params.accumulator_threshold {
                circles.push(Circle {
                    center_x: cx,
                    center_y: cy,
                    radius,
                    votes,
                });
            }
        }
    }

    circles
}

/// Radius with the most edge pixels at that distance, and its support.
fn best_radius(edge_points: &[(f32, f32)], cx: f32, cy: f32, params: &HoughParams) -> Option<(f32, u32)> {
    let min_r = params.min_radius as f32;
    let max_r = params.max_radius as f32;
    let bins = (params.max_radius - params.min_radius + 1) as usize;
    let mut histogram = vec![0u32; bins];

    for &(x, y) in edge_points {
        let (dx, dy) = (x - cx, y - cy);
        if dx.abs() > max_r + 0.5 || dy.abs() > max_r + 0.5 {
            continue;
        }
        let d = (dx * dx + dy * dy).sqrt().round();
        if d < min_r || d > max_r {
            continue;
        }
        histogram[(d - min_r) as usize] += 1;
    }

    // first maximum wins, so the smaller radius is preferred on ties
    histogram
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, u32)>, (i, &count)| match best {
            Some((_, c)) if c >= count => best,
            _ if count == 0 => best,
            _ => Some((i, count)),
        })
        .map(|(i, count)| (min_r + i as f32, count))
}

struct Accumulator {
    width: u32,
    height: u32,
    cells: Vec<u32>,
}

impl Accumulator {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width as usize * height as usize],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    fn vote(&mut self, x: u32, y: u32) {
        let idx = self.index(x, y);
        self.cells[idx] += 1;
    }

    fn get(&self, x: u32, y: u32) -> u32 {
        self.cells[self.index(x, y)]
    }

    /// Cells above the threshold that are local maxima. Plateaus keep their
    /// top-left cell only.
    fn peaks(&self, threshold: u32) -> Vec<(u32, u32, u32)> {
        let mut peaks = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                let votes = self.get(x, y);
                if votes <= threshold {
                    continue;
                }
                let left = if x > 0 { self.get(x - 1, y) } else { 0 };
                let up = if y > 0 { self.get(x, y - 1) } else { 0 };
                let right = if x + 1 < self.width { self.get(x + 1, y) } else { 0 };
                let down = if y + 1 < self.height { self.get(x, y + 1) } else { 0 };
                if votes > left && votes > up && votes >= right && votes >= down {
                    peaks.push((x, y, votes));
                }
            }
        }
        peaks
    }
}
