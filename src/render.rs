use image::{DynamicImage, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut};
use std::path::{Path, PathBuf};

use crate::config::{
    END_COLOR, ENDPOINT_RADIUS, OUTPUT_EXTENSION, OUTPUT_SUFFIX, PATH_COLOR, PATH_THICKNESS,
    START_COLOR,
};
use crate::detection::load_image;
use crate::error::{Error, Result};
use crate::models::Coordinate;

/// Make a hunt mark name safe to use as a file name
pub fn sanitize_filename(name: &str) -> String {
    name.replace(' ', "_").replace('/', "-")
}

/// `Gamma Serpent/Alpha` → `Gamma_Serpent-Alpha_path.jpg`
pub fn output_filename(label: &str) -> String {
    format!("{}{}.{}", sanitize_filename(label), OUTPUT_SUFFIX, OUTPUT_EXTENSION)
}

/// Draw the route onto a copy of the image
pub fn draw_path(img: &DynamicImage, path: &[Coordinate]) -> RgbImage {
    let mut canvas = img.to_rgb8();

    // a thick line is a bundle of 1px lines shifted around the segment
    let half = PATH_THICKNESS / 2;
    for segment in path.windows(2) {
        let (x0, y0) = segment[0].as_f32();
        let (x1, y1) = segment[1].as_f32();
        for dy in -half..=half {
            for dx in -half..=half {
                let (ox, oy) = (dx as f32, dy as f32);
                draw_line_segment_mut(&mut canvas, (x0 + ox, y0 + oy), (x1 + ox, y1 + oy), PATH_COLOR);
            }
        }
    }

    if let (Some(start), Some(end)) = (path.first(), path.last()) {
        draw_filled_circle_mut(&mut canvas, start.as_i32(), ENDPOINT_RADIUS, START_COLOR);
        draw_filled_circle_mut(&mut canvas, end.as_i32(), ENDPOINT_RADIUS, END_COLOR);
    }

    canvas
}

/// Draw the route on the image at `image_path` and save it under `out_dir`.
///
/// Returns the written file. Nothing is written for an empty path.
pub fn save_path_image(image_path: &Path, path: &[Coordinate], label: &str, out_dir: &Path) -> Result<PathBuf> {
    if path.is_empty() {
        return Err(Error::EmptyPath);
    }

    let img = load_image(image_path)?;
    let canvas = draw_path(&img, path);

    std::fs::create_dir_all(out_dir)?;
    let output_path = out_dir.join(output_filename(label));
    canvas.save(&output_path)?;

    tracing::debug!("wrote {}", output_path.display());
    Ok(output_path)
}
