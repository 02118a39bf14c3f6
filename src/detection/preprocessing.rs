use image::{GrayImage, Luma, RgbImage};
use imageproc::distance_transform::Norm;
use imageproc::morphology;

use crate::config::HsvBand;

/// Convert an RGB pixel to HSV with 8-bit scaling (hue in `0..=180`).
pub fn rgb_to_hsv([r, g, b]: [u8; 3]) -> [u8; 3] {
    let (r, g, b) = (r as f32, g as f32, b as f32);
    let v = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = v - min;

    let s = if v > 0.0 { delta * 255.0 / v } else { 0.0 };

    let mut h = if delta == 0.0 {
        0.0
    } else if v == r {
        60.0 * (g - b) / delta
    } else if v == g {
        120.0 + 60.0 * (b - r) / delta
    } else {
        240.0 + 60.0 * (r - g) / delta
    };
    if h < 0.0 {
        h += 360.0;
    }

    [(h / 2.0).round() as u8, s.round() as u8, v as u8]
}

/// Binary mask (255/0) of pixels falling inside any of the bands.
pub fn hsv_mask(img: &RgbImage, bands: &[HsvBand]) -> GrayImage {
    let mut mask = GrayImage::new(img.width(), img.height());
    for (x, y, pixel) in img.enumerate_pixels() {
        let hsv = rgb_to_hsv(pixel.0);
        if bands.iter().any(|band| band.contains(hsv)) {
            mask.put_pixel(x, y, Luma([255]));
        }
    }
    mask
}

/// Mask of the red marker circles.
pub fn red_mask(img: &RgbImage) -> GrayImage {
    hsv_mask(img, &HsvBand::red())
}

/// Morphological closing with a square kernel of `2 * radius + 1` pixels.
pub fn close_mask(mask: &GrayImage, radius: u8) -> GrayImage {
    morphology::close(mask, Norm::LInf, radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn primary_colors_convert() {
        assert_eq!(rgb_to_hsv([255, 0, 0]), [0, 255, 255]);
        assert_eq!(rgb_to_hsv([0, 255, 0]), [60, 255, 255]);
        assert_eq!(rgb_to_hsv([0, 0, 255]), [120, 255, 255]);
        assert_eq!(rgb_to_hsv([0, 0, 0]), [0, 0, 0]);
        assert_eq!(rgb_to_hsv([128, 128, 128]), [0, 0, 128]);
    }

    #[test]
    fn magenta_red_lands_in_high_band() {
        // hue 340 degrees
        let [h, s, v] = rgb_to_hsv([255, 0, 85]);
        assert_eq!(h, 170);
        assert_eq!(s, 255);
        assert_eq!(v, 255);
    }

    #[test]
    fn red_mask_selects_only_red() {
        let mut img = RgbImage::from_pixel(4, 1, Rgb([30, 30, 30]));
        img.put_pixel(0, 0, Rgb([220, 20, 20]));
        img.put_pixel(1, 0, Rgb([20, 220, 20]));
        img.put_pixel(2, 0, Rgb([200, 10, 60]));
        img.put_pixel(3, 0, Rgb([60, 40, 40]));

        let mask = red_mask(&img);
        let row: Vec<u8> = (0..4).map(|x| mask.get_pixel(x, 0)[0]).collect();
        // the last pixel is reddish but too desaturated
        assert_eq!(row, vec![255, 0, 255, 0]);
    }

    #[test]
    fn closing_fills_single_pixel_gaps() {
        let mut mask = GrayImage::new(9, 9);
        for y in 2..7 {
            for x in 2..7 {
                mask.put_pixel(x, y, Luma([255]));
            }
        }
        mask.put_pixel(4, 4, Luma([0]));

        let closed = close_mask(&mask, 1);
        assert_eq!(closed.get_pixel(4, 4)[0], 255);
        assert_eq!(closed.get_pixel(0, 0)[0], 0);
    }
}
