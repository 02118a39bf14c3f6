use crate::config::{HoughParams, HsvBand};
use crate::detection::{hough, preprocessing};
use crate::error::Result;
use crate::pipeline::{PipelineData, PipelineStep};
use image::{DynamicImage, GenericImageView};

/// Binary mask of pixels inside the given HSV bands
pub struct HsvMaskStep {
    pub bands: Vec<HsvBand>,
}

impl PipelineStep for HsvMaskStep {
    fn process(&self, data: Vec<PipelineData>) -> Result<Vec<PipelineData>> {
        Ok(data
            .into_iter()
            .map(|item| {
                let rgb = item.image.to_rgb8();
                let mask = preprocessing::hsv_mask(&rgb, &self.bands);
                item.with_image(DynamicImage::ImageLuma8(mask))
            })
            .collect())
    }

    fn name(&self) -> &str {
        "HSV Red Mask"
    }
}

/// Morphological closing to fill small gaps in the mask
pub struct CloseStep {
    pub radius: u8,
}

impl PipelineStep for CloseStep {
    fn process(&self, data: Vec<PipelineData>) -> Result<Vec<PipelineData>> {
        Ok(data
            .into_iter()
            .map(|item| {
                let mask = item.image.to_luma8();
                let closed = preprocessing::close_mask(&mask, self.radius);
                item.with_image(DynamicImage::ImageLuma8(closed))
            })
            .collect())
    }

    fn name(&self) -> &str {
        "Morphological Close"
    }
}

/// Hough circle transform - splits one mask into one item per circle
pub struct HoughCircleStep {
    pub params: HoughParams,
}

impl PipelineStep for HoughCircleStep {
    fn process(&self, data: Vec<PipelineData>) -> Result<Vec<PipelineData>> {
        let mut result = Vec::new();

        for item in data {
            let mask = item.image.to_luma8();
            let circles = hough::hough_circles(&mask, &self.params);
            let (img_width, img_height) = item.original.dimensions();

            // Each circle becomes its own PipelineData, cropped from the original
            for circle in circles {
                let (x, y, width, height) = circle.bounds(img_width, img_height);
                let cropped = item.original.crop_imm(x, y, width, height);
                result.push(PipelineData::from_circle(cropped, item.original.clone(), circle));
            }
        }

        Ok(result)
    }

    fn name(&self) -> &str {
        "Hough Circles"
    }
}
