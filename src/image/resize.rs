use image::imageops;

use super::{Image, Interpolation};
use crate::error::Error;

pub fn resize(
    image: &Image,
    width: u32,
    height: u32,
    interpolation: Interpolation,
) -> crate::Result<Image> {
    if width == 0 || height == 0 || image.is_empty() {
        return Err(Error::InvalidTargetSize(width, height));
    }
    log::debug!(
        "Resizing {}x{} to {}x{} with {:?} interpolation",
        image.width(),
        image.height(),
        width,
        height,
        interpolation
    );
    let resized = imageops::resize(
        image.bgr_buffer(),
        width,
        height,
        interpolation.filter_type(),
    );
    Ok(Image::from_bgr_buffer(resized))
}

/// Resizes to the given width or height and derives the other dimension from
/// the aspect ratio. The width wins when both are given. Without either the
/// image is copied.
pub fn resize_keeping_aspect_ratio(
    image: &Image,
    width: Option<u32>,
    height: Option<u32>,
    interpolation: Interpolation,
) -> crate::Result<Image> {
    let (original_width, original_height) = image.dimensions();
    let (width, height) = match (width, height) {
        (Some(width), _) => (width, scale(original_height, width, original_width)),
        (None, Some(height)) => (scale(original_width, height, original_height), height),
        (None, None) => return Ok(image.clone()),
    };
    resize(image, width, height, interpolation)
}

fn scale(value: u32, numerator: u32, denominator: u32) -> u32 {
    if denominator == 0 {
        return 0;
    }
    (value as u64 * numerator as u64 / denominator as u64) as u32
}
