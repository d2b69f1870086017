use image::Pixel;
use imageproc::map::map_pixels2;

use super::Image;
use crate::error::Error;

/// Element-wise sum, saturating at 255.
pub fn add(left: &Image, right: &Image) -> crate::Result<Image> {
    combine(left, right, u8::saturating_add)
}

/// Element-wise difference, saturating at 0.
pub fn subtract(left: &Image, right: &Image) -> crate::Result<Image> {
    combine(left, right, u8::saturating_sub)
}

fn combine(left: &Image, right: &Image, operation: fn(u8, u8) -> u8) -> crate::Result<Image> {
    if left.dimensions() != right.dimensions() {
        return Err(Error::MismatchOfImageDimensions(
            left.dimensions(),
            right.dimensions(),
        ));
    }
    let combined = map_pixels2(left.bgr_buffer(), right.bgr_buffer(), |l, r| {
        l.map2(&r, operation)
    });
    Ok(Image::from_bgr_buffer(combined))
}
