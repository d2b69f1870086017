use std::ops::Range;

use image::imageops;

use super::Image;

/// Crops `rows` × `columns`. Ranges are clamped like slices: ends to the image
/// size, starts to their end, so the result may be empty.
pub fn crop(image: &Image, rows: Range<u32>, columns: Range<u32>) -> Image {
    let rows = clamp_range(rows, image.height());
    let columns = clamp_range(columns, image.width());
    log::debug!("Cropping rows {:?} and columns {:?}", rows, columns);
    let cropped = imageops::crop_imm(
        image.bgr_buffer(),
        columns.start,
        rows.start,
        columns.end - columns.start,
        rows.end - rows.start,
    )
    .to_image();
    Image::from_bgr_buffer(cropped)
}

fn clamp_range(range: Range<u32>, length: u32) -> Range<u32> {
    let end = range.end.min(length);
    let start = range.start.min(end);
    start..end
}
