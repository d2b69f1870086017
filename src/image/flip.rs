use image::imageops;

use super::Image;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipAxis {
    /// Mirror left to right, flip code `1`.
    Horizontal,
    /// Mirror top to bottom, flip code `0`.
    Vertical,
    /// Both at once, flip code `-1`.
    Both,
}

impl FlipAxis {
    /// Positive codes flip horizontally, zero vertically, negative both.
    pub fn from_code(code: i32) -> Self {
        match code {
            c if c > 0 => FlipAxis::Horizontal,
            0 => FlipAxis::Vertical,
            _ => FlipAxis::Both,
        }
    }
}

pub fn flip(image: &Image, axis: FlipAxis) -> Image {
    let buffer = image.bgr_buffer();
    let flipped = match axis {
        FlipAxis::Horizontal => imageops::flip_horizontal(buffer),
        FlipAxis::Vertical => imageops::flip_vertical(buffer),
        FlipAxis::Both => imageops::rotate180(buffer),
    };
    Image::from_bgr_buffer(flipped)
}
