use image::{ImageBuffer, Rgb};
use imageproc::geometric_transformations::{warp_into, Projection};

use super::{Image, Interpolation};
use crate::error::Error;

const BORDER_DOT: Rgb<u8> = Rgb([0, 0, 0]);

/// A 2×3 affine matrix mapping source coordinates `(x, y)` to destination
/// coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationMatrix {
    rows: [[f32; 3]; 2],
}

impl RotationMatrix {
    /// Rotation by `angle` degrees about `center` (x, y), followed by a uniform
    /// `scale`. Positive angles turn the picture counter-clockwise.
    pub fn new(center: (f32, f32), angle: f32, scale: f32) -> Self {
        let (center_x, center_y) = center;
        let radians = angle.to_radians();
        let alpha = scale * radians.cos();
        let beta = scale * radians.sin();
        Self {
            rows: [
                [alpha, beta, (1.0 - alpha) * center_x - beta * center_y],
                [-beta, alpha, beta * center_x + (1.0 - alpha) * center_y],
            ],
        }
    }

    pub fn rows(&self) -> [[f32; 3]; 2] {
        self.rows
    }

    /// Destination of the source point `(x, y)`.
    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        let [first, second] = self.rows;
        (
            first[0] * x + first[1] * y + first[2],
            second[0] * x + second[1] * y + second[2],
        )
    }

    fn projection(&self) -> crate::Result<Projection> {
        let [first, second] = self.rows;
        #[rustfmt::skip]
        let matrix = [
            first[0], first[1], first[2],
            second[0], second[1], second[2],
            0.0, 0.0, 1.0,
        ];
        Projection::from_matrix(matrix).ok_or(Error::NonInvertibleTransformation)
    }
}

/// Maps `image` through `matrix` onto a black canvas of `size` (width, height).
pub fn warp_affine(
    image: &Image,
    matrix: &RotationMatrix,
    size: (u32, u32),
    interpolation: Interpolation,
) -> crate::Result<Image> {
    let projection = matrix.projection()?;
    let (width, height) = size;
    let mut warped = ImageBuffer::from_pixel(width, height, BORDER_DOT);
    warp_into(
        image.bgr_buffer(),
        &projection,
        interpolation.warp_interpolation(),
        BORDER_DOT,
        &mut warped,
    );
    Ok(Image::from_bgr_buffer(warped))
}

/// Rotates about `center`, or about `(width / 2, height / 2)` in whole pixels,
/// keeping the input size. Corners that leave the canvas are cut off.
pub fn rotate(
    image: &Image,
    angle: f32,
    center: Option<(f32, f32)>,
    scale: f32,
) -> crate::Result<Image> {
    let center = center.unwrap_or((
        (image.width() / 2) as f32,
        (image.height() / 2) as f32,
    ));
    log::debug!(
        "Rotating by {} degrees about ({}, {}) with scale {}",
        angle,
        center.0,
        center.1,
        scale
    );
    let matrix = RotationMatrix::new(center, angle, scale);
    warp_affine(image, &matrix, image.dimensions(), Interpolation::Linear)
}
