use image::imageops::FilterType;
use image::{ImageBuffer, Rgb, RgbImage};

use crate::color::BGRColorFormat;
use crate::error::Error;

pub mod arithmetic;
pub mod channels;
pub mod crop;
pub mod flip;
pub mod reader;
pub mod resize;
pub mod rotation;
pub mod writer;

pub const CHANNEL_COUNT: usize = 3;

/// Interleaved 8-bit buffer whose subpixels are stored blue, green, red.
///
/// `Rgb` is only the container pixel type. Resizing, flipping and warping treat
/// every subpixel alike, so they never look at the labels.
pub type BgrBuffer = ImageBuffer<Rgb<u8>, Vec<u8>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interpolation {
    Nearest,
    Linear,
    Cubic,
}

impl Interpolation {
    fn filter_type(&self) -> FilterType {
        match self {
            Interpolation::Nearest => FilterType::Nearest,
            Interpolation::Linear => FilterType::Triangle,
            Interpolation::Cubic => FilterType::CatmullRom,
        }
    }

    fn warp_interpolation(&self) -> imageproc::geometric_transformations::Interpolation {
        use imageproc::geometric_transformations::Interpolation as Warp;
        match self {
            Interpolation::Nearest => Warp::Nearest,
            Interpolation::Linear => Warp::Bilinear,
            Interpolation::Cubic => Warp::Bicubic,
        }
    }
}

pub trait ImageReader {
    fn read_image(&mut self) -> crate::Result<Image>;
}

pub trait ImageWriter {
    fn write_image(&mut self, image: &Image) -> crate::Result<()>;
}

/// An owned BGR image, rows × columns × 3.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    buffer: BgrBuffer,
}

impl Image {
    pub fn new(width: u32, height: u32, dots: Vec<u8>) -> crate::Result<Self> {
        let length = dots.len();
        ImageBuffer::from_raw(width, height, dots)
            .filter(|_| length == width as usize * height as usize * CHANNEL_COUNT)
            .map(|buffer| Self { buffer })
            .ok_or(Error::MismatchOfSizeBetweenDimensionsAndValues(
                width, height, length,
            ))
    }

    pub fn filled(width: u32, height: u32, dot: BGRColorFormat<u8>) -> Self {
        Self {
            buffer: ImageBuffer::from_pixel(width, height, Rgb(dot.into())),
        }
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.buffer.dimensions()
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    pub fn dots(&self) -> &[u8] {
        self.buffer.as_raw()
    }

    /// The stored triple at `(row, column)`, element 0 being blue.
    pub fn dot(&self, row: u32, column: u32) -> crate::Result<[u8; CHANNEL_COUNT]> {
        self.buffer
            .get_pixel_checked(column, row)
            .map(|pixel| pixel.0)
            .ok_or(Error::CoordinateOutOfRange {
                row,
                column,
                height: self.height(),
                width: self.width(),
            })
    }

    /// Takes decoder output in red, green, blue order.
    pub fn from_rgb_image(mut rgb: RgbImage) -> Self {
        swap_red_and_blue(&mut rgb);
        Self { buffer: rgb }
    }

    pub fn to_rgb_image(&self) -> RgbImage {
        let mut rgb = self.buffer.clone();
        swap_red_and_blue(&mut rgb);
        rgb
    }

    pub(crate) fn from_bgr_buffer(buffer: BgrBuffer) -> Self {
        Self { buffer }
    }

    pub(crate) fn bgr_buffer(&self) -> &BgrBuffer {
        &self.buffer
    }
}

fn swap_red_and_blue(buffer: &mut ImageBuffer<Rgb<u8>, Vec<u8>>) {
    for pixel in buffer.pixels_mut() {
        pixel.0.swap(0, 2);
    }
}

/// A single color plane of an image.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorChannel {
    dots: Vec<u8>,
    width: u32,
    height: u32,
}

impl ColorChannel {
    pub fn new(width: u32, height: u32, dots: Vec<u8>) -> crate::Result<Self> {
        if dots.len() != width as usize * height as usize {
            return Err(Error::MismatchOfSizeBetweenDimensionsAndValues(
                width,
                height,
                dots.len(),
            ));
        }
        Ok(Self {
            dots,
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn dots(&self) -> &[u8] {
        &self.dots
    }

    pub fn dot(&self, row: u32, column: u32) -> crate::Result<u8> {
        if row >= self.height || column >= self.width {
            return Err(Error::CoordinateOutOfRange {
                row,
                column,
                height: self.height,
                width: self.width,
            });
        }
        let index = column as usize + row as usize * self.width as usize;
        Ok(self.dots[index])
    }

    /// Renders the plane as a gray image, the way a single channel is shown.
    pub fn to_image(&self) -> Image {
        let buffer = ImageBuffer::from_fn(self.width, self.height, |column, row| {
            let value = self.dots[column as usize + row as usize * self.width as usize];
            Rgb([value; CHANNEL_COUNT])
        });
        Image::from_bgr_buffer(buffer)
    }
}
