//! The teaching programs, one function each.
//!
//! Every demonstration loads the image named in its [`Arguments`], shows its
//! intermediate results through an [`ImageViewer`] and writes one report line
//! per sampled pixel to `report`.

use std::fmt::Display;
use std::io::Write;
use std::ops::Range;

use crate::color::{BGRColorFormat, Channel};
use crate::error::Error;
use crate::image::arithmetic::add;
use crate::image::channels::{merge, split};
use crate::image::crop::crop;
use crate::image::flip::{flip, FlipAxis};
use crate::image::reader::read_image_file;
use crate::image::resize::resize;
use crate::image::rotation::{rotate, warp_affine, RotationMatrix};
use crate::image::{Image, Interpolation};
use crate::sampler::{ChannelReport, PixelReport};
use crate::viewer::ImageViewer;
use crate::Arguments;

pub const ORIGINAL_WINDOW: &str = "Original";

pub const BRIGHTNESS_OFFSET: u8 = 75;
pub const ARITHMETIC_SAMPLE: (u32, u32) = (152, 61);

/// The crop demonstration always works on this file.
pub const CROP_IMAGE_FILE: &str = "florida_trip.png";
const FACE_ROWS: Range<u32> = 124..212;
const FACE_COLUMNS: Range<u32> = 225..380;
const BODY_ROWS: Range<u32> = 173..235;
const BODY_COLUMNS: Range<u32> = 13..81;

pub const FLIPPING_ROTATION_ANGLE: f32 = 45.0;
pub const FLIPPING_SAMPLE: (u32, u32) = (189, 441);

pub const RESIZE_FACTOR: u32 = 2;
pub const RESIZE_SAMPLE: (u32, u32) = (367, 170);

pub const ROTATION_CENTER: (f32, f32) = (50.0, 50.0);
pub const ROTATION_ANGLE: f32 = 88.0;
pub const ROTATION_SAMPLE: (u32, u32) = (10, 10);

pub const CHANNEL_SAMPLES: [((u32, u32), Channel); 3] = [
    ((94, 180), Channel::Red),
    ((78, 13), Channel::Blue),
    ((5, 80), Channel::Green),
];

fn write_report<W: Write>(report: &mut W, line: impl Display) -> crate::Result<()> {
    writeln!(report, "{}", line).map_err(Error::FailedToWriteReport)
}

fn write_pixel_report<W: Write>(
    report: &mut W,
    image: &Image,
    (row, column): (u32, u32),
) -> crate::Result<()> {
    write_report(report, PixelReport::sample(image, row, column)?)
}

fn load_and_show_original<V: ImageViewer>(
    arguments: &Arguments,
    viewer: &mut V,
) -> crate::Result<Image> {
    let image = read_image_file(&arguments.image_file)?;
    log::info!(
        "Loaded '{}' ({}x{})",
        arguments.image_file.display(),
        image.width(),
        image.height()
    );
    viewer.show(ORIGINAL_WINDOW, &image)?;
    Ok(image)
}

/// Brightens every channel by a constant, saturating at 255.
pub fn demonstrate_arithmetic<V: ImageViewer, W: Write>(
    arguments: &Arguments,
    viewer: &mut V,
    report: &mut W,
) -> crate::Result<()> {
    let image = load_and_show_original(arguments, viewer)?;
    let offset = Image::filled(
        image.width(),
        image.height(),
        BGRColorFormat {
            blue: BRIGHTNESS_OFFSET,
            green: BRIGHTNESS_OFFSET,
            red: BRIGHTNESS_OFFSET,
        },
    );
    let added = add(&image, &offset)?;
    viewer.show("Added", &added)?;
    write_pixel_report(report, &added, ARITHMETIC_SAMPLE)?;
    viewer.wait_key()
}

/// Cuts out two fixed regions.
pub fn demonstrate_crop<V: ImageViewer>(
    arguments: &Arguments,
    viewer: &mut V,
) -> crate::Result<()> {
    let image = load_and_show_original(arguments, viewer)?;
    let face = crop(&image, FACE_ROWS, FACE_COLUMNS);
    viewer.show("2", &face)?;
    viewer.wait_key()?;
    let body = crop(&image, BODY_ROWS, BODY_COLUMNS);
    viewer.show("3", &body)?;
    viewer.wait_key()
}

pub fn demonstrate_flipping<V: ImageViewer, W: Write>(
    arguments: &Arguments,
    viewer: &mut V,
    report: &mut W,
) -> crate::Result<()> {
    let image = load_and_show_original(arguments, viewer)?;
    let flipped = flip(&image, FlipAxis::from_code(1));
    viewer.show("Flipped Horizontally", &flipped)?;
    let rotated = rotate(&flipped, FLIPPING_ROTATION_ANGLE, None, 1.0)?;
    viewer.show("Rotated by 45 Degrees", &rotated)?;
    viewer.wait_key()?;
    let flipped = flip(&rotated, FlipAxis::from_code(0));
    viewer.show("Flipped Vertically", &flipped)?;
    write_pixel_report(report, &flipped, FLIPPING_SAMPLE)?;
    viewer.wait_key()
}

/// Doubles both dimensions with cubic interpolation.
pub fn demonstrate_resize<V: ImageViewer, W: Write>(
    arguments: &Arguments,
    viewer: &mut V,
    report: &mut W,
) -> crate::Result<()> {
    let image = load_and_show_original(arguments, viewer)?;
    let resized = resize(
        &image,
        RESIZE_FACTOR * image.width(),
        RESIZE_FACTOR * image.height(),
        Interpolation::Cubic,
    )?;
    viewer.show("Resized (Width)", &resized)?;
    write_pixel_report(report, &resized, RESIZE_SAMPLE)?;
    viewer.wait_key()
}

/// Rotates about a point away from the center.
pub fn demonstrate_rotation<V: ImageViewer, W: Write>(
    arguments: &Arguments,
    viewer: &mut V,
    report: &mut W,
) -> crate::Result<()> {
    let image = load_and_show_original(arguments, viewer)?;
    let matrix = RotationMatrix::new(ROTATION_CENTER, ROTATION_ANGLE, 1.0);
    let rotated = warp_affine(&image, &matrix, image.dimensions(), Interpolation::Linear)?;
    viewer.show("Rotated by Offset & 45 Degrees", &rotated)?;
    write_pixel_report(report, &rotated, ROTATION_SAMPLE)?;
    viewer.wait_key()
}

/// Splits into planes, shows each one and the merged result, and prints one
/// channel per sampled pixel.
pub fn demonstrate_splitting_and_merging<V: ImageViewer, W: Write>(
    arguments: &Arguments,
    viewer: &mut V,
    report: &mut W,
) -> crate::Result<()> {
    let image = read_image_file(&arguments.image_file)?;
    let channels = split(&image);
    for channel in [Channel::Red, Channel::Green, Channel::Blue] {
        viewer.show(&channel.to_string(), &channels.get(channel).to_image())?;
    }
    viewer.show("Merged", &merge(&channels)?)?;
    for ((row, column), channel) in CHANNEL_SAMPLES {
        write_report(report, ChannelReport::sample(&image, row, column, channel)?)?;
    }
    viewer.wait_key()
}
