//! Reading single pixels for human-readable reports.
//!
//! Images keep their channels blue, green, red. Everything reported to a user
//! is labeled red, green, blue.

use std::fmt::Display;

use crate::color::{BGRColorFormat, Channel, RGBColorFormat};
use crate::image::{Image, CHANNEL_COUNT};

/// Relabels a stored triple (element 0 blue) into report order.
pub fn reorder(stored: [u8; CHANNEL_COUNT]) -> RGBColorFormat<u8> {
    RGBColorFormat::from(BGRColorFormat::from(stored))
}

/// The color at `(row, column)` in report order.
pub fn sample(image: &Image, row: u32, column: u32) -> crate::Result<RGBColorFormat<u8>> {
    Ok(reorder(image.dot(row, column)?))
}

/// One sampled pixel with all channels.
pub struct PixelReport {
    pub row: u32,
    pub column: u32,
    pub color: RGBColorFormat<u8>,
}

impl PixelReport {
    pub fn sample(image: &Image, row: u32, column: u32) -> crate::Result<Self> {
        Ok(Self {
            row,
            column,
            color: sample(image, row, column)?,
        })
    }
}

impl Display for PixelReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Pixel at ({}, {}) - {}",
            self.column, self.row, self.color
        )
    }
}

/// One sampled pixel showing a single channel.
pub struct ChannelReport {
    pub row: u32,
    pub column: u32,
    pub channel: Channel,
    pub value: u8,
}

impl ChannelReport {
    pub fn sample(image: &Image, row: u32, column: u32, channel: Channel) -> crate::Result<Self> {
        Ok(Self {
            row,
            column,
            channel,
            value: sample(image, row, column)?.channel(channel),
        })
    }
}

impl Display for ChannelReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Pixel at ({}, {}) - {}: {}",
            self.column, self.row, self.channel, self.value
        )
    }
}
