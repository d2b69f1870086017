use image::{ImageBuffer, Rgb};

use super::{ColorChannel, Image, CHANNEL_COUNT};
use crate::color::Channel;
use crate::error::Error;

/// The three planes of an image, in storage order.
#[derive(Clone, Debug, PartialEq)]
pub struct Channels {
    pub blue: ColorChannel,
    pub green: ColorChannel,
    pub red: ColorChannel,
}

impl Channels {
    pub fn get(&self, channel: Channel) -> &ColorChannel {
        match channel {
            Channel::Blue => &self.blue,
            Channel::Green => &self.green,
            Channel::Red => &self.red,
        }
    }
}

pub fn split(image: &Image) -> Channels {
    let (width, height) = image.dimensions();
    // not imageproc's into_red_channel: the Rgb container holds blue at index 0
    let extract = |channel: Channel| ColorChannel {
        dots: image
            .dots()
            .chunks_exact(CHANNEL_COUNT)
            .map(|dot| dot[channel.storage_index()])
            .collect(),
        width,
        height,
    };
    Channels {
        blue: extract(Channel::Blue),
        green: extract(Channel::Green),
        red: extract(Channel::Red),
    }
}

pub fn merge(channels: &Channels) -> crate::Result<Image> {
    let dimensions = channels.blue.dimensions();
    for other in [&channels.green, &channels.red] {
        if other.dimensions() != dimensions {
            return Err(Error::MismatchOfImageDimensions(
                dimensions,
                other.dimensions(),
            ));
        }
    }
    let (width, height) = dimensions;
    let buffer = ImageBuffer::from_fn(width, height, |column, row| {
        let index = column as usize + row as usize * width as usize;
        Rgb([
            channels.blue.dots[index],
            channels.green.dots[index],
            channels.red.dots[index],
        ])
    });
    Ok(Image::from_bgr_buffer(buffer))
}
