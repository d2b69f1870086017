use std::path::{Path, PathBuf};

use image::ImageFormat;

use super::{Image, ImageWriter};
use crate::error::Error;

pub struct PngImageWriter {
    file_path: PathBuf,
}

impl PngImageWriter {
    pub fn new(file_path: &Path) -> Self {
        Self {
            file_path: file_path.to_path_buf(),
        }
    }
}

impl ImageWriter for PngImageWriter {
    fn write_image(&mut self, image: &Image) -> crate::Result<()> {
        image
            .to_rgb_image()
            .save_with_format(&self.file_path, ImageFormat::Png)
            .map_err(|e| {
                Error::UnableToWriteImage(self.file_path.to_string_lossy().into_owned(), e)
            })
    }
}
