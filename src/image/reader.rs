use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use super::{Image, ImageReader};
use crate::error::Error;

/// Decodes an image file into storage order, dropping alpha and widening gray.
pub struct FileImageReader {
    file_path: PathBuf,
}

impl FileImageReader {
    pub fn new(file_path: &Path) -> Self {
        Self {
            file_path: file_path.to_path_buf(),
        }
    }

    fn display_path(&self) -> String {
        self.file_path.to_string_lossy().into_owned()
    }

    fn open_input_file(&self) -> crate::Result<File> {
        File::open(&self.file_path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::InputFileNotFound(self.display_path()),
            _ => Error::UnableToOpenInputFileForReading(self.display_path(), e),
        })
    }
}

impl ImageReader for FileImageReader {
    fn read_image(&mut self) -> crate::Result<Image> {
        let input_file = self.open_input_file()?;
        let decoded = image::ImageReader::new(BufReader::new(input_file))
            .with_guessed_format()
            .map_err(|e| Error::UnableToOpenInputFileForReading(self.display_path(), e))?
            .decode()
            .map_err(|e| Error::UnableToDecodeImage(self.display_path(), e))?;
        log::debug!(
            "Decoded '{}' with {:?} into {}x{}",
            self.display_path(),
            decoded.color(),
            decoded.width(),
            decoded.height()
        );
        Ok(Image::from_rgb_image(decoded.into_rgb8()))
    }
}

pub fn read_image_file(file_path: &Path) -> crate::Result<Image> {
    FileImageReader::new(file_path).read_image()
}
