use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::image::writer::PngImageWriter;
use crate::image::{Image, ImageWriter};
use crate::logger::log_shown_image;

/// Where demonstrations put the images they show.
pub trait ImageViewer {
    fn show(&mut self, window_name: &str, image: &Image) -> crate::Result<()>;

    /// Blocks until the user acknowledges the shown images.
    fn wait_key(&mut self) -> crate::Result<()>;
}

/// Writes every shown image to `<output_directory>/<window name>.png`.
///
/// Without an output directory images are only logged. Waiting reads one line
/// from stdin when enabled.
pub struct PngWindowViewer {
    output_directory: Option<PathBuf>,
    wait_for_key: bool,
}

impl PngWindowViewer {
    pub fn new(output_directory: Option<&Path>, wait_for_key: bool) -> Self {
        Self {
            output_directory: output_directory.map(Path::to_path_buf),
            wait_for_key,
        }
    }

    fn create_output_directory(directory: &Path) -> crate::Result<()> {
        fs::create_dir_all(directory).map_err(|e| {
            Error::UnableToCreateOutputDirectory(directory.to_string_lossy().into_owned(), e)
        })
    }
}

impl ImageViewer for PngWindowViewer {
    fn show(&mut self, window_name: &str, image: &Image) -> crate::Result<()> {
        if image.is_empty() {
            return Err(Error::EmptyImage(window_name.to_owned()));
        }
        log_shown_image(window_name, image.width(), image.height());
        if let Some(directory) = &self.output_directory {
            Self::create_output_directory(directory)?;
            let file_path = directory.join(window_file_name(window_name));
            PngImageWriter::new(&file_path).write_image(image)?;
            log::info!("Wrote '{}'", file_path.display());
        }
        Ok(())
    }

    fn wait_key(&mut self) -> crate::Result<()> {
        if !self.wait_for_key {
            return Ok(());
        }
        eprintln!("Press Enter to continue");
        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(Error::FailedToWaitForKey)?;
        Ok(())
    }
}

/// "Rotated by 45 Degrees" becomes "rotated_by_45_degrees.png".
pub fn window_file_name(window_name: &str) -> String {
    let mut stem = String::with_capacity(window_name.len());
    for word in window_name
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
    {
        if !stem.is_empty() {
            stem.push('_');
        }
        stem.push_str(&word.to_ascii_lowercase());
    }
    if stem.is_empty() {
        stem.push_str("window");
    }
    format!("{}.png", stem)
}
