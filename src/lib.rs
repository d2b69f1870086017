use std::io::Write;
use std::path::PathBuf;

pub use cli::{CLIParser, SampleCLIParser};
pub use error::Error;
use crate::image::reader::read_image_file;
use sampler::PixelReport;
use viewer::PngWindowViewer;

mod cli;
pub mod color;
pub mod demonstration;
mod error;
pub mod image;
mod logger;
pub mod sampler;
pub mod viewer;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    image_file: PathBuf,
    output_directory: Option<PathBuf>,
    wait_for_key: bool,
}

impl From<&Arguments> for PngWindowViewer {
    fn from(value: &Arguments) -> Self {
        PngWindowViewer::new(value.output_directory.as_deref(), value.wait_for_key)
    }
}

pub struct SampleArguments {
    image_file: PathBuf,
    row: u32,
    column: u32,
}

pub fn sample_pixel<W: Write>(arguments: &SampleArguments, report: &mut W) -> Result<()> {
    let image = read_image_file(&arguments.image_file)?;
    let pixel_report = PixelReport::sample(&image, arguments.row, arguments.column)?;
    writeln!(report, "{}", pixel_report).map_err(Error::FailedToWriteReport)
}
