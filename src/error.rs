use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    InputFileNotFound(String),
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToDecodeImage(String, image::ImageError),
    UnableToWriteImage(String, image::ImageError),
    UnableToCreateOutputDirectory(String, std::io::Error),
    MismatchOfSizeBetweenDimensionsAndValues(u32, u32, usize),
    CoordinateOutOfRange {
        row: u32,
        column: u32,
        height: u32,
        width: u32,
    },
    MismatchOfImageDimensions((u32, u32), (u32, u32)),
    InvalidTargetSize(u32, u32),
    EmptyImage(String),
    NonInvertibleTransformation,
    FailedToWriteReport(std::io::Error),
    FailedToWaitForKey(std::io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputFileNotFound(path) => {
                write!(f, "Input file '{}' not found", path)
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToDecodeImage(path, error) => {
                write!(f, "Unable to decode image '{}': {}", path, error)
            }
            Self::UnableToWriteImage(path, error) => {
                write!(f, "Unable to write image '{}': {}", path, error)
            }
            Self::UnableToCreateOutputDirectory(path, error) => {
                write!(
                    f,
                    "Unable to create output directory '{}': {}",
                    path, error
                )
            }
            Self::MismatchOfSizeBetweenDimensionsAndValues(width, height, length) => {
                write!(
                    f,
                    "Buffer of {} values does not match dimensions {}x{}",
                    length, width, height
                )
            }
            Self::CoordinateOutOfRange {
                row,
                column,
                height,
                width,
            } => {
                write!(
                    f,
                    "Coordinate (row {}, column {}) is out of range for a {}x{} image",
                    row, column, width, height
                )
            }
            Self::MismatchOfImageDimensions(left, right) => {
                write!(
                    f,
                    "Image dimensions do not match: {}x{} vs. {}x{}",
                    left.0, left.1, right.0, right.1
                )
            }
            Self::InvalidTargetSize(width, height) => {
                write!(f, "Invalid target size {}x{}", width, height)
            }
            Self::EmptyImage(window_name) => {
                write!(f, "Unable to show empty image in window '{}'", window_name)
            }
            Self::NonInvertibleTransformation => {
                write!(f, "Affine transformation is not invertible")
            }
            Self::FailedToWriteReport(error) => {
                write!(f, "Failed to write pixel report: {}", error)
            }
            Self::FailedToWaitForKey(error) => {
                write!(f, "Failed to wait for key press: {}", error)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnableToOpenInputFileForReading(_, error)
            | Self::UnableToCreateOutputDirectory(_, error)
            | Self::FailedToWriteReport(error)
            | Self::FailedToWaitForKey(error) => Some(error),
            Self::UnableToDecodeImage(_, error) | Self::UnableToWriteImage(_, error) => Some(error),
            _ => None,
        }
    }
}
