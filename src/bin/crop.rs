use std::env::args_os;
use std::path::Path;
use std::process::ExitCode;

use image_basics::demonstration::{demonstrate_crop, CROP_IMAGE_FILE};
use image_basics::viewer::PngWindowViewer;
use image_basics::CLIParser;

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::with_fixed_image_file(Path::new(CROP_IMAGE_FILE));
    let arguments = cli_parser.parse(args_os());
    let mut viewer = PngWindowViewer::from(&arguments);
    match demonstrate_crop(&arguments, &mut viewer) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Demonstration failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
