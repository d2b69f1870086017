use std::env::args_os;
use std::io;
use std::process::ExitCode;

use image_basics::{sample_pixel, SampleCLIParser};

fn main() -> ExitCode {
    let mut cli_parser = SampleCLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match sample_pixel(&arguments, &mut io::stdout()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Sampling failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
