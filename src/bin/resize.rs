use std::env::args_os;
use std::io;
use std::process::ExitCode;

use image_basics::demonstration::demonstrate_resize;
use image_basics::viewer::PngWindowViewer;
use image_basics::CLIParser;

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    let mut viewer = PngWindowViewer::from(&arguments);
    match demonstrate_resize(&arguments, &mut viewer, &mut io::stdout()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Demonstration failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
