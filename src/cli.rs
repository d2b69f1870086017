use crate::{Arguments, SampleArguments};
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Arguments shared by the demonstration programs.
pub struct CLIParser {
    command: Command,
    fixed_image_file: Option<PathBuf>,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_image_file_argument(command);
        let command = Self::register_viewer_arguments(command);
        CLIParser {
            command,
            fixed_image_file: None,
        }
    }

    /// For programs that always load the same file and take no image flag.
    pub fn with_fixed_image_file(image_file: &Path) -> Self {
        let command = Self::create_base_command();
        let command = Self::register_viewer_arguments(command);
        CLIParser {
            command,
            fixed_image_file: Some(image_file.to_path_buf()),
        }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        self.extract_arguments(&matches)
    }

    fn register_viewer_arguments(command: Command) -> Command {
        let command = Self::register_output_directory_argument(command);
        Self::register_wait_for_key_argument(command)
    }

    fn register_image_file_argument(command: Command) -> Command {
        command.arg(create_image_file_argument())
    }

    fn register_output_directory_argument(command: Command) -> Command {
        command.arg(Self::create_output_directory_argument())
    }

    fn register_wait_for_key_argument(command: Command) -> Command {
        command.arg(Self::create_wait_for_key_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_output_directory_argument() -> Arg {
        arg!(output_directory: -o --output_dir <DIRECTORY> "Directory the shown images are written to")
            .required(false)
            .value_parser(value_parser!(PathBuf))
    }

    fn create_wait_for_key_argument() -> Arg {
        arg!(wait_for_key: -w --wait "Wait for Enter after showing images").required(false)
    }

    fn extract_arguments(&self, matches: &ArgMatches) -> Arguments {
        let image_file = match &self.fixed_image_file {
            Some(image_file) => image_file.clone(),
            None => extract_image_file_argument(matches),
        };
        Arguments {
            image_file,
            output_directory: Self::extract_output_directory_argument(matches),
            wait_for_key: Self::extract_wait_for_key_argument(matches),
        }
    }

    fn extract_output_directory_argument(matches: &ArgMatches) -> Option<PathBuf> {
        matches.get_one::<PathBuf>("output_directory").cloned()
    }

    fn extract_wait_for_key_argument(matches: &ArgMatches) -> bool {
        matches.get_flag("wait_for_key")
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Arguments of the single pixel sampler.
pub struct SampleCLIParser {
    command: Command,
}

impl SampleCLIParser {
    pub fn new() -> Self {
        let command = CLIParser::create_base_command();
        let command = command.arg(create_image_file_argument());
        let command = Self::register_row_argument(command);
        let command = Self::register_column_argument(command);
        SampleCLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> SampleArguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_row_argument(command: Command) -> Command {
        command.arg(Self::create_row_argument())
    }

    fn register_column_argument(command: Command) -> Command {
        command.arg(Self::create_column_argument())
    }

    fn create_row_argument() -> Arg {
        arg!(row: -r --row <ROW> "Row of the sampled pixel, starting at 0")
            .required(true)
            .value_parser(value_parser!(u32))
    }

    fn create_column_argument() -> Arg {
        arg!(column: -c --column <COLUMN> "Column of the sampled pixel, starting at 0")
            .required(true)
            .value_parser(value_parser!(u32))
    }

    fn extract_arguments(matches: &ArgMatches) -> SampleArguments {
        SampleArguments {
            image_file: extract_image_file_argument(matches),
            row: Self::extract_row_argument(matches),
            column: Self::extract_column_argument(matches),
        }
    }

    fn extract_row_argument(matches: &ArgMatches) -> u32 {
        matches
            .get_one::<u32>("row")
            .expect("Required argument row not provided")
            .to_owned()
    }

    fn extract_column_argument(matches: &ArgMatches) -> u32 {
        matches
            .get_one::<u32>("column")
            .expect("Required argument column not provided")
            .to_owned()
    }
}

impl Default for SampleCLIParser {
    fn default() -> Self {
        Self::new()
    }
}

fn create_image_file_argument() -> Arg {
    arg!(image_file: -i --image <IMAGE> "Path to the image")
        .required(true)
        .value_parser(value_parser!(PathBuf))
}

fn extract_image_file_argument(matches: &ArgMatches) -> PathBuf {
    matches
        .get_one::<PathBuf>("image_file")
        .expect("Required argument image not provided")
        .clone()
}
