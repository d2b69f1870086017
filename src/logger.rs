use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};

const LOG_CONFIG_FILE: &str = "log4rs.yaml";
const FALLBACK_APPENDER_NAME: &str = "stderr";

#[ctor::ctor]
fn init() {
    if log4rs::init_file(LOG_CONFIG_FILE, Default::default()).is_ok() {
        return;
    }
    // stdout is reserved for pixel reports
    if let Err(message) = init_fallback() {
        eprintln!("{}", message);
    }
}

fn init_fallback() -> Result<(), String> {
    let config = fallback_config()
        .map_err(|errors| format!("Invalid fallback logging configuration: {}", errors))?;
    log4rs::init_config(config)
        .map(|_| ())
        .map_err(|error| format!("Unable to initialise fallback logging: {}", error))
}

fn fallback_config() -> Result<Config, log4rs::config::runtime::ConfigErrors> {
    let appender = ConsoleAppender::builder().target(Target::Stderr).build();
    Config::builder()
        .appender(Appender::builder().build(FALLBACK_APPENDER_NAME, Box::new(appender)))
        .build(
            Root::builder()
                .appender(FALLBACK_APPENDER_NAME)
                .build(LevelFilter::Warn),
        )
}

pub fn log_shown_image(window_name: &str, width: u32, height: u32) {
    log::info!("Showing '{}' ({}x{})", window_name, width, height);
}
