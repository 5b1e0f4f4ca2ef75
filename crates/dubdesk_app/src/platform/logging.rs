//! Logging setup for the console binary.
//!
//! The default destination is a file so that log lines never interleave with
//! the rendered frames on stdout.

use std::fs::File;
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_FILENAME: &str = "./dubdesk.log";

/// Where log output should go.
#[allow(dead_code)]
pub enum LogDestination {
    /// Write to `./dubdesk.log` in the current directory.
    File,
    /// Write to the terminal, interleaved with rendered frames.
    Terminal,
    /// Write to both the file and the terminal.
    Both,
}

/// Initializes the global logger. Safe to call once per process.
pub fn initialize(destination: LogDestination) {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    if matches!(destination, LogDestination::Terminal | LogDestination::Both) {
        loggers.push(TermLogger::new(
            level,
            build_config(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }

    if matches!(destination, LogDestination::File | LogDestination::Both) {
        match File::create(PathBuf::from(LOG_FILENAME)) {
            Ok(file) => loggers.push(WriteLogger::new(level, build_config(), file)),
            Err(err) => eprintln!("Warning: could not create {LOG_FILENAME}: {err}"),
        }
    }

    if loggers.is_empty() {
        return;
    }

    if CombinedLogger::init(loggers).is_err() {
        eprintln!("Warning: logger was already initialized");
    }
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
