//! Configuration and CLI argument handling

use std::path::PathBuf;

use clap::{error::ErrorKind, CommandFactory, Parser};

use crate::{loader::Units, ui::Palette};

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "timetracker")]
#[command(about = "timetracker: a program to track time.")]
#[command(long_about = "timetracker: a program to track time.\n\
This program maintains multiple stopwatches to track time.\n\
The timers are defined in a configuration file, one NAME=COUNTM line each.")]
#[command(version = "2.0.0")]
pub struct Config {
    /// The configuration file to use
    #[arg(short, long, value_name = "CONF_FILE")]
    pub file: PathBuf,

    /// Disable color rendering
    #[arg(short = 'N', long)]
    pub no_color: bool,

    /// Unit of the counts in the configuration file
    #[arg(short, long, value_enum, default_value_t = Units::Minutes)]
    pub units: Units,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Write logs to this file instead of keeping them off the screen
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Parse configuration from command line arguments.
    ///
    /// Usage errors and `-h` print usage and exit with status 1.
    pub fn parse() -> Self {
        match <Self as Parser>::try_parse() {
            Ok(config) => config,
            Err(err) => {
                let code = match err.kind() {
                    ErrorKind::DisplayVersion => 0,
                    _ => 1,
                };
                let _ = err.print();
                if !matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                    eprintln!();
                    let _ = Self::command().write_long_help(&mut std::io::stderr());
                }
                std::process::exit(code);
            }
        }
    }

    /// Get the rendering palette selected by `--no-color`
    pub fn palette(&self) -> Palette {
        Palette::new(!self.no_color)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
