//! Command-line arguments
//!
//! CLI values take precedence; anything left unset may be filled in from
//! the TOML configuration file (see `config.rs`) before falling back to the
//! built-in defaults.

use crate::core::styles::palette_to_clap;
use crate::core::validation::{validate_log_format, validate_log_level, validate_positive_secs};
use crate::core::version::long_version;
use crate::queue::api::{EngineSettings, REFRESH_PERIOD_SECS};
use clap::{CommandFactory, FromArgMatches, Parser};
use std::ffi::OsString;
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "helpqueue")]
#[command(about = "Two-lane help desk queue for tutorial sessions")]
#[command(version)]
pub struct Args {
    /// Configuration file path
    #[arg(short = 'c', long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Force colored output
    #[arg(long = "color", conflicts_with = "no_color")]
    pub color: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = validate_log_level)]
    pub log_level: Option<String>,

    /// Log file path (use 'none' to disable file logging)
    #[arg(short = 'f', long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log output format: text, ext or json
    #[arg(short = 'o', long = "log-format", value_name = "FORMAT", value_parser = validate_log_format)]
    pub log_format: Option<String>,

    /// Seconds between lane refreshes
    #[arg(short = 'r', long = "refresh-period", value_name = "SECS", value_parser = validate_positive_secs)]
    pub refresh_period: Option<u64>,

    /// Seconds between a display-mode toggle and the first refresh in the new mode
    #[arg(short = 's', long = "settle-delay", value_name = "SECS", value_parser = validate_positive_secs)]
    pub settle_delay: Option<u64>,

    /// Text for the announcement board
    #[arg(short = 'a', long = "announcement", value_name = "TEXT")]
    pub announcement: Option<String>,
}

impl Args {
    /// The clap command with help styling and the long version line applied
    pub fn styled_command(color: bool) -> clap::Command {
        Self::command()
            .styles(palette_to_clap(color))
            .long_version(long_version())
    }

    /// Parse from an explicit argument list (first item is the program name)
    pub fn try_parse_from_args<I, T>(args: I, color: bool) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::styled_command(color).try_get_matches_from(args)?;
        Self::from_arg_matches(&matches)
    }

    /// Parse the process arguments, exiting with clap's message on error
    pub fn parse_from_env() -> Self {
        let argv: Vec<OsString> = std::env::args_os().collect();
        let help_color = std::io::stdout().is_terminal() && !argv.iter().any(|a| a == "--no-color");
        match Self::try_parse_from_args(argv, help_color) {
            Ok(args) => args,
            Err(e) => e.exit(),
        }
    }

    /// Explicit colour choice, if one was made
    pub fn color_choice(&self) -> Option<bool> {
        match (self.color, self.no_color) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    /// Whether to colour output, falling back to TTY detection and NO_COLOR
    pub fn use_color(&self) -> bool {
        self.color_choice().unwrap_or_else(|| {
            std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
        })
    }

    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            refresh_period: self.refresh_period.unwrap_or(REFRESH_PERIOD_SECS),
            settle_delay: self.settle_delay.unwrap_or(REFRESH_PERIOD_SECS),
        }
    }

    /// Log file as a string for the logger; `None` when file logging is off
    pub fn log_file_spec(&self) -> Option<String> {
        self.log_file
            .as_ref()
            .map(|path| path.to_string_lossy().into_owned())
            .filter(|path| !path.eq_ignore_ascii_case("none") && path != "-")
    }
}
