//! Global settings shared by every command
//!
//! Each option can also come from the environment; the flag wins.

use clap::{Args, ValueEnum};
use roster_core::logging_facility::Profile;
use std::path::PathBuf;

#[derive(Debug, Clone, Args)]
pub struct Settings {
    /// JSON data file holding the working session
    #[arg(long, global = true, env = "ROSTER_DATA", default_value = "school.json")]
    pub data: PathBuf,

    /// SQLite database used by `db` commands
    #[arg(long, global = true, env = "ROSTER_DB", default_value = "school.db")]
    pub db: PathBuf,

    /// Log output format on stderr
    #[arg(
        long,
        global = true,
        env = "ROSTER_LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Dev
    )]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    Dev,
    /// One JSON object per event
    Json,
}

impl LogFormat {
    pub fn profile(self) -> Profile {
        match self {
            LogFormat::Dev => Profile::Development,
            LogFormat::Json => Profile::Production,
        }
    }
}
