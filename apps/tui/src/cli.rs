use clap::{CommandFactory, Parser};
use std::path::PathBuf;

use crate::config::{CASE_COUNT_VAR, DEBUG_VAR, LOG_FILE_VAR, SEED_VAR};

#[derive(Debug, Parser)]
#[command(name = "crime-watch", version, about = "Crime Watch dashboard")]
pub struct CliArgs {
    /// Print stats and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless stats and cases as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Number of mock cases to generate (at most 100000)
    #[arg(long, value_name = "N")]
    pub count: Option<usize>,

    /// Seed for reproducible mock data
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Write logs to this file
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(count) = self.count {
            std::env::set_var(CASE_COUNT_VAR, count.to_string());
        }
        if let Some(seed) = self.seed {
            std::env::set_var(SEED_VAR, seed.to_string());
        }
        if let Some(path) = &self.log_file {
            std::env::set_var(LOG_FILE_VAR, path);
        }
        if self.debug {
            std::env::set_var(DEBUG_VAR, "1");
        }
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}
