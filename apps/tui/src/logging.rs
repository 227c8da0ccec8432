use color_eyre::eyre::eyre;
use color_eyre::Result;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing::Level;

use crate::config::AppConfig;

/// Installs the global `tracing` subscriber.
///
/// Logs go to the configured log file when there is one. Otherwise headless
/// runs log to stderr and the TUI discards logs, since stderr shares the
/// terminal with the alternate screen.
pub fn init_logging(config: &AppConfig, headless: bool) -> Result<()> {
    let level = if config.debug {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    let installed = if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init()
    } else if headless {
        builder.with_writer(std::io::stderr).try_init()
    } else {
        builder.with_writer(std::io::sink).try_init()
    };

    installed.map_err(|e| eyre!("Failed to initialize logging: {e}"))
}
