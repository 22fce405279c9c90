use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME};

/// Build the `fern` dispatcher for the given configuration without installing it
pub fn build_dispatch(config: &LoggingConfig) -> Result<fern::Dispatch> {
    let level = config.level_filter()?;

    let base = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {:<5} {}: {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        // SQL statement logging is noisy below debug
        .level_for("sqlx", log::LevelFilter::Warn);

    if config.enabled {
        let log_path = get_log_file_path()?;
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = fern::log_file(&log_path)
            .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;
        Ok(base.chain(file))
    } else {
        Ok(base.chain(std::io::stderr()))
    }
}

/// Install the global logger. Fails if a logger is already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    build_dispatch(config)?
        .apply()
        .context("Failed to install logger")?;
    Ok(())
}

/// Location of the log file used when file logging is enabled
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .or_else(dirs::cache_dir)
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
}
