//! Logging setup.
//!
//! The library only emits records through the `log` facade. Applications that
//! want them on stderr or in a file call [`init`] once at startup.

use anyhow::{Context, Result};
use chrono::Local;

use crate::config::LoggingConfig;

/// Install a global `fern` dispatcher according to `config`.
///
/// Does nothing when logging is disabled. Fails if the log file cannot be
/// opened or a global logger is already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let dispatch = build_dispatch(config)?;
    let dispatch = match &config.file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
            let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
            dispatch.chain(file)
        }
        None => dispatch.chain(std::io::stderr()),
    };

    dispatch.apply().context("Failed to install logger")?;
    Ok(())
}

/// Formatter and level filter, without an output attached.
pub fn build_dispatch(config: &LoggingConfig) -> Result<fern::Dispatch> {
    let level = config.level_filter()?;
    let dependency_level = level.min(log::LevelFilter::Info);

    Ok(fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        // hyper/reqwest internals are noisy below info
        .level_for("hyper", dependency_level)
        .level_for("reqwest", dependency_level))
}
