use anyhow::{anyhow, Result};
use std::io::IsTerminal;
use twyg::{LogLevel, OptsBuilder};

use crate::config::LoggingConfig;

/// Level names accepted in the `[logging]` section.
pub const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Used when the configured level cannot be parsed.
const FALLBACK_LEVEL: LogLevel = LogLevel::Error;

pub fn parse_level(name: &str) -> Result<LogLevel> {
    match name.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok(LogLevel::Trace),
        "debug" => Ok(LogLevel::Debug),
        "info" => Ok(LogLevel::Info),
        "warn" | "warning" => Ok(LogLevel::Warn),
        "error" => Ok(LogLevel::Error),
        other => Err(anyhow!(
            "Unknown log level: {}\n\nValid levels: {}",
            other,
            LEVELS.join(", ")
        )),
    }
}

/// The level to log at, plus a warning to emit once the logger is up when the
/// configured level was unusable.
fn resolve_level(logging: &LoggingConfig, verbose: bool) -> (LogLevel, Option<String>) {
    if verbose {
        return (LogLevel::Debug, None);
    }
    match parse_level(&logging.level) {
        Ok(level) => (level, None),
        Err(_) => (
            FALLBACK_LEVEL,
            Some(format!(
                "Ignoring unknown logging.level '{}' (valid: {}); fix it with `estate config set logging.level <LEVEL>`",
                logging.level,
                LEVELS.join(", ")
            )),
        ),
    }
}

/// Install the global logger. Call once, before any command runs.
///
/// A bad `logging.level` never stops a command from running.
pub fn init(logging: &LoggingConfig, verbose: bool) -> Result<()> {
    let (level, warning) = resolve_level(logging, verbose);

    // No escape codes when stderr is piped or redirected.
    let coloured = logging.coloured && std::io::stderr().is_terminal();

    let opts = OptsBuilder::new()
        .coloured(coloured)
        .level(level)
        .build()
        .map_err(|e| anyhow!("Invalid logging options: {e:?}"))?;

    twyg::setup(opts).map_err(|e| anyhow!("Could not set up logging: {e:?}"))?;

    if let Some(warning) = warning {
        log::warn!("{}", warning);
    }
    Ok(())
}
