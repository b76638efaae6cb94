use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings for the `estate` binary.
///
/// `--db` beats `ESTATE_DATABASE_PATH`, which beats the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// SQLite file holding the registry.
    #[serde(default = "default_db_path")]
    pub database_path: PathBuf,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// The `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// One of trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Only honoured when stderr is a terminal.
    #[serde(default = "default_coloured")]
    pub coloured: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: default_db_path(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            coloured: default_coloured(),
        }
    }
}

impl Config {
    /// Load the config file if there is one, then apply `ESTATE_*` overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        builder
            .add_env(env::Options::with_top_level("estate"))
            .context("Failed to load environment variables")?;

        builder.build().context("Failed to build configuration")
    }

    /// Like [`Config::load`], for a `--db` override.
    pub fn load_with_db_path(db_path: PathBuf) -> Result<Self> {
        let mut config = Self::load()?;
        config.database_path = db_path;
        Ok(config)
    }
}

fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("estate")
        .join("real_estate.db")
}

fn default_log_level() -> String {
    String::from("error")
}

const fn default_coloured() -> bool {
    false
}

/// `estate/config.toml` under the platform config directory.
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("estate")
        .join("config.toml")
}

pub fn example_config() -> &'static str {
    r#"# Estate Configuration File
#
# ESTATE_DATABASE_PATH overrides database_path, and --db overrides both.

# SQLite database holding properties, tenants,
# maintenance requests and contacts
#database_path = "/path/to/custom/real_estate.db"

[logging]
# One of: trace, debug, info, warn, error
# The --verbose flag raises this to debug for a single run
level = "error"
# Colour is only used when stderr is a terminal
coloured = false
"#
}

/// Write the example config if no config file exists yet.
///
/// Returns true if a new file was created.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}
