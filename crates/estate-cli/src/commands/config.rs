use anyhow::{bail, Context, Result};
use toml_edit::{value, DocumentMut, Item, Table};

use crate::config::{self, Config};
use crate::logging;

const KEYS: &str = "database_path, logging.level, logging.coloured";

/// Show the current effective configuration.
pub fn show_config(config: &Config) -> Result<()> {
    let config_path = config::config_file_path();

    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", config_path.display());
    let exists = config_path.exists();
    println!(
        "File exists: {}\n",
        if exists { "yes" } else { "no (using defaults)" }
    );

    println!("Settings:");
    println!("  database_path: {}", config.database_path.display());
    println!("  logging.level: {}", config.logging.level);
    println!("  logging.coloured: {}", config.logging.coloured);

    println!("\nPriority: CLI args > ENV vars (ESTATE_*) > Config file > Defaults");

    Ok(())
}

/// Get a specific config value, or print the whole file.
pub fn get_config(config: &Config, key: Option<String>) -> Result<()> {
    let Some(key) = key else {
        let config_path = config::config_file_path();
        if config_path.exists() {
            let contents =
                std::fs::read_to_string(&config_path).context("Failed to read config file")?;
            print!("{}", contents);
        } else {
            println!("Config file does not exist: {}", config_path.display());
            println!("\nRun 'estate config init' to create it.");
        }
        return Ok(());
    };

    match key.as_str() {
        "database_path" => println!("{}", config.database_path.display()),
        "logging.level" => println!("{}", config.logging.level),
        "logging.coloured" => println!("{}", config.logging.coloured),
        _ => bail!("Unknown config key: {}\n\nValid keys: {}", key, KEYS),
    }

    Ok(())
}

/// Set a config value, keeping the rest of the file (comments included) intact.
pub fn set_config(key: String, new_value: String) -> Result<()> {
    let config_path = config::config_file_path();
    config::ensure_config_file()?;

    let contents = std::fs::read_to_string(&config_path).context("Failed to read config file")?;
    let updated = set_value(&contents, &key, &new_value)?;
    log::debug!("Writing {} to {}", key, config_path.display());
    std::fs::write(&config_path, updated).context("Failed to write config file")?;

    println!("✓ Updated {} = {}", key, new_value);
    println!("  in {}", config_path.display());

    Ok(())
}

fn set_value(contents: &str, key: &str, new_value: &str) -> Result<String> {
    let mut doc: DocumentMut = contents.parse().context("Failed to parse config file")?;

    match key {
        "database_path" => {
            doc["database_path"] = value(new_value);
        }
        "logging.level" => {
            logging::parse_level(new_value)?;
            logging_table(&mut doc)?["level"] = value(new_value.trim().to_ascii_lowercase());
        }
        "logging.coloured" => {
            let coloured: bool = new_value
                .trim()
                .parse()
                .with_context(|| format!("Expected true or false, got '{}'", new_value))?;
            logging_table(&mut doc)?["coloured"] = value(coloured);
        }
        _ => bail!("Unknown config key: {}\n\nValid keys: {}", key, KEYS),
    }

    Ok(doc.to_string())
}

fn logging_table(doc: &mut DocumentMut) -> Result<&mut Table> {
    doc.entry("logging")
        .or_insert(Item::Table(Table::new()))
        .as_table_mut()
        .context("'logging' in the config file must be a table")
}

/// Show the config file path.
pub fn show_path() -> Result<()> {
    println!("{}", config::config_file_path().display());
    Ok(())
}

/// Show example configuration.
pub fn show_example() -> Result<()> {
    print!("{}", config::example_config());
    Ok(())
}

/// Initialize config file with defaults.
pub fn init_config() -> Result<()> {
    let created = config::ensure_config_file()?;
    let config_path = config::config_file_path();

    if created {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to configure estate.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}
