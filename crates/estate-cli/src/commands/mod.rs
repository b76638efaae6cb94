use anyhow::{Context, Result};
use serde::Serialize;

pub mod config;
pub mod contact;
pub mod init;
pub mod maintenance;
pub mod property;
pub mod tenant;

/// Placeholder for an optional value in text output.
fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(None), "-");
        assert_eq!(or_dash(Some("plumber")), "plumber");
    }
}
