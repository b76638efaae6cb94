use anyhow::Result;
use estate_core::Registry;
use std::path::Path;

/// Report the store that `main` has already opened and initialized.
pub fn run_init(registry: &Registry, db_path: &Path) -> Result<()> {
    let properties = registry.list_properties()?;

    println!("✓ Database ready: {}", db_path.display());
    println!("  Properties: {}", properties.len());

    if properties.is_empty() {
        println!("\n  Run `estate add-property <ADDRESS>` to add the first one");
    }

    Ok(())
}
