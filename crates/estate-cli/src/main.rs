use anyhow::{Context, Result};
use clap::Parser;
use estate_core::model::{ContactId, MaintenanceRequestId, PropertyId, TenantId};
use estate_core::{Database, Registry};
use std::path::PathBuf;

mod commands;
mod config;
mod logging;

use commands::contact::ContactDetails;
use config::Config;

#[derive(Debug, Parser)]
#[command(name = "estate", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the database (default: ~/.local/share/estate/real_estate.db)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Add a new property
    AddProperty {
        /// Street address of the property
        address: String,
        /// Price of the property
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        price: i64,
        /// Description of the property
        #[arg(long)]
        description: Option<String>,
        /// Image URL of the property
        #[arg(long)]
        image_url: Option<String>,
    },
    /// Add an image URL to a property
    AddPropertyImage {
        property_id: PropertyId,
        image_url: String,
    },
    /// List all properties with their tenants, maintenance requests and contacts
    ListProperties {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Add a new tenant to a property
    AddTenant { property_id: PropertyId, name: String },
    /// List all tenants of a property
    ListTenants {
        property_id: PropertyId,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Delete a property together with its tenants, maintenance requests and contacts
    DeleteProperty { property_id: PropertyId },
    /// Delete a tenant
    DeleteTenant { tenant_id: TenantId },
    /// Log a new maintenance request against a property
    ///
    /// New requests are stamped with the current UTC time and start in the
    /// "Pending" status.
    AddMaintenanceRequest {
        property_id: PropertyId,
        description: String,
    },
    /// List all maintenance requests of a property
    ListMaintenanceRequests {
        property_id: PropertyId,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Delete a maintenance request
    DeleteMaintenanceRequest { request_id: MaintenanceRequestId },
    /// Add a new contact to a property
    AddContact {
        property_id: PropertyId,
        name: String,
        phone: Option<String>,
        email: Option<String>,
        /// What the contact does for the property, e.g. plumber or landlord
        role: Option<String>,
    },
    /// List all contacts of a property
    ListContacts {
        property_id: PropertyId,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Delete a contact
    DeleteContact { contact_id: ContactId },
    /// Create the database if needed and report where it lives
    Init,
    /// Inspect or edit the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults
    Init,
    /// Print one value, or the whole file when no key is given
    Get { key: Option<String> },
    /// Set a value in the config file
    Set { key: String, value: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.db {
        Some(db_path) => Config::load_with_db_path(db_path)?,
        None => Config::load()?,
    };
    logging::init(&config.logging, cli.verbose)?;

    // Config commands must work even when the database cannot be opened.
    if let Commands::Config { action } = cli.command {
        return run_config(action, &config);
    }

    let db_path = &config.database_path;
    log::debug!("Using database {}", db_path.display());

    // Ensure database directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create database directory {}", parent.display())
        })?;
    }

    let db = Database::open(db_path)
        .with_context(|| format!("Failed to open database {}", db_path.display()))?;
    let mut registry = Registry::new(db);

    run(cli.command, &mut registry, &config)?;

    registry.close().context("Failed to close database")?;
    Ok(())
}

fn run(command: Commands, registry: &mut Registry, config: &Config) -> Result<()> {
    match command {
        Commands::AddProperty {
            address,
            price,
            description,
            image_url,
        } => commands::property::add_property(registry, address, price, description, image_url),
        Commands::AddPropertyImage {
            property_id,
            image_url,
        } => commands::property::add_property_image(registry, property_id, image_url),
        Commands::ListProperties { json } => commands::property::list_properties(registry, json),
        Commands::AddTenant { property_id, name } => {
            commands::tenant::add_tenant(registry, property_id, name)
        }
        Commands::ListTenants { property_id, json } => {
            commands::tenant::list_tenants(registry, property_id, json)
        }
        Commands::DeleteProperty { property_id } => {
            commands::property::delete_property(registry, property_id)
        }
        Commands::DeleteTenant { tenant_id } => commands::tenant::delete_tenant(registry, tenant_id),
        Commands::AddMaintenanceRequest {
            property_id,
            description,
        } => commands::maintenance::add_maintenance_request(registry, property_id, description),
        Commands::ListMaintenanceRequests { property_id, json } => {
            commands::maintenance::list_maintenance_requests(registry, property_id, json)
        }
        Commands::DeleteMaintenanceRequest { request_id } => {
            commands::maintenance::delete_maintenance_request(registry, request_id)
        }
        Commands::AddContact {
            property_id,
            name,
            phone,
            email,
            role,
        } => commands::contact::add_contact(
            registry,
            property_id,
            name,
            ContactDetails { phone, email, role },
        ),
        Commands::ListContacts { property_id, json } => {
            commands::contact::list_contacts(registry, property_id, json)
        }
        Commands::DeleteContact { contact_id } => {
            commands::contact::delete_contact(registry, contact_id)
        }
        Commands::Init => commands::init::run_init(registry, &config.database_path),
        Commands::Config { action } => run_config(action, config),
    }
}

fn run_config(action: ConfigAction, config: &Config) -> Result<()> {
    match action {
        ConfigAction::Show => commands::config::show_config(config),
        ConfigAction::Path => commands::config::show_path(),
        ConfigAction::Example => commands::config::show_example(),
        ConfigAction::Init => commands::config::init_config(),
        ConfigAction::Get { key } => commands::config::get_config(config, key),
        ConfigAction::Set { key, value } => commands::config::set_config(key, value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("estate").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add_property() {
        let cli = parse(&["add-property", "123 Main St", "--price", "250000"]);
        match cli.command {
            Commands::AddProperty {
                address,
                price,
                description,
                image_url,
            } => {
                assert_eq!(address, "123 Main St");
                assert_eq!(price, 250_000);
                assert!(description.is_none());
                assert!(image_url.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_ids() {
        let cli = parse(&["delete-maintenance-request", "7"]);
        assert!(matches!(
            cli.command,
            Commands::DeleteMaintenanceRequest { request_id } if request_id == MaintenanceRequestId::new(7)
        ));

        assert!(Cli::try_parse_from(["estate", "delete-tenant", "seven"]).is_err());
    }

    #[test]
    fn test_parse_add_contact_optional_fields() {
        let cli = parse(&["add-contact", "1", "Bob", "555-0100"]);
        match cli.command {
            Commands::AddContact {
                property_id,
                name,
                phone,
                email,
                role,
            } => {
                assert_eq!(property_id, PropertyId::new(1));
                assert_eq!(name, "Bob");
                assert_eq!(phone.as_deref(), Some("555-0100"));
                assert!(email.is_none());
                assert!(role.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = parse(&["list-properties", "--json", "--db", "/tmp/x.db", "-v"]);
        assert!(cli.verbose);
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/x.db")));
        assert!(matches!(cli.command, Commands::ListProperties { json: true }));
    }

    #[test]
    fn test_parse_config_set() {
        let cli = parse(&["config", "set", "logging.level", "debug"]);
        assert!(matches!(
            cli.command,
            Commands::Config {
                action: ConfigAction::Set { .. }
            }
        ));
    }
}
