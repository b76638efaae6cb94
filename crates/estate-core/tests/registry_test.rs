//! Integration tests for the registry against file-backed databases.

use estate_core::model::{NewContact, NewProperty, PropertyId, TenantId};
use estate_core::{Database, Registry};
use tempfile::TempDir;

fn open(temp_dir: &TempDir) -> Registry {
    let db_path = temp_dir.path().join("real_estate.db");
    Registry::new(Database::open(db_path).expect("Failed to open database"))
}

/// Walk through adding a property and a tenant, then deleting the property.
#[test]
fn test_tenant_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let mut registry = open(&temp_dir);

    let property = registry
        .add_property(NewProperty::new("123 Main St").with_price(250_000))
        .unwrap();
    assert_eq!(property.id, PropertyId::new(1));

    let tenant = registry.add_tenant(property.id, "Alice").unwrap();
    assert_eq!(tenant.id, TenantId::new(1));

    let tenants = registry.list_tenants(property.id).unwrap();
    assert_eq!(tenants.len(), 1);
    assert_eq!(tenants[0].id, TenantId::new(1));
    assert_eq!(tenants[0].name, "Alice");

    registry.delete_property(property.id).unwrap();
    let err = registry.list_tenants(property.id).unwrap_err();
    assert!(err.is_not_found());
}

/// Walk through logging and removing a maintenance request.
#[test]
fn test_maintenance_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let mut registry = open(&temp_dir);

    let property = registry.add_property(NewProperty::new("5 Oak Ave")).unwrap();
    assert_eq!(property.id, PropertyId::new(1));

    let request = registry
        .add_maintenance_request(property.id, "Leaky faucet")
        .unwrap();
    assert_eq!(request.status, "Pending");

    registry.delete_maintenance_request(request.id).unwrap();
    assert!(registry
        .list_maintenance_requests(property.id)
        .unwrap()
        .is_empty());
}

/// Everything written by one session is visible to the next.
#[test]
fn test_state_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();

    let (property, contact) = {
        let mut registry = open(&temp_dir);
        let property = registry
            .add_property(
                NewProperty::new("9 Birch Ln")
                    .with_price(180_000)
                    .with_description("Bungalow"),
            )
            .unwrap();
        registry.add_tenant(property.id, "Alice").unwrap();
        registry
            .add_maintenance_request(property.id, "Broken boiler")
            .unwrap();
        let contact = registry
            .add_contact(
                property.id,
                NewContact::new("Bob")
                    .with_phone("555-0100")
                    .with_email("bob@example.com")
                    .with_role("plumber"),
            )
            .unwrap();
        registry.close().unwrap();
        (property, contact)
    };

    let registry = open(&temp_dir);
    let listed = registry.list_properties().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].property, property);
    assert_eq!(listed[0].tenants[0].name, "Alice");
    assert_eq!(listed[0].maintenance_requests[0].description, "Broken boiler");
    assert_eq!(listed[0].contacts, vec![contact]);
}

/// Deleted ids are never handed out again, even across sessions.
#[test]
fn test_ids_not_reused_across_reopen() {
    let temp_dir = TempDir::new().unwrap();

    let first = {
        let mut registry = open(&temp_dir);
        let first = registry.add_property(NewProperty::new("1 Elm Rd")).unwrap();
        let tenant = registry.add_tenant(first.id, "Alice").unwrap();
        registry.delete_property(first.id).unwrap();
        registry.close().unwrap();
        (first.id, tenant.id)
    };

    let mut registry = open(&temp_dir);
    let second = registry.add_property(NewProperty::new("2 Elm Rd")).unwrap();
    let tenant = registry.add_tenant(second.id, "Carol").unwrap();
    assert!(second.id > first.0);
    assert!(tenant.id > first.1);
}

/// A cascade removes every dependent and nothing else.
#[test]
fn test_cascade_counts() {
    let temp_dir = TempDir::new().unwrap();
    let mut registry = open(&temp_dir);

    let doomed = registry.add_property(NewProperty::new("1 Elm Rd")).unwrap();
    let kept = registry.add_property(NewProperty::new("2 Elm Rd")).unwrap();

    for name in ["Alice", "Eve", "Mallory"] {
        registry.add_tenant(doomed.id, name).unwrap();
    }
    for description in ["Roof", "Gutter"] {
        registry
            .add_maintenance_request(doomed.id, description)
            .unwrap();
    }
    registry
        .add_contact(doomed.id, NewContact::new("Bob"))
        .unwrap();
    registry.add_tenant(kept.id, "Carol").unwrap();
    registry
        .add_contact(kept.id, NewContact::new("Dana"))
        .unwrap();

    let summary = registry.delete_property(doomed.id).unwrap();
    assert_eq!(
        (summary.tenants, summary.maintenance_requests, summary.contacts),
        (3, 2, 1)
    );

    let listed = registry.list_properties().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].property, kept);
    assert_eq!(listed[0].dependent_count(), 2);

    assert!(registry.delete_property(doomed.id).unwrap_err().is_not_found());
}
