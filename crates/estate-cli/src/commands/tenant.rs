use anyhow::Result;
use estate_core::model::{PropertyId, TenantId};
use estate_core::Registry;

use super::print_json;

pub fn add_tenant(registry: &mut Registry, property_id: PropertyId, name: String) -> Result<()> {
    let tenant = registry.add_tenant(property_id, name)?;
    println!(
        "Tenant {} added to property {} with ID {}.",
        tenant.name, tenant.property_id, tenant.id
    );
    Ok(())
}

pub fn list_tenants(registry: &Registry, property_id: PropertyId, json: bool) -> Result<()> {
    let tenants = registry.list_tenants(property_id)?;

    if json {
        return print_json(&tenants);
    }

    if tenants.is_empty() {
        println!("No tenants for property {property_id}.");
    }
    for tenant in &tenants {
        println!("{}: {}", tenant.id, tenant.name);
    }
    Ok(())
}

pub fn delete_tenant(registry: &mut Registry, tenant_id: TenantId) -> Result<()> {
    let tenant = registry.delete_tenant(tenant_id)?;
    println!("Tenant {} deleted.", tenant.name);
    Ok(())
}
