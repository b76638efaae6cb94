use anyhow::Result;
use estate_core::model::{MaintenanceRequest, MaintenanceRequestId, PropertyId};
use estate_core::Registry;

use super::print_json;

pub fn add_maintenance_request(
    registry: &mut Registry,
    property_id: PropertyId,
    description: String,
) -> Result<()> {
    let request = registry.add_maintenance_request(property_id, description)?;
    println!(
        "Maintenance request {} added to property {} (Status: {}).",
        request.id, request.property_id, request.status
    );
    Ok(())
}

pub fn list_maintenance_requests(
    registry: &Registry,
    property_id: PropertyId,
    json: bool,
) -> Result<()> {
    let requests = registry.list_maintenance_requests(property_id)?;

    if json {
        return print_json(&requests);
    }

    if requests.is_empty() {
        println!("No maintenance requests for property {property_id}.");
    }
    for request in &requests {
        println!("{}", format_request(request));
    }
    Ok(())
}

fn format_request(request: &MaintenanceRequest) -> String {
    format!(
        "{}: {} (Status: {})",
        request.id, request.description, request.status
    )
}

pub fn delete_maintenance_request(
    registry: &mut Registry,
    request_id: MaintenanceRequestId,
) -> Result<()> {
    let request = registry.delete_maintenance_request(request_id)?;
    println!("Maintenance request {} deleted.", request.description);
    Ok(())
}
