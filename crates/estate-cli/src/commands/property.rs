use anyhow::Result;
use estate_core::model::{NewProperty, PropertyDetails, PropertyId};
use estate_core::Registry;
use std::io::{self, Write};

use super::{or_dash, print_json};

pub fn add_property(
    registry: &mut Registry,
    address: String,
    price: i64,
    description: Option<String>,
    image_url: Option<String>,
) -> Result<()> {
    let mut new = NewProperty::new(address).with_price(price);
    if let Some(description) = description {
        new = new.with_description(description);
    }
    if let Some(image_url) = image_url {
        new = new.with_image_url(image_url);
    }

    let property = registry.add_property(new)?;
    println!("Property {} added with ID {}.", property.address, property.id);
    Ok(())
}

pub fn add_property_image(
    registry: &mut Registry,
    property_id: PropertyId,
    image_url: String,
) -> Result<()> {
    let property = registry.set_property_image(property_id, image_url)?;
    println!("Image URL added to property {}.", property.address);
    Ok(())
}

pub fn list_properties(registry: &Registry, json: bool) -> Result<()> {
    let properties = registry.list_properties()?;

    if json {
        return print_json(&properties);
    }

    if properties.is_empty() {
        println!("No properties found.");
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for details in &properties {
        write_details(&mut out, details)?;
    }
    Ok(())
}

fn write_details(out: &mut impl Write, details: &PropertyDetails) -> io::Result<()> {
    let property = &details.property;
    writeln!(
        out,
        "ID: {}, Address: {}, Price: {}, Description: {}, Image URL: {}",
        property.id,
        property.address,
        property.price,
        or_dash(property.description.as_deref()),
        or_dash(property.image_url.as_deref()),
    )?;

    writeln!(out, "Tenants:")?;
    for tenant in &details.tenants {
        writeln!(out, "  Tenant ID: {}, Name: {}", tenant.id, tenant.name)?;
    }

    writeln!(out, "Maintenance Requests:")?;
    for request in &details.maintenance_requests {
        writeln!(
            out,
            "  Request ID: {}, Description: {}, Status: {}",
            request.id, request.description, request.status,
        )?;
    }

    writeln!(out, "Contacts:")?;
    for contact in &details.contacts {
        writeln!(
            out,
            "  Contact ID: {}, Name: {}, Phone: {}, Email: {}, Role: {}",
            contact.id,
            contact.name,
            or_dash(contact.phone.as_deref()),
            or_dash(contact.email.as_deref()),
            or_dash(contact.role.as_deref()),
        )?;
    }

    Ok(())
}

pub fn delete_property(registry: &mut Registry, property_id: PropertyId) -> Result<()> {
    let summary = registry.delete_property(property_id)?;
    println!(
        "Property {} and its {} tenants, {} maintenance requests and {} contacts deleted.",
        summary.property.address, summary.tenants, summary.maintenance_requests, summary.contacts
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use estate_core::model::NewContact;
    use estate_core::Database;

    #[test]
    fn test_write_details() {
        let mut registry = Registry::new(Database::open_in_memory().unwrap());
        let property = registry
            .add_property(NewProperty::new("123 Main St").with_price(250_000))
            .unwrap();
        registry.add_tenant(property.id, "Alice").unwrap();
        registry
            .add_maintenance_request(property.id, "Leaky faucet")
            .unwrap();
        registry
            .add_contact(property.id, NewContact::new("Bob").with_role("plumber"))
            .unwrap();

        let listed = registry.list_properties().unwrap();
        let mut buf = Vec::new();
        write_details(&mut buf, &listed[0]).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with(
            "ID: 1, Address: 123 Main St, Price: 250000, Description: -, Image URL: -\n"
        ));
        assert!(text.contains("  Tenant ID: 1, Name: Alice\n"));
        assert!(text.contains(
            "Maintenance Requests:\n  Request ID: 1, Description: Leaky faucet, Status: Pending\nContacts:\n"
        ));
        assert!(text.contains("  Contact ID: 1, Name: Bob, Phone: -, Email: -, Role: plumber\n"));
    }
}
