use anyhow::Result;
use estate_core::model::{ContactId, NewContact, PropertyId};
use estate_core::Registry;

use super::{or_dash, print_json};

/// Optional fields of a contact as given on the command line.
#[derive(Debug, Default)]
pub struct ContactDetails {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

pub fn add_contact(
    registry: &mut Registry,
    property_id: PropertyId,
    name: String,
    details: ContactDetails,
) -> Result<()> {
    let mut new = NewContact::new(name);
    if let Some(phone) = details.phone {
        new = new.with_phone(phone);
    }
    if let Some(email) = details.email {
        new = new.with_email(email);
    }
    if let Some(role) = details.role {
        new = new.with_role(role);
    }

    let contact = registry.add_contact(property_id, new)?;
    println!(
        "Contact {} added to property {} with ID {}.",
        contact.name, contact.property_id, contact.id
    );
    Ok(())
}

pub fn list_contacts(registry: &Registry, property_id: PropertyId, json: bool) -> Result<()> {
    let contacts = registry.list_contacts(property_id)?;

    if json {
        return print_json(&contacts);
    }

    if contacts.is_empty() {
        println!("No contacts for property {property_id}.");
    }
    for contact in &contacts {
        println!(
            "{}: {} (Role: {}, Phone: {}, Email: {})",
            contact.id,
            contact.name,
            or_dash(contact.role.as_deref()),
            or_dash(contact.phone.as_deref()),
            or_dash(contact.email.as_deref()),
        );
    }
    Ok(())
}

pub fn delete_contact(registry: &mut Registry, contact_id: ContactId) -> Result<()> {
    let contact = registry.delete_contact(contact_id)?;
    println!("Contact {} deleted.", contact.name);
    Ok(())
}
