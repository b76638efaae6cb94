use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{
    is_blank, Contact, ContactId, MaintenanceRequest, MaintenanceRequestId, NewContact,
    NewProperty, Property, PropertyDetails, PropertyId, Tenant, TenantId,
};
use crate::schema::Database;

/// What a property delete removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CascadeSummary {
    pub property: Property,
    pub tenants: usize,
    pub maintenance_requests: usize,
    pub contacts: usize,
}

/// Add, list and delete operations over an open [`Database`].
///
/// Every mutating operation runs in its own transaction: it either commits
/// completely or leaves the store untouched.
#[derive(Debug)]
pub struct Registry {
    db: Database,
}

impl Registry {
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }

    #[must_use]
    pub const fn database(&self) -> &Database {
        &self.db
    }

    pub fn close(self) -> Result<()> {
        self.db.close()
    }
}

// Property operations
impl Registry {
    /// Store a new property and return it with its assigned id.
    pub fn add_property(&mut self, new: NewProperty) -> Result<Property> {
        let new = new.normalized()?;

        let tx = self.db.transaction()?;
        tx.execute(
            "INSERT INTO properties (address, price, description, image_url)
             VALUES (?1, ?2, ?3, ?4)",
            params![new.address, new.price, new.description, new.image_url],
        )?;
        let id = PropertyId::new(tx.last_insert_rowid());
        tx.commit()?;

        log::debug!("Added property {} ({})", id, new.address);
        Ok(Property {
            id,
            address: new.address,
            price: new.price,
            description: new.description,
            image_url: new.image_url,
        })
    }

    pub fn get_property(&self, id: PropertyId) -> Result<Property> {
        require_property(self.db.conn(), id)
    }

    /// Replace the image URL of an existing property.
    pub fn set_property_image(
        &mut self,
        id: PropertyId,
        image_url: impl Into<String>,
    ) -> Result<Property> {
        let image_url = image_url.into();
        if is_blank(&image_url) {
            return Err(Error::Validation {
                entity: "property",
                field: "image URL",
            });
        }

        let tx = self.db.transaction()?;
        let mut property = require_property(&tx, id)?;
        tx.execute(
            "UPDATE properties SET image_url = ?2 WHERE id = ?1",
            params![id, image_url],
        )?;
        tx.commit()?;

        log::debug!("Set image URL of property {}", id);
        property.image_url = Some(image_url);
        Ok(property)
    }

    /// All properties in id order, each with its dependents attached.
    pub fn list_properties(&self) -> Result<Vec<PropertyDetails>> {
        // One read snapshot so the nested lists agree with the property list.
        let tx = self.db.conn().unchecked_transaction()?;

        let properties = all_properties(&tx)?;

        let mut details = Vec::with_capacity(properties.len());
        for property in properties {
            details.push(PropertyDetails {
                tenants: tenants_of(&tx, property.id)?,
                maintenance_requests: maintenance_requests_of(&tx, property.id)?,
                contacts: contacts_of(&tx, property.id)?,
                property,
            });
        }

        Ok(details)
    }

    /// Delete a property and everything that references it.
    pub fn delete_property(&mut self, id: PropertyId) -> Result<CascadeSummary> {
        let tx = self.db.transaction()?;
        let property = require_property(&tx, id)?;

        let tenants = tx.execute("DELETE FROM tenants WHERE property_id = ?1", [id])?;
        let maintenance_requests = tx.execute(
            "DELETE FROM maintenance_requests WHERE property_id = ?1",
            [id],
        )?;
        let contacts = tx.execute("DELETE FROM contacts WHERE property_id = ?1", [id])?;
        tx.execute("DELETE FROM properties WHERE id = ?1", [id])?;
        tx.commit()?;

        log::debug!(
            "Deleted property {} with {} tenants, {} maintenance requests, {} contacts",
            id,
            tenants,
            maintenance_requests,
            contacts
        );
        Ok(CascadeSummary {
            property,
            tenants,
            maintenance_requests,
            contacts,
        })
    }
}

// Tenant operations
impl Registry {
    pub fn add_tenant(
        &mut self,
        property_id: PropertyId,
        name: impl Into<String>,
    ) -> Result<Tenant> {
        let name = name.into();
        if is_blank(&name) {
            return Err(Error::Validation {
                entity: "tenant",
                field: "name",
            });
        }

        let tx = self.db.transaction()?;
        require_property(&tx, property_id)?;
        tx.execute(
            "INSERT INTO tenants (property_id, name) VALUES (?1, ?2)",
            params![property_id, name],
        )?;
        let id = TenantId::new(tx.last_insert_rowid());
        tx.commit()?;

        log::debug!("Added tenant {} to property {}", id, property_id);
        Ok(Tenant {
            id,
            property_id,
            name,
        })
    }

    pub fn list_tenants(&self, property_id: PropertyId) -> Result<Vec<Tenant>> {
        let conn = self.db.conn();
        require_property(conn, property_id)?;
        tenants_of(conn, property_id)
    }

    /// Delete a tenant and return what was removed.
    pub fn delete_tenant(&mut self, id: TenantId) -> Result<Tenant> {
        let tx = self.db.transaction()?;
        let tenant = tx
            .query_row(
                "SELECT id, property_id, name FROM tenants WHERE id = ?1",
                [id],
                row_to_tenant,
            )
            .optional()?
            .ok_or(Error::NotFound {
                entity: "tenant",
                id: id.get(),
            })?;
        tx.execute("DELETE FROM tenants WHERE id = ?1", [id])?;
        tx.commit()?;

        log::debug!("Deleted tenant {}", id);
        Ok(tenant)
    }
}

// Maintenance request operations
impl Registry {
    /// Log a new request against a property, stamped now and marked pending.
    pub fn add_maintenance_request(
        &mut self,
        property_id: PropertyId,
        description: impl Into<String>,
    ) -> Result<MaintenanceRequest> {
        let description = description.into();
        if is_blank(&description) {
            return Err(Error::Validation {
                entity: "maintenance request",
                field: "description",
            });
        }

        let request_date = Utc::now();
        let status = MaintenanceRequest::DEFAULT_STATUS.to_string();

        let tx = self.db.transaction()?;
        require_property(&tx, property_id)?;
        tx.execute(
            "INSERT INTO maintenance_requests (property_id, description, request_date, status)
             VALUES (?1, ?2, ?3, ?4)",
            params![property_id, description, request_date.to_rfc3339(), status],
        )?;
        let id = MaintenanceRequestId::new(tx.last_insert_rowid());
        tx.commit()?;

        log::debug!("Added maintenance request {} to property {}", id, property_id);
        Ok(MaintenanceRequest {
            id,
            property_id,
            description,
            request_date,
            status,
        })
    }

    pub fn list_maintenance_requests(
        &self,
        property_id: PropertyId,
    ) -> Result<Vec<MaintenanceRequest>> {
        let conn = self.db.conn();
        require_property(conn, property_id)?;
        maintenance_requests_of(conn, property_id)
    }

    pub fn delete_maintenance_request(
        &mut self,
        id: MaintenanceRequestId,
    ) -> Result<MaintenanceRequest> {
        let tx = self.db.transaction()?;
        let request = tx
            .query_row(
                "SELECT id, property_id, description, request_date, status
                 FROM maintenance_requests
                 WHERE id = ?1",
                [id],
                row_to_maintenance_request,
            )
            .optional()?
            .ok_or(Error::NotFound {
                entity: "maintenance request",
                id: id.get(),
            })?;
        tx.execute("DELETE FROM maintenance_requests WHERE id = ?1", [id])?;
        tx.commit()?;

        log::debug!("Deleted maintenance request {}", id);
        Ok(request)
    }
}

// Contact operations
impl Registry {
    pub fn add_contact(&mut self, property_id: PropertyId, new: NewContact) -> Result<Contact> {
        let new = new.normalized()?;

        let tx = self.db.transaction()?;
        require_property(&tx, property_id)?;
        tx.execute(
            "INSERT INTO contacts (property_id, name, phone, email, role)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![property_id, new.name, new.phone, new.email, new.role],
        )?;
        let id = ContactId::new(tx.last_insert_rowid());
        tx.commit()?;

        log::debug!("Added contact {} to property {}", id, property_id);
        Ok(Contact {
            id,
            property_id,
            name: new.name,
            phone: new.phone,
            email: new.email,
            role: new.role,
        })
    }

    pub fn list_contacts(&self, property_id: PropertyId) -> Result<Vec<Contact>> {
        let conn = self.db.conn();
        require_property(conn, property_id)?;
        contacts_of(conn, property_id)
    }

    pub fn delete_contact(&mut self, id: ContactId) -> Result<Contact> {
        let tx = self.db.transaction()?;
        let contact = tx
            .query_row(
                "SELECT id, property_id, name, phone, email, role FROM contacts WHERE id = ?1",
                [id],
                row_to_contact,
            )
            .optional()?
            .ok_or(Error::NotFound {
                entity: "contact",
                id: id.get(),
            })?;
        tx.execute("DELETE FROM contacts WHERE id = ?1", [id])?;
        tx.commit()?;

        log::debug!("Deleted contact {}", id);
        Ok(contact)
    }
}

fn require_property(conn: &Connection, id: PropertyId) -> Result<Property> {
    conn.query_row(
        "SELECT id, address, price, description, image_url FROM properties WHERE id = ?1",
        [id],
        row_to_property,
    )
    .optional()?
    .ok_or(Error::NotFound {
        entity: "property",
        id: id.get(),
    })
}

fn all_properties(conn: &Connection) -> Result<Vec<Property>> {
    let mut stmt = conn.prepare(
        "SELECT id, address, price, description, image_url
         FROM properties
         ORDER BY id",
    )?;
    let properties = stmt
        .query_map([], row_to_property)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(properties)
}

fn tenants_of(conn: &Connection, property_id: PropertyId) -> Result<Vec<Tenant>> {
    let mut stmt = conn.prepare(
        "SELECT id, property_id, name
         FROM tenants
         WHERE property_id = ?1
         ORDER BY id",
    )?;
    let tenants = stmt
        .query_map([property_id], row_to_tenant)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(tenants)
}

fn maintenance_requests_of(
    conn: &Connection,
    property_id: PropertyId,
) -> Result<Vec<MaintenanceRequest>> {
    let mut stmt = conn.prepare(
        "SELECT id, property_id, description, request_date, status
         FROM maintenance_requests
         WHERE property_id = ?1
         ORDER BY id",
    )?;
    let requests = stmt
        .query_map([property_id], row_to_maintenance_request)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(requests)
}

fn contacts_of(conn: &Connection, property_id: PropertyId) -> Result<Vec<Contact>> {
    let mut stmt = conn.prepare(
        "SELECT id, property_id, name, phone, email, role
         FROM contacts
         WHERE property_id = ?1
         ORDER BY id",
    )?;
    let contacts = stmt
        .query_map([property_id], row_to_contact)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(contacts)
}

fn row_to_property(row: &Row<'_>) -> rusqlite::Result<Property> {
    Ok(Property {
        id: row.get(0)?,
        address: row.get(1)?,
        price: row.get(2)?,
        description: row.get(3)?,
        image_url: row.get(4)?,
    })
}

fn row_to_tenant(row: &Row<'_>) -> rusqlite::Result<Tenant> {
    Ok(Tenant {
        id: row.get(0)?,
        property_id: row.get(1)?,
        name: row.get(2)?,
    })
}

fn row_to_maintenance_request(row: &Row<'_>) -> rusqlite::Result<MaintenanceRequest> {
    let request_date: String = row.get(3)?;
    let request_date = DateTime::parse_from_rfc3339(&request_date)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;

    Ok(MaintenanceRequest {
        id: row.get(0)?,
        property_id: row.get(1)?,
        description: row.get(2)?,
        request_date,
        status: row.get(4)?,
    })
}

fn row_to_contact(row: &Row<'_>) -> rusqlite::Result<Contact> {
    Ok(Contact {
        id: row.get(0)?,
        property_id: row.get(1)?,
        name: row.get(2)?,
        phone: row.get(3)?,
        email: row.get(4)?,
        role: row.get(5)?,
    })
}
