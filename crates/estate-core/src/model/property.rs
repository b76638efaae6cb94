use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::ids::PropertyId;
use crate::model::{is_blank, non_blank, Contact, MaintenanceRequest, Tenant};

/// A rental property.
///
/// The owner of every tenant, maintenance request and contact. Deleting a
/// property removes all of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub address: String,

    /// Asking or purchase price in whole currency units.
    pub price: i64,

    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// The fields of a property that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewProperty {
    pub address: String,
    pub price: i64,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl NewProperty {
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Check required fields and drop blank optional ones.
    pub(crate) fn normalized(self) -> Result<Self> {
        if is_blank(&self.address) {
            return Err(Error::Validation {
                entity: "property",
                field: "address",
            });
        }
        Ok(Self {
            address: self.address,
            price: self.price,
            description: non_blank(self.description),
            image_url: non_blank(self.image_url),
        })
    }
}

/// A property together with everything it owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDetails {
    #[serde(flatten)]
    pub property: Property,
    pub tenants: Vec<Tenant>,
    pub maintenance_requests: Vec<MaintenanceRequest>,
    pub contacts: Vec<Contact>,
}

impl PropertyDetails {
    /// Number of dependent records that a delete would cascade to.
    #[must_use]
    pub fn dependent_count(&self) -> usize {
        self.tenants.len() + self.maintenance_requests.len() + self.contacts.len()
    }
}
