use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::ids::{ContactId, PropertyId};
use crate::model::{is_blank, non_blank};

/// Someone associated with a property (landlord, plumber, agent, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub property_id: PropertyId,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,

    /// Free-form role, e.g. "plumber" or "landlord".
    pub role: Option<String>,
}

/// The fields of a contact that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewContact {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl NewContact {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub(crate) fn normalized(self) -> Result<Self> {
        if is_blank(&self.name) {
            return Err(Error::Validation {
                entity: "contact",
                field: "name",
            });
        }
        Ok(Self {
            name: self.name,
            phone: non_blank(self.phone),
            email: non_blank(self.email),
            role: non_blank(self.role),
        })
    }
}
