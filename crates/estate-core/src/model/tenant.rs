use serde::{Deserialize, Serialize};

use crate::model::ids::{PropertyId, TenantId};

/// A person renting a property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: TenantId,
    pub property_id: PropertyId,
    pub name: String,
}
