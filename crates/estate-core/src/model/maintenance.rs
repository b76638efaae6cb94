use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::{MaintenanceRequestId, PropertyId};

/// A repair or upkeep job logged against a property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceRequest {
    pub id: MaintenanceRequestId,
    pub property_id: PropertyId,
    pub description: String,

    /// When the request was logged (UTC).
    pub request_date: DateTime<Utc>,

    pub status: String,
}

impl MaintenanceRequest {
    /// Status given to every newly logged request.
    pub const DEFAULT_STATUS: &'static str = "Pending";

    /// Whether the request is still in its initial state.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == Self::DEFAULT_STATUS
    }
}
