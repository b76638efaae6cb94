pub mod contact;
pub mod ids;
pub mod maintenance;
pub mod property;
pub mod tenant;

pub use contact::{Contact, NewContact};
pub use ids::{ContactId, MaintenanceRequestId, PropertyId, TenantId};
pub use maintenance::MaintenanceRequest;
pub use property::{NewProperty, Property, PropertyDetails};
pub use tenant::Tenant;

/// Treat empty or all-whitespace optional text as absent.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Whether a required text field carries a value.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
