//! Core property registry for estate.
//!
//! This crate defines the rental-property data model (Property, Tenant,
//! MaintenanceRequest, Contact), the SQLite store, and the [`Registry`]
//! operations that keep dependents consistent with their owning property.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod model;
pub mod registry;
pub mod schema;

pub use error::{Error, Result};
pub use registry::{CascadeSummary, Registry};
pub use schema::Database;
