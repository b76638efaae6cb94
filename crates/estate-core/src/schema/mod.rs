mod db;
mod tables;

pub use db::Database;
pub use tables::{SCHEMA, TABLES};
