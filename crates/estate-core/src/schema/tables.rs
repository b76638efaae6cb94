/// Names of every table the registry owns, parents first.
pub const TABLES: &[&str] = &["properties", "tenants", "maintenance_requests", "contacts"];

/// Idempotent schema creation, run on every open.
///
/// Dependent tables reference `properties(id)` without `ON DELETE CASCADE`:
/// the registry removes dependents itself, and the enforced foreign key
/// rejects any parent delete that would leave one behind.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS properties (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    address TEXT NOT NULL,
    price INTEGER NOT NULL DEFAULT 0,
    description TEXT,
    image_url TEXT
);

CREATE TABLE IF NOT EXISTS tenants (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    property_id INTEGER NOT NULL REFERENCES properties(id),
    name TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_tenants_property_id ON tenants(property_id);

CREATE TABLE IF NOT EXISTS maintenance_requests (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    property_id INTEGER NOT NULL REFERENCES properties(id),
    description TEXT NOT NULL,
    request_date TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'Pending'
);

CREATE INDEX IF NOT EXISTS idx_maintenance_requests_property_id
    ON maintenance_requests(property_id);

CREATE TABLE IF NOT EXISTS contacts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    property_id INTEGER NOT NULL REFERENCES properties(id),
    name TEXT NOT NULL,
    phone TEXT,
    email TEXT,
    role TEXT
);

CREATE INDEX IF NOT EXISTS idx_contacts_property_id ON contacts(property_id);
"#;
