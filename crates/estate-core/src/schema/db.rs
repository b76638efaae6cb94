use rusqlite::{Connection, Transaction};
use std::path::Path;

use crate::error::Result;

use super::tables::SCHEMA;

/// An open SQLite store holding the registry tables.
#[derive(Debug)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) a database at the given path and initialize the schema.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Opening database {}", path.display());
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Close the connection, reporting any error SQLite raises while doing so.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| e.into())
    }

    /// Get a reference to the underlying connection (for advanced queries).
    #[must_use]
    pub const fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Begin the unit of work for a single registry operation.
    ///
    /// Dropping the transaction without committing rolls it back.
    pub fn transaction(&mut self) -> Result<Transaction<'_>> {
        Ok(self.conn.transaction()?)
    }

    fn init(&self) -> Result<()> {
        // Foreign key enforcement is per connection, not per file.
        self.conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        self.conn.execute_batch(SCHEMA)?;
        log::debug!("Schema ready");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::TABLES;

    fn table_exists(db: &Database, name: &str) -> bool {
        db.conn()
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
                [name],
                |row| row.get::<_, i64>(0),
            )
            .unwrap()
            == 1
    }

    #[test]
    fn test_database_open_in_memory() {
        let db = Database::open_in_memory().unwrap();
        for table in TABLES {
            assert!(table_exists(&db, table), "missing table {table}");
        }
    }

    #[test]
    fn test_foreign_keys_enabled() {
        let db = Database::open_in_memory().unwrap();
        let enabled: i64 = db
            .conn()
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1);
    }

    #[test]
    fn test_orphan_insert_rejected_by_schema() {
        let db = Database::open_in_memory().unwrap();
        let result = db.conn().execute(
            "INSERT INTO tenants (property_id, name) VALUES (99, 'Ghost')",
            [],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_init_is_idempotent() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("estate.db");

        Database::open(&path).unwrap().close().unwrap();
        let db = Database::open(&path).unwrap();
        assert!(table_exists(&db, "properties"));
        db.close().unwrap();
    }

    #[test]
    fn test_uncommitted_transaction_rolls_back() {
        let mut db = Database::open_in_memory().unwrap();
        {
            let tx = db.transaction().unwrap();
            tx.execute("INSERT INTO properties (address) VALUES ('1 Elm Rd')", [])
                .unwrap();
        }
        let count: i64 = db
            .conn()
            .query_row("SELECT COUNT(*) FROM properties", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
