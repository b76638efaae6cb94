use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("{entity} {field} must not be empty")]
    Validation {
        entity: &'static str,
        field: &'static str,
    },
}

impl Error {
    /// Returns `true` when a referenced entity does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns `true` when a required field was missing or empty.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = Error::NotFound {
            entity: "property",
            id: 7,
        };
        assert_eq!(err.to_string(), "property with id 7 not found");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_validation_message() {
        let err = Error::Validation {
            entity: "tenant",
            field: "name",
        };
        assert_eq!(err.to_string(), "tenant name must not be empty");
        assert!(err.is_validation());
    }
}
