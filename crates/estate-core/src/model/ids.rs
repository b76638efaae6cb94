use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! define_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            #[must_use]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }

        impl ToSql for $name {
            fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                self.0.to_sql()
            }
        }

        impl FromSql for $name {
            fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                i64::column_result(value).map(Self)
            }
        }
    };
}

define_id!(PropertyId, "Row identifier of a rental property.");
define_id!(TenantId, "Row identifier of a tenant.");
define_id!(
    MaintenanceRequestId,
    "Row identifier of a maintenance request."
);
define_id!(ContactId, "Row identifier of a property contact.");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_id_parse() {
        let id: PropertyId = "42".parse().unwrap();
        assert_eq!(id, PropertyId::new(42));
        assert_eq!(id.get(), 42);
    }

    #[test]
    fn test_id_parse_rejects_garbage() {
        assert!("forty-two".parse::<TenantId>().is_err());
        assert!("".parse::<ContactId>().is_err());
    }

    #[test]
    fn test_id_display() {
        assert_eq!(MaintenanceRequestId::new(3).to_string(), "3");
    }

    #[test]
    fn test_id_serializes_as_plain_integer() {
        let json = serde_json::to_string(&PropertyId::new(9)).unwrap();
        assert_eq!(json, "9");
    }

    #[test]
    fn test_ids_order_by_value() {
        assert!(PropertyId::new(1) < PropertyId::new(2));
    }
}
