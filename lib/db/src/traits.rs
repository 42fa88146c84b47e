use serde_json::Value;

use crate::error::DbError;

/// Equality filter on a single column.
///
/// The hosted API only ever receives equality predicates from this
/// application (supplier lookups by `product_id`); richer filtering
/// happens in memory on the fetched set.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub column: String,
    pub value: String,
}

impl Filter {
    pub fn eq(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }
}

/// Result ordering on a single column.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub column: String,
    pub ascending: bool,
}

impl Order {
    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            ascending: true,
        }
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            ascending: false,
        }
    }
}

/// DbStore is the remote-table access seam.
///
/// Every operation is a single round trip: no retry, no timeout policy
/// beyond the transport default, no transactional wrapping across
/// tables. Rows are flat JSON objects; the domain layer deserializes
/// them into typed models.
#[async_trait::async_trait]
pub trait DbStore: Send + Sync {
    /// Fetch rows from a table, optionally filtered and ordered.
    async fn select(
        &self,
        table: &str,
        filter: Option<&Filter>,
        order: Option<&Order>,
    ) -> Result<Vec<Value>, DbError>;

    /// Insert one row and return the created row (server-assigned id
    /// included).
    async fn insert(&self, table: &str, row: Value) -> Result<Value, DbError>;

    /// Replace columns of the row with the given id and return the
    /// updated row. Fails with [`DbError::NotFound`] when no row
    /// matches.
    async fn update(&self, table: &str, id: &str, changes: Value) -> Result<Value, DbError>;

    /// Delete the row with the given id. Fails with
    /// [`DbError::NotFound`] when no row matches.
    async fn delete(&self, table: &str, id: &str) -> Result<(), DbError>;
}
