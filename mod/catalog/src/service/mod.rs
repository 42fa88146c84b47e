pub mod category;
pub mod product;
pub mod search;
pub mod supplier;

use std::collections::BTreeSet;
use std::sync::{Arc, RwLock};

use serde::de::DeserializeOwned;
use serde_json::Value;

use shophunt_core::ServiceError;
use shophunt_db::{DbError, DbStore};

pub(crate) const PRODUCTS_TABLE: &str = "products";
pub(crate) const SUPPLIERS_TABLE: &str = "suppliers";

/// Catalog service — the data access gateway for products and
/// suppliers.
///
/// Holds the two remote clients: `db` (standard authorization, public
/// read paths) and `db_admin` (elevated authorization, admin write
/// paths). Which client an operation uses is fixed per call site; there
/// is no runtime capability check.
pub struct CatalogService {
    pub(crate) db: Arc<dyn DbStore>,
    pub(crate) db_admin: Arc<dyn DbStore>,
    pub(crate) categories: RwLock<BTreeSet<String>>,
}

impl CatalogService {
    pub fn new(db: Arc<dyn DbStore>, db_admin: Arc<dyn DbStore>) -> Self {
        Self {
            db,
            db_admin,
            categories: RwLock::new(category::seed_categories()),
        }
    }

    /// Deserialize raw rows into typed records.
    pub(crate) fn decode_rows<T: DeserializeOwned>(rows: Vec<Value>) -> Result<Vec<T>, ServiceError> {
        rows.into_iter()
            .map(|row| {
                serde_json::from_value(row).map_err(|e| ServiceError::Internal(e.to_string()))
            })
            .collect()
    }
}

/// Map a database-client error into the service taxonomy: not-found
/// stays not-found, everything else surfaces as a remote failure with
/// the raw detail string.
pub(crate) fn remote_err(err: DbError) -> ServiceError {
    match err {
        DbError::NotFound(what) => ServiceError::NotFound(what),
        other => ServiceError::Remote(other.to_string()),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_err_mapping() {
        assert!(matches!(
            remote_err(DbError::NotFound("products/1".into())),
            ServiceError::NotFound(_)
        ));
        let err = remote_err(DbError::Remote {
            status: 503,
            message: "over capacity".into(),
        });
        match err {
            ServiceError::Remote(msg) => assert!(msg.contains("over capacity")),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
