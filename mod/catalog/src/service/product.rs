use serde_json::{Value, json};
use tracing::debug;

use shophunt_core::ServiceError;
use shophunt_db::Order;

use super::{CatalogService, PRODUCTS_TABLE, remote_err};
use crate::forms::ValidProduct;
use crate::model::{Product, ProductRef};

/// Wire row for the five editable fields. Cleared optionals are written
/// as nulls so an update is a full replace, not a merge.
fn product_row(fields: &ValidProduct) -> Value {
    json!({
        "product_name": fields.product_name,
        "description": fields.description,
        "category": fields.category,
        "coupon_code": fields.coupon_code,
        "buy_link": fields.buy_link,
    })
}

impl CatalogService {
    /// Fetch the full product set, sorted by name ascending.
    ///
    /// Categories observed here are merged into the known-category set,
    /// so free-form entries survive a restart.
    pub async fn list_products(&self) -> Result<Vec<Product>, ServiceError> {
        let rows = self
            .db
            .select(PRODUCTS_TABLE, None, Some(&Order::asc("product_name")))
            .await
            .map_err(remote_err)?;
        let products: Vec<Product> = Self::decode_rows(rows)?;
        self.absorb_categories(&products);
        Ok(products)
    }

    pub async fn insert_product(&self, fields: ValidProduct) -> Result<Product, ServiceError> {
        let row = self
            .db_admin
            .insert(PRODUCTS_TABLE, product_row(&fields))
            .await
            .map_err(remote_err)?;
        let product: Product =
            serde_json::from_value(row).map_err(|e| ServiceError::Internal(e.to_string()))?;
        debug!(id = %product.id, name = %product.product_name, "product created");
        self.remember_category(&fields.category);
        Ok(product)
    }

    /// Full replace of the editable fields.
    pub async fn update_product(
        &self,
        id: &str,
        fields: ValidProduct,
    ) -> Result<Product, ServiceError> {
        let row = self
            .db_admin
            .update(PRODUCTS_TABLE, id, product_row(&fields))
            .await
            .map_err(remote_err)?;
        let product: Product =
            serde_json::from_value(row).map_err(|e| ServiceError::Internal(e.to_string()))?;
        self.remember_category(&fields.category);
        Ok(product)
    }

    /// Delete a product. Supplier rows referencing it are left in place
    /// and render as orphans in the joined list view.
    pub async fn delete_product(&self, id: &str) -> Result<(), ServiceError> {
        self.db_admin
            .delete(PRODUCTS_TABLE, id)
            .await
            .map_err(remote_err)?;
        debug!(id, "product deleted");
        Ok(())
    }

    /// Id + name pairs for the supplier form's single-select, filtered
    /// by case-insensitive substring on the name. An empty query
    /// returns the whole set (the form starts unfiltered).
    pub async fn product_picker(&self, query: &str) -> Result<Vec<ProductRef>, ServiceError> {
        let needle = query.trim().to_lowercase();
        let products = self.list_products().await?;
        Ok(products
            .iter()
            .filter(|p| needle.is_empty() || p.product_name.to_lowercase().contains(&needle))
            .map(ProductRef::from)
            .collect())
    }
}
