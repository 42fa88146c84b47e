use std::collections::HashMap;

use serde_json::json;
use tracing::debug;

use shophunt_core::ServiceError;
use shophunt_db::{Filter, Order};

use super::{CatalogService, PRODUCTS_TABLE, SUPPLIERS_TABLE, remote_err};
use crate::forms::ValidSupplier;
use crate::model::supplier::ORPHAN_PRODUCT_LABEL;
use crate::model::{Product, Supplier, SupplierWithProduct};

impl CatalogService {
    /// All suppliers joined with their parent product's name, sorted by
    /// supplier name ascending.
    ///
    /// The join is two reads stitched client-side; there is no enforced
    /// on-delete policy, so suppliers whose product is gone render as
    /// [`ORPHAN_PRODUCT_LABEL`].
    pub async fn list_suppliers(&self) -> Result<Vec<SupplierWithProduct>, ServiceError> {
        let rows = self
            .db
            .select(SUPPLIERS_TABLE, None, Some(&Order::asc("name")))
            .await
            .map_err(remote_err)?;
        let suppliers: Vec<Supplier> = Self::decode_rows(rows)?;

        let product_rows = self
            .db
            .select(PRODUCTS_TABLE, None, None)
            .await
            .map_err(remote_err)?;
        let products: Vec<Product> = Self::decode_rows(product_rows)?;
        let names: HashMap<&str, &str> = products
            .iter()
            .map(|p| (p.id.as_str(), p.product_name.as_str()))
            .collect();

        Ok(suppliers
            .into_iter()
            .map(|supplier| {
                let product_name = names
                    .get(supplier.product_id.as_str())
                    .copied()
                    .unwrap_or(ORPHAN_PRODUCT_LABEL)
                    .to_string();
                SupplierWithProduct {
                    supplier,
                    product_name,
                }
            })
            .collect())
    }

    /// Suppliers for one product, sorted by name ascending. Called on
    /// every product selection; results are never cached.
    pub async fn list_suppliers_for_product(
        &self,
        product_id: &str,
    ) -> Result<Vec<Supplier>, ServiceError> {
        let rows = self
            .db
            .select(
                SUPPLIERS_TABLE,
                Some(&Filter::eq("product_id", product_id)),
                Some(&Order::asc("name")),
            )
            .await
            .map_err(remote_err)?;
        Self::decode_rows(rows)
    }

    pub async fn insert_supplier(&self, fields: ValidSupplier) -> Result<Supplier, ServiceError> {
        let row = self
            .db_admin
            .insert(
                SUPPLIERS_TABLE,
                json!({
                    "name": fields.name,
                    "store_link": fields.store_link,
                    "country": fields.country,
                    "product_id": fields.product_id,
                }),
            )
            .await
            .map_err(remote_err)?;
        let supplier: Supplier =
            serde_json::from_value(row).map_err(|e| ServiceError::Internal(e.to_string()))?;
        debug!(id = %supplier.id, name = %supplier.name, "supplier created");
        Ok(supplier)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::mem_service;
    use super::*;
    use crate::forms::{ProductForm, SupplierForm};

    async fn seed_product(service: &CatalogService, name: &str) -> Product {
        let form = ProductForm {
            name: name.into(),
            description: "desc".into(),
            category: "SARMs".into(),
            ..Default::default()
        };
        service.insert_product(form.validate().unwrap()).await.unwrap()
    }

    fn supplier(name: &str, product_id: &str) -> ValidSupplier {
        SupplierForm {
            name: name.into(),
            store_link: "https://example.com".into(),
            country: "US".into(),
            product_id: product_id.into(),
        }
        .validate()
        .unwrap()
    }

    #[tokio::test]
    async fn suppliers_for_product_are_scoped_and_sorted() {
        let (service, _store) = mem_service();
        let rad = seed_product(&service, "RAD140").await;
        let mk = seed_product(&service, "MK-677").await;

        service.insert_supplier(supplier("Chemyo", &rad.id)).await.unwrap();
        service
            .insert_supplier(supplier("Amino Asylum", &rad.id))
            .await
            .unwrap();
        service
            .insert_supplier(supplier("Science.bio", &mk.id))
            .await
            .unwrap();

        let names: Vec<String> = service
            .list_suppliers_for_product(&rad.id)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Amino Asylum", "Chemyo"]);
    }

    #[tokio::test]
    async fn joined_list_carries_product_names() {
        let (service, _store) = mem_service();
        let rad = seed_product(&service, "RAD140").await;
        service.insert_supplier(supplier("Chemyo", &rad.id)).await.unwrap();

        let joined = service.list_suppliers().await.unwrap();
        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].product_name, "RAD140");
    }

    #[tokio::test]
    async fn orphaned_supplier_renders_na() {
        let (service, _store) = mem_service();
        let rad = seed_product(&service, "RAD140").await;
        service.insert_supplier(supplier("Chemyo", &rad.id)).await.unwrap();

        // Delete the parent; the supplier row stays behind.
        service.delete_product(&rad.id).await.unwrap();

        let joined = service.list_suppliers().await.unwrap();
        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].product_name, "N/A");
    }

    #[tokio::test]
    async fn supplier_lookup_refetches_every_time() {
        let (service, _store) = mem_service();
        let rad = seed_product(&service, "RAD140").await;

        assert!(service
            .list_suppliers_for_product(&rad.id)
            .await
            .unwrap()
            .is_empty());

        service.insert_supplier(supplier("Chemyo", &rad.id)).await.unwrap();

        // No caching: the new row is visible on the next lookup.
        assert_eq!(
            service.list_suppliers_for_product(&rad.id).await.unwrap().len(),
            1
        );
    }
}
