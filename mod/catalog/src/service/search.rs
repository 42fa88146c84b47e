use shophunt_core::ServiceError;

use super::CatalogService;
use crate::model::Product;

/// Case-insensitive substring match across name, description, and
/// category. The needle must already be lowercased.
fn matches(product: &Product, needle: &str) -> bool {
    if product.product_name.to_lowercase().contains(needle) {
        return true;
    }
    if let Some(description) = &product.description {
        if description.to_lowercase().contains(needle) {
            return true;
        }
    }
    if let Some(category) = &product.category {
        if category.to_lowercase().contains(needle) {
            return true;
        }
    }
    false
}

impl CatalogService {
    /// Filter the full product set by query substring.
    ///
    /// Fetches the whole set and filters in memory — the catalog is
    /// small and the storefront recomputes this on every keystroke. An
    /// empty or whitespace query yields no matches.
    pub async fn search_products(&self, query: &str) -> Result<Vec<Product>, ServiceError> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }
        let products = self.list_products().await?;
        Ok(products.into_iter().filter(|p| matches(p, &needle)).collect())
    }
}
