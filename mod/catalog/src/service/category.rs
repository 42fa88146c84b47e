//! The known-category set.
//!
//! Categories are an open set: a seeded default list, plus anything an
//! admin stores through the form's "Other" entry, plus anything
//! observed on product list refreshes (so free-form entries survive a
//! restart without a dedicated table).

use std::collections::BTreeSet;

use super::CatalogService;
use crate::model::Product;

/// Seed categories offered before any product exists.
pub const DEFAULT_CATEGORIES: &[&str] = &["SARMs", "Peptides", "Supplements", "Accessories"];

pub(crate) fn seed_categories() -> BTreeSet<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

impl CatalogService {
    /// The known-category set, sorted. The UI appends the "Other"
    /// sentinel itself.
    pub fn list_categories(&self) -> Vec<String> {
        self.categories.read().unwrap().iter().cloned().collect()
    }

    pub(crate) fn remember_category(&self, category: &str) {
        let trimmed = category.trim();
        if trimmed.is_empty() {
            return;
        }
        let mut set = self.categories.write().unwrap();
        if !set.contains(trimmed) {
            set.insert(trimmed.to_string());
        }
    }

    pub(crate) fn absorb_categories(&self, products: &[Product]) {
        let mut set = self.categories.write().unwrap();
        for product in products {
            if let Some(category) = product.category.as_deref() {
                let trimmed = category.trim();
                if !trimmed.is_empty() && !set.contains(trimmed) {
                    set.insert(trimmed.to_string());
                }
            }
        }
    }
}
