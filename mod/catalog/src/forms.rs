//! Per-entity form validation.
//!
//! Validation runs entirely before submission: a failed form never
//! reaches the database client. Failures populate a field-keyed message
//! map so the caller can render errors inline next to each field.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use url::Url;

/// Sentinel category value meaning "free-form entry follows".
pub const OTHER_CATEGORY: &str = "Other";

/// Field-keyed validation messages. Empty means the form passed.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct FormErrors(pub BTreeMap<String, String>);

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn insert(&mut self, field: &str, message: &str) {
        self.0.insert(field.to_string(), message.to_string());
    }
}

impl std::fmt::Display for FormErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

fn check_absolute_url(errors: &mut FormErrors, field: &str, value: &str) {
    if Url::parse(value).is_err() {
        errors.insert(field, "Please enter a valid URL");
    }
}

// ── Product form ────────────────────────────────────────────────────

/// Raw product form input, as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Selected category, possibly the [`OTHER_CATEGORY`] sentinel.
    #[serde(default)]
    pub category: String,
    /// Free-text category name; only consulted when the sentinel is
    /// selected.
    #[serde(default)]
    pub custom_category: String,
    #[serde(default)]
    pub coupon_code: String,
    #[serde(default)]
    pub buy_link: String,
}

/// A product form that passed validation. The `"Other"` sentinel is
/// already resolved: `category` holds the actual value to store.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidProduct {
    pub product_name: String,
    pub description: String,
    pub category: String,
    pub coupon_code: Option<String>,
    pub buy_link: Option<String>,
}

impl ProductForm {
    pub fn validate(&self) -> Result<ValidProduct, FormErrors> {
        let mut errors = FormErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.insert("name", "Product name is required");
        }

        let description = self.description.trim();
        if description.is_empty() {
            errors.insert("description", "Description is required");
        }

        let category = self.category.trim();
        let resolved_category = if category.is_empty() {
            errors.insert("category", "Please select a category");
            String::new()
        } else if category == OTHER_CATEGORY {
            let custom = self.custom_category.trim();
            if custom.is_empty() {
                errors.insert("custom_category", "Category name cannot be empty");
            }
            custom.to_string()
        } else {
            category.to_string()
        };

        let buy_link = self.buy_link.trim();
        if !buy_link.is_empty() {
            check_absolute_url(&mut errors, "buy_link", buy_link);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let coupon_code = self.coupon_code.trim();
        Ok(ValidProduct {
            product_name: name.to_string(),
            description: description.to_string(),
            category: resolved_category,
            coupon_code: (!coupon_code.is_empty()).then(|| coupon_code.to_string()),
            buy_link: (!buy_link.is_empty()).then(|| buy_link.to_string()),
        })
    }
}

// ── Supplier form ───────────────────────────────────────────────────

/// Raw supplier form input, as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SupplierForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub store_link: String,
    #[serde(default)]
    pub country: String,
    /// Chosen from the product picker's single-select.
    #[serde(default)]
    pub product_id: String,
}

/// A supplier form that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidSupplier {
    pub name: String,
    pub store_link: String,
    pub country: String,
    pub product_id: String,
}

impl SupplierForm {
    pub fn validate(&self) -> Result<ValidSupplier, FormErrors> {
        let mut errors = FormErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.insert("name", "Supplier name is required");
        }

        let store_link = self.store_link.trim();
        if store_link.is_empty() {
            errors.insert("store_link", "Store link is required");
        } else {
            check_absolute_url(&mut errors, "store_link", store_link);
        }

        let country = self.country.trim();
        if country.is_empty() {
            errors.insert("country", "Country is required");
        }

        let product_id = self.product_id.trim();
        if product_id.is_empty() {
            errors.insert("product_id", "Please select a product");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ValidSupplier {
            name: name.to_string(),
            store_link: store_link.to_string(),
            country: country.to_string(),
            product_id: product_id.to_string(),
        })
    }
}
