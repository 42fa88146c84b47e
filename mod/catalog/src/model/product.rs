use serde::{Deserialize, Serialize};

use super::id_from_any;

/// Fallback category label shown when a product has none stored.
pub const DEFAULT_CATEGORY_LABEL: &str = "SARMs";

/// Product — a catalog item with descriptive metadata and an optional
/// promotional coupon/buy link. Matches the `products` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Opaque server-assigned identifier.
    #[serde(deserialize_with = "id_from_any")]
    pub id: String,

    pub product_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Category from the open known-category set. Absent rows render as
    /// [`DEFAULT_CATEGORY_LABEL`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,

    /// External storefront link. Validated as an absolute URL on the
    /// write path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buy_link: Option<String>,

    /// Display-only; not part of the editable field set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Product {
    /// Category label for display, falling back to the default when the
    /// stored value is absent or empty.
    pub fn display_category(&self) -> &str {
        match self.category.as_deref() {
            Some(c) if !c.trim().is_empty() => c,
            _ => DEFAULT_CATEGORY_LABEL,
        }
    }
}

/// Id + name pair for the supplier form's product picker.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductRef {
    pub id: String,
    pub product_name: String,
}

impl From<&Product> for ProductRef {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id.clone(),
            product_name: p.product_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_json_roundtrip() {
        let p = Product {
            id: "17".into(),
            product_name: "MK-677 Ibutamoren".into(),
            description: Some("Growth hormone secretagogue".into()),
            category: Some("SARMs".into()),
            coupon_code: Some("SM10".into()),
            buy_link: Some("https://science.bio/mk-677-ibutamoren/".into()),
            price: Some(49.99),
            created_at: None,
        };
        let json = serde_json::to_string(&p).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }

    #[test]
    fn display_category_falls_back() {
        let mut p = Product {
            id: "1".into(),
            product_name: "YK11".into(),
            description: None,
            category: None,
            coupon_code: None,
            buy_link: None,
            price: None,
            created_at: None,
        };
        assert_eq!(p.display_category(), "SARMs");

        p.category = Some("  ".into());
        assert_eq!(p.display_category(), "SARMs");

        p.category = Some("Nootropics".into());
        assert_eq!(p.display_category(), "Nootropics");
    }
}
