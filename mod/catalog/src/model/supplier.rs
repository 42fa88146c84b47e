use serde::{Deserialize, Serialize};

use super::id_from_any;

/// Joined product name shown for suppliers whose parent product was
/// deleted out from under them.
pub const ORPHAN_PRODUCT_LABEL: &str = "N/A";

/// Supplier — a vendor offering one specific product, with a storefront
/// link and country indicator. Matches the `suppliers` table.
///
/// The canonical country field is `country`; older rows written with
/// `country_flag` still deserialize (see DESIGN.md).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Supplier {
    /// Opaque server-assigned identifier.
    #[serde(deserialize_with = "id_from_any")]
    pub id: String,

    pub name: String,

    /// Storefront URL, validated as absolute on the write path.
    pub store_link: String,

    /// Country indicator (flag glyph or country code).
    #[serde(alias = "country_flag")]
    pub country: String,

    /// Foreign key to exactly one product. No on-delete policy exists;
    /// rows may reference a product that no longer exists.
    #[serde(deserialize_with = "id_from_any")]
    pub product_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Supplier joined with its parent product's name for the admin list
/// view. The join happens client-side; orphans get
/// [`ORPHAN_PRODUCT_LABEL`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SupplierWithProduct {
    #[serde(flatten)]
    pub supplier: Supplier,
    pub product_name: String,
}
