pub mod company;
pub mod product;
pub mod supplier;

pub use company::{Company, recommended_companies};
pub use product::{Product, ProductRef};
pub use supplier::{Supplier, SupplierWithProduct};

use serde::de::{self, Deserializer, Visitor};

/// Deserialize an opaque id that the hosted database may encode as
/// either a JSON string or a number. The application never interprets
/// ids; it only passes them back.
pub(crate) fn id_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct IdVisitor;

    impl Visitor<'_> for IdVisitor {
        type Value = String;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("a string or integer id")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(IdVisitor)
}
