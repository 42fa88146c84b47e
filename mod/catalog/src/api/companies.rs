use axum::Json;

use crate::model::{Company, recommended_companies};

/// Curated recommended-companies list. Static content, no state.
pub(super) async fn list() -> Json<Vec<Company>> {
    Json(recommended_companies())
}
