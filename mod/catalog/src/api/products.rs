//! Public storefront handlers. Read-only, standard authorization.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use crate::model::{Product, Supplier};

use super::{ApiError, AppState};

pub(super) async fn list(State(service): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(service.list_products().await?))
}

#[derive(Deserialize)]
pub(super) struct SearchQuery {
    #[serde(default)]
    q: String,
}

pub(super) async fn search(
    State(service): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(service.search_products(&query.q).await?))
}

pub(super) async fn suppliers(
    State(service): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Supplier>>, ApiError> {
    Ok(Json(service.list_suppliers_for_product(&id).await?))
}

pub(super) async fn categories(State(service): State<AppState>) -> Json<Vec<String>> {
    Json(service.list_categories())
}
