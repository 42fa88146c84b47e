//! Admin handlers. Writes go through form validation first and then
//! the elevated client; validation failures carry a field-keyed map so
//! the dashboard can render errors inline.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::forms::{ProductForm, SupplierForm};
use crate::model::{Product, ProductRef, Supplier, SupplierWithProduct};

use super::{ApiError, AppState};

pub(super) async fn list_products(
    State(service): State<AppState>,
) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(service.list_products().await?))
}

pub(super) async fn create_product(
    State(service): State<AppState>,
    Json(form): Json<ProductForm>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let fields = form.validate()?;
    let created = service.insert_product(fields).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub(super) async fn update_product(
    State(service): State<AppState>,
    Path(id): Path<String>,
    Json(form): Json<ProductForm>,
) -> Result<Json<Product>, ApiError> {
    let fields = form.validate()?;
    Ok(Json(service.update_product(&id, fields).await?))
}

pub(super) async fn delete_product(
    State(service): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    service.delete_product(&id).await?;
    Ok(Json(json!({ "ok": true })))
}

#[derive(Deserialize)]
pub(super) struct PickerQuery {
    #[serde(default)]
    q: String,
}

pub(super) async fn product_picker(
    State(service): State<AppState>,
    Query(query): Query<PickerQuery>,
) -> Result<Json<Vec<ProductRef>>, ApiError> {
    Ok(Json(service.product_picker(&query.q).await?))
}

pub(super) async fn list_suppliers(
    State(service): State<AppState>,
) -> Result<Json<Vec<SupplierWithProduct>>, ApiError> {
    Ok(Json(service.list_suppliers().await?))
}

pub(super) async fn create_supplier(
    State(service): State<AppState>,
    Json(form): Json<SupplierForm>,
) -> Result<(StatusCode, Json<Supplier>), ApiError> {
    let fields = form.validate()?;
    let created = service.insert_supplier(fields).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
