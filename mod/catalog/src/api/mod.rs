//! HTTP surface of the catalog module.
//!
//! Public storefront routes and admin routes are built as two separate
//! routers; the binary mounts the admin router behind the access gate.
//! Both are nested under `/catalog/v1`.

mod admin;
mod companies;
mod products;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde_json::json;
use tracing::error;

use shophunt_core::{ServiceError, error::error_code};

use crate::forms::FormErrors;
use crate::service::CatalogService;

pub type AppState = Arc<CatalogService>;

/// HTTP-shaped error envelope:
///
/// ```json
/// {"error": {"code": "VALIDATION_FAILED", "message": "...", "fields": {"name": "..."}}}
/// ```
///
/// `fields` is present only for form validation failures.
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
    fields: Option<BTreeMap<String, String>>,
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        if err.status_code().is_server_error() {
            error!(code = err.error_code(), error = %err, "request failed");
        }
        ApiError {
            status: err.status_code(),
            code: err.error_code(),
            message: err.to_string(),
            fields: None,
        }
    }
}

impl From<FormErrors> for ApiError {
    fn from(errors: FormErrors) -> Self {
        ApiError {
            status: StatusCode::BAD_REQUEST,
            code: error_code::VALIDATION_FAILED,
            message: errors.to_string(),
            fields: Some(errors.0),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut error = json!({
            "code": self.code,
            "message": self.message,
        });
        if let Some(fields) = self.fields {
            error["fields"] = json!(fields);
        }
        (self.status, Json(json!({ "error": error }))).into_response()
    }
}

/// Public storefront routes.
pub fn router(state: AppState) -> Router {
    Router::new().nest(
        "/catalog/v1",
        Router::new()
            .route("/products", get(products::list))
            .route("/products/search", get(products::search))
            .route("/products/{id}/suppliers", get(products::suppliers))
            .route("/categories", get(products::categories))
            .route("/companies", get(companies::list))
            .with_state(state),
    )
}

/// Admin routes. Mounted behind the cookie gate by the binary.
pub fn admin_router(state: AppState) -> Router {
    Router::new().nest(
        "/catalog/v1",
        Router::new()
            .route(
                "/products",
                get(admin::list_products).post(admin::create_product),
            )
            .route(
                "/products/{id}",
                axum::routing::put(admin::update_product).delete(admin::delete_product),
            )
            .route("/products/picker", get(admin::product_picker))
            .route(
                "/suppliers",
                get(admin::list_suppliers).post(admin::create_supplier),
            )
            .with_state(state),
    )
}
