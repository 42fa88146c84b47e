//! Route registration — module routes + admin pages + system endpoints.

use axum::Router;
use axum::http::Method;
use axum::middleware;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};

use shophunt_core::Module;

use crate::access_gate;

/// Build the complete router.
///
/// Public module routes are mounted at the root with a GET-only CORS
/// layer (the storefront is a separate origin). Admin pages and each
/// module's admin routes live under `/admin`, behind the cookie gate.
pub fn build_router(modules: &[&dyn Module]) -> Router {
    let cors = CorsLayer::new().allow_methods([Method::GET]).allow_origin(Any);

    let mut public: Router = Router::new()
        .route("/health", get(health))
        .route("/version", get(version));
    for module in modules {
        public = public.merge(module.routes());
    }

    let mut admin: Router = Router::new()
        .route("/", get(dashboard_page))
        .route("/login", get(login_page));
    for module in modules {
        admin = admin.merge(module.admin_routes());
    }

    public
        .layer(cors)
        .nest("/admin", admin)
        .layer(middleware::from_fn(access_gate::access_gate))
}

async fn dashboard_page() -> impl IntoResponse {
    Html(include_str!("web/dashboard.html"))
}

async fn login_page() -> impl IntoResponse {
    Html(include_str!("web/login.html"))
}

async fn health() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "status": "ok",
    }))
}

async fn version() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": "shophuntd",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
