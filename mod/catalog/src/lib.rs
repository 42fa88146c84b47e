//! Product catalog module: storefront reads, admin CRUD, supplier
//! directory, and the recommended-companies list.

pub mod api;
pub mod forms;
pub mod model;
pub mod service;
pub mod workflow;

use std::sync::Arc;

use axum::Router;

use shophunt_core::Module;

pub use service::CatalogService;

pub struct CatalogModule {
    service: Arc<CatalogService>,
}

impl CatalogModule {
    pub fn new(service: Arc<CatalogService>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> Arc<CatalogService> {
        self.service.clone()
    }
}

impl Module for CatalogModule {
    fn name(&self) -> &str {
        "catalog"
    }

    fn routes(&self) -> Router {
        api::router(self.service.clone())
    }

    fn admin_routes(&self) -> Router {
        api::admin_router(self.service.clone())
    }
}
