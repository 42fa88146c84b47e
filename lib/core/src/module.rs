use axum::Router;

/// A service module that contributes HTTP routes.
///
/// Each business module implements this trait to register its API
/// endpoints. The binary entry point collects all modules and merges
/// their routes into a single Router.
pub trait Module: Send + Sync {
    /// Module name, used for logging.
    fn name(&self) -> &str;

    /// Public routes, mounted at the application root.
    fn routes(&self) -> Router;

    /// Admin routes, mounted under `/admin` so the access gate covers
    /// them. Defaults to no admin surface.
    fn admin_routes(&self) -> Router {
        Router::new()
    }
}
