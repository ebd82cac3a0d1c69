/// Application routes configuration
use crate::handlers::{
    about, dashboard, focused_object, health, not_found, object_detail, refresh_catalog, AppState,
};
use axum::{routing::get, Router};

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Dashboard
        .route("/", get(dashboard))
        .route("/bodies", get(dashboard))
        .route("/bodies/refresh", get(refresh_catalog))
        // Detail view
        .route("/object", get(focused_object))
        .route("/object/:name", get(object_detail))
        .route("/about", get(about))
        .fallback(not_found)
        .with_state(state)
}
