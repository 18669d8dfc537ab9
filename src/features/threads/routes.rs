use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::features::threads::handlers;
use crate::features::threads::services::ThreadService;

/// Read-only thread routes (no authentication required)
pub fn public_routes(service: Arc<ThreadService>) -> Router {
    Router::new()
        .route("/api/threads", get(handlers::list_threads))
        .route("/api/threads/{id}", get(handlers::get_thread))
        .with_state(service)
}

/// Mutating thread routes, mounted behind the auth middleware
pub fn protected_routes(service: Arc<ThreadService>) -> Router {
    Router::new()
        .route("/api/threads", post(handlers::create_thread))
        .route(
            "/api/threads/{id}",
            patch(handlers::update_thread)
                .put(handlers::update_thread)
                .delete(handlers::delete_thread),
        )
        .with_state(service)
}
