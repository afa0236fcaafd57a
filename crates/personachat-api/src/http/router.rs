//! Axum router configuration with middleware.
//!
//! All routes are under `/api/`. Middleware: CORS, tracing.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Auth
        .route("/auth/google", post(handlers::auth::google_login))
        // User
        .route("/users/profile", get(handlers::user::get_profile))
        // Chat
        .route("/chat/personas", get(handlers::chat::list_personas))
        .route("/chat/{persona}/start", post(handlers::chat::start_session))
        .route(
            "/chat/{session_id}/message",
            post(handlers::chat::send_message),
        )
        .route("/chat/{session_id}", get(handlers::chat::get_history))
        .route(
            "/chat/{session_id}/first-message",
            post(handlers::chat::send_first_message),
        );

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint (no auth required).
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
