pub mod health;

use axum::{routing::get, routing::post, Router};

use crate::export::handlers as export_handlers;
use crate::interaction::handlers as interaction_handlers;
use crate::layout::handlers as layout_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Layout API
        .route("/api/v1/layout/plan", post(layout_handlers::handle_plan))
        .route(
            "/api/v1/layout/pages",
            post(layout_handlers::handle_page_count),
        )
        // Decoration API
        .route(
            "/api/v1/decorations/:id/nudge",
            post(interaction_handlers::handle_nudge),
        )
        .route(
            "/api/v1/decorations/:id/gesture",
            post(interaction_handlers::handle_gesture),
        )
        // Export API
        .route("/api/v1/export", post(export_handlers::handle_export))
        .with_state(state)
}
