// backend/services/roster/api-server/src/lib.rs

pub mod error;
pub mod handlers;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let state = Arc::new(state);

    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/members",
            post(handlers::create_member).get(handlers::list_members),
        )
        .route("/members/{id}", get(handlers::get_member))
        .route(
            "/members/{id}/birthday-message",
            post(handlers::generate_birthday_message),
        )
        .route("/members/{id}/send-email", post(handlers::send_birthday_email))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
