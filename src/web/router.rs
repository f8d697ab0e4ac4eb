use axum::{routing::{get, post}, Router};
use tower_http::services::ServeDir;

use super::handlers::{generate_qr, health};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Everything that is not an API route is served from the public
    // directory: the index page and the generated qr_*.png artifacts.
    let public = ServeDir::new(state.store.dir());
    Router::new()
        .route("/health", get(health))
        .route("/generate-qr", post(generate_qr))
        .fallback_service(public)
        .with_state(state)
}
