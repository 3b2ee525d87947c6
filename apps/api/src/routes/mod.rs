pub mod health;
pub mod pages;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::auth::handlers::{handle_login, handle_register};
use crate::roadmap::handlers::handle_generate_roadmap;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Unmatched paths serve the React build; unknown routes fall back to its
    // root document so client-side routing keeps working.
    let spa = ServeDir::new(&state.config.static_dir)
        .not_found_service(ServeFile::new(state.config.static_dir.join("index.html")));

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/register", post(handle_register))
        .route("/api/login", post(handle_login))
        .route("/generate-roadmap", post(handle_generate_roadmap))
        .route("/roadmap", get(pages::roadmap_page))
        .fallback_service(spa)
        .with_state(state)
}
