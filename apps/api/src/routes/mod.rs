pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::flashcards::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/generate", post(handlers::handle_generate))
        .route("/load-more", post(handlers::handle_load_more))
        .route("/upload-pdf", post(handlers::handle_upload_pdf))
        .route("/ask-doubt", post(handlers::handle_ask_doubt))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
