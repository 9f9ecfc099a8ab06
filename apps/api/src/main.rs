mod config;
mod documents;
mod errors;
mod flashcards;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::documents::PdfTextReader;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_PKG_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Flashcards API v{}", env!("CARGO_PKG_VERSION"));

    let generator = Arc::new(config.flashcard_generator());
    info!(
        "Flashcard generator ready (default limit {}, max limit {}, {} denylisted subjects{})",
        generator.default_limit(),
        config.max_flashcard_limit,
        generator.extractor().denylist().len(),
        if config.denylist.is_some() {
            ", overridden"
        } else {
            ""
        }
    );

    let state = AppState {
        config: config.clone(),
        generator,
        document_reader: Arc::new(PdfTextReader),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
