use std::sync::Arc;

use crate::config::Config;
use crate::documents::DocumentReader;
use crate::flashcards::generator::FlashcardGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Generator with the configured denylist and default batch size.
    pub generator: Arc<FlashcardGenerator>,
    /// Pluggable upload reader. Default: PdfTextReader.
    pub document_reader: Arc<dyn DocumentReader>,
}
