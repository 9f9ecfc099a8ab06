//! Document Reader: pluggable, trait-based text extraction for uploaded files.
//!
//! Default: `PdfTextReader` (`pdf-extract`, runs on the blocking pool).
//! `AppState` holds an `Arc<dyn DocumentReader>` so handlers never name a backend.

use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

/// Turns raw uploaded bytes into plain text.
#[async_trait]
pub trait DocumentReader: Send + Sync {
    async fn extract_text(&self, data: Bytes) -> Result<String, AppError>;
}

/// PDF backend built on `pdf-extract`.
pub struct PdfTextReader;

#[async_trait]
impl DocumentReader for PdfTextReader {
    async fn extract_text(&self, data: Bytes) -> Result<String, AppError> {
        let size = data.len();
        // Parsing walks every page object; keep it off the async executor.
        let text = tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem(&data).map_err(|e| e.to_string())
        })
        .await
        .map_err(|e| {
            AppError::Internal(anyhow::anyhow!("spawn_blocking failed in PDF extraction: {e}"))
        })?
        .map_err(|e| AppError::UnprocessableEntity(format!("Failed to process PDF: {e}")))?;

        debug!("Extracted {} chars from {size}-byte PDF", text.len());
        Ok(text)
    }
}
