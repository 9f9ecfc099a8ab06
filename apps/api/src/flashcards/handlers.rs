//! Axum route handlers for the Flashcard API.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::flashcards::generator::FlashcardGenerator;
use crate::flashcards::models::{Flashcard, FlashcardBatch};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Body of `/generate` and `/load-more`. Every field is optional.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub start: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadPdfResponse {
    pub success: bool,
    pub flashcards: Vec<Flashcard>,
    pub next_index: usize,
    /// Extracted text, echoed so the client can page through it with `/load-more`.
    pub full_text: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct AskDoubtRequest {
    #[serde(default)]
    pub question: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AskDoubtResponse {
    pub answer: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /generate
///
/// Returns one page of flashcards from `start` plus the cursor for the next page.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<FlashcardBatch>, AppError> {
    let (start, limit) = resolve_paging(&state, request.start, request.limit)?;
    let text = request.text.unwrap_or_default();

    let batch = run_generator(&state.generator, text, start, limit).await?;
    info!(
        "Generated {} flashcards from start={start} (next={})",
        batch.flashcards.len(),
        batch.next_index
    );
    Ok(Json(batch))
}

/// POST /load-more
///
/// Continues a previous batch. Same contract as `/generate`; clients send back
/// the full text with the `nextIndex` they were given.
pub async fn handle_load_more(
    state: State<AppState>,
    request: Json<GenerateRequest>,
) -> Result<Json<FlashcardBatch>, AppError> {
    handle_generate(state, request).await
}

/// POST /upload-pdf
///
/// Reads the multipart `pdf` field, extracts its text and returns the first batch.
pub async fn handle_upload_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadPdfResponse>, AppError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() == Some("pdf") {
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read 'pdf' field: {e}")))?;
            upload = Some(data);
            break;
        }
    }
    let data = upload
        .ok_or_else(|| AppError::Validation("multipart field 'pdf' is required".to_string()))?;
    info!("Received PDF upload ({} bytes)", data.len());

    let full_text = state.document_reader.extract_text(data).await?;
    let batch = run_generator(
        &state.generator,
        full_text.clone(),
        0,
        state.generator.default_limit(),
    )
    .await?;
    info!(
        "Generated {} flashcards from upload (next={})",
        batch.flashcards.len(),
        batch.next_index
    );

    Ok(Json(UploadPdfResponse {
        success: true,
        flashcards: batch.flashcards,
        next_index: batch.next_index,
        full_text,
    }))
}

/// POST /ask-doubt
///
/// Placeholder until a real answering backend exists; echoes the question.
pub async fn handle_ask_doubt(Json(request): Json<AskDoubtRequest>) -> Json<AskDoubtResponse> {
    let question = request.question.unwrap_or_default();
    Json(AskDoubtResponse {
        answer: format!("This is a sample AI answer to your doubt: {question}"),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

/// Applies defaults and bounds to the caller's cursor and page size.
fn resolve_paging(
    state: &AppState,
    start: Option<i64>,
    limit: Option<i64>,
) -> Result<(usize, usize), AppError> {
    let start = match start {
        None => 0,
        Some(s) => usize::try_from(s).map_err(|_| {
            AppError::Validation(format!("start must be a non-negative integer, got {s}"))
        })?,
    };

    let max = state.config.max_flashcard_limit;
    let limit = match limit {
        None => state.generator.default_limit(),
        Some(l) if l >= 1 && l as u64 <= max as u64 => l as usize,
        Some(l) => {
            return Err(AppError::Validation(format!(
                "limit must be between 1 and {max}, got {l}"
            )))
        }
    };

    Ok((start, limit))
}

/// Runs the CPU-bound generator on the blocking pool.
async fn run_generator(
    generator: &Arc<FlashcardGenerator>,
    text: String,
    start: usize,
    limit: usize,
) -> Result<FlashcardBatch, AppError> {
    let generator = Arc::clone(generator);
    tokio::task::spawn_blocking(move || generator.generate(&text, start, limit))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in generation: {e}")))
}
