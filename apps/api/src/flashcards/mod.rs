// Flashcard extraction: normalize → split → find subject → page through sentences.
// Everything below handlers.rs is synchronous and pure; handlers move the work
// onto the blocking pool.

pub mod generator;
pub mod handlers;
pub mod models;
pub mod normalize;
pub mod splitter;
pub mod subject;
