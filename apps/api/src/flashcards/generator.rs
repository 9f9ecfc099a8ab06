//! Flashcard Generator: scans sentences from a caller-owned cursor and turns
//! the ones with a usable subject into question/answer cards.
//!
//! The generator holds no state between calls. Callers resume by passing the
//! returned `next_index` back in as `start`; a `next_index` equal to the
//! sentence count means the text is exhausted.

use crate::flashcards::models::{Flashcard, FlashcardBatch};
use crate::flashcards::normalize::normalize;
use crate::flashcards::splitter::split_sentences;
use crate::flashcards::subject::SubjectExtractor;

/// Sentences shorter than this (in characters, after trimming) are skipped.
pub const MIN_SENTENCE_CHARS: usize = 80;

/// Cards per call when the caller does not ask for a specific count.
pub const DEFAULT_LIMIT: usize = 5;

#[derive(Debug, Clone)]
pub struct FlashcardGenerator {
    extractor: SubjectExtractor,
    default_limit: usize,
}

impl Default for FlashcardGenerator {
    fn default() -> Self {
        Self::new(SubjectExtractor::default(), DEFAULT_LIMIT)
    }
}

impl FlashcardGenerator {
    pub fn new(extractor: SubjectExtractor, default_limit: usize) -> Self {
        Self {
            extractor,
            default_limit,
        }
    }

    pub fn default_limit(&self) -> usize {
        self.default_limit
    }

    pub fn extractor(&self) -> &SubjectExtractor {
        &self.extractor
    }

    /// Generates up to `limit` cards starting at sentence index `start`.
    ///
    /// Stopping on the limit returns the index after the sentence just
    /// consumed. Running out of sentences returns the sentence count, which
    /// is also what a `start` past the end gets back.
    pub fn generate(&self, text: &str, start: usize, limit: usize) -> FlashcardBatch {
        let normalized = normalize(text);
        let sentences = split_sentences(&normalized);
        let mut flashcards = Vec::new();

        for (index, raw) in sentences.iter().enumerate().skip(start) {
            let sentence = raw.trim();
            if sentence.chars().count() < MIN_SENTENCE_CHARS {
                continue;
            }

            let Some(subject) = self.extractor.extract(sentence) else {
                continue;
            };

            let mut answer = sentence.to_string();
            if !answer.ends_with('.') {
                answer.push('.');
            }

            flashcards.push(Flashcard {
                question: format!("What is {subject}?"),
                answer,
            });

            if flashcards.len() == limit {
                return FlashcardBatch {
                    flashcards,
                    next_index: index + 1,
                };
            }
        }

        FlashcardBatch {
            flashcards,
            next_index: sentences.len(),
        }
    }
}
