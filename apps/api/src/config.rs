use anyhow::{Context, Result};

use crate::flashcards::generator::{FlashcardGenerator, DEFAULT_LIMIT};
use crate::flashcards::subject::SubjectExtractor;

const DEFAULT_MAX_LIMIT: usize = 50;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Cards per call when the request omits `limit`.
    pub flashcard_limit: usize,
    /// Largest `limit` a request may ask for.
    pub max_flashcard_limit: usize,
    pub max_upload_bytes: usize,
    /// Replaces the built-in subject denylist when set.
    pub denylist: Option<Vec<String>>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let config = Config {
            port: parse_env("PORT", 8000)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            flashcard_limit: parse_env("FLASHCARD_LIMIT", DEFAULT_LIMIT)?,
            max_flashcard_limit: parse_env("MAX_FLASHCARD_LIMIT", DEFAULT_MAX_LIMIT)?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            denylist: std::env::var("FLASHCARD_DENYLIST")
                .ok()
                .map(|raw| parse_denylist(&raw)),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        anyhow::ensure!(self.flashcard_limit >= 1, "FLASHCARD_LIMIT must be at least 1");
        anyhow::ensure!(
            self.flashcard_limit <= self.max_flashcard_limit,
            "FLASHCARD_LIMIT ({}) must not exceed MAX_FLASHCARD_LIMIT ({})",
            self.flashcard_limit,
            self.max_flashcard_limit
        );
        Ok(())
    }

    /// Builds the generator this configuration describes.
    pub fn flashcard_generator(&self) -> FlashcardGenerator {
        let extractor = match &self.denylist {
            Some(terms) => SubjectExtractor::new(terms.clone()),
            None => SubjectExtractor::default(),
        };
        FlashcardGenerator::new(extractor, self.flashcard_limit)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8000,
            rust_log: "info".to_string(),
            flashcard_limit: DEFAULT_LIMIT,
            max_flashcard_limit: DEFAULT_MAX_LIMIT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            denylist: None,
        }
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

/// Comma-separated terms; blanks are dropped, case is normalized.
fn parse_denylist(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_denylist_trims_and_lowercases() {
        assert_eq!(
            parse_denylist(" Foo, bar ,,BAZ qux "),
            vec!["foo", "bar", "baz qux"]
        );
        assert!(parse_denylist("").is_empty());
    }

    #[test]
    fn test_default_config_builds_default_generator() {
        let generator = Config::default().flashcard_generator();
        assert_eq!(generator.default_limit(), DEFAULT_LIMIT);
        assert_eq!(generator.extractor().denylist().len(), 12);
    }

    #[test]
    fn test_denylist_override_reaches_extractor() {
        let config = Config {
            denylist: Some(vec!["widget".to_string()]),
            flashcard_limit: 2,
            ..Config::default()
        };
        let generator = config.flashcard_generator();
        assert_eq!(generator.default_limit(), 2);
        assert_eq!(generator.extractor().denylist(), ["widget".to_string()]);
    }

    #[test]
    fn test_validate_rejects_zero_and_oversized_limits() {
        let zero = Config {
            flashcard_limit: 0,
            ..Config::default()
        };
        assert!(zero.validate().is_err());

        let oversized = Config {
            flashcard_limit: 60,
            ..Config::default()
        };
        assert!(oversized.validate().is_err());
        assert!(Config::default().validate().is_ok());
    }
}
