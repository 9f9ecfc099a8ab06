//! Subject Extractor: finds the noun phrase in front of the first `is`/`are`.
//!
//! This is pattern matching, not parsing. The copula match is lazy and
//! anchored, so it binds to the first ` is `/` are ` that has at least one
//! character before it.

use once_cell::sync::Lazy;
use regex::Regex;

static COPULA: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(.*?)\s+(is|are)\s+").unwrap());
static LEADING_ARTICLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(a|an|the)\s+").unwrap());

/// Subjects shorter than this (in characters) are rejected.
pub const MIN_SUBJECT_CHARS: usize = 6;

/// Recurring false-positive subjects. Matched as substrings of the
/// lower-cased subject, so `applications` also rejects `web applications`.
pub const DEFAULT_DENYLIST: &[&str] = &[
    "it",
    "this",
    "there",
    "these",
    "those",
    "they",
    "which",
    "debasis",
    "samanta",
    "iit",
    "kharagpur",
    "applications",
];

#[derive(Debug, Clone)]
pub struct SubjectExtractor {
    denylist: Vec<String>,
}

impl Default for SubjectExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_DENYLIST.iter().map(|s| s.to_string()).collect())
    }
}

impl SubjectExtractor {
    /// Terms are lower-cased here; the comparison side is lower-cased per call.
    pub fn new(denylist: Vec<String>) -> Self {
        Self {
            denylist: denylist.into_iter().map(|t| t.to_lowercase()).collect(),
        }
    }

    pub fn denylist(&self) -> &[String] {
        &self.denylist
    }

    /// Returns the cleaned subject of `sentence`, or `None` when there is no
    /// copula, the subject is too short, or it contains a denylisted term.
    pub fn extract(&self, sentence: &str) -> Option<String> {
        let captures = COPULA.captures(sentence)?;
        let candidate = captures.get(1)?.as_str().trim();
        let subject = LEADING_ARTICLE.replace(candidate, "");

        if subject.chars().count() < MIN_SUBJECT_CHARS {
            return None;
        }

        let lowered = subject.to_lowercase();
        if self.denylist.iter().any(|bad| lowered.contains(bad.as_str())) {
            return None;
        }

        Some(subject.into_owned())
    }
}
