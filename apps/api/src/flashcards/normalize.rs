//! Text normalization applied before sentence splitting.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+").unwrap());
static DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{2}\.\d{2}\.\d{4}").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Strips email addresses and `DD.MM.YYYY` dates, then collapses every
/// whitespace run into a single space and trims the ends.
///
/// The date match is purely shape-based: `99.99.9999` goes, `1.1.2020` stays.
pub fn normalize(text: &str) -> String {
    let text = EMAIL.replace_all(text, "");
    let text = DATE.replace_all(&text, "");
    let text = WHITESPACE.replace_all(&text, " ");
    text.trim().to_string()
}
