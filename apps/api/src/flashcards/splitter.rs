use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.\s+").unwrap());

/// Splits text on a period followed by whitespace.
///
/// The trailing piece is always kept, so empty input yields `[""]`.
/// Periods without following whitespace (`3.5`, `U.S.`) are not boundaries.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_BOUNDARY.split(text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flashcards::normalize::normalize;

    #[test]
    fn test_splits_on_period_space() {
        assert_eq!(
            split_sentences("One here. Two there. Three."),
            vec!["One here", "Two there", "Three."]
        );
    }

    #[test]
    fn test_keeps_inline_periods() {
        assert_eq!(
            split_sentences("Pi is 3.14 in the U.S. today. Next"),
            vec!["Pi is 3.14 in the U.S", "today", "Next"]
        );
    }

    #[test]
    fn test_period_without_space_is_not_boundary() {
        assert_eq!(split_sentences("a.b.c"), vec!["a.b.c"]);
    }

    #[test]
    fn test_empty_input_yields_single_empty_sentence() {
        assert_eq!(split_sentences(""), vec![""]);
    }

    #[test]
    fn test_trailing_delimiter_leaves_empty_tail() {
        assert_eq!(split_sentences("Only one. "), vec!["Only one", ""]);
    }

    #[test]
    fn test_rejoin_reconstructs_normalized_text() {
        let raw = "First   sentence.\nSecond one.\t\tThird   without end";
        let normalized = normalize(raw);
        assert_eq!(split_sentences(&normalized).join(". "), normalized);
    }
}
