//! Tokenization and frequency counting
//!
//! Tokens are maximal runs of ASCII letters and digits; everything else is a
//! separator. The whole input is lowercased before splitting, so downstream
//! stages only ever see normalized terms.

use super::stopwords::StopwordFilter;
use crate::types::TermCounts;

/// Split text into normalized tokens.
///
/// Lowercases the input, then splits on any run of characters that are not
/// ASCII letters or digits. Empty tokens are discarded.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build a frequency map from raw text.
///
/// Tokens present in `stopwords` are skipped; all others are counted, with
/// the token index of the first occurrence recorded for tie-breaking.
/// Empty input yields an empty map.
pub fn count_terms(text: &str, stopwords: &StopwordFilter) -> TermCounts {
    let tokens = tokenize(text);
    let mut counts = TermCounts::with_capacity(tokens.len() / 2);

    for (position, token) in tokens.iter().enumerate() {
        if stopwords.is_stopword(token) {
            continue;
        }
        counts.record(token, position);
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_splits_on_punctuation() {
        let tokens = tokenize("cat, sat; on-the mat!");
        assert_eq!(tokens, vec!["cat", "sat", "on", "the", "mat"]);
    }

    #[test]
    fn test_tokenize_lowercases() {
        let tokens = tokenize("Rust RUST rust");
        assert_eq!(tokens, vec!["rust", "rust", "rust"]);
    }

    #[test]
    fn test_tokenize_keeps_digits() {
        let tokens = tokenize("utf8 v2 base64");
        assert_eq!(tokens, vec!["utf8", "v2", "base64"]);
    }

    #[test]
    fn test_tokenize_non_ascii_separates() {
        // Non-ASCII characters are separators, not token content.
        let tokens = tokenize("café naïve");
        assert_eq!(tokens, vec!["caf", "na", "ve"]);
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \t\n  ").is_empty());
        assert!(tokenize("!?.,;").is_empty());
    }

    #[test]
    fn test_count_terms_skips_stopwords() {
        let stopwords = StopwordFilter::from_list(&["the", "on", "was"]);
        let counts = count_terms("the cat sat on the mat. The cat was happy.", &stopwords);

        assert_eq!(counts.count("cat"), 2);
        assert_eq!(counts.count("sat"), 1);
        assert_eq!(counts.count("mat"), 1);
        assert_eq!(counts.count("happy"), 1);
        assert_eq!(counts.count("the"), 0);
        assert_eq!(counts.count("was"), 0);
    }

    #[test]
    fn test_count_terms_first_seen_positions() {
        let stopwords = StopwordFilter::empty();
        let counts = count_terms("alpha beta alpha", &stopwords);

        assert_eq!(counts.get("alpha").unwrap().first_seen, 0);
        assert_eq!(counts.get("beta").unwrap().first_seen, 1);
    }

    #[test]
    fn test_count_terms_empty_input() {
        let counts = count_terms("", StopwordFilter::shared());
        assert!(counts.is_empty());
    }

    #[test]
    fn test_count_terms_all_stopwords() {
        let counts = count_terms("the of and", StopwordFilter::shared());
        assert!(counts.is_empty());
    }
}
