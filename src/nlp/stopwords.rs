//! Stopword filtering
//!
//! The default English list comes from the `stop-words` crate. A single
//! read-only instance is shared process-wide; custom lists are supported for
//! callers that need to exclude domain terms.

use std::sync::LazyLock;

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Process-wide default filter, initialized once on first use.
static DEFAULT_FILTER: LazyLock<StopwordFilter> = LazyLock::new(StopwordFilter::new);

/// A filter for excluding common words from frequency counting.
///
/// Membership tests are case-insensitive: input is lowercased before lookup,
/// and the stored set is lowercase.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl StopwordFilter {
    /// Create a filter with the built-in English stopword list.
    pub fn new() -> Self {
        let stopwords = get(LANGUAGE::English)
            .iter()
            .map(|w| w.to_lowercase())
            .collect();
        Self { stopwords }
    }

    /// Create an empty filter (no filtering).
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a filter from a custom word list.
    pub fn from_list(words: &[&str]) -> Self {
        let stopwords = words.iter().map(|w| w.to_lowercase()).collect();
        Self { stopwords }
    }

    /// Shared read-only instance with the default English list.
    pub fn shared() -> &'static Self {
        &DEFAULT_FILTER
    }

    /// Add words to the filter.
    pub fn add_words<S: AsRef<str>>(&mut self, words: impl IntoIterator<Item = S>) {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    /// Remove words from the filter.
    pub fn remove_words<S: AsRef<str>>(&mut self, words: impl IntoIterator<Item = S>) {
        for word in words {
            self.stopwords.remove(&word.as_ref().to_lowercase());
        }
    }

    /// Check whether a word is a stopword.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Number of words in the filter.
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Whether the filter contains no words.
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_english_list() {
        let filter = StopwordFilter::new();

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The")); // case insensitive
        assert!(filter.is_stopword("on"));
        assert!(filter.is_stopword("was"));
        assert!(!filter.is_stopword("cat"));
        assert!(!filter.is_stopword("keyword"));
    }

    #[test]
    fn test_custom_list() {
        let mut filter = StopwordFilter::from_list(&["custom", "words"]);

        assert!(filter.is_stopword("custom"));
        assert!(filter.is_stopword("Words"));
        assert!(!filter.is_stopword("the"));

        filter.add_words(["extra"]);
        assert!(filter.is_stopword("extra"));

        filter.remove_words(["custom"]);
        assert!(!filter.is_stopword("custom"));
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();

        assert!(!filter.is_stopword("the"));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_shared_instance() {
        let a = StopwordFilter::shared();
        let b = StopwordFilter::shared();

        assert!(std::ptr::eq(a, b));
        assert!(a.is_stopword("the"));
    }
}
