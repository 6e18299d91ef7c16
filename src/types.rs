//! Shared types for the extraction pipeline.
//!
//! The frequency map ([`TermCounts`]) and selected keywords ([`Keyword`])
//! flow between the pipeline stages; [`KeymarkConfig`] configures them.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Configuration for the extract-and-highlight pipeline.
///
/// Deserializable from JSON so hosting applications can ship a config file:
///
/// ```json
/// { "top_n": 8, "extra_stopwords": ["lorem", "ipsum"] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymarkConfig {
    /// Default number of keywords to select when the caller does not
    /// supply a count.
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Additional stopwords merged into the built-in English list.
    #[serde(default)]
    pub extra_stopwords: Vec<String>,
}

fn default_top_n() -> usize {
    5
}

impl Default for KeymarkConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            extra_stopwords: Vec::new(),
        }
    }
}

impl KeymarkConfig {
    /// Set the default keyword count.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Set additional stopwords.
    pub fn with_extra_stopwords<S: Into<String>>(
        mut self,
        words: impl IntoIterator<Item = S>,
    ) -> Self {
        self.extra_stopwords = words.into_iter().map(Into::into).collect();
        self
    }
}

/// Occurrence statistics for a single term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermStats {
    /// Number of occurrences.
    pub count: u32,
    /// Token index of the first occurrence. Used as the deterministic
    /// tie-break when counts are equal.
    pub first_seen: usize,
}

/// Frequency map built from one document.
///
/// Maps normalized (lowercase) terms to their [`TermStats`]. Built fresh per
/// invocation; iteration order is unspecified, ordering happens in the
/// selector.
#[derive(Debug, Clone, Default)]
pub struct TermCounts {
    terms: FxHashMap<String, TermStats>,
}

impl TermCounts {
    /// Create an empty frequency map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a frequency map with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            terms: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Record one occurrence of `term` at token index `position`.
    pub fn record(&mut self, term: &str, position: usize) {
        if let Some(stats) = self.terms.get_mut(term) {
            stats.count += 1;
        } else {
            self.terms.insert(
                term.to_string(),
                TermStats {
                    count: 1,
                    first_seen: position,
                },
            );
        }
    }

    /// Occurrence count for `term`, 0 if absent.
    pub fn count(&self, term: &str) -> u32 {
        self.terms.get(term).map_or(0, |s| s.count)
    }

    /// Statistics for `term`, if it was seen.
    pub fn get(&self, term: &str) -> Option<&TermStats> {
        self.terms.get(term)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether no terms were recorded.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate over `(term, stats)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TermStats)> {
        self.terms.iter().map(|(term, stats)| (term.as_str(), stats))
    }
}

/// A selected keyword with its occurrence statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Keyword {
    /// The normalized (lowercase) term.
    pub term: String,
    /// Number of occurrences in the source text.
    pub count: u32,
    /// Token index of the first occurrence.
    pub first_seen: usize,
}
