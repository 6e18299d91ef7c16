//! Pipeline runner — orchestrates stage execution.
//!
//! [`HighlightPipeline`] threads the stages in order: count terms, select
//! the top N, rewrite the text with the selected keywords wrapped in `**`
//! markers. Each run is a single synchronous pass over one document; the
//! pipeline itself holds only read-only state (config and stopword filter)
//! and can be reused across invocations.

use serde::Serialize;
use tracing::debug;

use crate::highlight::KeywordHighlighter;
use crate::nlp::{count_terms, StopwordFilter};
use crate::rank::select_keywords;
use crate::types::{Keyword, KeymarkConfig};

/// Result of one pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct HighlightOutcome {
    /// Selected keywords, most frequent first.
    pub keywords: Vec<Keyword>,
    /// The input text with keyword occurrences wrapped in `**` markers.
    pub highlighted: String,
}

/// A reusable extract-and-highlight pipeline.
#[derive(Debug, Clone)]
pub struct HighlightPipeline {
    config: KeymarkConfig,
    stopwords: StopwordFilter,
}

impl Default for HighlightPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl HighlightPipeline {
    /// Create a pipeline with the default config and English stopwords.
    pub fn new() -> Self {
        Self::with_config(KeymarkConfig::default())
    }

    /// Create a pipeline from a config.
    ///
    /// The config's `extra_stopwords` are merged into the built-in list.
    pub fn with_config(config: KeymarkConfig) -> Self {
        let mut stopwords = StopwordFilter::shared().clone();
        if !config.extra_stopwords.is_empty() {
            stopwords.add_words(&config.extra_stopwords);
        }
        Self { config, stopwords }
    }

    /// The pipeline's config.
    pub fn config(&self) -> &KeymarkConfig {
        &self.config
    }

    /// The pipeline's stopword filter.
    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// Extract the `top_n` most frequent non-stopword terms from `text`.
    pub fn extract(&self, text: &str, top_n: usize) -> Vec<Keyword> {
        let counts = count_terms(text, &self.stopwords);
        debug!(distinct_terms = counts.len(), "counted terms");

        let keywords = select_keywords(&counts, top_n);
        debug!(selected = keywords.len(), requested = top_n, "selected keywords");
        keywords
    }

    /// Run the full pipeline: extract keywords and highlight them in `text`.
    pub fn run(&self, text: &str, top_n: usize) -> HighlightOutcome {
        let keywords = self.extract(text, top_n);

        let terms: Vec<&str> = keywords.iter().map(|k| k.term.as_str()).collect();
        let highlighted = KeywordHighlighter::new(&terms).apply(text);
        debug!(len = highlighted.len(), "highlighted text");

        HighlightOutcome {
            keywords,
            highlighted,
        }
    }
}

/// Convenience function: run the default pipeline once over `text`.
pub fn extract_and_highlight(text: &str, top_n: usize) -> String {
    HighlightPipeline::new().run(text, top_n).highlighted
}
