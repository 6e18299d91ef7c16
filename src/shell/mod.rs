//! Interactive session state
//!
//! [`HighlightSession`] owns the state behind the interactive shell: the
//! current input text, the requested keyword count, and the last computed
//! result. Submission is a single synchronous pipeline run; an empty result
//! means there is nothing to show.

use crate::pipeline::HighlightPipeline;
use crate::types::Keyword;

/// Mutable state for one interactive highlighting session.
#[derive(Debug)]
pub struct HighlightSession {
    pipeline: HighlightPipeline,
    input: String,
    keyword_count: usize,
    result: String,
    keywords: Vec<Keyword>,
}

impl Default for HighlightSession {
    fn default() -> Self {
        Self::new()
    }
}

impl HighlightSession {
    /// Create a session backed by the default pipeline.
    pub fn new() -> Self {
        Self::with_pipeline(HighlightPipeline::new())
    }

    /// Create a session backed by a configured pipeline.
    ///
    /// The initial keyword count comes from the pipeline's config.
    pub fn with_pipeline(pipeline: HighlightPipeline) -> Self {
        let keyword_count = pipeline.config().top_n;
        Self {
            pipeline,
            input: String::new(),
            keyword_count,
            result: String::new(),
            keywords: Vec::new(),
        }
    }

    /// Current input text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the input text.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Requested keyword count.
    pub fn keyword_count(&self) -> usize {
        self.keyword_count
    }

    /// Set the requested keyword count.
    ///
    /// The hosting UI constrains this to 1–20; no range check happens here.
    pub fn set_keyword_count(&mut self, count: usize) {
        self.keyword_count = count;
    }

    /// Last computed highlighted text. Empty means nothing to show.
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Keywords behind the last result, most frequent first.
    pub fn keywords(&self) -> &[Keyword] {
        &self.keywords
    }

    /// Whether a result panel should be rendered.
    pub fn has_result(&self) -> bool {
        !self.result.is_empty()
    }

    /// Run the pipeline over the current input.
    ///
    /// A whitespace-only input clears any previous result and stops;
    /// otherwise the outcome replaces the stored result.
    pub fn submit(&mut self) {
        if self.input.trim().is_empty() {
            self.result.clear();
            self.keywords.clear();
            return;
        }

        let outcome = self.pipeline.run(&self.input, self.keyword_count);
        self.result = outcome.highlighted;
        self.keywords = outcome.keywords;
    }
}
