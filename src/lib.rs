//! # keymark
//!
//! Frequency-based keyword extraction and inline text highlighting.
//!
//! The core is a three-stage pipeline of pure functions: tokenize and count
//! non-stopword terms, rank them by frequency and keep the top N, then
//! rewrite the original text with every whole-word occurrence of a selected
//! keyword wrapped in `**` markers. [`shell::HighlightSession`] wraps the
//! pipeline in the mutable state an interactive front end needs.
//!
//! ## Quick start
//!
//! ```
//! use keymark::extract_and_highlight;
//!
//! let highlighted = extract_and_highlight("wolves hunt at night. wolves rest at dawn.", 1);
//! assert_eq!(highlighted, "**wolves** hunt at night. **wolves** rest at dawn.");
//! ```
//!
//! For repeated runs, build a [`HighlightPipeline`] once and reuse it:
//!
//! ```
//! use keymark::{HighlightPipeline, KeymarkConfig};
//!
//! let pipeline = HighlightPipeline::with_config(KeymarkConfig::default().with_top_n(3));
//! let outcome = pipeline.run("the quick brown fox jumps over the lazy dog", 3);
//! assert!(outcome.keywords.len() <= 3);
//! ```

pub mod highlight;
pub mod nlp;
pub mod pipeline;
pub mod rank;
pub mod shell;
pub mod types;

pub use highlight::{highlight, KeywordHighlighter};
pub use nlp::StopwordFilter;
pub use pipeline::{extract_and_highlight, HighlightOutcome, HighlightPipeline};
pub use rank::select_keywords;
pub use shell::HighlightSession;
pub use types::{Keyword, KeymarkConfig};
