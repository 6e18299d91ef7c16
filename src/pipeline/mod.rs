//! The extract-and-highlight pipeline

pub mod runner;

pub use runner::{extract_and_highlight, HighlightOutcome, HighlightPipeline};
