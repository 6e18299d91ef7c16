//! Natural language processing components
//!
//! This module provides tokenization, frequency counting, and stopword
//! filtering.

pub mod stopwords;
pub mod tokenizer;

pub use stopwords::StopwordFilter;
pub use tokenizer::{count_terms, tokenize};
