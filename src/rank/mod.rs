//! Keyword ranking and selection

pub mod selector;

pub use selector::select_keywords;
