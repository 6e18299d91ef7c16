//! Keyword highlighting
//!
//! Rewrites text with every whole-word, case-insensitive occurrence of a
//! selected keyword wrapped in `**` markers. All keywords are compiled into
//! a single alternation so the text is scanned once.

use regex::Regex;

/// Highlights keyword occurrences in text.
///
/// The pattern is compiled once at construction; [`apply`](Self::apply) can
/// then be called against any number of texts.
#[derive(Debug, Clone)]
pub struct KeywordHighlighter {
    /// `None` when the keyword list was empty; apply is then the identity.
    pattern: Option<Regex>,
}

impl KeywordHighlighter {
    /// Build a highlighter for the given keywords.
    ///
    /// Keywords are matched case-insensitively and only as whole words, so
    /// a keyword never matches inside a longer token. Each keyword is
    /// escaped and matched literally.
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Self {
        if keywords.is_empty() {
            return Self { pattern: None };
        }

        let alternation = keywords
            .iter()
            .map(|k| regex::escape(k.as_ref()))
            .collect::<Vec<_>>()
            .join("|");

        // Keywords come from the tokenizer's ASCII-alphanumeric alphabet;
        // a pattern this escaping cannot compile is a defect, not input.
        let pattern = Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).expect("valid regex");

        Self {
            pattern: Some(pattern),
        }
    }

    /// Wrap every keyword occurrence in `text` with `**` markers.
    ///
    /// The matched substring is substituted as-is, preserving its original
    /// casing. Non-matching text is returned unchanged.
    pub fn apply(&self, text: &str) -> String {
        match &self.pattern {
            Some(pattern) => pattern.replace_all(text, "**${0}**").into_owned(),
            None => text.to_string(),
        }
    }
}

/// One-shot convenience: highlight `keywords` in `text`.
pub fn highlight<S: AsRef<str>>(text: &str, keywords: &[S]) -> String {
    KeywordHighlighter::new(keywords).apply(text)
}
