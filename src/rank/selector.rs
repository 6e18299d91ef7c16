//! Frequency-based keyword selection
//!
//! Ranks the frequency map by occurrence count and truncates to the top N.
//! Equal counts are ordered by first occurrence in the text, so results are
//! deterministic regardless of the map's iteration order.

use std::cmp::Reverse;

use crate::types::{Keyword, TermCounts};

/// Select the `top_n` most frequent terms from a frequency map.
///
/// Entries are sorted by count descending, then by first occurrence
/// ascending. `top_n == 0` or an empty map yields an empty list; if fewer
/// than `top_n` terms exist, all of them are returned.
pub fn select_keywords(counts: &TermCounts, top_n: usize) -> Vec<Keyword> {
    if top_n == 0 || counts.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<Keyword> = counts
        .iter()
        .map(|(term, stats)| Keyword {
            term: term.to_string(),
            count: stats.count,
            first_seen: stats.first_seen,
        })
        .collect();

    ranked.sort_by_key(|k| (Reverse(k.count), k.first_seen));
    ranked.truncate(top_n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_counts(entries: &[(&str, usize)]) -> TermCounts {
        // Each entry is (term, occurrences); positions follow entry order.
        let mut counts = TermCounts::new();
        let mut position = 0;
        for (term, occurrences) in entries {
            for _ in 0..*occurrences {
                counts.record(term, position);
                position += 1;
            }
        }
        counts
    }

    #[test]
    fn test_orders_by_count_descending() {
        let counts = make_counts(&[("rare", 1), ("common", 3), ("middling", 2)]);
        let keywords = select_keywords(&counts, 3);

        let terms: Vec<_> = keywords.iter().map(|k| k.term.as_str()).collect();
        assert_eq!(terms, vec!["common", "middling", "rare"]);
        assert_eq!(keywords[0].count, 3);
    }

    #[test]
    fn test_ties_break_by_first_occurrence() {
        let counts = make_counts(&[("zebra", 1), ("apple", 1), ("mango", 1)]);
        let keywords = select_keywords(&counts, 3);

        // All counts equal, so text order wins over lexicographic order.
        let terms: Vec<_> = keywords.iter().map(|k| k.term.as_str()).collect();
        assert_eq!(terms, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_truncates_to_top_n() {
        let counts = make_counts(&[("a1", 4), ("b2", 3), ("c3", 2), ("d4", 1)]);
        let keywords = select_keywords(&counts, 2);

        assert_eq!(keywords.len(), 2);
        assert_eq!(keywords[0].term, "a1");
        assert_eq!(keywords[1].term, "b2");
    }

    #[test]
    fn test_fewer_terms_than_requested() {
        let counts = make_counts(&[("only", 1)]);
        let keywords = select_keywords(&counts, 10);
        assert_eq!(keywords.len(), 1);
    }

    #[test]
    fn test_zero_requested() {
        let counts = make_counts(&[("term", 5)]);
        assert!(select_keywords(&counts, 0).is_empty());
    }

    #[test]
    fn test_empty_map() {
        let counts = TermCounts::new();
        assert!(select_keywords(&counts, 5).is_empty());
    }
}
