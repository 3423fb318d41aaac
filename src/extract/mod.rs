//! Rating extraction from rendered page text.
//!
//! Each rating source gets an extractor that scans the visible text of a page
//! with an ordered regex cascade. The discipline is the same everywhere:
//! patterns fire in declared order, each pattern gets exactly one attempt
//! (its first match in the text), and every numeric capture is range-gated
//! before acceptance. Free text is full of incidental numbers (years, page
//! counts, percentages), so an out-of-range capture is treated as a non-match
//! and the cascade moves to the next pattern.
//!
//! Extractors are pure text scanners: no I/O, no state across calls. All
//! matching is case-insensitive.

pub mod gresb;
pub mod sustainalytics;

pub use gresb::GresbExtractor;
pub use sustainalytics::SustainalyticsExtractor;

use crate::model::RatingFields;
use regex::{Regex, RegexBuilder};

/// Pulls rating fields out of one page of rendered text.
pub trait RatingExtractor: Send + Sync {
    /// Short source label for logs and progress lines.
    fn source(&self) -> &'static str;

    /// Scan `text` and return whatever fields matched. All-empty is a valid
    /// outcome, not an error.
    fn extract(&self, text: &str) -> RatingFields;
}

/// Compile one pattern, case-insensitive.
pub(crate) fn compile_one(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .expect("rating pattern is valid")
}

/// Compile a pattern table in declared order.
pub(crate) fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| compile_one(p)).collect()
}

/// Run one pattern cascade over `text`.
///
/// Each pattern gets a single attempt: its first match in the text. A capture
/// that fails `accept` disqualifies that pattern only; the cascade continues.
/// The first accepted capture wins and later patterns are never consulted.
pub(crate) fn cascade<T>(
    patterns: &[Regex],
    text: &str,
    accept: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    for pattern in patterns {
        if let Some(caps) = pattern.captures(text) {
            if let Some(value) = caps.get(1).and_then(|m| accept(m.as_str())) {
                return Some(value);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small(raw: &str) -> Option<u32> {
        raw.parse::<u32>().ok().filter(|v| *v <= 100)
    }

    #[test]
    fn test_cascade_declared_order_beats_text_order() {
        let patterns = compile(&[r"alpha (\d+)", r"beta (\d+)"]);
        // beta appears first in the text; alpha is still tried first.
        assert_eq!(cascade(&patterns, "beta 7 alpha 3", small), Some(3));
    }

    #[test]
    fn test_cascade_out_of_range_moves_to_next_pattern() {
        let patterns = compile(&[r"alpha (\d+)", r"beta (\d+)"]);
        assert_eq!(cascade(&patterns, "alpha 999 beta 7", small), Some(7));
    }

    #[test]
    fn test_cascade_single_attempt_per_pattern() {
        let patterns = compile(&[r"alpha (\d+)", r"beta (\d+)"]);
        // alpha's first match is rejected; its second occurrence is never
        // examined, and no other pattern matches.
        assert_eq!(cascade(&patterns, "alpha 999 alpha 7", small), None);
    }

    #[test]
    fn test_cascade_case_insensitive() {
        let patterns = compile(&[r"alpha (\d+)"]);
        assert_eq!(cascade(&patterns, "ALPHA 42", small), Some(42));
    }

    #[test]
    fn test_cascade_empty_text() {
        let patterns = compile(&[r"alpha (\d+)"]);
        assert_eq!(cascade(&patterns, "", small), None);
    }
}
