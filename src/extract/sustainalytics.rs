//! Sustainalytics ESG risk extraction: decimal risk score, severity label,
//! and management-quality label.

use super::{cascade, compile, compile_one, RatingExtractor};
use crate::model::{RatingFields, RiskLevel};
use regex::Regex;

/// Score phrasings, labeled forms first. The final pattern is a bare-number
/// sweep constrained to 0-50 with at most two decimals, the band real risk
/// scores fall in.
const SCORE_PATTERNS: [&str; 4] = [
    r"ESG Risk Rating[:\s]+(\d+\.?\d*)",
    r"Risk Rating[:\s]+(\d+\.?\d*)",
    r"Score[:\s]+(\d+\.?\d*)",
    r"\b((?:[0-4]?[0-9]|50)(?:\.\d{1,2})?)\b",
];

/// Rating pages phrase management quality as a single sentence; capture 1 is
/// the quality word ("Strong", "Average", "Weak").
const MANAGEMENT_PATTERN: &str = r"Management of ESG Material Risk is (\w+)";

/// Extractor for Sustainalytics company rating pages.
pub struct SustainalyticsExtractor {
    score_patterns: Vec<Regex>,
    management_pattern: Regex,
}

impl SustainalyticsExtractor {
    pub fn new() -> Self {
        Self {
            score_patterns: compile(&SCORE_PATTERNS),
            management_pattern: compile_one(MANAGEMENT_PATTERN),
        }
    }
}

impl Default for SustainalyticsExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl RatingExtractor for SustainalyticsExtractor {
    fn source(&self) -> &'static str {
        "Sustainalytics"
    }

    fn extract(&self, text: &str) -> RatingFields {
        let score = cascade(&self.score_patterns, text, |raw| {
            raw.parse::<f64>().ok().filter(|s| (0.0..=100.0).contains(s))
        });
        let management = self
            .management_pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string());
        RatingFields {
            score,
            stars: None,
            risk_level: scan_risk_level(text),
            management,
        }
    }
}

/// Severity keywords are probed in vocabulary order, least severe first, and
/// the first keyword present anywhere in the text wins. A plain substring
/// scan, not a pattern cascade: a page mentioning both "Low" and "High"
/// reports Low regardless of which appears first on the page.
fn scan_risk_level(text: &str) -> Option<RiskLevel> {
    let haystack = text.to_lowercase();
    RiskLevel::ALL
        .into_iter()
        .find(|level| haystack.contains(&level.keyword().to_lowercase()))
}
