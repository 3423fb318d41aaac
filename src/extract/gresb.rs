//! GRESB assessment extraction: a 0-100 score and a 1-5 star rating.

use super::{cascade, compile, RatingExtractor};
use crate::model::RatingFields;
use regex::Regex;

/// Score phrasings seen on sustainability pages and press releases, most
/// explicit first. Capture 1 is the candidate score.
const SCORE_PATTERNS: [&str; 5] = [
    r"GRESB\s*(?:score|rating)[\s:]*(\d{1,3})",
    r"scored?\s*(\d{1,3})\s*(?:out of 100)?\s*in\s*GRESB",
    r"(\d{1,3})/100\s*GRESB",
    r"GRESB.*?(\d{1,3})\s*(?:points|score)",
    r"achieved?\s*(\d{1,3})\s*in\s*(?:the\s*)?GRESB",
];

/// Star-rating phrasings, including the `★` glyph used in badge copy.
const STAR_PATTERNS: [&str; 4] = [
    r"(\d)\s*(?:star|★)\s*GRESB",
    r"GRESB\s*(\d)\s*(?:star|★)",
    r"achieved?\s*(\d)\s*stars?\s*in\s*GRESB",
    r"(\d)-star\s*(?:GRESB\s*)?rating",
];

/// Extractor for GRESB real-asset assessment results.
pub struct GresbExtractor {
    score_patterns: Vec<Regex>,
    star_patterns: Vec<Regex>,
}

impl GresbExtractor {
    pub fn new() -> Self {
        Self {
            score_patterns: compile(&SCORE_PATTERNS),
            star_patterns: compile(&STAR_PATTERNS),
        }
    }
}

impl Default for GresbExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl RatingExtractor for GresbExtractor {
    fn source(&self) -> &'static str {
        "GRESB"
    }

    fn extract(&self, text: &str) -> RatingFields {
        // Score and stars run as independent cascades: a page can carry the
        // star badge without quoting the numeric score, and vice versa.
        let score = cascade(&self.score_patterns, text, |raw| {
            raw.parse::<u32>().ok().filter(|s| *s <= 100)
        });
        let stars = cascade(&self.star_patterns, text, |raw| {
            raw.parse::<u8>().ok().filter(|s| (1..=5).contains(s))
        });
        RatingFields {
            score: score.map(f64::from),
            stars,
            ..Default::default()
        }
    }
}
