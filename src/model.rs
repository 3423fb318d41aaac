// Copyright 2026 ESG Scout Contributors
// SPDX-License-Identifier: Apache-2.0

//! Core data types shared by the rating and logo pipelines.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A company to scrape: identity, candidate source URLs, and static metadata.
/// Immutable for the duration of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    /// Company name as reported in the output.
    pub name: String,
    /// Operating regions, informational only.
    #[serde(default)]
    pub regions: Vec<String>,
    /// Candidate pages to try, in order. The first page that yields any
    /// rating field wins.
    pub urls: Vec<String>,
    /// Free-text notes carried through to the output unchanged.
    #[serde(default)]
    pub notes: String,
}

/// Sustainalytics ESG risk severity, ordered least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Negligible,
    Low,
    Medium,
    High,
    Severe,
}

impl RiskLevel {
    /// All levels in vocabulary order. This order is load-bearing: the
    /// keyword scan consults it first-to-last.
    pub const ALL: [RiskLevel; 5] = [
        RiskLevel::Negligible,
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::Severe,
    ];

    /// The keyword this level is recognized by on a rating page.
    pub fn keyword(self) -> &'static str {
        match self {
            RiskLevel::Negligible => "Negligible",
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Severe => "Severe",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Rating fields pulled from a single page of rendered text.
///
/// Every field is independent: a page can yield a score and no stars, or
/// vice versa. All-`None` means the page matched nothing, which is a valid
/// outcome rather than an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingFields {
    /// Numeric score. GRESB scores are whole numbers in 0–100; Sustainalytics
    /// risk scores are decimals in the same bound.
    pub score: Option<f64>,
    /// GRESB star rating, 1–5.
    pub stars: Option<u8>,
    /// Sustainalytics risk severity.
    pub risk_level: Option<RiskLevel>,
    /// Management-quality label (e.g. "Strong").
    pub management: Option<String>,
}

impl RatingFields {
    /// True when no field was extracted.
    pub fn is_empty(&self) -> bool {
        self.score.is_none()
            && self.stars.is_none()
            && self.risk_level.is_none()
            && self.management.is_none()
    }
}

/// One exported row: the outcome of processing one [`Target`].
///
/// A record with every rating field empty is a reportable "no rating found"
/// result and is never discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingRecord {
    pub company: String,
    /// Regions joined with `", "` so the record stays flat for CSV.
    pub regions: String,
    pub score: Option<f64>,
    pub stars: Option<u8>,
    pub risk_level: Option<RiskLevel>,
    pub management: Option<String>,
    /// The URL that yielded the match, or `None` when nothing matched.
    pub source_url: Option<String>,
    pub notes: String,
    pub scraped_at: DateTime<Utc>,
}

impl RatingRecord {
    /// A blank record for a target, timestamped now. Rating fields start
    /// empty and stay empty unless a page yields a match.
    pub fn for_target(target: &Target) -> Self {
        Self {
            company: target.name.clone(),
            regions: target.regions.join(", "),
            score: None,
            stars: None,
            risk_level: None,
            management: None,
            source_url: None,
            notes: target.notes.clone(),
            scraped_at: Utc::now(),
        }
    }

    /// Copy extracted fields into the record and remember where they came from.
    pub fn apply(&mut self, fields: RatingFields, source_url: &str) {
        self.score = fields.score;
        self.stars = fields.stars;
        self.risk_level = fields.risk_level;
        self.management = fields.management;
        self.source_url = Some(source_url.to_string());
    }

    /// True when no rating field was found for this company.
    pub fn is_unrated(&self) -> bool {
        self.score.is_none()
            && self.stars.is_none()
            && self.risk_level.is_none()
            && self.management.is_none()
    }
}

/// A company named on the logo pipeline's input, with an optional known domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanySpec {
    pub name: String,
    #[serde(default)]
    pub domain: Option<String>,
}

impl CompanySpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            domain: None,
        }
    }

    pub fn with_domain(name: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            domain: Some(domain.into()),
        }
    }
}

/// A successfully fetched and normalized logo.
#[derive(Debug, Clone, Serialize)]
pub struct LogoOutcome {
    pub company: String,
    /// Where the PNG landed.
    pub path: PathBuf,
    /// Which provider satisfied the request.
    pub provider: String,
}

/// End-of-run report for the logo pipeline.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LogoReport {
    pub downloaded: Vec<LogoOutcome>,
    /// Companies for which every provider was exhausted.
    pub failed: Vec<String>,
}
