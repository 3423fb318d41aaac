//! End-to-end rating pipeline tests over a canned page source.
//!
//! The canonical scenario: three targets where the first page matches
//! nothing, the second carries a valid score, and the third times out.
//! The exported row set must hold exactly three rows, with rows one and
//! three carrying empty rating fields.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use esg_scout::config::ScrapeSettings;
use esg_scout::error::{ScoutError, ScoutResult};
use esg_scout::export;
use esg_scout::extract::{GresbExtractor, SustainalyticsExtractor};
use esg_scout::model::{RiskLevel, Target};
use esg_scout::pipeline::RatingRun;
use esg_scout::render::PageSource;

/// Serves canned text per URL; unknown URLs fail like a navigation timeout.
struct CannedPages {
    pages: HashMap<String, String>,
}

impl CannedPages {
    fn new(pages: &[(&str, &str)]) -> Self {
        Self {
            pages: pages
                .iter()
                .map(|(url, text)| (url.to_string(), text.to_string()))
                .collect(),
        }
    }
}

#[async_trait]
impl PageSource for CannedPages {
    async fn page_text(&self, url: &str, _timeout: Duration) -> ScoutResult<String> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ScoutError::Navigation(format!("timeout loading {url}")))
    }

    async fn close(self: Box<Self>) -> ScoutResult<()> {
        Ok(())
    }
}

fn target(name: &str, url: &str) -> Target {
    Target {
        name: name.to_string(),
        regions: vec!["Global".to_string()],
        urls: vec![url.to_string()],
        notes: String::new(),
    }
}

#[tokio::test]
async fn test_three_targets_export_exactly_three_rows() {
    let pages = CannedPages::new(&[
        (
            "https://one.example/esg",
            "annual report with no ratings mentioned anywhere",
        ),
        (
            "https://two.example/esg",
            "The portfolio achieved a GRESB score: 83 this year",
        ),
        // three.example is deliberately absent so its fetch errors out
    ]);

    let mut run = RatingRun::new(
        Box::new(pages),
        Box::new(GresbExtractor::new()),
        ScrapeSettings::default(),
    );

    let targets = [
        target("No Match Ltd", "https://one.example/esg"),
        target("Scored Ltd", "https://two.example/esg"),
        target("Timeout Ltd", "https://three.example/esg"),
    ];
    for t in &targets {
        run.process(t).await;
    }
    let records = run.finish().await;

    assert_eq!(records.len(), 3);
    assert!(records[0].is_unrated());
    assert!(records[0].source_url.is_none());
    assert_eq!(records[1].score, Some(83.0));
    assert_eq!(
        records[1].source_url.as_deref(),
        Some("https://two.example/esg")
    );
    assert!(records[2].is_unrated());

    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("gresb_ratings.csv");
    let json_path = dir.path().join("gresb_ratings.json");
    export::write_csv(&records, &csv_path).unwrap();
    export::write_json(&records, &json_path).unwrap();

    let csv_text = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv_text.lines().count(), 4); // header plus three rows

    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["score"], serde_json::Value::Null);
    assert_eq!(rows[1]["score"], 83.0);
    assert_eq!(rows[2]["company"], "Timeout Ltd");
}

#[tokio::test]
async fn test_sustainalytics_fields_flow_through_to_xlsx() {
    let pages = CannedPages::new(&[(
        "https://rating.example/digital-realty",
        "ESG Risk Rating: 18.5 Low Risk. Management of ESG Material Risk is Strong.",
    )]);

    let mut run = RatingRun::new(
        Box::new(pages),
        Box::new(SustainalyticsExtractor::new()),
        ScrapeSettings::default(),
    );

    let record = run
        .process(&target(
            "Digital Realty",
            "https://rating.example/digital-realty",
        ))
        .await;
    assert_eq!(record.score, Some(18.5));
    assert_eq!(record.risk_level, Some(RiskLevel::Low));
    assert_eq!(record.management.as_deref(), Some("Strong"));

    let records = run.finish().await;
    let dir = tempfile::tempdir().unwrap();
    let xlsx_path = dir.path().join("sustainalytics_scores.xlsx");
    export::write_xlsx(&records, &xlsx_path).unwrap();
    assert!(std::fs::read(&xlsx_path).unwrap().starts_with(b"PK"));
}

#[tokio::test]
async fn test_second_url_rescues_a_failing_first_url() {
    let pages = CannedPages::new(&[(
        "https://backup.example/esg",
        "achieved 4 stars in GRESB assessments", // only the backup page exists
    )]);

    let mut run = RatingRun::new(
        Box::new(pages),
        Box::new(GresbExtractor::new()),
        ScrapeSettings::default(),
    );

    let multi_url = Target {
        name: "Backup Ltd".to_string(),
        regions: vec![],
        urls: vec![
            "https://dead.example/esg".to_string(),
            "https://backup.example/esg".to_string(),
        ],
        notes: String::new(),
    };
    let record = run.process(&multi_url).await;

    assert_eq!(record.stars, Some(4));
    assert_eq!(
        record.source_url.as_deref(),
        Some("https://backup.example/esg")
    );
}
