//! `sustainalytics` subcommand: scrape Sustainalytics ESG risk ratings.

use std::path::Path;
use std::sync::atomic::Ordering;

use anyhow::{Context, Result};
use tracing::error;

use crate::config::ScrapeSettings;
use crate::export;
use crate::extract::SustainalyticsExtractor;
use crate::model::RatingRecord;
use crate::pipeline::{interrupt_flag, RatingRun};
use crate::render::ChromiumSource;
use crate::targets;

const CSV_FILE: &str = "sustainalytics_scores.csv";
const XLSX_FILE: &str = "sustainalytics_scores.xlsx";

pub async fn run(settings: ScrapeSettings) -> Result<()> {
    let targets = targets::sustainalytics_targets();
    println!("Scraping Sustainalytics ESG risk ratings for {} companies", targets.len());

    let source = ChromiumSource::launch(&settings)
        .await
        .context("browser setup failed")?;
    let mut run = RatingRun::new(
        Box::new(source),
        Box::new(SustainalyticsExtractor::new()),
        settings.clone(),
    );
    let interrupted = interrupt_flag();

    let total = targets.len();
    for (idx, target) in targets.iter().enumerate() {
        if interrupted.load(Ordering::SeqCst) {
            println!("\nInterrupted; reporting what was collected so far.");
            break;
        }
        if idx > 0 {
            tokio::time::sleep(settings.company_pause).await;
        }

        println!("\n[{}/{}] Processing: {}", idx + 1, total, target.name);
        println!("{}", "-".repeat(40));
        let record = run.process(target).await;
        match record.score {
            Some(score) => println!("  found ESG risk score: {score}"),
            None => println!("  could not find an ESG risk score"),
        }
    }

    let records = run.finish().await;
    if records.is_empty() {
        println!("\nNo results.");
        return Ok(());
    }

    print_summary(&records);
    export_records(&records);
    Ok(())
}

fn print_summary(records: &[RatingRecord]) {
    println!("\n{}", "=".repeat(60));
    println!("SCRAPING COMPLETE");
    println!("{}", "=".repeat(60));

    println!("\nResults summary:");
    println!(
        "{:<35} {:>6}  {:<12} {}",
        "Company", "Score", "Risk", "Management"
    );
    for record in records {
        println!(
            "{:<35} {:>6}  {:<12} {}",
            record.company,
            record
                .score
                .map_or_else(|| "-".to_string(), |s| s.to_string()),
            record
                .risk_level
                .map_or_else(|| "-".to_string(), |r| r.to_string()),
            record.management.as_deref().unwrap_or("-"),
        );
    }

    let found = records.iter().filter(|r| r.score.is_some()).count();
    println!("\nFound scores for {found}/{} companies", records.len());

    if found == 0 {
        println!("\nNo scores were found. Sustainalytics may be blocking automated access;");
        println!("try running again with --headed to watch the pages load.");
    }
}

/// Export CSV and XLSX after the summary. Failures are reported and never
/// retract what was already printed.
fn export_records(records: &[RatingRecord]) {
    match export::write_csv(records, Path::new(CSV_FILE)) {
        Ok(()) => println!("\nSaved to {CSV_FILE}"),
        Err(err) => error!(error = %err, "csv export failed"),
    }
    match export::write_xlsx(records, Path::new(XLSX_FILE)) {
        Ok(()) => println!("Saved to {XLSX_FILE}"),
        Err(err) => error!(error = %err, "xlsx export failed"),
    }
}
