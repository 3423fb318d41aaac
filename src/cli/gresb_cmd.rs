//! `gresb` subcommand: scrape the built-in GRESB target table.

use std::path::Path;
use std::sync::atomic::Ordering;

use anyhow::{Context, Result};
use tracing::error;

use crate::config::ScrapeSettings;
use crate::export;
use crate::extract::GresbExtractor;
use crate::model::RatingRecord;
use crate::pipeline::{interrupt_flag, RatingRun};
use crate::render::ChromiumSource;
use crate::targets;

const CSV_FILE: &str = "gresb_ratings.csv";
const JSON_FILE: &str = "gresb_ratings.json";

pub async fn run(settings: ScrapeSettings) -> Result<()> {
    let targets = targets::gresb_targets();
    println!("Scraping GRESB ratings for {} companies", targets.len());

    let source = ChromiumSource::launch(&settings)
        .await
        .context("browser setup failed")?;
    let mut run = RatingRun::new(
        Box::new(source),
        Box::new(GresbExtractor::new()),
        settings.clone(),
    );
    let interrupted = interrupt_flag();

    let total = targets.len();
    for (idx, target) in targets.iter().enumerate() {
        if interrupted.load(Ordering::SeqCst) {
            println!("\nInterrupted; exporting what was collected so far.");
            break;
        }
        if idx > 0 {
            tokio::time::sleep(settings.company_pause).await;
        }

        println!("\n[{}/{}] Processing: {}", idx + 1, total, target.name);
        let record = run.process(target).await;
        if record.is_unrated() {
            println!("  no GRESB rating found");
        } else {
            if let Some(score) = record.score {
                println!("  GRESB score: {score}/100");
            }
            if let Some(stars) = record.stars {
                println!("  GRESB stars: {stars}/5");
            }
        }
    }

    let records = run.finish().await;
    if records.is_empty() {
        println!("\nNo results to export.");
        return Ok(());
    }

    export_records(&records);
    print_summary(&records);
    Ok(())
}

/// Export CSV and JSON side by side. Failures are reported and skipped so
/// the summary still prints.
fn export_records(records: &[RatingRecord]) {
    match export::write_csv(records, Path::new(CSV_FILE)) {
        Ok(()) => println!("\nResults exported to {CSV_FILE}"),
        Err(err) => error!(error = %err, "csv export failed"),
    }
    match export::write_json(records, Path::new(JSON_FILE)) {
        Ok(()) => println!("Results also saved to {JSON_FILE}"),
        Err(err) => error!(error = %err, "json export failed"),
    }
}

fn print_summary(records: &[RatingRecord]) {
    println!("\n{}", "=".repeat(80));
    println!("GRESB RATINGS SUMMARY");
    println!("{}", "=".repeat(80));

    for record in records {
        println!("\n{} ({})", record.company, record.regions);
        if !record.notes.is_empty() {
            println!("  Notes: {}", record.notes);
        }
        if let Some(score) = record.score {
            println!("  GRESB Score: {score}/100");
        }
        if let Some(stars) = record.stars {
            println!("  GRESB Stars: {stars}/5");
        }
        if record.is_unrated() {
            println!("  No GRESB ratings found on website");
        }
    }
}
