//! Flat-file exporters for rating records.
//!
//! Three formats, one record shape: CSV and JSON carry identical rows,
//! XLSX additionally writes numeric cells as numbers. Exporters never
//! print; callers decide how loudly to report success or failure.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::WriterBuilder;
use rust_xlsxwriter::Workbook;
use tracing::info;

use crate::error::ScoutResult;
use crate::model::RatingRecord;

/// Worksheet name used in the XLSX export.
const SHEET_NAME: &str = "ESG Scores";

/// Column order shared by the XLSX header row and the serde-derived CSV.
const COLUMNS: [&str; 9] = [
    "company",
    "regions",
    "score",
    "stars",
    "risk_level",
    "management",
    "source_url",
    "notes",
    "scraped_at",
];

/// Write records as CSV with a header row. Empty rating fields become
/// empty cells, so an unrated company still occupies a full row.
pub fn write_csv(records: &[RatingRecord], path: &Path) -> ScoutResult<()> {
    let file = File::create(path)?;
    let mut wtr = WriterBuilder::new()
        .has_headers(true)
        .from_writer(BufWriter::new(file));
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    info!(path = %path.display(), rows = records.len(), "csv written");
    Ok(())
}

/// Write the same records as a pretty-printed JSON array (2-space indent).
pub fn write_json(records: &[RatingRecord], path: &Path) -> ScoutResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush()?;
    info!(path = %path.display(), rows = records.len(), "json written");
    Ok(())
}

/// Write records into a single-worksheet XLSX workbook.
pub fn write_xlsx(records: &[RatingRecord], path: &Path) -> ScoutResult<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, header) in COLUMNS.iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }

    for (idx, record) in records.iter().enumerate() {
        let row = idx as u32 + 1;
        sheet.write_string(row, 0, &record.company)?;
        sheet.write_string(row, 1, &record.regions)?;
        if let Some(score) = record.score {
            sheet.write_number(row, 2, score)?;
        }
        if let Some(stars) = record.stars {
            sheet.write_number(row, 3, f64::from(stars))?;
        }
        if let Some(level) = record.risk_level {
            sheet.write_string(row, 4, level.to_string())?;
        }
        if let Some(management) = &record.management {
            sheet.write_string(row, 5, management)?;
        }
        if let Some(url) = &record.source_url {
            sheet.write_string(row, 6, url)?;
        }
        sheet.write_string(row, 7, &record.notes)?;
        sheet.write_string(row, 8, record.scraped_at.to_rfc3339())?;
    }

    workbook.save(path)?;
    info!(path = %path.display(), rows = records.len(), "xlsx written");
    Ok(())
}
