//! `logos` subcommand: fetch and normalize company logos.

use std::path::{Path, PathBuf};
use std::sync::atomic::Ordering;

use anyhow::{Context, Result};
use tracing::warn;

use crate::config::LogoSettings;
use crate::logos::{load_company_file, parse_company_arg, LogoFetcher};
use crate::model::{CompanySpec, LogoReport};
use crate::pipeline::interrupt_flag;

pub async fn run(companies: Vec<String>, file: Option<&Path>, output: PathBuf) -> Result<()> {
    let specs = collect_specs(&companies, file)?;

    std::fs::create_dir_all(&output)
        .with_context(|| format!("could not create output directory {}", output.display()))?;

    let settings = LogoSettings {
        output_dir: output,
        ..LogoSettings::default()
    };
    println!(
        "Fetching logos for {} companies into {}",
        specs.len(),
        settings.output_dir.display()
    );

    let fetcher = LogoFetcher::new(settings.clone());
    let interrupted = interrupt_flag();
    let mut report = LogoReport::default();

    let total = specs.len();
    for (idx, spec) in specs.iter().enumerate() {
        if interrupted.load(Ordering::SeqCst) {
            println!("\nInterrupted; reporting what was fetched so far.");
            break;
        }
        if idx > 0 {
            tokio::time::sleep(settings.company_pause).await;
        }

        println!("\n[{}/{}] {}", idx + 1, total, spec.name);
        match fetcher.fetch_one(spec).await {
            Ok(outcome) => {
                println!("  saved {} (via {})", outcome.path.display(), outcome.provider);
                report.downloaded.push(outcome);
            }
            Err(err) => {
                warn!(company = %spec.name, error = %err, "logo fetch failed");
                println!("  no logo found");
                report.failed.push(spec.name.clone());
            }
        }
    }

    print_report(&report, &settings.output_dir);
    Ok(())
}

/// Merge the two input sources. File entries come first, then `-c`
/// arguments, each source in its given order.
fn collect_specs(companies: &[String], file: Option<&Path>) -> Result<Vec<CompanySpec>> {
    let mut specs: Vec<CompanySpec> = Vec::new();
    if let Some(path) = file {
        let loaded = load_company_file(path)
            .with_context(|| format!("could not read company file {}", path.display()))?;
        specs.extend(loaded);
    }
    for arg in companies {
        specs.push(parse_company_arg(arg)?);
    }
    Ok(specs)
}

fn print_report(report: &LogoReport, output_dir: &Path) {
    println!("\n{}", "=".repeat(60));
    println!("LOGO EXTRACTION SUMMARY");
    println!("{}", "=".repeat(60));

    println!("\nDownloaded: {} logos", report.downloaded.len());
    for item in &report.downloaded {
        println!("  - {} ({})", item.company, item.provider);
    }

    if !report.failed.is_empty() {
        println!("\nFailed: {} companies", report.failed.len());
        for company in &report.failed {
            println!("  - {company}");
        }
    }

    let shown = std::fs::canonicalize(output_dir).unwrap_or_else(|_| output_dir.to_path_buf());
    println!("\nLogos saved to: {}", shown.display());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_file_entries_precede_argument_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("companies.txt");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "File Corp").unwrap();
        writeln!(f, "Second File Corp, second.io").unwrap();

        let specs = collect_specs(&["Arg Corp".to_string()], Some(&path)).unwrap();
        assert_eq!(
            specs,
            vec![
                CompanySpec::new("File Corp"),
                CompanySpec::with_domain("Second File Corp", "second.io"),
                CompanySpec::new("Arg Corp"),
            ]
        );
    }

    #[test]
    fn test_bad_argument_is_an_error() {
        assert!(collect_specs(&[":no-name.com".to_string()], None).is_err());
    }
}
