// Copyright 2026 ESG Scout Contributors
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{ArgGroup, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use esg_scout::cli;
use esg_scout::config::ScrapeSettings;

#[derive(Parser)]
#[command(
    name = "esg-scout",
    about = "ESG/GRESB rating scraper and company logo fetcher",
    version,
    after_help = "Run 'esg-scout <command> --help' for details on each command."
)]
struct Cli {
    /// Enable verbose/debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape GRESB ratings for the built-in company table
    Gresb {
        /// Show the browser window instead of running headless
        #[arg(long)]
        headed: bool,
        /// Per-page navigation timeout in seconds
        #[arg(long, default_value = "30")]
        timeout: u64,
        /// Wait after page load for client-side rendering, in seconds
        #[arg(long, default_value = "3")]
        delay: u64,
    },
    /// Scrape Sustainalytics ESG risk ratings for the built-in company table
    Sustainalytics {
        /// Show the browser window instead of running headless
        #[arg(long)]
        headed: bool,
        /// Per-page navigation timeout in seconds
        #[arg(long, default_value = "30")]
        timeout: u64,
        /// Wait after page load for client-side rendering, in seconds
        #[arg(long, default_value = "5")]
        delay: u64,
    },
    /// Download and normalize company logos
    #[command(group(
        ArgGroup::new("input").required(true).multiple(true).args(["companies", "file"])
    ))]
    Logos {
        /// Company to fetch, as NAME or NAME:domain. Can be repeated.
        #[arg(
            short = 'c',
            long = "companies",
            value_name = "NAME[:DOMAIN]",
            num_args = 1..
        )]
        companies: Vec<String>,
        /// File with one company per line, or a JSON array of {name, domain}
        #[arg(short = 'f', long = "file")]
        file: Option<PathBuf>,
        /// Directory PNG files are written to
        #[arg(short = 'o', long = "output", default_value = "company_logos")]
        output: PathBuf,
    },
    /// Check environment and diagnose issues
    Doctor,
    /// Generate shell completion scripts
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_directive = if cli.verbose {
        "esg_scout=debug"
    } else {
        "esg_scout=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Gresb {
            headed,
            timeout,
            delay,
        } => cli::gresb_cmd::run(scrape_settings(headed, timeout, delay)).await,
        Commands::Sustainalytics {
            headed,
            timeout,
            delay,
        } => cli::sustainalytics_cmd::run(scrape_settings(headed, timeout, delay)).await,
        Commands::Logos {
            companies,
            file,
            output,
        } => cli::logos_cmd::run(companies, file.as_deref(), output).await,
        Commands::Doctor => cli::doctor::run().await,
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "esg-scout", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = &result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    result
}

fn scrape_settings(headed: bool, timeout: u64, delay: u64) -> ScrapeSettings {
    ScrapeSettings {
        headless: !headed,
        page_timeout: Duration::from_secs(timeout),
        settle_delay: Duration::from_secs(delay),
        ..ScrapeSettings::default()
    }
}
