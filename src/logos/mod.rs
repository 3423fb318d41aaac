// Copyright 2026 ESG Scout Contributors
// SPDX-License-Identifier: Apache-2.0

//! Logo acquisition pipeline.
//!
//! For each company: resolve a domain (given or guessed), walk the provider
//! ladder until one yields acceptable bytes, normalize to RGBA PNG, and write
//! `<cleaned>_logo.png` into the output directory. Exhausting every provider
//! marks the company failed and the caller moves on; nothing here is fatal
//! to the run.

mod http;
mod input;
mod normalize;
mod providers;

pub use http::{Fetched, HttpClient};
pub use input::{load_company_file, parse_company_arg};
pub use normalize::{logo_file_name, normalize_png};
pub use providers::{
    default_providers, guess_domain, Brandfetch, Clearbit, GoogleFavicons, LogoDev, LogoProvider,
};

use tracing::{debug, info, warn};

use crate::config::LogoSettings;
use crate::error::{ScoutError, ScoutResult};
use crate::model::{CompanySpec, LogoOutcome};

/// Runs the provider cascade for one company at a time.
pub struct LogoFetcher {
    http: HttpClient,
    providers: Vec<Box<dyn LogoProvider>>,
    settings: LogoSettings,
}

impl LogoFetcher {
    /// Fetcher with the standard provider ladder.
    pub fn new(settings: LogoSettings) -> Self {
        Self::with_providers(settings, default_providers())
    }

    /// Fetcher with a caller-supplied ladder. Tests inject fakes here to
    /// pin down the short-circuit behavior without touching the network.
    pub fn with_providers(settings: LogoSettings, providers: Vec<Box<dyn LogoProvider>>) -> Self {
        Self {
            http: HttpClient::new(settings.fetch_timeout),
            providers,
            settings,
        }
    }

    /// Fetch, normalize, and save one company's logo.
    ///
    /// Every failure path comes back as an `Err` the caller records; the
    /// distinguished end state is [`ScoutError::ProvidersExhausted`].
    pub async fn fetch_one(&self, spec: &CompanySpec) -> ScoutResult<LogoOutcome> {
        let domain = spec
            .domain
            .clone()
            .unwrap_or_else(|| guess_domain(&spec.name));
        debug!(company = %spec.name, %domain, "resolving logo");

        let (raw, provider) = self.cascade(&spec.name, &domain).await?;
        let png = normalize_png(&raw)?;

        let path = self.settings.output_dir.join(logo_file_name(&spec.name));
        std::fs::write(&path, png)?;
        info!(company = %spec.name, provider, path = %path.display(), "logo saved");

        Ok(LogoOutcome {
            company: spec.name.clone(),
            path,
            provider: provider.to_string(),
        })
    }

    /// Walk the ladder in order and return the first accepted payload along
    /// with the provider that produced it. First acceptance stops the walk;
    /// later providers are never consulted.
    async fn cascade(&self, company: &str, domain: &str) -> ScoutResult<(Vec<u8>, &'static str)> {
        for (idx, provider) in self.providers.iter().enumerate() {
            if idx > 0 {
                tokio::time::sleep(self.settings.provider_pause).await;
            }
            debug!(provider = provider.name(), company, "trying provider");
            match provider.fetch(&self.http, domain).await {
                Ok(bytes) => {
                    info!(
                        provider = provider.name(),
                        company,
                        size = bytes.len(),
                        "provider accepted"
                    );
                    return Ok((bytes, provider.name()));
                }
                Err(err) => {
                    warn!(provider = provider.name(), company, error = %err, "provider attempt failed");
                }
            }
        }
        Err(ScoutError::ProvidersExhausted(company.to_string()))
    }
}
