//! Run-level settings for the two pipelines.
//!
//! There is no config file; everything is a typed default overridable from
//! the CLI. Pacing values are policy knobs to stay polite toward the sites
//! being scraped, not correctness requirements.

use std::path::PathBuf;
use std::time::Duration;

/// Env var naming an explicit Chrome/Chromium binary, checked before PATH.
pub const CHROME_ENV: &str = "ESG_SCOUT_CHROME";

/// Settings for a rating scrape run.
#[derive(Debug, Clone)]
pub struct ScrapeSettings {
    /// Run the browser without a visible window.
    pub headless: bool,
    /// Hard cap on a single page navigation.
    pub page_timeout: Duration,
    /// Fixed wait after navigation so client-side rendering can settle.
    pub settle_delay: Duration,
    /// Pause between companies.
    pub company_pause: Duration,
}

impl Default for ScrapeSettings {
    fn default() -> Self {
        Self {
            headless: true,
            page_timeout: Duration::from_secs(30),
            settle_delay: Duration::from_secs(3),
            company_pause: Duration::from_secs(2),
        }
    }
}

/// Settings for a logo fetch run.
#[derive(Debug, Clone)]
pub struct LogoSettings {
    /// Directory PNG files land in, created if absent.
    pub output_dir: PathBuf,
    /// Per-request timeout. One attempt per provider, no retries.
    pub fetch_timeout: Duration,
    /// Pause between provider attempts for one company.
    pub provider_pause: Duration,
    /// Pause between companies.
    pub company_pause: Duration,
}

impl Default for LogoSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("company_logos"),
            fetch_timeout: Duration::from_secs(10),
            provider_pause: Duration::from_millis(500),
            company_pause: Duration::from_secs(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sane() {
        let scrape = ScrapeSettings::default();
        assert!(scrape.headless);
        assert!(scrape.page_timeout > scrape.settle_delay);

        let logos = LogoSettings::default();
        assert_eq!(logos.output_dir, PathBuf::from("company_logos"));
        assert!(logos.provider_pause < logos.company_pause);
    }
}
