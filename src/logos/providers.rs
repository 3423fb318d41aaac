//! Ordered strategy table of public logo endpoints.
//!
//! Each provider implements one uniform "attempt fetch" interface so the
//! cascade can be exercised with injected fakes. Order matters: Google
//! Favicons sits last as a lower-quality fallback and carries an extra
//! payload-size floor to reject its generic placeholder icon.

use async_trait::async_trait;

use super::http::HttpClient;
use crate::error::{ScoutError, ScoutResult};

const CLEARBIT_BASE: &str = "https://logo.clearbit.com";
const LOGO_DEV_BASE: &str = "https://img.logo.dev";
const BRANDFETCH_BASE: &str = "https://cdn.brandfetch.io";
const GOOGLE_FAVICON_BASE: &str = "https://www.google.com";

/// Payloads at or below this many bytes from the favicon service are the
/// generic globe placeholder, not a real logo.
const MIN_FAVICON_BYTES: usize = 1000;

/// One rung of the logo fallback ladder.
#[async_trait]
pub trait LogoProvider: Send + Sync {
    /// Short provider name for logs and the run report.
    fn name(&self) -> &'static str;

    /// Attempt to fetch a logo for `domain`. `Ok` carries accepted image
    /// bytes; any `Err` sends the cascade on to the next provider.
    async fn fetch(&self, http: &HttpClient, domain: &str) -> ScoutResult<Vec<u8>>;
}

/// The standard ladder, in priority order.
pub fn default_providers() -> Vec<Box<dyn LogoProvider>> {
    vec![
        Box::new(Clearbit::default()),
        Box::new(LogoDev::default()),
        Box::new(Brandfetch::default()),
        Box::new(GoogleFavicons::default()),
    ]
}

/// Guess a domain from a company name: lowercase, drop spaces and `&`,
/// append `.com`. Wrong for plenty of multi-word or non-.com companies;
/// callers that know the real domain should pass it explicitly.
pub fn guess_domain(name: &str) -> String {
    let mut host: String = name
        .to_lowercase()
        .chars()
        .filter(|c| *c != ' ' && *c != '&')
        .collect();
    host.push_str(".com");
    host
}

/// Clearbit Logo API. Free tier, no key needed for basic usage.
pub struct Clearbit {
    base: String,
}

impl Clearbit {
    /// Point the provider at a different host. Tests aim this at a local
    /// mock server; production code never calls it.
    pub fn with_base(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

impl Default for Clearbit {
    fn default() -> Self {
        Self {
            base: CLEARBIT_BASE.to_string(),
        }
    }
}

#[async_trait]
impl LogoProvider for Clearbit {
    fn name(&self) -> &'static str {
        "Clearbit"
    }

    async fn fetch(&self, http: &HttpClient, domain: &str) -> ScoutResult<Vec<u8>> {
        let url = format!("{}/{}", self.base, domain);
        let resp = http.get_bytes(&url).await?;
        if !resp.is_success() {
            return Err(ScoutError::Provider(format!(
                "Clearbit returned status {}",
                resp.status
            )));
        }
        Ok(resp.bytes)
    }
}

/// Logo.dev image API, demo token tier.
pub struct LogoDev {
    base: String,
}

impl LogoDev {
    /// Point the provider at a different host. Tests aim this at a local
    /// mock server; production code never calls it.
    pub fn with_base(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

impl Default for LogoDev {
    fn default() -> Self {
        Self {
            base: LOGO_DEV_BASE.to_string(),
        }
    }
}

#[async_trait]
impl LogoProvider for LogoDev {
    fn name(&self) -> &'static str {
        "Logo.dev"
    }

    async fn fetch(&self, http: &HttpClient, domain: &str) -> ScoutResult<Vec<u8>> {
        let url = format!("{}/{}?token=pk_demo&size=512", self.base, domain);
        let resp = http.get_bytes(&url).await?;
        if !resp.is_success() {
            return Err(ScoutError::Provider(format!(
                "Logo.dev returned status {}",
                resp.status
            )));
        }
        Ok(resp.bytes)
    }
}

/// Brandfetch CDN endpoint. Keyless access works for some popular brands only.
pub struct Brandfetch {
    base: String,
}

impl Brandfetch {
    /// Point the provider at a different host. Tests aim this at a local
    /// mock server; production code never calls it.
    pub fn with_base(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

impl Default for Brandfetch {
    fn default() -> Self {
        Self {
            base: BRANDFETCH_BASE.to_string(),
        }
    }
}

#[async_trait]
impl LogoProvider for Brandfetch {
    fn name(&self) -> &'static str {
        "Brandfetch"
    }

    async fn fetch(&self, http: &HttpClient, domain: &str) -> ScoutResult<Vec<u8>> {
        let url = format!("{}/{}/w/512/h/512", self.base, domain);
        let resp = http.get_bytes(&url).await?;
        if !resp.is_success() {
            return Err(ScoutError::Provider(format!(
                "Brandfetch returned status {}",
                resp.status
            )));
        }
        Ok(resp.bytes)
    }
}

/// Google's favicon service. Last resort: always answers, but often with a
/// tiny placeholder, hence the byte floor.
pub struct GoogleFavicons {
    base: String,
}

impl GoogleFavicons {
    /// Point the provider at a different host. Tests aim this at a local
    /// mock server; production code never calls it.
    pub fn with_base(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

impl Default for GoogleFavicons {
    fn default() -> Self {
        Self {
            base: GOOGLE_FAVICON_BASE.to_string(),
        }
    }
}

#[async_trait]
impl LogoProvider for GoogleFavicons {
    fn name(&self) -> &'static str {
        "Google Favicons"
    }

    async fn fetch(&self, http: &HttpClient, domain: &str) -> ScoutResult<Vec<u8>> {
        let url = format!("{}/s2/favicons?domain={}&sz=256", self.base, domain);
        let resp = http.get_bytes(&url).await?;
        if !resp.is_success() {
            return Err(ScoutError::Provider(format!(
                "Google Favicons returned status {}",
                resp.status
            )));
        }
        if resp.bytes.len() <= MIN_FAVICON_BYTES {
            return Err(ScoutError::Provider(format!(
                "Google Favicons returned a placeholder icon ({} bytes)",
                resp.bytes.len()
            )));
        }
        Ok(resp.bytes)
    }
}
