//! Chrome-backed page source using chromiumoxide.

use super::PageSource;
use crate::config::{ScrapeSettings, CHROME_ENV};
use crate::error::{ScoutError, ScoutResult};
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::page::Page;
use futures::StreamExt;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, warn};

/// Desktop user-agent presented to the scraped sites.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
                          AppleWebKit/537.36 (KHTML, like Gecko) \
                          Chrome/120.0.0.0 Safari/537.36";

/// Find the Chrome/Chromium binary path.
pub fn find_chrome() -> Option<PathBuf> {
    // 1. ESG_SCOUT_CHROME env
    if let Ok(p) = std::env::var(CHROME_ENV) {
        let path = PathBuf::from(&p);
        if path.exists() {
            return Some(path);
        }
    }

    // 2. System PATH
    for name in ["google-chrome", "google-chrome-stable", "chromium", "chromium-browser"] {
        if let Ok(path) = which::which(name) {
            return Some(path);
        }
    }

    // 3. Common install locations
    let common = [
        "/usr/bin/google-chrome",
        "/usr/bin/google-chrome-stable",
        "/usr/bin/chromium-browser",
        "/usr/bin/chromium",
        "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
    ];
    for p in common {
        let path = PathBuf::from(p);
        if path.exists() {
            return Some(path);
        }
    }

    None
}

/// Page source backed by a headless Chrome instance.
///
/// Launching is the expensive part; one `ChromiumSource` serves every page of
/// a run. Each `page_text` call opens a fresh tab and closes it afterwards.
pub struct ChromiumSource {
    browser: Browser,
    settle_delay: Duration,
}

impl ChromiumSource {
    /// Launch Chrome with the run's settings.
    pub async fn launch(settings: &ScrapeSettings) -> ScoutResult<Self> {
        let chrome_path = find_chrome().ok_or_else(|| {
            ScoutError::Browser(format!(
                "Chrome not found. Install Google Chrome or Chromium, or set {CHROME_ENV} to the binary path."
            ))
        })?;
        debug!("using Chrome at {}", chrome_path.display());

        let mut builder = BrowserConfig::builder()
            .chrome_executable(chrome_path)
            .arg("--disable-gpu")
            .arg("--no-sandbox")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-extensions")
            .arg("--disable-background-networking")
            .arg(format!("--user-agent={USER_AGENT}"));
        if settings.headless {
            builder = builder.arg("--headless=new");
        } else {
            builder = builder.with_head();
        }
        let config = builder
            .build()
            .map_err(|e| ScoutError::Browser(format!("failed to build browser config: {e}")))?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| ScoutError::Browser(format!("failed to launch Chrome: {e}")))?;

        // The CDP event stream must be driven or the connection stalls.
        tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                let _ = event;
            }
        });

        Ok(Self {
            browser,
            settle_delay: settings.settle_delay,
        })
    }

    async fn render_text(&self, page: &Page, url: &str, timeout: Duration) -> ScoutResult<String> {
        let nav = tokio::time::timeout(timeout, page.goto(url)).await;
        match nav {
            Ok(Ok(_)) => {}
            Ok(Err(e)) => {
                return Err(ScoutError::Navigation(format!("navigation failed for {url}: {e}")))
            }
            Err(_) => {
                return Err(ScoutError::Navigation(format!(
                    "navigation timed out after {}ms for {url}",
                    timeout.as_millis()
                )))
            }
        }

        let _ = page.wait_for_navigation().await;
        // Client-side rendering keeps drawing after the load event fires.
        tokio::time::sleep(self.settle_delay).await;

        let result = page
            .evaluate("document.body.innerText")
            .await
            .map_err(|e| ScoutError::Navigation(format!("text extraction failed for {url}: {e}")))?;

        let text: String = result
            .into_value()
            .map_err(|e| ScoutError::Navigation(format!("non-text page body for {url}: {e:?}")))?;

        Ok(text)
    }
}

#[async_trait]
impl PageSource for ChromiumSource {
    async fn page_text(&self, url: &str, timeout: Duration) -> ScoutResult<String> {
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(|e| ScoutError::Browser(format!("failed to open page: {e}")))?;

        let result = self.render_text(&page, url, timeout).await;
        let _ = page.close().await;
        result
    }

    async fn close(self: Box<Self>) -> ScoutResult<()> {
        let mut browser = self.browser;
        if let Err(e) = browser.close().await {
            warn!("browser close failed: {e}");
        }
        let _ = browser.wait().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires Chrome to be installed
    async fn test_chromium_renders_visible_text() {
        let settings = ScrapeSettings {
            settle_delay: Duration::from_millis(200),
            ..Default::default()
        };
        let source = ChromiumSource::launch(&settings)
            .await
            .expect("failed to launch Chrome");

        let text = source
            .page_text(
                "data:text/html,<h1>GRESB Score: 85</h1><p>5 star GRESB</p>",
                Duration::from_secs(10),
            )
            .await
            .expect("failed to render page");

        assert!(text.contains("GRESB Score: 85"));
        assert!(text.contains("5 star GRESB"));

        Box::new(source).close().await.expect("failed to close browser");
    }
}
