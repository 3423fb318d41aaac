//! Browser abstraction for rendering JavaScript-heavy pages to visible text.
//!
//! Rating figures are drawn client-side on most of the pages we visit, so a
//! plain HTTP GET never sees them. `PageSource` abstracts the engine; the
//! production implementation drives headless Chrome via chromiumoxide. The
//! browser is acquired once per run, reused for every page, and released
//! exactly once at the end (`close` consumes the source).

pub mod chromium;

pub use chromium::{find_chrome, ChromiumSource};

use crate::error::ScoutResult;
use async_trait::async_trait;
use std::time::Duration;

/// A source of rendered page text.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Navigate to `url`, wait for the page to settle, and return its visible
    /// text (what `document.body.innerText` sees).
    async fn page_text(&self, url: &str, timeout: Duration) -> ScoutResult<String>;

    /// Release the underlying browser.
    async fn close(self: Box<Self>) -> ScoutResult<()>;
}
