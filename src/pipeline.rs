// Copyright 2026 ESG Scout Contributors
// SPDX-License-Identifier: Apache-2.0

//! Rating pipeline run context.
//!
//! One browser, one extractor, one growing list of records. Targets are
//! processed strictly one at a time; per-URL failures are logged and the
//! next candidate URL is tried, so a flaky page can never lose the whole
//! run. Every target produces a record, rated or not.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{info, warn};

use crate::config::ScrapeSettings;
use crate::extract::RatingExtractor;
use crate::model::{RatingRecord, Target};
use crate::render::PageSource;

/// Interrupt flag set on Ctrl-C.
///
/// Callers check it between targets: an interrupt abandons the remaining
/// queue but keeps already-collected records, so a long run cut short
/// still exports what it found.
pub fn interrupt_flag() -> Arc<AtomicBool> {
    let flag = Arc::new(AtomicBool::new(false));
    let watcher = flag.clone();
    tokio::spawn(async move {
        let _ = tokio::signal::ctrl_c().await;
        info!("received interrupt, finishing current target");
        watcher.store(true, Ordering::SeqCst);
    });
    flag
}

/// State for one scrape run: the browser handle, the extractor, and the
/// records collected so far.
pub struct RatingRun {
    source: Box<dyn PageSource>,
    extractor: Box<dyn RatingExtractor>,
    settings: ScrapeSettings,
    records: Vec<RatingRecord>,
}

impl RatingRun {
    pub fn new(
        source: Box<dyn PageSource>,
        extractor: Box<dyn RatingExtractor>,
        settings: ScrapeSettings,
    ) -> Self {
        Self {
            source,
            extractor,
            settings,
            records: Vec::new(),
        }
    }

    /// Process one target: try its candidate URLs in order, keep the first
    /// page whose text yields any rating field, and record the outcome.
    ///
    /// Fetch errors are per-URL and recoverable; the returned record is a
    /// copy of what was appended to the run.
    pub async fn process(&mut self, target: &Target) -> RatingRecord {
        let mut record = RatingRecord::for_target(target);

        for url in &target.urls {
            info!(url = url.as_str(), "loading page");
            let text = match self
                .source
                .page_text(url, self.settings.page_timeout)
                .await
            {
                Ok(text) => text,
                Err(err) => {
                    warn!(url = url.as_str(), error = %err, "page fetch failed");
                    continue;
                }
            };

            let fields = self.extractor.extract(&text);
            if fields.is_empty() {
                info!(url = url.as_str(), "no rating fields on page");
                continue;
            }

            record.apply(fields, url);
            break;
        }

        self.records.push(record.clone());
        record
    }

    /// Records collected so far, in processing order.
    pub fn records(&self) -> &[RatingRecord] {
        &self.records
    }

    /// Release the browser and hand back everything collected. Close
    /// failures are logged, never allowed to eat the records.
    pub async fn finish(self) -> Vec<RatingRecord> {
        if let Err(err) = self.source.close().await {
            warn!(error = %err, "browser close failed");
        }
        self.records
    }
}
