// Copyright 2026 ESG Scout Contributors
// SPDX-License-Identifier: Apache-2.0

//! ESG rating scraper and company logo fetcher.
//!
//! Two shallow pipelines share this crate. The rating pipeline renders
//! company pages in headless Chrome and mines the visible text for GRESB
//! and Sustainalytics figures with ordered regex cascades, exporting flat
//! CSV/JSON/XLSX files. The logo pipeline walks a ladder of public logo
//! endpoints per company and normalizes the first hit to an RGBA PNG.
//!
//! Everything runs sequentially: one target at a time, one browser for the
//! whole run, warn-and-continue on anything transient.

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod logos;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod targets;
