//! Built-in company tables for the two rating sources.
//!
//! Both tables are embedded at compile time via `include_str!` so the binary
//! is self-contained. Table order is preserved end to end: companies are
//! scraped, reported, and exported in exactly the order they appear here.

use crate::model::Target;

/// Data-centre operators tracked against GRESB, with per-company candidate
/// sustainability pages.
const GRESB_JSON: &str = include_str!("gresb_companies.json");

/// Companies with a public Sustainalytics rating page. One canonical URL each.
const SUSTAINALYTICS_JSON: &str = include_str!("sustainalytics_companies.json");

/// The built-in GRESB target list, in table order.
pub fn gresb_targets() -> Vec<Target> {
    serde_json::from_str(GRESB_JSON).expect("embedded GRESB company table is valid JSON")
}

/// The built-in Sustainalytics target list, in table order.
pub fn sustainalytics_targets() -> Vec<Target> {
    serde_json::from_str(SUSTAINALYTICS_JSON)
        .expect("embedded Sustainalytics company table is valid JSON")
}
