//! Crate-wide error and result types.

/// Errors raised while scraping ratings or fetching logos.
///
/// Only setup-class failures (browser launch, malformed input) abort a run.
/// Per-target failures are caught at the loop level, logged, and recorded as
/// empty results.
#[derive(thiserror::Error, Debug)]
pub enum ScoutError {
    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Navigation error: {0}")]
    Navigation(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Provider rejected request: {0}")]
    Provider(String),

    #[error("All logo providers exhausted for {0}")]
    ProvidersExhausted(String),
}

/// Convenience result type.
pub type ScoutResult<T> = Result<T, ScoutError>;
