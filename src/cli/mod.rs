//! CLI subcommand implementations for the esg-scout binary.

pub mod doctor;
pub mod gresb_cmd;
pub mod logos_cmd;
pub mod sustainalytics_cmd;
