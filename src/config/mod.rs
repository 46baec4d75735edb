// src/config/mod.rs

pub mod consts;
pub mod leagues;
pub mod options;

pub use leagues::LeagueCatalog;
pub use options::{AppOptions, CleaningPolicy, ExportFormat, ExportOptions, ScrapeOptions};
