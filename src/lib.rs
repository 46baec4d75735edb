// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod model;

pub mod clean;
pub mod specs;
pub mod assemble;
pub mod scrape;

pub mod labels;
pub mod csv;
pub mod file;
pub mod combine;
pub mod progress;
pub mod runner;

#[cfg(feature = "cli")]
pub mod cli;

pub use assemble::assemble_record;
pub use config::leagues::catalog;
pub use config::{CleaningPolicy, LeagueCatalog};
pub use model::{Contract, FieldValue, League, PlayerRecord, RawRow, SeasonTag};
pub use scrape::{scrape_page, RateLimiter};
pub use specs::players::extract_rows;
