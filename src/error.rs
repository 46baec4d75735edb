// src/error.rs
use std::io;
use thiserror::Error;

/// A valid-looking row that still can't be read. The row is dropped.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("player link has no name attribute")]
    MissingName,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssemblyError {
    /// Caller passed an id that isn't in the catalog. Wiring bug, not bad data.
    #[error("unknown league id {0}")]
    UnknownLeague(u32),

    #[error("player name {0:?} is empty after cleaning")]
    EmptyName(String),
}

#[derive(Debug, Error)]
pub enum SinkError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Csv(#[from] ::csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("unknown league id {0}")]
    UnknownLeague(u32),
    #[error("page source: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Sink(#[from] SinkError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config: {0}")]
    Io(#[from] io::Error),
    #[error("parsing config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("writing config: {0}")]
    TomlWrite(#[from] toml::ser::Error),
}
