// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};
use serde_json::{Map, Value};

use crate::config::consts::{FILE_PREFIX, TIMESTAMP_FMT};
use crate::config::ExportOptions;
use crate::core::sanitize::sanitize_filename;
use crate::csv::{write_records, BASE_HEADERS, SEASON_HEADERS};
use crate::error::SinkError;
use crate::labels::column_title;
use crate::model::{FieldValue, League, PlayerRecord};

/// Where finished batches go. Format and destination are the sink's business.
pub trait RecordSink {
    fn write_batch(&mut self, records: &[PlayerRecord]) -> Result<(), SinkError>;

    /// Flush whatever was buffered. Returns the path written, if any.
    fn finish(&mut self) -> Result<Option<PathBuf>, SinkError>;
}

/// Buffers every batch, writes one CSV on `finish` (headers need the whole run).
pub struct CsvSink {
    path: PathBuf,
    rename: bool,
    records: Vec<PlayerRecord>,
}

impl CsvSink {
    pub fn new(path: PathBuf, rename: bool) -> Self {
        Self { path, rename, records: Vec::new() }
    }
}

impl RecordSink for CsvSink {
    fn write_batch(&mut self, records: &[PlayerRecord]) -> Result<(), SinkError> {
        self.records.extend_from_slice(records);
        Ok(())
    }

    fn finish(&mut self) -> Result<Option<PathBuf>, SinkError> {
        if self.records.is_empty() {
            return Ok(None);
        }
        ensure_parent(&self.path)?;
        let out = BufWriter::new(File::create(&self.path)?);
        write_records(out, &self.records, self.rename)?;
        logf!("Data saved to CSV: {}", self.path.display());
        self.records.clear();
        Ok(Some(self.path.clone()))
    }
}

/// Buffers every batch, writes one pretty JSON array on `finish`.
pub struct JsonSink {
    path: PathBuf,
    rename: bool,
    records: Vec<PlayerRecord>,
}

impl JsonSink {
    pub fn new(path: PathBuf, rename: bool) -> Self {
        Self { path, rename, records: Vec::new() }
    }
}

impl RecordSink for JsonSink {
    fn write_batch(&mut self, records: &[PlayerRecord]) -> Result<(), SinkError> {
        self.records.extend_from_slice(records);
        Ok(())
    }

    fn finish(&mut self) -> Result<Option<PathBuf>, SinkError> {
        if self.records.is_empty() {
            return Ok(None);
        }
        ensure_parent(&self.path)?;
        let rows: Vec<Value> = self.records.iter().map(|r| record_to_json(r, self.rename)).collect();
        let mut out = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut out, &rows)?;
        out.flush()?;
        logf!("Data saved to JSON: {}", self.path.display());
        self.records.clear();
        Ok(Some(self.path.clone()))
    }
}

/// Flat object with the same columns as the CSV export.
pub fn record_to_json(r: &PlayerRecord, rename: bool) -> Value {
    let opt = |v: &Option<String>| v.clone().map_or(Value::Null, Value::String);

    let mut obj = Map::new();
    let base = [
        Value::String(r.name.clone()),
        Value::String(r.positions_joined()),
        Value::String(r.league_display()),
        opt(&r.contract.start),
        opt(&r.contract.end),
    ];
    for (key, val) in BASE_HEADERS.iter().zip(base) {
        obj.insert(s!(*key), val);
    }
    if let Some(tag) = &r.season {
        obj.insert(s!(SEASON_HEADERS[0]), Value::from(tag.year));
        obj.insert(s!(SEASON_HEADERS[1]), Value::String(tag.version.clone()));
    }
    for (code, v) in &r.fields {
        obj.insert(column_title(code, rename), field_to_json(v));
    }
    Value::Object(obj)
}

fn field_to_json(v: &FieldValue) -> Value {
    match v {
        FieldValue::Int(i) => Value::from(*i),
        FieldValue::Float(f) => serde_json::Number::from_f64(*f).map_or(Value::Null, Value::Number),
        FieldValue::Text(s) => Value::String(s.clone()),
        FieldValue::Null => Value::Null,
    }
}

/// `<dir>/fifa_players_<League_Name>_<YYYYmmdd_HHMMSS>.<ext>`
pub fn output_path(dir: &Path, league: &League, at: DateTime<Local>, ext: &str) -> PathBuf {
    let stem = sanitize_filename(&league.name, league.id);
    dir.join(format!("{FILE_PREFIX}_{stem}_{}.{ext}", at.format(TIMESTAMP_FMT)))
}

/// Sinks for one league's export, per the configured format.
pub fn sinks_for(export: &ExportOptions, league: &League, at: DateTime<Local>) -> Vec<Box<dyn RecordSink>> {
    let mut sinks: Vec<Box<dyn RecordSink>> = Vec::new();
    if export.format.wants_csv() {
        let path = output_path(&export.out_dir, league, at, "csv");
        sinks.push(Box::new(CsvSink::new(path, export.rename_columns)));
    }
    if export.format.wants_json() {
        let path = output_path(&export.out_dir, league, at, "json");
        sinks.push(Box::new(JsonSink::new(path, export.rename_columns)));
    }
    sinks
}

/// Write one league's records to every configured format. Returns paths written.
pub fn export_records(
    export: &ExportOptions,
    league: &League,
    records: &[PlayerRecord],
) -> Result<Vec<PathBuf>, SinkError> {
    let mut written = Vec::new();
    for mut sink in sinks_for(export, league, Local::now()) {
        sink.write_batch(records)?;
        if let Some(p) = sink.finish()? {
            written.push(p);
        }
    }
    Ok(written)
}

pub fn ensure_directory(dir: &Path) -> Result<(), SinkError> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        )
        .into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<(), SinkError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_directory(parent),
        _ => Ok(()),
    }
}
