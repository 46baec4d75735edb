// src/model.rs
//
// Canonical data shapes shared by the extractor, assembler and sinks.
//
// - RawRow:       what one valid <tr> yields before any cleaning.
// - PlayerRecord: what the assembler hands to a sink. Immutable once built;
//                 the only post-assembly change is attaching a SeasonTag.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clean;

/// Field code → raw cell text. Open set of codes (`"oa"`, `"pac"`, …).
pub type RawFieldMap = BTreeMap<String, String>;

/// Field code → cleaned value.
pub type FieldMap = BTreeMap<String, FieldValue>;

/// Static competition metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct League {
    pub id: u32,
    pub country: String,
    pub name: String,
}

impl League {
    /// `"Premier League (England)"`, the form written to the League column.
    pub fn display(&self) -> String {
        format!("{} ({})", self.name, self.country)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl Contract {
    /// `"<start> ~ <end>"`, or just `"<end>"`. Blank text gives an empty contract.
    pub fn from_text(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return Self::default();
        }
        match text.split_once('~') {
            Some((start, end)) => Self {
                start: non_empty(start),
                end: non_empty(end),
            },
            None => Self { start: None, end: Some(s!(text)) },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start.as_deref().and_then(clean::parse_date)
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end.as_deref().and_then(clean::parse_date)
    }
}

fn non_empty(s: &str) -> Option<String> {
    let t = s.trim();
    if t.is_empty() { None } else { Some(s!(t)) }
}

/// One player row as read from the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawRow {
    pub league_id: u32,
    pub name: String,
    pub positions: Vec<String>,
    pub contract_text: Option<String>,
    pub fields: RawFieldMap,
}

/// A cleaned cell value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
    Text(String),
    Null,
}

impl FieldValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Int(v) => Some(*v as f64),
            FieldValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(v) => write!(f, "{v}"),
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Null => Ok(()),
        }
    }
}

/// Historical snapshot marker, attached by the runner after assembly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonTag {
    pub year: u16,
    pub version: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub positions: Vec<String>,
    pub league_name: String,
    pub league_country: String,
    pub contract: Contract,
    pub fields: FieldMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<SeasonTag>,
}

impl PlayerRecord {
    pub fn with_season(mut self, tag: SeasonTag) -> Self {
        self.season = Some(tag);
        self
    }

    pub fn field(&self, code: &str) -> Option<&FieldValue> {
        self.fields.get(code)
    }

    /// `"Premier League (England)"`
    pub fn league_display(&self) -> String {
        format!("{} ({})", self.league_name, self.league_country)
    }

    /// Positions as displayed on the site, comma separated.
    pub fn positions_joined(&self) -> String {
        self.positions.join(", ")
    }
}
