// src/clean/stats.rs
use std::sync::OnceLock;

use regex::Regex;

use crate::model::{FieldMap, FieldValue, RawFieldMap};

/// First number in the cell, sign included: `"170cm / 5'7\""` → `170`.
fn leading_number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*([+-]?\d+(?:\.\d+)?)").expect("leading number regex"))
}

/// Coerce one stat cell.
/// - `"45%"` → `Float(0.45)`
/// - digits with a `.` → `Float`, without → `Int` (other characters are stripped
///   first; a leading `-` is kept)
/// - anything else comes back as `Text`, unchanged
pub fn clean_numeric_stat(value: &str) -> FieldValue {
    if value.contains('%') {
        return match value.replace('%', "").trim().parse::<f64>() {
            Ok(pct) => FieldValue::Float(pct / 100.0),
            Err(_) => keep_text(value),
        };
    }

    let numeric: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let negative = value.trim_start().starts_with('-');
    let parsed = if numeric.contains('.') {
        numeric
            .parse::<f64>()
            .ok()
            .map(|f| FieldValue::Float(if negative { -f } else { f }))
    } else {
        numeric
            .parse::<i64>()
            .ok()
            .map(|i| FieldValue::Int(if negative { -i } else { i }))
    };
    parsed.unwrap_or_else(|| keep_text(value))
}

/// Compound cells that show one quantity in two units (`"72kg / 159lbs"`):
/// keep only the first number.
pub fn leading_number(value: &str) -> FieldValue {
    let Some(caps) = leading_number_re().captures(value) else {
        return keep_text(value);
    };
    let num = &caps[1];
    let parsed = if num.contains('.') {
        num.parse::<f64>().ok().map(FieldValue::Float)
    } else {
        num.parse::<i64>().ok().map(FieldValue::Int)
    };
    parsed.unwrap_or_else(|| keep_text(value))
}

/// Same as [`clean_numeric_stat`] but numbers already typed pass straight through.
pub fn clean_value(value: FieldValue) -> FieldValue {
    match value {
        FieldValue::Text(s) => clean_numeric_stat(&s),
        other => other,
    }
}

/// Run every entry of a raw field map through [`clean_numeric_stat`].
pub fn clean_stats(stats: &RawFieldMap) -> FieldMap {
    stats
        .iter()
        .map(|(code, raw)| (code.clone(), clean_numeric_stat(raw)))
        .collect()
}

fn keep_text(value: &str) -> FieldValue {
    logw!("Could not clean stat value {value:?}; keeping raw text");
    FieldValue::Text(s!(value))
}
