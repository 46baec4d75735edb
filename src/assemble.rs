// src/assemble.rs
//
// RawRow + league catalog → PlayerRecord.
//
// Cleaning policy:
//   Eager    (default) values are typed here. Currency → f64 (range-checked),
//            age → i64 (range-checked), dates → ISO text, height/weight
//            → leading number, free-text columns stay text, the rest go
//            through `clean_numeric_stat`.
//            Currency/date text that won't parse is kept as-is; a value that
//            parses but fails a range check becomes Null.
//   Deferred  every value stays the raw cell text; name and positions verbatim.

use crate::clean::{
    clean_name, clean_numeric_stat, clean_position, convert_currency, format_date,
    leading_number, parse_date, validate_age_text, validate_value, ISO_DATE,
};
use crate::config::consts::{AGE_CODE, CURRENCY_CODES, DATE_CODES, MEASURE_CODES, TEXT_CODES};
use crate::config::{CleaningPolicy, LeagueCatalog};
use crate::error::AssemblyError;
use crate::model::{Contract, FieldMap, FieldValue, PlayerRecord, RawFieldMap, RawRow};

pub fn assemble_record(
    raw: &RawRow,
    catalog: &LeagueCatalog,
    policy: CleaningPolicy,
) -> Result<PlayerRecord, AssemblyError> {
    let league = catalog
        .get(raw.league_id)
        .ok_or(AssemblyError::UnknownLeague(raw.league_id))?;

    let contract = raw
        .contract_text
        .as_deref()
        .map(Contract::from_text)
        .unwrap_or_default();

    let (name, positions, fields) = match policy {
        CleaningPolicy::Eager => (
            clean_name(&raw.name),
            clean_positions(&raw.positions),
            clean_fields(&raw.fields),
        ),
        CleaningPolicy::Deferred => (
            raw.name.trim().to_string(),
            raw.positions.clone(),
            raw_fields(&raw.fields),
        ),
    };

    if name.is_empty() {
        return Err(AssemblyError::EmptyName(raw.name.clone()));
    }

    Ok(PlayerRecord {
        name,
        positions,
        league_name: league.name.clone(),
        league_country: league.country.clone(),
        contract,
        fields,
        season: None,
    })
}

fn clean_positions(positions: &[String]) -> Vec<String> {
    positions
        .iter()
        .filter_map(|p| {
            let cleaned = clean_position(p);
            if cleaned.is_none() {
                logw!("Unrecognised position {p:?}; dropped");
            }
            cleaned
        })
        .collect()
}

fn raw_fields(fields: &RawFieldMap) -> FieldMap {
    fields
        .iter()
        .map(|(code, raw)| (code.clone(), FieldValue::Text(raw.clone())))
        .collect()
}

fn clean_fields(fields: &RawFieldMap) -> FieldMap {
    fields
        .iter()
        .map(|(code, raw)| (code.clone(), clean_field(code, raw)))
        .collect()
}

/// Type one cell by its column code.
pub fn clean_field(code: &str, raw: &str) -> FieldValue {
    if CURRENCY_CODES.contains(&code) {
        return match convert_currency(raw) {
            Some(v) => validate_value(v).map_or(FieldValue::Null, FieldValue::Float),
            None => FieldValue::Text(s!(raw)),
        };
    }
    if DATE_CODES.contains(&code) {
        return match parse_date(raw) {
            Some(d) => FieldValue::Text(format_date(d, ISO_DATE)),
            None => FieldValue::Text(s!(raw)),
        };
    }
    if code == AGE_CODE {
        return validate_age_text(raw).map_or(FieldValue::Null, FieldValue::Int);
    }
    if MEASURE_CODES.contains(&code) {
        return leading_number(raw);
    }
    if TEXT_CODES.contains(&code) {
        return FieldValue::Text(s!(raw));
    }
    clean_numeric_stat(raw)
}
