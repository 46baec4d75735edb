// src/clean/mod.rs
//! Field cleaners: raw cell text in, typed value (or `None`) out.
//!
//! Every function here is pure apart from logging. Expected junk input never
//! errors; it comes back as `None` (or, for stats, the original text) with a
//! warning in the log so a site change shows up without killing a run.

mod currency;
mod date;
mod names;
mod stats;
mod validate;

pub use currency::{convert_currency, format_currency};
pub use date::{format_date, parse_date, ISO_DATE};
pub use names::{clean_name, clean_position, POSITION_SYNONYMS};
pub use stats::{clean_numeric_stat, clean_stats, clean_value, leading_number};
pub use validate::{
    validate_age, validate_age_text, validate_value, validate_value_text,
    AGE_RANGE, MAX_VALUE,
};
