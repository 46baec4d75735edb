// src/config/consts.rs

// Local store
pub const STORE_DIR: &str = ".store";
pub const DEBUG_LOG_FILE: &str = "debug.log";
pub const CONFIG_FILE: &str = "sofifa_scrape.toml";

// Scrape
pub const PAGE_SIZE: u32 = 60; // rows per listing page; offsets step by this
pub const RATE_LIMIT_CALLS: usize = 30;
pub const RATE_LIMIT_WINDOW_SECS: u64 = 60;

// Cleaning
pub const CURRENCY_CODES: &[&str] = &["vl", "wg", "rc"]; // value, wage, release clause
pub const DATE_CODES: &[&str] = &["jt", "le"];           // joined team, loan end
pub const AGE_CODE: &str = "ae";
/// Height and weight: `"170cm / 5'7\""`, first unit only.
pub const MEASURE_CODES: &[&str] = &["hi", "wi"];
/// Free-text columns; never coerced to numbers.
pub const TEXT_CODES: &[&str] = &["pf", "bp", "aw", "dw", "bt", "hc"];

// Export
pub const DEFAULT_OUT_DIR: &str = "data";
pub const FILE_PREFIX: &str = "fifa_players";
pub const COMBINED_PREFIX: &str = "combined_fifa_players";
pub const DEDUP_PREFIX: &str = "dedup_";
pub const SOURCE_FILE_COL: &str = "Source_File";
pub const TIMESTAMP_FMT: &str = "%Y%m%d_%H%M%S";
