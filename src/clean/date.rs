// src/clean/date.rs
use chrono::NaiveDate;

pub const ISO_DATE: &str = "%Y-%m-%d";

/// Shapes tried after the bare-year check, in order.
const DATE_FORMATS: &[&str] = &[
    "%b %d, %Y", // Jun 30, 2024
    "%d/%m/%Y",  // 30/06/2024
    ISO_DATE,    // 2024-06-30
];

/// Parse one of: `"2024"`, `"Jun 30, 2024"`, `"30/06/2024"`, `"2024-06-30"`.
/// A bare year maps to January 1st. First shape that parses wins.
pub fn parse_date(date_str: &str) -> Option<NaiveDate> {
    let s = date_str.trim();

    if let Some(d) = parse_bare_year(s) {
        return Some(d);
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    logw!("Could not parse date: {date_str:?}");
    None
}

fn parse_bare_year(s: &str) -> Option<NaiveDate> {
    if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = s.parse().ok()?;
    NaiveDate::from_ymd_opt(year, 1, 1)
}

pub fn format_date(date: NaiveDate, fmt: &str) -> String {
    date.format(fmt).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn parses_each_shape() {
        assert_eq!(parse_date("2024"), ymd(2024, 1, 1));
        assert_eq!(parse_date("Jun 30, 2024"), ymd(2024, 6, 30));
        assert_eq!(parse_date("Jul 1, 2021"), ymd(2021, 7, 1));
        assert_eq!(parse_date("30/06/2024"), ymd(2024, 6, 30));
        assert_eq!(parse_date("2024-06-30"), ymd(2024, 6, 30));
        assert_eq!(parse_date("  2025-01-31 \n"), ymd(2025, 1, 31));
    }

    #[test]
    fn day_first_slash_form() {
        // 02/03 is 2 March, never 3 February
        assert_eq!(parse_date("02/03/2020"), ymd(2020, 3, 2));
        assert_eq!(parse_date("06/30/2024"), None);
    }

    #[test]
    fn junk_is_none() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("soon"), None);
        assert_eq!(parse_date("20245"), None);
        assert_eq!(parse_date("Feb 30, 2024"), None);
    }

    #[test]
    fn formats() {
        let d = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        assert_eq!(format_date(d, ISO_DATE), "2025-06-30");
        assert_eq!(format_date(d, "%d/%m/%Y"), "30/06/2025");
    }
}
