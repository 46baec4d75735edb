// src/clean/currency.rs
use std::sync::OnceLock;

use regex::Regex;

const THOUSAND: f64 = 1_000.0;
const MILLION: f64 = 1_000_000.0;

/// Sign, any symbol (`€`, `$`, `US$`…), digits with optional `,` grouping, optional K/M.
/// Whitespace is removed before matching.
fn money_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?P<sign>[+-]?)[^\d.,+\-]*(?P<sign2>[+-]?)(?P<num>\d[\d,]*(?:\.\d+)?|\.\d+)(?P<unit>[KkMm]?)$")
            .expect("money regex")
    })
}

/// `"€5M"` → 5_000_000.0, `"€500K"` → 500_000.0, `"€1,500"` → 1_500.0.
pub fn convert_currency(value: &str) -> Option<f64> {
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();

    let Some(caps) = money_re().captures(&compact) else {
        logw!("Could not convert currency value {value:?}");
        return None;
    };

    let digits = caps["num"].replace(',', "");
    let Ok(amount) = digits.parse::<f64>() else {
        logw!("Could not convert currency value {value:?}");
        return None;
    };

    let scale = match &caps["unit"] {
        "M" | "m" => MILLION,
        "K" | "k" => THOUSAND,
        _ => 1.0,
    };
    let negative = &caps["sign"] == "-" || &caps["sign2"] == "-";
    let amount = amount * scale;

    Some(if negative { -amount } else { amount })
}

/// Inverse of [`convert_currency`]: picks the largest unit that applies.
/// `5_000_000.0` → `"€5.0M"`, `500_000.0` → `"€500K"`, `1_500.0` → `"€1,500"`.
pub fn format_currency(value: f64, symbol: Option<&str>) -> String {
    let sym = symbol.unwrap_or("");
    if value >= MILLION {
        format!("{sym}{:.1}M", value / MILLION)
    } else if value >= THOUSAND {
        format!("{sym}{:.0}K", value / THOUSAND)
    } else {
        format!("{sym}{}", group_thousands(value.round() as i64))
    }
}

fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 { out.push('-'); }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 { out.push(','); }
        out.push(ch);
    }
    out
}
