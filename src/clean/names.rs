// src/clean/names.rs
use unicode_normalization::UnicodeNormalization;

use crate::core::sanitize::normalize_ws;

/// Long-form position words → site abbreviation.
pub const POSITION_SYNONYMS: &[(&str, &str)] = &[
    ("striker", "ST"),
    ("forward", "FW"),
    ("midfielder", "MF"),
    ("defender", "DF"),
    ("goalkeeper", "GK"),
];

/// Collapse whitespace, fold accents to ASCII (dropping what can't fold),
/// then title-case: `"  kylian   MBAPPÉ "` → `"Kylian Mbappe"`.
pub fn clean_name(name: &str) -> String {
    let folded: String = normalize_ws(name)
        .nfd()
        .filter(char::is_ascii)
        .collect();
    title_case(&normalize_ws(&folded))
}

/// Letters following a letter are lower-cased, any other letter upper-cased.
/// `"o'neil"` → `"O'Neil"`.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_letter = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_letter = true;
        } else {
            out.push(ch);
            prev_letter = false;
        }
    }
    out
}

/// `"st"` → `"ST"`, `"Striker"` → `"ST"`, `"winger"` → `None`.
pub fn clean_position(position: &str) -> Option<String> {
    let pos = position.trim().to_lowercase();

    if !pos.is_empty() && pos.chars().count() <= 3 && pos.chars().all(|c| c.is_ascii_alphabetic()) {
        return Some(pos.to_uppercase());
    }

    POSITION_SYNONYMS
        .iter()
        .find(|(word, _)| *word == pos)
        .map(|(_, abbr)| s!(*abbr))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_whitespace_and_case() {
        assert_eq!(clean_name("  lionel    messi "), "Lionel Messi");
        assert_eq!(clean_name("KEVIN DE BRUYNE"), "Kevin De Bruyne");
        assert_eq!(clean_name("n'golo kanté"), "N'Golo Kante");
    }

    #[test]
    fn name_diacritics_fold_or_drop() {
        assert_eq!(clean_name("Kylian Mbappé"), "Kylian Mbappe");
        assert_eq!(clean_name("Martin Ødegaard"), "Martin Degaard");
        assert_eq!(clean_name("Son 손흥민 Heung-min"), "Son Heung-Min");
        assert_eq!(clean_name("손흥민"), "");
        assert_eq!(clean_name(""), "");
    }

    #[test]
    fn short_codes_pass_upper_cased() {
        assert_eq!(clean_position("ST").as_deref(), Some("ST"));
        assert_eq!(clean_position(" cf ").as_deref(), Some("CF"));
        assert_eq!(clean_position("lwb").as_deref(), Some("LWB"));
    }

    #[test]
    fn long_words_map_through_synonyms() {
        assert_eq!(clean_position("striker").as_deref(), Some("ST"));
        assert_eq!(clean_position("Goalkeeper").as_deref(), Some("GK"));
        assert_eq!(clean_position("winger"), None);
        assert_eq!(clean_position("c1"), None);
        assert_eq!(clean_position("ét"), None);
        assert_eq!(clean_position(""), None);
    }
}
