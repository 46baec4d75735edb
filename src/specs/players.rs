// src/specs/players.rs
//
// Player listing table. Row contract:
//   <tr>
//     <td> <a href="/player/..." data-tippy-content="Full Name">..</a>
//          <span class="pos">ST</span> <span class="pos">RW</span> </td>
//     <td> <div class="sub">Jul 1, 2021 ~ Jun 30, 2025</div> </td>
//     <td data-col="oa">91</td> <td data-col="vl">€25M</td> ...
//   </tr>

use std::sync::OnceLock;

use scraper::{ElementRef, Html, Selector};

use crate::core::html::{attr_of, first, parse_document, selector, text_of};
use crate::error::ExtractError;
use crate::model::{RawFieldMap, RawRow};

const NAME_ATTR: &str = "data-tippy-content";
const COLUMN_ATTR: &str = "data-col";
const NEXT_LINK_TEXT: &str = "Next";

struct Selectors {
    row: Selector,
    player_link: Selector,
    position: Selector,
    contract: Selector,
    cell: Selector,
    link: Selector,
}

fn selectors() -> &'static Selectors {
    static SEL: OnceLock<Selectors> = OnceLock::new();
    SEL.get_or_init(|| Selectors {
        row: selector("tr"),
        player_link: selector(r#"a[href*="player"]"#),
        position: selector("span.pos"),
        contract: selector("div.sub"),
        cell: selector("td[data-col]"),
        link: selector("a"),
    })
}

/// Parse raw page markup.
pub fn parse_page(markup: &str) -> Html {
    parse_document(markup)
}

/// All readable player rows on the page, in document order.
/// Zero rows is a normal result (end of pagination, or an empty league).
pub fn extract_rows(doc: &Html, league_id: u32) -> Vec<RawRow> {
    let sel = selectors();
    let mut rows = Vec::new();
    let mut candidates = 0usize;

    for (i, tr) in doc.select(&sel.row).enumerate() {
        if !is_player_row(tr) { continue; }
        candidates += 1;

        match extract_row(tr, league_id) {
            Ok(row) => rows.push(row),
            Err(e) => logw!("Row {i}: {e}; skipped"),
        }
    }

    logd!("League {league_id}: {} of {candidates} candidate rows extracted", rows.len());
    rows
}

/// A data row has a player link and at least one position label.
pub fn is_player_row(tr: ElementRef<'_>) -> bool {
    let sel = selectors();
    first(tr, &sel.player_link).is_some() && first(tr, &sel.position).is_some()
}

/// Read one row already known to satisfy [`is_player_row`].
pub fn extract_row(tr: ElementRef<'_>, league_id: u32) -> Result<RawRow, ExtractError> {
    let name = read_name(tr).ok_or(ExtractError::MissingName)?;

    Ok(RawRow {
        league_id,
        name,
        positions: read_positions(tr),
        contract_text: read_contract(tr),
        fields: read_fields(tr),
    })
}

/// Whether the pager offers a "Next" link. Paging stops when it doesn't.
pub fn has_next_page(doc: &Html) -> bool {
    doc.select(&selectors().link)
        .any(|a| text_of(a) == NEXT_LINK_TEXT)
}

/* ---------- helpers ---------- */

/// Tooltip on the first player link.
fn read_name(tr: ElementRef<'_>) -> Option<String> {
    first(tr, &selectors().player_link)
        .and_then(|a| attr_of(a, NAME_ATTR))
        .map(String::from)
}

/// Every non-empty position label, in order, duplicates kept.
fn read_positions(tr: ElementRef<'_>) -> Vec<String> {
    tr.select(&selectors().position)
        .map(text_of)
        .filter(|p| !p.is_empty())
        .collect()
}

fn read_contract(tr: ElementRef<'_>) -> Option<String> {
    first(tr, &selectors().contract).map(text_of)
}

/// `data-col` → cell text. Cells without the attribute never match the selector.
fn read_fields(tr: ElementRef<'_>) -> RawFieldMap {
    let mut fields = RawFieldMap::new();
    for td in tr.select(&selectors().cell) {
        if let Some(code) = attr_of(td, COLUMN_ATTR) {
            fields.insert(s!(code), text_of(td));
        }
    }
    fields
}
