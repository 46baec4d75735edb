// src/scrape/page.rs
use scraper::Html;

use super::rate_limit::{page_limiter, RateLimiter};
use crate::assemble::assemble_record;
use crate::config::{CleaningPolicy, LeagueCatalog};
use crate::error::ScrapeError;
use crate::model::PlayerRecord;
use crate::specs::players::extract_rows;

/// Scrape one page under the process-wide budget (30 pages / 60 s).
///
/// Rows that fail to extract or assemble are logged and skipped; the rest
/// of the page still comes back. An empty Vec means either an empty page or
/// every row failed; use `has_next_page` to decide whether to keep paging.
///
/// An id missing from `catalog` is a wiring bug and fails the whole call.
pub fn scrape_page(
    doc: &Html,
    league_id: u32,
    catalog: &LeagueCatalog,
    policy: CleaningPolicy,
) -> Result<Vec<PlayerRecord>, ScrapeError> {
    scrape_page_with(page_limiter(), doc, league_id, catalog, policy)
}

/// [`scrape_page`] against an explicit limiter.
pub fn scrape_page_with(
    limiter: &RateLimiter,
    doc: &Html,
    league_id: u32,
    catalog: &LeagueCatalog,
    policy: CleaningPolicy,
) -> Result<Vec<PlayerRecord>, ScrapeError> {
    limiter.acquire();

    let league = catalog
        .get(league_id)
        .ok_or(ScrapeError::UnknownLeague(league_id))?;

    let rows = extract_rows(doc, league_id);
    logf!("{}: found {} player rows to process", league.display(), rows.len());

    let mut records = Vec::with_capacity(rows.len());
    for raw in &rows {
        match assemble_record(raw, catalog, policy) {
            Ok(rec) => records.push(rec),
            Err(e) => logw!("Skipping player row {:?}: {e}", raw.name),
        }
    }

    logf!("{}: processed {} players", league.display(), records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::config::leagues::catalog;
    use crate::specs::players::parse_page;

    fn limiter() -> RateLimiter {
        RateLimiter::new(100, Duration::from_secs(1))
    }

    #[test]
    fn bad_rows_do_not_sink_the_page() {
        let doc = parse_page(r#"<table>
            <tr><td><a href="/player/1/" data-tippy-content="Good One">g</a><span class="pos">CB</span></td></tr>
            <tr><td><a href="/player/2/" data-tippy-content="손흥민">k</a><span class="pos">LW</span></td></tr>
            <tr><td><a href="/player/3/">no name</a><span class="pos">GK</span></td></tr>
        </table>"#);
        let recs = scrape_page_with(&limiter(), &doc, 13, catalog(), CleaningPolicy::Eager).unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].name, "Good One");
    }

    #[test]
    fn unknown_league_fails_the_call() {
        let doc = parse_page("<table></table>");
        let err = scrape_page_with(&limiter(), &doc, 1, catalog(), CleaningPolicy::Eager).unwrap_err();
        assert!(matches!(err, ScrapeError::UnknownLeague(1)));
    }

    #[test]
    fn each_call_spends_one_slot() {
        let rl = limiter();
        let doc = parse_page("<table></table>");
        for _ in 0..3 {
            assert!(scrape_page_with(&rl, &doc, 13, catalog(), CleaningPolicy::Eager).unwrap().is_empty());
        }
        assert_eq!(rl.in_window(), 3);
    }
}
