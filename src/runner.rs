// src/runner.rs
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::{
    config::{consts::PAGE_SIZE, AppOptions, LeagueCatalog, ScrapeOptions},
    error::ScrapeError,
    file::export_records,
    model::PlayerRecord,
    progress::Progress,
    scrape::{page_limiter, scrape_page_with, RateLimiter},
    specs::players::{has_next_page, parse_page},
};

/// Where listing pages come from. `Ok(None)` means the page does not exist,
/// which ends pagination for that league.
pub trait PageSource {
    fn fetch(&mut self, league_id: u32, offset: u32) -> Result<Option<String>, ScrapeError>;
}

/// Pages saved on disk as `<root>/<league_id>/<offset>.html`.
pub struct DirPageSource {
    root: PathBuf,
}

impl DirPageSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn page_path(&self, league_id: u32, offset: u32) -> PathBuf {
        self.root.join(league_id.to_string()).join(format!("{offset}.html"))
    }

    pub fn root(&self) -> &Path { &self.root }
}

impl PageSource for DirPageSource {
    fn fetch(&mut self, league_id: u32, offset: u32) -> Result<Option<String>, ScrapeError> {
        let path = self.page_path(league_id, offset);
        match fs::read_to_string(&path) {
            Ok(markup) => Ok(Some(markup)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub leagues_done: usize,
    pub leagues_failed: usize,
    pub records: usize,
    pub files_written: Vec<PathBuf>,
}

/// Page through one league under the process-wide rate limit.
pub fn scrape_league(
    source: &mut dyn PageSource,
    league_id: u32,
    catalog: &LeagueCatalog,
    options: &ScrapeOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<Vec<PlayerRecord>, ScrapeError> {
    scrape_league_with(page_limiter(), source, league_id, catalog, options, progress)
}

/// Offsets 0, 60, 120, ... until a page is missing, yields no records, has no
/// `Next` link, or `max_pages` is reached. Every record gets `options.season`.
pub fn scrape_league_with(
    limiter: &RateLimiter,
    source: &mut dyn PageSource,
    league_id: u32,
    catalog: &LeagueCatalog,
    options: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<PlayerRecord>, ScrapeError> {
    let league = catalog
        .get(league_id)
        .ok_or(ScrapeError::UnknownLeague(league_id))?;
    logf!("Scraping {}", league.display());

    let mut all = Vec::new();
    let mut pages = 0u32;
    let mut offset = 0u32;

    loop {
        if options.max_pages.is_some_and(|max| pages >= max) {
            logd!("{}: page limit {pages} reached", league.display());
            break;
        }
        let Some(markup) = source.fetch(league_id, offset)? else {
            logd!("{}: no page at offset {offset}", league.display());
            break;
        };
        let doc = parse_page(&markup);
        let records = scrape_page_with(limiter, &doc, league_id, catalog, options.cleaning)?;
        pages += 1;

        if let Some(p) = progress.as_deref_mut() {
            p.page_done(league_id, offset, records.len());
        }
        if records.is_empty() {
            logf!("{}: no more players found at offset {offset}", league.display());
            break;
        }
        all.extend(records);

        if !has_next_page(&doc) {
            break;
        }
        offset += PAGE_SIZE;
    }

    if let Some(tag) = &options.season {
        all = all.into_iter().map(|r| r.with_season(tag.clone())).collect();
    }
    logf!("{}: {} players over {pages} pages", league.display(), all.len());
    Ok(all)
}

/// Scrape and export each league in turn. A league that fails is logged and
/// counted; the rest still run.
pub fn run(
    source: &mut dyn PageSource,
    league_ids: &[u32],
    catalog: &LeagueCatalog,
    options: &AppOptions,
    mut progress: Option<&mut dyn Progress>,
) -> RunSummary {
    let mut summary = RunSummary::default();
    if let Some(p) = progress.as_deref_mut() {
        p.begin(league_ids.len());
    }

    for &id in league_ids {
        // Reborrow for this league only.
        let page_progress = progress.as_deref_mut().map(|p| p as &mut dyn Progress);
        let result = scrape_league(source, id, catalog, &options.scrape, page_progress)
            .and_then(|records| {
                // scrape_league already rejected unknown ids
                let Some(league) = catalog.get(id) else { return Ok((0, Vec::new())) };
                if records.is_empty() {
                    logw!("No data was scraped for {}", league.display());
                    return Ok((0, Vec::new()));
                }
                let files = export_records(&options.export, league, &records)?;
                Ok((records.len(), files))
            });

        match result {
            Ok((n, files)) => {
                summary.leagues_done += 1;
                summary.records += n;
                if let Some(p) = progress.as_deref_mut() {
                    for f in &files {
                        p.log(&format!("wrote {}", f.display()));
                    }
                }
                summary.files_written.extend(files);
            }
            Err(e) => {
                loge!("League {id} failed: {e}");
                summary.leagues_failed += 1;
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    summary
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::time::Duration;

    use super::*;
    use crate::config::leagues::catalog;
    use crate::model::SeasonTag;
    use crate::progress::NullProgress;

    /// In-memory pages keyed by offset, one league.
    struct MemSource(BTreeMap<u32, String>);

    impl PageSource for MemSource {
        fn fetch(&mut self, _league_id: u32, offset: u32) -> Result<Option<String>, ScrapeError> {
            Ok(self.0.get(&offset).cloned())
        }
    }

    fn page(names: &[&str], next: bool) -> String {
        let rows: String = names
            .iter()
            .map(|n| format!(r#"<tr><td><a href="/player/1/" data-tippy-content="{n}">x</a><span class="pos">ST</span></td><td data-col="oa">80</td></tr>"#))
            .collect();
        let link = if next { r#"<a href="?offset=60">Next</a>"# } else { "" };
        format!("<html><body><table>{rows}</table>{link}</body></html>")
    }

    fn limiter() -> RateLimiter {
        RateLimiter::new(100, Duration::from_secs(1))
    }

    #[derive(Default)]
    struct Counter { pages: Vec<(u32, usize)> }
    impl Progress for Counter {
        fn page_done(&mut self, _league_id: u32, offset: u32, records: usize) {
            self.pages.push((offset, records));
        }
    }

    #[test]
    fn follows_next_links_until_empty_page() {
        let mut src = MemSource(BTreeMap::from([
            (0, page(&["A", "B"], true)),
            (60, page(&["C"], true)),
            (120, page(&[], true)),
            (180, page(&["never"], false)),
        ]));
        let mut counter = Counter::default();
        let recs = scrape_league_with(&limiter(), &mut src, 13, catalog(), &ScrapeOptions::default(), Some(&mut counter)).unwrap();
        let names: Vec<&str> = recs.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(counter.pages, vec![(0, 2), (60, 1), (120, 0)]);
    }

    #[test]
    fn stops_without_next_link_or_at_page_limit() {
        let pages = BTreeMap::from([(0, page(&["A"], false)), (60, page(&["B"], false))]);
        let recs = scrape_league_with(&limiter(), &mut MemSource(pages), 13, catalog(), &ScrapeOptions::default(), Some(&mut NullProgress)).unwrap();
        assert_eq!(recs.len(), 1);

        let pages = BTreeMap::from([(0, page(&["A"], true)), (60, page(&["B"], true))]);
        let opts = ScrapeOptions { max_pages: Some(1), ..Default::default() };
        let recs = scrape_league_with(&limiter(), &mut MemSource(pages), 13, catalog(), &opts, None).unwrap();
        assert_eq!(recs.len(), 1);
    }

    #[test]
    fn season_tag_applied_to_every_record() {
        let pages = BTreeMap::from([(0, page(&["A", "B"], false))]);
        let tag = SeasonTag { year: 2022, version: s!("FIFA 23") };
        let opts = ScrapeOptions { season: Some(tag.clone()), ..Default::default() };
        let recs = scrape_league_with(&limiter(), &mut MemSource(pages), 13, catalog(), &opts, None).unwrap();
        assert!(recs.iter().all(|r| r.season.as_ref() == Some(&tag)));
    }

    #[test]
    fn unknown_league_fails_before_fetching() {
        let mut src = MemSource(BTreeMap::new());
        let err = scrape_league_with(&limiter(), &mut src, 424242, catalog(), &ScrapeOptions::default(), None).unwrap_err();
        assert!(matches!(err, ScrapeError::UnknownLeague(424242)));
    }

    #[test]
    fn missing_first_page_is_empty_not_error() {
        let recs = scrape_league_with(&limiter(), &mut MemSource(BTreeMap::new()), 13, catalog(), &ScrapeOptions::default(), None).unwrap();
        assert!(recs.is_empty());
    }
}
