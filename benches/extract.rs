// benches/extract.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sofifa_scrape::config::leagues::catalog;
use sofifa_scrape::scrape::{scrape_page_with, RateLimiter};
use sofifa_scrape::specs::players::{extract_rows, parse_page};
use sofifa_scrape::CleaningPolicy;

/// A full 60-row listing page with the usual column spread.
fn synthetic_page() -> String {
    let mut rows = String::new();
    for i in 0..60 {
        rows.push_str(&format!(
            r#"<tr><td><a href="/player/{i}/" data-tippy-content="Player Número {i}">p</a>
               <span class="pos">ST</span><span class="pos">LW</span></td>
               <td><a href="/team/1/">Club</a><div class="sub">Jul 1, 2021 ~ Jun 30, 2025</div></td>
               <td data-col="oa">{oa}</td><td data-col="pt">{pt}</td><td data-col="ae">{ae}</td>
               <td data-col="vl">€{vl}.5M</td><td data-col="wg">€{wg}K</td><td data-col="rc">€{rc}M</td>
               <td data-col="jt">Jul 1, 2021</td><td data-col="pf">Right</td><td data-col="hi">180cm</td>
               <td data-col="pac">{oa}</td><td data-col="sho">{pt}</td><td data-col="pas">70+2</td></tr>"#,
            oa = 60 + i % 30,
            pt = 70 + i % 25,
            ae = 18 + i % 20,
            vl = 1 + i % 90,
            wg = 5 + i,
            rc = 2 + i % 150,
        ));
    }
    format!(r#"<html><body><table><tbody>{rows}</tbody></table><a href="?offset=60">Next</a></body></html>"#)
}

fn bench_extract(c: &mut Criterion) {
    let markup = synthetic_page();
    let doc = parse_page(&markup);
    let limiter = RateLimiter::new(1_000_000, std::time::Duration::from_secs(1));

    c.bench_function("parse_page", |b| {
        b.iter(|| black_box(parse_page(black_box(&markup))))
    });

    c.bench_function("extract_rows", |b| {
        b.iter(|| black_box(extract_rows(black_box(&doc), 13).len()))
    });

    c.bench_function("scrape_page_eager", |b| {
        b.iter(|| {
            let recs = scrape_page_with(&limiter, black_box(&doc), 13, catalog(), CleaningPolicy::Eager);
            black_box(recs.map(|r| r.len()).unwrap_or(0))
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
