// src/scrape/mod.rs
mod page;
mod rate_limit;

pub use page::{scrape_page, scrape_page_with};
pub use rate_limit::{page_limiter, RateLimiter};
