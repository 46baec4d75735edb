// src/specs/mod.rs
//! # Page specs
//!
//! Each spec encodes *where the ground truth lives in one page's HTML* and how
//! to read it robustly. Specs only read markup: no fetching, no cleaning, no
//! file I/O.
//!
//! ## Conventions
//! - Input is an already parsed `scraper::Html`; output is raw text shaped into
//!   small structs (`model::RawRow`). Typing happens later, in `assemble`.
//! - A row that doesn't look like data (header, ad, spacer) is skipped silently.
//!   A row that looks like data but can't be read is logged and dropped.
//!   Neither stops the page.
//! - Unknown columns are carried through untouched so a site change shows up
//!   as new keys, not as a crash.
//! - Specs are tested offline against inline HTML fixtures.
//!
//! ## Current specs
//! - `players` – the player listing table (`/players?...&lg=<id>&offset=<n>`).
pub mod players;
