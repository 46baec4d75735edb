// src/log.rs
//
// Logging goes through `tracing`. `init()` wires stderr plus an append-only
// debug log under the store dir, both stamped with time since start.
// The short macros below are what the rest of the crate calls.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::fmt::time::Uptime;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::consts::{DEBUG_LOG_FILE, STORE_DIR};

#[doc(hidden)]
pub use tracing as __tracing;

/// Install the global subscriber. Safe to call more than once; later calls are no-ops.
/// Filter comes from `RUST_LOG`, falling back to `default_filter` (e.g. `"info"`).
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let stderr_layer = fmt::layer()
        .with_timer(Uptime::default())
        .with_target(false)
        .with_writer(std::io::stderr);

    // The file layer is best-effort: no store dir, no file log.
    let file_layer = open_debug_log().map(|file| {
        fmt::layer()
            .with_timer(Uptime::default())
            .with_ansi(false)
            .with_writer(Mutex::new(file))
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init();
}

fn open_debug_log() -> Option<fs::File> {
    let dir = Path::new(STORE_DIR);
    fs::create_dir_all(dir).ok()?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(DEBUG_LOG_FILE))
        .ok()
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::__tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::__tracing::debug!($($arg)*)
    };
}

/// Warning-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        $crate::log::__tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::__tracing::error!($($arg)*)
    };
}
