// src/progress.rs
/// Progress reporting for long-running work (paging through a league, exporting).
/// The CLI implements this to print status; tests count calls.
pub trait Progress {
    /// Called at the start with the number of leagues (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one page is done: its offset and how many records it gave.
    fn page_done(&mut self, _league_id: u32, _offset: u32, _records: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
