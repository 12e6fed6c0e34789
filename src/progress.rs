// src/progress.rs
use std::path::Path;

/// Lightweight progress reporting for batch decoding.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of games.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One game decoded; `warnings` is how many recoverable issues it had.
    fn item_done(&mut self, _path: &Path, _warnings: usize) {}

    /// One game failed; the batch continues.
    fn item_failed(&mut self, _path: &Path, _err: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
