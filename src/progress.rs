// src/progress.rs
/// Progress reporting for the photo download batch.
/// Frontends (the CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of contestants that have a photo.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A worker began fetching `_url` into `_filename`.
    fn item_started(&mut self, _url: &str, _filename: &str) {}

    /// A photo was saved as `_filename`.
    fn item_done(&mut self, _url: &str, _filename: &str) {}

    /// A photo was already on disk.
    fn item_skipped(&mut self, _filename: &str) {}

    /// A photo could not be fetched; the batch carries on.
    fn item_failed(&mut self, _url: &str, _err: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
