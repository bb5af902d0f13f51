// src/error.rs
use std::io;
use std::path::PathBuf;

/// Errors that stop a whole procedure (fetch batch, page or index generation).
#[derive(thiserror::Error, Debug)]
pub enum SiteError {
    #[error("data file not found: {}", .0.display())]
    DataFileNotFound(PathBuf),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed season data in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("contestants {first:?} and {second:?} both map to image file {filename}")]
    FilenameCollision {
        filename: String,
        first: String,
        second: String,
    },

    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("invalid season file pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("could not build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

impl SiteError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SiteError::Io { path: path.into(), source }
    }
}

/// Why a single photo could not be saved. Never fatal for the batch.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("invalid url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to download {url} - status {status}")]
    Status { url: String, status: u16 },

    #[error("gave up on {url} after {hops} redirects")]
    TooManyRedirects { url: String, hops: usize },

    #[error("another download is already writing {}", .0.display())]
    InProgress(PathBuf),

    #[error("writing {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
