// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;

/// Where the procedures read from and write to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SitePaths {
    pub data_dir: PathBuf,
    pub out_dir: PathBuf,
    pub images_dir: PathBuf,
}

impl Default for SitePaths {
    fn default() -> Self {
        Self::rooted(Path::new("."))
    }
}

impl SitePaths {
    /// Standard `data/` + `dist/` + `dist/images/` layout under `root`.
    pub fn rooted(root: &Path) -> Self {
        let out_dir = root.join(DEFAULT_OUT_DIR);
        Self {
            data_dir: root.join(DEFAULT_DATA_DIR),
            images_dir: out_dir.join(IMAGES_SUBDIR),
            out_dir,
        }
    }

    pub fn season_data_file(&self, site: &SiteOptions, season: u32) -> PathBuf {
        self.data_dir.join(format!("{}{}.json", site.data_prefix, season))
    }

    pub fn season_page(&self, season: u32) -> PathBuf {
        self.out_dir.join(season_page_name(season))
    }

    pub fn index_page(&self) -> PathBuf {
        self.out_dir.join(INDEX_FILE)
    }

    pub fn log_file(&self) -> PathBuf {
        self.out_dir.join(LOG_FILE)
    }
}

/// File name of a season page, also used as the link target on the index.
pub fn season_page_name(season: u32) -> String {
    format!("season{season}.html")
}

/// Naming shared by every page and data file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteOptions {
    pub title: String,
    pub data_prefix: String,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            title: s!(SHOW_TITLE),
            data_prefix: s!(DATA_FILE_PREFIX),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    /// Concurrent downloads; 1 keeps the batch strictly sequential.
    pub workers: usize,
    pub timeout: Duration,
    pub max_redirects: usize,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            workers: WORKERS,
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            max_redirects: MAX_REDIRECTS,
            user_agent: s!(USER_AGENT),
        }
    }
}
