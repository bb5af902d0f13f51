// src/config/consts.rs

// Site layout
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_OUT_DIR: &str = "dist";
pub const IMAGES_SUBDIR: &str = "images";
pub const INDEX_FILE: &str = "index.html";
pub const LOG_FILE: &str = "build.log";

// Data files: <prefix><season>.json
pub const DATA_FILE_PREFIX: &str = "traitors-s";
pub const SHOW_TITLE: &str = "The Traitors";

// Images
pub const DEFAULT_IMAGE_STEM: &str = "image";
pub const DEFAULT_IMAGE_EXT: &str = ".jpg";
pub const PART_SUFFIX: &str = ".part";

// Net
pub const USER_AGENT: &str = concat!("traitors_site/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
pub const MAX_REDIRECTS: usize = 10;

// Concurrency
pub const WORKERS: usize = 4;
