// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

pub mod file;
pub mod images;
pub mod index;
pub mod page;
pub mod progress;
pub mod season;

pub use error::{FetchError, SiteError};
