// src/core/mod.rs

pub mod html;
pub mod net;
pub mod sanitize;

pub use sanitize::{image_filename, safe_name};
