// src/core/sanitize.rs

use url::Url;

use crate::config::consts::{DEFAULT_IMAGE_EXT, DEFAULT_IMAGE_STEM};

/// Filename stem for a contestant: lowercase ASCII alphanumerics, every other
/// run of characters collapsed into one `_`, no leading/trailing `_`.
/// Falls back to `"image"` when nothing is left.
pub fn safe_name(name: &str) -> String {
    let lower = name.trim().to_lowercase();
    let mut out = String::with_capacity(lower.len());
    let mut last_us = false;
    for ch in lower.chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            out.push(ch);
            last_us = false;
        } else if !last_us {
            out.push('_');
            last_us = true;
        }
    }
    let out = out.trim_matches('_');
    if out.is_empty() { s!(DEFAULT_IMAGE_STEM) } else { s!(out) }
}

/// Extension (with the dot) of the last path segment of `url`, or `.jpg`.
/// Query and fragment never count: `/a/b.png?w=400` gives `.png`.
pub fn url_extension(url: &str) -> Result<String, url::ParseError> {
    let parsed = Url::parse(url)?;
    let segment = parsed.path().rsplit('/').next().unwrap_or("");
    let ext = match segment.rfind('.') {
        // `.hidden` is a name, not an extension; `photo.` has none either
        Some(0) | None => None,
        Some(i) if i + 1 == segment.len() => None,
        Some(i) => Some(&segment[i..]),
    };
    Ok(s!(ext.unwrap_or(DEFAULT_IMAGE_EXT)))
}

/// `<safe_name>.<ext>` for a contestant photo.
pub fn image_filename(name: &str, url: &str) -> Result<String, url::ParseError> {
    let ext = url_extension(url)?;
    Ok(join!(&safe_name(name), &ext))
}
