// src/file.rs

use std::{
    fs,
    path::{Component, Path},
};

use crate::error::SiteError;

pub fn ensure_directory(dir: &Path) -> Result<(), SiteError> {
    if dir.exists() && !dir.is_dir() {
        return Err(SiteError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| SiteError::io(dir, e))?;
    }
    Ok(())
}

/// Create/overwrite `path` with `contents`, making the parent directory first.
pub fn write_output(path: &Path, contents: &str) -> Result<(), SiteError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents).map_err(|e| SiteError::io(path, e))
}

/// Path of `target` as seen from a page living in `from_dir`, always with
/// forward slashes so it can go straight into an `src`/`href`.
/// Both paths must be relative to the same base (or both absolute).
pub fn relative_web_path(from_dir: &Path, target: &Path) -> String {
    let parts = |p: &Path| -> Vec<String> {
        p.components()
            .filter(|c| !matches!(c, Component::CurDir))
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect()
    };
    let from = parts(from_dir);
    let to = parts(target);

    let common = from.iter().zip(&to).take_while(|(a, b)| a == b).count();
    let mut out: Vec<&str> = vec![".."; from.len() - common];
    out.extend(to[common..].iter().map(String::as_str));
    out.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_under_output_dir() {
        assert_eq!(
            relative_web_path(Path::new("./dist"), Path::new("./dist/images/ann.jpg")),
            "images/ann.jpg"
        );
    }

    #[test]
    fn image_beside_output_dir() {
        assert_eq!(
            relative_web_path(Path::new("/site/pages"), Path::new("/site/img/ann.jpg")),
            "../img/ann.jpg"
        );
    }

    #[test]
    fn ensure_directory_refuses_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("taken");
        fs::write(&file, "x").unwrap();
        assert!(matches!(ensure_directory(&file), Err(SiteError::NotADirectory(_))));

        let nested = dir.path().join("a/b/c");
        ensure_directory(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
