// src/season.rs
//
// Contestant records as stored in `data/traitors-s<N>.json`, plus the rules
// that every page shares: display order, status and filename uniqueness.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::core::sanitize::image_filename;
use crate::error::SiteError;

/// Treat an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Images {
    #[serde(default)]
    pub large: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Contestant {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub images: Option<Images>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_traitor: bool,
    /// 0 while still in the game, otherwise the order of elimination.
    #[serde(default, deserialize_with = "null_as_default")]
    pub eliminated: u32,
    /// Eliminated by murder rather than banishment.
    #[serde(default, deserialize_with = "null_as_default")]
    pub murdered: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    EliminatedTraitor,
    Eliminated,
    Traitor,
    Alive,
}

impl Status {
    pub fn css_class(self) -> &'static str {
        match self {
            Status::EliminatedTraitor => "status-eliminated-traitor",
            Status::Eliminated => "status-eliminated",
            Status::Traitor => "status-traitor",
            Status::Alive => "status-alive",
        }
    }
}

impl Contestant {
    /// Photo URL, if one was given and is not blank.
    pub fn photo_url(&self) -> Option<&str> {
        self.images
            .as_ref()
            .and_then(|i| i.large.as_deref())
            .filter(|u| !u.trim().is_empty())
    }

    pub fn is_active(&self) -> bool {
        self.eliminated == 0
    }

    pub fn status(&self) -> Status {
        match (self.is_active(), self.is_traitor) {
            (false, true) => Status::EliminatedTraitor,
            (false, false) => Status::Eliminated,
            (true, true) => Status::Traitor,
            (true, false) => Status::Alive,
        }
    }

    /// `"murdered #3"` / `"banished #3"`, or `None` while still in the game.
    pub fn elimination_label(&self) -> Option<String> {
        if self.is_active() {
            return None;
        }
        let how = if self.murdered { "murdered" } else { "banished" };
        Some(format!("{how} #{}", self.eliminated))
    }

    fn sort_key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Active players first (A→Z), then eliminated ones, most recent exit first.
pub fn display_order(a: &Contestant, b: &Contestant) -> Ordering {
    match (a.is_active(), b.is_active()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (true, true) => a.sort_key().cmp(&b.sort_key()),
        (false, false) => b
            .eliminated
            .cmp(&a.eliminated)
            .then_with(|| a.sort_key().cmp(&b.sort_key())),
    }
}

pub fn sort_for_display(contestants: &mut [Contestant]) {
    contestants.sort_by(display_order);
}

/// Read and parse one season file.
pub fn load_season(path: &Path) -> Result<Vec<Contestant>, SiteError> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(SiteError::DataFileNotFound(path.to_path_buf()));
        }
        Err(e) => return Err(SiteError::io(path, e)),
    };
    let contestants: Vec<Contestant> = serde_json::from_str(&text)
        .map_err(|source| SiteError::Json { path: path.to_path_buf(), source })?;
    logf!("Loaded {} contestants from {}", contestants.len(), path.display());
    Ok(contestants)
}

/// Every contestant with a photo must get its own image file.
/// Photos whose URL cannot be parsed are left out; they never hit the disk.
pub fn check_unique_filenames(contestants: &[Contestant]) -> Result<(), SiteError> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    for c in contestants {
        let Some(url) = c.photo_url() else { continue };
        let Ok(filename) = image_filename(&c.name, url) else { continue };
        // Case-insensitive filesystems would merge `a.JPG` and `a.jpg`.
        let key = filename.to_lowercase();
        if let Some(first) = seen.get(&key) {
            return Err(SiteError::FilenameCollision {
                filename,
                first: s!(*first),
                second: c.name.clone(),
            });
        }
        seen.insert(key, &c.name);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(name: &str, eliminated: u32) -> Contestant {
        Contestant { name: s!(name), eliminated, ..Default::default() }
    }

    fn with_photo(name: &str, url: &str) -> Contestant {
        Contestant {
            name: s!(name),
            images: Some(Images { large: Some(s!(url)) }),
            ..Default::default()
        }
    }

    fn names(cs: &[Contestant]) -> Vec<&str> {
        cs.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn active_first_then_most_recent_elimination() {
        let mut cs = vec![c("Bob", 0), c("Ann", 0), c("Cid", 3), c("Dee", 1)];
        sort_for_display(&mut cs);
        assert_eq!(names(&cs), ["Ann", "Bob", "Cid", "Dee"]);
    }

    #[test]
    fn names_compare_case_insensitively() {
        let mut cs = vec![c("bob", 0), c("Ann", 0), c("zed", 2), c("Amy", 2)];
        sort_for_display(&mut cs);
        assert_eq!(names(&cs), ["Ann", "bob", "Amy", "zed"]);
    }

    #[test]
    fn status_precedence() {
        let mut x = c("X", 2);
        x.is_traitor = true;
        assert_eq!(x.status(), Status::EliminatedTraitor);
        x.is_traitor = false;
        assert_eq!(x.status(), Status::Eliminated);
        x.eliminated = 0;
        assert_eq!(x.status(), Status::Alive);
        x.is_traitor = true;
        assert_eq!(x.status(), Status::Traitor);
        assert_eq!(x.status().css_class(), "status-traitor");
    }

    #[test]
    fn elimination_label_uses_style() {
        let mut x = c("X", 4);
        assert_eq!(x.elimination_label().as_deref(), Some("banished #4"));
        x.murdered = true;
        assert_eq!(x.elimination_label().as_deref(), Some("murdered #4"));
        assert_eq!(c("Y", 0).elimination_label(), None);
    }

    #[test]
    fn parses_sparse_records() {
        let json = r#"[
            {"name": "Ann", "images": {"large": "https://img.test/ann.png"}, "image_source": "x"},
            {"name": "Bob", "eliminated": 2, "murdered": true, "is_traitor": true},
            {"name": "Cid", "images": {}}
        ]"#;
        let cs: Vec<Contestant> = serde_json::from_str(json).unwrap();
        assert_eq!(cs[0].photo_url(), Some("https://img.test/ann.png"));
        assert_eq!(cs[0].eliminated, 0);
        assert!(cs[1].murdered && cs[1].is_traitor);
        assert_eq!(cs[2].photo_url(), None);
    }

    #[test]
    fn nulls_read_as_missing() {
        let json = r#"[{
            "name": "Ann", "background": null, "images": null,
            "is_traitor": null, "eliminated": null, "murdered": null
        }, {
            "name": null, "images": {"large": null}
        }]"#;
        let cs: Vec<Contestant> = serde_json::from_str(json).unwrap();
        assert_eq!(cs[0].name, "Ann");
        assert!(!cs[0].is_traitor && !cs[0].murdered);
        assert!(cs[0].is_active());
        assert_eq!(cs[0].status(), Status::Alive);
        assert_eq!(cs[0].photo_url(), None);
        assert_eq!(cs[1].name, "");
        assert_eq!(cs[1].photo_url(), None);
    }

    #[test]
    fn blank_photo_url_counts_as_missing() {
        assert_eq!(with_photo("A", "").photo_url(), None);
        assert_eq!(with_photo("A", "  ").photo_url(), None);
    }

    #[test]
    fn colliding_names_are_rejected() {
        let cs = vec![
            with_photo("Alan Turing", "https://img.test/1.jpg"),
            with_photo("alan-turing", "https://img.test/2.jpg"),
        ];
        match check_unique_filenames(&cs) {
            Err(SiteError::FilenameCollision { filename, first, second }) => {
                assert_eq!(filename, "alan_turing.jpg");
                assert_eq!(first, "Alan Turing");
                assert_eq!(second, "alan-turing");
            }
            other => panic!("expected collision, got {other:?}"),
        }
    }

    #[test]
    fn same_stem_different_extension_is_fine() {
        let cs = vec![
            with_photo("Ann", "https://img.test/1.png"),
            with_photo("ann", "https://img.test/2.jpg"),
            c("ann", 0),
        ];
        assert!(check_unique_filenames(&cs).is_ok());
    }
}
