// src/index.rs
//
// Landing page: one tile per season data file found in the data directory.

use std::{fs, path::{Path, PathBuf}};

use regex::Regex;

use crate::{
    config::{SiteOptions, SitePaths, options::season_page_name},
    core::html::escape_html,
    error::SiteError,
    file::write_output,
};

const INDEX_CSS: &str = r#"
    body {
      font-family: system-ui, -apple-system, BlinkMacSystemFont, sans-serif;
      background: #0f172a;
      color: white;
      margin: 0;
      padding: 3rem 1.5rem;
      text-align: center;
    }

    h1 {
      margin-bottom: 2.5rem;
      font-size: 2.5rem;
    }

    .season-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 1.5rem;
      max-width: 900px;
      margin: 0 auto;
    }

    .season-tile {
      background: linear-gradient(135deg, #0f172a, #7a031b);
      border-radius: 18px;
      padding: 2.5rem 1rem;
      text-decoration: none;
      color: white;
      box-shadow: 0 10px 25px rgba(0,0,0,0.25);
      transition: transform 0.15s ease, box-shadow 0.15s ease;
    }

    .season-tile span {
      display: block;
      font-size: 0.9rem;
      opacity: 0.85;
      letter-spacing: 0.08em;
      text-transform: uppercase;
    }

    .season-tile strong {
      display: block;
      font-size: 2.75rem;
      margin-top: 0.25rem;
    }

    .season-tile:hover {
      transform: translateY(-4px);
      box-shadow: 0 15px 35px rgba(0,0,0,0.35);
    }
"#;

fn season_file_pattern(prefix: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"^{}(\d+)\.json$", regex::escape(prefix)))
}

/// Season numbers with a data file in `data_dir`, ascending (numerically).
pub fn discover_seasons(data_dir: &Path, prefix: &str) -> Result<Vec<u32>, SiteError> {
    let pattern = season_file_pattern(prefix)?;
    let entries = fs::read_dir(data_dir).map_err(|e| SiteError::io(data_dir, e))?;

    let mut seasons = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| SiteError::io(data_dir, e))?;
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else { continue };
        let Some(caps) = pattern.captures(file_name) else { continue };
        match caps[1].parse::<u32>() {
            Ok(n) => seasons.push(n),
            Err(e) => logw!("Ignoring {file_name}: season number {e}"),
        }
    }
    seasons.sort_unstable();
    seasons.dedup(); // s1 and s01 land on the same page
    Ok(seasons)
}

pub fn render_index(seasons: &[u32], site: &SiteOptions) -> String {
    let tiles: String = seasons
        .iter()
        .map(|&season| {
            format!(
                r#"
        <a class="season-tile" href="{href}">
          <span>Season</span>
          <strong>{season}</strong>
        </a>
      "#,
                href = season_page_name(season),
            )
        })
        .collect();
    let title = escape_html(&site.title);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <title>{title} – Seasons</title>
  <style>{INDEX_CSS}  </style>
</head>
<body>
  <h1>{title}</h1>
  <div class="season-grid">
    {tiles}
  </div>
</body>
</html>"#
    )
}

/// Scan the data directory and write `<out_dir>/index.html`.
pub fn write_index(paths: &SitePaths, site: &SiteOptions) -> Result<PathBuf, SiteError> {
    let seasons = discover_seasons(&paths.data_dir, &site.data_prefix)?;
    logf!("Found {} seasons in {}", seasons.len(), paths.data_dir.display());

    let html = render_index(&seasons, site);
    let out = paths.index_page();
    write_output(&out, &html)?;
    logf!("Wrote {}", out.display());
    Ok(out)
}
