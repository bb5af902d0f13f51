// src/page.rs
//
// Season page: one card per contestant, in display order.

use std::path::PathBuf;

use crate::{
    config::{SiteOptions, SitePaths},
    core::{html::{escape_html, placeholder_data_uri}, sanitize::image_filename},
    error::SiteError,
    file::{ensure_directory, relative_web_path, write_output},
    season::{self, Contestant},
};

const PAGE_CSS: &str = r#"
    body{font-family:Arial,Helvetica,sans-serif;padding:8px;background: #0f172a;color: white;}
    h1{margin-bottom:6px}
    .grid{display:grid;grid-template-columns:repeat(3,1fr);gap:8px}
    @media (min-width: 640px) {
      .grid{grid-template-columns:repeat(auto-fill,minmax(220px,1fr));gap:12px}
    }
    .card{border-radius:6px;overflow:hidden;background:#fff;border:1px solid #e6e6e6}
    .meta{padding:10px}
    .title{font-weight:700}
    .subtitle{font-size:13px;color:#666;margin-top:6px}
    a{color:#0366d6}

    .img{width:100%;height:160px;overflow:hidden;background:#efefef}
    .person-img{width:100%;height:100%;object-fit:cover;object-position:center 20%;display:block}

    .status-alive{background:#fff;border:1px solid #e6e6e6;color:#222}

    .status-traitor{background:#7a031b;color:#fff;border:1px solid rgba(0,0,0,0.08)}
    .status-traitor .meta{color:#fff}
    .status-traitor a{color:rgba(255,255,255,0.9)}
    .status-traitor .subtitle{color:#ccc}

    .status-eliminated{background:#2f2f2f;color:#ddd;border:1px solid #222}
    .status-eliminated .meta{color:#ddd}
    .status-eliminated .subtitle{color:#bbb}
    .status-eliminated .person-img{filter:grayscale(100%);opacity:0.9}

    .status-eliminated-traitor{background:#7a031b;color:#ddd;border:1px solid #222}
    .status-eliminated-traitor .meta{color:#ddd}
    .status-eliminated-traitor .subtitle{color:#bbb}
    .status-eliminated-traitor .person-img{filter:grayscale(100%);opacity:0.9}
"#;

/// Where a card's `<img>` points, before escaping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageSource {
    /// Downloaded copy, relative to the output directory.
    Local(String),
    Remote(String),
    Placeholder,
}

impl ImageSource {
    pub fn resolve(c: &Contestant, paths: &SitePaths) -> Self {
        let Some(url) = c.photo_url() else {
            return ImageSource::Placeholder;
        };
        match image_filename(&c.name, url) {
            Ok(filename) => {
                let local = paths.images_dir.join(filename);
                if local.is_file() {
                    ImageSource::Local(relative_web_path(&paths.out_dir, &local))
                } else {
                    ImageSource::Remote(s!(url))
                }
            }
            Err(e) => {
                logw!("{}: unusable photo url {url:?} ({e}), linking it as-is", c.name);
                ImageSource::Remote(s!(url))
            }
        }
    }

    /// Escaped value for the `src` attribute.
    pub fn to_attr(&self) -> String {
        match self {
            ImageSource::Local(p) | ImageSource::Remote(p) => escape_html(p),
            ImageSource::Placeholder => placeholder_data_uri(),
        }
    }
}

pub fn render_card(c: &Contestant, paths: &SitePaths) -> String {
    let name = escape_html(&c.name);
    let background = escape_html(c.background.as_deref().unwrap_or(""));
    let eliminated = c
        .elimination_label()
        .map(|label| format!(" — {}", escape_html(&label)))
        .unwrap_or_default();
    let src = ImageSource::resolve(c, paths).to_attr();

    format!(
        r#"
    <div class="card {status}">
      <div class="img"><img src="{src}" alt="{name}" class="person-img" loading="lazy"></div>
      <div class="meta">
        <div class="title">{name}</div>
        <div class="subtitle">{background}{eliminated}</div>
      </div>
    </div>
  "#,
        status = c.status().css_class(),
    )
}

/// Full HTML document for one season. `contestants` may be in any order.
pub fn render_season_page(
    season: u32,
    contestants: &[Contestant],
    paths: &SitePaths,
    site: &SiteOptions,
) -> String {
    let mut ordered = contestants.to_vec();
    season::sort_for_display(&mut ordered);

    let cards: Vec<String> = ordered.iter().map(|c| render_card(c, paths)).collect();
    let title = escape_html(&site.title);

    format!(
        r#"<!doctype html>
<html>
<head>
  <meta charset="utf-8">
  <title>{title} — Season {season}</title>
  <meta name="viewport" content="width=device-width,initial-scale=1">
  <style>{PAGE_CSS}  </style>
</head>
<body>
  <h1>{title} - Season {season}</h1>
  <div class="grid">
    {cards}
  </div>
</body>
</html>
"#,
        cards = cards.join("\n"),
    )
}

/// Load a season's data, render it and write `<out_dir>/season<N>.html`.
pub fn write_season_page(
    season: u32,
    paths: &SitePaths,
    site: &SiteOptions,
) -> Result<PathBuf, SiteError> {
    let data_file = paths.season_data_file(site, season);
    let contestants = season::load_season(&data_file)?;
    season::check_unique_filenames(&contestants)?;

    ensure_directory(&paths.out_dir)?;
    ensure_directory(&paths.images_dir)?;

    let html = render_season_page(season, &contestants, paths, site);
    let out = paths.season_page(season);
    write_output(&out, &html)?;
    logf!("Wrote {}", out.display());
    Ok(out)
}
