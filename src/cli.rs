// src/cli.rs
//
// Shared plumbing for the three binaries. Each one takes at most a season
// number; there are no flags.

use std::{env, path::PathBuf, process::ExitCode};

use crate::{
    config::{FetchOptions, SiteOptions, SitePaths},
    error::SiteError,
    images::{self, FetchSummary},
    index, log, page,
    progress::Progress,
    season,
};

/// First positional argument as a season number.
pub fn season_arg<I>(mut args: I) -> Option<u32>
where
    I: Iterator<Item = String>,
{
    args.next()?.trim().parse().ok()
}

/// Season from the process arguments, or `None` after printing usage.
pub fn season_from_env() -> Option<u32> {
    let mut args = env::args();
    let prog = args.next().unwrap_or_else(|| s!("generate"));
    let season = season_arg(args);
    if season.is_none() {
        print_usage(&prog);
    }
    season
}

pub fn print_usage(prog: &str) {
    println!("Usage {prog} <season>");
    println!("  e.g. {prog} 1");
}

/// Exit status after usage was printed.
pub fn usage_exit() -> ExitCode {
    ExitCode::from(1)
}

/// Prints per-photo lines the way a terminal user wants to read them.
#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
    done: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_started(&mut self, url: &str, filename: &str) {
        println!("Downloading: {url} → {filename}");
    }
    fn item_done(&mut self, _url: &str, filename: &str) {
        self.done += 1;
        println!("Saved: {filename} ({}/{})", self.done, self.total);
    }
    fn item_skipped(&mut self, filename: &str) {
        self.done += 1;
        println!("Skipping (exists): {filename}");
    }
    fn item_failed(&mut self, url: &str, err: &str) {
        self.done += 1;
        eprintln!("Error downloading {url} {err}");
    }
}

fn start_logging(paths: &SitePaths) {
    log::init(&paths.log_file());
}

/// `download_images <season>`
pub fn download(season: u32, paths: &SitePaths) -> Result<FetchSummary, SiteError> {
    start_logging(paths);
    let site = SiteOptions::default();
    let data_file = paths.season_data_file(&site, season);
    let mut progress = ConsoleProgress::default();
    progress.log(&format!(
        "Downloading images for traitors season {season} using data file {}",
        data_file.display()
    ));

    let contestants = season::load_season(&data_file)?;
    let summary = images::download_season(
        &contestants,
        paths,
        &FetchOptions::default(),
        Some(&mut progress),
    )?;

    progress.log(&format!(
        "Done. {} new images saved to {}",
        summary.downloaded,
        paths.images_dir.display()
    ));
    Ok(summary)
}

/// `generate_season <season>`
pub fn generate_season(season: u32, paths: &SitePaths) -> Result<PathBuf, SiteError> {
    start_logging(paths);
    let out = page::write_season_page(season, paths, &SiteOptions::default())?;
    println!("Wrote {}", out.display());
    Ok(out)
}

/// `generate_index`
pub fn generate_index(paths: &SitePaths) -> Result<PathBuf, SiteError> {
    start_logging(paths);
    let out = index::write_index(paths, &SiteOptions::default())?;
    println!("Wrote {}", out.display());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::{ConsoleProgress, season_arg};
    use crate::progress::Progress;

    fn args(v: &[&str]) -> impl Iterator<Item = String> {
        v.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn season_is_first_positional() {
        assert_eq!(season_arg(args(&["3"])), Some(3));
        assert_eq!(season_arg(args(&[" 12 ", "extra"])), Some(12));
    }

    #[test]
    fn missing_or_bad_season_is_none() {
        assert_eq!(season_arg(args(&[])), None);
        assert_eq!(season_arg(args(&["three"])), None);
        assert_eq!(season_arg(args(&["-1"])), None);
    }

    #[test]
    fn console_progress_counts_finished_items_only() {
        let mut p = ConsoleProgress::default();
        p.begin(3);
        p.item_skipped("a.jpg");
        p.item_started("https://x.test/b.png", "b.png");
        assert_eq!(p.done, 1);
        p.item_done("https://x.test/b.png", "b.png");
        p.item_failed("https://x.test/c", "404");
        assert_eq!((p.done, p.total), (3, 3));
    }
}
