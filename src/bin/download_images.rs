// src/bin/download_images.rs
use std::process::ExitCode;

use traitors_site::{cli, config::SitePaths};

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    let Some(season) = cli::season_from_env() else {
        return Ok(cli::usage_exit());
    };
    // Per-photo failures are reported but never change the exit status.
    cli::download(season, &SitePaths::default())?;
    Ok(ExitCode::SUCCESS)
}
