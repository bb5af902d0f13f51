// src/bin/generate_season.rs
use std::process::ExitCode;

use traitors_site::{cli, config::SitePaths};

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    let Some(season) = cli::season_from_env() else {
        return Ok(cli::usage_exit());
    };
    cli::generate_season(season, &SitePaths::default())?;
    Ok(ExitCode::SUCCESS)
}
