// src/bin/generate_index.rs
use std::process::ExitCode;

use traitors_site::{cli, config::SitePaths};

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    cli::generate_index(&SitePaths::default())?;
    Ok(ExitCode::SUCCESS)
}
