// src/images.rs
//
// Photo fetcher: one image per contestant, saved as `<safe_name><ext>` in the
// shared images directory. Files already on disk are never fetched again, so
// the directory doubles as the download cache.

use std::{
    fs,
    path::PathBuf,
    sync::{Arc, atomic::{AtomicUsize, Ordering}, mpsc},
    thread,
};

use crate::{
    config::{FetchOptions, SitePaths},
    core::{net, sanitize::image_filename},
    error::{FetchError, SiteError},
    file::ensure_directory,
    progress::Progress,
    season::{Contestant, check_unique_filenames},
};

/// A photo that could not be saved.
#[derive(Debug)]
pub struct FetchFailure {
    pub name: String,
    pub url: String,
    pub error: FetchError,
}

#[derive(Debug, Default)]
pub struct FetchSummary {
    /// Newly saved images.
    pub downloaded: usize,
    /// Images that were already present.
    pub skipped: usize,
    pub failed: Vec<FetchFailure>,
}

enum Event {
    Started(usize),
    Finished(usize, Result<u64, FetchError>),
}

struct Job {
    name: String,
    url: String,
    filename: String,
    dest: PathBuf,
}

/// Download every missing contestant photo of one season.
///
/// Per-photo problems end up in `FetchSummary::failed`; only setup problems
/// (name collision, unusable images directory, HTTP client) fail the call.
pub fn download_season(
    contestants: &[Contestant],
    paths: &SitePaths,
    opts: &FetchOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<FetchSummary, SiteError> {
    check_unique_filenames(contestants)?;
    ensure_directory(&paths.images_dir)?;

    let with_photo: Vec<(&Contestant, &str)> = contestants
        .iter()
        .filter_map(|c| c.photo_url().map(|u| (c, u)))
        .collect();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(with_photo.len());
    }

    let mut summary = FetchSummary::default();
    let mut jobs: Vec<Job> = Vec::new();

    for (c, url) in with_photo {
        let filename = match image_filename(&c.name, url) {
            Ok(f) => f,
            Err(source) => {
                let error = FetchError::InvalidUrl { url: s!(url), source };
                loge!("{}: {error}", c.name);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(url, &error.to_string());
                }
                summary.failed.push(FetchFailure { name: c.name.clone(), url: s!(url), error });
                continue;
            }
        };
        let dest = paths.images_dir.join(&filename);
        if dest.exists() {
            logd!("Skipping (exists): {filename}");
            if let Some(p) = progress.as_deref_mut() {
                p.item_skipped(&filename);
            }
            summary.skipped += 1;
            continue;
        }
        // Filenames are unique within the batch, so a `.part` here was left
        // behind by an earlier run that never finished.
        let part = net::part_path(&dest);
        if part.exists() {
            logw!("Removing stale partial download {}", part.display());
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Removing stale partial download: {}", part.display()));
            }
            if let Err(e) = fs::remove_file(&part) {
                loge!("Could not remove {}: {e}", part.display());
            }
        }
        jobs.push(Job { name: c.name.clone(), url: s!(url), filename, dest });
    }

    if !jobs.is_empty() {
        let client = net::client(opts)?;
        run_jobs(jobs, client, opts, &mut summary, progress.as_deref_mut());
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    logf!(
        "Fetch done: {} downloaded, {} skipped, {} failed",
        summary.downloaded, summary.skipped, summary.failed.len()
    );
    Ok(summary)
}

fn run_jobs(
    jobs: Vec<Job>,
    client: reqwest::blocking::Client,
    opts: &FetchOptions,
    summary: &mut FetchSummary,
    mut progress: Option<&mut (dyn Progress + '_)>,
) {
    let jobs = Arc::new(jobs);
    let counter = Arc::new(AtomicUsize::new(0));
    let (res_tx, res_rx) = mpsc::channel::<Event>();

    let workers = opts.workers.min(jobs.len()).max(1);
    let max_redirects = opts.max_redirects;

    for _ in 0..workers {
        let jobs = Arc::clone(&jobs);
        let idx = Arc::clone(&counter);
        let tx = res_tx.clone();
        let client = client.clone();

        thread::spawn(move || {
            loop {
                let i = idx.fetch_add(1, Ordering::Relaxed);
                if i >= jobs.len() {
                    break;
                }
                let job = &jobs[i];
                if tx.send(Event::Started(i)).is_err() {
                    break;
                }
                logf!("Downloading: {} → {}", job.url, job.filename);
                let result = net::download_to(&client, &job.url, &job.dest, max_redirects);
                if tx.send(Event::Finished(i, result)).is_err() {
                    break;
                }
            }
        });
    }
    drop(res_tx); // main thread is sole receiver now

    let mut finished = 0usize;
    while finished < jobs.len() {
        let Ok(event) = res_rx.recv() else {
            break; // workers ended early
        };
        let (i, result) = match event {
            Event::Started(i) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.item_started(&jobs[i].url, &jobs[i].filename);
                }
                continue;
            }
            Event::Finished(i, result) => (i, result),
        };
        finished += 1;
        let job = &jobs[i];
        match result {
            Ok(bytes) => {
                logf!("Saved {} ({bytes} bytes)", job.filename);
                summary.downloaded += 1;
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(&job.url, &job.filename);
                }
            }
            Err(error) => {
                loge!("Error downloading {}: {error}", job.url);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(&job.url, &error.to_string());
                }
                summary.failed.push(FetchFailure {
                    name: job.name.clone(),
                    url: job.url.clone(),
                    error,
                });
            }
        }
    }
}
