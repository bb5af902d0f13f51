// src/core/net.rs
//
// Blocking HTTP(S) GET that follows redirects by hand and streams the body
// straight to disk.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use reqwest::header::LOCATION;
use reqwest::redirect::Policy;
use url::Url;

use crate::config::consts::PART_SUFFIX;
use crate::config::FetchOptions;
use crate::error::FetchError;

/// Client with automatic redirects switched off; `download_to` walks them itself.
pub fn client(opts: &FetchOptions) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(opts.timeout)
        .redirect(Policy::none())
        .user_agent(opts.user_agent.as_str())
        .build()
}

/// Fetch `url` into `dest`, returning the number of bytes written.
///
/// * 3xx with a `Location` header: follow it (relative locations resolve
///   against the current URL). The body still lands in `dest`.
/// * 200: stream the body to `<dest>.part`, then rename over `dest`.
/// * anything else: `FetchError::Status`, nothing left on disk.
pub fn download_to(
    client: &Client,
    url: &str,
    dest: &Path,
    max_redirects: usize,
) -> Result<u64, FetchError> {
    let mut current = Url::parse(url)
        .map_err(|source| FetchError::InvalidUrl { url: s!(url), source })?;
    let mut hops = 0usize;

    loop {
        let mut resp = client
            .get(current.clone())
            .send()
            .map_err(|source| FetchError::Http { url: current.to_string(), source })?;
        let status = resp.status();

        if status.is_redirection() {
            if let Some(location) = redirect_target(&resp) {
                if hops >= max_redirects {
                    return Err(FetchError::TooManyRedirects { url: s!(url), hops });
                }
                let next = current
                    .join(&location)
                    .map_err(|source| FetchError::InvalidUrl { url: location, source })?;
                logd!("{current} redirected ({}) to {next}", status.as_u16());
                current = next;
                hops += 1;
                continue;
            }
        }

        if status != StatusCode::OK {
            return Err(FetchError::Status {
                url: current.to_string(),
                status: status.as_u16(),
            });
        }
        return save_body(&mut resp, dest);
    }
}

fn redirect_target(resp: &Response) -> Option<String> {
    let value = resp.headers().get(LOCATION)?.to_str().ok()?.trim();
    if value.is_empty() { None } else { Some(s!(value)) }
}

/// `<dest>.part`, the in-flight name for a download.
pub fn part_path(dest: &Path) -> PathBuf {
    let mut name = OsString::from(dest.as_os_str());
    name.push(PART_SUFFIX);
    PathBuf::from(name)
}

fn save_body(resp: &mut Response, dest: &Path) -> Result<u64, FetchError> {
    let part = part_path(dest);

    // create_new: a second writer for the same destination backs off
    let file = match OpenOptions::new().write(true).create_new(true).open(&part) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            return Err(FetchError::InProgress(dest.to_path_buf()));
        }
        Err(source) => return Err(FetchError::Io { path: part, source }),
    };

    match stream_into(resp, file).and_then(|n| fs::rename(&part, dest).map(|_| n)) {
        Ok(n) => Ok(n),
        Err(source) => {
            let _ = fs::remove_file(&part);
            Err(FetchError::Io { path: dest.to_path_buf(), source })
        }
    }
}

fn stream_into(resp: &mut Response, file: File) -> io::Result<u64> {
    let mut out = BufWriter::new(file);
    let n = io::copy(resp, &mut out)?;
    out.flush()?;
    Ok(n)
}
