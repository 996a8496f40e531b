// SPDX-License-Identifier: MPL-2.0
//! File transfer adapter.
//!
//! Remote targets (`http://`, `https://`) are streamed with `reqwest`; any
//! other target is treated as a local file, the way a static page resolves
//! a relative link, and copied. Either way the file lands in the downloads
//! directory under a name that does not overwrite an existing file.

use crate::application::port::Downloader;
use crate::catalog::is_remote;
use crate::error::DownloadError;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

const USER_AGENT: &str = concat!("IcedGallery/", env!("CARGO_PKG_VERSION"));
const FALLBACK_FILE_NAME: &str = "download";
const MAX_NAME_ATTEMPTS: u32 = 10_000;

/// Completed transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadReport {
    pub path: PathBuf,
    pub bytes: u64,
}

/// Collects triggered targets until the shell turns them into tasks.
#[derive(Debug, Clone, Default)]
pub struct DownloadQueue {
    pending: Vec<String>,
}

impl DownloadQueue {
    /// Takes every queued target, oldest first.
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Downloader for DownloadQueue {
    fn trigger(&mut self, url: &str) {
        tracing::info!(url, "download triggered");
        self.pending.push(url.to_string());
    }
}

/// Transfers `url` into `directory`.
///
/// # Errors
///
/// See [`DownloadError`] for the failure cases.
pub async fn download(url: String, directory: PathBuf) -> Result<DownloadReport, DownloadError> {
    tokio::fs::create_dir_all(&directory)
        .await
        .map_err(|_| DownloadError::NoTargetDirectory)?;

    let name = file_name_for(&url);
    let report = if is_remote(&url) {
        download_remote(&url, &directory, &name).await
    } else {
        copy_local(&url, &directory, &name).await
    }?;

    tracing::info!(path = %report.path.display(), bytes = report.bytes, "download finished");
    Ok(report)
}

async fn download_remote(
    url: &str,
    directory: &Path,
    name: &str,
) -> Result<DownloadReport, DownloadError> {
    use futures_util::StreamExt;

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| DownloadError::Transport(e.to_string()))?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| DownloadError::Transport(e.to_string()))?;

    if !response.status().is_success() {
        return Err(DownloadError::HttpStatus(response.status().as_u16()));
    }

    let (target, mut file) = claim_target(directory, name).await?;
    let mut bytes: u64 = 0;
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let written = match chunk {
            Ok(chunk) => file.write_all(&chunk).await.map(|()| chunk.len() as u64),
            Err(e) => Err(std::io::Error::other(e)),
        };
        match written {
            Ok(len) => bytes += len,
            Err(e) => return Err(discard_partial(file, &target, e).await),
        }
    }

    if let Err(e) = file.flush().await {
        return Err(discard_partial(file, &target, e).await);
    }

    Ok(DownloadReport {
        path: target,
        bytes,
    })
}

async fn copy_local(
    source: &str,
    directory: &Path,
    name: &str,
) -> Result<DownloadReport, DownloadError> {
    let source = Path::new(source.strip_prefix("file://").unwrap_or(source));
    let mut input = tokio::fs::File::open(source)
        .await
        .map_err(|_| DownloadError::SourceMissing(source.display().to_string()))?;

    let (target, mut file) = claim_target(directory, name).await?;
    let copied = tokio::io::copy(&mut input, &mut file).await;
    let copied = match copied {
        Ok(bytes) => file.flush().await.map(|()| bytes),
        Err(e) => Err(e),
    };

    match copied {
        Ok(bytes) => Ok(DownloadReport {
            path: target,
            bytes,
        }),
        Err(e) => Err(discard_partial(file, &target, e).await),
    }
}

/// Removes a partially written target and turns the cause into an error.
async fn discard_partial(
    file: tokio::fs::File,
    target: &Path,
    cause: std::io::Error,
) -> DownloadError {
    drop(file);
    if let Err(err) = tokio::fs::remove_file(target).await {
        tracing::warn!(%err, path = %target.display(), "partial download left on disk");
    }
    DownloadError::Transport(cause.to_string())
}

/// Creates `dir/name`, or the first free `dir/stem (n).ext`.
///
/// Creation and the existence check are one step, so concurrent transfers of
/// the same name each get their own file.
///
/// # Errors
///
/// Returns [`DownloadError::Transport`] when no file can be created.
pub async fn claim_target(
    directory: &Path,
    name: &str,
) -> Result<(PathBuf, tokio::fs::File), DownloadError> {
    for n in 0..MAX_NAME_ATTEMPTS {
        let candidate = directory.join(numbered_name(name, n));
        let opened = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&candidate)
            .await;
        match opened {
            Ok(file) => return Ok((candidate, file)),
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {}
            Err(e) => return Err(DownloadError::Transport(e.to_string())),
        }
    }
    Err(DownloadError::Transport(format!("no free file name for {name}")))
}

/// `name` for `n == 0`, `stem (n).ext` otherwise.
fn numbered_name(name: &str, n: u32) -> String {
    if n == 0 {
        return name.to_string();
    }
    let path = Path::new(name);
    let stem = path
        .file_stem()
        .map_or_else(|| name.to_string(), |s| s.to_string_lossy().into_owned());
    match path.extension() {
        Some(ext) => format!("{stem} ({n}).{}", ext.to_string_lossy()),
        None => format!("{stem} ({n})"),
    }
}

/// Last path segment of a target, without query or fragment.
#[must_use]
pub fn file_name_for(url: &str) -> String {
    let without_suffix = url
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_end_matches('/');
    let name = without_suffix
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    let sanitized: String = name
        .chars()
        .filter(|c| !matches!(c, ':' | '*' | '?' | '"' | '<' | '>' | '|'))
        .collect();

    if sanitized.is_empty() || sanitized == "." || sanitized == ".." {
        FALLBACK_FILE_NAME.to_string()
    } else {
        sanitized
    }
}
