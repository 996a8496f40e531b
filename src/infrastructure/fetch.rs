// SPDX-License-Identifier: MPL-2.0
//! Remote media fetching for grid thumbnails and preview images.

use crate::error::DownloadError;

/// Fetches the full body of a remote image.
///
/// # Errors
///
/// Returns [`DownloadError::HttpStatus`] for non-success answers and
/// [`DownloadError::Transport`] when the request or body read fails.
pub async fn fetch_bytes(url: String) -> Result<Vec<u8>, DownloadError> {
    let response = reqwest::get(&url)
        .await
        .map_err(|e| DownloadError::Transport(e.to_string()))?;

    if !response.status().is_success() {
        tracing::warn!(%url, status = %response.status(), "image fetch failed");
        return Err(DownloadError::HttpStatus(response.status().as_u16()));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| DownloadError::Transport(e.to_string()))?;
    tracing::debug!(%url, bytes = body.len(), "image fetched");
    Ok(body.to_vec())
}
