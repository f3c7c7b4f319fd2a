//! The send operation
//!
//! Reads a file from disk, hashes it, and sends the raw bytes in a single
//! HTTP request. Every outcome, including local failures, comes back as an
//! `UploadResult` so the host always receives the same four values.

use crate::config::SenderConfig;
use crate::digest::FileDigest;
use crate::error::{Result, SenderError};
use crate::upload::headers::build_headers;
use crate::upload::types::{HttpMethod, UploadRequest, UploadResult};
use log::{debug, error, info, warn};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Send a file with an already-built client
///
/// # Arguments
///
/// * `client` - Blocking HTTP client
/// * `request` - Source path, destination, method and extra headers
///
/// # Returns
///
/// The server's status and body on any HTTP response (4xx/5xx included), or
/// status 0 with a local error message when the file is missing, unreadable,
/// a header is invalid, or the request never completed.
pub fn upload(client: &reqwest::blocking::Client, request: &UploadRequest) -> UploadResult {
    let source = request.source_display();
    debug!(
        "Sending {} to {} via {}",
        source, request.destination_url, request.method
    );

    let bytes = match read_source(&request.source_path) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("{}", e);
            return UploadResult::local_failure(&e, source);
        }
    };

    let digest = FileDigest::compute(&bytes);
    debug!("Read {}: {}", source, digest);

    match send(client, request, bytes) {
        Ok((status, body)) => {
            if (200..300).contains(&status) {
                info!("Sent {} ({}): HTTP {}", source, digest.human_size(), status);
            } else {
                warn!("Failed to send file: HTTP {}", status);
            }
            UploadResult::response(status, body, source).with_digest(digest)
        }
        Err(e) => {
            error!("{}", e);
            UploadResult::local_failure(&e, source).with_digest(digest)
        }
    }
}

/// Send a file with a client built from the default configuration
pub fn upload_file<P: Into<PathBuf>>(
    path: P,
    url: &str,
    method: HttpMethod,
    extra_headers: Option<BTreeMap<String, String>>,
) -> UploadResult {
    let request = UploadRequest::new(path, url)
        .method(method)
        .headers(extra_headers.unwrap_or_default());

    upload_with_config(&SenderConfig::default(), &request)
}

/// Send a file with a client built from `config`
///
/// A config that cannot produce a client is reported like any other local
/// failure.
pub fn upload_with_config(config: &SenderConfig, request: &UploadRequest) -> UploadResult {
    match config.build_client() {
        Ok(client) => upload(&client, request),
        Err(e) => {
            error!("{}", e);
            UploadResult::local_failure(&e, request.source_display())
        }
    }
}

/// Async wrapper that runs the blocking send on tokio's blocking pool
#[cfg(feature = "tokio")]
pub async fn upload_async(config: SenderConfig, request: UploadRequest) -> UploadResult {
    let source = request.source_display();

    match tokio::task::spawn_blocking(move || upload_with_config(&config, &request)).await {
        Ok(result) => result,
        Err(e) => {
            let err = SenderError::transport_error(format!("Upload task failed: {}", e));
            error!("{}", err);
            UploadResult::local_failure(&err, source)
        }
    }
}

/// Read the whole source file; the handle is dropped before returning
fn read_source(path: &Path) -> Result<Vec<u8>> {
    let display = path.to_string_lossy();

    if !path.exists() {
        return Err(SenderError::file_not_found(display));
    }

    std::fs::read(path).map_err(|e| SenderError::file_read_error(display, e.to_string()))
}

fn send(
    client: &reqwest::blocking::Client,
    request: &UploadRequest,
    body: Vec<u8>,
) -> Result<(u16, String)> {
    let headers = build_headers(&request.file_name(), &request.extra_headers)?;

    let response = client
        .request(request.method.into(), &request.destination_url)
        .headers(headers)
        .body(body)
        .send()?;

    let status = response.status().as_u16();
    let text = response.text()?;

    Ok((status, text))
}
