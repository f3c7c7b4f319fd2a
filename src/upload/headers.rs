//! Request header construction

use crate::error::{Result, SenderError};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use std::collections::BTreeMap;

pub const OCTET_STREAM: &str = "application/octet-stream";
pub const X_FILE_NAME: &str = "x-file-name";

/// Default headers plus caller overrides
///
/// Header names are case-insensitive, so a caller's `content-type` replaces
/// the default `Content-Type` rather than adding a second one.
pub fn build_headers(file_name: &str, extra: &BTreeMap<String, String>) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(OCTET_STREAM));
    headers.insert(
        HeaderName::from_static(X_FILE_NAME),
        HeaderValue::from_bytes(file_name.as_bytes())
            .map_err(|e| SenderError::invalid_header(X_FILE_NAME, e.to_string()))?,
    );

    for (name, value) in extra {
        let header_name = HeaderName::from_bytes(name.trim().as_bytes())
            .map_err(|e| SenderError::invalid_header(name.as_str(), e.to_string()))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|e| SenderError::invalid_header(name.as_str(), e.to_string()))?;
        headers.insert(header_name, header_value);
    }

    Ok(headers)
}
