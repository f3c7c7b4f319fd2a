use crate::digest::FileDigest;
use crate::error::{Result, SenderError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::str::FromStr;

/// HTTP method used to send the file
///
/// PATCH is not accepted: a raw binary body is not a partial update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    Post,
    Put,
}

impl Default for HttpMethod {
    fn default() -> Self {
        HttpMethod::Post
    }
}

impl HttpMethod {
    /// All accepted methods, in the order the host shows them
    pub const ALL: [HttpMethod; 2] = [HttpMethod::Post, HttpMethod::Put];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpMethod::Post => write!(f, "POST"),
            HttpMethod::Put => write!(f, "PUT"),
        }
    }
}

impl FromStr for HttpMethod {
    type Err = SenderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "post" => Ok(HttpMethod::Post),
            "put" => Ok(HttpMethod::Put),
            other => Err(SenderError::invalid_parameter(
                "method_type",
                format!("unsupported method: {} (expected post or put)", other),
            )),
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
        }
    }
}

/// Everything needed to send one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadRequest {
    pub source_path: PathBuf,
    pub destination_url: String,
    pub method: HttpMethod,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra_headers: BTreeMap<String, String>,
}

impl UploadRequest {
    pub fn new<P: Into<PathBuf>>(source_path: P, destination_url: impl Into<String>) -> Self {
        Self {
            source_path: source_path.into(),
            destination_url: destination_url.into(),
            method: HttpMethod::default(),
            extra_headers: BTreeMap::new(),
        }
    }

    pub fn method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.insert(name.into(), value.into());
        self
    }

    pub fn headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.extra_headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// The path as it is echoed back to the host
    pub fn source_display(&self) -> String {
        self.source_path.to_string_lossy().into_owned()
    }

    /// Base name of the source path, sent as `X-File-Name`
    pub fn file_name(&self) -> String {
        self.source_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source_display())
    }
}

/// Outcome of one send, success or not
///
/// `status_code == 0` means the request never produced a server response and
/// `response_body` holds a local error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    pub status_code: u16,
    pub response_body: String,
    pub source_path: String,
    pub debug_info: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<FileDigest>,
}

impl UploadResult {
    /// A server response, passed through as-is
    pub fn response(status_code: u16, response_body: String, source_path: String) -> Self {
        Self {
            status_code,
            response_body,
            source_path,
            debug_info: String::new(),
            digest: None,
        }
    }

    /// A failure that happened before or instead of a server response
    ///
    /// The error text doubles as debug info until a digest is attached.
    pub fn local_failure(error: &SenderError, source_path: String) -> Self {
        let message = error.to_string();
        Self {
            status_code: 0,
            response_body: message.clone(),
            source_path,
            debug_info: message,
            digest: None,
        }
    }

    pub fn with_digest(mut self, digest: FileDigest) -> Self {
        self.debug_info = digest.debug_info(&self.source_path);
        self.digest = Some(digest);
        self
    }

    pub fn is_local_failure(&self) -> bool {
        self.status_code == 0
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// The four values handed back to the host runtime
    pub fn into_outputs(self) -> (i64, String, String, String) {
        (
            i64::from(self.status_code),
            self.response_body,
            self.source_path,
            self.debug_info,
        )
    }
}
