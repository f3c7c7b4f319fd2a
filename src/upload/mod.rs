//! Sending GLB files over HTTP
//!
//! This module reads a model file from disk and forwards its raw bytes to an
//! HTTP endpoint, reporting the server's answer plus size and digest.

pub mod headers;
pub mod operations;
pub mod types;

#[cfg(feature = "tokio")]
pub use operations::upload_async;
pub use operations::{upload, upload_file, upload_with_config};
pub use types::{HttpMethod, UploadRequest, UploadResult};
