//! Content digests for diagnostic output

use bytesize::ByteSize;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Byte length and SHA-256 of a file's contents
///
/// Only used for reporting. Nothing is deduplicated or verified against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDigest {
    pub size: usize,
    pub sha256: String,
}

impl FileDigest {
    /// Hash a buffer that is already in memory
    pub fn compute(bytes: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(bytes);

        Self {
            size: bytes.len(),
            sha256: hex::encode(hasher.finalize()),
        }
    }

    /// Human readable size, e.g. `1.2 KiB`
    pub fn human_size(&self) -> String {
        ByteSize::b(self.size as u64).to_string()
    }

    /// Multi-line debug string reported back to the host
    pub fn debug_info(&self, path: &str) -> String {
        format!(
            "File: {}\nSize: {} bytes ({})\nSHA-256: {}",
            path,
            self.size,
            self.human_size(),
            self.sha256
        )
    }
}

impl fmt::Display for FileDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bytes, sha256 {}", self.size, self.sha256)
    }
}
