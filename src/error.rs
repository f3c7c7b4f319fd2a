//! Error handling for the GLB sender
//!
//! This module defines the error types used throughout the library.
//! The upload path never hands these to the host runtime directly: every
//! failure is folded into an `UploadResult` with status code 0.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SenderError>;

/// Error types that can occur while sending a file
#[derive(Error, Debug)]
pub enum SenderError {
    /// The source path does not exist
    #[error("GLB file not found at {path}")]
    FileNotFound { path: String },

    /// The source file exists but could not be read
    #[error("Failed to open GLB file at {path}: {message}")]
    FileReadError { path: String, message: String },

    /// The HTTP request could not be completed
    #[error("HTTP request failed: {message}")]
    TransportError { message: String },

    /// A caller-supplied header could not be encoded
    #[error("Invalid request header {name}: {message}")]
    InvalidHeader { name: String, message: String },

    /// Invalid parameter
    #[error("Invalid parameter: {parameter} - {message}")]
    InvalidParameter { parameter: String, message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SenderError {
    /// Create a new file-not-found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        SenderError::FileNotFound { path: path.into() }
    }

    /// Create a new file read error
    pub fn file_read_error(path: impl Into<String>, message: impl Into<String>) -> Self {
        SenderError::FileReadError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new transport error
    pub fn transport_error(message: impl Into<String>) -> Self {
        SenderError::TransportError {
            message: message.into(),
        }
    }

    /// Create a new invalid header error
    pub fn invalid_header(name: impl Into<String>, message: impl Into<String>) -> Self {
        SenderError::InvalidHeader {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a new invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        SenderError::InvalidParameter {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        SenderError::ConfigError {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for SenderError {
    fn from(err: reqwest::Error) -> Self {
        SenderError::transport_error(describe_chain(&err))
    }
}

/// Join an error with every cause in its `source()` chain
///
/// Layers that already repeat their cause's text are not repeated.
pub fn describe_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();

    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }

    message
}
