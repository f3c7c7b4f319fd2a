//! HTTP client configuration

use crate::error::{Result, SenderError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default user agent sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!("glb-http-sender/", env!("CARGO_PKG_VERSION"));

/// Settings for the blocking HTTP client
///
/// Leaving `timeout_secs` unset keeps the client library's own default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderConfig {
    /// User agent (default: glb-http-sender/<version>)
    #[serde(rename = "user-agent", skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    /// Request timeout in seconds
    #[serde(rename = "timeout-secs", skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl SenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SenderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(SenderError::from)
    }

    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == Some(0) {
            return Err(SenderError::invalid_parameter(
                "timeout-secs",
                "Timeout must be greater than 0",
            ));
        }

        if let Some(ref user_agent) = self.user_agent {
            if user_agent.trim().is_empty() {
                return Err(SenderError::invalid_parameter(
                    "user-agent",
                    "User agent cannot be empty",
                ));
            }
        }

        Ok(())
    }

    /// Build the blocking client used for sends
    pub fn build_client(&self) -> Result<reqwest::blocking::Client> {
        self.validate()?;

        let mut builder = reqwest::blocking::Client::builder().user_agent(
            self.user_agent
                .clone()
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        );

        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        builder
            .build()
            .map_err(|e| SenderError::config_error(format!("Failed to build HTTP client: {}", e)))
    }
}
