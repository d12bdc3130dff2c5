//! Error types for carbonwise-core
//!
//! Statistical degeneracies (short history, zero totals) are resolved to
//! defined defaults inside the analytics functions and never surface as
//! errors; CoreError covers the advisor call, the one operation that can
//! genuinely fail.

use thiserror::Error;

/// Core error type for carbonwise operations
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Advisor request failed: {message}")]
    AdvisorRequest {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    #[error("Advisor timed out after {timeout_secs}s")]
    AdvisorTimeout { timeout_secs: u64 },

    #[error("Advisor returned malformed output: {message}")]
    AdvisorSchema {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },
}

impl CoreError {
    /// Wrap a reqwest failure with a short human-readable message
    pub fn advisor_request(source: reqwest::Error) -> Self {
        CoreError::AdvisorRequest {
            message: source.to_string(),
            source: Some(source),
        }
    }
}
