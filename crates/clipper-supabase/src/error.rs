//! Job-tracker error types.

use thiserror::Error;

/// Result type for job-tracker operations.
pub type SupabaseResult<T> = Result<T, SupabaseError>;

/// Errors that can occur while talking to the job tracker.
#[derive(Debug, Error)]
pub enum SupabaseError {
    #[error("Failed to configure job tracker client: {0}")]
    ConfigError(String),

    #[error("Login failed: {0}")]
    LoginFailed(String),

    #[error("Job {job} not updated: {message}")]
    UpdateFailed { job: String, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl SupabaseError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
