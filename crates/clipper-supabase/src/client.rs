//! Supabase REST client: GoTrue login and PostgREST job updates.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use crate::error::{SupabaseError, SupabaseResult};

/// Job-tracker client configuration.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Supabase project base URL
    pub base_url: String,
    /// Project API key (sent as `Apikey` on every request)
    pub api_key: String,
    /// Service account email for the password grant
    pub email: String,
    /// Service account password
    pub password: String,
    /// Request timeout
    pub timeout: Duration,
}

impl SupabaseConfig {
    /// Create config from environment variables.
    pub fn from_env() -> SupabaseResult<Self> {
        Ok(Self {
            base_url: std::env::var("SUPABASE_URL")
                .map_err(|_| SupabaseError::config_error("SUPABASE_URL not set"))?,
            api_key: std::env::var("SUPABASE_API_KEY")
                .map_err(|_| SupabaseError::config_error("SUPABASE_API_KEY not set"))?,
            email: std::env::var("SUPABASE_EMAIL")
                .map_err(|_| SupabaseError::config_error("SUPABASE_EMAIL not set"))?,
            password: std::env::var("SUPABASE_PASSWORD")
                .map_err(|_| SupabaseError::config_error("SUPABASE_PASSWORD not set"))?,
            timeout: Duration::from_secs(
                std::env::var("SUPABASE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
        })
    }
}

/// Bearer session obtained from one login.
///
/// A value rather than client-interior state, so one client can serve
/// concurrent batches, each with its own session.
#[derive(Debug, Clone)]
pub struct JobSession {
    access_token: String,
}

impl JobSession {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.access_token
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// REST client for the job tracker.
#[derive(Clone)]
pub struct SupabaseClient {
    http: Client,
    config: SupabaseConfig,
}

impl SupabaseClient {
    /// Create a new client.
    pub fn new(config: SupabaseConfig) -> SupabaseResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(5))
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(10)
            .user_agent(concat!("clipper-supabase/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(SupabaseError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> SupabaseResult<Self> {
        let config = SupabaseConfig::from_env()?;
        Self::new(config)
    }

    /// Log in with the password grant. One session serves a whole batch.
    pub async fn login(&self) -> SupabaseResult<JobSession> {
        let url = format!("{}/auth/v1/token?grant_type=password", self.config.base_url);
        let body = json!({
            "email": self.config.email,
            "password": self.config.password,
            "gotrue_meta_security": {},
        });

        let response = self
            .http
            .post(&url)
            .header("Apikey", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::OK {
            let token: TokenResponse = response.json().await?;
            debug!("Job tracker login succeeded");
            Ok(JobSession::new(token.access_token))
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(SupabaseError::LoginFailed(format!("{}: {}", status, body)))
        }
    }

    /// Update one job's state and progress.
    pub async fn update_job(
        &self,
        session: &JobSession,
        job_key: &str,
        state: &str,
        progress: u8,
    ) -> SupabaseResult<()> {
        let url = format!(
            "{}/rest/v1/jobs?uri=eq.{}",
            self.config.base_url,
            urlencoding::encode(job_key)
        );
        let body = json!({ "state": state, "progress": progress });

        let response = self
            .http
            .patch(&url)
            .header("Apikey", &self.config.api_key)
            .bearer_auth(session.token())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            info!("Job {} updated to {}", job_key, state);
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(SupabaseError::UpdateFailed {
                job: job_key.to_string(),
                message: format!("{}: {}", status, body),
            })
        }
    }
}
