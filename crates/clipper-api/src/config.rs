//! API configuration.

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// CORS allow-list; the first entry is the fallback origin
    pub cors_domains: Vec<String>,
    /// Max request body size
    pub max_body_size: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cors_domains: vec!["http://localhost:3000".to_string()],
            max_body_size: 1024 * 1024, // 1MB
        }
    }
}

impl ApiConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("API_HOST").unwrap_or(defaults.host),
            port: std::env::var("API_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            cors_domains: std::env::var("CORS_DOMAINS")
                .map(|s| parse_domains(&s))
                .ok()
                .filter(|domains| !domains.is_empty())
                .unwrap_or(defaults.cors_domains),
            max_body_size: std::env::var("MAX_BODY_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_body_size),
        }
    }
}

/// Parse a comma-separated allow-list, trimming blanks and duplicates while
/// preserving order (the first entry stays the fallback).
fn parse_domains(raw: &str) -> Vec<String> {
    let mut domains: Vec<String> = Vec::new();
    for entry in raw.split(',') {
        let entry = entry.trim();
        if !entry.is_empty() && !domains.iter().any(|d| d == entry) {
            domains.push(entry.to_string());
        }
    }
    domains
}
