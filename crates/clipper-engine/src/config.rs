//! Engine configuration.

use std::path::PathBuf;
use std::time::Duration;

/// How the transcoder reads source videos.
///
/// The two observed deployment modes differ only in how a source is made
/// available: pre-downloaded into shared working storage, or read through a
/// directly fetchable URL carrying the batch access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceAccess {
    /// Download each source once into the working directory and reuse it.
    Download,
    /// Build an authenticated URL per video from this base.
    SignedUrl { base_url: String },
}

/// Engine configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Working directory for downloaded sources and freshly cut parts
    pub working_dir: PathBuf,
    /// Wall-clock bound for one transcode
    pub clip_timeout: Duration,
    /// Maximum clip duration in seconds
    pub max_duration: i64,
    /// Source access mode
    pub source_access: SourceAccess,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            working_dir: PathBuf::from("/tmp/clipper"),
            clip_timeout: Duration::from_millis(120_000),
            max_duration: 10,
            source_access: SourceAccess::Download,
        }
    }
}

impl EngineConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let source_access = match std::env::var("SOURCE_URL_BASE") {
            Ok(base_url) if !base_url.trim().is_empty() => SourceAccess::SignedUrl {
                base_url: base_url.trim().to_string(),
            },
            _ => SourceAccess::Download,
        };

        Self {
            working_dir: std::env::var("WORKING_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("/tmp/clipper")),
            clip_timeout: Duration::from_millis(
                std::env::var("CLIP_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(120_000),
            ),
            max_duration: std::env::var("MAX_DURATION")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            source_access,
        }
    }
}
