//! Source video resolution.

use std::sync::Arc;

use tracing::{info, warn};

use clipper_media::SourceRef;
use clipper_models::naming;

use crate::config::{EngineConfig, SourceAccess};
use crate::ports::ObjectStore;

/// Resolves each distinct video to a [`SourceRef`].
///
/// Called at most once per video per batch regardless of how many parts
/// reference it.
pub struct SourceResolver {
    config: EngineConfig,
    store: Arc<dyn ObjectStore>,
}

impl SourceResolver {
    pub fn new(config: EngineConfig, store: Arc<dyn ObjectStore>) -> Self {
        Self { config, store }
    }

    /// Resolve the source for `video`.
    ///
    /// In download mode, a failed download is logged and the local path is
    /// returned anyway: each part of the video then fails at its own
    /// transcode step rather than the whole video failing in one place.
    pub async fn resolve(&self, video: &str, access_token: Option<&str>) -> SourceRef {
        match &self.config.source_access {
            SourceAccess::Download => {
                let target = self.config.working_dir.join(naming::source_file_name(video));
                if target.exists() {
                    info!("{} already downloaded", target.display());
                } else {
                    info!("Downloading {}...", video);
                    let key = naming::source_object_name(video);
                    match self.store.download(&key, &target).await {
                        Ok(()) => info!("...{} downloaded", video),
                        Err(e) => warn!("Failed to download source {}: {}", key, e),
                    }
                }
                SourceRef::File(target)
            }
            SourceAccess::SignedUrl { base_url } => {
                let mut url = format!(
                    "{}/{}",
                    base_url.trim_end_matches('/'),
                    naming::source_object_name(video)
                );
                if let Some(token) = access_token {
                    url = format!("{url}?token={token}");
                }
                SourceRef::Url(url)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockObjectStore;

    fn signed_url_config() -> EngineConfig {
        EngineConfig {
            source_access: SourceAccess::SignedUrl {
                base_url: "https://storage.example".to_string(),
            },
            ..EngineConfig::default()
        }
    }

    #[tokio::test]
    async fn test_signed_url_with_token() {
        let resolver = SourceResolver::new(signed_url_config(), Arc::new(MockObjectStore::new()));

        let source = resolver.resolve("talk", Some("tok")).await;
        assert_eq!(
            source,
            SourceRef::Url("https://storage.example/videos/talk/talk.mp4?token=tok".to_string())
        );
    }

    #[tokio::test]
    async fn test_signed_url_without_token() {
        let resolver = SourceResolver::new(signed_url_config(), Arc::new(MockObjectStore::new()));

        let source = resolver.resolve("talk", None).await;
        assert_eq!(
            source,
            SourceRef::Url("https://storage.example/videos/talk/talk.mp4".to_string())
        );
    }

    #[tokio::test]
    async fn test_download_skipped_when_file_present() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("talk.mp4"), b"cached").unwrap();

        let config = EngineConfig {
            working_dir: dir.path().to_path_buf(),
            source_access: SourceAccess::Download,
            ..EngineConfig::default()
        };

        let mut store = MockObjectStore::new();
        store.expect_download().never();

        let resolver = SourceResolver::new(config, Arc::new(store));
        let source = resolver.resolve("talk", None).await;
        assert_eq!(source, SourceRef::File(dir.path().join("talk.mp4")));
    }

    #[tokio::test]
    async fn test_download_failure_still_returns_local_path() {
        let dir = tempfile::TempDir::new().unwrap();

        let config = EngineConfig {
            working_dir: dir.path().to_path_buf(),
            source_access: SourceAccess::Download,
            ..EngineConfig::default()
        };

        let mut store = MockObjectStore::new();
        store
            .expect_download()
            .withf(|key, _| key == "videos/talk/talk.mp4")
            .times(1)
            .returning(|key, _| Err(clipper_storage::StorageError::not_found(key)));

        let resolver = SourceResolver::new(config, Arc::new(store));
        let source = resolver.resolve("talk", None).await;
        // the missing path is handed back; parts fail at their own transcode
        assert_eq!(source, SourceRef::File(dir.path().join("talk.mp4")));
    }
}
