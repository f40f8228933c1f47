//! Production implementations of the capability ports.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;

use clipper_media::{cut_part, FfmpegRunner, MediaResult, SourceRef};
use clipper_models::EncodingConfig;
use clipper_storage::{StorageClient, StorageResult};
use clipper_supabase::{JobSession, SupabaseClient, SupabaseResult};

use crate::ports::{JobTracker, ObjectStore, PartCutter};

#[async_trait]
impl ObjectStore for StorageClient {
    async fn exists(&self, key: &str) -> StorageResult<bool> {
        StorageClient::exists(self, key).await
    }

    async fn download(&self, key: &str, dest: &Path) -> StorageResult<()> {
        StorageClient::download_file(self, key, dest).await
    }

    async fn create_if_absent(
        &self,
        key: &str,
        file: &Path,
        content_type: &str,
        cache_control: &str,
    ) -> StorageResult<()> {
        StorageClient::create_if_absent(self, key, file, content_type, cache_control).await
    }
}

/// Cuts parts by supervising the external ffmpeg binary.
pub struct FfmpegPartCutter {
    runner: FfmpegRunner,
    encoding: EncodingConfig,
}

impl FfmpegPartCutter {
    /// Create a cutter with the per-transcode timeout and encoding profile.
    pub fn new(timeout: Duration, encoding: EncodingConfig) -> Self {
        Self {
            runner: FfmpegRunner::new().with_timeout(timeout),
            encoding,
        }
    }
}

#[async_trait]
impl PartCutter for FfmpegPartCutter {
    async fn cut(&self, source: &SourceRef, from: i64, to: i64, output: &Path) -> MediaResult<()> {
        cut_part(&self.runner, source, from, to, output, &self.encoding).await
    }
}

#[async_trait]
impl JobTracker for SupabaseClient {
    async fn login(&self) -> SupabaseResult<JobSession> {
        SupabaseClient::login(self).await
    }

    async fn update_job(
        &self,
        session: &JobSession,
        job_key: &str,
        state: &str,
        progress: u8,
    ) -> SupabaseResult<()> {
        SupabaseClient::update_job(self, session, job_key, state, progress).await
    }
}
