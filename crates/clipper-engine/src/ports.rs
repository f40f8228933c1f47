//! Capability ports the pipeline depends on.
//!
//! The orchestrator and reporter are written against these traits; the
//! production implementations live in [`crate::adapters`] over the client
//! crates, and tests substitute mocks.

use std::path::Path;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use clipper_media::{MediaResult, SourceRef};
use clipper_storage::StorageResult;
use clipper_supabase::{JobSession, SupabaseResult};

/// Durable object storage for source videos and produced clips.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Whether `key` already exists.
    async fn exists(&self, key: &str) -> StorageResult<bool>;

    /// Download `key` into `dest`.
    async fn download(&self, key: &str, dest: &Path) -> StorageResult<()>;

    /// Create `key` from a local file, failing if the object already exists.
    async fn create_if_absent(
        &self,
        key: &str,
        file: &Path,
        content_type: &str,
        cache_control: &str,
    ) -> StorageResult<()>;
}

/// External transcoder cutting one part out of a source video.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PartCutter: Send + Sync {
    /// Cut `[from, to)` out of `source` into `output`.
    ///
    /// `output` is only trustworthy on `Ok`.
    async fn cut(&self, source: &SourceRef, from: i64, to: i64, output: &Path) -> MediaResult<()>;
}

/// Job tracker receiving best-effort status updates.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait JobTracker: Send + Sync {
    /// Log in once; the session serves a whole batch of updates.
    async fn login(&self) -> SupabaseResult<JobSession>;

    /// Push one job's terminal state.
    async fn update_job(
        &self,
        session: &JobSession,
        job_key: &str,
        state: &str,
        progress: u8,
    ) -> SupabaseResult<()>;
}
