//! Application state.

use std::sync::Arc;

use clipper_engine::{
    ClipOrchestrator, EngineConfig, FfmpegPartCutter, JobStatusReporter, JobTracker, ObjectStore,
    PartCutter,
};
use clipper_models::EncodingConfig;
use clipper_storage::StorageClient;
use clipper_supabase::SupabaseClient;

use crate::config::ApiConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub orchestrator: Arc<ClipOrchestrator>,
    pub reporter: Arc<JobStatusReporter>,
}

impl AppState {
    /// Create application state wired to the production capabilities.
    pub fn new(config: ApiConfig, engine_config: EngineConfig) -> anyhow::Result<Self> {
        let store: Arc<dyn ObjectStore> = Arc::new(StorageClient::from_env()?);
        let cutter: Arc<dyn PartCutter> = Arc::new(FfmpegPartCutter::new(
            engine_config.clip_timeout,
            EncodingConfig::default(),
        ));
        let tracker: Arc<dyn JobTracker> = Arc::new(SupabaseClient::from_env()?);

        Ok(Self::with_capabilities(
            config,
            engine_config,
            store,
            cutter,
            tracker,
        ))
    }

    /// Create application state over explicit capabilities.
    pub fn with_capabilities(
        config: ApiConfig,
        engine_config: EngineConfig,
        store: Arc<dyn ObjectStore>,
        cutter: Arc<dyn PartCutter>,
        tracker: Arc<dyn JobTracker>,
    ) -> Self {
        let orchestrator = Arc::new(ClipOrchestrator::new(engine_config, store, cutter));
        let reporter = Arc::new(JobStatusReporter::new(tracker));

        Self {
            config,
            orchestrator,
            reporter,
        }
    }
}
