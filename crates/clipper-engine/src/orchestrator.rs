//! The clip orchestration pipeline.

use std::path::Path;
use std::sync::Arc;

use tracing::{error, info, warn};

use clipper_media::SourceRef;
use clipper_models::{
    group_by_video, naming, validate_range, BatchRequest, BatchResponse, ClipPart, PartOutcome,
    RangeCheck,
};

use crate::config::EngineConfig;
use crate::ports::{ObjectStore, PartCutter};
use crate::source::SourceResolver;

/// Content type set on produced clips.
const CLIP_CONTENT_TYPE: &str = "video/mp4";
/// Clips are immutable once produced; cache them for a year.
const CLIP_CACHE_CONTROL: &str = "public, max-age=31536000";

/// Drives a batch of part requests through validation, idempotent existence
/// checks, transcoding, and conditional upload.
///
/// A batch never fails as a whole: every input part maps to exactly one
/// outcome, and a failure stays local to its part.
pub struct ClipOrchestrator {
    config: EngineConfig,
    store: Arc<dyn ObjectStore>,
    cutter: Arc<dyn PartCutter>,
    resolver: SourceResolver,
}

impl ClipOrchestrator {
    pub fn new(
        config: EngineConfig,
        store: Arc<dyn ObjectStore>,
        cutter: Arc<dyn PartCutter>,
    ) -> Self {
        let resolver = SourceResolver::new(config.clone(), Arc::clone(&store));
        Self {
            config,
            store,
            cutter,
            resolver,
        }
    }

    /// Process one batch.
    ///
    /// Parts are grouped by video; each video's source is resolved once and
    /// its parts run in input order.
    pub async fn process(&self, request: &BatchRequest) -> BatchResponse {
        let mut outcomes = Vec::with_capacity(request.parts.len());

        for (video, parts) in group_by_video(&request.parts) {
            let source = self
                .resolver
                .resolve(video, request.access_token.as_deref())
                .await;

            for part in parts {
                let succeeded = self.process_part(&source, part).await;
                outcomes.push(PartOutcome::new(part, succeeded));
            }
        }

        BatchResponse::from_parts(outcomes)
    }

    /// Run one part through the pipeline.
    async fn process_part(&self, source: &SourceRef, part: &ClipPart) -> bool {
        match validate_range(part.from, part.to, self.config.max_duration) {
            RangeCheck::ReversedBounds => {
                warn!(
                    "Rejecting {} [{}..{}]: boundaries reversed",
                    part.video, part.from, part.to
                );
                return false;
            }
            RangeCheck::TooLong => {
                warn!(
                    "Rejecting {} [{}..{}]: range longer than {}s",
                    part.video, part.from, part.to, self.config.max_duration
                );
                return false;
            }
            RangeCheck::Valid => {}
        }

        let key = naming::part_object_name(&part.video, part.from, part.to);

        // The canonical name is the idempotency token: an existing object
        // means a previous batch already produced this clip.
        match self.store.exists(&key).await {
            Ok(true) => {
                info!(
                    "Part already clipped: {} [{}..{}]",
                    part.video, part.from, part.to
                );
                return true;
            }
            Ok(false) => {}
            Err(e) => {
                error!("Existence check failed for {}: {}", key, e);
                return false;
            }
        }

        let output = self
            .config
            .working_dir
            .join(naming::part_file_name(&part.video, part.from, part.to));

        if let Err(e) = self.cutter.cut(source, part.from, part.to, &output).await {
            error!(
                "Error while clipping {} [{}..{}]: {}",
                part.video, part.from, part.to, e
            );
            return false;
        }

        self.upload_part(part, &key, &output).await
    }

    /// Upload a freshly cut part under the not-exists precondition and clean
    /// up the local file on success.
    async fn upload_part(&self, part: &ClipPart, key: &str, file: &Path) -> bool {
        info!(
            "Uploading part of {} [{}..{}]",
            part.video, part.from, part.to
        );

        match self
            .store
            .create_if_absent(key, file, CLIP_CONTENT_TYPE, CLIP_CACHE_CONTROL)
            .await
        {
            Ok(()) => {
                if let Err(e) = tokio::fs::remove_file(file).await {
                    warn!("Could not remove {}: {}", file.display(), e);
                }
                true
            }
            Err(e) => {
                // the local file is kept for inspection
                error!(
                    "Error while uploading {} [{}..{}]: {}",
                    part.video, part.from, part.to, e
                );
                false
            }
        }
    }
}
