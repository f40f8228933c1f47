//! Best-effort job-status reporting.

use std::sync::Arc;

use tracing::warn;

use clipper_models::{naming, BatchResponse};

use crate::ports::JobTracker;

/// Terminal state pushed for a part that succeeded.
const STATE_DONE: &str = "done";
/// Terminal state pushed for a part that failed.
const STATE_ERROR: &str = "error";

/// Pushes terminal job states for a finished batch.
///
/// Purely observational: one login per batch, then one update per part.
/// Every failure is swallowed at this boundary — the batch response is
/// already final and this phase can never change it.
pub struct JobStatusReporter {
    tracker: Arc<dyn JobTracker>,
}

impl JobStatusReporter {
    pub fn new(tracker: Arc<dyn JobTracker>) -> Self {
        Self { tracker }
    }

    /// Report all outcomes of a finished batch.
    pub async fn report(&self, response: &BatchResponse) {
        if response.parts.is_empty() {
            return;
        }

        let session = match self.tracker.login().await {
            Ok(session) => session,
            Err(e) => {
                warn!("Job tracker login failed, skipping status updates: {}", e);
                return;
            }
        };

        for outcome in &response.parts {
            let key = naming::job_key(&outcome.video, outcome.from, outcome.to);
            let (state, progress) = if outcome.succeeded {
                (STATE_DONE, 100)
            } else {
                (STATE_ERROR, 0)
            };

            if let Err(e) = self.tracker.update_job(&session, &key, state, progress).await {
                warn!("Job status update failed for {}: {}", key, e);
            }
        }
    }
}
