//! Clip orchestration engine.
//!
//! The core pipeline behind the HTTP surface: groups part requests by source
//! video, resolves each video's source once, runs every part through
//! validation, idempotent existence checks, transcoding, and conditional
//! upload, then reports terminal job states best-effort.

pub mod adapters;
pub mod config;
pub mod orchestrator;
pub mod ports;
pub mod reporter;
pub mod source;

pub use adapters::FfmpegPartCutter;
pub use config::{EngineConfig, SourceAccess};
pub use orchestrator::ClipOrchestrator;
pub use ports::{JobTracker, ObjectStore, PartCutter};
pub use reporter::JobStatusReporter;
pub use source::SourceResolver;
