//! Shared data models for the clipper backend.
//!
//! This crate provides Serde-serializable types for:
//! - Batch clip requests and per-part outcomes
//! - Range validation against the configured duration ceiling
//! - Canonical storage object naming (the idempotency contract)
//! - Encoding configuration for the transcode step

pub mod encoding;
pub mod naming;
pub mod part;
pub mod validation;

// Re-export common types
pub use encoding::EncodingConfig;
pub use part::{group_by_video, BatchRequest, BatchResponse, ClipPart, PartOutcome};
pub use validation::{validate_range, RangeCheck};
