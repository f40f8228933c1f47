//! S3-compatible object storage client.
//!
//! Provides the storage capability the clip pipeline depends on: existence
//! checks, source downloads, conditional create-uploads, and deletes.

pub mod client;
pub mod error;

pub use client::{StorageClient, StorageConfig};
pub use error::{StorageError, StorageResult};
