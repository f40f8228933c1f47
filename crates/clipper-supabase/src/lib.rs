//! Supabase job-tracker REST client.
//!
//! Thin client over the two endpoints the clip pipeline reports through:
//! GoTrue password-grant login and PostgREST `jobs` updates. Strictly a
//! side channel: callers are expected to swallow every error here.

pub mod client;
pub mod error;

pub use client::{JobSession, SupabaseClient, SupabaseConfig};
pub use error::{SupabaseError, SupabaseResult};

#[cfg(test)]
mod client_tests;
