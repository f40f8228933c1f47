//! FFmpeg CLI wrapper for part clipping.
//!
//! Builds and supervises external `ffmpeg` invocations: argument assembly,
//! wall-clock timeout with kill, and line-streamed diagnostics into the
//! tracing sink.

pub mod clip;
pub mod command;
pub mod error;

pub use clip::{cut_part, SourceRef};
pub use command::{check_ffmpeg, FfmpegCommand, FfmpegRunner};
pub use error::{MediaError, MediaResult};
