//! Part cutting.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::info;

use clipper_models::EncodingConfig;

use crate::command::{FfmpegCommand, FfmpegRunner};
use crate::error::MediaResult;

/// Reference to a source video, as the transcoder will read it.
///
/// The two deployment modes differ only here: sources are either
/// pre-downloaded into shared working storage or read through a directly
/// fetchable URL carrying an access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceRef {
    /// Local file in working storage.
    File(PathBuf),
    /// Directly fetchable URL.
    Url(String),
}

impl SourceRef {
    /// The ffmpeg input spec for this source.
    pub fn as_input(&self) -> String {
        match self {
            SourceRef::File(path) => path.to_string_lossy().into_owned(),
            SourceRef::Url(url) => url.clone(),
        }
    }
}

impl fmt::Display for SourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceRef::File(path) => write!(f, "{}", path.display()),
            SourceRef::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Cut one part out of a source video, re-encoding with the given profile.
///
/// The output file is only trustworthy when this returns `Ok`; on timeout or
/// a non-zero exit the caller must not upload whatever was partially written.
pub async fn cut_part(
    runner: &FfmpegRunner,
    source: &SourceRef,
    from: i64,
    to: i64,
    output: impl AsRef<Path>,
    encoding: &EncodingConfig,
) -> MediaResult<()> {
    let output = output.as_ref();

    info!(
        "Cutting {} [{}s..{}s] -> {}",
        source,
        from,
        to,
        output.display()
    );

    let cmd = FfmpegCommand::new(source.as_input(), output)
        .seek_range(from, to)
        .encoding(encoding);

    runner.run(&cmd).await
}
