//! FFmpeg command builder and runner.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{Child, Command};
use tracing::{debug, warn};

use clipper_models::EncodingConfig;

use crate::error::{MediaError, MediaResult};

/// Builder for FFmpeg commands.
///
/// The input is kept as a plain string: depending on deployment it is either
/// a local file path or a directly fetchable URL, and ffmpeg accepts both.
#[derive(Debug, Clone)]
pub struct FfmpegCommand {
    /// Input file path or URL
    input: String,
    /// Output file path
    output: PathBuf,
    /// Input arguments (before -i)
    input_args: Vec<String>,
    /// Output arguments (after -i)
    output_args: Vec<String>,
    /// Whether to overwrite output
    overwrite: bool,
    /// Log level
    log_level: String,
}

impl FfmpegCommand {
    /// Create a new FFmpeg command.
    pub fn new(input: impl Into<String>, output: impl AsRef<Path>) -> Self {
        Self {
            input: input.into(),
            output: output.as_ref().to_path_buf(),
            input_args: Vec::new(),
            output_args: Vec::new(),
            overwrite: true,
            log_level: "error".to_string(),
        }
    }

    /// Add an input argument (before -i).
    pub fn input_arg(mut self, arg: impl Into<String>) -> Self {
        self.input_args.push(arg.into());
        self
    }

    /// Add an output argument (after -i).
    pub fn output_arg(mut self, arg: impl Into<String>) -> Self {
        self.output_args.push(arg.into());
        self
    }

    /// Add multiple output arguments.
    pub fn output_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.output_args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Cut the range `[from, to)`, in seconds.
    ///
    /// The seek args are output-side so the range is decoded accurately
    /// during the re-encode rather than snapped to the nearest keyframe.
    pub fn seek_range(self, from: i64, to: i64) -> Self {
        self.output_arg("-ss")
            .output_arg(from.to_string())
            .output_arg("-to")
            .output_arg(to.to_string())
    }

    /// Apply an encoding profile.
    pub fn encoding(self, encoding: &EncodingConfig) -> Self {
        self.output_args(encoding.to_ffmpeg_args())
    }

    /// Set log level.
    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Build the command arguments.
    pub fn build_args(&self) -> Vec<String> {
        let mut args = Vec::new();

        // Overwrite flag
        if self.overwrite {
            args.push("-y".to_string());
        }

        // Log level
        args.push("-v".to_string());
        args.push(self.log_level.clone());

        // Newline-terminated progress lines on stderr
        args.push("-progress".to_string());
        args.push("pipe:2".to_string());

        // Input args
        args.extend(self.input_args.clone());

        // Input
        args.push("-i".to_string());
        args.push(self.input.clone());

        // Output args
        args.extend(self.output_args.clone());

        // Output file
        args.push(self.output.to_string_lossy().to_string());

        args
    }
}

/// Runner for FFmpeg commands with a wall-clock timeout.
#[derive(Debug, Clone, Default)]
pub struct FfmpegRunner {
    /// Timeout for the whole invocation
    timeout: Option<Duration>,
}

impl FfmpegRunner {
    /// Create a new runner.
    pub fn new() -> Self {
        Self { timeout: None }
    }

    /// Set the wall-clock timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Run an FFmpeg command to completion.
    ///
    /// Diagnostic output is streamed line-by-line into the log sink as it is
    /// produced. On timeout the process is killed and the output file must
    /// not be trusted.
    pub async fn run(&self, cmd: &FfmpegCommand) -> MediaResult<()> {
        // Check FFmpeg exists
        which::which("ffmpeg").map_err(|_| MediaError::FfmpegNotFound)?;

        let args = cmd.build_args();
        debug!("Running FFmpeg: ffmpeg {}", args.join(" "));

        let mut child = Command::new("ffmpeg")
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        // Drain stderr as it is produced; an undrained pipe would fill up and
        // block the child.
        let stderr = child.stderr.take().expect("stderr not captured");
        let drain_handle = tokio::spawn(async move {
            let mut reader = BufReader::new(stderr).lines();
            while let Ok(Some(line)) = reader.next_line().await {
                debug!(target: "ffmpeg", "{}", line);
            }
        });

        let result = self.wait_for_completion(&mut child).await;

        // Stderr hits EOF once the child is gone
        let _ = drain_handle.await;

        result
    }

    /// Wait for the child process, enforcing the timeout.
    async fn wait_for_completion(&self, child: &mut Child) -> MediaResult<()> {
        let status = if let Some(timeout) = self.timeout {
            match tokio::time::timeout(timeout, child.wait()).await {
                Ok(result) => result?,
                Err(_) => {
                    let secs = timeout.as_secs();
                    warn!("FFmpeg timed out after {} seconds, killing process", secs);
                    let _ = child.kill().await;
                    return Err(MediaError::Timeout(secs));
                }
            }
        } else {
            child.wait().await?
        };

        if status.success() {
            Ok(())
        } else {
            Err(MediaError::ffmpeg_failed(
                "FFmpeg exited with non-zero status",
                status.code(),
            ))
        }
    }
}

/// Check if FFmpeg is available.
pub fn check_ffmpeg() -> MediaResult<PathBuf> {
    which::which("ffmpeg").map_err(|_| MediaError::FfmpegNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_builder() {
        let cmd = FfmpegCommand::new("input.mp4", "output.mp4")
            .seek_range(10, 15)
            .encoding(&EncodingConfig::default());

        let args = cmd.build_args();
        assert!(args.contains(&"-ss".to_string()));
        assert!(args.contains(&"10".to_string()));
        assert!(args.contains(&"-to".to_string()));
        assert!(args.contains(&"15".to_string()));
        assert!(args.contains(&"-c:v".to_string()));
        assert!(args.contains(&"libx264".to_string()));
    }

    #[test]
    fn test_seek_range_is_output_side() {
        let cmd = FfmpegCommand::new("input.mp4", "output.mp4").seek_range(3, 9);
        let args = cmd.build_args();

        let i_pos = args.iter().position(|a| a == "-i").unwrap();
        let ss_pos = args.iter().position(|a| a == "-ss").unwrap();
        assert!(ss_pos > i_pos, "-ss must come after -i");
    }

    #[test]
    fn test_url_input_passes_through() {
        let url = "https://storage.example/videos/talk/talk.mp4?token=abc";
        let cmd = FfmpegCommand::new(url, "out.mp4");
        let args = cmd.build_args();

        let i_pos = args.iter().position(|a| a == "-i").unwrap();
        assert_eq!(args[i_pos + 1], url);
    }

    #[test]
    fn test_output_is_last() {
        let cmd = FfmpegCommand::new("input.mp4", "out.mp4").seek_range(0, 5);
        let args = cmd.build_args();
        assert_eq!(args.last().unwrap(), "out.mp4");
    }
}
