use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures shared by every hook. None of them ever reach the runtime: the
/// binaries log them and exit quietly.
#[derive(Debug, Error)]
pub enum HookError {
    #[error("failed to read hook input: {0}")]
    Stdin(#[source] io::Error),

    #[error("hook input is not a valid event: {0}")]
    InvalidEvent(#[source] serde_json::Error),

    #[error("event carries no transcript path")]
    NoTranscript,

    #[error("failed to read transcript {}: {source}", .path.display())]
    Transcript {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode directive: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to write directive: {0}")]
    Emit(#[source] io::Error),
}
