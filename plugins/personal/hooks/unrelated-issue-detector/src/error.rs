use std::io;
use std::path::PathBuf;

use hook_common::HookError;
use thiserror::Error;

/// Why reading the new part of a transcript failed. Any of these leaves the
/// stored offset untouched.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("open failed: {0}")]
    Open(#[source] io::Error),

    #[error("not a regular file")]
    NotAFile,

    #[error("could not determine size: {0}")]
    Size(#[source] io::Error),

    #[error("seek to byte {offset} failed: {source}")]
    Seek {
        offset: u64,
        #[source]
        source: io::Error,
    },

    #[error("read failed: {0}")]
    Read(#[source] io::Error),
}

#[derive(Debug, Error)]
pub enum DetectorError {
    #[error(transparent)]
    Hook(#[from] HookError),

    #[error("failed to scan transcript {}: {source}", .path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: ScanError,
    },

    #[error("dismissal patterns failed to compile: {0}")]
    Patterns(#[from] regex::Error),
}
