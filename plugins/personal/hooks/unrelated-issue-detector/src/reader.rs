//! Reads the part of a transcript appended since the last scan.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use crate::ScanError;

/// Bytes appended since the previous scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContent {
    /// The appended bytes, decoded lossily so a torn UTF-8 sequence at either
    /// end never aborts the scan.
    pub text: String,
    /// Offset just past the last byte read; the value to commit.
    pub end: u64,
}

/// Read `path` from `last_offset` to its current end.
///
/// Returns `Ok(None)` when the file is no longer than `last_offset`: nothing
/// was appended, or the file was truncated or replaced and the stored offset
/// points past its end. Exactly the bytes present when the size was taken are
/// read, even if the runtime keeps appending meanwhile.
pub fn read_new(path: &Path, last_offset: u64) -> Result<Option<NewContent>, ScanError> {
    let mut file = File::open(path).map_err(ScanError::Open)?;

    // Directories open fine on Linux and report a nonsense size on seek.
    if !file.metadata().map_err(ScanError::Size)?.is_file() {
        return Err(ScanError::NotAFile);
    }

    let size = file.seek(SeekFrom::End(0)).map_err(ScanError::Size)?;
    if size <= last_offset {
        return Ok(None);
    }

    file.seek(SeekFrom::Start(last_offset))
        .map_err(|source| ScanError::Seek {
            offset: last_offset,
            source,
        })?;

    let pending = size - last_offset;
    let mut bytes = Vec::new();
    file.take(pending)
        .read_to_end(&mut bytes)
        .map_err(ScanError::Read)?;

    Ok(Some(NewContent {
        text: String::from_utf8_lossy(&bytes).into_owned(),
        end: last_offset + bytes.len() as u64,
    }))
}
