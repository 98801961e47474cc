//! Per-session record of how far into the transcript the hook has scanned.
//!
//! The store never fails its caller. An unreadable or corrupt record reads as
//! 0 (rescan from the start); a failed write is dropped (the next call rescans
//! a little more than it needs to).
//!
//! No locking: the runtime invokes hooks for one session one at a time, and
//! different sessions never share a record.

use std::cell::RefCell;
use std::collections::HashMap;
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use tracing::debug;

pub trait OffsetStore {
    /// Bytes of the session's transcript already scanned, 0 if unknown.
    fn read(&self, session_id: &str) -> u64;

    /// Best-effort persist of `offset` for the session.
    fn write(&self, session_id: &str, offset: u64);
}

const FILE_PREFIX: &str = "unrelated-issue-";
const FILE_SUFFIX: &str = ".offset";

/// One small file per session holding the offset as decimal text.
#[derive(Debug, Clone)]
pub struct FileOffsetStore {
    dir: PathBuf,
}

impl FileOffsetStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store offsets in the system temporary directory.
    pub fn in_temp_dir() -> Self {
        Self::new(env::temp_dir())
    }

    pub fn path_for(&self, session_id: &str) -> PathBuf {
        self.dir
            .join(format!("{FILE_PREFIX}{}{FILE_SUFFIX}", escape_session_id(session_id)))
    }
}

impl OffsetStore for FileOffsetStore {
    fn read(&self, session_id: &str) -> u64 {
        fs::read_to_string(self.path_for(session_id))
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0)
    }

    fn write(&self, session_id: &str, offset: u64) {
        let path = self.path_for(session_id);
        if let Err(err) = fs::write(&path, offset.to_string()) {
            debug!(path = %path.display(), error = %err, "dropping offset write");
        }
    }
}

/// Keep ASCII alphanumerics, `-` and `_`; percent-encode every other byte.
/// Distinct ids map to distinct file names and no id can leave the directory.
fn escape_session_id(session_id: &str) -> String {
    let mut out = String::with_capacity(session_id.len());
    for byte in session_id.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
            out.push(char::from(byte));
        } else {
            let _ = write!(out, "%{byte:02X}");
        }
    }
    out
}

/// In-memory store, for tests and for embedding the scan in a long-lived
/// process.
#[derive(Debug, Default)]
pub struct MemoryOffsetStore {
    offsets: RefCell<HashMap<String, u64>>,
}

impl MemoryOffsetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored offset, or `None` if the session was never written.
    pub fn get(&self, session_id: &str) -> Option<u64> {
        self.offsets.borrow().get(session_id).copied()
    }
}

impl OffsetStore for MemoryOffsetStore {
    fn read(&self, session_id: &str) -> u64 {
        self.get(session_id).unwrap_or(0)
    }

    fn write(&self, session_id: &str, offset: u64) {
        self.offsets
            .borrow_mut()
            .insert(session_id.to_owned(), offset);
    }
}
