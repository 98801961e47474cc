//! PostToolUse hook that catches the agent waving a problem away as
//! "unrelated" or "pre-existing" and forces an investigation.
//!
//! The hook fires after every tool call. Each call scans only the transcript
//! bytes appended since the previous call for the same session, so a given
//! dismissal triggers at most once:
//!
//! ```text
//! event ─► offset store ─► reader ─► records ─► classifier ─► directive
//!              ▲              │
//!              └── commit ────┘  (before classification)
//! ```

pub mod classifier;
pub mod error;
pub mod hook;
pub mod instructions;
pub mod offset_store;
pub mod reader;

pub use classifier::DismissalClassifier;
pub use error::{DetectorError, ScanError};
pub use hook::Outcome;
pub use offset_store::{FileOffsetStore, MemoryOffsetStore, OffsetStore};
