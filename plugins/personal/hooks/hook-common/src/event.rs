//! The JSON event the runtime pipes to a hook on stdin.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::HookError;

/// Session id used when the runtime leaves `session_id` out.
pub const UNKNOWN_SESSION: &str = "unknown";

/// Fields of the hook event the personal hooks care about. Anything else the
/// runtime sends (`cwd`, `tool_name`, `tool_input`, ...) is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct HookEvent {
    #[serde(default)]
    session_id: Option<String>,
    #[serde(default)]
    transcript_path: Option<String>,
    #[serde(default)]
    hook_event_name: Option<String>,
    /// Set on `Stop` events when the agent is already continuing because a
    /// stop hook blocked it.
    #[serde(default)]
    pub stop_hook_active: Option<bool>,
}

impl HookEvent {
    pub fn parse(input: &str) -> Result<Self, HookError> {
        serde_json::from_str(input).map_err(HookError::InvalidEvent)
    }

    /// Read the whole of `reader` and parse it as one event.
    pub fn read_from(mut reader: impl Read) -> Result<Self, HookError> {
        let mut input = String::new();
        reader
            .read_to_string(&mut input)
            .map_err(HookError::Stdin)?;
        Self::parse(&input)
    }

    pub fn session_id(&self) -> &str {
        self.session_id.as_deref().unwrap_or(UNKNOWN_SESSION)
    }

    /// The transcript path, or `None` when absent or empty.
    pub fn transcript_path(&self) -> Option<&Path> {
        match self.transcript_path.as_deref() {
            Some(p) if !p.is_empty() => Some(Path::new(p)),
            _ => None,
        }
    }

    /// `PostToolUse`, `Stop`, ... as named by the runtime.
    pub fn hook_event_name(&self) -> Option<&str> {
        self.hook_event_name.as_deref()
    }

    pub fn stop_hook_active(&self) -> bool {
        self.stop_hook_active.unwrap_or(false)
    }
}
