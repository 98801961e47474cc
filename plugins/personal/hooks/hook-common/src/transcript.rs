//! Transcript records.
//!
//! The runtime writes the transcript as newline-delimited JSON, one record per
//! line. Records come in two shapes:
//!
//! ```text
//! {"role":"assistant","content":"..."}                                  flat
//! {"type":"assistant","message":{"role":"assistant","content":[...]}}   wrapped
//! ```
//!
//! and `content` is either a string or a list of typed blocks. [`Record`]
//! folds all of these into one tagged value; conversion never fails, unknown
//! shapes become [`Record::Other`] or [`Content::Missing`].

use serde_json::Value;

/// One parsed transcript line.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Assistant(Content),
    User(Content),
    Other,
}

/// The `content` of a message.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Text(String),
    Blocks(Vec<Block>),
    Missing,
}

/// One typed entry of a block-list `content`.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Text(String),
    ToolUse { input: Value },
    ToolResult,
    Other,
}

impl Record {
    /// Parse one transcript line. `None` when the line is not JSON at all,
    /// which happens for torn lines at the end of a partially written file.
    pub fn parse(line: &str) -> Option<Self> {
        serde_json::from_str::<Value>(line)
            .ok()
            .map(|value| Self::from_value(&value))
    }

    pub fn from_value(value: &Value) -> Self {
        let role = value.get("role").and_then(Value::as_str);
        let kind = value.get("type").and_then(Value::as_str);
        let wrapped = || value.get("message").and_then(|m| m.get("content"));

        match (role, kind) {
            (Some("assistant"), _) => {
                Record::Assistant(Content::from_value(value.get("content")))
            }
            (_, Some("assistant")) => Record::Assistant(Content::from_value(wrapped())),
            (Some("user"), _) => Record::User(Content::from_value(value.get("content"))),
            (_, Some("user")) => Record::User(Content::from_value(wrapped())),
            _ => Record::Other,
        }
    }

    /// Plain text the assistant wrote in this record; empty for every other
    /// record.
    pub fn assistant_text(&self) -> String {
        match self {
            Record::Assistant(content) => content.text(),
            _ => String::new(),
        }
    }

    /// A prompt typed by the user, as opposed to a user record that only
    /// carries tool results back to the assistant.
    pub fn is_user_prompt(&self) -> bool {
        matches!(self, Record::User(Content::Text(_)))
    }
}

impl Content {
    fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::String(s)) => Content::Text(s.clone()),
            Some(Value::Array(items)) => {
                Content::Blocks(items.iter().map(Block::from_value).collect())
            }
            _ => Content::Missing,
        }
    }

    /// Flat text verbatim, or the `text` blocks joined with a single space.
    pub fn text(&self) -> String {
        match self {
            Content::Text(s) => s.clone(),
            Content::Blocks(blocks) => blocks
                .iter()
                .filter_map(|block| match block {
                    Block::Text(t) => Some(t.as_str()),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join(" "),
            Content::Missing => String::new(),
        }
    }

    pub fn blocks(&self) -> &[Block] {
        match self {
            Content::Blocks(blocks) => blocks,
            _ => &[],
        }
    }
}

impl Block {
    fn from_value(value: &Value) -> Self {
        match value.get("type").and_then(Value::as_str) {
            Some("text") => match value.get("text").and_then(Value::as_str) {
                Some(text) => Block::Text(text.to_owned()),
                None => Block::Other,
            },
            Some("tool_use") => Block::ToolUse {
                input: value.get("input").cloned().unwrap_or(Value::Null),
            },
            Some("tool_result") => Block::ToolResult,
            _ => Block::Other,
        }
    }
}

/// Parse every non-blank line of `text`, skipping lines that are not JSON.
pub fn records(text: &str) -> impl Iterator<Item = Record> + '_ {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let record = Record::parse(line);
            if record.is_none() {
                tracing::trace!(len = line.len(), "skipping unparsable transcript line");
            }
            record
        })
}
