//! Hedging phrases and code markers, collected once each in first-seen order.

use std::collections::HashSet;
use std::fmt;

use hook_common::{Block, Content, Record};

/// Matched case-insensitively.
pub const PHRASES: &[&str] = &[
    // deferred work
    "for now",
    "revisit later",
    "revisit this",
    "come back to this",
    "should be replaced",
    "should be updated",
    "should be revisited",
    "will need to be",
    // quality shortcuts
    "good enough",
    "acceptable solution",
    "simple enough",
    "simple approach",
    "basic implementation",
    "simplified version",
    "quick and dirty",
    "not ideal",
    // version hedging
    "first version",
    "initial version",
    // placeholders
    "placeholder",
    "hardcoded",
    "hard-coded",
    "workaround",
    "temporary fix",
    "temporary solution",
    "temporary",
    // dismissals
    "pre-existing",
    "isn't related to",
    "aren't related to",
];

/// Matched case-sensitively so prose like "todo list" does not count.
pub const CODE_MARKERS: &[&str] = &["TODO", "FIXME", "HACK", "XXX"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finding {
    Phrase(&'static str),
    Marker(&'static str),
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::Phrase(phrase) => write!(f, "\"{phrase}\""),
            Finding::Marker(marker) => write!(f, "{marker} comment"),
        }
    }
}

#[derive(Debug, Default)]
pub struct Findings {
    found: Vec<Finding>,
    seen: HashSet<&'static str>,
}

impl Findings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scan_text(&mut self, text: &str) {
        let lower = text.to_lowercase();
        for &phrase in PHRASES {
            if lower.contains(phrase) && self.seen.insert(phrase) {
                self.found.push(Finding::Phrase(phrase));
            }
        }
        for &marker in CODE_MARKERS {
            if text.contains(marker) && self.seen.insert(marker) {
                self.found.push(Finding::Marker(marker));
            }
        }
    }

    /// Assistant prose plus the text it wrote into files through Write
    /// (`content`) and Edit (`new_string`).
    pub fn scan_record(&mut self, record: &Record) {
        let Record::Assistant(content) = record else {
            return;
        };
        match content {
            Content::Text(text) => self.scan_text(text),
            Content::Blocks(blocks) => {
                for block in blocks {
                    match block {
                        Block::Text(text) => self.scan_text(text),
                        Block::ToolUse { input } => {
                            for field in ["content", "new_string"] {
                                if let Some(text) = input.get(field).and_then(|v| v.as_str()) {
                                    self.scan_text(text);
                                }
                            }
                        }
                        Block::ToolResult | Block::Other => {}
                    }
                }
            }
            Content::Missing => {}
        }
    }

    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }

    #[cfg(test)]
    pub fn as_slice(&self) -> &[Finding] {
        &self.found
    }

    /// Comma-separated list for the block reason.
    pub fn summary(&self) -> String {
        self.found
            .iter()
            .map(Finding::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
