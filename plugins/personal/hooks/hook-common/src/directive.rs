//! The JSON directive a hook prints to stdout.
//!
//! No output means "proceed unaltered", so the only directive the personal
//! hooks ever produce is a block carrying a reason the agent reads on its next
//! loop iteration.

use std::borrow::Cow;
use std::io::Write;

use serde::Serialize;

use crate::HookError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Block,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Directive {
    pub decision: Decision,
    pub reason: Cow<'static, str>,
}

impl Directive {
    pub fn block(reason: impl Into<Cow<'static, str>>) -> Self {
        Self {
            decision: Decision::Block,
            reason: reason.into(),
        }
    }

    /// Write the directive as a single JSON line.
    pub fn emit(&self, mut out: impl Write) -> Result<(), HookError> {
        let line = serde_json::to_string(self).map_err(HookError::Encode)?;
        writeln!(out, "{line}").map_err(HookError::Emit)?;
        out.flush().map_err(HookError::Emit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn block_serializes_as_one_line() {
        let mut out = Vec::new();
        Directive::block("first\n\nsecond \"quoted\"")
            .emit(&mut out)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(text.lines().count(), 1);

        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["decision"], "block");
        assert_eq!(value["reason"], "first\n\nsecond \"quoted\"");
        assert_eq!(value.as_object().unwrap().len(), 2);
    }

    #[test]
    fn owned_reasons_are_accepted() {
        let directive = Directive::block(format!("found {}", 3));
        assert_eq!(directive.reason, "found 3");
    }
}
