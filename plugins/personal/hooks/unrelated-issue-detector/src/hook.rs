//! One hook invocation, from the raw stdin event to an optional directive.

use std::path::Path;

use hook_common::transcript::records;
use hook_common::{Directive, HookError, HookEvent};
use tracing::debug;

use crate::classifier::{pattern_name, DismissalClassifier};
use crate::instructions::INVESTIGATION_INSTRUCTIONS;
use crate::reader::read_new;
use crate::{DetectorError, OffsetStore};

/// How an invocation ended. Only [`Outcome::Dismissal`] produces output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The transcript did not grow past the stored offset.
    NothingNew,
    /// New records arrived but none carried assistant text.
    NoAssistantText,
    /// Assistant text arrived and none of it matched.
    Clean,
    Dismissal(Directive),
}

impl Outcome {
    pub fn into_directive(self) -> Option<Directive> {
        match self {
            Outcome::Dismissal(directive) => Some(directive),
            _ => None,
        }
    }
}

/// Handle one event. Errors are for logging only: every one of them means
/// "no output", and none of them happen after the offset was committed.
pub fn run<S>(
    input: &str,
    store: &S,
    classifier: &DismissalClassifier,
) -> Result<Outcome, DetectorError>
where
    S: OffsetStore + ?Sized,
{
    let event = HookEvent::parse(input)?;

    let session_id = event.session_id();
    debug!(session_id, event = event.hook_event_name(), "handling hook event");
    let transcript = event.transcript_path().ok_or(HookError::NoTranscript)?;

    let Some(new_content) = scan(store, session_id, transcript)? else {
        return Ok(Outcome::NothingNew);
    };

    let text = assistant_text(&new_content);
    if text.is_empty() {
        return Ok(Outcome::NoAssistantText);
    }

    let matched = classifier.matching(&text);
    if matched.is_empty() {
        return Ok(Outcome::Clean);
    }

    let names: Vec<&str> = matched.into_iter().map(pattern_name).collect();
    debug!(session_id, patterns = ?names, "dismissal detected");
    Ok(Outcome::Dismissal(Directive::block(INVESTIGATION_INSTRUCTIONS)))
}

/// Read what was appended since the last call and commit the new offset
/// before anything looks at the content. A crash after the commit can lose
/// one detection but can never fire twice on the same bytes.
pub fn scan<S>(
    store: &S,
    session_id: &str,
    transcript: &Path,
) -> Result<Option<String>, DetectorError>
where
    S: OffsetStore + ?Sized,
{
    let last_offset = store.read(session_id);

    let new = read_new(transcript, last_offset).map_err(|source| DetectorError::Scan {
        path: transcript.to_owned(),
        source,
    })?;

    let Some(new) = new else {
        debug!(session_id, last_offset, "nothing appended since last scan");
        return Ok(None);
    };

    store.write(session_id, new.end);
    debug!(session_id, from = last_offset, to = new.end, "offset committed");

    Ok(Some(new.text))
}

/// Assistant text of every record in `new_content`, in order, one record per
/// line.
pub fn assistant_text(new_content: &str) -> String {
    records(new_content)
        .map(|record| record.assistant_text())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
