//! Stop hook that catches hedging language suggesting shortcuts or deferred
//! work.
//!
//! Trust but verify: scan the current turn's assistant output for phrases
//! that hint corners were cut, then block the stop and ask the agent to report
//! each shortcut so the user can make the call.

mod scan;
mod turn;

use std::fs;
use std::io;
use std::process::ExitCode;

use clap::Parser;
use hook_common::cli::{self, Invocation};
use hook_common::logging::{self, LogArgs};
use hook_common::transcript::records;
use hook_common::{Directive, HookError, HookEvent, Record};
use tracing::{debug, warn};

use crate::scan::Findings;
use crate::turn::current_turn;

#[derive(Debug, Default, Parser)]
#[command(
    name = "mediocrity-detector",
    version,
    about = "Blocks a stop when the turn hedges about shortcuts"
)]
struct Cli {
    #[command(flatten)]
    log: LogArgs,
}

fn main() -> ExitCode {
    let cli = match cli::parse::<Cli>() {
        Invocation::Exit => return ExitCode::SUCCESS,
        Invocation::Run { cli, rejected } => {
            logging::init(&cli.log);
            if let Some(err) = rejected {
                warn!(kind = ?err.kind(), "ignoring unusable arguments");
            }
            cli
        }
    };
    debug!(?cli, "mediocrity-detector starting");

    match HookEvent::read_from(io::stdin().lock()).and_then(|event| evaluate(&event)) {
        Ok(Some(directive)) => {
            if let Err(err) = directive.emit(io::stdout().lock()) {
                debug!(error = %err, "directive lost");
            }
        }
        Ok(None) => {}
        Err(err) => debug!(error = %err, "no directive"),
    }

    ExitCode::SUCCESS
}

fn evaluate(event: &HookEvent) -> Result<Option<Directive>, HookError> {
    debug!(
        session_id = event.session_id(),
        event = event.hook_event_name(),
        "handling hook event"
    );

    // Already continuing because of a stop hook: let it stop this time.
    if event.stop_hook_active() {
        return Ok(None);
    }

    let path = event.transcript_path().ok_or(HookError::NoTranscript)?;
    let transcript = fs::read_to_string(path).map_err(|source| HookError::Transcript {
        path: path.to_owned(),
        source,
    })?;

    let findings = scan_turn(&records(&transcript).collect::<Vec<_>>());
    if findings.is_empty() {
        return Ok(None);
    }
    Ok(Some(Directive::block(block_reason(&findings))))
}

fn scan_turn(records: &[Record]) -> Findings {
    let mut findings = Findings::new();
    for record in current_turn(records) {
        findings.scan_record(record);
    }
    findings
}

fn block_reason(findings: &Findings) -> String {
    format!(
        "Shortcut/assumption language detected in this turn: [{}]. \
         Before stopping, explicitly report to the user each shortcut or assumption. \
         For each: (1) what exactly you did and where, (2) why you chose this approach, \
         (3) what a complete solution looks like. Be specific: the user needs to make \
         an informed judgement call.",
        findings.summary()
    )
}
