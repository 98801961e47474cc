//! PostToolUse hook binary. Reads the event from stdin, prints a block
//! directive when the new transcript content dismisses a problem, and always
//! exits 0.

use std::env;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use hook_common::cli::{self, Invocation};
use hook_common::logging::{self, LogArgs};
use hook_common::HookError;
use tracing::{debug, warn};
use unrelated_issue_detector::{hook, DetectorError, DismissalClassifier, FileOffsetStore};

const STATE_DIR_ENV: &str = "UNRELATED_ISSUE_STATE_DIR";

#[derive(Debug, Parser)]
#[command(
    name = "unrelated-issue-detector",
    version,
    about = "Blocks the agent when it dismisses a problem as unrelated or pre-existing"
)]
struct Cli {
    /// Directory holding the per-session offset files [default: system temp dir]
    #[arg(long, env = STATE_DIR_ENV, value_name = "DIR")]
    state_dir: Option<PathBuf>,

    #[command(flatten)]
    log: LogArgs,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            state_dir: env::var_os(STATE_DIR_ENV).map(PathBuf::from),
            log: LogArgs::default(),
        }
    }
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

    if let Err(err) = run(&cli) {
        debug!(error = %err, "no directive");
    }

    ExitCode::SUCCESS
}

fn run(cli: &Cli) -> Result<(), DetectorError> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .map_err(HookError::Stdin)?;

    let store = match &cli.state_dir {
        Some(dir) => FileOffsetStore::new(dir),
        None => FileOffsetStore::in_temp_dir(),
    };
    let classifier = DismissalClassifier::new()?;

    let outcome = hook::run(&input, &store, &classifier)?;
    debug!(?outcome, "hook finished");

    if let Some(directive) = outcome.into_directive() {
        directive.emit(io::stdout().lock())?;
    }
    Ok(())
}
