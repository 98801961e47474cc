//! stderr logging for hook processes.
//!
//! stdout belongs to the directive, so every event goes to stderr. The
//! default filter is `warn`: a normal invocation writes nothing at all.

use std::env;
use std::io;

use clap::Args;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "PERSONAL_HOOKS_LOG";
pub const DEFAULT_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct LogArgs {
    /// Log filter for stderr output, e.g. `debug` or `unrelated_issue_detector=trace`
    #[arg(long = "log", env = LOG_ENV, default_value = DEFAULT_FILTER)]
    pub filter: String,
}

impl Default for LogArgs {
    fn default() -> Self {
        Self {
            filter: env::var(LOG_ENV).unwrap_or_else(|_| DEFAULT_FILTER.to_owned()),
        }
    }
}

/// Install the global subscriber. A bad filter falls back to the default one;
/// a second call is a no-op.
pub fn init(args: &LogArgs) {
    let filter =
        EnvFilter::try_new(&args.filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .compact()
        .try_init();
}
