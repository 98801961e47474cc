//! Plumbing shared by the personal plugin's hook binaries.
//!
//! Every hook is a short-lived process: one JSON event on stdin, at most one
//! JSON directive on stdout, exit status 0 no matter what happened. The pieces
//! here cover the parts each hook needs: the event, the transcript records,
//! the block directive, argument parsing and stderr logging.

pub mod cli;
pub mod directive;
pub mod error;
pub mod event;
pub mod logging;
pub mod transcript;

pub use directive::{Decision, Directive};
pub use error::HookError;
pub use event::HookEvent;
pub use transcript::{Block, Content, Record};
