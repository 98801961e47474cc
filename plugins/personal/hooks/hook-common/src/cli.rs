//! Argument parsing that never fails the hook.
//!
//! The runtime invokes hooks with a fixed command line, so a bad flag must not
//! turn into a non-zero exit. Only `--help` and `--version` stop the hook.

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::Parser;

#[derive(Debug)]
pub enum Invocation<C> {
    /// Run the hook. `rejected` holds the parse error when defaults were used.
    Run { cli: C, rejected: Option<clap::Error> },
    /// Help or version text was printed.
    Exit,
}

pub fn parse<C: Parser + Default>() -> Invocation<C> {
    parse_from(std::env::args_os())
}

pub fn parse_from<C, I, T>(args: I) -> Invocation<C>
where
    C: Parser + Default,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match C::try_parse_from(args) {
        Ok(cli) => Invocation::Run { cli, rejected: None },
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = err.print();
                Invocation::Exit
            }
            _ => Invocation::Run {
                cli: C::default(),
                rejected: Some(err),
            },
        },
    }
}
