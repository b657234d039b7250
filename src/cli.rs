// src/cli.rs
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use clap::Parser;
use log::debug;

use crate::VERSION;

/// Short flags the parser understands; anything else starting with `-` is
/// dropped before parsing.
const KNOWN_SHORT_FLAGS: &str = "lRart";
const PASSTHROUGH: [&str; 2] = ["--help", "--version"];

#[derive(Parser, Debug, Default)]
#[command(
    name = "dirlist",
    version = VERSION,
    about = "List directory entries with permissions, owner, size and mtime",
    args_override_self = true
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Long listing (accepted; the line format is always the long one)
    #[arg(short = 'l')]
    pub long: bool,

    /// List subdirectories recursively
    #[arg(short = 'R')]
    pub recursive: bool,

    /// Include entries whose names begin with `.`
    #[arg(short = 'a')]
    pub all: bool,

    /// Reverse the ordering
    #[arg(short = 'r')]
    pub reverse: bool,

    /// Sort by modification time, oldest first
    #[arg(short = 't')]
    pub sort_by_time: bool,

    /// Directory to list (defaults to the current directory); extra paths are ignored
    pub paths: Vec<PathBuf>,
}

impl Args {
    /// Parses the process arguments, silently ignoring unknown flags.
    pub fn parse_lenient() -> Self {
        Self::parse_from(sanitize_args(std::env::args_os()))
    }

    pub fn path(&self) -> &Path {
        self.paths.first().map_or_else(|| Path::new("."), PathBuf::as_path)
    }
}

/// Drops every flag that is not a combination of the known short flags
/// (or `--help`/`--version`). Everything after `--` is kept verbatim.
pub fn sanitize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut kept: Vec<OsString> = args.next().into_iter().collect();
    let mut positional_only = false;

    for arg in args {
        if positional_only {
            kept.push(arg);
            continue;
        }
        match arg.to_str() {
            Some("--") => {
                positional_only = true;
                kept.push(arg);
            }
            Some(flag) if PASSTHROUGH.contains(&flag) => kept.push(arg),
            Some(flag) if flag.len() > 1 && flag.starts_with('-') => {
                if flag[1..].chars().all(|c| KNOWN_SHORT_FLAGS.contains(c)) {
                    kept.push(arg);
                } else {
                    debug!("ignoring unrecognized flag {flag}");
                }
            }
            _ => kept.push(arg),
        }
    }
    kept
}
