// src/lib.rs
//! `dirlist`: prints one line of metadata per directory entry.
//!
//! The listing pipeline lives in the workspace crates; this crate holds the
//! command-line glue.

pub mod app;
pub mod cli;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
