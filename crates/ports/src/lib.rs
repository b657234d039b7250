//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: directory enumeration and per-entry status queries
//! - [`identity`]: user and group name lookup
//!
//! The usecase layer only talks to these traits, so listings can be tested
//! against in-memory trees.

// crates/ports/src/lib.rs
pub mod filesystem;
pub mod identity;
