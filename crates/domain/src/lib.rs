// crates/domain/src/lib.rs
//! Listing rules that do not touch the filesystem: the run configuration and
//! the ordering of directory entries.

pub mod config;
pub mod ordering;

pub use config::{ListingConfiguration, ListingConfigurationBuilder};
pub use ordering::{EntrySorter, SortMode, SortOrder, sort_stable_by};
