//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`resolver`]: turns a path into a [`FileMetadata`] snapshot
//! - [`lister`]: walks a directory (optionally recursively) and prints one
//!   line per entry
//!
//! Use cases depend on the domain and on ports, but not on infrastructure.
//!
//! [`FileMetadata`]: dirlist_shared_kernel::FileMetadata

pub mod lister;
pub mod resolver;

pub use lister::DirectoryLister;
pub use resolver::MetadataResolver;
