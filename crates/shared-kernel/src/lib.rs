// crates/shared-kernel/src/lib.rs
//! Types shared by every layer of the workspace: the error taxonomy and the
//! value objects describing directory entries and their metadata.

pub use error::{DirListError, ListingError, ListingResult, Result};

pub mod error;
pub mod value_objects;

pub use value_objects::{
    DirectoryEntry, FileMetadata, PermissionBits, TIMESTAMP_FORMAT, format_timestamp, is_hidden_name,
};
