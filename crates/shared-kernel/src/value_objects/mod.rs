// crates/shared-kernel/src/value_objects/mod.rs
pub mod entry;
pub mod file_meta;
pub mod permissions;

pub use entry::{DirectoryEntry, is_hidden_name};
pub use file_meta::{FileMetadata, TIMESTAMP_FORMAT, format_timestamp};
pub use permissions::PermissionBits;
