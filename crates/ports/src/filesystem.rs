// crates/ports/src/filesystem.rs
use std::path::Path;

use chrono::{DateTime, Local};
use dirlist_shared_kernel::{ListingResult, PermissionBits};
use serde::{Deserialize, Serialize};

/// Raw status of one path as reported by the platform.
///
/// Every platform family fills the same fields; where ownership does not
/// exist the ids are `0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawStat {
    pub permissions: PermissionBits,
    pub owner_id: u32,
    pub group_id: u32,
    pub size: u64,
    pub modified: DateTime<Local>,
    pub is_dir: bool,
}

/// Identity of a directory, used to detect descent into an ancestor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DirectoryIdentity {
    /// `(device, inode)`.
    Inode(u64, u64),
    Canonical(std::path::PathBuf),
}

/// Port for enumerating directory contents.
pub trait DirectoryReader {
    /// Names of all entries in `path`, in filesystem order, excluding `.`
    /// and `..`. Fails with `PathUnreadable`.
    fn read_names(&self, path: &Path) -> ListingResult<Vec<String>>;

    /// Identity of the directory at `path`, if it can be determined.
    fn identity(&self, path: &Path) -> Option<DirectoryIdentity>;
}

/// Port for querying the status of a single path (symlinks followed).
pub trait MetadataSource {
    /// Fails with `StatFailure` or `StatUnavailable`.
    fn stat(&self, path: &Path) -> ListingResult<RawStat>;
}
