// crates/infra/src/platform.rs
//! Platform-specific abstractions for cross-platform compatibility.
//!
//! This module centralizes OS-specific logic so the adapters stay free of
//! scattered conditional compilation directives.

use std::{fs::Metadata, path::Path};

use chrono::{DateTime, Local};
use dirlist_ports::filesystem::{DirectoryIdentity, RawStat};
use dirlist_shared_kernel::PermissionBits;

// ============================================================================
// Status extraction
// ============================================================================

/// Builds the platform-neutral status record from `std` metadata.
pub fn raw_stat(metadata: &Metadata, modified: DateTime<Local>) -> RawStat {
    let (owner_id, group_id) = ownership(metadata);
    RawStat {
        permissions: permissions(metadata),
        owner_id,
        group_id,
        size: metadata.len(),
        modified,
        is_dir: metadata.is_dir(),
    }
}

#[cfg(unix)]
fn permissions(metadata: &Metadata) -> PermissionBits {
    use std::os::unix::fs::PermissionsExt;
    PermissionBits::from_mode(metadata.permissions().mode())
}

/// Without POSIX modes: everyone may read, writable unless read-only, and
/// directories are searchable.
#[cfg(not(unix))]
fn permissions(metadata: &Metadata) -> PermissionBits {
    let mut mode = if metadata.permissions().readonly() { 0o444 } else { 0o666 };
    if metadata.is_dir() {
        mode |= 0o111;
    }
    PermissionBits::from_mode(mode)
}

#[cfg(unix)]
fn ownership(metadata: &Metadata) -> (u32, u32) {
    use std::os::unix::fs::MetadataExt;
    (metadata.uid(), metadata.gid())
}

/// Platforms without numeric ownership report owner and group `0`.
#[cfg(not(unix))]
fn ownership(_metadata: &Metadata) -> (u32, u32) {
    (0, 0)
}

// ============================================================================
// Directory identity
// ============================================================================

/// Identity of the directory at `path` (symlinks followed).
/// On Unix, uses (dev, ino) pairs. On other platforms, uses canonical paths.
pub fn directory_identity(path: &Path) -> Option<DirectoryIdentity> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;

        std::fs::metadata(path).ok().map(|md| DirectoryIdentity::Inode(md.dev(), md.ino()))
    }

    #[cfg(not(unix))]
    {
        std::fs::canonicalize(path).ok().map(DirectoryIdentity::Canonical)
    }
}
