// crates/usecase/src/resolver.rs
use std::path::Path;

use chrono::{DateTime, Local};
use dirlist_ports::{filesystem::MetadataSource, identity::IdentityResolver};
use dirlist_shared_kernel::{FileMetadata, ListingResult};

/// Resolves the metadata shown for one entry.
#[derive(Clone, Copy)]
pub struct MetadataResolver<'a> {
    source: &'a dyn MetadataSource,
    identities: &'a dyn IdentityResolver,
}

impl<'a> MetadataResolver<'a> {
    pub fn new(source: &'a dyn MetadataSource, identities: &'a dyn IdentityResolver) -> Self {
        Self { source, identities }
    }

    /// One status query, then owner and group name lookups. A failed lookup
    /// falls back to the decimal id.
    pub fn resolve(&self, path: &Path) -> ListingResult<FileMetadata> {
        let raw = self.source.stat(path)?;
        let owner_name = self.identities.user_name(raw.owner_id).unwrap_or_else(|| raw.owner_id.to_string());
        let group_name = self.identities.group_name(raw.group_id).unwrap_or_else(|| raw.group_id.to_string());
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(FileMetadata {
            permissions: raw.permissions,
            owner_id: raw.owner_id,
            group_id: raw.group_id,
            owner_name,
            group_name,
            size: raw.size,
            modified: raw.modified,
            name,
            is_dir: raw.is_dir,
        })
    }

    /// Modification time used as a sort key; `None` when the entry cannot be
    /// stat'ed.
    pub fn modified(&self, path: &Path) -> Option<DateTime<Local>> {
        self.source.stat(path).ok().map(|raw| raw.modified)
    }
}
