// crates/infra/src/filesystem.rs
use std::{fs, path::Path};

use chrono::{DateTime, Local};
use dirlist_ports::filesystem::{DirectoryIdentity, DirectoryReader, MetadataSource, RawStat};
use dirlist_shared_kernel::{ListingError, ListingResult};
use log::debug;

use crate::platform;

/// Directory reader backed by `std::fs::read_dir`.
///
/// The handle is opened and dropped inside each call.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDirectoryReader;

impl StdDirectoryReader {
    pub fn new() -> Self {
        Self
    }
}

impl DirectoryReader for StdDirectoryReader {
    fn read_names(&self, path: &Path) -> ListingResult<Vec<String>> {
        let unreadable = |source| ListingError::PathUnreadable { path: path.to_path_buf(), source };

        let mut names = Vec::new();
        for entry in fs::read_dir(path).map_err(unreadable)? {
            let entry = entry.map_err(unreadable)?;
            // Non UTF-8 names are lossy converted for display.
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        debug!("read {} entries from {}", names.len(), path.display());
        Ok(names)
    }

    fn identity(&self, path: &Path) -> Option<DirectoryIdentity> {
        platform::directory_identity(path)
    }
}

/// Status queries backed by `std::fs::metadata`, which follows symlinks.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdMetadataSource;

impl StdMetadataSource {
    pub fn new() -> Self {
        Self
    }
}

impl MetadataSource for StdMetadataSource {
    fn stat(&self, path: &Path) -> ListingResult<RawStat> {
        let metadata = fs::metadata(path)
            .map_err(|source| ListingError::StatFailure { path: path.to_path_buf(), source })?;
        let modified = metadata
            .modified()
            .map(DateTime::<Local>::from)
            .map_err(|_| ListingError::StatUnavailable { path: path.to_path_buf(), field: "modification time" })?;
        Ok(platform::raw_stat(&metadata, modified))
    }
}
