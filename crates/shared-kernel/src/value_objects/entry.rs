// crates/shared-kernel/src/value_objects/entry.rs
use std::path::PathBuf;

/// A name found in a directory together with the directory it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    parent: PathBuf,
    name: String,
}

impl DirectoryEntry {
    pub fn new(parent: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self { parent: parent.into(), name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full path of the entry (`parent` joined with `name`).
    pub fn path(&self) -> PathBuf {
        self.parent.join(&self.name)
    }
}

/// Dot-prefixed names are hidden.
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.')
}
