// crates/shared-kernel/src/value_objects/file_meta.rs
use std::fmt;

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};

use super::PermissionBits;

/// `Jan  2 15:04`: abbreviated month, space-padded day, 24-hour clock.
pub const TIMESTAMP_FORMAT: &str = "%b %e %H:%M";

/// Snapshot of one entry's metadata, taken from a single stat call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    pub permissions: PermissionBits,
    pub owner_id: u32,
    pub group_id: u32,
    pub owner_name: String,
    pub group_name: String,
    pub size: u64,
    pub modified: DateTime<Local>,
    pub name: String,
    pub is_dir: bool,
}

impl FileMetadata {
    pub fn formatted_mtime(&self) -> String {
        format_timestamp(&self.modified)
    }
}

/// Formats a timestamp with [`TIMESTAMP_FORMAT`] in the timestamp's own zone.
pub fn format_timestamp<Tz>(ts: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// One listing line:
/// `{permissions} {uid} {owner} {group} {size} {mtime} {name}`.
impl fmt::Display for FileMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.permissions,
            self.owner_id,
            self.owner_name,
            self.group_name,
            self.size,
            self.formatted_mtime(),
            self.name
        )
    }
}
