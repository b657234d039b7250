// crates/shared-kernel/src/value_objects/permissions.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// The nine `rwx` bits for owner, group and other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionBits(u32);

const SYMBOLS: [(u32, char); 9] = [
    (0o400, 'r'),
    (0o200, 'w'),
    (0o100, 'x'),
    (0o040, 'r'),
    (0o020, 'w'),
    (0o010, 'x'),
    (0o004, 'r'),
    (0o002, 'w'),
    (0o001, 'x'),
];

impl PermissionBits {
    pub const MASK: u32 = 0o777;

    /// Keeps only the permission bits of a raw mode; file type, setuid,
    /// setgid and sticky bits are dropped.
    pub const fn from_mode(mode: u32) -> Self {
        Self(mode & Self::MASK)
    }

    /// Renders the canonical 9-character form, e.g. `rwxr-xr--`.
    pub fn symbolic(self) -> String {
        SYMBOLS.iter().map(|&(bit, c)| if self.0 & bit != 0 { c } else { '-' }).collect()
    }
}

impl fmt::Display for PermissionBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbolic())
    }
}
