// crates/domain/src/ordering.rs
use std::cmp::Ordering;

use dirlist_shared_kernel::DirectoryEntry;
use serde::{Deserialize, Serialize};

use crate::config::ListingConfiguration;

/// Direction applied to a key comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

impl From<bool> for SortOrder {
    #[inline]
    fn from(desc: bool) -> Self {
        if desc { Self::Descending } else { Self::Ascending }
    }
}

/// How the entries of one directory are ordered before printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortMode {
    /// Keep the order the filesystem returned.
    Enumeration,
    /// Strict reverse lexicographic order of names.
    ReverseName,
    /// By modification time; `Descending` puts the newest entry first.
    ModTime(SortOrder),
}

impl From<&ListingConfiguration> for SortMode {
    fn from(config: &ListingConfiguration) -> Self {
        if config.sort_by_mod_time {
            Self::ModTime(config.reverse_order.into())
        } else if config.reverse_order {
            Self::ReverseName
        } else {
            Self::Enumeration
        }
    }
}

/// Orders directory entries according to a [`SortMode`].
#[derive(Debug, Clone, Copy)]
pub struct EntrySorter {
    mode: SortMode,
}

impl EntrySorter {
    pub fn new(mode: SortMode) -> Self {
        Self { mode }
    }

    /// Sorts `entries` in place.
    ///
    /// `mtime_of` is consulted once per entry and only in
    /// [`SortMode::ModTime`]. An entry whose time is unknown (`None`) is
    /// compared by name against every other entry.
    pub fn sort<K, F>(&self, entries: &mut Vec<DirectoryEntry>, mut mtime_of: F)
    where
        K: Ord,
        F: FnMut(&DirectoryEntry) -> Option<K>,
    {
        match self.mode {
            SortMode::Enumeration => {}
            SortMode::ReverseName => sort_stable_by(entries, |a, b| b.name().cmp(a.name())),
            SortMode::ModTime(order) => {
                let mut keyed: Vec<(Option<K>, DirectoryEntry)> =
                    entries.drain(..).map(|entry| (mtime_of(&entry), entry)).collect();
                sort_stable_by(&mut keyed, |a, b| compare_mtime(a, b, order));
                entries.extend(keyed.into_iter().map(|(_, entry)| entry));
            }
        }
    }
}

fn compare_mtime<K: Ord>(
    (a_time, a): &(Option<K>, DirectoryEntry),
    (b_time, b): &(Option<K>, DirectoryEntry),
    order: SortOrder,
) -> Ordering {
    match (a_time, b_time) {
        (Some(a_time), Some(b_time)) => order.apply(a_time.cmp(b_time)),
        _ => a.name().cmp(b.name()),
    }
}

/// Selection sort that rotates each minimum into place.
///
/// Elements the comparator reports equal keep their relative order, and an
/// inconsistent comparator still terminates with a permutation of the input.
pub fn sort_stable_by<T, F>(items: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 0..items.len() {
        let mut min = i;
        for j in i + 1..items.len() {
            if cmp(&items[j], &items[min]) == Ordering::Less {
                min = j;
            }
        }
        items[i..=min].rotate_right(1);
    }
}
