// crates/usecase/src/lister.rs
use std::{collections::HashSet, io::Write, path::Path};

use dirlist_domain::{EntrySorter, ListingConfiguration, SortMode};
use dirlist_ports::filesystem::{DirectoryIdentity, DirectoryReader};
use dirlist_shared_kernel::{DirectoryEntry, ListingError, ListingResult, Result, is_hidden_name};
use log::debug;

use crate::resolver::MetadataResolver;

/// Prints one metadata line per directory entry, descending into
/// subdirectories when the configuration asks for it.
pub struct DirectoryLister<'a> {
    reader: &'a dyn DirectoryReader,
    resolver: MetadataResolver<'a>,
}

impl<'a> DirectoryLister<'a> {
    pub fn new(reader: &'a dyn DirectoryReader, resolver: MetadataResolver<'a>) -> Self {
        Self { reader, resolver }
    }

    /// Lists `path` into `out`. An entry that cannot be stat'ed is reported in
    /// place of its line; directory cycles are reported to `diag`.
    ///
    /// # Errors
    ///
    /// Fails when `path` or any directory below it cannot be read, or when
    /// writing to either stream fails.
    pub fn list<W, E>(&self, path: &Path, config: &ListingConfiguration, out: &mut W, diag: &mut E) -> Result<()>
    where
        W: Write + ?Sized,
        E: Write + ?Sized,
    {
        debug!("listing {} (sort: {:?})", path.display(), SortMode::from(config));
        let mut ancestors = Vec::new();
        self.list_dir(path, config, &mut ancestors, out, diag)
    }

    fn list_dir<W, E>(
        &self,
        dir: &Path,
        config: &ListingConfiguration,
        ancestors: &mut Vec<DirectoryIdentity>,
        out: &mut W,
        diag: &mut E,
    ) -> Result<()>
    where
        W: Write + ?Sized,
        E: Write + ?Sized,
    {
        let entries = self.collect_entries(dir, config)?;

        let identity = self.reader.identity(dir);
        let entered = identity.is_some();
        ancestors.extend(identity);
        let result = self.print_entries(&entries, config, ancestors, out, diag);
        if entered {
            ancestors.pop();
        }
        result
    }

    fn print_entries<W, E>(
        &self,
        entries: &[DirectoryEntry],
        config: &ListingConfiguration,
        ancestors: &mut Vec<DirectoryIdentity>,
        out: &mut W,
        diag: &mut E,
    ) -> Result<()>
    where
        W: Write + ?Sized,
        E: Write + ?Sized,
    {
        for entry in entries {
            let path = entry.path();
            let meta = match self.resolver.resolve(&path) {
                Ok(meta) => meta,
                Err(err) => {
                    debug!("skipping {}: {err}", path.display());
                    writeln!(out, "{err}")?;
                    continue;
                }
            };
            writeln!(out, "{meta}")?;

            if !(config.recursive && meta.is_dir) {
                continue;
            }
            if self.reader.identity(&path).is_some_and(|id| ancestors.contains(&id)) {
                let err = ListingError::CycleDetected { path };
                debug!("{err}");
                writeln!(diag, "{err}")?;
                continue;
            }
            writeln!(out)?;
            writeln!(out, "{}:", path.display())?;
            self.list_dir(&path, config, ancestors, out, diag)?;
        }
        Ok(())
    }

    /// Visible names first, then (with `include_hidden`) the dot-prefixed
    /// names from a second pass, de-duplicated and ordered.
    fn collect_entries(&self, dir: &Path, config: &ListingConfiguration) -> ListingResult<Vec<DirectoryEntry>> {
        let mut names: Vec<String> =
            self.reader.read_names(dir)?.into_iter().filter(|name| !is_hidden_name(name)).collect();

        if config.include_hidden {
            let hidden = self.reader.read_names(dir)?.into_iter().filter(|name| is_hidden_name(name));
            names.extend(hidden);
            let mut seen = HashSet::new();
            names.retain(|name| seen.insert(name.clone()));
        }

        let mut entries: Vec<DirectoryEntry> = names.into_iter().map(|name| DirectoryEntry::new(dir, name)).collect();
        EntrySorter::new(SortMode::from(config)).sort(&mut entries, |entry| self.resolver.modified(&entry.path()));
        Ok(entries)
    }
}
