// src/app.rs
use std::io::Write;

use anyhow::{Context, Result};
use dirlist_domain::ListingConfiguration;
use dirlist_infra::{StdDirectoryReader, StdMetadataSource, SystemIdentityResolver};
use dirlist_usecase::{DirectoryLister, MetadataResolver};
use log::debug;

use crate::cli::Args;

/// Maps parsed flags onto the listing configuration.
pub fn configuration(args: &Args) -> Result<ListingConfiguration> {
    ListingConfiguration::builder()
        .long_listing(args.long)
        .recursive(args.recursive)
        .include_hidden(args.all)
        .reverse_order(args.reverse)
        .sort_by_mod_time(args.sort_by_time)
        .build()
        .context("invalid listing configuration")
}

/// Lists `args.path()` into `out`, reporting directory cycles to `diag`.
pub fn run<W, E>(args: &Args, out: &mut W, diag: &mut E) -> Result<()>
where
    W: Write + ?Sized,
    E: Write + ?Sized,
{
    let config = configuration(args)?;
    debug!("configuration: {}", serde_json::to_string(&config)?);

    let reader = StdDirectoryReader::new();
    let source = StdMetadataSource::new();
    let identities = SystemIdentityResolver::new();
    let lister = DirectoryLister::new(&reader, MetadataResolver::new(&source, &identities));

    lister.list(args.path(), &config, out, diag)?;
    out.flush()?;
    Ok(())
}
