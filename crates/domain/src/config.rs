// crates/domain/src/config.rs
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Flags controlling one listing run.
///
/// Built once from the command line and passed by reference to every
/// listing and sorting call; nothing mutates it afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(default, setter(into))]
pub struct ListingConfiguration {
    /// Accepted for compatibility; the line format is the same either way.
    pub long_listing: bool,
    pub recursive: bool,
    pub include_hidden: bool,
    pub reverse_order: bool,
    pub sort_by_mod_time: bool,
}

impl ListingConfiguration {
    pub fn builder() -> ListingConfigurationBuilder {
        ListingConfigurationBuilder::default()
    }
}
