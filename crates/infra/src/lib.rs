// crates/infra/src/lib.rs
pub mod filesystem;
pub mod identity;
pub mod platform;

pub use filesystem::{StdDirectoryReader, StdMetadataSource};
pub use identity::SystemIdentityResolver;
