// crates/ports/src/identity.rs

/// Port for turning numeric owner and group ids into names.
///
/// `None` means the lookup failed; callers display the number instead.
pub trait IdentityResolver {
    fn user_name(&self, uid: u32) -> Option<String>;
    fn group_name(&self, gid: u32) -> Option<String>;
}
