// crates/infra/src/identity.rs
use dirlist_ports::identity::IdentityResolver;

/// Looks names up in the system user and group databases.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemIdentityResolver;

impl SystemIdentityResolver {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(unix)]
impl IdentityResolver for SystemIdentityResolver {
    fn user_name(&self, uid: u32) -> Option<String> {
        uzers::get_user_by_uid(uid)
            .map(|user| user.name().to_string_lossy().into_owned())
            .filter(|name| !name.is_empty())
    }

    fn group_name(&self, gid: u32) -> Option<String> {
        uzers::get_group_by_gid(gid)
            .map(|group| group.name().to_string_lossy().into_owned())
            .filter(|name| !name.is_empty())
    }
}

/// No identity database: every lookup fails and ids are shown as numbers.
#[cfg(not(unix))]
impl IdentityResolver for SystemIdentityResolver {
    fn user_name(&self, _uid: u32) -> Option<String> {
        None
    }

    fn group_name(&self, _gid: u32) -> Option<String> {
        None
    }
}
