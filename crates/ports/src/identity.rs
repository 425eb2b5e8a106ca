// crates/ports/src/identity.rs

/// Port resolving numeric user/group IDs to names.
pub trait IdentityResolver: Send + Sync {
    fn user_name(&self, uid: u32) -> Option<String>;
    fn group_name(&self, gid: u32) -> Option<String>;
}
