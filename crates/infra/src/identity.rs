// crates/infra/src/identity.rs
use std::{collections::HashMap, sync::RwLock};

use dirsize_ports::identity::IdentityResolver;

/// Resolves IDs against the system user and group databases, caching each answer.
#[derive(Debug, Default)]
pub struct SystemIdentity {
    users: RwLock<HashMap<u32, Option<String>>>,
    groups: RwLock<HashMap<u32, Option<String>>>,
}

impl SystemIdentity {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdentityResolver for SystemIdentity {
    fn user_name(&self, uid: u32) -> Option<String> {
        cached(&self.users, uid, lookup_user)
    }

    fn group_name(&self, gid: u32) -> Option<String> {
        cached(&self.groups, gid, lookup_group)
    }
}

fn cached(cache: &RwLock<HashMap<u32, Option<String>>>, id: u32, lookup: fn(u32) -> Option<String>) -> Option<String> {
    if let Ok(map) = cache.read()
        && let Some(name) = map.get(&id)
    {
        return name.clone();
    }
    // Cache miss, resolve and store
    let name = lookup(id);
    if let Ok(mut map) = cache.write() {
        map.insert(id, name.clone());
    }
    name
}

#[cfg(unix)]
fn lookup_user(uid: u32) -> Option<String> {
    uzers::get_user_by_uid(uid).map(|user| user.name().to_string_lossy().into_owned())
}

#[cfg(unix)]
fn lookup_group(gid: u32) -> Option<String> {
    uzers::get_group_by_gid(gid).map(|group| group.name().to_string_lossy().into_owned())
}

#[cfg(not(unix))]
fn lookup_user(_uid: u32) -> Option<String> {
    None
}

#[cfg(not(unix))]
fn lookup_group(_gid: u32) -> Option<String> {
    None
}
