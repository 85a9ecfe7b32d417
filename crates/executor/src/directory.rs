//! Read access to the system of record.
//!
//! The index never owns membership or tag data. Access checks and reindex
//! snapshots go through a [`GroupDirectory`], which the host application
//! implements over its own storage.

use std::collections::BTreeMap;

use parking_lot::RwLock;
use taskdeck_core::{GroupId, TagId, UserId};

use crate::types::{MemberRecord, TagRecord};
use crate::Result;

/// Authoritative source of group membership and tags
pub trait GroupDirectory: Send + Sync {
    /// Whether `user` belongs to `group`
    fn is_member(&self, group: &GroupId, user: &UserId) -> Result<bool>;

    /// Every current member of `group`
    fn members(&self, group: &GroupId) -> Result<Vec<MemberRecord>>;

    /// Every current tag of `group`
    fn tags(&self, group: &GroupId) -> Result<Vec<TagRecord>>;
}

#[derive(Debug, Default)]
struct GroupRecord {
    members: BTreeMap<UserId, MemberRecord>,
    tags: BTreeMap<TagId, TagRecord>,
}

/// In-process [`GroupDirectory`]
///
/// Suitable for tests and embedded use. Records are returned in id order.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    groups: RwLock<BTreeMap<GroupId, GroupRecord>>,
}

impl InMemoryDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a member
    pub fn put_member(&self, group: &GroupId, member: MemberRecord) {
        let mut groups = self.groups.write();
        let record = groups.entry(group.clone()).or_default();
        record.members.insert(member.id.clone(), member);
    }

    /// Remove a member; returns whether it existed
    pub fn delete_member(&self, group: &GroupId, user: &UserId) -> bool {
        self.groups
            .write()
            .get_mut(group)
            .map(|record| record.members.remove(user).is_some())
            .unwrap_or(false)
    }

    /// Add or replace a tag
    pub fn put_tag(&self, group: &GroupId, tag: TagRecord) {
        let mut groups = self.groups.write();
        let record = groups.entry(group.clone()).or_default();
        record.tags.insert(tag.id.clone(), tag);
    }

    /// Remove a tag; returns whether it existed
    pub fn delete_tag(&self, group: &GroupId, tag: &TagId) -> bool {
        self.groups
            .write()
            .get_mut(group)
            .map(|record| record.tags.remove(tag).is_some())
            .unwrap_or(false)
    }
}

impl GroupDirectory for InMemoryDirectory {
    fn is_member(&self, group: &GroupId, user: &UserId) -> Result<bool> {
        Ok(self
            .groups
            .read()
            .get(group)
            .map(|record| record.members.contains_key(user))
            .unwrap_or(false))
    }

    fn members(&self, group: &GroupId) -> Result<Vec<MemberRecord>> {
        Ok(self
            .groups
            .read()
            .get(group)
            .map(|record| record.members.values().cloned().collect())
            .unwrap_or_default())
    }

    fn tags(&self, group: &GroupId) -> Result<Vec<TagRecord>> {
        Ok(self
            .groups
            .read()
            .get(group)
            .map(|record| record.tags.values().cloned().collect())
            .unwrap_or_default())
    }
}
