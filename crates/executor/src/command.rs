//! Command enum defining every index operation.
//!
//! Lifecycle commands are emitted by the group, member and tag services after
//! they commit a change; they carry the record needed to update the index and
//! skip access checks. Query commands come from callers and require group
//! membership.

use serde::{Deserialize, Serialize};
use taskdeck_core::{EntityKind, GroupId, TagId, UserId};

use crate::types::{MemberRecord, TagRecord};

/// A self-contained, serializable index operation.
///
/// # Command Categories
///
/// | Category | Commands | Access check |
/// |----------|----------|--------------|
/// | Members | `GroupCreated`, `MemberJoined`, `MemberRemoved` | none |
/// | Tags | `TagSaved`, `TagRemoved` | none |
/// | Queries | `Search`, `Reindex` | caller must be a member |
///
/// # Example
///
/// ```
/// use taskdeck_executor::{Command, EntityKind, GroupId, UserId};
///
/// let cmd = Command::Search {
///     caller: UserId::from("u1"),
///     group: GroupId::from("g1"),
///     kind: EntityKind::Tag,
///     query: "urg".into(),
///     limit: None,
/// };
/// assert_eq!(cmd.name(), "Search");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    // ==================== Members ====================
    /// A group was created; its owner is the first member.
    /// Returns: `Output::Unit`
    GroupCreated {
        group: GroupId,
        owner: MemberRecord,
    },

    /// A user joined a group.
    /// Returns: `Output::Unit`
    MemberJoined {
        group: GroupId,
        member: MemberRecord,
    },

    /// A member left or was removed.
    /// Returns: `Output::Unit`
    MemberRemoved { group: GroupId, user: UserId },

    // ==================== Tags ====================
    /// A tag was created or renamed.
    /// Returns: `Output::Unit`
    TagSaved { group: GroupId, tag: TagRecord },

    /// A tag was deleted.
    /// Returns: `Output::Unit`
    TagRemoved { group: GroupId, tag: TagId },

    // ==================== Queries ====================
    /// Search one kind within a group.
    /// Returns: `Output::Ids`
    Search {
        caller: UserId,
        group: GroupId,
        kind: EntityKind,
        query: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        limit: Option<u64>,
    },

    /// Rebuild both indexes of a group from the system of record.
    /// Returns: `Output::Reindexed`
    Reindex { caller: UserId, group: GroupId },
}

impl Command {
    /// Variant name, used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::GroupCreated { .. } => "GroupCreated",
            Command::MemberJoined { .. } => "MemberJoined",
            Command::MemberRemoved { .. } => "MemberRemoved",
            Command::TagSaved { .. } => "TagSaved",
            Command::TagRemoved { .. } => "TagRemoved",
            Command::Search { .. } => "Search",
            Command::Reindex { .. } => "Reindex",
        }
    }

    /// Group the command targets
    pub fn group(&self) -> &GroupId {
        match self {
            Command::GroupCreated { group, .. }
            | Command::MemberJoined { group, .. }
            | Command::MemberRemoved { group, .. }
            | Command::TagSaved { group, .. }
            | Command::TagRemoved { group, .. }
            | Command::Search { group, .. }
            | Command::Reindex { group, .. } => group,
        }
    }
}
