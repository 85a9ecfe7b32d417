//! Core types for Taskdeck search
//!
//! This module defines the foundational types:
//! - GroupId: Identifier of the group that scopes every index
//! - EntityId: Identifier of an indexed member or tag
//! - EntityKind: Which of the two per-group indexes an entity lives in
//! - IndexEntry: One `{id, name}` pair of a reindex snapshot

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a group
///
/// Groups partition all indexes: every group owns an independent member
/// index and tag index. The value is opaque to the index and is issued by
/// the system of record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(String);

impl GroupId {
    /// Wrap a raw group identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GroupId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for GroupId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Identifier of an indexed entity (a user or a tag)
///
/// Ids are unique within one (group, kind) index. Ordering is only used
/// to break ranking ties deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Wrap a raw entity identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A user id, as indexed in the member index
pub type UserId = EntityId;

/// A tag id, as indexed in the tag index
pub type TagId = EntityId;

/// The two independently indexed entity categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// Group members, indexed by display name (or username)
    Member,
    /// Group tags, indexed by tag name
    Tag,
}

impl EntityKind {
    /// All kinds (for iteration)
    pub const ALL: [EntityKind; 2] = [EntityKind::Member, EntityKind::Tag];

    /// Short identifier (for serialization, query strings, logs)
    pub const fn id(&self) -> &'static str {
        match self {
            EntityKind::Member => "member",
            EntityKind::Tag => "tag",
        }
    }

    /// Parse from short identifier
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "member" => Some(EntityKind::Member),
            "tag" => Some(EntityKind::Tag),
            _ => None,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for EntityKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_id(s).ok_or_else(|| {
            Error::InvalidInput(format!(
                "unknown entity kind '{}', expected \"member\" or \"tag\"",
                s
            ))
        })
    }
}

/// One element of an authoritative reindex snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Entity identifier
    pub id: EntityId,
    /// Text to index for the entity
    pub name: String,
}

impl IndexEntry {
    /// Create a new entry
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Self {
        IndexEntry {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_kind_ids_roundtrip() {
        for kind in EntityKind::ALL {
            assert_eq!(EntityKind::from_id(kind.id()), Some(kind));
            assert_eq!(kind.id().parse::<EntityKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_entity_kind_rejects_unknown() {
        assert!(EntityKind::from_id("board").is_none());
        // Matching is exact, not case-folded
        assert!(EntityKind::from_id("Member").is_none());

        let err = "board".parse::<EntityKind>().unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(err.to_string().contains("board"));
    }

    #[test]
    fn test_entity_kind_serializes_lowercase() {
        let json = serde_json::to_string(&EntityKind::Member).unwrap();
        assert_eq!(json, "\"member\"");
        let kind: EntityKind = serde_json::from_str("\"tag\"").unwrap();
        assert_eq!(kind, EntityKind::Tag);
    }

    #[test]
    fn test_ids_are_transparent_strings() {
        let id = EntityId::new("u-42");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"u-42\"");
        assert_eq!(id.to_string(), "u-42");

        let group: GroupId = serde_json::from_str("\"g-1\"").unwrap();
        assert_eq!(group.as_str(), "g-1");
    }

    #[test]
    fn test_entity_id_ordering_is_lexicographic() {
        let mut ids = vec![EntityId::from("b"), EntityId::from("a10"), EntityId::from("a2")];
        ids.sort();
        assert_eq!(ids, vec![EntityId::from("a10"), EntityId::from("a2"), EntityId::from("b")]);
    }

    #[test]
    fn test_index_entry_new() {
        let entry = IndexEntry::new("t1", "Urgent");
        assert_eq!(entry.id, EntityId::from("t1"));
        assert_eq!(entry.name, "Urgent");
    }
}
