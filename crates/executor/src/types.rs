//! Records exchanged with the system of record, and raw request parameters.
//!
//! These mirror what the group, member and tag services hold; the executor
//! turns them into index entries.

use serde::{Deserialize, Serialize};
use taskdeck_core::{EntityKind, GroupId, IndexEntry, TagId, UserId};

use crate::{Command, Error, Result};

/// A group member as stored by the system of record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRecord {
    /// User id
    pub id: UserId,
    /// Login name, always present
    pub username: String,
    /// Optional human-readable name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl MemberRecord {
    /// Create a record without a display name
    pub fn new(id: impl Into<UserId>, username: impl Into<String>) -> Self {
        MemberRecord {
            id: id.into(),
            username: username.into(),
            display_name: None,
        }
    }

    /// Builder: set the display name
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Text the member is indexed under
    ///
    /// The display name when set and non-empty, the username otherwise.
    pub fn index_name(&self) -> &str {
        match self.display_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.username,
        }
    }

    /// Convert to a reindex snapshot entry
    pub fn to_entry(&self) -> IndexEntry {
        IndexEntry::new(self.id.clone(), self.index_name())
    }
}

/// A group tag as stored by the system of record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRecord {
    /// Tag id
    pub id: TagId,
    /// Tag name
    pub name: String,
}

impl TagRecord {
    /// Create a tag record
    pub fn new(id: impl Into<TagId>, name: impl Into<String>) -> Self {
        TagRecord {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Convert to a reindex snapshot entry, with the name trimmed
    pub fn to_entry(&self) -> IndexEntry {
        IndexEntry::new(self.id.clone(), self.name.trim())
    }
}

/// Counts reported by a group reindex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReindexInfo {
    /// Members indexed
    pub members: u64,
    /// Tags indexed
    pub tags: u64,
}

/// Raw query string of `GET /groups/{id}/search`
///
/// Every field arrives as an optional string; [`SearchParams::into_command`]
/// validates them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    /// `member` or `tag`
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Query text, at least one character
    #[serde(default)]
    pub q: Option<String>,
    /// Optional decimal limit
    #[serde(default)]
    pub limit: Option<String>,
}

impl SearchParams {
    /// Validate the parameters and build a `Search` command
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `type` is missing or unknown, `q` is missing
    /// or empty, or `limit` is not a non-negative integer.
    pub fn into_command(self, caller: UserId, group: GroupId) -> Result<Command> {
        let kind = match self.kind.as_deref() {
            Some(kind) => kind.parse::<EntityKind>()?,
            None => return Err(Error::invalid_input("missing parameter 'type'")),
        };
        let query = match self.q {
            Some(q) if !q.is_empty() => q,
            Some(_) => return Err(Error::invalid_input("parameter 'q' must not be empty")),
            None => return Err(Error::invalid_input("missing parameter 'q'")),
        };
        let limit = self.limit.as_deref().map(parse_limit).transpose()?;

        Ok(Command::Search {
            caller,
            group,
            kind,
            query,
            limit,
        })
    }
}

fn parse_limit(raw: &str) -> Result<u64> {
    raw.trim().parse::<u64>().map_err(|_| {
        Error::invalid_input(format!(
            "parameter 'limit' must be a non-negative integer, got '{}'",
            raw
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(kind: Option<&str>, q: Option<&str>, limit: Option<&str>) -> SearchParams {
        SearchParams {
            kind: kind.map(String::from),
            q: q.map(String::from),
            limit: limit.map(String::from),
        }
    }

    #[test]
    fn test_index_name_prefers_display_name() {
        let member = MemberRecord::new("u1", "asmith").with_display_name("Alice Smith");
        assert_eq!(member.index_name(), "Alice Smith");
    }

    #[test]
    fn test_index_name_falls_back_to_username() {
        assert_eq!(MemberRecord::new("u1", "asmith").index_name(), "asmith");
        let blank = MemberRecord::new("u1", "asmith").with_display_name("");
        assert_eq!(blank.index_name(), "asmith");
    }

    #[test]
    fn test_to_entry() {
        let entry = MemberRecord::new("u1", "asmith").to_entry();
        assert_eq!(entry, IndexEntry::new("u1", "asmith"));
        let entry = TagRecord::new("t1", "  Urgent ").to_entry();
        assert_eq!(entry, IndexEntry::new("t1", "Urgent"));
    }

    #[test]
    fn test_into_command_valid() {
        let cmd = params(Some("tag"), Some("urg"), Some("5"))
            .into_command(UserId::from("u1"), GroupId::from("g1"))
            .unwrap();
        assert_eq!(
            cmd,
            Command::Search {
                caller: UserId::from("u1"),
                group: GroupId::from("g1"),
                kind: EntityKind::Tag,
                query: "urg".into(),
                limit: Some(5),
            }
        );
    }

    #[test]
    fn test_into_command_limit_is_optional() {
        let cmd = params(Some("member"), Some("al"), None)
            .into_command(UserId::from("u1"), GroupId::from("g1"))
            .unwrap();
        assert!(matches!(cmd, Command::Search { limit: None, .. }));
    }

    #[test]
    fn test_into_command_rejects_bad_input() {
        let cases = [
            params(None, Some("al"), None),
            params(Some("board"), Some("al"), None),
            params(Some("member"), None, None),
            params(Some("member"), Some(""), None),
            params(Some("member"), Some("al"), Some("ten")),
            params(Some("member"), Some("al"), Some("-1")),
            params(Some("member"), Some("al"), Some("")),
        ];
        for case in cases {
            let err = case
                .clone()
                .into_command(UserId::from("u1"), GroupId::from("g1"))
                .unwrap_err();
            assert!(
                matches!(err, Error::InvalidInput { .. }),
                "{:?} should be rejected",
                case
            );
        }
    }

    #[test]
    fn test_whitespace_query_passes_validation() {
        // Only emptiness is rejected; the index itself returns no hits
        let cmd = params(Some("member"), Some("  "), None)
            .into_command(UserId::from("u1"), GroupId::from("g1"));
        assert!(cmd.is_ok());
    }
}
