//! Command handlers organized by entity kind.
//!
//! | Module | Commands |
//! |--------|----------|
//! | `member` | `GroupCreated`, `MemberJoined`, `MemberRemoved` |
//! | `tag` | `TagSaved`, `TagRemoved` |
//! | `search` | `Search`, `Reindex` |

pub mod member;
pub mod search;
pub mod tag;

use taskdeck_core::{GroupId, UserId};
use tracing::warn;

use crate::directory::GroupDirectory;
use crate::{Error, Result};

/// Fail with `Forbidden` unless `caller` belongs to `group`
pub(crate) fn require_member(
    directory: &dyn GroupDirectory,
    group: &GroupId,
    caller: &UserId,
) -> Result<()> {
    if directory.is_member(group, caller)? {
        return Ok(());
    }
    warn!(target: "taskdeck::executor", group = %group, caller = %caller, "Non-member access denied");
    Err(Error::Forbidden {
        group: group.to_string(),
    })
}
