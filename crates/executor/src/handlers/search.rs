//! Search and reindex handlers.
//!
//! Both require the caller to be a member of the group.

use taskdeck_core::{EntityKind, GroupId, UserId};
use taskdeck_search::SearchIndex;
use tracing::info;

use super::require_member;
use crate::directory::GroupDirectory;
use crate::{Output, Result};

/// Handle Search: ranked ids of one kind matching `query`
pub fn search(
    index: &SearchIndex,
    directory: &dyn GroupDirectory,
    caller: UserId,
    group: GroupId,
    kind: EntityKind,
    query: String,
    limit: Option<u64>,
) -> Result<Output> {
    require_member(directory, &group, &caller)?;
    let limit = limit.map(|l| usize::try_from(l).unwrap_or(usize::MAX));
    Ok(Output::Ids(index.search(&group, kind, &query, limit)))
}

/// Handle Reindex: rebuild members and tags from the directory
///
/// Members are indexed under their display name, falling back to the
/// username; tags under their name.
pub fn reindex(
    index: &SearchIndex,
    directory: &dyn GroupDirectory,
    caller: UserId,
    group: GroupId,
) -> Result<Output> {
    require_member(directory, &group, &caller)?;

    let members = directory.members(&group)?;
    let tags = directory.tags(&group)?;
    let (member_count, tag_count) = (members.len() as u64, tags.len() as u64);

    index.reindex_members(&group, members.iter().map(|m| m.to_entry()));
    index.reindex_tags(&group, tags.iter().map(|t| t.to_entry()));

    info!(
        target: "taskdeck::executor",
        group = %group,
        caller = %caller,
        members = member_count,
        tags = tag_count,
        "Group reindexed"
    );
    Ok(Output::Reindexed {
        members: member_count,
        tags: tag_count,
    })
}
