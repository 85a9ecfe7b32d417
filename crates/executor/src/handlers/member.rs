//! Member lifecycle handlers.

use taskdeck_core::{GroupId, UserId};
use taskdeck_search::SearchIndex;

use crate::types::MemberRecord;
use crate::{Output, Result};

/// Handle GroupCreated: create the group's indexes and add the owner
pub fn group_created(index: &SearchIndex, group: GroupId, owner: MemberRecord) -> Result<Output> {
    index.ensure(&group);
    index.upsert_member(&group, owner.id.clone(), owner.index_name());
    Ok(Output::Unit)
}

/// Handle MemberJoined
pub fn member_joined(index: &SearchIndex, group: GroupId, member: MemberRecord) -> Result<Output> {
    index.upsert_member(&group, member.id.clone(), member.index_name());
    Ok(Output::Unit)
}

/// Handle MemberRemoved
pub fn member_removed(index: &SearchIndex, group: GroupId, user: UserId) -> Result<Output> {
    index.remove_member(&group, &user);
    Ok(Output::Unit)
}
