//! Tag lifecycle handlers.

use taskdeck_core::{GroupId, TagId};
use taskdeck_search::SearchIndex;

use crate::types::TagRecord;
use crate::{Output, Result};

/// Handle TagSaved: index the trimmed tag name
pub fn tag_saved(index: &SearchIndex, group: GroupId, tag: TagRecord) -> Result<Output> {
    index.upsert_tag(&group, tag.id, tag.name.trim());
    Ok(Output::Unit)
}

/// Handle TagRemoved
pub fn tag_removed(index: &SearchIndex, group: GroupId, tag: TagId) -> Result<Output> {
    index.remove_tag(&group, &tag);
    Ok(Output::Unit)
}
