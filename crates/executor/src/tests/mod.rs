//! Test modules for the executor crate.

pub mod serialization;

use std::sync::Arc;

use crate::{Executor, GroupId, InMemoryDirectory, MemberRecord, SearchIndex};

/// Executor over an empty index, plus the directory backing it.
pub(crate) fn create_executor() -> (Executor, Arc<InMemoryDirectory>) {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let directory = Arc::new(InMemoryDirectory::new());
    let executor = Executor::new(Arc::new(SearchIndex::new()), directory.clone());
    (executor, directory)
}

/// Register `id` as a member of `group` in the directory only.
pub(crate) fn add_member(directory: &InMemoryDirectory, group: &GroupId, id: &str, name: &str) {
    directory.put_member(group, MemberRecord::new(id, name));
}
