//! The Executor - single entry point to the group search index.
//!
//! The Executor routes commands to the handlers and converts results to
//! outputs. It holds the shared index and the directory but no state of
//! its own.

use std::sync::Arc;

use taskdeck_search::SearchIndex;
use tracing::debug;

use crate::directory::GroupDirectory;
use crate::handlers;
use crate::{Command, Output, Result};

/// The command executor.
///
/// # Thread Safety
///
/// Executor is `Send + Sync` and can be shared across threads.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use taskdeck_executor::{
///     Command, EntityKind, Executor, GroupId, InMemoryDirectory, MemberRecord, Output,
///     SearchIndex, UserId,
/// };
///
/// let directory = Arc::new(InMemoryDirectory::new());
/// let executor = Executor::new(Arc::new(SearchIndex::new()), directory.clone());
/// let group = GroupId::from("g1");
/// let owner = MemberRecord::new("u1", "asmith").with_display_name("Alice Smith");
/// directory.put_member(&group, owner.clone());
///
/// executor.execute(Command::GroupCreated { group: group.clone(), owner })?;
/// let found = executor.execute(Command::Search {
///     caller: UserId::from("u1"),
///     group,
///     kind: EntityKind::Member,
///     query: "ali".into(),
///     limit: None,
/// })?;
/// assert_eq!(found, Output::Ids(vec![UserId::from("u1")]));
/// # Ok::<(), taskdeck_executor::Error>(())
/// ```
pub struct Executor {
    index: Arc<SearchIndex>,
    directory: Arc<dyn GroupDirectory>,
}

impl Executor {
    /// Create an executor over a shared index and directory.
    pub fn new(index: Arc<SearchIndex>, directory: Arc<dyn GroupDirectory>) -> Self {
        Self { index, directory }
    }

    /// Execute a single command.
    ///
    /// Returns the command result or an error.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        debug!(target: "taskdeck::executor", command = cmd.name(), group = %cmd.group(), "Execute");
        let index = self.index.as_ref();
        let directory = self.directory.as_ref();

        match cmd {
            Command::GroupCreated { group, owner } => {
                handlers::member::group_created(index, group, owner)
            }
            Command::MemberJoined { group, member } => {
                handlers::member::member_joined(index, group, member)
            }
            Command::MemberRemoved { group, user } => {
                handlers::member::member_removed(index, group, user)
            }
            Command::TagSaved { group, tag } => handlers::tag::tag_saved(index, group, tag),
            Command::TagRemoved { group, tag } => handlers::tag::tag_removed(index, group, tag),
            Command::Search {
                caller,
                group,
                kind,
                query,
                limit,
            } => handlers::search::search(index, directory, caller, group, kind, query, limit),
            Command::Reindex { caller, group } => {
                handlers::search::reindex(index, directory, caller, group)
            }
        }
    }

    /// Execute multiple commands sequentially.
    ///
    /// Returns all results in the same order as the input commands.
    /// Execution continues even if some commands fail.
    pub fn execute_many(&self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }

    /// The shared search index.
    pub fn index(&self) -> &Arc<SearchIndex> {
        &self.index
    }
}
