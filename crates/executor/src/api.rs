//! Typed facade over the [`Executor`].
//!
//! [`Taskdeck`] wraps command construction and output matching so the host
//! services can call plain methods from their lifecycle hooks and request
//! handlers.

use std::path::Path;
use std::sync::Arc;

use taskdeck_core::{EntityId, EntityKind, GroupId, TagId, UserId};
use taskdeck_search::{IndexConfig, SearchIndex, CONFIG_FILE_NAME};
use tracing::info;

use crate::directory::GroupDirectory;
use crate::types::{MemberRecord, ReindexInfo, SearchParams, TagRecord};
use crate::{Command, Error, Executor, Output, Result};

/// Group member and tag search for one process
///
/// Owns the process's [`SearchIndex`]; construct one and share it.
pub struct Taskdeck {
    executor: Executor,
}

impl Taskdeck {
    /// Create with the default index configuration
    pub fn new(directory: Arc<dyn GroupDirectory>) -> Self {
        Self::with_config(IndexConfig::default(), directory)
    }

    /// Create with an explicit index configuration
    pub fn with_config(config: IndexConfig, directory: Arc<dyn GroupDirectory>) -> Self {
        let index = Arc::new(SearchIndex::with_config(config));
        Taskdeck {
            executor: Executor::new(index, directory),
        }
    }

    /// Load `taskdeck.toml` from `config_dir`, writing the default file first
    /// if none exists.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read or written and `Config` if it
    /// does not parse or fails validation.
    pub fn open<P: AsRef<Path>>(config_dir: P, directory: Arc<dyn GroupDirectory>) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILE_NAME);
        IndexConfig::write_default_if_missing(&config_path)?;
        let config = IndexConfig::from_file(&config_path)?;
        info!(
            target: "taskdeck::executor",
            path = %config_path.display(),
            default_limit = config.default_limit,
            max_limit = ?config.max_limit,
            "Loaded search config"
        );
        Ok(Self::with_config(config, directory))
    }

    /// The underlying executor
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// The shared search index
    pub fn index(&self) -> &Arc<SearchIndex> {
        self.executor.index()
    }

    fn expect_unit(&self, cmd: Command) -> Result<()> {
        match self.executor.execute(cmd)? {
            Output::Unit => Ok(()),
            other => Err(unexpected("Unit", &other)),
        }
    }

    // ==================== Lifecycle hooks ====================

    /// A group was created with `owner` as its first member
    pub fn group_created(&self, group: &GroupId, owner: MemberRecord) -> Result<()> {
        self.expect_unit(Command::GroupCreated {
            group: group.clone(),
            owner,
        })
    }

    /// A user joined `group`
    pub fn member_joined(&self, group: &GroupId, member: MemberRecord) -> Result<()> {
        self.expect_unit(Command::MemberJoined {
            group: group.clone(),
            member,
        })
    }

    /// A member left or was removed from `group`
    pub fn member_removed(&self, group: &GroupId, user: &UserId) -> Result<()> {
        self.expect_unit(Command::MemberRemoved {
            group: group.clone(),
            user: user.clone(),
        })
    }

    /// A tag was created or renamed
    pub fn tag_saved(&self, group: &GroupId, tag: TagRecord) -> Result<()> {
        self.expect_unit(Command::TagSaved {
            group: group.clone(),
            tag,
        })
    }

    /// A tag was deleted
    pub fn tag_removed(&self, group: &GroupId, tag: &TagId) -> Result<()> {
        self.expect_unit(Command::TagRemoved {
            group: group.clone(),
            tag: tag.clone(),
        })
    }

    // ==================== Queries ====================

    /// Ranked ids of one kind matching `query`
    pub fn search(
        &self,
        caller: &UserId,
        group: &GroupId,
        kind: EntityKind,
        query: &str,
        limit: Option<u64>,
    ) -> Result<Vec<EntityId>> {
        self.run_search(Command::Search {
            caller: caller.clone(),
            group: group.clone(),
            kind,
            query: query.to_string(),
            limit,
        })
    }

    /// Validate raw request parameters, then search
    pub fn search_params(
        &self,
        caller: &UserId,
        group: &GroupId,
        params: SearchParams,
    ) -> Result<Vec<EntityId>> {
        self.run_search(params.into_command(caller.clone(), group.clone())?)
    }

    fn run_search(&self, cmd: Command) -> Result<Vec<EntityId>> {
        match self.executor.execute(cmd)? {
            Output::Ids(ids) => Ok(ids),
            other => Err(unexpected("Ids", &other)),
        }
    }

    /// Rebuild the group's member and tag indexes from the directory
    pub fn reindex(&self, caller: &UserId, group: &GroupId) -> Result<ReindexInfo> {
        match self.executor.execute(Command::Reindex {
            caller: caller.clone(),
            group: group.clone(),
        })? {
            Output::Reindexed { members, tags } => Ok(ReindexInfo { members, tags }),
            other => Err(unexpected("Reindexed", &other)),
        }
    }
}

fn unexpected(expected: &str, got: &Output) -> Error {
    Error::Internal {
        reason: format!("Unexpected output: expected {}, got {:?}", expected, got),
    }
}
