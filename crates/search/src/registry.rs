//! Per-group registry of token indexes
//!
//! `SearchIndex` owns one [`TokenIndex`] per (group, kind) pair and routes
//! every call to the right one. Indexes are created on first touch and live
//! as long as the registry.
//!
//! # Concurrency
//!
//! The group maps are `DashMap`s; each `TokenIndex` sits behind its own
//! `parking_lot::RwLock`. A mutation locks exactly one (group, kind) index,
//! so writers to different groups never contend. Reindex builds the
//! replacement outside the lock and swaps it in, so readers see either the
//! old contents or the new ones.

use crate::config::IndexConfig;
use crate::index::TokenIndex;
use dashmap::DashMap;
use parking_lot::RwLock;
use std::sync::Arc;
use taskdeck_core::{EntityId, EntityKind, GroupId, IndexEntry, TagId, UserId};
use tracing::{debug, info};

type Slot = Arc<RwLock<TokenIndex>>;

/// Registry of member and tag indexes, one pair per group
///
/// Constructed explicitly and shared by `Arc`; there is no process-wide
/// instance.
///
/// # Example
///
/// ```
/// use taskdeck_core::{EntityId, EntityKind, GroupId};
/// use taskdeck_search::SearchIndex;
///
/// let index = SearchIndex::new();
/// let group = GroupId::from("g1");
/// index.upsert_member(&group, EntityId::from("u1"), "Alice Smith");
///
/// let ids = index.search(&group, EntityKind::Member, "alice", None);
/// assert_eq!(ids, vec![EntityId::from("u1")]);
/// ```
#[derive(Debug, Default)]
pub struct SearchIndex {
    members: DashMap<GroupId, Slot>,
    tags: DashMap<GroupId, Slot>,
    config: IndexConfig,
}

impl SearchIndex {
    /// Create an empty registry with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with the given configuration
    pub fn with_config(config: IndexConfig) -> Self {
        SearchIndex {
            members: DashMap::new(),
            tags: DashMap::new(),
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    fn registry(&self, kind: EntityKind) -> &DashMap<GroupId, Slot> {
        match kind {
            EntityKind::Member => &self.members,
            EntityKind::Tag => &self.tags,
        }
    }

    /// Get or create the index for (group, kind)
    fn slot(&self, group: &GroupId, kind: EntityKind) -> Slot {
        let registry = self.registry(kind);
        if let Some(slot) = registry.get(group) {
            return Arc::clone(slot.value());
        }
        Arc::clone(registry.entry(group.clone()).or_default().value())
    }

    /// Get the index for (group, kind) without creating it
    fn existing(&self, group: &GroupId, kind: EntityKind) -> Option<Slot> {
        self.registry(kind)
            .get(group)
            .map(|slot| Arc::clone(slot.value()))
    }

    // ========================================================================
    // Registry
    // ========================================================================

    /// Make sure both indexes exist for a group
    ///
    /// Idempotent. Every operation except removal calls this implicitly.
    pub fn ensure(&self, group: &GroupId) {
        for kind in EntityKind::ALL {
            self.slot(group, kind);
        }
    }

    /// Number of groups with at least one index
    pub fn group_count(&self) -> usize {
        // ensure() always creates both, but removals never create either
        self.members.len().max(self.tags.len())
    }

    /// Number of ids indexed for (group, kind); 0 if never touched
    pub fn indexed_count(&self, group: &GroupId, kind: EntityKind) -> usize {
        self.existing(group, kind)
            .map(|slot| slot.read().len())
            .unwrap_or(0)
    }

    // ========================================================================
    // Generic Operations
    // ========================================================================

    /// Insert or replace one entity's text
    pub fn upsert(&self, group: &GroupId, kind: EntityKind, id: EntityId, text: &str) {
        self.ensure(group);
        debug!(target: "taskdeck::search", group = %group, kind = %kind, id = %id, "Upsert");
        self.slot(group, kind).write().upsert(id, text);
    }

    /// Remove one entity; no-op if the group was never indexed
    pub fn remove(&self, group: &GroupId, kind: EntityKind, id: &EntityId) {
        let Some(slot) = self.existing(group, kind) else {
            return;
        };
        let removed = slot.write().remove(id);
        debug!(target: "taskdeck::search", group = %group, kind = %kind, id = %id, removed, "Remove");
    }

    /// Replace the (group, kind) index with a snapshot
    pub fn reindex<I>(&self, group: &GroupId, kind: EntityKind, entries: I)
    where
        I: IntoIterator<Item = IndexEntry>,
    {
        self.ensure(group);
        let fresh = TokenIndex::from_entries(entries);
        let (docs, terms) = (fresh.len(), fresh.term_count());
        *self.slot(group, kind).write() = fresh;
        info!(
            target: "taskdeck::search",
            group = %group,
            kind = %kind,
            docs_indexed = docs,
            terms = terms,
            "Reindex complete"
        );
    }

    /// Search one (group, kind) index
    ///
    /// `limit: None` uses the configured default; `max_limit` caps any
    /// explicit value. A group that was never indexed yields no results.
    pub fn search(
        &self,
        group: &GroupId,
        kind: EntityKind,
        query: &str,
        limit: Option<usize>,
    ) -> Vec<EntityId> {
        self.ensure(group);
        let limit = self.config.effective_limit(limit);
        self.slot(group, kind).read().search(query, limit)
    }

    // ========================================================================
    // Members
    // ========================================================================

    /// Index a member under its display name
    pub fn upsert_member(&self, group: &GroupId, user: UserId, name: &str) {
        self.upsert(group, EntityKind::Member, user, name);
    }

    /// Drop a member from the group's index
    pub fn remove_member(&self, group: &GroupId, user: &UserId) {
        self.remove(group, EntityKind::Member, user);
    }

    /// Rebuild the group's member index from the authoritative list
    pub fn reindex_members<I>(&self, group: &GroupId, members: I)
    where
        I: IntoIterator<Item = IndexEntry>,
    {
        self.reindex(group, EntityKind::Member, members);
    }

    // ========================================================================
    // Tags
    // ========================================================================

    /// Index a tag under its name
    pub fn upsert_tag(&self, group: &GroupId, tag: TagId, name: &str) {
        self.upsert(group, EntityKind::Tag, tag, name);
    }

    /// Drop a tag from the group's index
    pub fn remove_tag(&self, group: &GroupId, tag: &TagId) {
        self.remove(group, EntityKind::Tag, tag);
    }

    /// Rebuild the group's tag index from the authoritative list
    pub fn reindex_tags<I>(&self, group: &GroupId, tags: I)
    where
        I: IntoIterator<Item = IndexEntry>,
    {
        self.reindex(group, EntityKind::Tag, tags);
    }
}
