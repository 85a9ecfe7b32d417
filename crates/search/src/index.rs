//! Inverted token index for one (group, kind) pair
//!
//! This module provides:
//! - TokenIndex: token → entity ids, plus the indexed text per id
//! - Incremental upsert/remove that keep both maps consistent
//! - AND-query search with prefix/length ranking
//!
//! # Matching
//!
//! Every query token must be present in an id's text, as an exact token.
//! The one exception is a last query token that is not itself indexed: it
//! matches every index token it is a prefix of, so a name is findable while
//! it is still being typed.
//!
//! # Invariant
//!
//! The token map is the exact inverse of the text map under
//! [`tokenize`]: re-deriving postings from the stored texts yields the live
//! postings, and no token maps to an empty set.

use crate::tokenizer::{normalize, tokenize, tokenize_unique};
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::ops::Bound;
use taskdeck_core::{EntityId, IndexEntry};

/// Number of ids returned when a caller does not choose a limit
pub const DEFAULT_LIMIT: usize = 10;

// ============================================================================
// TokenIndex
// ============================================================================

/// Inverted index over the names of one entity kind in one group
///
/// Stores ids and their indexed text only. Resolving ids back to full
/// records is the caller's job.
///
/// # Thread Safety
///
/// Mutation takes `&mut self`. [`SearchIndex`](crate::SearchIndex) wraps
/// every instance in its own lock.
#[derive(Debug, Clone, Default)]
pub struct TokenIndex {
    /// Token -> ids whose text contains the token (ordered for prefix scans)
    postings: BTreeMap<String, FxHashSet<EntityId>>,

    /// Id -> currently indexed text
    texts: FxHashMap<EntityId, String>,
}

impl TokenIndex {
    /// Create a new empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from a snapshot
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = IndexEntry>,
    {
        let mut index = Self::new();
        index.rebuild(entries);
        index
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    /// Number of indexed ids
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// Check if no id is indexed
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    /// Number of distinct tokens
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Check if an id is indexed (even under text with no tokens)
    pub fn contains(&self, id: &EntityId) -> bool {
        self.texts.contains_key(id)
    }

    /// Currently indexed text for an id
    pub fn text(&self, id: &EntityId) -> Option<&str> {
        self.texts.get(id).map(String::as_str)
    }

    /// All tokens in the index, in lexicographic order
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }

    /// Ids containing a token
    ///
    /// Returns None if the token is not indexed. The token must already be
    /// normalized (as produced by [`tokenize`]).
    pub fn postings(&self, token: &str) -> Option<&FxHashSet<EntityId>> {
        self.postings.get(token)
    }

    /// All indexed (id, text) pairs
    pub fn entries(&self) -> impl Iterator<Item = (&EntityId, &str)> {
        self.texts.iter().map(|(id, text)| (id, text.as_str()))
    }

    // ========================================================================
    // Index Updates
    // ========================================================================

    /// Insert or replace the indexed text for an id
    ///
    /// Old memberships are dropped first, so renaming an id never leaves it
    /// findable under its previous text. Empty text keeps the id stored but
    /// unreachable by any query.
    pub fn upsert(&mut self, id: EntityId, text: impl Into<String>) {
        self.remove(&id);

        let text = text.into();
        for token in tokenize_unique(&text) {
            self.postings.entry(token).or_default().insert(id.clone());
        }
        self.texts.insert(id, text);
    }

    /// Remove an id from the index
    ///
    /// Returns false (and does nothing) if the id is not indexed.
    pub fn remove(&mut self, id: &EntityId) -> bool {
        let Some(text) = self.texts.remove(id) else {
            return false;
        };

        for token in tokenize_unique(&text) {
            if let Some(ids) = self.postings.get_mut(&token) {
                ids.remove(id);
                if ids.is_empty() {
                    self.postings.remove(&token);
                }
            }
        }
        true
    }

    /// Clear all index data
    pub fn clear(&mut self) {
        self.postings.clear();
        self.texts.clear();
    }

    /// Replace the whole index with a snapshot
    pub fn rebuild<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = IndexEntry>,
    {
        self.clear();
        for entry in entries {
            self.upsert(entry.id, entry.name);
        }
    }

    // ========================================================================
    // Query
    // ========================================================================

    /// Find ids whose text contains every query token
    ///
    /// A query with no tokens matches nothing. Tokens match exactly; only a
    /// last token absent from the index is completed as a prefix. Results
    /// are ordered by:
    /// 1. normalized text starting with the normalized query
    /// 2. shorter text first
    /// 3. id
    pub fn search(&self, query: &str, limit: usize) -> Vec<EntityId> {
        let tokens = tokenize(query);
        let Some((last, leading)) = tokens.split_last() else {
            return Vec::new();
        };
        if limit == 0 {
            return Vec::new();
        }

        let mut exact = Vec::with_capacity(leading.len());
        for token in leading {
            match self.postings.get(token) {
                Some(ids) => exact.push(ids),
                None => return Vec::new(),
            }
        }
        exact.sort_by_key(|ids| ids.len());

        let candidates: FxHashSet<&EntityId> = match self.postings.get(last) {
            Some(ids) => ids.iter().collect(),
            None => self.completions(last).collect(),
        };
        let normalized_query = normalize(query);
        let mut hits: Vec<Hit<'_>> = candidates
            .into_iter()
            .filter(|id| exact.iter().all(|ids| ids.contains(*id)))
            .filter_map(|id| {
                let text = self.texts.get(id)?;
                Some(Hit {
                    id,
                    prefix: normalize(text).starts_with(&normalized_query),
                    // Unicode scalars, not UTF-16 units: astral characters count once
                    len: text.chars().count(),
                })
            })
            .collect();

        hits.sort_by(Hit::rank);
        hits.truncate(limit);
        hits.into_iter().map(|hit| hit.id.clone()).collect()
    }

    /// Ids of every token starting with `prefix` (possibly repeated)
    fn completions<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a EntityId> + 'a {
        self.postings
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |(token, _)| token.starts_with(prefix))
            .flat_map(|(_, ids)| ids.iter())
    }
}

/// Ranking key of a matched id
struct Hit<'a> {
    id: &'a EntityId,
    prefix: bool,
    len: usize,
}

impl Hit<'_> {
    fn rank(a: &Self, b: &Self) -> Ordering {
        b.prefix
            .cmp(&a.prefix)
            .then(a.len.cmp(&b.len))
            .then_with(|| a.id.cmp(b.id))
    }
}

// ============================================================================
// Tests
// ============================================================================
