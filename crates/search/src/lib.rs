//! Member and tag search for Taskdeck groups
//!
//! This crate provides:
//! - Tokenizer shared by indexing and querying
//! - TokenIndex: inverted index for one (group, kind) pair
//! - SearchIndex: per-group registry routing upserts, removals, reindexes
//!   and searches
//! - IndexConfig: result limits loaded from `taskdeck.toml`
//!
//! The index is volatile. After a restart it is empty until the owner
//! reindexes each group from the system of record.
//!
//! # Usage
//!
//! ```
//! use taskdeck_core::{EntityId, EntityKind, GroupId, IndexEntry};
//! use taskdeck_search::SearchIndex;
//!
//! let index = SearchIndex::new();
//! let group = GroupId::from("g1");
//! index.reindex_tags(&group, vec![
//!     IndexEntry::new("t1", "Urgent"),
//!     IndexEntry::new("t2", "urgently"),
//! ]);
//!
//! let ids = index.search(&group, EntityKind::Tag, "urg", Some(10));
//! assert_eq!(ids, vec![EntityId::from("t1"), EntityId::from("t2")]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod index;
pub mod registry;
pub mod tokenizer;

// Re-export commonly used types
pub use config::{IndexConfig, CONFIG_FILE_NAME};
pub use index::{TokenIndex, DEFAULT_LIMIT};
pub use registry::SearchIndex;
pub use tokenizer::{normalize, tokenize, tokenize_unique};
