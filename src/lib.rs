//! Taskdeck - per-group member and tag search for the team board
//!
//! Each group owns two in-memory token indexes, one for member display names
//! and one for tag names. Lifecycle hooks keep them current; a reindex
//! rebuilds them from the system of record.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use taskdeck::{EntityKind, GroupId, InMemoryDirectory, MemberRecord, Taskdeck, UserId};
//!
//! let directory = Arc::new(InMemoryDirectory::new());
//! let deck = Taskdeck::new(directory.clone());
//! let group = GroupId::from("g1");
//!
//! for member in [
//!     MemberRecord::new("u1", "ivan"),
//!     MemberRecord::new("u2", "ivanova").with_display_name("Maria Ivanova"),
//! ] {
//!     directory.put_member(&group, member.clone());
//!     deck.member_joined(&group, member)?;
//! }
//!
//! let found = deck.search(&UserId::from("u1"), &group, EntityKind::Member, "iv", None)?;
//! assert_eq!(found.len(), 2);
//! # Ok::<(), taskdeck::Error>(())
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Executor`], which provides a command-based
//! API. The [`Taskdeck`] struct provides a typed interface over it.

// Re-export the public API from taskdeck-executor
pub use taskdeck_executor::*;

// Tokenizer and index internals for callers that need them directly
pub use taskdeck_search::{normalize, tokenize, TokenIndex, DEFAULT_LIMIT};
