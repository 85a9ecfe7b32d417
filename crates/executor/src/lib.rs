//! # Taskdeck Executor
//!
//! Command layer over the group search index.
//!
//! This crate provides:
//! - [`Taskdeck`] - typed facade used by the group, member and tag services
//! - [`Command`]/[`Output`] - serializable command interface
//! - [`GroupDirectory`] - read access to the system of record
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use taskdeck_executor::{
//!     EntityKind, GroupId, InMemoryDirectory, MemberRecord, TagRecord, Taskdeck, UserId,
//! };
//!
//! let directory = Arc::new(InMemoryDirectory::new());
//! let deck = Taskdeck::new(directory.clone());
//! let group = GroupId::from("g1");
//! let owner = MemberRecord::new("u1", "asmith");
//! directory.put_member(&group, owner.clone());
//!
//! deck.group_created(&group, owner)?;
//! deck.tag_saved(&group, TagRecord::new("t1", "Urgent"))?;
//!
//! let tags = deck.search(&UserId::from("u1"), &group, EntityKind::Tag, "urg", None)?;
//! assert_eq!(tags.len(), 1);
//! # Ok::<(), taskdeck_executor::Error>(())
//! ```
//!
//! ## Access
//!
//! Lifecycle hooks are trusted and never checked. `Search` and `Reindex`
//! fail with [`Error::Forbidden`] unless the caller is a member of the group.

#![warn(missing_docs)]

mod api;
mod command;
mod convert;
mod directory;
mod error;
mod executor;
mod output;
mod types;

// Handler modules
mod handlers;

// Test modules
#[cfg(test)]
mod tests;

// =============================================================================
// Public API - Everything users need is re-exported here
// =============================================================================

pub use api::Taskdeck;
pub use command::Command;
pub use directory::{GroupDirectory, InMemoryDirectory};
pub use error::Error;
pub use executor::Executor;
pub use output::Output;
pub use types::*;

// Re-export identifiers so users don't need taskdeck-core directly
pub use taskdeck_core::{EntityId, EntityKind, GroupId, IndexEntry, TagId, UserId};

// Re-export index types so users don't need taskdeck-search directly
pub use taskdeck_search::{IndexConfig, SearchIndex};

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
