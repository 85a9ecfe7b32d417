//! Core types for Taskdeck search
//!
//! This crate defines the foundational types used throughout the system:
//! - GroupId / EntityId: Opaque identifiers issued by the system of record
//! - EntityKind: Member or tag, the two per-group index categories
//! - IndexEntry: Element of a reindex snapshot
//! - Error: Error type for configuration and input validation

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{EntityId, EntityKind, GroupId, IndexEntry, TagId, UserId};
