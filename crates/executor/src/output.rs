//! Output enum for command execution results.
//!
//! Every command produces exactly one output variant.

use serde::{Deserialize, Serialize};
use taskdeck_core::EntityId;

/// Successful command execution results.
///
/// Each [`Command`](crate::Command) variant maps to exactly one `Output` variant,
/// as documented on the command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Output {
    /// No return value (lifecycle commands)
    Unit,

    /// Ranked ids of matching entities
    Ids(Vec<EntityId>),

    /// Number of entries indexed by a reindex
    Reindexed {
        /// Members indexed
        members: u64,
        /// Tags indexed
        tags: u64,
    },
}
