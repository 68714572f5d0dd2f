//! Builder instance identifiers
//!
//! A placement of a catalog ingredient into the builder carries its own
//! `InstanceId`, so the same catalog item can be added twice and still be
//! removed or reordered individually.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Locally generated identifier for one builder placement.
///
/// Independent of the catalog id; never repeats within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId(Uuid);

impl InstanceId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for InstanceId {
    fn default() -> Self {
        Self::generate()
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
