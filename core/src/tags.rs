use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use uuid::Uuid;

/// Identifier of the model element a measurement was derived from (a wall,
/// an opening, a room). The layout engine never interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TagId(pub Uuid);

impl TagId {
    /// Generate a new random TagId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Create a deterministic ID based on a string seed (e.g. "Wall3_Outer").
    /// The same seed always yields the same ID, so regenerated measurements
    /// still deduplicate against each other.
    pub fn new_deterministic(seed: &str) -> Self {
        Self(Uuid::new_v5(&Uuid::NAMESPACE_OID, seed.as_bytes()))
    }
}

impl Default for TagId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An opaque identifier plus a category, passed through to the output lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tag {
    pub id: TagId,
    pub category: String,
}

impl Tag {
    pub fn new(id: TagId, category: impl Into<String>) -> Self {
        Self {
            id,
            category: category.into(),
        }
    }
}

/// Set equality over tag lists: order and repeats are ignored.
pub fn same_tag_set(a: &[Tag], b: &[Tag]) -> bool {
    if a.len() == b.len() && a == b {
        return true;
    }
    let a: BTreeSet<&Tag> = a.iter().collect();
    let b: BTreeSet<&Tag> = b.iter().collect();
    a == b
}
