//! Stable story node identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a story node.
///
/// Ids are assigned by the story content and are stable across saves, so a
/// resumed session lands on the same passage it was saved at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub i32);

impl NodeId {
    /// Sentinel id marking an invalid or unresumable state.
    pub const INVALID: NodeId = NodeId(-1);

    /// Whether this id can refer to real content. Sentinel ids cannot.
    pub fn is_valid(self) -> bool {
        self.0 >= 0
    }
}

impl From<i32> for NodeId {
    fn from(id: i32) -> Self {
        NodeId(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
