#![deny(missing_docs)]
#![doc = "Shared identifiers, error surface and deterministic randomness for the link-prediction engine."]

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod rng;
pub mod sentinel;
pub mod serde_io;

pub use errors::{ErrorInfo, LinkError};
pub use rng::{derive_substream_seed, RngHandle};
pub use sentinel::{if_node_not_exist, SentinelValue, NODE_NOT_FOUND, SAME_NODE};

/// Identifier for a vertex of an adjacency graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u64);

impl NodeId {
    /// Creates a new identifier from its raw integer representation.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub const fn as_raw(&self) -> u64 {
        self.0
    }
}

impl From<u64> for NodeId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
