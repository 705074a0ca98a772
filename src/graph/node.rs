//! Node identifiers

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of a node in the graph.
///
/// Small positive integer, unique per node and stable for the lifetime of
/// the graph. Carries no other state; colours live on the render surface.
/// Zero is representable but never accepted by parsing or graph
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u32);

impl NodeId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw integer value
    pub const fn get(self) -> u32 {
        self.0
    }

    /// False for zero
    pub const fn is_positive(self) -> bool {
        self.0 != 0
    }
}

/// Errors from parsing a node id
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseNodeIdError {
    #[error("invalid node id: {0}")]
    NotAnInteger(#[from] std::num::ParseIntError),

    #[error("node ids start at 1")]
    Zero,
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for NodeId {
    type Err = ParseNodeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<u32>()? {
            0 => Err(ParseNodeIdError::Zero),
            raw => Ok(Self(raw)),
        }
    }
}
