// Error type shared by the graph, instance and solution layers

use crate::models::{ItemIndex, NodeId};
use thiserror::Error as ThisError;

/// Misuse of the API. Infeasible candidate solutions are never reported here,
/// they show up through `check_validity` and an infinite cost instead.
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("subpath has {nodes} sites but {picks} item pickup lists")]
    SubpathLengthMismatch { nodes: usize, picks: usize },

    #[error("item {item} is not picked up at path index {index}")]
    ItemNotPicked { index: usize, item: ItemIndex },

    #[error("items cannot be picked up at the depot (path index {index})")]
    PickupAtDepot { index: usize },

    #[error("path must start at the depot")]
    NotStartingAtDepot,

    #[error("path must contain at least the depot")]
    EmptyPath,

    #[error("path index {index} is out of bounds for a path of length {len}")]
    IndexOutOfBounds { index: isize, len: usize },

    #[error("node {node} does not exist in a graph of {node_count} nodes")]
    UnknownNode { node: NodeId, node_count: usize },

    #[error("site {node} has no item {item}")]
    UnknownItem { node: NodeId, item: ItemIndex },

    #[error("edge cost {cost} from {from} to {to} must be finite and non-negative")]
    InvalidEdgeCost { from: NodeId, to: NodeId, cost: f64 },

    #[error("items at site {node} must have a non-zero size")]
    InvalidItemSize { node: NodeId },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid instance definition: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
