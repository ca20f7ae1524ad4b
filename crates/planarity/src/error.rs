//! Error type shared by graph construction, traversals and the embedding API.
//!
//! Non-planarity is never an error: `is_planar` answers `Ok(false)` and
//! `create_embedding` answers `Ok(None)`. Errors are reserved for misuse of
//! the API (bad ids, disconnected input to single-component calls), for the
//! cycle-enumeration guard, and for broken internal invariants.

use thiserror::Error;

use crate::faces::FaceId;
use crate::graph::{EdgeId, NodeId};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("duplicate node identifier `{0}`")]
    DuplicateNode(String),
    #[error("unknown node identifier `{0}`")]
    UnknownNodeName(String),
    #[error("node {0:?} is not in the graph")]
    UnknownNode(NodeId),
    #[error("edge {0:?} is not in the graph")]
    UnknownEdge(EdgeId),
    #[error("face {0:?} does not exist")]
    UnknownFace(FaceId),
    #[error("node {node:?} is not on the boundary of face {face:?}")]
    NotOnFace { face: FaceId, node: NodeId },
    #[error("self-loop {0:?} cannot take part in a face")]
    SelfLoop(EdgeId),
    #[error("splitting a face from {0:?} to itself would add a self-loop")]
    LoopSplit(NodeId),
    #[error("rotation for node {0:?} is not a permutation of its incident edges")]
    BadRotation(NodeId),
    #[error("graph has {components} connected components; decompose it first")]
    Disconnected { components: usize },
    #[error("cycle enumeration exceeded the limit of {limit} cycles")]
    CycleLimit { limit: usize },
    #[error("internal invariant violated: {0}")]
    Invariant(String),
}

pub type Result<T> = std::result::Result<T, GraphError>;
