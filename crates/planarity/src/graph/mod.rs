//! Directed-graph storage and whole-graph utilities.
//!
//! Purpose
//! - `types`: the node/edge slot arenas with stable ids and rotation-ordered
//!   incident lists.
//! - `ops`: component extraction, bidirection/debidirection and simple-cycle
//!   enumeration used before (and after) the undirected planarity passes.
//!
//! Notes
//! - Ids stay valid across removals and clones, so a working copy that gains
//!   augmentation edges can be mapped back onto the original by id.

mod ops;
mod types;

pub use ops::{
    break_bidirection, circular_dependencies, circular_dependencies_with, connected_components,
    make_bidirected, remove_self_loops, CycleCfg,
};
pub use types::{Edge, EdgeId, Graph, Node, NodeId, Side};
