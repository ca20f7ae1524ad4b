//! Curated API (UNSTABLE).
//!
//! - Convenience surface for the CLI, benches and downstream experiments.
//! - Prefer these re-exports over deep module paths; breaking changes are
//!   allowed when they improve the design.

// Storage and utilities
pub use crate::graph::{
    break_bidirection, circular_dependencies, circular_dependencies_with, connected_components,
    make_bidirected, remove_self_loops, CycleCfg, Edge, EdgeId, Graph, Node, NodeId, Side,
};
// Augmentation
pub use crate::biconnect::{articulation_points, make_biconnected};
// Planarity and embedding
pub use crate::planarity::{
    analyze, create_embedding, is_planar, planar, ComponentReport, PlanarityReport,
};
// Faces
pub use crate::faces::{Dart, Embedding, Face, FaceId};
// Samplers
pub use crate::random::{gnm, random_planar, shuffled, ReplayToken, SampleCfg};
// Errors
pub use crate::error::{GraphError, Result};
