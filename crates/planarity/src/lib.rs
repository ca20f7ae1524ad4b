//! Planarity testing and planar embedding for directed graphs.
//!
//! Pipeline
//! - `graph`: slot-arena storage with stable ids plus whole-graph utilities
//!   (components, bidirection, cycle enumeration).
//! - `biconnect`: augmentation until no cut vertex remains.
//! - `planarity`: left-right reorder, strong-planarity test and the rotation
//!   system of a planar graph.
//! - `faces`: face tracing over a rotation system, outer-face choice and face
//!   splitting.
//!
//! API Policy
//! - `api` is the curated surface; module paths may move between versions.
//! - Non-planarity is an answer, not an error (`Ok(false)` / `Ok(None)`).

pub mod api;
pub mod biconnect;
pub mod error;
pub mod faces;
pub mod fixtures;
pub mod graph;
pub mod planarity;
pub mod random;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{GraphError, Result};
pub use faces::{Embedding, Face, FaceId};
pub use graph::{EdgeId, Graph, NodeId, Side};
pub use planarity::{create_embedding, is_planar};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::faces::{Dart, Embedding, Face, FaceId};
    pub use crate::graph::{
        break_bidirection, connected_components, make_bidirected, CycleCfg, Edge, EdgeId, Graph,
        NodeId, Side,
    };
    pub use crate::planarity::{analyze, create_embedding, is_planar, PlanarityReport};
    pub use crate::random::{random_planar, ReplayToken, SampleCfg};
    pub use crate::{GraphError, Result};
}
