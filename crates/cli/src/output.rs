//! Serializable views of engine results, keyed by node name.

use std::collections::BTreeMap;

use planarity::api::{Embedding, Graph, NodeId, PlanarityReport};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CheckOut {
    pub planar: bool,
    pub nodes: usize,
    pub edges: usize,
    pub components: Vec<ComponentOut>,
}

#[derive(Debug, Serialize)]
pub struct ComponentOut {
    pub nodes: usize,
    pub edges: usize,
    pub planar: bool,
}

impl CheckOut {
    pub fn new(g: &Graph, report: &PlanarityReport) -> Self {
        Self {
            planar: report.planar,
            nodes: g.node_count(),
            edges: g.edge_count(),
            components: report
                .components
                .iter()
                .map(|c| ComponentOut {
                    nodes: c.nodes,
                    edges: c.edges,
                    planar: c.planar,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EmbeddingOut {
    pub planar: bool,
    /// Neighbours of every node in rotation order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<BTreeMap<String, Vec<String>>>,
    /// Each face as the cycle of node names along its boundary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faces: Option<Vec<Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outer_face: Option<usize>,
}

impl EmbeddingOut {
    pub fn non_planar() -> Self {
        Self {
            planar: false,
            rotation: None,
            faces: None,
            outer_face: None,
        }
    }

    pub fn new(emb: &Embedding) -> Self {
        let g = emb.graph();
        let name = |v: NodeId| g.name(v).to_string();
        let rotation = g
            .node_ids()
            .map(|v| {
                let around = g
                    .incident(v)
                    .iter()
                    .filter_map(|&e| g.edge(e))
                    .map(|edge| name(edge.other(v)))
                    .collect();
                (name(v), around)
            })
            .collect();
        let faces = emb
            .faces()
            .iter()
            .map(|f| f.nodes(g).into_iter().map(name).collect())
            .collect();
        Self {
            planar: true,
            rotation: Some(rotation),
            faces: Some(faces),
            outer_face: emb.outer_face().map(|f| f.0),
        }
    }
}

/// Node-name paths of the cycles through one start node.
pub fn cycle_names(g: &Graph, cycles: &[Vec<NodeId>]) -> Vec<Vec<String>> {
    cycles
        .iter()
        .map(|c| c.iter().map(|&v| g.name(v).to_string()).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use planarity::api::{analyze, create_embedding};
    use planarity::fixtures;

    #[test]
    fn embedding_view_names_everything() {
        let g = fixtures::complete(4);
        let emb = create_embedding(&g).unwrap().unwrap();
        let out = EmbeddingOut::new(&emb);
        let rotation = out.rotation.as_ref().unwrap();
        assert_eq!(rotation.len(), 4);
        assert!(rotation.values().all(|r| r.len() == 3));
        assert_eq!(out.faces.as_ref().unwrap().len(), 4);
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["planar"], true);
    }

    #[test]
    fn non_planar_view_is_minimal() {
        let json = serde_json::to_string(&EmbeddingOut::non_planar()).unwrap();
        assert_eq!(json, r#"{"planar":false}"#);
    }

    #[test]
    fn check_view_counts() {
        let g = fixtures::complete(5);
        let out = CheckOut::new(&g, &analyze(&g).unwrap());
        assert!(!out.planar);
        assert_eq!(out.edges, 10);
        assert_eq!(out.components.len(), 1);
    }
}
