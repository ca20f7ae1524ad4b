//! Dense dart view of a bidirected graph for the planarity passes.
//!
//! Nodes are renumbered `0..n` in the graph's node order; each ordered pair
//! `(s,d)` with `s != d` becomes exactly one dart (parallel arcs collapse onto
//! the first one, self-loops are skipped). Every dart must have a reverse.

use std::collections::HashMap;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, NodeId};

pub(super) struct Darts {
    /// Dense index → graph node id.
    pub nodes: Vec<NodeId>,
    pub src: Vec<usize>,
    pub dst: Vec<usize>,
    pub rev: Vec<usize>,
    /// Outgoing darts per dense node, in incident-list order.
    pub out: Vec<Vec<usize>>,
    by_pair: HashMap<(NodeId, NodeId), usize>,
}

impl Darts {
    pub fn build(g: &Graph) -> Result<Self> {
        let nodes: Vec<NodeId> = g.node_ids().collect();
        let mut dense = vec![usize::MAX; g.node_bound()];
        for (i, v) in nodes.iter().enumerate() {
            dense[v.0] = i;
        }
        let mut src = Vec::new();
        let mut dst = Vec::new();
        let mut out = vec![Vec::new(); nodes.len()];
        let mut by_pair = HashMap::new();
        for (i, &v) in nodes.iter().enumerate() {
            for e in g.out_edges(v) {
                let Some(edge) = g.edge(e) else { continue };
                if edge.is_loop() || by_pair.contains_key(&(v, edge.dest)) {
                    continue;
                }
                let d = src.len();
                by_pair.insert((v, edge.dest), d);
                src.push(i);
                dst.push(dense[edge.dest.0]);
                out[i].push(d);
            }
        }
        let mut rev = vec![0; src.len()];
        for d in 0..src.len() {
            let key = (nodes[dst[d]], nodes[src[d]]);
            rev[d] = *by_pair.get(&key).ok_or_else(|| {
                GraphError::Invariant(format!("arc {:?} -> {:?} has no reverse", key.1, key.0))
            })?;
        }
        Ok(Self {
            nodes,
            src,
            dst,
            rev,
            out,
            by_pair,
        })
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn dart_count(&self) -> usize {
        self.src.len()
    }

    /// Dart for the arc `s → d`, if the pair is adjacent.
    #[inline]
    pub fn dart(&self, s: NodeId, d: NodeId) -> Option<usize> {
        self.by_pair.get(&(s, d)).copied()
    }
}
