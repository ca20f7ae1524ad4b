//! Whole-graph utilities: components, bidirection, cycle enumeration.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::types::{EdgeId, Graph, NodeId};
use crate::error::{GraphError, Result};

/// Split `g` into its connected components (edges taken as undirected).
///
/// Each component is a fresh graph holding its nodes (in `g`'s node order) and
/// every edge of `g` with both endpoints inside it (in `g`'s edge order).
pub fn connected_components(g: &Graph) -> Vec<Graph> {
    let mut comp_of: Vec<Option<usize>> = vec![None; g.node_bound()];
    let mut count = 0;
    for root in g.node_ids() {
        if comp_of[root.0].is_some() {
            continue;
        }
        comp_of[root.0] = Some(count);
        let mut stack = vec![root];
        while let Some(v) = stack.pop() {
            for w in g.neighbors(v) {
                if comp_of[w.0].is_none() {
                    comp_of[w.0] = Some(count);
                    stack.push(w);
                }
            }
        }
        count += 1;
    }

    let mut parts: Vec<Graph> = (0..count).map(|_| Graph::new()).collect();
    let mut local: Vec<Option<NodeId>> = vec![None; g.node_bound()];
    for v in g.node_ids() {
        if let Some(c) = comp_of[v.0] {
            local[v.0] = Some(parts[c].ensure_node(g.name(v)));
        }
    }
    for (_, edge) in g.edges() {
        let (Some(c), Some(s), Some(d)) = (
            comp_of[edge.source.0],
            local[edge.source.0],
            local[edge.dest.0],
        ) else {
            continue;
        };
        // Both endpoints share `c` by construction.
        parts[c].push_edge(s, d);
    }
    parts
}

/// Add the reverse of every arc that lacks one. Returns the number added.
pub fn make_bidirected(g: &mut Graph) -> usize {
    let arcs: Vec<(NodeId, NodeId)> = g.edges().map(|(_, x)| (x.source, x.dest)).collect();
    let mut present: HashSet<(NodeId, NodeId)> = arcs.iter().copied().collect();
    let mut added = 0;
    for (s, d) in arcs {
        if s == d || !present.insert((d, s)) {
            continue;
        }
        g.push_edge(d, s);
        added += 1;
    }
    added
}

/// Drop every self-loop. Returns the number removed.
pub fn remove_self_loops(g: &mut Graph) -> usize {
    let loops: Vec<EdgeId> = g
        .edges()
        .filter(|(_, edge)| edge.is_loop())
        .map(|(e, _)| e)
        .collect();
    g.remove_edges(loops)
}

/// Reduce every mutual pair `(s,d)/(d,s)` to a single arc.
///
/// Nodes are visited in id order; at each node the incoming arcs whose reverse
/// still exists are removed, so the surviving arc of a pair leaves the
/// lower-ordered node. Returns the number of arcs removed.
pub fn break_bidirection(g: &mut Graph) -> usize {
    // Live arc multiplicity per ordered pair.
    let mut live: HashMap<(NodeId, NodeId), usize> = HashMap::new();
    for (_, x) in g.edges() {
        *live.entry((x.source, x.dest)).or_default() += 1;
    }
    let mut doomed = Vec::new();
    for v in g.node_ids() {
        for e in g.in_edges(v) {
            let Some(edge) = g.edge(e) else { continue };
            let u = edge.source;
            if u == v || live.get(&(v, u)).copied().unwrap_or(0) == 0 {
                continue;
            }
            if let Some(n) = live.get_mut(&(u, v)) {
                *n -= 1;
            }
            doomed.push(e);
        }
    }
    g.remove_edges(doomed)
}

/// Bounds for `circular_dependencies_with`.
#[derive(Clone, Copy, Debug)]
pub struct CycleCfg {
    /// Fail with `GraphError::CycleLimit` once more cycles than this are found.
    pub max_cycles: usize,
    /// Longest path (in nodes) explored from the start node.
    pub max_depth: usize,
}

impl Default for CycleCfg {
    fn default() -> Self {
        Self {
            max_cycles: 10_000,
            max_depth: usize::MAX,
        }
    }
}

/// All simple directed cycles through `start`, each as the node path beginning
/// at `start`. Exponential in the worst case; see `circular_dependencies_with`.
///
/// Fails with `GraphError::UnknownNode` when `start` is not in `g`.
pub fn circular_dependencies(g: &Graph, start: NodeId) -> Result<Vec<Vec<NodeId>>> {
    let cfg = CycleCfg {
        max_cycles: usize::MAX,
        max_depth: usize::MAX,
    };
    circular_dependencies_with(g, start, cfg)
}

/// Bounded simple-cycle enumeration through `start`.
pub fn circular_dependencies_with(
    g: &Graph,
    start: NodeId,
    cfg: CycleCfg,
) -> Result<Vec<Vec<NodeId>>> {
    if !g.contains_node(start) {
        return Err(GraphError::UnknownNode(start));
    }
    let mut on_path = vec![false; g.node_bound()];
    let mut path = vec![start];
    let mut cycles = Vec::new();
    // Frame: successor set of the path's last node and the next index into it.
    let mut frames: Vec<(Vec<NodeId>, usize)> = vec![(distinct_successors(g, start), 0)];
    on_path[start.0] = true;

    while let Some((succ, next)) = frames.last_mut() {
        let Some(&w) = succ.get(*next) else {
            frames.pop();
            if let Some(v) = path.pop() {
                on_path[v.0] = false;
            }
            continue;
        };
        *next += 1;
        if w == start {
            if cycles.len() == cfg.max_cycles {
                return Err(GraphError::CycleLimit {
                    limit: cfg.max_cycles,
                });
            }
            cycles.push(path.clone());
        } else if !on_path[w.0] && path.len() < cfg.max_depth {
            on_path[w.0] = true;
            path.push(w);
            frames.push((distinct_successors(g, w), 0));
        }
    }
    debug!(start = start.0, cycles = cycles.len(), "circular_dependencies");
    Ok(cycles)
}

fn distinct_successors(g: &Graph, v: NodeId) -> Vec<NodeId> {
    let mut out: Vec<NodeId> = Vec::new();
    for w in g.successors(v) {
        if !out.contains(&w) {
            out.push(w);
        }
    }
    out
}
