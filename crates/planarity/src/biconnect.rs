//! Biconnectivity augmentation by a single low-point DFS.
//!
//! Model
//! - DFS over outgoing arcs of a connected, bidirected graph, assigning
//!   `dfs_num` and `low_pt` (lowest `dfs_num` reachable through one non-tree
//!   arc from the subtree).
//! - When a finished child `w` of `n` has `low_pt[w] == dfs_num[n]`, `n`
//!   separates `w`'s subtree. We link `w` to `n`'s parent if `w` is the first
//!   child, otherwise to the first child; both directions are added so the
//!   graph stays bidirected. Net effect: all children of a cut vertex are tied
//!   to its first child, and the first child to the grandparent.
//!
//! Preconditions
//! - Connectivity is assumed, not checked; only the first node's component is
//!   augmented.

use tracing::debug;

use crate::error::Result;
use crate::graph::{Graph, NodeId};

struct Frame {
    v: NodeId,
    /// Next position in `v`'s incident list (the list may grow while we walk it).
    next: usize,
    first_child: Option<NodeId>,
}

/// Add bidirected bridging pairs until no node is a cut vertex.
/// Returns the number of arcs added.
pub fn make_biconnected(g: &mut Graph) -> Result<usize> {
    let Some(root) = g.node_ids().next() else {
        return Ok(0);
    };
    let bound = g.node_bound();
    let mut dfs_num: Vec<Option<usize>> = vec![None; bound];
    let mut low_pt = vec![0usize; bound];
    let mut parent: Vec<Option<NodeId>> = vec![None; bound];
    let mut count = 0usize;
    let mut added = 0usize;

    let mut stack = vec![enter(g, root, &mut dfs_num, &mut low_pt, &mut count)];
    while let Some(top) = stack.last_mut() {
        let v = top.v;
        if let Some(&e) = g.incident(v).get(top.next) {
            top.next += 1;
            let Some(edge) = g.edge(e) else { continue };
            if edge.source != v || edge.is_loop() {
                continue;
            }
            let w = edge.dest;
            match dfs_num[w.0] {
                None => {
                    parent[w.0] = Some(v);
                    let frame = enter(g, w, &mut dfs_num, &mut low_pt, &mut count);
                    stack.push(frame);
                }
                Some(num_w) => low_pt[v.0] = low_pt[v.0].min(num_w),
            }
            continue;
        }

        // `v` is finished; fold it into its DFS parent.
        stack.pop();
        let Some(frame) = stack.last() else { break };
        let n = frame.v;
        let first_child = frame.first_child;
        let w = v;
        if Some(low_pt[w.0]) == dfs_num[n.0] {
            if Some(w) == first_child {
                if let Some(p) = parent[n.0] {
                    g.add_edge(w, p)?;
                    g.add_edge(p, w)?;
                    added += 2;
                }
            } else if let Some(u) = first_child {
                g.add_edge(u, w)?;
                g.add_edge(w, u)?;
                added += 2;
            }
        }
        low_pt[n.0] = low_pt[n.0].min(low_pt[w.0]);
    }
    debug!(added, nodes = g.node_count(), "make_biconnected");
    Ok(added)
}

fn enter(
    g: &Graph,
    v: NodeId,
    dfs_num: &mut [Option<usize>],
    low_pt: &mut [usize],
    count: &mut usize,
) -> Frame {
    dfs_num[v.0] = Some(*count);
    low_pt[v.0] = *count;
    *count += 1;
    let first_child = g.successors(v).find(|&w| w != v);
    Frame {
        v,
        next: 0,
        first_child,
    }
}

/// Nodes whose removal disconnects the (undirected view of the) graph.
pub fn articulation_points(g: &Graph) -> Vec<NodeId> {
    let mut cuts = Vec::new();
    if g.node_count() < 3 {
        return cuts;
    }
    for v in g.node_ids() {
        let mut rest = g.clone();
        if rest.remove_node(v).is_ok() && !rest.is_connected() {
            cuts.push(v);
        }
    }
    cuts
}
