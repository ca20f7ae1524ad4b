//! Named graph families used by tests, benches and the CLI smoke runs.
//!
//! Every builder emits one arc per undirected edge, oriented from the
//! lower-numbered to the higher-numbered node; call `make_bidirected` for the
//! bidirected form. Nodes are named `v0, v1, …` unless noted.

use crate::graph::{Graph, NodeId};

fn named(n: usize) -> (Graph, Vec<NodeId>) {
    let mut g = Graph::new();
    let ids = (0..n).map(|i| g.ensure_node(&format!("v{i}"))).collect();
    (g, ids)
}

// Ids come from `named`, so both endpoints exist.
fn arc(g: &mut Graph, s: NodeId, d: NodeId) {
    g.push_edge(s, d);
}

pub fn triangle() -> Graph {
    cycle(3)
}

/// Complete graph `K_n`.
pub fn complete(n: usize) -> Graph {
    let (mut g, v) = named(n);
    for i in 0..n {
        for j in i + 1..n {
            arc(&mut g, v[i], v[j]);
        }
    }
    g
}

/// Complete bipartite graph `K_{a,b}` with sides `a0…` and `b0…`.
pub fn complete_bipartite(a: usize, b: usize) -> Graph {
    let mut g = Graph::new();
    let left: Vec<NodeId> = (0..a).map(|i| g.ensure_node(&format!("a{i}"))).collect();
    let right: Vec<NodeId> = (0..b).map(|i| g.ensure_node(&format!("b{i}"))).collect();
    for &l in &left {
        for &r in &right {
            arc(&mut g, l, r);
        }
    }
    g
}

/// Simple path on `n` nodes.
pub fn path(n: usize) -> Graph {
    let (mut g, v) = named(n);
    for w in v.windows(2) {
        arc(&mut g, w[0], w[1]);
    }
    g
}

/// Simple cycle on `n >= 3` nodes.
pub fn cycle(n: usize) -> Graph {
    let (mut g, v) = named(n);
    for i in 0..n {
        let j = (i + 1) % n;
        if i < j {
            arc(&mut g, v[i], v[j]);
        } else {
            arc(&mut g, v[j], v[i]);
        }
    }
    g
}

/// Star: hub `v0` joined to `leaves` nodes `v1…`.
pub fn star(leaves: usize) -> Graph {
    let (mut g, v) = named(leaves + 1);
    for &leaf in &v[1..] {
        arc(&mut g, v[0], leaf);
    }
    g
}

/// Wheel: hub `v0` joined to every node of a rim cycle `v1…v{rim}`.
pub fn wheel(rim: usize) -> Graph {
    let (mut g, v) = named(rim + 1);
    for i in 1..=rim {
        arc(&mut g, v[0], v[i]);
        let j = if i == rim { 1 } else { i + 1 };
        arc(&mut g, v[i.min(j)], v[i.max(j)]);
    }
    g
}

/// `w × h` grid graph, node `v{y*w + x}` at column `x`, row `y`.
pub fn grid(w: usize, h: usize) -> Graph {
    let (mut g, v) = named(w * h);
    for y in 0..h {
        for x in 0..w {
            let i = y * w + x;
            if x + 1 < w {
                arc(&mut g, v[i], v[i + 1]);
            }
            if y + 1 < h {
                arc(&mut g, v[i], v[i + w]);
            }
        }
    }
    g
}

/// Petersen graph (non-planar, contains a K3,3 subdivision).
pub fn petersen() -> Graph {
    let (mut g, v) = named(10);
    for i in 0..5 {
        let outer = (i, (i + 1) % 5);
        let inner = (5 + i, 5 + (i + 2) % 5);
        for (a, b) in [outer, inner, (i, 5 + i)] {
            arc(&mut g, v[a.min(b)], v[a.max(b)]);
        }
    }
    g
}
