//! Random graph samplers (replay tokens, planar and unconstrained families).
//!
//! Model
//! - `random_planar`: stacked triangulation (repeatedly insert a node into a
//!   random triangular face and join it to the three corners), then delete
//!   each non-tree edge with probability `drop_prob`. A random spanning tree is
//!   kept, so the result is connected and planar by construction.
//! - `gnm`: `m` distinct random node pairs on `n` nodes, no self-loops.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG;
//!   the same token always yields the same graph.
//!
//! Arcs are oriented from the lower-numbered to the higher-numbered node, as in
//! `fixtures`.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::graph::{Graph, NodeId};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Planar sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    /// Node count; values below 3 are raised to 3.
    pub nodes: usize,
    /// Probability of deleting each non-tree edge of the triangulation. Clamped to [0, 1].
    pub drop_prob: f64,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            nodes: 24,
            drop_prob: 0.3,
        }
    }
}

fn named(n: usize) -> (Graph, Vec<NodeId>) {
    let mut g = Graph::new();
    let ids = (0..n).map(|i| g.ensure_node(&format!("v{i}"))).collect();
    (g, ids)
}

/// Edge set of a random stacked triangulation on `n >= 3` nodes.
fn stacked_pairs<R: Rng>(n: usize, rng: &mut R) -> Vec<(usize, usize)> {
    let mut pairs = vec![(0, 1), (1, 2), (0, 2)];
    // Both sides of the seed triangle are faces.
    let mut faces: Vec<[usize; 3]> = vec![[0, 1, 2], [0, 1, 2]];
    for v in 3..n {
        let k = rng.gen_range(0..faces.len());
        let [a, b, c] = faces.swap_remove(k);
        pairs.extend([(a, v), (b, v), (c, v)]);
        faces.extend([[a, b, v], [b, c, v], [a, c, v]]);
    }
    pairs
}

/// Random connected planar graph.
pub fn random_planar(cfg: SampleCfg, tok: ReplayToken) -> Graph {
    let mut rng = tok.to_std_rng();
    let n = cfg.nodes.max(3);
    let p = cfg.drop_prob.clamp(0.0, 1.0);
    let mut pairs = stacked_pairs(n, &mut rng);
    pairs.shuffle(&mut rng);

    // Random spanning tree: first pairs (in shuffled order) joining two
    // union-find classes.
    let mut root: Vec<usize> = (0..n).collect();
    fn find(root: &mut [usize], mut x: usize) -> usize {
        while root[x] != x {
            root[x] = root[root[x]];
            x = root[x];
        }
        x
    }
    let (mut g, v) = named(n);
    for (a, b) in pairs {
        let (ra, rb) = (find(&mut root, a), find(&mut root, b));
        let tree = ra != rb;
        if tree {
            root[ra] = rb;
        }
        if tree || !rng.gen_bool(p) {
            // Ids come from `named`.
            g.push_edge(v[a.min(b)], v[a.max(b)]);
        }
    }
    g
}

/// `m` distinct random edges on `n` nodes (capped at `n(n-1)/2`).
pub fn gnm(n: usize, m: usize, tok: ReplayToken) -> Graph {
    let mut rng = tok.to_std_rng();
    let (mut g, v) = named(n);
    if n < 2 {
        return g;
    }
    let m = m.min(n * (n - 1) / 2);
    let mut seen: HashSet<(usize, usize)> = HashSet::with_capacity(m);
    while seen.len() < m {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        if a == b {
            continue;
        }
        let key = (a.min(b), a.max(b));
        if seen.insert(key) {
            g.push_edge(v[key.0], v[key.1]);
        }
    }
    g
}

/// Random relabelling of `g`: same shape, node and edge ids permuted.
pub fn shuffled(g: &Graph, tok: ReplayToken) -> Graph {
    let mut rng = tok.to_std_rng();
    let mut order: Vec<NodeId> = g.node_ids().collect();
    order.shuffle(&mut rng);
    let mut arcs: Vec<(NodeId, NodeId)> = g.edges().map(|(_, e)| (e.source, e.dest)).collect();
    arcs.shuffle(&mut rng);

    let mut out = Graph::new();
    let mut local = vec![NodeId(0); g.node_bound()];
    for &v in &order {
        local[v.0] = out.ensure_node(g.name(v));
    }
    for (s, d) in arcs {
        out.push_edge(local[s.0], local[d.0]);
    }
    out
}
