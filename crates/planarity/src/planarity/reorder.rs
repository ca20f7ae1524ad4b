//! First pass: DFS numbering, low points and the left-right adjacency order.
//!
//! - Forward arcs and reversals of tree arcs are dropped, leaving one dart per
//!   tree edge (parent → child) and per back edge (descendant → ancestor).
//! - Surviving darts are ordered by
//!   `cost = 2·dfs(d)` for back edges, `2·lowpt1(d)` for tree edges whose child
//!   has `lowpt2(d) >= dfs(s)`, and `2·lowpt1(d) + 1` for the other tree edges,
//!   then regrouped per source node.

use super::darts::Darts;
use crate::error::{GraphError, Result};

const UNSEEN: usize = usize::MAX;

/// Result of the reordering DFS over a `Darts` view.
pub(super) struct Dfs {
    pub num: Vec<usize>,
    /// Tree dart into each node (`None` for the root).
    pub parent: Vec<Option<usize>>,
    /// Surviving darts per node in left-right order.
    pub adj: Vec<Vec<usize>>,
}

impl Dfs {
    /// First dart of `v`'s reordered adjacency (the spine continuation).
    pub fn first(&self, v: usize) -> Result<usize> {
        self.adj[v]
            .first()
            .copied()
            .ok_or_else(|| GraphError::Invariant(format!("node #{v} has no dart after reorder")))
    }

    pub fn parent_dart(&self, v: usize) -> Result<usize> {
        self.parent[v]
            .ok_or_else(|| GraphError::Invariant(format!("spine node #{v} has no tree parent")))
    }

    #[inline]
    pub fn is_tree(&self, darts: &Darts, e: usize) -> bool {
        self.num[darts.src[e]] < self.num[darts.dst[e]]
    }
}

pub(super) fn reorder(darts: &Darts) -> Dfs {
    let n = darts.node_count();
    let mut num = vec![UNSEEN; n];
    let mut low1 = vec![0usize; n];
    let mut low2 = vec![0usize; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut deleted = vec![false; darts.dart_count()];
    let mut count = 1usize;

    if n > 0 {
        num[0] = 0;
        // (node, next position in its out list)
        let mut stack: Vec<(usize, usize)> = vec![(0, 0)];
        while let Some((v, next)) = stack.last_mut() {
            let v = *v;
            if let Some(&e) = darts.out[v].get(*next) {
                *next += 1;
                let w = darts.dst[e];
                if num[w] == UNSEEN {
                    parent[w] = Some(e);
                    num[w] = count;
                    low1[w] = count;
                    low2[w] = count;
                    count += 1;
                    stack.push((w, 0));
                } else if num[w] >= num[v] || parent[v].map(|p| darts.src[p]) == Some(w) {
                    // forward arc or reversal of the tree arc into v
                    deleted[e] = true;
                } else if num[w] < low1[v] {
                    low2[v] = low1[v];
                    low1[v] = num[w];
                } else if num[w] > low1[v] {
                    low2[v] = low2[v].min(num[w]);
                }
                continue;
            }
            stack.pop();
            let Some(p) = parent[v] else { continue };
            let u = darts.src[p];
            if low1[v] < low1[u] {
                low2[u] = low1[u].min(low2[v]);
                low1[u] = low1[v];
            } else if low1[v] == low1[u] {
                low2[u] = low2[u].min(low2[v]);
            } else {
                low2[u] = low2[u].min(low1[v]);
            }
        }
    }

    let mut kept: Vec<(usize, usize)> = (0..darts.dart_count())
        .filter(|&e| !deleted[e] && num[darts.src[e]] != UNSEEN && num[darts.dst[e]] != UNSEEN)
        .map(|e| {
            let (s, d) = (darts.src[e], darts.dst[e]);
            let cost = if num[d] < num[s] {
                2 * num[d]
            } else if low2[d] >= num[s] {
                2 * low1[d]
            } else {
                2 * low1[d] + 1
            };
            (cost, e)
        })
        .collect();
    kept.sort_by_key(|&(cost, _)| cost);

    let mut adj = vec![Vec::new(); n];
    for (_, e) in kept {
        adj[darts.src[e]].push(e);
    }
    Dfs { num, parent, adj }
}
