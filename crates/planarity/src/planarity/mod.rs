//! Planarity test and planar embedding (left-right / Hopcroft–Tarjan style).
//!
//! Purpose
//! - Decide planarity of a graph and, for connected planar graphs, compute a
//!   rotation system whose faces are then traced by `faces`.
//!
//! Pipeline (per connected component)
//! - Quick answers: at most 3 nodes is planar; more than `3n − 6` distinct
//!   undirected adjacencies is not.
//! - Working copy: clone, drop self-loops, `make_bidirected`,
//!   `make_biconnected`, dense dart view (`darts`).
//! - `reorder`: DFS numbers, low points, left-right adjacency order.
//! - `strong`: strong-planarity test from the root's first tree dart, which
//!   also fixes the side (`alpha`) of every segment.
//! - `embed`: rotation numbers for every dart, mapped back onto a clone of the
//!   input (augmentation arcs never reach the caller).
//!
//! Notes
//! - All passes run on explicit frame stacks; deep DFS trees do not recurse.
//! - Annotations (dfs numbers, low points, alpha, sort numbers) are vectors
//!   local to one call; the input graph is never mutated.

mod block;
mod darts;
mod embed;
mod reorder;
mod strong;

use std::collections::HashSet;

use tracing::debug;

use crate::biconnect::make_biconnected;
use crate::error::{GraphError, Result};
use crate::faces::Embedding;
use crate::graph::{
    break_bidirection, connected_components, make_bidirected, remove_self_loops, Graph, Side,
};

use darts::Darts;
use reorder::{reorder, Dfs};

/// Planarity summary of one connected component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentReport {
    pub nodes: usize,
    pub edges: usize,
    pub planar: bool,
}

/// Planarity summary of a whole (possibly disconnected) graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanarityReport {
    pub planar: bool,
    pub components: Vec<ComponentReport>,
}

/// Planarity of an arbitrary graph: every connected component must be planar.
pub fn is_planar(g: &Graph) -> Result<bool> {
    Ok(analyze(g)?.planar)
}

/// Per-component planarity report.
pub fn analyze(g: &Graph) -> Result<PlanarityReport> {
    g.check_invariants()?;
    let mut components = Vec::new();
    for part in connected_components(g) {
        let planar = planar(&part)?;
        components.push(ComponentReport {
            nodes: part.node_count(),
            edges: part.edge_count(),
            planar,
        });
    }
    let planar = components.iter().all(|c| c.planar);
    debug!(components = components.len(), planar, "analyze");
    Ok(PlanarityReport { planar, components })
}

/// Planarity of a connected graph (connectivity is the caller's job).
pub fn planar(g: &Graph) -> Result<bool> {
    let n = g.node_count();
    if n <= 3 {
        return Ok(true);
    }
    if exceeds_euler_bound(g) {
        debug!(nodes = n, "rejected by edge bound");
        return Ok(false);
    }
    Ok(Prepared::build(g)?.test()?.is_some())
}

/// Planar embedding of a connected graph.
///
/// `Ok(None)` if the graph is not planar; `Err(Disconnected)` if it has more
/// than one component. The embedded graph is a clone of `g` without
/// self-loops, with mutual arc pairs reduced to one arc and every node's
/// incident list in rotation order.
pub fn create_embedding(g: &Graph) -> Result<Option<Embedding>> {
    g.check_invariants()?;
    let components = connected_components(g).len();
    if components > 1 {
        return Err(GraphError::Disconnected { components });
    }
    let mut out = g.clone();
    remove_self_loops(&mut out);

    if g.node_count() > 2 {
        if exceeds_euler_bound(g) {
            return Ok(None);
        }
        let prepared = Prepared::build(g)?;
        let Some(alpha) = prepared.test()? else {
            debug!(nodes = g.node_count(), "not planar; no embedding");
            return Ok(None);
        };
        let sort_num = prepared.rotation_numbers(&alpha)?;
        let darts = &prepared.darts;
        out.sort_rotations_by_key(|v, e| {
            let Some(w) = g.edge(e).map(|edge| edge.other(v)) else {
                return (usize::MAX, 0);
            };
            let num = darts.dart(v, w).map_or(usize::MAX, |d| sort_num[d]);
            // Parallel arcs share one dart; mirror their order at the far end.
            let tie = if v < w { e.0 as i64 } else { -(e.0 as i64) };
            (num, tie)
        });
    }
    break_bidirection(&mut out);
    Embedding::from_rotation(out).map(Some)
}

/// More distinct undirected adjacencies than a planar simple graph can have.
fn exceeds_euler_bound(g: &Graph) -> bool {
    let n = g.node_count();
    if n < 3 {
        return false;
    }
    let pairs: HashSet<(usize, usize)> = g
        .edges()
        .filter(|(_, edge)| !edge.is_loop())
        .map(|(_, edge)| {
            let (a, b) = (edge.source.0, edge.dest.0);
            (a.min(b), a.max(b))
        })
        .collect();
    pairs.len() > 3 * n - 6
}

/// Augmented dart view plus the reordering DFS of one component.
struct Prepared {
    darts: Darts,
    dfs: Dfs,
}

impl Prepared {
    fn build(g: &Graph) -> Result<Self> {
        let mut work = g.clone();
        remove_self_loops(&mut work);
        let bidirected = make_bidirected(&mut work);
        let bridged = make_biconnected(&mut work)?;
        debug!(
            nodes = work.node_count(),
            arcs = work.edge_count(),
            bidirected,
            bridged,
            "working copy ready"
        );
        let darts = Darts::build(&work)?;
        let dfs = reorder(&darts);
        Ok(Self { darts, dfs })
    }

    fn root_dart(&self) -> Result<usize> {
        self.dfs.first(0)
    }

    /// Side assignment if planar, `None` otherwise.
    fn test(&self) -> Result<Option<Vec<Side>>> {
        let mut alpha = vec![Side::Left; self.darts.dart_count()];
        let e0 = self.root_dart()?;
        alpha[e0] = Side::Left;
        let ok = strong::strongly_planar(e0, &self.darts, &self.dfs, &mut alpha)?;
        Ok(ok.then_some(alpha))
    }

    fn rotation_numbers(&self, alpha: &[Side]) -> Result<Vec<usize>> {
        embed::embedding(self.root_dart()?, &self.darts, &self.dfs, alpha)
    }
}

#[cfg(test)]
mod tests;
