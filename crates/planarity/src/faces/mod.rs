//! Faces of a rotation system and the `Embedding` handed to callers.
//!
//! Model
//! - A dart is one side of an edge: `Side::Left` walks `source → dest`,
//!   `Side::Right` walks `dest → source`. The face on a dart's left is the
//!   orbit of "arrive at `v` along edge `e`, leave along the edge after `e` in
//!   `v`'s rotation (wrapping)".
//! - Every dart belongs to exactly one face; a bridge carries the same face on
//!   both sides and appears twice in its boundary.
//! - The outer face is the face with the most darts (first traced wins ties).
//!   This is a heuristic, not a topological fact: a graph with one large inner
//!   face can have it reported as outer.

use crate::error::{GraphError, Result};
use crate::graph::{EdgeId, Graph, NodeId, Side};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(pub usize);

/// One traversal direction of an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dart {
    pub edge: EdgeId,
    pub side: Side,
}

impl Dart {
    /// Node the dart leaves from.
    pub fn tail(&self, g: &Graph) -> Option<NodeId> {
        let edge = g.edge(self.edge)?;
        Some(match self.side {
            Side::Left => edge.source,
            Side::Right => edge.dest,
        })
    }

    /// Node the dart arrives at.
    pub fn head(&self, g: &Graph) -> Option<NodeId> {
        let edge = g.edge(self.edge)?;
        Some(match self.side {
            Side::Left => edge.dest,
            Side::Right => edge.source,
        })
    }
}

/// Cyclic boundary of one planar region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Face {
    darts: Vec<Dart>,
}

impl Face {
    pub fn darts(&self) -> &[Dart] {
        &self.darts
    }

    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.darts.iter().map(|d| d.edge)
    }

    /// Number of bounding darts (a bridge counts twice).
    pub fn len(&self) -> usize {
        self.darts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.darts.is_empty()
    }

    /// Boundary nodes in walking order (tail of every dart).
    pub fn nodes(&self, g: &Graph) -> Vec<NodeId> {
        self.darts.iter().filter_map(|d| d.tail(g)).collect()
    }
}

/// A graph with rotation-ordered incident lists and its traced faces.
#[derive(Clone, Debug)]
pub struct Embedding {
    graph: Graph,
    faces: Vec<Face>,
    left: Vec<Option<FaceId>>,
    right: Vec<Option<FaceId>>,
    outer: Option<FaceId>,
}

impl Embedding {
    /// Trace the faces of `graph`, whose incident lists are taken as rotations.
    pub fn from_rotation(graph: Graph) -> Result<Self> {
        if let Some((e, _)) = graph.edges().find(|(_, edge)| edge.is_loop()) {
            return Err(GraphError::SelfLoop(e));
        }
        let mut emb = Self {
            left: vec![None; graph.edge_bound()],
            right: vec![None; graph.edge_bound()],
            faces: Vec::new(),
            outer: None,
            graph,
        };
        let at = rotation_positions(&emb.graph);
        let ids: Vec<EdgeId> = emb.graph.edge_ids().collect();
        for e in ids {
            for side in [Side::Left, Side::Right] {
                if emb.face_of(e, side).is_none() {
                    let darts = emb.trace(Dart { edge: e, side }, &at)?;
                    emb.push_face(darts);
                }
            }
        }
        emb.outer = emb.largest_face();
        Ok(emb)
    }

    /// Dart following `d` around its face; `at` comes from `rotation_positions`.
    fn next_dart(&self, d: Dart, at: &[[usize; 2]]) -> Result<Dart> {
        let arrived = self
            .graph
            .edge(d.edge)
            .ok_or(GraphError::UnknownEdge(d.edge))?;
        let (v, pos) = match d.side {
            Side::Left => (arrived.dest, at[d.edge.0][1]),
            Side::Right => (arrived.source, at[d.edge.0][0]),
        };
        let rot = self.graph.incident(v);
        if rot.get(pos) != Some(&d.edge) {
            return Err(GraphError::Invariant(format!(
                "edge {:?} missing from rotation of {v:?}",
                d.edge
            )));
        }
        let edge = rot[(pos + 1) % rot.len()];
        let next = self.graph.edge(edge).ok_or(GraphError::UnknownEdge(edge))?;
        let side = if next.source == v {
            Side::Left
        } else {
            Side::Right
        };
        Ok(Dart { edge, side })
    }

    fn trace(&self, start: Dart, at: &[[usize; 2]]) -> Result<Vec<Dart>> {
        let limit = 2 * self.graph.edge_count();
        let mut darts = vec![start];
        let mut d = self.next_dart(start, at)?;
        while d != start {
            if darts.len() > limit {
                return Err(GraphError::Invariant(format!(
                    "face walk from {start:?} does not close"
                )));
            }
            darts.push(d);
            d = self.next_dart(d, at)?;
        }
        Ok(darts)
    }

    fn push_face(&mut self, darts: Vec<Dart>) -> FaceId {
        let id = FaceId(self.faces.len());
        for d in &darts {
            self.assign(*d, id);
        }
        self.faces.push(Face { darts });
        id
    }

    fn assign(&mut self, d: Dart, f: FaceId) {
        let slots = match d.side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        if slots.len() <= d.edge.0 {
            slots.resize(d.edge.0 + 1, None);
        }
        slots[d.edge.0] = Some(f);
    }

    fn largest_face(&self) -> Option<FaceId> {
        let mut best: Option<(usize, FaceId)> = None;
        for (i, f) in self.faces.iter().enumerate() {
            if best.map_or(true, |(len, _)| f.len() > len) {
                best = Some((f.len(), FaceId(i)));
            }
        }
        best.map(|(_, id)| id)
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn face(&self, f: FaceId) -> Option<&Face> {
        self.faces.get(f.0)
    }

    pub fn outer_face(&self) -> Option<FaceId> {
        self.outer
    }

    /// Face on the given side of `e`.
    pub fn face_of(&self, e: EdgeId, side: Side) -> Option<FaceId> {
        let slots = match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        };
        slots.get(e.0).copied().flatten()
    }

    /// `V − E + F`; equals 2 for a connected plane graph.
    pub fn euler_characteristic(&self) -> i64 {
        self.graph.node_count() as i64 - self.graph.edge_count() as i64 + self.faces.len() as i64
    }

    /// Split `face` by a new edge `from → to` between two of its boundary nodes.
    ///
    /// The face's dart cycle is cut at the first visits of `from` and `to`:
    /// `face` keeps the arc `to … from` closed by the new edge's left side, and
    /// a new face gets the arc `from … to` closed by its right side. Returns the
    /// new edge and the new face.
    pub fn add_face_edge(
        &mut self,
        face: FaceId,
        from: NodeId,
        to: NodeId,
    ) -> Result<(EdgeId, FaceId)> {
        for v in [from, to] {
            if !self.graph.contains_node(v) {
                return Err(GraphError::UnknownNode(v));
            }
        }
        let darts = self
            .faces
            .get(face.0)
            .ok_or(GraphError::UnknownFace(face))?
            .darts
            .clone();
        let tail_pos = |v: NodeId| {
            darts
                .iter()
                .position(|d| d.tail(&self.graph) == Some(v))
                .ok_or(GraphError::NotOnFace { face, node: v })
        };
        if from == to {
            return Err(GraphError::LoopSplit(from));
        }
        let i = tail_pos(from)?;
        let j = tail_pos(to)?;
        let k = darts.len();
        let into_from = darts[(i + k - 1) % k].edge;
        let into_to = darts[(j + k - 1) % k].edge;

        let e = self.graph.add_edge(from, to)?;
        self.graph.insert_after(from, into_from, e)?;
        self.graph.insert_after(to, into_to, e)?;

        // Arc from `from` to `to` and arc from `to` back to `from`.
        let arc = |a: usize, b: usize| -> Vec<Dart> {
            let len = (b + k - a) % k;
            (0..len).map(|s| darts[(a + s) % k]).collect()
        };
        let mut kept = arc(j, i);
        kept.push(Dart {
            edge: e,
            side: Side::Left,
        });
        let mut split = arc(i, j);
        split.push(Dart {
            edge: e,
            side: Side::Right,
        });

        for d in &kept {
            self.assign(*d, face);
        }
        self.faces[face.0].darts = kept;
        let new_face = self.push_face(split);
        Ok((e, new_face))
    }
}

/// Index of every edge in the rotation at its source (`[0]`) and dest (`[1]`).
/// Loop-free graphs only; a loop would need one slot.
fn rotation_positions(g: &Graph) -> Vec<[usize; 2]> {
    let mut at = vec![[usize::MAX; 2]; g.edge_bound()];
    for v in g.node_ids() {
        for (pos, &e) in g.incident(v).iter().enumerate() {
            if let Some(edge) = g.edge(e) {
                let end = usize::from(edge.source != v);
                at[e.0][end] = pos;
            }
        }
    }
    at
}

#[cfg(test)]
mod tests;
