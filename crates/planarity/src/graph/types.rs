//! Node/edge storage: slot arenas addressed by stable integer ids.
//!
//! - `Graph` owns node and edge slots plus a name index. Removing an entity
//!   leaves its slot vacant, so every other id stays valid and clones share ids
//!   with their source.
//! - A node's incident list holds both outgoing and incoming arcs and is the
//!   rotation order once an embedding has been computed. A self-loop appears
//!   once in its node's list.
//! - No traversal state lives here; algorithms allocate their own annotation
//!   vectors sized by `node_bound()` / `edge_bound()`.

use std::collections::HashMap;

use crate::error::{GraphError, Result};

/// Identifier types for clarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

/// Which side of a directed edge something lies on.
///
/// Faces use it for the region left/right of `source → dest`; the planarity
/// test uses it for the side a block's segments are committed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Side {
    #[default]
    Left,
    Right,
}

impl Side {
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Node {
    pub name: String,
    incident: Vec<EdgeId>,
}

impl Node {
    /// Incident edges in rotation order.
    #[inline]
    pub fn incident(&self) -> &[EdgeId] {
        &self.incident
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub source: NodeId,
    pub dest: NodeId,
}

impl Edge {
    #[inline]
    pub fn is_loop(&self) -> bool {
        self.source == self.dest
    }

    /// Endpoint across the edge from `v`.
    #[inline]
    pub fn other(&self, v: NodeId) -> NodeId {
        if self.source == v {
            self.dest
        } else {
            self.source
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: Vec<Option<Node>>,
    edges: Vec<Option<Edge>>,
    by_name: HashMap<String, NodeId>,
    live_nodes: usize,
    live_edges: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from named arcs, creating nodes on first mention.
    pub fn from_edges(arcs: &[(&str, &str)]) -> Self {
        let mut g = Self::new();
        for &(s, d) in arcs {
            let s = g.ensure_node(s);
            let d = g.ensure_node(d);
            g.push_edge(s, d);
        }
        g
    }

    pub fn add_node(&mut self, name: impl Into<String>) -> Result<NodeId> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(GraphError::DuplicateNode(name));
        }
        Ok(self.push_node(name))
    }

    /// Id of the node called `name`, inserting it if missing.
    pub fn ensure_node(&mut self, name: &str) -> NodeId {
        match self.by_name.get(name) {
            Some(&v) => v,
            None => self.push_node(name.to_string()),
        }
    }

    fn push_node(&mut self, name: String) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.by_name.insert(name.clone(), id);
        self.nodes.push(Some(Node {
            name,
            incident: Vec::new(),
        }));
        self.live_nodes += 1;
        id
    }

    pub fn add_edge(&mut self, source: NodeId, dest: NodeId) -> Result<EdgeId> {
        for v in [source, dest] {
            if !self.contains_node(v) {
                return Err(GraphError::UnknownNode(v));
            }
        }
        Ok(self.push_edge(source, dest))
    }

    pub fn add_edge_named(&mut self, source: &str, dest: &str) -> Result<EdgeId> {
        let s = self
            .node_id(source)
            .ok_or_else(|| GraphError::UnknownNodeName(source.to_string()))?;
        let d = self
            .node_id(dest)
            .ok_or_else(|| GraphError::UnknownNodeName(dest.to_string()))?;
        Ok(self.push_edge(s, d))
    }

    /// Insert an arc between ids this graph handed out; panics on vacant ids.
    pub(crate) fn push_edge(&mut self, source: NodeId, dest: NodeId) -> EdgeId {
        let id = EdgeId(self.edges.len());
        self.edges.push(Some(Edge { source, dest }));
        self.slot_mut(source).incident.push(id);
        if dest != source {
            self.slot_mut(dest).incident.push(id);
        }
        self.live_edges += 1;
        id
    }

    pub fn remove_edge(&mut self, e: EdgeId) -> Result<Edge> {
        let edge = self
            .edges
            .get_mut(e.0)
            .and_then(Option::take)
            .ok_or(GraphError::UnknownEdge(e))?;
        for v in [edge.source, edge.dest] {
            self.slot_mut(v).incident.retain(|&x| x != e);
        }
        self.live_edges -= 1;
        Ok(edge)
    }

    /// Remove a batch of edges, touching each endpoint's incident list once.
    /// Vacant or repeated ids are skipped. Returns the number removed.
    pub fn remove_edges(&mut self, edges: impl IntoIterator<Item = EdgeId>) -> usize {
        let mut touched = vec![false; self.nodes.len()];
        let mut removed = 0;
        for e in edges {
            let Some(edge) = self.edges.get_mut(e.0).and_then(Option::take) else {
                continue;
            };
            touched[edge.source.0] = true;
            touched[edge.dest.0] = true;
            removed += 1;
        }
        let edges = &self.edges;
        for (slot, hit) in self.nodes.iter_mut().zip(touched) {
            if let (Some(node), true) = (slot.as_mut(), hit) {
                node.incident.retain(|x| edges[x.0].is_some());
            }
        }
        self.live_edges -= removed;
        removed
    }

    /// Remove `v` together with every incident edge.
    pub fn remove_node(&mut self, v: NodeId) -> Result<Node> {
        if !self.contains_node(v) {
            return Err(GraphError::UnknownNode(v));
        }
        let incident = self.slot_mut(v).incident.clone();
        self.remove_edges(incident);
        let node = self.nodes[v.0].take().ok_or(GraphError::UnknownNode(v))?;
        self.by_name.remove(&node.name);
        self.live_nodes -= 1;
        Ok(node)
    }

    // Slots are only reached through ids handed out by this graph.
    fn slot_mut(&mut self, v: NodeId) -> &mut Node {
        match self.nodes.get_mut(v.0) {
            Some(Some(n)) => n,
            _ => panic!("node {v:?} has no slot"),
        }
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.live_nodes
    }
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.live_edges
    }
    /// Exclusive upper bound on node indices (size for per-node annotations).
    #[inline]
    pub fn node_bound(&self) -> usize {
        self.nodes.len()
    }
    /// Exclusive upper bound on edge indices.
    #[inline]
    pub fn edge_bound(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn contains_node(&self, v: NodeId) -> bool {
        matches!(self.nodes.get(v.0), Some(Some(_)))
    }

    #[inline]
    pub fn node(&self, v: NodeId) -> Option<&Node> {
        self.nodes.get(v.0).and_then(Option::as_ref)
    }

    #[inline]
    pub fn edge(&self, e: EdgeId) -> Option<Edge> {
        self.edges.get(e.0).copied().flatten()
    }

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    /// Name of `v`, or `""` for a vacant id.
    pub fn name(&self, v: NodeId) -> &str {
        self.node(v).map(|n| n.name.as_str()).unwrap_or("")
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.is_some())
            .map(|(i, _)| NodeId(i))
    }

    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_some())
            .map(|(i, _)| EdgeId(i))
    }

    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, Edge)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.map(|e| (EdgeId(i), e)))
    }

    /// Incident edges of `v` in rotation order (empty for a vacant id).
    #[inline]
    pub fn incident(&self, v: NodeId) -> &[EdgeId] {
        self.node(v).map(Node::incident).unwrap_or(&[])
    }

    #[inline]
    pub fn degree(&self, v: NodeId) -> usize {
        self.incident(v).len()
    }

    pub fn out_edges(&self, v: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        self.incident(v)
            .iter()
            .copied()
            .filter(move |&e| self.edge(e).is_some_and(|x| x.source == v))
    }

    pub fn in_edges(&self, v: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        self.incident(v)
            .iter()
            .copied()
            .filter(move |&e| self.edge(e).is_some_and(|x| x.dest == v))
    }

    /// Destinations of outgoing arcs, in incident order (repeats for parallel arcs).
    pub fn successors(&self, v: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.out_edges(v).filter_map(|e| self.edge(e).map(|x| x.dest))
    }

    pub fn predecessors(&self, v: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.in_edges(v).filter_map(|e| self.edge(e).map(|x| x.source))
    }

    /// Successors and predecessors (undirected view), in incident order.
    pub fn neighbors(&self, v: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.incident(v)
            .iter()
            .filter_map(move |&e| self.edge(e).map(|x| x.other(v)))
    }

    /// First live arc `s → d`, if any.
    pub fn find_edge(&self, s: NodeId, d: NodeId) -> Option<EdgeId> {
        self.out_edges(s)
            .find(|&e| self.edge(e).is_some_and(|x| x.dest == d))
    }

    /// The arc with swapped endpoints (looked up, never linked).
    pub fn reverse(&self, e: EdgeId) -> Option<EdgeId> {
        let edge = self.edge(e)?;
        if edge.is_loop() {
            return None;
        }
        self.find_edge(edge.dest, edge.source)
    }

    /// Replace `v`'s rotation; `order` must be a permutation of the incident list.
    pub fn set_rotation(&mut self, v: NodeId, order: Vec<EdgeId>) -> Result<()> {
        let current = self.node(v).ok_or(GraphError::UnknownNode(v))?;
        let mut a = current.incident.clone();
        let mut b = order.clone();
        a.sort_unstable();
        b.sort_unstable();
        if a != b {
            return Err(GraphError::BadRotation(v));
        }
        self.slot_mut(v).incident = order;
        Ok(())
    }

    /// Stable-sort every node's rotation by `key(node, edge)`.
    pub fn sort_rotations_by_key<K: Ord>(&mut self, mut key: impl FnMut(NodeId, EdgeId) -> K) {
        let ids: Vec<NodeId> = self.node_ids().collect();
        for v in ids {
            let mut order = self.slot_mut(v).incident.clone();
            order.sort_by_cached_key(|&e| key(v, e));
            self.slot_mut(v).incident = order;
        }
    }

    /// Insert `e` into `v`'s rotation right after `anchor`.
    pub(crate) fn insert_after(&mut self, v: NodeId, anchor: EdgeId, e: EdgeId) -> Result<()> {
        let node = self.slot_mut(v);
        node.incident.retain(|&x| x != e);
        let pos = node
            .incident
            .iter()
            .position(|&x| x == anchor)
            .ok_or(GraphError::UnknownEdge(anchor))?;
        node.incident.insert(pos + 1, e);
        Ok(())
    }

    /// Verify the adjacency invariant: every live edge is listed at both
    /// endpoints exactly once and every listed edge is live and incident.
    pub fn check_invariants(&self) -> Result<()> {
        // Listings per edge at its source and at its dest.
        let mut at_src = vec![0usize; self.edges.len()];
        let mut at_dst = vec![0usize; self.edges.len()];
        for v in self.node_ids() {
            for &e in self.incident(v) {
                match self.edge(e) {
                    Some(x) if x.source == v => at_src[e.0] += 1,
                    Some(x) if x.dest == v => at_dst[e.0] += 1,
                    _ => {
                        return Err(GraphError::Invariant(format!(
                            "node {v:?} lists foreign edge {e:?}"
                        )))
                    }
                }
            }
            if self.node_id(self.name(v)) != Some(v) {
                return Err(GraphError::Invariant(format!(
                    "name index out of sync for node {v:?}"
                )));
            }
        }
        for (e, edge) in self.edges() {
            for v in [edge.source, edge.dest] {
                if !self.contains_node(v) {
                    return Err(GraphError::Invariant(format!(
                        "edge {e:?} references vacant node {v:?}"
                    )));
                }
            }
            let expected = if edge.is_loop() { (1, 0) } else { (1, 1) };
            let (hits_src, hits_dst) = (at_src[e.0], at_dst[e.0]);
            if (hits_src, hits_dst) != expected {
                return Err(GraphError::Invariant(format!(
                    "edge {e:?} listed {hits_src} times at {:?} and {hits_dst} times at {:?}",
                    edge.source, edge.dest
                )));
            }
        }
        Ok(())
    }

    /// Undirected connectivity (the empty graph counts as connected).
    pub fn is_connected(&self) -> bool {
        let Some(root) = self.node_ids().next() else {
            return true;
        };
        let mut seen = vec![false; self.node_bound()];
        let mut stack = vec![root];
        seen[root.0] = true;
        let mut reached = 1;
        while let Some(v) = stack.pop() {
            for w in self.neighbors(v) {
                if !seen[w.0] {
                    seen[w.0] = true;
                    reached += 1;
                    stack.push(w);
                }
            }
        }
        reached == self.node_count()
    }
}
