use super::*;
use crate::fixtures;

fn sizes(emb: &Embedding) -> Vec<usize> {
    let mut s: Vec<usize> = emb.faces().iter().map(Face::len).collect();
    s.sort_unstable();
    s
}

#[test]
fn triangle_has_two_faces_of_three() {
    let emb = Embedding::from_rotation(fixtures::triangle()).unwrap();
    assert_eq!(sizes(&emb), vec![3, 3]);
    assert_eq!(emb.euler_characteristic(), 2);
    for e in emb.graph().edge_ids() {
        let l = emb.face_of(e, Side::Left).unwrap();
        let r = emb.face_of(e, Side::Right).unwrap();
        assert_ne!(l, r, "cycle edge {e:?} separates two faces");
    }
}

#[test]
fn bridge_has_same_face_on_both_sides() {
    let emb = Embedding::from_rotation(fixtures::path(2)).unwrap();
    assert_eq!(emb.faces().len(), 1);
    let e = EdgeId(0);
    assert_eq!(emb.face_of(e, Side::Left), emb.face_of(e, Side::Right));
    assert_eq!(emb.face(FaceId(0)).unwrap().len(), 2);
    assert_eq!(emb.outer_face(), Some(FaceId(0)));
    assert_eq!(emb.euler_characteristic(), 2);
}

#[test]
fn face_walk_follows_rotation() {
    // Square v0→v1→v2→v3 closed by v0→v3.
    let emb = Embedding::from_rotation(fixtures::cycle(4)).unwrap();
    let g = emb.graph();
    let f = emb.face(FaceId(0)).unwrap();
    let names: Vec<&str> = f.nodes(g).into_iter().map(|v| g.name(v)).collect();
    assert_eq!(names, vec!["v0", "v1", "v2", "v3"]);
    assert_eq!(
        f.darts()[3],
        Dart {
            edge: EdgeId(3),
            side: Side::Right
        }
    );
    assert_eq!(sizes(&emb), vec![4, 4]);
    // Tie on size: the first traced face wins.
    assert_eq!(emb.outer_face(), Some(FaceId(0)));
}

#[test]
fn empty_and_edgeless_graphs_have_no_faces() {
    let emb = Embedding::from_rotation(Graph::new()).unwrap();
    assert!(emb.faces().is_empty());
    assert_eq!(emb.outer_face(), None);

    let mut g = Graph::new();
    g.add_node("lonely").unwrap();
    let emb = Embedding::from_rotation(g).unwrap();
    assert!(emb.faces().is_empty());
    assert_eq!(emb.euler_characteristic(), 1);
}

#[test]
fn self_loop_is_rejected() {
    let g = Graph::from_edges(&[("a", "b"), ("b", "b")]);
    let err = Embedding::from_rotation(g).unwrap_err();
    assert_eq!(err, GraphError::SelfLoop(EdgeId(1)));
}

#[test]
fn add_face_edge_splits_square() {
    let mut emb = Embedding::from_rotation(fixtures::cycle(4)).unwrap();
    let v0 = emb.graph().node_id("v0").unwrap();
    let v2 = emb.graph().node_id("v2").unwrap();
    let untouched = emb.face(FaceId(1)).unwrap().clone();

    let (e, f) = emb.add_face_edge(FaceId(0), v0, v2).unwrap();
    assert_eq!(f, FaceId(2));
    assert_eq!(emb.graph().edge(e).map(|x| (x.source, x.dest)), Some((v0, v2)));
    assert_eq!(emb.face_of(e, Side::Left), Some(FaceId(0)));
    assert_eq!(emb.face_of(e, Side::Right), Some(f));
    assert_eq!(sizes(&emb), vec![3, 3, 4]);
    assert_eq!(emb.euler_characteristic(), 2);
    assert_eq!(emb.face(FaceId(1)), Some(&untouched));

    // Old darts moved to the new face keep a consistent side map.
    for (i, face) in emb.faces().iter().enumerate() {
        for d in face.darts() {
            assert_eq!(emb.face_of(d.edge, d.side), Some(FaceId(i)));
        }
    }

    // Re-tracing the updated rotation reproduces the split.
    let again = Embedding::from_rotation(emb.graph().clone()).unwrap();
    assert_eq!(sizes(&again), sizes(&emb));
    emb.graph().check_invariants().unwrap();
}

#[test]
fn add_face_edge_errors() {
    let mut emb = Embedding::from_rotation(fixtures::cycle(4)).unwrap();
    let g = emb.graph();
    let (v0, v1, v2) = (
        g.node_id("v0").unwrap(),
        g.node_id("v1").unwrap(),
        g.node_id("v2").unwrap(),
    );
    assert_eq!(
        emb.add_face_edge(FaceId(9), v0, v2),
        Err(GraphError::UnknownFace(FaceId(9)))
    );
    assert_eq!(
        emb.add_face_edge(FaceId(0), v0, NodeId(42)),
        Err(GraphError::UnknownNode(NodeId(42)))
    );
    let bound = emb.graph().edge_bound();
    assert_eq!(
        emb.add_face_edge(FaceId(0), v0, v0),
        Err(GraphError::LoopSplit(v0))
    );
    assert_eq!(emb.graph().edge_count(), 4);
    // A rejected split leaves no vacant edge slot behind.
    assert_eq!(emb.graph().edge_bound(), bound);

    emb.add_face_edge(FaceId(0), v0, v2).unwrap();
    assert_eq!(
        emb.add_face_edge(FaceId(0), v1, v2),
        Err(GraphError::NotOnFace {
            face: FaceId(0),
            node: v1
        })
    );
}

#[test]
fn wide_star_traces_one_face() {
    let leaves = 20_000;
    let emb = Embedding::from_rotation(fixtures::star(leaves)).unwrap();
    assert_eq!(emb.faces().len(), 1);
    let outer = emb.face(FaceId(0)).unwrap();
    assert_eq!(outer.len(), 2 * leaves);
    // Hub, leaf, hub, leaf, ... in rotation order.
    let hub = NodeId(0);
    let nodes = outer.nodes(emb.graph());
    assert!(nodes.iter().step_by(2).all(|&v| v == hub));
    assert_eq!(nodes[1], NodeId(1));
    assert_eq!(nodes[3], NodeId(2));
    assert_eq!(emb.euler_characteristic(), 2);
}

#[test]
fn into_graph_returns_rotation() {
    let emb = Embedding::from_rotation(fixtures::triangle()).unwrap();
    let g = emb.into_graph();
    assert_eq!(g.edge_count(), 3);
    g.check_invariants().unwrap();
}
