use super::*;
use crate::faces::Face;
use crate::fixtures;
use crate::graph::{EdgeId, NodeId};
use crate::random::{random_planar, shuffled, ReplayToken, SampleCfg};
use proptest::prelude::*;

fn embed(g: &Graph) -> Embedding {
    create_embedding(g).unwrap().expect("planar input")
}

fn sizes(emb: &Embedding) -> Vec<usize> {
    let mut s: Vec<usize> = emb.faces().iter().map(Face::len).collect();
    s.sort_unstable();
    s
}

/// Attach `gadget` to `g` on fresh nodes, joined by one arc.
fn glue(g: &Graph, gadget: &Graph, prefix: &str) -> Graph {
    let mut out = g.clone();
    for (_, e) in gadget.edges() {
        let s = out.ensure_node(&format!("{prefix}{}", gadget.name(e.source)));
        let d = out.ensure_node(&format!("{prefix}{}", gadget.name(e.dest)));
        out.add_edge(s, d).unwrap();
    }
    if let (Some(a), Some(b)) = (
        g.node_ids().next(),
        out.node_id(&format!("{prefix}{}", gadget.name(NodeId(0)))),
    ) {
        out.add_edge(a, b).unwrap();
    }
    out
}

#[test]
fn tiny_graphs_are_planar() {
    assert!(is_planar(&Graph::new()).unwrap());
    assert!(is_planar(&fixtures::path(2)).unwrap());
    assert!(is_planar(&fixtures::triangle()).unwrap());
    assert!(is_planar(&Graph::from_edges(&[("a", "a")])).unwrap());
}

#[test]
fn kuratowski_graphs_are_not_planar() {
    for g in [
        fixtures::complete(5),
        fixtures::complete_bipartite(3, 3),
        fixtures::petersen(),
        fixtures::complete(7),
    ] {
        assert!(!is_planar(&g).unwrap());
        assert!(create_embedding(&g).unwrap().is_none());
    }
}

#[test]
fn k33_passes_edge_bound_but_fails_test() {
    // 9 edges on 6 nodes is within 3n − 6 = 12.
    let g = fixtures::complete_bipartite(3, 3);
    assert!(!exceeds_euler_bound(&g));
    assert!(!planar(&g).unwrap());
}

#[test]
fn near_kuratowski_graphs_are_planar() {
    let mut k5 = fixtures::complete(5);
    k5.remove_edge(EdgeId(0)).unwrap();
    assert!(is_planar(&k5).unwrap());
    assert_eq!(embed(&k5).faces().len(), 6);

    let mut k33 = fixtures::complete_bipartite(3, 3);
    k33.remove_edge(EdgeId(4)).unwrap();
    assert!(is_planar(&k33).unwrap());
    assert_eq!(embed(&k33).euler_characteristic(), 2);
}

#[test]
fn triangle_embedding() {
    let emb = embed(&fixtures::triangle());
    assert_eq!(sizes(&emb), vec![3, 3]);
    assert_eq!(emb.euler_characteristic(), 2);
}

#[test]
fn k4_embedding_is_a_tetrahedron() {
    let emb = embed(&fixtures::complete(4));
    assert_eq!(sizes(&emb), vec![3, 3, 3, 3]);
    assert_eq!(emb.euler_characteristic(), 2);
    assert!(emb.outer_face().is_some());
}

#[test]
fn path_has_single_face() {
    let emb = embed(&fixtures::path(4));
    assert_eq!(sizes(&emb), vec![6]);
    assert_eq!(emb.euler_characteristic(), 2);
    let e = EdgeId(1);
    assert_eq!(emb.face_of(e, Side::Left), emb.face_of(e, Side::Right));
}

#[test]
fn grid_has_square_faces_and_long_outer_face() {
    let emb = embed(&fixtures::grid(3, 3));
    assert_eq!(sizes(&emb), vec![4, 4, 4, 4, 8]);
    let outer = emb.outer_face().and_then(|f| emb.face(f)).unwrap();
    assert_eq!(outer.len(), 8);
}

#[test]
fn wheel_has_triangles_and_rim() {
    let emb = embed(&fixtures::wheel(6));
    assert_eq!(sizes(&emb), vec![3, 3, 3, 3, 3, 3, 6]);
    let outer = emb.outer_face().and_then(|f| emb.face(f)).unwrap();
    let hub = emb.graph().node_id("v0").unwrap();
    assert!(!outer.nodes(emb.graph()).contains(&hub));
}

#[test]
fn input_is_not_mutated() {
    let g = fixtures::wheel(5);
    let before: Vec<Vec<EdgeId>> = g.node_ids().map(|v| g.incident(v).to_vec()).collect();
    let _ = embed(&g);
    let _ = is_planar(&g).unwrap();
    let after: Vec<Vec<EdgeId>> = g.node_ids().map(|v| g.incident(v).to_vec()).collect();
    assert_eq!(before, after);
    assert_eq!(g.edge_count(), 10);
}

#[test]
fn embedding_keeps_ids_and_drops_augmentation() {
    let g = fixtures::path(5);
    let emb = embed(&g);
    assert_eq!(emb.graph().edge_count(), 4);
    for (e, edge) in g.edges() {
        assert_eq!(emb.graph().edge(e), Some(edge));
    }
}

#[test]
fn bidirected_and_looped_input() {
    let mut g = fixtures::complete(4);
    make_bidirected(&mut g);
    let v1 = g.node_id("v1").unwrap();
    g.add_edge(v1, v1).unwrap();
    assert!(is_planar(&g).unwrap());
    let emb = embed(&g);
    assert_eq!(emb.graph().edge_count(), 6);
    assert_eq!(sizes(&emb), vec![3, 3, 3, 3]);
}

#[test]
fn bidirected_triangle_embeds_as_triangle() {
    let mut g = fixtures::triangle();
    make_bidirected(&mut g);
    assert_eq!(g.edge_count(), 6);
    let emb = embed(&g);
    assert_eq!(emb.graph().edge_count(), 3);
    assert_eq!(sizes(&emb), vec![3, 3]);
}

#[test]
fn planarity_survives_bidirection_round_trip() {
    for g in [
        fixtures::wheel(5),
        fixtures::complete(5),
        fixtures::complete_bipartite(3, 3),
        fixtures::grid(4, 3),
    ] {
        let expected = is_planar(&g).unwrap();
        let mut h = g.clone();
        make_bidirected(&mut h);
        assert_eq!(is_planar(&h).unwrap(), expected);
        break_bidirection(&mut h);
        assert_eq!(is_planar(&h).unwrap(), expected);
        assert_eq!(h.edge_count(), g.edge_count());
        assert!(h.is_connected());
    }
}

#[test]
fn parallel_arcs_bound_a_digon() {
    let mut g = fixtures::triangle();
    let (v0, v1) = (NodeId(0), NodeId(1));
    g.add_edge(v0, v1).unwrap();
    let emb = embed(&g);
    assert_eq!(emb.euler_characteristic(), 2);
    assert_eq!(sizes(&emb), vec![2, 3, 3]);
}

#[test]
fn wide_bidirected_star_embeds_as_one_face() {
    let leaves = 2_000;
    let mut g = fixtures::star(leaves);
    make_bidirected(&mut g);
    assert!(is_planar(&g).unwrap());
    let emb = embed(&g);
    assert_eq!(emb.graph().edge_count(), leaves);
    assert_eq!(sizes(&emb), vec![2 * leaves]);
    assert_eq!(emb.euler_characteristic(), 2);
}

#[test]
fn disconnected_input() {
    let mut g = fixtures::triangle();
    g.ensure_node("island");
    assert_eq!(
        create_embedding(&g).unwrap_err(),
        GraphError::Disconnected { components: 2 }
    );
    assert!(is_planar(&g).unwrap());

    let mut two = fixtures::complete(4);
    for (_, e) in fixtures::complete(5).edges() {
        let s = two.ensure_node(&format!("k{}", e.source.0));
        let d = two.ensure_node(&format!("k{}", e.dest.0));
        two.add_edge(s, d).unwrap();
    }
    let report = analyze(&two).unwrap();
    assert!(!report.planar);
    assert_eq!(report.components.len(), 2);
    assert!(report.components[0].planar);
    assert_eq!(report.components[1].nodes, 5);
    assert!(!report.components[1].planar);
}

#[test]
fn small_inputs_embed_as_given() {
    let emb = create_embedding(&Graph::new()).unwrap().unwrap();
    assert!(emb.faces().is_empty());
    let emb = embed(&fixtures::path(2));
    assert_eq!(sizes(&emb), vec![2]);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn random_planar_satisfies_euler(seed in any::<u64>(), nodes in 3usize..40, drop in 0.0f64..0.9) {
        let cfg = SampleCfg { nodes, drop_prob: drop };
        let g = random_planar(cfg, ReplayToken::new(seed, 0));
        prop_assert!(is_planar(&g).unwrap());
        let emb = create_embedding(&g).unwrap().unwrap();
        prop_assert_eq!(emb.euler_characteristic(), 2);
        let darts: usize = emb.faces().iter().map(Face::len).sum();
        prop_assert_eq!(darts, 2 * emb.graph().edge_count());
    }

    #[test]
    fn planarity_ignores_labelling(seed in any::<u64>(), nodes in 5usize..25) {
        let cfg = SampleCfg { nodes, drop_prob: 0.4 };
        let g = random_planar(cfg, ReplayToken::new(seed, 1));
        let h = shuffled(&g, ReplayToken::new(seed, 2));
        prop_assert!(is_planar(&h).unwrap());
        let k5 = glue(&g, &fixtures::complete(5), "k");
        let k33 = glue(&shuffled(&g, ReplayToken::new(seed, 3)), &fixtures::complete_bipartite(3, 3), "q");
        prop_assert!(!is_planar(&k5).unwrap());
        prop_assert!(!is_planar(&k33).unwrap());
        prop_assert!(create_embedding(&k33).unwrap().is_none());
    }
}
