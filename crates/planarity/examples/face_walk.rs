//! Face walk probe for a random planar graph.
//!
//! Purpose
//! - Print the face structure of one sampled graph (face sizes, outer face,
//!   Euler characteristic) and the time spent testing and embedding it.
//! - Quick manual check after changes to the embedding pass.
//!
//! Usage
//!   cargo run -p planarity --example face_walk --release -- [nodes] [seed]

use std::time::Instant;

use planarity::api::{create_embedding, is_planar, random_planar, ReplayToken, SampleCfg};

fn main() {
    let mut args = std::env::args().skip(1);
    let nodes: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(200);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(1);
    let g = random_planar(
        SampleCfg {
            nodes,
            drop_prob: 0.3,
        },
        ReplayToken::new(seed, 0),
    );

    let t = Instant::now();
    let planar = is_planar(&g).expect("valid graph");
    let test_ms = t.elapsed().as_secs_f64() * 1e3;

    let t = Instant::now();
    let emb = create_embedding(&g)
        .expect("connected sample")
        .expect("planar sample");
    let embed_ms = t.elapsed().as_secs_f64() * 1e3;

    let mut sizes: Vec<usize> = emb.faces().iter().map(|f| f.len()).collect();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    let outer = emb.outer_face().and_then(|f| emb.face(f)).map(|f| f.len());

    println!("nodes={} edges={} planar={planar}", g.node_count(), g.edge_count());
    println!(
        "faces={} outer_len={:?} euler={}",
        sizes.len(),
        outer,
        emb.euler_characteristic()
    );
    println!("largest faces: {:?}", &sizes[..sizes.len().min(8)]);
    println!("is_planar: {test_ms:.3} ms, create_embedding: {embed_ms:.3} ms");
}
