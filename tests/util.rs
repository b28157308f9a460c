#![allow(dead_code)]
use std::path::{Path, PathBuf};

use hypergraph_csr::hypergraph::{Hypergraph, UnweightedHyperedge};

/// Hyperedges of the 7-vertex / 4-hyperedge sample used across tests.
pub const EDGES: [&[u32]; 4] = [&[1, 2], &[1, 7, 5, 6], &[5, 6, 4], &[2, 3, 4]];
pub const EDGE_WEIGHTS: [i32; 4] = [2, 3, 8, 7];
pub const VERTEX_WEIGHTS: [i32; 7] = [5, 1, 8, 7, 3, 9, 3];

pub fn edge(vertices: &[u32]) -> UnweightedHyperedge {
    UnweightedHyperedge::joining(vertices.iter().copied())
}

/// The sample, with the requested weights attached.
pub fn sample(hyperedge_weights: bool, vertex_weights: bool) -> Hypergraph {
    let mut b = Hypergraph::builder(7, 4);
    for (vertices, &w) in EDGES.iter().zip(&EDGE_WEIGHTS) {
        if hyperedge_weights {
            b.with_hyperedge(edge(vertices).with_weight(w)).unwrap();
        } else {
            b.with_hyperedge(edge(vertices)).unwrap();
        }
    }
    if vertex_weights {
        for (v, &w) in (1u32..).zip(&VERTEX_WEIGHTS) {
            b.with_vertex_weight(v, w).unwrap();
        }
    }
    b.build().unwrap()
}

/// Path of a fixture under `tests/data`.
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}
