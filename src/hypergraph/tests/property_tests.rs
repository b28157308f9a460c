use proptest::prelude::*;

use crate::debug_invariants::DebugInvariants;
use crate::hypergraph::{Hypergraph, HypergraphBuilder, UnweightedHyperedge};

/// Hyperedges over vertices `1..=n`, possibly empty, with optional weights.
fn hyperedges(n: u32) -> impl Strategy<Value = Vec<(Vec<u32>, Option<i32>)>> {
    prop::collection::vec(
        (
            prop::collection::vec(1..=n, 0..6),
            prop::option::of(-50i32..50),
        ),
        0..12,
    )
}

fn instance() -> impl Strategy<Value = (u32, Vec<(Vec<u32>, Option<i32>)>, Option<Vec<i32>>)> {
    (1u32..20).prop_flat_map(|n| {
        (
            Just(n),
            hyperedges(n),
            prop::option::of(prop::collection::vec(0i32..100, n as usize)),
        )
    })
}

fn fill(
    b: &mut HypergraphBuilder,
    edges: &[(Vec<u32>, Option<i32>)],
    vertex_weights: Option<&[i32]>,
) {
    for (vertices, weight) in edges {
        let h = UnweightedHyperedge::joining(vertices.iter().copied());
        match weight {
            Some(w) => b.with_hyperedge(h.with_weight(*w)).unwrap(),
            None => b.with_hyperedge(h).unwrap(),
        };
    }
    if let Some(weights) = vertex_weights {
        for (v, &w) in (1u32..).zip(weights) {
            b.with_vertex_weight(v, w).unwrap();
        }
    }
}

proptest! {
    #[test]
    fn csr_layout_matches_input((n, edges, vw) in instance()) {
        let mut b = Hypergraph::builder(n as usize, edges.len());
        fill(&mut b, &edges, vw.as_deref());
        let h = b.build().unwrap();
        h.validate_invariants().unwrap();

        let indices = h.hyperedge_indices();
        prop_assert_eq!(indices.len(), edges.len() + 1);
        prop_assert_eq!(indices[0], 0);
        prop_assert!(indices.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(indices[edges.len()], h.hyperedge_vertices().len());

        for (i, (vertices, _)) in edges.iter().enumerate() {
            let stored = &h.hyperedge_vertices()[indices[i]..indices[i + 1]];
            let shifted: Vec<u32> = vertices.iter().map(|v| v - 1).collect();
            prop_assert_eq!(stored, &shifted[..]);
            let view = h.hyperedge(i).unwrap();
            prop_assert_eq!(view.vertices(), &vertices[..]);
        }
    }

    #[test]
    fn flags_follow_assigned_weights((n, edges, vw) in instance()) {
        let mut b = Hypergraph::builder(n as usize, edges.len());
        fill(&mut b, &edges, vw.as_deref());
        let h = b.build().unwrap();
        let weighted_edges = edges.iter().any(|(_, w)| w.is_some());
        let weighted_vertices = vw.as_ref().is_some_and(|w| !w.is_empty());
        let expected = u32::from(weighted_edges) + 10 * u32::from(weighted_vertices);
        prop_assert_eq!(h.format(), expected);
        if weighted_edges {
            let weights = h.hyperedge_weights().unwrap();
            for (i, (_, w)) in edges.iter().enumerate() {
                prop_assert_eq!(weights[i], w.unwrap_or(0));
            }
        }
    }

    #[test]
    fn text_round_trip_is_lossless((n, edges, vw) in instance()) {
        let mut b = Hypergraph::builder(n as usize, edges.len());
        fill(&mut b, &edges, vw.as_deref());
        let h = b.build().unwrap();
        let text = h.to_string();
        let back: Hypergraph = text.parse().unwrap();
        prop_assert_eq!(&back, &h);
        prop_assert_eq!(back.to_string(), text);
    }

    #[test]
    fn unknown_size_discovers_dimensions((_n, edges, _vw) in instance()) {
        let mut b = HypergraphBuilder::unknown_size();
        fill(&mut b, &edges, None);
        let max_vertex = edges
            .iter()
            .flat_map(|(v, _)| v.iter().copied())
            .max()
            .unwrap_or(0);
        prop_assert_eq!(b.hyperedge_count(), edges.len());
        prop_assert_eq!(b.vertex_count(), max_vertex as usize);

        let h = b.build().unwrap();
        prop_assert_eq!(h.vertex_count(), max_vertex as usize);
        prop_assert_eq!(h.hyperedge_count(), edges.len());
        if let Some(weights) = h.hyperedge_weights() {
            prop_assert_eq!(weights.len(), edges.len());
        }

        let mut known = Hypergraph::builder(max_vertex as usize, edges.len());
        fill(&mut known, &edges, None);
        prop_assert_eq!(known.build().unwrap(), h);
    }
}
