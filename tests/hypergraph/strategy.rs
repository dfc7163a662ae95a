use fiber_hypergraphs::prelude::*;

use proptest::collection::vec;
use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy};

const MAX_VERTICES: usize = 10;
const MAX_HYPEREDGES: usize = 8;
const MAX_HYPEREDGE_SIZE: usize = 5;

// Hypergraphs are move-only, so strategies generate this plain description and build from it.
#[derive(Debug, Clone)]
pub struct HypergraphData {
    pub vertex_count: usize,
    pub vertex_weights: Option<Vec<usize>>,
    pub hyperedge_weights: Option<Vec<usize>>,
    pub hyperedges: Vec<Vec<usize>>,
}

impl HypergraphData {
    pub fn build(&self) -> Hypergraph {
        let (offsets, members) = compress(&self.hyperedges);
        Hypergraph::new(
            self.vertex_count,
            self.vertex_weights.clone().map(VecArray),
            self.hyperedge_weights.clone().map(VecArray),
            offsets,
            members,
        )
        .expect("valid by construction")
    }
}

/// Flatten member lists into `(edge_offsets, edge_members)`.
pub fn compress(hyperedges: &[Vec<usize>]) -> (VecArray<usize>, VecArray<usize>) {
    let mut offsets = vec![0];
    let mut members = Vec::new();
    for e in hyperedges {
        members.extend_from_slice(e);
        offsets.push(members.len());
    }
    (VecArray(offsets), VecArray(members))
}

/// Hyperedges over `1..=MAX_VERTICES` vertices. Members may repeat within a hyperedge, and
/// hyperedges may be empty.
pub fn arb_hypergraph_data() -> BoxedStrategy<HypergraphData> {
    (1..=MAX_VERTICES, 0..=MAX_HYPEREDGES)
        .prop_flat_map(|(vertex_count, hyperedge_count)| {
            let hyperedges = vec(
                vec(0..vertex_count, 0..=MAX_HYPEREDGE_SIZE),
                hyperedge_count,
            );
            (
                Just(vertex_count),
                proptest::option::of(vec(1..10usize, vertex_count)),
                proptest::option::of(vec(1..10usize, hyperedge_count)),
                hyperedges,
            )
        })
        .prop_map(
            |(vertex_count, vertex_weights, hyperedge_weights, hyperedges)| HypergraphData {
                vertex_count,
                vertex_weights,
                hyperedge_weights,
                hyperedges,
            },
        )
        .boxed()
}

/// An arbitrary valid hypergraph, with or without weights.
pub fn arb_hypergraph() -> BoxedStrategy<Hypergraph> {
    arb_hypergraph_data().prop_map(|d| d.build()).boxed()
}

/// A hypergraph together with a partition of its vertices into at most `max_parts` parts.
pub fn arb_partitioned_hypergraph(
    max_parts: usize,
) -> BoxedStrategy<(Hypergraph, VecArray<usize>)> {
    arb_hypergraph_data()
        .prop_flat_map(move |d| {
            let n = d.vertex_count;
            (Just(d), vec(0..max_parts, n))
        })
        .prop_map(|(d, partition)| (d.build(), VecArray(partition)))
        .boxed()
}
