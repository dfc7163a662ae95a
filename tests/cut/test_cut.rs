use std::collections::BTreeSet;

use fiber_hypergraphs::builder::{fiber_hypergraph, VertexWeighting};
use fiber_hypergraphs::cut::*;
use fiber_hypergraphs::prelude::*;
use fiber_hypergraphs::tensor::{CooTensor, CsfTensor};

use proptest::proptest;

use crate::hypergraph::strategy::{arb_partitioned_hypergraph, compress};

fn distinct_parts(members: &[usize], partition: &VecArray<usize>) -> usize {
    members.iter().map(|&v| partition[v]).collect::<BTreeSet<_>>().len()
}

#[test]
fn two_fiber_scenario() {
    let coo = CooTensor::from_coordinates(vec![2, 2], &[[0, 0], [0, 1], [1, 0]]).unwrap();
    let h = fiber_hypergraph(&CsfTensor::from_coo(&coo), 0, VertexWeighting::FiberNnz).unwrap();

    let partition = VecArray(vec![0, 1]);
    assert_eq!(cut_count(&h, &partition).unwrap(), 1);
    assert_eq!(
        cut_hyperedges(&h, &partition).unwrap().hyperedges(),
        &VecArray(vec![0])
    );

    // a single partition cuts nothing
    assert_eq!(cut_count(&h, &VecArray(vec![3, 3])).unwrap(), 0);
}

#[test]
fn partition_length_must_match_vertex_count() {
    let (offsets, members) = compress(&[vec![0, 1], vec![2]]);
    let h = Hypergraph::new(3, None, None, offsets, members).unwrap();

    let err = cut_hyperedges(&h, &VecArray(vec![0, 1])).unwrap_err();
    assert!(matches!(err, CutError::LengthMismatch(2, 3)));
    assert_eq!(
        err.to_string(),
        "partition assigns 2 vertices but the hypergraph has 3"
    );
    assert!(cut_count(&h, &VecArray(vec![0, 1, 2, 3])).is_err());
    assert!(connectivity_minus_one(&h, &VecArray(vec![])).is_err());
}

#[test]
fn repeated_members_do_not_cut() {
    let (offsets, members) = compress(&[vec![1, 1, 1], vec![0, 1, 0]]);
    let h = Hypergraph::new(2, None, None, offsets, members).unwrap();
    let cut = cut_hyperedges(&h, &VecArray(vec![0, 1])).unwrap();
    assert_eq!(cut.hyperedges(), &VecArray(vec![1]));
}

#[test]
fn analyses_run_concurrently() {
    let (offsets, members) = compress(&[vec![0, 1], vec![1, 2], vec![2, 3], vec![3, 0]]);
    let h = Hypergraph::new(4, None, None, offsets, members).unwrap();
    let partitions = [
        VecArray(vec![0, 0, 0, 0]),
        VecArray(vec![0, 0, 1, 1]),
        VecArray(vec![0, 1, 0, 1]),
    ];

    let counts: Vec<usize> = std::thread::scope(|s| {
        let handles: Vec<_> = partitions
            .iter()
            .map(|p| {
                let h = &h;
                s.spawn(move || cut_count(h, p).unwrap())
            })
            .collect();
        handles.into_iter().map(|t| t.join().unwrap()).collect()
    });
    assert_eq!(counts, vec![0, 2, 4]);
}

proptest! {
    #[test]
    fn cut_is_exactly_the_multi_partition_hyperedges((h, partition) in arb_partitioned_hypergraph(4)) {
        let cut = cut_hyperedges(&h, &partition).unwrap();

        let expected: Vec<usize> = h
            .hyperedges()
            .enumerate()
            .filter(|(_, members)| distinct_parts(members, &partition) > 1)
            .map(|(e, _)| e)
            .collect();
        assert_eq!(cut.hyperedges(), &VecArray(expected));
        assert_eq!(cut.count(), cut_count(&h, &partition).unwrap());
    }

    #[test]
    fn cut_is_ascending_and_deterministic((h, partition) in arb_partitioned_hypergraph(3)) {
        let c0 = cut_hyperedges(&h, &partition).unwrap();
        let c1 = cut_hyperedges(&h, &partition).unwrap();
        assert_eq!(c0, c1);
        assert!(c0.hyperedges().windows(2).all(|w| w[0] < w[1]));
        assert!(c0.count() <= h.hyperedge_count());
    }

    #[test]
    fn small_hyperedges_are_never_cut((h, partition) in arb_partitioned_hypergraph(5)) {
        let cut = cut_hyperedges(&h, &partition).unwrap();
        for &e in cut.hyperedges().iter() {
            assert!(h.hyperedge_size(e) > 1);
        }
    }

    #[test]
    fn single_partition_cuts_nothing((h, _) in arb_partitioned_hypergraph(1)) {
        let partition = VecArray(vec![0; h.vertex_count()]);
        assert_eq!(cut_count(&h, &partition).unwrap(), 0);
        assert_eq!(connectivity_minus_one(&h, &partition).unwrap(), 0);
    }

    #[test]
    fn connectivity_agrees_with_cut((h, partition) in arb_partitioned_hypergraph(4)) {
        let lambda = connectivity(&h, &partition).unwrap();
        assert_eq!(lambda.len(), h.hyperedge_count());
        for (e, members) in h.hyperedges().enumerate() {
            assert_eq!(lambda[e], distinct_parts(members, &partition));
        }

        let stats = connectivity_stats(&h, &partition).unwrap();
        let cut = cut_hyperedges(&h, &partition).unwrap();
        assert_eq!(stats.cut(), cut.count());

        let non_empty = h.hyperedges().filter(|m| !m.is_empty()).count();
        assert_eq!(stats.single + stats.pair + stats.many, non_empty);

        // every cut hyperedge contributes at least its weight
        assert!(connectivity_minus_one(&h, &partition).unwrap() >= cut.weight(&h));
    }
}
