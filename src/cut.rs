//! Quality of a vertex partition of a hypergraph.
//!
//! A hyperedge is *cut* when its members lie in more than one partition. Hyperedges with zero or
//! one member are never cut.
//!
//! ```rust
//! # use fiber_hypergraphs::prelude::*;
//! # use fiber_hypergraphs::cut::*;
//! let h = Hypergraph::new(2, None, None, VecArray(vec![0, 2, 3]), VecArray(vec![0, 1, 0]))
//!     .unwrap();
//!
//! let cut = cut_hyperedges(&h, &VecArray(vec![0, 1])).unwrap();
//! assert_eq!(cut.count(), 1);
//! assert_eq!(cut.hyperedges(), &VecArray(vec![0]));
//! ```
use crate::array::vec::{VecArray, VecKind};
use crate::array::{Array, ArrayKind, NaturalArray};
use crate::hypergraph::Hypergraph;

use core::fmt::Debug;
use log::debug;
use num_traits::Zero;
use thiserror::Error;

/// Ways in which a partition cannot be analysed against a hypergraph.
#[derive(Debug, Error)]
pub enum CutError<K: ArrayKind> {
    #[error("partition assigns {0:?} vertices but the hypergraph has {1:?}")]
    LengthMismatch(K::I, K::I),
    #[error("hyperedge member {0:?} is not a vertex of a hypergraph with {1:?} vertices")]
    OutOfRangeReference(K::I, K::I),
}

/// The cut hyperedges of a partition, in ascending order.
pub struct Cut<K: ArrayKind> {
    hyperedges: K::Index,
}

impl<K: ArrayKind> Cut<K> {
    /// Number of cut hyperedges.
    pub fn count(&self) -> K::I {
        self.hyperedges.len()
    }

    /// Ids of the cut hyperedges, ascending.
    pub fn hyperedges(&self) -> &K::Index {
        &self.hyperedges
    }

    /// Take the ascending ids of the cut hyperedges, e.g. to refine only those hyperedges.
    pub fn into_hyperedges(self) -> K::Index {
        self.hyperedges
    }

    /// Total weight of the cut hyperedges in `hypergraph`; their count when it is unweighted.
    pub fn weight(&self, hypergraph: &Hypergraph<K>) -> K::I {
        match hypergraph.hyperedge_weights() {
            Some(w) => w.gather(self.hyperedges.get_range(..)).sum(),
            None => self.count(),
        }
    }
}

impl<K: ArrayKind> Debug for Cut<K>
where
    K::Index: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cut")
            .field("hyperedges", &self.hyperedges)
            .finish()
    }
}

// Can't use derived PartialEq because it introduces unwanted bound `K: PartialEq`.
impl<K: ArrayKind> PartialEq for Cut<K> {
    fn eq(&self, other: &Self) -> bool {
        self.hyperedges == other.hyperedges
    }
}

/// Check a partition against a hypergraph before any traversal.
fn check_partition<K: ArrayKind>(
    hypergraph: &Hypergraph<K>,
    partition: &K::Index,
) -> Result<(), CutError<K>> {
    if partition.len() != hypergraph.vertex_count() {
        return Err(CutError::LengthMismatch(
            partition.len(),
            hypergraph.vertex_count(),
        ));
    }
    if let Some(m) = hypergraph.edge_members().max() {
        if m >= hypergraph.vertex_count() {
            return Err(CutError::OutOfRangeReference(m, hypergraph.vertex_count()));
        }
    }
    Ok(())
}

/// Compute the hyperedges of `hypergraph` cut by `partition`, which assigns a partition id to
/// every vertex.
///
/// Each member slot is compared with the first slot of its hyperedge; a hyperedge is cut iff any
/// of its slots differs.
///
/// # Errors
///
/// - [`CutError::LengthMismatch`] if `partition` does not have one entry per vertex
/// - [`CutError::OutOfRangeReference`] if a hyperedge member is not a vertex
pub fn cut_hyperedges<K: ArrayKind>(
    hypergraph: &Hypergraph<K>,
    partition: &K::Index,
) -> Result<Cut<K>, CutError<K>> {
    check_partition(hypergraph, partition)?;

    let offsets = hypergraph.edge_offsets();
    let members = hypergraph.edge_members();
    let n = hypergraph.hyperedge_count();

    // hyperedge id of each member slot
    let edge_ids = K::Index::arange(&K::I::zero(), &n);
    let slot_edge = hypergraph.hyperedge_sizes().repeat(edge_ids.get_range(..));

    // partition of each slot, and of the first slot in the same hyperedge
    let slot_part = partition.gather(members.get_range(..));
    let starts = K::Index::from_slice(offsets.get_range(..n));
    let head_slot = starts.gather(slot_edge.get_range(..));
    let head_part = slot_part.gather(head_slot.get_range(..));

    let cut_slots = slot_part.mismatch_indices(&head_part);
    let hyperedges = slot_edge.gather(cut_slots.get_range(..)).unique_sorted();

    debug!(
        hyperedges:? = hypergraph.hyperedge_count(),
        cut:? = hyperedges.len();
        "computed cut hyperedges"
    );
    Ok(Cut { hyperedges })
}

/// Number of hyperedges of `hypergraph` cut by `partition`.
/// See [`cut_hyperedges`] for errors.
pub fn cut_count<K: ArrayKind>(
    hypergraph: &Hypergraph<K>,
    partition: &K::Index,
) -> Result<K::I, CutError<K>> {
    cut_hyperedges(hypergraph, partition).map(|cut| cut.count())
}

/// Histogram of hyperedge connectivity: how many hyperedges touch exactly one, exactly two, or
/// more than two partitions. Hyperedges in `single` need no communication. Unlike a two-bucket
/// owned/shared split, hyperedges touching exactly two partitions are counted apart in `pair`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConnectivityStats {
    pub single: usize,
    pub pair: usize,
    pub many: usize,
}

impl ConnectivityStats {
    /// Hyperedges touching more than one partition.
    pub fn cut(&self) -> usize {
        self.pair + self.many
    }
}

/// The connectivity λ(e) of every hyperedge: the number of distinct partitions its members lie
/// in. Empty hyperedges have connectivity zero.
/// See [`cut_hyperedges`] for errors.
///
/// ```rust
/// # use fiber_hypergraphs::prelude::*;
/// # use fiber_hypergraphs::cut::*;
/// let h = Hypergraph::new(3, None, None, VecArray(vec![0, 3, 3, 4]), VecArray(vec![0, 1, 2, 1]))
///     .unwrap();
/// let lambda = connectivity(&h, &VecArray(vec![0, 1, 2])).unwrap();
/// assert_eq!(lambda, VecArray(vec![3, 0, 1]));
/// ```
pub fn connectivity(
    hypergraph: &Hypergraph<VecKind>,
    partition: &VecArray<usize>,
) -> Result<VecArray<usize>, CutError<VecKind>> {
    check_partition(hypergraph, partition)?;

    let mut parts = Vec::new();
    Ok(hypergraph
        .hyperedges()
        .map(|members| {
            parts.clear();
            parts.extend(members.iter().map(|&v| partition[v]));
            parts.sort_unstable();
            parts.dedup();
            parts.len()
        })
        .collect())
}

/// The connectivity metric Σ w(e)·(λ(e) − 1) over non-empty hyperedges, where w(e) is the
/// hyperedge weight (one when unweighted). This is the communication volume of the partition.
/// See [`cut_hyperedges`] for errors.
pub fn connectivity_minus_one(
    hypergraph: &Hypergraph<VecKind>,
    partition: &VecArray<usize>,
) -> Result<usize, CutError<VecKind>> {
    let lambda = connectivity(hypergraph, partition)?;
    let weight = |e: usize| hypergraph.hyperedge_weights().map_or(1, |w| w[e]);
    Ok(lambda
        .iter()
        .enumerate()
        .filter(|&(_, &l)| l > 0)
        .map(|(e, &l)| weight(e) * (l - 1))
        .sum())
}

/// Count hyperedges by connectivity.
/// See [`cut_hyperedges`] for errors.
pub fn connectivity_stats(
    hypergraph: &Hypergraph<VecKind>,
    partition: &VecArray<usize>,
) -> Result<ConnectivityStats, CutError<VecKind>> {
    let lambda = connectivity(hypergraph, partition)?;
    let mut stats = ConnectivityStats::default();
    for &l in lambda.iter() {
        match l {
            0 => {}
            1 => stats.single += 1,
            2 => stats.pair += 1,
            _ => stats.many += 1,
        }
    }
    Ok(stats)
}
