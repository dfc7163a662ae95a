use crate::array::{Array, ArrayKind, NaturalArray};

use core::fmt::Debug;
use num_traits::{One, Zero};
use thiserror::Error;

/// Ways in which raw hypergraph arrays can fail to describe a hypergraph.
#[derive(Debug, Error)]
pub enum InvalidHypergraph<K: ArrayKind> {
    #[error("edge offsets are empty; expected hyperedge_count + 1 entries")]
    MissingOffsets,
    #[error("edge offsets start at {0:?} instead of zero")]
    OffsetsStart(K::I),
    #[error("edge offsets decrease")]
    OffsetsDecrease,
    #[error("final edge offset is {0:?} but there are {1:?} edge members")]
    OffsetsEnd(K::I, K::I),
    #[error("edge member {0:?} is not a vertex of a hypergraph with {1:?} vertices")]
    MemberOutOfRange(K::I, K::I),
    #[error("{0:?} vertex weights given for {1:?} vertices")]
    VertexWeightsCount(K::I, K::I),
    #[error("{0:?} hyperedge weights given for {1:?} hyperedges")]
    HyperedgeWeightsCount(K::I, K::I),
}

/// A weighted hypergraph in compressed (pointer + members) form.
///
/// Hyperedge `e` contains the vertices `edge_members[edge_offsets[e]..edge_offsets[e+1]]`.
/// Absent weight arrays mean unit weights.
///
/// A `Hypergraph` is immutable and move-only: it has no `Clone` implementation, and
/// [`Hypergraph::into_parts`] consumes it to hand the arrays to a partitioner.
pub struct Hypergraph<K: ArrayKind> {
    pub(crate) vertex_count: K::I,
    pub(crate) vertex_weights: Option<K::Index>,
    pub(crate) hyperedge_weights: Option<K::Index>,
    pub(crate) edge_offsets: K::Index,
    pub(crate) edge_members: K::Index,
}

/// The arrays of a [`Hypergraph`], released by [`Hypergraph::into_parts`].
pub struct HypergraphParts<K: ArrayKind> {
    pub vertex_count: K::I,
    pub vertex_weights: Option<K::Index>,
    pub hyperedge_weights: Option<K::Index>,
    pub edge_offsets: K::Index,
    pub edge_members: K::Index,
}

impl<K: ArrayKind> Hypergraph<K> {
    /// Safely create a Hypergraph, ensuring its data is valid.
    ///
    /// ```rust
    /// # use fiber_hypergraphs::prelude::*;
    /// let h = Hypergraph::new(
    ///     2,
    ///     None,
    ///     Some(VecArray(vec![2, 1])),
    ///     VecArray(vec![0, 2, 3]),
    ///     VecArray(vec![0, 1, 0]),
    /// )
    /// .unwrap();
    /// assert_eq!(h.hyperedge_count(), 2);
    /// assert_eq!(h.hyperedge(0), &[0, 1]);
    ///
    /// // vertex 2 does not exist
    /// assert!(Hypergraph::new(2, None, None, VecArray(vec![0, 1]), VecArray(vec![2])).is_err());
    /// ```
    pub fn new(
        vertex_count: K::I,
        vertex_weights: Option<K::Index>,
        hyperedge_weights: Option<K::Index>,
        edge_offsets: K::Index,
        edge_members: K::Index,
    ) -> Result<Hypergraph<K>, InvalidHypergraph<K>> {
        let h = Hypergraph {
            vertex_count,
            vertex_weights,
            hyperedge_weights,
            edge_offsets,
            edge_members,
        };
        h.validate()
    }

    /// A hypergraph is valid when
    ///
    /// 1. `edge_offsets` is a non-decreasing array from `0` to `edge_members.len()`
    /// 2. Every edge member is a vertex id below `vertex_count`
    /// 3. Weight arrays, if present, have one entry per vertex (resp. hyperedge)
    ///
    pub fn validate(self) -> Result<Self, InvalidHypergraph<K>> {
        if self.edge_offsets.is_empty() {
            return Err(InvalidHypergraph::MissingOffsets);
        }

        let first = self.edge_offsets.get(K::I::zero());
        if first != K::I::zero() {
            return Err(InvalidHypergraph::OffsetsStart(first));
        }

        if !self.edge_offsets.is_monotone() {
            return Err(InvalidHypergraph::OffsetsDecrease);
        }

        let last = self.edge_offsets.get(self.hyperedge_count());
        if last != self.edge_members.len() {
            return Err(InvalidHypergraph::OffsetsEnd(last, self.edge_members.len()));
        }

        if let Some(m) = self.edge_members.max() {
            if m >= self.vertex_count {
                return Err(InvalidHypergraph::MemberOutOfRange(
                    m,
                    self.vertex_count.clone(),
                ));
            }
        }

        if let Some(w) = &self.vertex_weights {
            if w.len() != self.vertex_count {
                return Err(InvalidHypergraph::VertexWeightsCount(
                    w.len(),
                    self.vertex_count.clone(),
                ));
            }
        }

        if let Some(w) = &self.hyperedge_weights {
            if w.len() != self.hyperedge_count() {
                return Err(InvalidHypergraph::HyperedgeWeightsCount(
                    w.len(),
                    self.hyperedge_count(),
                ));
            }
        }

        Ok(self)
    }

    /// Construct the empty hypergraph with no vertices and no hyperedges.
    pub fn empty() -> Hypergraph<K> {
        Hypergraph {
            vertex_count: K::I::zero(),
            vertex_weights: None,
            hyperedge_weights: None,
            edge_offsets: K::Index::fill(K::I::zero(), K::I::one()),
            edge_members: K::Index::empty(),
        }
    }

    pub fn vertex_count(&self) -> K::I {
        self.vertex_count.clone()
    }

    pub fn hyperedge_count(&self) -> K::I {
        self.edge_offsets.len() - K::I::one()
    }

    pub fn vertex_weights(&self) -> Option<&K::Index> {
        self.vertex_weights.as_ref()
    }

    pub fn hyperedge_weights(&self) -> Option<&K::Index> {
        self.hyperedge_weights.as_ref()
    }

    pub fn edge_offsets(&self) -> &K::Index {
        &self.edge_offsets
    }

    pub fn edge_members(&self) -> &K::Index {
        &self.edge_members
    }

    /// Members of hyperedge `e`.
    ///
    /// # Panics
    ///
    /// If `e` is not below [`Hypergraph::hyperedge_count`].
    pub fn hyperedge(&self, e: K::I) -> K::Slice<'_, K::I> {
        let start = self.edge_offsets.get(e.clone());
        let end = self.edge_offsets.get(e + K::I::one());
        self.edge_members.get_range(start..end)
    }

    /// Number of members of hyperedge `e`.
    ///
    /// # Panics
    ///
    /// If `e` is not below [`Hypergraph::hyperedge_count`].
    pub fn hyperedge_size(&self, e: K::I) -> K::I {
        self.edge_offsets.get(e.clone() + K::I::one()) - self.edge_offsets.get(e)
    }

    /// Member counts of every hyperedge.
    pub fn hyperedge_sizes(&self) -> K::Index {
        self.edge_offsets.segment_sizes()
    }

    /// Sum of vertex weights; the vertex count when unweighted.
    pub fn total_vertex_weight(&self) -> K::I {
        match &self.vertex_weights {
            Some(w) => w.sum(),
            None => self.vertex_count(),
        }
    }

    /// Sum of hyperedge weights; the hyperedge count when unweighted.
    pub fn total_hyperedge_weight(&self) -> K::I {
        match &self.hyperedge_weights {
            Some(w) => w.sum(),
            None => self.hyperedge_count(),
        }
    }

    /// Release the hypergraph's arrays, e.g. to hand them to a partitioner.
    ///
    /// This consumes the hypergraph, so it cannot be used afterwards:
    ///
    /// ```rust,compile_fail
    /// # use fiber_hypergraphs::prelude::*;
    /// let h = Hypergraph::empty();
    /// let parts = h.into_parts();
    /// h.hyperedge_count();
    /// ```
    pub fn into_parts(self) -> HypergraphParts<K> {
        let Hypergraph {
            vertex_count,
            vertex_weights,
            hyperedge_weights,
            edge_offsets,
            edge_members,
        } = self;
        HypergraphParts {
            vertex_count,
            vertex_weights,
            hyperedge_weights,
            edge_offsets,
            edge_members,
        }
    }
}

impl<K: ArrayKind> TryFrom<HypergraphParts<K>> for Hypergraph<K> {
    type Error = InvalidHypergraph<K>;

    fn try_from(parts: HypergraphParts<K>) -> Result<Self, Self::Error> {
        Hypergraph::new(
            parts.vertex_count,
            parts.vertex_weights,
            parts.hyperedge_weights,
            parts.edge_offsets,
            parts.edge_members,
        )
    }
}

// NOTE: manual Debug required because we need to specify array bounds.
impl<K: ArrayKind> Debug for Hypergraph<K>
where
    K::Index: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hypergraph")
            .field("vertex_count", &self.vertex_count)
            .field("vertex_weights", &self.vertex_weights)
            .field("hyperedge_weights", &self.hyperedge_weights)
            .field("edge_offsets", &self.edge_offsets)
            .field("edge_members", &self.edge_members)
            .finish()
    }
}

impl<K: ArrayKind> Debug for HypergraphParts<K>
where
    K::Index: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HypergraphParts")
            .field("vertex_count", &self.vertex_count)
            .field("vertex_weights", &self.vertex_weights)
            .field("hyperedge_weights", &self.hyperedge_weights)
            .field("edge_offsets", &self.edge_offsets)
            .field("edge_members", &self.edge_members)
            .finish()
    }
}

// Can't use derived PartialEq because it introduces unwanted bound `K: PartialEq`.
impl<K: ArrayKind> PartialEq for Hypergraph<K> {
    fn eq(&self, other: &Self) -> bool {
        self.vertex_count == other.vertex_count
            && self.vertex_weights == other.vertex_weights
            && self.hyperedge_weights == other.hyperedge_weights
            && self.edge_offsets == other.edge_offsets
            && self.edge_members == other.edge_members
    }
}
