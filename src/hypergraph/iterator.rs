//! Iterating the hyperedges of a [`Hypergraph`] as member slices.
use {
    crate::{array::*, hypergraph::Hypergraph},
    num_traits::{One, Zero},
};

/// Iterator over the hyperedges of a hypergraph, yielding each hyperedge's members
pub struct Hyperedges<'a, K: ArrayKind> {
    hypergraph: &'a Hypergraph<K>,

    /// index of next hyperedge.
    index: K::I,
}

impl<'a, K: ArrayKind> Iterator for Hyperedges<'a, K>
where
    K::I: Into<usize>,
{
    type Item = K::Slice<'a, K::I>;

    fn next(&mut self) -> Option<Self::Item> {
        // Check if we've reached the end of the iterator
        if self.index >= self.hypergraph.hyperedge_count() {
            return None;
        }

        let members = self.hypergraph.hyperedge(self.index.clone());
        self.index = self.index.clone() + K::I::one();
        Some(members)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len();
        (n, Some(n)) // exact size is known
    }
}

impl<K: ArrayKind> ExactSizeIterator for Hyperedges<'_, K>
where
    K::I: Into<usize>,
{
    fn len(&self) -> usize {
        (self.hypergraph.hyperedge_count() - self.index.clone()).into()
    }
}

impl<K: ArrayKind> Hypergraph<K> {
    /// Iterate over the member slices of each hyperedge, in hyperedge order.
    ///
    /// ```rust
    /// # use fiber_hypergraphs::prelude::*;
    /// let h = Hypergraph::new(3, None, None, VecArray(vec![0, 2, 2, 3]), VecArray(vec![0, 2, 1]))
    ///     .unwrap();
    /// let edges: Vec<&[usize]> = h.hyperedges().collect();
    /// assert_eq!(edges, vec![&[0, 2][..], &[][..], &[1][..]]);
    /// ```
    pub fn hyperedges(&self) -> Hyperedges<'_, K> {
        Hyperedges {
            hypergraph: self,
            index: K::I::zero(),
        }
    }
}
