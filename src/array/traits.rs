//! The operations which an array type must support to store and analyse hypergraphs
use core::fmt::Debug;
use core::ops::{Add, RangeBounds, Sub};
use num_traits::{One, Zero};

/// Array *kinds*.
/// For example, [`super::vec::VecKind`] is the set of types [`Vec<T>`] for all `T`.
pub trait ArrayKind: Sized {
    /// The type of index *elements*. For [`super::vec::VecKind`], this is [`usize`].
    ///
    /// Vertex ids, hyperedge ids, offsets, weights and partition ids are all indices.
    type I: Clone
        + Debug
        + PartialEq
        + Ord
        + One
        + Zero
        + Add<Output = Self::I>
        + Sub<Output = Self::I>;

    /// Arrays of indices must implement NaturalArray
    type Index: NaturalArray<Self>;

    /// a `Slice` is a read-only view into another array's data.
    /// For `VecKind` this is `&[T]`.
    type Slice<'a, T: 'a>;
}

/// Arrays of elements T for some [`ArrayKind`] `K`.
///
/// # Panics
///
/// Any operation using an index out of range for the given array will panic.
pub trait Array<K: ArrayKind, T>: Clone + PartialEq<Self> {
    /// The empty array
    fn empty() -> Self;

    /// Length of an array
    fn len(&self) -> K::I;

    /// Test if an array is empty
    fn is_empty(&self) -> bool {
        self.len() == K::I::zero()
    }

    /// `fill(x, n)` returns the array length n containing repeated element x.
    fn fill(x: T, n: K::I) -> Self;

    /// Retrieve a single element by its index.
    fn get(&self, i: K::I) -> T;

    /// Get a contiguous range of the underlying array as a slice.
    fn get_range<R: RangeBounds<K::I>>(&self, rb: R) -> K::Slice<'_, T>;

    /// Copy a slice into a new array.
    fn from_slice(slice: K::Slice<'_, T>) -> Self;

    /// Gather elements of this array according to the indices.
    /// <https://en.wikipedia.org/wiki/Gather/scatter_(vector_addressing)#Gather>
    /// ```text
    /// x = y.gather(idx)  // x[i] = y[idx[i]]
    /// ```
    fn gather(&self, idx: K::Slice<'_, K::I>) -> Self;
}

/// Arrays of natural numbers.
/// This is used for computing with *indexes*, *sizes* and *weights*.
pub trait NaturalArray<K: ArrayKind>: Array<K, K::I> + Sized + Sub<Self, Output = Self> {
    /// Largest element, or `None` for the empty array.
    fn max(&self) -> Option<K::I>;

    /// An inclusive-and-exclusive cumulative sum
    /// For an input of size `N`, returns an array `x` of size `N+1` where `x[0] = 0` and `x[-1] = sum(x)`
    fn cumulative_sum(&self) -> Self;

    /// Indices from start to stop
    fn arange(start: &K::I, stop: &K::I) -> Self;

    /// Repeat each element of the given slice.
    /// self and x must be equal lengths.
    /// For example, `[2 0 1].repeat([a b c]) = [a a c]`.
    fn repeat(&self, x: K::Slice<'_, K::I>) -> Self;

    /// True when every element is at least as large as its predecessor.
    fn is_monotone(&self) -> bool;

    /// Sorted positions `i` at which `self[i] != other[i]`.
    /// self and other must be equal lengths.
    fn mismatch_indices(&self, other: &Self) -> Self;

    /// Remove consecutive repeated elements. On sorted input, the result is the set of distinct
    /// elements in ascending order.
    fn unique_sorted(&self) -> Self;

    /// Sum of all elements.
    fn sum(&self) -> K::I {
        let ptr = self.cumulative_sum();
        ptr.get(ptr.len() - K::I::one())
    }

    /// Given an array of `N+1` pointers, compute the `N` segment sizes.
    /// For example, `[0 2 2 5] ⇒ [2 0 3]`.
    fn segment_sizes(&self) -> Self {
        let n = self.len();
        if n == K::I::zero() {
            return Self::empty();
        }
        let last = n - K::I::one();
        Self::from_slice(self.get_range(K::I::one()..)) - Self::from_slice(self.get_range(..last))
    }
}
