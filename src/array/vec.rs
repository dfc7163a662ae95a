//! [`Vec<T>`]-backed arrays
use crate::array::*;
use core::ops::{Deref, DerefMut, RangeBounds, Sub};

/// Arrays backed by a [`Vec<T>`].
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct VecKind {}

impl ArrayKind for VecKind {
    type I = usize;
    type Index = VecArray<usize>;

    // A Slice for Vec is just a rust slice
    type Slice<'a, T: 'a> = &'a [T];
}

/// A newtype wrapper for [`Vec<T>`] allowing pointwise arithmetic operations.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct VecArray<T>(pub Vec<T>);

// VecArray is a newtype wrapper, so we can just treat it like a regular old Vec.
impl<T> Deref for VecArray<T> {
    type Target = Vec<T>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for VecArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> From<Vec<T>> for VecArray<T> {
    fn from(v: Vec<T>) -> Self {
        VecArray(v)
    }
}

impl<T> FromIterator<T> for VecArray<T> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        VecArray(iter.into_iter().collect())
    }
}

impl<T: Clone + PartialEq> Array<VecKind, T> for VecArray<T> {
    fn empty() -> Self {
        VecArray(Vec::default())
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn fill(x: T, n: usize) -> Self {
        VecArray(vec![x; n])
    }

    fn get(&self, i: usize) -> T {
        self[i].clone()
    }

    fn get_range<R: RangeBounds<usize>>(&self, rb: R) -> &[T] {
        &self.0[(rb.start_bound().cloned(), rb.end_bound().cloned())]
    }

    fn from_slice(slice: &[T]) -> Self {
        VecArray(slice.to_vec())
    }

    fn gather(&self, idx: &[usize]) -> Self {
        VecArray(idx.iter().map(|i| self.0[*i].clone()).collect())
    }
}

impl<T: Clone + Sub<Output = T>> Sub<VecArray<T>> for VecArray<T> {
    type Output = VecArray<T>;

    fn sub(self, rhs: VecArray<T>) -> VecArray<T> {
        assert_eq!(self.0.len(), rhs.0.len());
        VecArray(
            self.iter()
                .zip(rhs.iter())
                .map(|(x, y)| x.clone() - y.clone())
                .collect(),
        )
    }
}

impl NaturalArray<VecKind> for VecArray<usize> {
    fn max(&self) -> Option<usize> {
        self.iter().max().copied()
    }

    fn cumulative_sum(&self) -> Self {
        let mut v = Vec::with_capacity(self.len() + 1);
        v.push(0);
        v.extend(self.iter().scan(0, |acc, x| {
            *acc += *x;
            Some(*acc)
        }));
        VecArray(v)
    }

    fn arange(start: &usize, stop: &usize) -> Self {
        assert!(stop >= start);
        VecArray((*start..*stop).collect())
    }

    fn repeat(&self, x: &[usize]) -> VecArray<usize> {
        assert_eq!(self.len(), x.len());
        let mut v: Vec<usize> = Vec::with_capacity(self.iter().sum());
        for (k, xi) in self.iter().zip(x) {
            v.extend(std::iter::repeat(*xi).take(*k))
        }
        VecArray(v)
    }

    fn is_monotone(&self) -> bool {
        self.windows(2).all(|w| w[0] <= w[1])
    }

    fn mismatch_indices(&self, other: &Self) -> Self {
        assert_eq!(self.len(), other.len());
        self.iter()
            .zip(other.iter())
            .enumerate()
            .filter_map(|(i, (x, y))| (x != y).then_some(i))
            .collect()
    }

    fn unique_sorted(&self) -> Self {
        let mut v = self.0.clone();
        v.dedup();
        VecArray(v)
    }
}
