//! Sparse tensors as consumed by the hypergraph builder.
//!
//! The builder only needs the [`FiberTensor`] view: for a chosen mode, a pointer array splitting
//! that mode's nonzero ordering into runs, and the per-nonzero indices of every other mode.
//! [`CooTensor`] and [`CsfTensor`] are a small reference storage implementing it.
mod coo;
mod csf;

pub use coo::*;
pub use csf::*;

/// A read-only, fiber-structured view of a sparse tensor's nonzero pattern.
pub trait FiberTensor {
    /// Number of modes (dimensions).
    fn nmodes(&self) -> usize;

    /// Number of stored nonzeros.
    fn nnz(&self) -> usize;

    /// Pointer array of `mode`: run `f` covers positions `ptr[f]..ptr[f+1]` of the nonzeros in
    /// `mode`'s storage order.
    fn fiber_ptr(&self, mode: usize) -> &[usize];

    /// Index along `other` of each nonzero, in `mode`'s storage order. Only queried for
    /// `other != mode`.
    fn fiber_inds(&self, mode: usize, other: usize) -> &[usize];
}
