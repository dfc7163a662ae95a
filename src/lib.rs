//! # Fiber Hypergraphs
//!
//! Hypergraph models of sparse tensors, used to balance tensor computations across parallel
//! workers.
//!
//! The [fiber hypergraph](crate::builder) of a tensor along a target mode has one hyperedge per
//! run of that mode's [fiber pointer array](crate::tensor::FiberTensor::fiber_ptr), and one
//! vertex per distinct tuple of indices along the *other* modes. A hypergraph partitioner
//! assigns every vertex to a partition; the [cut analysis](crate::cut) then reports which
//! hyperedges span more than one partition.
//!
//! ```text
//!   tensor ──▶ builder ──▶ Hypergraph ──▶ (partitioner) ──▶ partition ──▶ cut ──▶ statistics
//! ```
//!
//! # Example
//!
//! Two fibers along mode 0, `{(0,0), (0,1)}` and `{(1,0)}`:
//!
//! ```rust
//! use fiber_hypergraphs::prelude::*;
//! use fiber_hypergraphs::builder::{fiber_hypergraph, VertexWeighting};
//! use fiber_hypergraphs::cut::cut_hyperedges;
//! use fiber_hypergraphs::tensor::{CooTensor, CsfTensor};
//!
//! let coo = CooTensor::from_coordinates(vec![2, 2], &[[0, 0], [0, 1], [1, 0]]).unwrap();
//! let tensor = CsfTensor::from_coo(&coo);
//!
//! let h = fiber_hypergraph(&tensor, 0, VertexWeighting::FiberNnz).unwrap();
//! assert_eq!(h.hyperedge(0), &[0, 1]);
//! assert_eq!(h.hyperedge(1), &[0]);
//!
//! // vertex 0 (mode-1 index 0) in partition 0, vertex 1 in partition 1
//! let cut = cut_hyperedges(&h, &VecArray(vec![0, 1])).unwrap();
//! assert_eq!(cut.hyperedges(), &VecArray(vec![0]));
//! ```
//!
//! # Array backends
//!
//! A [Hypergraph](crate::hypergraph::Hypergraph) is a flat, array-based structure parametrised by
//! a type `K` implementing [ArrayKind](crate::array::ArrayKind). The cut analysis is written in
//! terms of array operations only. Type aliases for the [`Vec`] backend are exported in
//! [the prelude](crate::prelude).

pub mod array;
pub mod tensor;

pub mod hypergraph;

pub mod builder;
pub mod cut;

pub mod prelude {
    //! Type aliases using the [`VecKind`] array backend.
    pub use crate::array::vec::*;
    pub use crate::array::{Array, ArrayKind, NaturalArray};

    pub type Hypergraph = crate::hypergraph::Hypergraph<VecKind>;
    pub type Cut = crate::cut::Cut<VecKind>;
}
