//! Construction of the fiber hypergraph of a sparse tensor.
//!
//! Given a [`FiberTensor`] and a target mode, each run of the target mode's pointer array becomes
//! one hyperedge. Its members are the distinct index tuples, over every *other* mode, of the
//! nonzeros in that run. Each distinct tuple found anywhere in the tensor is one vertex.
//!
//! Vertex ids are assigned in first-encounter order: runs in pointer order, nonzeros in storage
//! order within a run. Hyperedge `f` has weight equal to the number of nonzeros in run `f`.
//!
//! ```rust
//! # use fiber_hypergraphs::prelude::*;
//! # use fiber_hypergraphs::tensor::*;
//! # use fiber_hypergraphs::builder::*;
//! let coo = CooTensor::from_coordinates(vec![2, 2], &[[0, 0], [0, 1], [1, 0]]).unwrap();
//! let tensor = CsfTensor::from_coo(&coo);
//!
//! let h = FiberHypergraphBuilder::new(0).build(&tensor).unwrap();
//! assert_eq!(h.vertex_count(), 2);
//! assert_eq!(h.edge_offsets(), &VecArray(vec![0, 2, 3]));
//! assert_eq!(h.edge_members(), &VecArray(vec![0, 1, 0]));
//! assert_eq!(h.vertex_weights(), Some(&VecArray(vec![2, 1])));
//! assert_eq!(h.hyperedge_weights(), Some(&VecArray(vec![2, 1])));
//! ```
use crate::array::vec::{VecArray, VecKind};
use crate::hypergraph::{Hypergraph, InvalidHypergraph};
use crate::tensor::FiberTensor;

use log::{debug, trace};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// How vertices of a fiber hypergraph are weighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VertexWeighting {
    /// Unweighted vertices.
    None,
    /// Each vertex weighs the number of nonzeros it participates in, summed over all fibers.
    #[default]
    FiberNnz,
}

/// Ways in which a tensor cannot be turned into a fiber hypergraph.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("mode {mode} is not a mode of a tensor with {nmodes} modes")]
    InvalidMode { mode: usize, nmodes: usize },
    #[error("cannot build a hypergraph from a tensor with {0}")]
    DegenerateTensor(&'static str),
    #[error("{what} of mode {mode} refers to position {index}, but the bound is {bound}")]
    OutOfRangeReference {
        what: &'static str,
        mode: usize,
        index: usize,
        bound: usize,
    },
    #[error(transparent)]
    InvalidHypergraph(#[from] InvalidHypergraph<VecKind>),
}

/// Configures and builds the fiber hypergraph of a tensor along one target mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiberHypergraphBuilder {
    mode: usize,
    vertex_weighting: VertexWeighting,
}

impl FiberHypergraphBuilder {
    pub fn new(mode: usize) -> Self {
        FiberHypergraphBuilder {
            mode,
            vertex_weighting: VertexWeighting::default(),
        }
    }

    pub fn vertex_weighting(mut self, vertex_weighting: VertexWeighting) -> Self {
        self.vertex_weighting = vertex_weighting;
        self
    }

    /// Build the hypergraph. The tensor is only read.
    ///
    /// # Errors
    ///
    /// - [`BuildError::DegenerateTensor`] if the tensor has no modes or no nonzeros
    /// - [`BuildError::InvalidMode`] if the target mode is not below the mode count
    /// - [`BuildError::OutOfRangeReference`] if the tensor's pointer or index arrays are
    ///   inconsistent with its nonzero count
    pub fn build<T: FiberTensor + ?Sized>(
        &self,
        tensor: &T,
    ) -> Result<Hypergraph<VecKind>, BuildError> {
        let mode = self.mode;
        let nmodes = tensor.nmodes();
        if nmodes == 0 {
            return Err(BuildError::DegenerateTensor("zero modes"));
        }
        if mode >= nmodes {
            return Err(BuildError::InvalidMode { mode, nmodes });
        }
        let nnz = tensor.nnz();
        if nnz == 0 {
            return Err(BuildError::DegenerateTensor("zero nonzeros"));
        }

        let fptr = tensor.fiber_ptr(mode);
        check_pointers(fptr, mode, nnz)?;
        let others: Vec<&[usize]> = (0..nmodes)
            .filter(|&o| o != mode)
            .map(|o| tensor.fiber_inds(mode, o))
            .collect();
        if let Some(short) = others.iter().find(|inds| inds.len() != nnz) {
            return Err(BuildError::OutOfRangeReference {
                what: "secondary index array",
                mode,
                index: short.len(),
                bound: nnz,
            });
        }

        debug!(mode = mode, nmodes = nmodes, nnz = nnz; "building fiber hypergraph");

        let (vertex_of, vertex_count) = number_vertices(&others, nnz);
        trace!(vertex_count = vertex_count; "assigned vertex ids");

        let h = collect_hyperedges(fptr, &vertex_of, vertex_count, self.vertex_weighting);
        debug!(
            vertex_count = vertex_count,
            hyperedge_count = fptr.len() - 1,
            pins = h.edge_members.len();
            "built fiber hypergraph"
        );

        Ok(Hypergraph::new(
            vertex_count,
            h.vertex_weights,
            Some(h.hyperedge_weights),
            h.edge_offsets,
            h.edge_members,
        )?)
    }
}

/// Build the fiber hypergraph of `tensor` along `mode`.
/// Shorthand for [`FiberHypergraphBuilder`].
pub fn fiber_hypergraph<T: FiberTensor + ?Sized>(
    tensor: &T,
    mode: usize,
    vertex_weighting: VertexWeighting,
) -> Result<Hypergraph<VecKind>, BuildError> {
    FiberHypergraphBuilder::new(mode)
        .vertex_weighting(vertex_weighting)
        .build(tensor)
}

fn check_pointers(fptr: &[usize], mode: usize, nnz: usize) -> Result<(), BuildError> {
    let out_of_range = |index| BuildError::OutOfRangeReference {
        what: "fiber pointer",
        mode,
        index,
        bound: nnz,
    };

    match (fptr.first(), fptr.last()) {
        (Some(&0), Some(&last)) if last == nnz => {}
        (Some(&0), Some(&last)) => return Err(out_of_range(last)),
        (Some(&first), Some(_)) => return Err(out_of_range(first)),
        _ => return Err(out_of_range(0)),
    }
    if let Some(w) = fptr.windows(2).find(|w| w[0] > w[1]) {
        return Err(out_of_range(w[1]));
    }
    Ok(())
}

/// Phase 1: map each nonzero's tuple of non-target indices to a dense vertex id.
/// Returns the vertex id of each nonzero position, and the number of vertices.
fn number_vertices(others: &[&[usize]], nnz: usize) -> (Vec<usize>, usize) {
    let mut ids: FxHashMap<Vec<usize>, usize> = FxHashMap::default();
    let mut vertex_of = Vec::with_capacity(nnz);
    let mut key = Vec::with_capacity(others.len());

    for p in 0..nnz {
        key.clear();
        key.extend(others.iter().map(|inds| inds[p]));
        let v = match ids.get(key.as_slice()) {
            Some(&v) => v,
            None => {
                let v = ids.len();
                ids.insert(key.clone(), v);
                v
            }
        };
        vertex_of.push(v);
    }

    let vertex_count = ids.len();
    (vertex_of, vertex_count)
}

struct HyperedgeArrays {
    vertex_weights: Option<VecArray<usize>>,
    hyperedge_weights: VecArray<usize>,
    edge_offsets: VecArray<usize>,
    edge_members: VecArray<usize>,
}

/// Phase 2: one hyperedge per fiber, with its distinct vertices and the weights.
fn collect_hyperedges(
    fptr: &[usize],
    vertex_of: &[usize],
    vertex_count: usize,
    vertex_weighting: VertexWeighting,
) -> HyperedgeArrays {
    let nfibers = fptr.len() - 1;
    let mut edge_offsets = Vec::with_capacity(nfibers + 1);
    let mut edge_members = Vec::with_capacity(vertex_of.len());
    let mut hyperedge_weights = Vec::with_capacity(nfibers);
    let mut vertex_weights = match vertex_weighting {
        VertexWeighting::None => None,
        VertexWeighting::FiberNnz => Some(vec![0; vertex_count]),
    };

    // last_seen[v] == f + 1 iff v is already a member of hyperedge f
    let mut last_seen = vec![0; vertex_count];
    edge_offsets.push(0);
    for (f, run) in fptr.windows(2).enumerate() {
        for &v in &vertex_of[run[0]..run[1]] {
            if let Some(w) = vertex_weights.as_mut() {
                w[v] += 1;
            }
            if last_seen[v] != f + 1 {
                last_seen[v] = f + 1;
                edge_members.push(v);
            }
        }
        edge_offsets.push(edge_members.len());
        hyperedge_weights.push(run[1] - run[0]);
    }

    HyperedgeArrays {
        vertex_weights: vertex_weights.map(VecArray),
        hyperedge_weights: VecArray(hyperedge_weights),
        edge_offsets: VecArray(edge_offsets),
        edge_members: VecArray(edge_members),
    }
}
