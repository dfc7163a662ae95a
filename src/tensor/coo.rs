use thiserror::Error;

/// Ways in which coordinate data can fail to describe a sparse tensor.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidTensor {
    #[error("{modes} index arrays given for a tensor with {dims} dimensions")]
    ModeCount { modes: usize, dims: usize },
    #[error("mode {mode} has {len} indices but mode 0 has {nnz}")]
    Ragged { mode: usize, len: usize, nnz: usize },
    #[error("coordinate {nnz} has {len} indices for a tensor with {nmodes} modes")]
    CoordinateLength { nnz: usize, len: usize, nmodes: usize },
    #[error("nonzero {nnz} has index {index} in mode {mode} of length {dim}")]
    IndexOutOfRange {
        nnz: usize,
        mode: usize,
        index: usize,
        dim: usize,
    },
}

/// The nonzero pattern of a sparse tensor in coordinate form: `inds[m][n]` is the index of
/// nonzero `n` along mode `m`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CooTensor {
    dims: Vec<usize>,
    inds: Vec<Vec<usize>>,
}

impl CooTensor {
    /// Create a tensor from per-mode index arrays, checking every index against its dimension.
    pub fn new(dims: Vec<usize>, inds: Vec<Vec<usize>>) -> Result<Self, InvalidTensor> {
        if inds.len() != dims.len() {
            return Err(InvalidTensor::ModeCount {
                modes: inds.len(),
                dims: dims.len(),
            });
        }

        let nnz = inds.first().map_or(0, Vec::len);
        for (mode, (mode_inds, &dim)) in inds.iter().zip(&dims).enumerate() {
            if mode_inds.len() != nnz {
                return Err(InvalidTensor::Ragged {
                    mode,
                    len: mode_inds.len(),
                    nnz,
                });
            }
            if let Some(n) = mode_inds.iter().position(|&i| i >= dim) {
                return Err(InvalidTensor::IndexOutOfRange {
                    nnz: n,
                    mode,
                    index: mode_inds[n],
                    dim,
                });
            }
        }

        Ok(CooTensor { dims, inds })
    }

    /// Create a tensor from a list of nonzero coordinates, one index per mode each.
    ///
    /// ```rust
    /// # use fiber_hypergraphs::tensor::CooTensor;
    /// let t = CooTensor::from_coordinates(vec![2, 2], &[[0, 0], [0, 1], [1, 0]]).unwrap();
    /// assert_eq!(t.nnz(), 3);
    /// assert_eq!(t.mode_inds(1), &[0, 1, 0]);
    /// ```
    pub fn from_coordinates<C: AsRef<[usize]>>(
        dims: Vec<usize>,
        coordinates: &[C],
    ) -> Result<Self, InvalidTensor> {
        let mut inds = vec![Vec::with_capacity(coordinates.len()); dims.len()];
        for (n, coordinate) in coordinates.iter().enumerate() {
            let coordinate = coordinate.as_ref();
            if coordinate.len() != dims.len() {
                return Err(InvalidTensor::CoordinateLength {
                    nnz: n,
                    len: coordinate.len(),
                    nmodes: dims.len(),
                });
            }
            for (mode_inds, &i) in inds.iter_mut().zip(coordinate) {
                mode_inds.push(i);
            }
        }
        Self::new(dims, inds)
    }

    pub fn nmodes(&self) -> usize {
        self.dims.len()
    }

    pub fn nnz(&self) -> usize {
        self.inds.first().map_or(0, Vec::len)
    }

    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Indices of every nonzero along `mode`.
    pub fn mode_inds(&self, mode: usize) -> &[usize] {
        &self.inds[mode]
    }

    /// Coordinates of nonzero `n`.
    pub fn coordinate(&self, n: usize) -> Vec<usize> {
        self.inds.iter().map(|mode_inds| mode_inds[n]).collect()
    }
}
