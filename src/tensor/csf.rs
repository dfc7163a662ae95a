use super::{CooTensor, FiberTensor};

/// One mode's compressed layout: nonzeros reordered so that runs share this mode's index.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ModeLayout {
    /// `ptr[f]..ptr[f+1]` are the nonzeros of run `f`
    ptr: Vec<usize>,
    /// the index along this mode shared by run `f`
    fids: Vec<usize>,
    /// `inds[o][p]` is the index along mode `o` of the nonzero at position `p`
    inds: Vec<Vec<usize>>,
}

/// A compressed, fiber-structured sparse tensor storing one layout per mode.
///
/// In the layout of mode `m`, nonzeros are sorted by their index along `m`, then by the remaining
/// modes in ascending mode order; ties keep their coordinate order. Runs of nonzeros sharing the
/// index along `m` are delimited by [`FiberTensor::fiber_ptr`].
///
/// ```rust
/// # use fiber_hypergraphs::tensor::*;
/// let coo = CooTensor::from_coordinates(vec![2, 2], &[[1, 0], [0, 1], [0, 0]]).unwrap();
/// let t = CsfTensor::from_coo(&coo);
/// assert_eq!(t.fiber_ptr(0), &[0, 2, 3]);
/// assert_eq!(t.fiber_ids(0), &[0, 1]);
/// assert_eq!(t.fiber_inds(0, 1), &[0, 1, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsfTensor {
    dims: Vec<usize>,
    nnz: usize,
    layouts: Vec<ModeLayout>,
}

impl CsfTensor {
    pub fn from_coo(coo: &CooTensor) -> Self {
        let layouts = (0..coo.nmodes())
            .map(|mode| ModeLayout::new(coo, mode))
            .collect();
        CsfTensor {
            dims: coo.dims().to_vec(),
            nnz: coo.nnz(),
            layouts,
        }
    }

    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Number of runs in the layout of `mode`.
    pub fn nfibers(&self, mode: usize) -> usize {
        self.layouts[mode].fids.len()
    }

    /// The index along `mode` shared by each run of `mode`'s layout.
    pub fn fiber_ids(&self, mode: usize) -> &[usize] {
        &self.layouts[mode].fids
    }
}

impl ModeLayout {
    fn new(coo: &CooTensor, mode: usize) -> Self {
        let nmodes = coo.nmodes();
        let key_modes: Vec<usize> = std::iter::once(mode)
            .chain((0..nmodes).filter(|&o| o != mode))
            .collect();

        // stable sort keeps coordinate order between duplicate nonzeros
        let mut perm: Vec<usize> = (0..coo.nnz()).collect();
        perm.sort_by(|&a, &b| {
            key_modes
                .iter()
                .map(|&o| coo.mode_inds(o)[a].cmp(&coo.mode_inds(o)[b]))
                .find(|ord| ord.is_ne())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let inds: Vec<Vec<usize>> = (0..nmodes)
            .map(|o| {
                let mode_inds = coo.mode_inds(o);
                perm.iter().map(|&n| mode_inds[n]).collect()
            })
            .collect();

        let mut ptr = vec![0];
        let mut fids = Vec::new();
        for (p, &i) in inds[mode].iter().enumerate() {
            if fids.last() != Some(&i) {
                if p > 0 {
                    ptr.push(p);
                }
                fids.push(i);
            }
        }
        if !fids.is_empty() {
            ptr.push(coo.nnz());
        }

        ModeLayout { ptr, fids, inds }
    }
}

impl FiberTensor for CsfTensor {
    fn nmodes(&self) -> usize {
        self.dims.len()
    }

    fn nnz(&self) -> usize {
        self.nnz
    }

    fn fiber_ptr(&self, mode: usize) -> &[usize] {
        &self.layouts[mode].ptr
    }

    fn fiber_inds(&self, mode: usize, other: usize) -> &[usize] {
        &self.layouts[mode].inds[other]
    }
}
