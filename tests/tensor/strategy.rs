use fiber_hypergraphs::tensor::*;

use proptest::collection::vec;
use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy};

const MAX_MODES: usize = 4;
const MAX_DIM: usize = 4;
const MAX_NNZ: usize = 24;

/// Dimensions of a tensor with `1..=MAX_MODES` modes.
pub fn arb_dims() -> BoxedStrategy<Vec<usize>> {
    vec(1..=MAX_DIM, 1..=MAX_MODES).boxed()
}

/// A coordinate tensor with at least one nonzero. Nonzeros may repeat.
pub fn arb_coo_tensor() -> BoxedStrategy<CooTensor> {
    arb_dims()
        .prop_flat_map(|dims| {
            let coordinate: Vec<BoxedStrategy<usize>> =
                dims.iter().map(|&d| (0..d).boxed()).collect();
            (Just(dims), vec(coordinate, 1..=MAX_NNZ))
        })
        .prop_map(|(dims, coordinates)| {
            CooTensor::from_coordinates(dims, &coordinates).expect("indices below dims")
        })
        .boxed()
}

/// A coordinate tensor together with a valid target mode.
pub fn arb_coo_tensor_and_mode() -> BoxedStrategy<(CooTensor, usize)> {
    arb_coo_tensor()
        .prop_flat_map(|t| {
            let nmodes = t.nmodes();
            (Just(t), 0..nmodes)
        })
        .boxed()
}
