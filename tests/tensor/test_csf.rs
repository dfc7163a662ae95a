use fiber_hypergraphs::tensor::*;

use proptest::proptest;

use super::strategy::arb_coo_tensor;

// Rebuild the coordinates stored in the layout of `mode`, in storage order.
fn layout_coordinates(t: &CsfTensor, mode: usize) -> Vec<Vec<usize>> {
    let ptr = t.fiber_ptr(mode);
    let mut coordinates = Vec::with_capacity(t.nnz());
    for (f, run) in ptr.windows(2).enumerate() {
        for p in run[0]..run[1] {
            let coordinate = (0..t.nmodes())
                .map(|o| {
                    if o == mode {
                        t.fiber_ids(mode)[f]
                    } else {
                        t.fiber_inds(mode, o)[p]
                    }
                })
                .collect();
            coordinates.push(coordinate);
        }
    }
    coordinates
}

proptest! {
    #[test]
    fn every_layout_holds_every_nonzero(coo in arb_coo_tensor()) {
        let t = CsfTensor::from_coo(&coo);

        let mut expected: Vec<Vec<usize>> = (0..coo.nnz()).map(|n| coo.coordinate(n)).collect();
        expected.sort();

        for mode in 0..t.nmodes() {
            let ptr = t.fiber_ptr(mode);
            assert_eq!(ptr.first(), Some(&0));
            assert_eq!(ptr.last(), Some(&t.nnz()));
            assert!(ptr.windows(2).all(|w| w[0] < w[1]));

            let mut actual = layout_coordinates(&t, mode);
            actual.sort();
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn runs_share_the_mode_index(coo in arb_coo_tensor()) {
        let t = CsfTensor::from_coo(&coo);
        for mode in 0..t.nmodes() {
            // runs are distinct and ascending
            assert!(t.fiber_ids(mode).windows(2).all(|w| w[0] < w[1]));
            assert_eq!(t.nfibers(mode), t.fiber_ptr(mode).len() - 1);

            // the stored mode index matches the original coordinates
            for (f, run) in t.fiber_ptr(mode).windows(2).enumerate() {
                let id = t.fiber_ids(mode)[f];
                let count = coo.mode_inds(mode).iter().filter(|&&i| i == id).count();
                assert_eq!(run[1] - run[0], count);
            }
        }
    }
}

#[test]
fn zero_mode_tensor_has_no_layouts() {
    let coo = CooTensor::new(vec![], vec![]).unwrap();
    let t = CsfTensor::from_coo(&coo);
    assert_eq!(t.nmodes(), 0);
    assert_eq!(t.nnz(), 0);
}
