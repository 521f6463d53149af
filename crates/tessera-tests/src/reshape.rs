//! Reshape tests
//!
//! A reshape is a metadata change: the value at flat offset `k` stays at
//! offset `k` and is reachable through whichever coordinate maps to `k`
//! under the new shape.

#[cfg(test)]
mod tests {
    use crate::utils::*;
    use proptest::prelude::*;
    use tessera_array::{Array, ErrorKind, NdArray, TesseraError};

    #[test]
    fn test_reshape_2x6_to_3x4() {
        init_logging();
        let mut arr = NdArray::new(&[2, 6]).unwrap();
        arr.set(1.0, &[0, 5]).unwrap();
        arr.set(2.0, &[1, 0]).unwrap();
        arr.set(3.0, &[1, 5]).unwrap();

        arr.reshape(&[3, 4]).unwrap();
        assert_eq!(arr.shape(), &[3, 4]);
        assert_eq!(arr.size(), 12);

        // offsets 5, 6, 11
        assert_eq!(arr.get(&[1, 1]).unwrap(), 1.0);
        assert_eq!(arr.get(&[1, 2]).unwrap(), 2.0);
        assert_eq!(arr.get(&[2, 3]).unwrap(), 3.0);
    }

    #[test]
    fn test_reshape_changes_rank() {
        let mut arr = NdArray::full(4.0, &[24]).unwrap();
        arr.reshape(&[2, 3, 4]).unwrap();
        assert_eq!(arr.ndim(), 3);
        assert_eq!(arr.strides(), &[12, 4, 1]);
        arr.reshape(&[1, 1, 24, 1]).unwrap();
        assert_eq!(arr.get(&[0, 0, 23, 0]).unwrap(), 4.0);
    }

    #[test]
    fn test_reshape_mismatch_reports_counts() {
        let mut arr = NdArray::ones(&[2, 6]).unwrap();
        let err = arr.reshape(&[4, 4]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
        match err {
            TesseraError::ShapeMismatch {
                size, requested, ..
            } => {
                assert_eq!(size, 12);
                assert_eq!(requested, 16);
            }
            other => panic!("unexpected error {other}"),
        }
        assert_eq!(arr.shape(), &[2, 6]);
        assert_eq!(arr.size(), 12);
    }

    #[test]
    fn test_reshape_then_get_out_of_bounds() {
        let mut arr = NdArray::new(&[2, 6]).unwrap();
        arr.reshape(&[3, 4]).unwrap();
        assert_eq!(
            arr.get(&[0, 5]).unwrap_err(),
            TesseraError::IndexOutOfBounds {
                index: 5,
                axis: 1,
                size: 4
            }
        );
    }

    fn shape_and_factorization() -> impl Strategy<Value = (Vec<usize>, Vec<usize>)> {
        prop::collection::vec(1usize..=4, 1..=4).prop_flat_map(|factors| {
            let len = factors.len();
            (Just(factors), prop::sample::subsequence((0..len).collect::<Vec<_>>(), 0..=len))
        })
        .prop_map(|(factors, split)| {
            // group the factors two ways to get two shapes with equal product
            let old = factors.clone();
            let mut new = Vec::new();
            let mut acc = 1;
            for (i, f) in factors.iter().enumerate() {
                acc *= f;
                if split.contains(&i) || i + 1 == factors.len() {
                    new.push(acc);
                    acc = 1;
                }
            }
            (old, new)
        })
    }

    proptest! {
        #[test]
        fn prop_reshape_preserves_buffer((old, new) in shape_and_factorization()) {
            let size: usize = old.iter().product();
            let data: Vec<f64> = (0..size).map(|k| k as f64).collect();
            let mut arr = NdArray::from_vec(data.clone(), &old).unwrap();

            arr.reshape(&new).unwrap();
            prop_assert_eq!(arr.shape(), new.as_slice());
            prop_assert_eq!(arr.size(), size);
            prop_assert_eq!(arr.as_slice(), data.as_slice());

            for (k, coord) in coordinates(&new).iter().enumerate() {
                prop_assert_eq!(arr.layout().offset(coord).unwrap(), k);
                prop_assert_eq!(arr.get(coord).unwrap(), k as f64);
            }
        }

        #[test]
        fn prop_reshape_mismatch_leaves_array(
            shape in prop::collection::vec(1usize..=4, 1..=4),
            extra in 1usize..4,
        ) {
            let size: usize = shape.iter().product();
            let data: Vec<f64> = (0..size).map(|k| k as f64 * 0.5).collect();
            let mut arr = NdArray::from_vec(data, &shape).unwrap();
            let before = arr.clone();

            let err = arr.reshape(&[size + extra]).unwrap_err();
            prop_assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
            prop_assert_eq!(&arr, &before);
            prop_assert_eq!(arr.strides(), before.strides());
        }
    }
}
