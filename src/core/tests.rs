#[cfg(test)]
mod tensor_tests {
    use crate::Tensor;

    #[test]
    fn view_shares_storage() {
        let a = Tensor::new(&[1, 2, 3, 4, 5, 6, 7, 8, 9], &[1, 9]).unwrap();
        let b = a.view(&[3, 3]).unwrap();

        let a_data_ptr: *const Vec<i32> = std::sync::Arc::as_ptr(&a.data);
        let b_data_ptr: *const Vec<i32> = std::sync::Arc::as_ptr(&b.data);
        assert_eq!(a_data_ptr, b_data_ptr)
    }

    #[test]
    fn new_validates_data_length() {
        assert!(Tensor::new(&[1, 2, 3], &[2, 2]).is_err())
    }

    #[test]
    fn filled_constructors() {
        let zeroed: Tensor<f32> = Tensor::zeroes(&[2, 3]);
        assert_eq!(zeroed.data().to_vec(), vec![0.0; 6]);

        assert_eq!(Tensor::same(7, &[4]).sum(), 28)
    }

    #[test]
    fn flip_reverses_data() {
        let a = Tensor::arange(1, 7, 1).unwrap().view(&[2, 3]).unwrap();
        let flipped = a.flip_all().unwrap();

        assert_eq!(flipped.data().to_vec(), vec![6, 5, 4, 3, 2, 1]);
        assert_eq!(flipped.index(&[0, 0]).unwrap(), 6)
    }

    #[test]
    fn partial_flip_indexes_correctly() {
        let a = Tensor::arange(1, 7, 1).unwrap().view(&[2, 3]).unwrap();
        let flipped = a.flip(&[1]).unwrap();

        assert_eq!(flipped.data().to_vec(), vec![3, 2, 1, 6, 5, 4])
    }

    #[test]
    fn reshape_copies_into_row_major_order() {
        let a = Tensor::arange(1, 7, 1).unwrap().view(&[2, 3]).unwrap();
        let reshaped = a.flip_all().unwrap().reshape(&[3, 2]).unwrap();

        assert_eq!(reshaped.data().to_vec(), vec![6, 5, 4, 3, 2, 1]);
        assert!(reshaped.is_contiguous())
    }

    #[test]
    fn zip_rejects_unequal_shapes() {
        let a: Tensor<i32> = Tensor::ones(&[2, 2]);
        let b: Tensor<i32> = Tensor::ones(&[4]);

        assert!((&a + &b).is_err())
    }

    #[test]
    fn operators_apply_elementwise() {
        let a = Tensor::new(&[1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
        let b = Tensor::new(&[4.0, 3.0, 2.0, 1.0], &[2, 2]).unwrap();

        let sum = (&a + &b).unwrap();
        assert_eq!(sum.data().to_vec(), vec![5.0; 4]);

        let scaled = (a * 2.0).unwrap();
        assert_eq!(scaled.data().to_vec(), vec![2.0, 4.0, 6.0, 8.0])
    }

    #[test]
    fn reductions() {
        let a = Tensor::arange(0.0, 6.0, 1.0).unwrap();

        assert_eq!(a.sum(), 15.0);
        assert_eq!(a.mean().unwrap(), 2.5)
    }

    #[test]
    fn index_validates_bounds() {
        let a = Tensor::new(&[1, 2, 3, 4], &[2, 2]).unwrap();

        assert_eq!(a.index(&[1, 0]).unwrap(), 3);
        assert!(a.index(&[2, 0]).is_err());
        assert!(a.index(&[0]).is_err())
    }
}

#[cfg(test)]
mod stencil_tests {
    use crate::{
        core::errors::{EmptyTensorError, KernelExtentError, KernelRankError},
        Boundary, Tensor,
    };

    fn samples() -> Tensor<i32> {
        Tensor::new(
            &[
                29, 54, 3, 54, 7, 49, 47, 59, 28, 23, 6, 47, //
                41, 20, 9, 40, 52, 19, 24, 50, 56, 45, 38, 8, //
                30, 3, 15, 48, 60, 58, 24, 30, 52, 29, 25, 0, //
                17, 12, 0, 45, 37, 6, 33, 17, 28, 45, 60, 19, //
                5, 23, 11, 0, 10, 49, 9, 40, 54, 26, 27, 55,
            ],
            &[5, 4, 3],
        )
        .unwrap()
    }

    fn cross() -> Tensor<i32> {
        Tensor::new(
            &[
                0, 0, 0, 0, 1, 0, 0, 0, 0, //
                0, 1, 0, 1, 1, 1, 0, 1, 0, //
                0, 0, 0, 0, 1, 0, 0, 0, 0,
            ],
            &[3, 3, 3],
        )
        .unwrap()
    }

    #[test]
    fn output_shape_matches_input() {
        let output = samples()
            .correlate(&cross(), Boundary::Constant, 0)
            .unwrap();

        assert_eq!(output.sizes(), &[5, 4, 3])
    }

    #[test]
    fn interior_cells_sum_center_and_axis_neighbors() {
        let output = samples()
            .correlate(&cross(), Boundary::Constant, 0)
            .unwrap();

        // 52 + 7 + 60 + 20 + 50 + 40 + 19
        assert_eq!(output.index(&[1, 1, 1]).unwrap(), 248);
        // 30 + 50 + 17 + 60 + 25 + 24 + 52
        assert_eq!(output.index(&[2, 2, 1]).unwrap(), 258)
    }

    #[test]
    fn corner_cells_read_fill_for_missing_neighbors() {
        let output = samples()
            .correlate(&cross(), Boundary::Constant, 0)
            .unwrap();

        // 29 + 41 + 54 + 54; the three reads past the border contribute 0
        assert_eq!(output.index(&[0, 0, 0]).unwrap(), 178);
        // 55 + 19 + 54 + 27
        assert_eq!(output.index(&[4, 3, 2]).unwrap(), 155)
    }

    #[test]
    fn symmetric_kernel_correlates_as_it_convolves() {
        let a = samples();
        let k = cross();

        let correlated = a.correlate(&k, Boundary::Constant, 0).unwrap();
        let convolved = a.convolve(&k, Boundary::Constant, 0).unwrap();

        assert_eq!(correlated, convolved)
    }

    #[test]
    fn asymmetric_kernel_distinguishes_the_two() {
        let a = Tensor::new_1d(&[1, 2, 3]);
        let k = Tensor::new_1d(&[1, 0, 0]);

        let correlated = a.correlate(&k, Boundary::Constant, 0).unwrap();
        let convolved = a.convolve(&k, Boundary::Constant, 0).unwrap();

        assert_eq!(correlated.data().to_vec(), vec![0, 1, 2]);
        assert_eq!(convolved.data().to_vec(), vec![2, 3, 0])
    }

    #[test]
    fn even_extent_kernel_is_rejected() {
        let err = samples()
            .correlate(&Tensor::ones(&[3, 3, 4]), Boundary::Constant, 0)
            .unwrap_err();

        assert!(err.downcast_ref::<KernelExtentError>().is_some())
    }

    #[test]
    fn rank_mismatch_is_rejected() {
        let err = samples()
            .correlate(&Tensor::ones(&[3, 3]), Boundary::Constant, 0)
            .unwrap_err();

        assert!(err.downcast_ref::<KernelRankError>().is_some())
    }

    #[test]
    fn empty_input_is_rejected() {
        let empty: Tensor<i32> = Tensor::new(&[], &[0]).unwrap();
        let err = empty
            .correlate(&Tensor::ones(&[1]), Boundary::Constant, 0)
            .unwrap_err();

        assert!(err.downcast_ref::<EmptyTensorError>().is_some())
    }

    #[test]
    fn mean_weights_corrupt_borders_under_constant_fill() {
        let a = samples().unary_map(|elem| elem as f64);
        let k = (cross().unary_map(|elem| elem as f64) / 7.0).unwrap();

        let output = a.correlate(&k, Boundary::Constant, 0.0).unwrap();

        // Interior cells become true neighborhood means.
        let interior = output.index(&[1, 1, 1]).unwrap();
        assert!((interior - 248.0 / 7.0).abs() < 1e-9);

        // The corner has only four real members, but the denominator stays 7.
        let corner = output.index(&[0, 0, 0]).unwrap();
        assert!((corner - 178.0 / 7.0).abs() < 1e-9);
        assert!((corner - 178.0 / 4.0).abs() > 1.0)
    }
}

#[cfg(test)]
mod boundary_tests {
    use crate::{Boundary, Tensor};

    fn line() -> Tensor<i32> {
        Tensor::new_1d(&[1, 2, 3])
    }

    fn box_3() -> Tensor<i32> {
        Tensor::ones(&[3])
    }

    #[test]
    fn constant_reads_fill() {
        let out = line().correlate(&box_3(), Boundary::Constant, 0).unwrap();
        assert_eq!(out.data().to_vec(), vec![3, 6, 5]);

        let filled = line().correlate(&box_3(), Boundary::Constant, 10).unwrap();
        assert_eq!(filled.data().to_vec(), vec![13, 6, 15])
    }

    #[test]
    fn nearest_clamps_to_edges() {
        let out = line().correlate(&box_3(), Boundary::Nearest, 0).unwrap();
        assert_eq!(out.data().to_vec(), vec![4, 6, 8])
    }

    #[test]
    fn wrap_is_periodic() {
        let out = line().correlate(&box_3(), Boundary::Wrap, 0).unwrap();
        assert_eq!(out.data().to_vec(), vec![6, 6, 6])
    }

    #[test]
    fn reflect_mirrors_half_sample() {
        let out = line().correlate(&box_3(), Boundary::Reflect, 0).unwrap();
        assert_eq!(out.data().to_vec(), vec![4, 6, 8]);

        // A window wider than the array folds back instead of clamping.
        let wide = line()
            .correlate(&Tensor::ones(&[5]), Boundary::Reflect, 0)
            .unwrap();
        let clamped = line()
            .correlate(&Tensor::ones(&[5]), Boundary::Nearest, 0)
            .unwrap();

        assert_eq!(wide.data().to_vec(), vec![9, 10, 11]);
        assert_eq!(clamped.data().to_vec(), vec![8, 10, 12])
    }

    #[test]
    fn modes_parse_from_names() {
        assert_eq!("constant".parse::<Boundary>().unwrap(), Boundary::Constant);
        assert_eq!("reflect".parse::<Boundary>().unwrap(), Boundary::Reflect);
        assert_eq!("nearest".parse::<Boundary>().unwrap(), Boundary::Nearest);
        assert_eq!("wrap".parse::<Boundary>().unwrap(), Boundary::Wrap);
        assert!("mirror".parse::<Boundary>().is_err())
    }
}
