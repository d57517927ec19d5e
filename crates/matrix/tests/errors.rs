//! Integration tests for MatrixError variants.

use psfmat_matrix::{
    BuildConfig, ConvMode, MatrixError, Psf, build_matrix, build_matrix_set, full_matrix,
};

#[test]
fn error_empty_filter() {
    let err = Psf::<i64>::new(Vec::new()).unwrap_err();
    assert_eq!(err, MatrixError::EmptyFilter);
}

#[test]
fn error_non_finite_coefficient() {
    let err = Psf::new(vec![0.5, 1.0, f64::NEG_INFINITY]).unwrap_err();
    assert_eq!(err, MatrixError::NonFiniteCoefficient { index: 2 });
}

#[test]
fn error_zero_length_every_mode() {
    let psf = Psf::new(vec![1_i64, 2, 1]).unwrap();
    for mode in ConvMode::ALL {
        let err = build_matrix(mode, &psf, 0, &BuildConfig::new()).unwrap_err();
        assert_eq!(err, MatrixError::ZeroLength, "mode {mode}");
    }
}

#[test]
fn error_signal_too_short() {
    let psf = Psf::new(vec![1_i64, 2, 3, 2, 1]).unwrap();
    for mode in [ConvMode::Valid, ConvMode::Circular] {
        let err = build_matrix(mode, &psf, 4, &BuildConfig::new()).unwrap_err();
        assert_eq!(err, MatrixError::SignalTooShort { n: 4, k: 5, mode });
    }
}

#[test]
fn error_even_length_centred_modes() {
    let psf = Psf::new(vec![1_i64, 1]).unwrap();
    for mode in [ConvMode::Same, ConvMode::Circular] {
        let err = build_matrix(mode, &psf, 4, &BuildConfig::new()).unwrap_err();
        assert_eq!(err, MatrixError::EvenLengthFilter { len: 2, mode });
    }
    assert!(build_matrix(ConvMode::Full, &psf, 4, &BuildConfig::new()).is_ok());
    assert!(build_matrix(ConvMode::Valid, &psf, 4, &BuildConfig::new()).is_ok());
}

#[test]
fn even_length_set_with_asymmetric_centering() {
    let psf = Psf::new(vec![1_i64, 3, 3, 1]).unwrap();
    let config = BuildConfig::new().with_asymmetric_centering(true);
    let set = build_matrix_set(&psf, 6, &config).unwrap();
    assert_eq!(set.same().shape(), (6, 6));
    set.check_consistency().unwrap();
}

#[test]
fn error_unknown_mode() {
    let err = "wrap".parse::<ConvMode>().unwrap_err();
    assert_eq!(err, MatrixError::UnknownMode("wrap".to_string()));
}

#[test]
fn error_apply_dimension_mismatch() {
    let psf = Psf::new(vec![1_i64]).unwrap();
    let full = full_matrix(&psf, 3, &BuildConfig::new()).unwrap();
    let err = full.apply(&[1, 2]).unwrap_err();
    assert_eq!(
        err,
        MatrixError::DimensionMismatch {
            expected: 3,
            got: 2
        }
    );
}

#[test]
fn error_invalid_tolerance() {
    let psf = Psf::new(vec![1_i64]).unwrap();
    let config = BuildConfig::new().with_tolerance(f64::NAN);
    let err = build_matrix_set(&psf, 3, &config).unwrap_err();
    assert!(matches!(err, MatrixError::InvalidConfig(_)));
}

#[test]
fn error_apply_overflow() {
    let psf = Psf::new(vec![100_000_i32, 100_000]).unwrap();
    let full = full_matrix(&psf, 2, &BuildConfig::new()).unwrap();
    let err = full.apply(&[100_000, 1]).unwrap_err();
    assert_eq!(err, MatrixError::Overflow { row: 0 });
}

#[test]
fn apply_same_filter_in_i64_fits() {
    let psf = Psf::new(vec![100_000_i64, 100_000]).unwrap();
    let full = full_matrix(&psf, 2, &BuildConfig::new()).unwrap();
    assert_eq!(
        full.apply(&[100_000, 1]).unwrap(),
        vec![10_000_000_000, 10_000_100_000, 100_000]
    );
}
