//! Worked examples with hand-checked matrices.

use psfmat_matrix::{
    BuildConfig, ConvMode, Psf, build_matrix_set, circular_matrix, full_matrix, valid_matrix,
};

#[test]
fn binomial_full_impulse_response() {
    let psf = Psf::new(vec![1_i64, 2, 1]).unwrap();
    let full = full_matrix(&psf, 5, &BuildConfig::new()).unwrap();
    assert_eq!(full.shape(), (7, 5));
    assert_eq!(
        full.apply(&[1, 0, 0, 0, 0]).unwrap(),
        vec![1, 2, 1, 0, 0, 0, 0]
    );
}

#[test]
fn two_tap_running_sum() {
    let psf = Psf::new(vec![1_i64, 1]).unwrap();
    let full = full_matrix(&psf, 3, &BuildConfig::new()).unwrap();
    assert_eq!(full.apply(&[1, 2, 3]).unwrap(), vec![1, 3, 5, 3]);
}

#[test]
fn binomial_circular_first_row() {
    let psf = Psf::new(vec![1_i64, 2, 1]).unwrap();
    let circular = circular_matrix(&psf, 5, &BuildConfig::new()).unwrap();
    // 1-indexed C[1,1] = 2, C[1,2] = 1, C[1,5] = 1
    assert_eq!(circular.get(0, 0), Some(2));
    assert_eq!(circular.get(0, 1), Some(1));
    assert_eq!(circular.get(0, 4), Some(1));
    assert_eq!(circular.row(0).unwrap().to_vec(), vec![2, 1, 0, 0, 1]);
}

#[test]
fn circular_impulse_wraps_tail_to_end() {
    let psf = Psf::new(vec![3_i64, 5, 7]).unwrap();
    let circular = circular_matrix(&psf, 6, &BuildConfig::new()).unwrap();
    let y = circular.apply(&[1, 0, 0, 0, 0, 0]).unwrap();
    // centre tap at 0, +1 tap at 1, -1 tap wrapped to the last sample
    assert_eq!(y, vec![5, 7, 0, 0, 0, 3]);
}

#[test]
fn full_impulse_reproduces_filter() {
    let coeffs = vec![2_i64, -3, 0, 7, 1];
    let psf = Psf::new(coeffs.clone()).unwrap();
    let full = full_matrix(&psf, 6, &BuildConfig::new()).unwrap();
    let mut impulse = vec![0; 6];
    impulse[0] = 1;
    let y = full.apply(&impulse).unwrap();
    assert_eq!(&y[..5], coeffs.as_slice());
    assert!(y[5..].iter().all(|&v| v == 0));
}

#[test]
fn valid_single_row_is_reversed_filter() {
    let psf = Psf::new(vec![1_i64, 2, 3, 4, 5]).unwrap();
    let valid = valid_matrix(&psf, 5, &BuildConfig::new()).unwrap();
    assert_eq!(valid.to_rows(), vec![vec![5, 4, 3, 2, 1]]);
}

#[test]
fn smoothing_set_on_a_step() {
    let psf = Psf::new(vec![1_i64, 2, 1]).unwrap();
    let set = build_matrix_set(&psf, 6, &BuildConfig::new()).unwrap();
    let step = [0, 0, 0, 4, 4, 4];

    assert_eq!(
        set.get(ConvMode::Full).apply(&step).unwrap(),
        vec![0, 0, 0, 4, 12, 16, 12, 4]
    );
    assert_eq!(
        set.get(ConvMode::Same).apply(&step).unwrap(),
        vec![0, 0, 4, 12, 16, 12]
    );
    assert_eq!(
        set.get(ConvMode::Valid).apply(&step).unwrap(),
        vec![0, 4, 12, 16]
    );
    assert_eq!(
        set.get(ConvMode::Circular).apply(&step).unwrap(),
        vec![4, 0, 4, 12, 16, 12]
    );
}
