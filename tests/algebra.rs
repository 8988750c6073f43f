//! Tests for transpose, determinant, cofactor matrix and inverse.

use approx::assert_abs_diff_eq;
use densemat::{MatError, Matrix};
use rand::Rng;

fn sample() -> Matrix {
    Matrix::from_rows(&[[2.0, 5.0, 7.0], [6.0, 3.0, 4.0], [5.0, -2.0, -3.0]]).unwrap()
}

#[test]
fn transpose_twice_is_identity() {
    let mut rng = rand::thread_rng();
    for _ in 0..10 {
        let (r, c) = (rng.gen_range(1..6), rng.gen_range(1..6));
        let a = Matrix::from_fn(r, c, |_, _| rng.gen_range(-10.0..10.0)).unwrap();
        let t = a.transpose();
        assert_eq!(t.rows(), c);
        assert_eq!(t.cols(), r);
        assert_eq!(t.transpose(), a);
    }
}

#[test]
fn determinant_of_singular_3x3_is_zero() {
    let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]).unwrap();
    assert_eq!(m.determinant().unwrap(), 0.0);
}

#[test]
fn determinant_of_1x1() {
    let m = Matrix::from_rows(&[[1.0]]).unwrap();
    assert_eq!(m.determinant().unwrap(), 1.0);
}

/// Expanding along the first row of A or of A^T gives the same value.
#[test]
fn determinant_of_transpose() {
    let m = Matrix::from_rows(&[
        [3.0, 1.0, -2.0, 4.0],
        [0.5, 2.0, 1.0, 0.0],
        [1.0, -1.0, 3.0, 2.0],
        [2.0, 0.0, 1.0, 1.0],
    ])
    .unwrap();
    assert_abs_diff_eq!(m.determinant().unwrap(), m.transpose().determinant().unwrap(), epsilon = 1e-9);
}

#[test]
fn complements_3x3() {
    let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [0.0, 4.0, 2.0], [5.0, 2.0, 1.0]]).unwrap();
    let expected =
        Matrix::from_rows(&[[0.0, 10.0, -20.0], [4.0, -14.0, 8.0], [-8.0, -2.0, 4.0]]).unwrap();
    assert_eq!(m.calc_complements().unwrap(), expected);
}

#[test]
fn complements_1x1() {
    let m = Matrix::from_rows(&[[5.0]]).unwrap();
    assert_eq!(m.calc_complements().unwrap()[(0, 0)], 1.0);
}

#[test]
fn adjugate_is_transposed_complements() {
    let m = sample();
    assert_eq!(m.adjugate().unwrap(), m.calc_complements().unwrap().transpose());
}

#[test]
fn inverse_known_matrix() {
    let expected =
        Matrix::from_rows(&[[1.0, -1.0, 1.0], [-38.0, 41.0, -34.0], [27.0, -29.0, 24.0]]).unwrap();
    assert_eq!(sample().inverse().unwrap(), expected);
}

#[test]
fn inverse_times_matrix_is_identity() {
    let a = sample();
    let inv = a.inverse().unwrap();
    assert_eq!((&inv * &a).unwrap(), Matrix::identity(3).unwrap());
    assert_eq!((&a * &inv).unwrap(), Matrix::identity(3).unwrap());
}

#[test]
fn inverse_of_1x1() {
    let m = Matrix::from_rows(&[[4.0]]).unwrap();
    assert_eq!(m.inverse().unwrap()[(0, 0)], 0.25);
}

#[test]
fn inverse_of_singular_fails() {
    let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]).unwrap();
    assert_eq!(m.inverse().unwrap_err(), MatError::SingularMatrix);
}

#[test]
fn non_square_is_rejected() {
    let m = Matrix::new(3, 2).unwrap();
    assert_eq!(m.determinant().unwrap_err(), MatError::NotSquare { rows: 3, cols: 2 });
    assert_eq!(m.calc_complements().unwrap_err(), MatError::NotSquare { rows: 3, cols: 2 });
}
