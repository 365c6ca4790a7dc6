use algebris::linalg::{gauss_jordan, gauss_jordan_flat};
use algebris::{Algebraic, Element, FlatMatrix, Matrix, MatrixError};

const TOL: f64 = 1e-9;

fn a_rows() -> [[f64; 4]; 4] {
    [
        [0.5, -2.0, -30.0, 20.0],
        [15.0, 2.1, 4.0, 3.0],
        [3.0, 2.0, 1.0, 3.0],
        [4.0, -4.0, 3.0, 2.0],
    ]
}

const A_INV: [[f64; 4]; 4] = [
    [0.0068357113280509, 0.097412395516784, -0.13109967926899, -0.017826187652207],
    [-0.0092640030318555, 0.01172036747212, 0.15713714233579, -0.16064623439331],
    [-0.027034045211142, -0.05670692764954, 0.18582747899808, 0.076659625088605],
    [0.0083516390969001, -0.086323664615018, 0.29773242471243, 0.099370468884881],
];

fn assert_cells_near(m: &Matrix, expected: &[[f64; 4]; 4], tol: f64) {
    for (i, row) in expected.iter().enumerate() {
        for (j, &e) in row.iter().enumerate() {
            let got = m[(i, j)].to_f64();
            assert!(
                (got - e).abs() < tol,
                "({}, {}): {} vs {}",
                i,
                j,
                got,
                e
            );
        }
    }
}

// ── Determinant ──────────────────────────────────────────────────────

#[test]
fn determinant_generic() {
    let a = Matrix::new(a_rows());
    let det = a.determinant().unwrap().to_f64();
    assert!((det + 7124.35).abs() < 1e-8, "det = {}", det);
}

#[test]
fn determinant_flat() {
    let a = FlatMatrix::new(a_rows());
    let det = a.determinant().unwrap();
    assert!((det + 7124.35).abs() < 1e-8, "det = {}", det);
}

#[test]
fn determinant_of_one_by_one() {
    assert_eq!(
        Matrix::new([[-3.25]]).determinant().unwrap(),
        Element::from(-3.25)
    );
}

// ── Inverse ──────────────────────────────────────────────────────────

#[test]
fn inverse_generic() {
    let inv = Matrix::new(a_rows()).inverse().unwrap();
    assert_cells_near(&inv, &A_INV, TOL);
}

#[test]
fn inverse_flat() {
    let inv = FlatMatrix::new(a_rows()).inverse().unwrap();
    for (i, row) in A_INV.iter().enumerate() {
        for (j, &e) in row.iter().enumerate() {
            assert!((inv[(i, j)] - e).abs() < TOL, "({}, {})", i, j);
        }
    }
}

#[test]
fn round_trip_generic() {
    let a = Matrix::new(a_rows());
    let product = a.try_mul(&a.inverse().unwrap()).unwrap();
    assert_eq!(product.to_flat(), a.to_unit().to_flat());
}

#[test]
fn round_trip_flat() {
    let a = FlatMatrix::new(a_rows());
    assert_eq!(a.try_mul(&a.inverse().unwrap()).unwrap(), a.to_unit());
}

#[test]
fn solver_matches_inverse() {
    let a = Matrix::new(a_rows());
    assert_eq!(gauss_jordan(&a, &a.to_unit()).unwrap(), a.inverse().unwrap());

    let f = FlatMatrix::new(a_rows());
    assert_eq!(gauss_jordan_flat(&f, &f.to_unit()).unwrap(), f.inverse().unwrap());
}

#[test]
fn generic_and_flat_paths_agree() {
    let generic = Matrix::new(a_rows()).inverse().unwrap().to_flat();
    let flat = FlatMatrix::new(a_rows()).inverse().unwrap();
    assert_eq!(generic, flat);
}

// ── Shape operations ─────────────────────────────────────────────────

#[test]
fn transpose_is_an_involution() {
    let a = Matrix::new(a_rows());
    assert_eq!(a.transpose().transpose(), a);
    assert_eq!(a.transpose()[(0, 1)], Element::from(15.0));

    let r = Matrix::new([[1.0, 2.0, 3.0]]);
    assert_eq!(r.transpose().transpose(), r);
}

#[test]
fn unit_and_zero_of_numeric_matrix() {
    let a = Matrix::new(a_rows());
    let zero = a.to_zero();
    assert_eq!(zero.size(), (4, 4));
    assert!(zero.is_zero());
    assert_eq!(a.to_unit(), Matrix::identity(4));

    let f = FlatMatrix::new(a_rows());
    assert!(f.to_zero().is_zero());
    assert_eq!(f.to_unit(), FlatMatrix::eye(4));
}

// ── Failures ─────────────────────────────────────────────────────────

#[test]
fn mismatched_inner_dimensions() {
    let a = Matrix::new(a_rows());
    let b = Matrix::new([[1.0, 2.0, 3.0]]);
    assert_eq!(
        a.try_mul(&b),
        Err(MatrixError::NotConformable {
            left: (4, 4),
            right: (1, 3)
        })
    );
    assert!(matches!(
        FlatMatrix::new(a_rows()).try_mul(&FlatMatrix::zeros(3, 1)),
        Err(MatrixError::NotConformable { .. })
    ));
}

#[test]
fn zero_row_is_singular_for_any_rhs() {
    let a = Matrix::new([[1.0, 0.0], [0.0, 0.0]]);
    for rhs in [Matrix::identity(2), Matrix::new([[3.0], [4.0]]), Matrix::zeros(2, 5)] {
        assert_eq!(gauss_jordan(&a, &rhs), Err(MatrixError::Singular));
    }
}

#[test]
fn non_square_inverse() {
    assert_eq!(
        Matrix::zeros(2, 3).inverse(),
        Err(MatrixError::NotSquare { rows: 2, cols: 3 })
    );
}

// ── Text forms ───────────────────────────────────────────────────────

#[test]
fn plain_and_word_math_forms() {
    let a = Matrix::new(a_rows());
    assert_eq!(
        a.to_string(),
        "[0.50, -2.00, -30.00, 20.00]\n\
         [15.00, 2.10, 4.00, 3.00]\n\
         [3.00, 2.00, 1.00, 3.00]\n\
         [4.00, -4.00, 3.00, 2.00]"
    );
    assert_eq!(
        Matrix::new([[1.0, 2.0], [3.0, 4.0]]).to_word_math_string(),
        "[■(1.00&2.00@3.00&4.00)]"
    );
    assert_eq!(FlatMatrix::new(a_rows()).to_string(), a.to_string());
}

#[test]
fn decimal_ties_round_away_from_zero() {
    let rows = [[0.0625, 1.0625, -0.3125]];
    assert_eq!(Matrix::new(rows).to_string(), "[0.063, 1.063, -0.313]");
    assert_eq!(FlatMatrix::new(rows).to_string(), "[0.063, 1.063, -0.313]");
    assert_eq!(
        Matrix::new(rows).to_word_math_string(),
        "[■(0.063&1.063&-0.313)]"
    );
}
