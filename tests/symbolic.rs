use algebris::linalg::gauss_jordan;
use algebris::{Algebraic, Element, Expression, FlatMatrix, Limit, Matrix, Piece, Polynomial};

const TOL: f64 = 1e-9;

fn cubic(coeffs: [f64; 4]) -> Polynomial {
    Polynomial::new(&coeffs)
}

fn piecewise(pieces: [([f64; 4], f64, f64); 3]) -> Expression {
    Expression::from_pieces(
        pieces
            .into_iter()
            .map(|(c, a, b)| Piece::polynomial(cubic(c), Limit::new(a, b))),
    )
}

fn assert_pieces_near(e: &Expression, expected: &[([f64; 4], f64, f64)]) {
    assert_eq!(e.pieces().len(), expected.len(), "piece count of {}", e);
    for (piece, (coeffs, a, b)) in e.pieces().iter().zip(expected) {
        assert_eq!(piece.limit(), Limit::new(*a, *b));
        assert_eq!(piece.denominator(), &Polynomial::one());
        let got = piece.numerator().coeffs();
        for (k, &c) in coeffs.iter().enumerate() {
            let g = got.get(k).copied().unwrap_or(0.0);
            assert!(
                (g - c).abs() < TOL,
                "coefficient {} on [{}, {}]: {} vs {}",
                k,
                a,
                b,
                g,
                c
            );
        }
    }
}

// ── Elimination with piecewise right-hand sides ──────────────────────

#[test]
fn gaussian_elimination_with_expressions() {
    let p1 = [0.0, 572.0 / 45.0, 0.0, -11.0 / 90.0];
    let p2 = [-32.0 / 3.0, 932.0 / 45.0, -2.0, 2.0 / 45.0];
    let p3 = [0.0, 63.0 / 5.0, 0.0, -1.0 / 15.0];
    let p4 = [-243.0 / 2.0, 531.0 / 10.0, -9.0 / 2.0, 1.0 / 10.0];

    let a = Matrix::new([
        [1936.0 / 45.0, 692.0 / 15.0],
        [692.0 / 15.0, 324.0 / 5.0],
    ]);
    let e1 = piecewise([(p1, 0.0, 4.0), (p2, 4.0, 9.0), (p2, 9.0, 15.0)]);
    let e2 = piecewise([(p3, 0.0, 4.0), (p3, 4.0, 9.0), (p4, 9.0, 15.0)]);
    let b = Matrix::from_expressions(vec![vec![e1], vec![e2]]).unwrap();

    let x = gauss_jordan(&a, &b).unwrap();
    assert_eq!(x.size(), (2, 1));

    assert_pieces_near(
        x[(0, 0)].as_expression().unwrap(),
        &[
            ([0.0, 2727.0 / 7420.0, 0.0, -109.0 / 14840.0], 0.0, 4.0),
            (
                [-1944.0 / 1855.0, 8559.0 / 7420.0, -729.0 / 3710.0, 67.0 / 7420.0],
                4.0,
                9.0,
            ),
            (
                [3159.0 / 424.0, -24921.0 / 14840.0, 351.0 / 2968.0, -39.0 / 14840.0],
                9.0,
                15.0,
            ),
        ],
    );
    assert_pieces_near(
        x[(1, 0)].as_expression().unwrap(),
        &[
            ([0.0, -374.0 / 5565.0, 0.0, 187.0 / 44520.0], 0.0, 4.0),
            (
                [1384.0 / 1855.0, -3488.0 / 5565.0, 519.0 / 3710.0, -83.0 / 11130.0],
                4.0,
                9.0,
            ),
            (
                [-761.0 / 106.0, 22427.0 / 11130.0, -57.0 / 371.0, 19.0 / 5565.0],
                9.0,
                15.0,
            ),
        ],
    );
}

#[test]
fn solution_satisfies_system_pointwise() {
    let a = Matrix::new([[2.0, 1.0], [1.0, 3.0]]);
    let ramp = Expression::bounded(Polynomial::new(&[0.0, 1.0]), Limit::new(0.0, 10.0));
    let square = Expression::bounded(Polynomial::new(&[0.0, 0.0, 1.0]), Limit::new(0.0, 10.0));
    let b = Matrix::from_expressions(vec![vec![ramp.clone()], vec![square.clone()]]).unwrap();

    let x = a.solve(&b).unwrap();
    let x0 = x[(0, 0)].as_expression().unwrap();
    let x1 = x[(1, 0)].as_expression().unwrap();
    for t in [0.0, 1.5, 4.0, 10.0] {
        let (v0, v1) = (x0.evaluate(t).unwrap(), x1.evaluate(t).unwrap());
        assert!((2.0 * v0 + v1 - ramp.evaluate(t).unwrap()).abs() < TOL);
        assert!((v0 + 3.0 * v1 - square.evaluate(t).unwrap()).abs() < TOL);
    }
}

#[test]
fn number_plus_bounded_expression_keeps_constant_outside() {
    let ramp = Expression::bounded(Polynomial::new(&[0.0, 1.0]), Limit::new(0.0, 2.0));
    let one = Element::from(1.0);
    let sum = Element::from(ramp.clone()).try_add(&one).unwrap();
    assert_eq!(
        sum,
        Element::from(&ramp + &Expression::constant(1.0))
    );
    assert_eq!(sum, one.try_add(&Element::from(ramp)).unwrap());
    assert_eq!(sum.as_expression().unwrap().evaluate(5.0), Some(1.0));
}

#[test]
fn mixed_numeric_and_symbolic_right_hand_side() {
    // x0 + x1 = 1, x1 = ramp  =>  x0 = 1 - ramp
    let ramp = Expression::bounded(Polynomial::new(&[0.0, 1.0]), Limit::new(0.0, 2.0));
    let a = Matrix::new([[1.0, 1.0], [0.0, 1.0]]);
    let b = Matrix::from_rows(vec![
        vec![Element::from(1.0)],
        vec![Element::from(ramp)],
    ])
    .unwrap();

    let x = a.solve(&b).unwrap();
    let x0 = x[(0, 0)].as_expression().unwrap();
    let x1 = x[(1, 0)].as_expression().unwrap();
    assert_eq!(x0.evaluate(5.0), Some(1.0));
    assert_eq!(x0.evaluate(1.5), Some(-0.5));
    assert_eq!(x1.evaluate(1.5), Some(1.5));
    assert_eq!(x1.evaluate(5.0), None);
}

#[test]
fn mixed_numeric_and_symbolic_product() {
    let ramp = Expression::polynomial(Polynomial::new(&[0.0, 1.0]));
    let row = Matrix::from_rows(vec![vec![Element::from(2.0), Element::from(ramp.clone())]]).unwrap();
    let col = Matrix::from_rows(vec![
        vec![Element::from(ramp.clone())],
        vec![Element::from(3.0)],
    ])
    .unwrap();

    // 2·x + x·3 = 5x
    let p = row.try_mul(&col).unwrap();
    let e = p[(0, 0)].as_expression().unwrap();
    assert_eq!(e.evaluate(2.0), Some(10.0));
    assert_eq!(e.to_string(), "5.00x");
}

#[test]
fn symbolic_determinant() {
    // det [[x, 1], [1, x]] = x² - 1
    let x = Expression::polynomial(Polynomial::new(&[0.0, 1.0]));
    let one = Expression::constant(1.0);
    let m = Matrix::from_expressions(vec![vec![x.clone(), one.clone()], vec![one, x]]).unwrap();
    let det = m.determinant().unwrap();
    let e = det.as_expression().unwrap();
    assert_eq!(e.evaluate(3.0), Some(8.0));
    assert_eq!(e.evaluate(-1.0), Some(0.0));
}

#[test]
fn expression_cells_in_word_math() {
    let e = Expression::from_pieces([
        Piece::polynomial(Polynomial::new(&[0.0, 2.0]), Limit::new(0.0, 4.0)),
        Piece::polynomial(Polynomial::constant(8.0), Limit::new(4.0, 9.0)),
    ]);
    let m = Matrix::from_rows(vec![vec![Element::from(e), Element::from(1.0)]]).unwrap();
    assert_eq!(
        m.to_word_math_string_piecewise(),
        "[■({■(2.00x&0.00≤x≤4.00@8.00&4.00≤x≤9.00)┤&1.00)]"
    );
}

// ── Block matrices ───────────────────────────────────────────────────

fn block(rows: [[f64; 2]; 2]) -> Element {
    Element::from(Matrix::new(rows))
}

/// Expand a 2x2 matrix of 2x2 numeric blocks into a 4x4 flat matrix.
fn expand(m: &Matrix) -> FlatMatrix {
    FlatMatrix::from_fn(4, 4, |i, j| {
        let inner = m[(i / 2, j / 2)].as_matrix().unwrap();
        inner[(i % 2, j % 2)].to_f64()
    })
}

#[test]
fn block_unit_and_zero() {
    let m = Matrix::from_rows(vec![
        vec![block([[5.0, 6.0], [7.0, 8.0]]), block([[1.0, 2.0], [3.0, 4.0]])],
        vec![block([[9.0, 9.0], [9.0, 9.0]]), block([[0.5, 0.0], [0.0, 0.5]])],
    ])
    .unwrap();

    let unit = m.to_unit();
    assert_eq!(unit[(0, 0)], Element::from(Matrix::identity(2)));
    assert_eq!(unit[(1, 1)], Element::from(Matrix::identity(2)));
    assert_eq!(unit[(0, 1)], Element::from(Matrix::zeros(2, 2)));
    assert_eq!(unit[(1, 0)], Element::from(Matrix::zeros(2, 2)));
    assert_eq!(expand(&unit), FlatMatrix::eye(4));

    let zero = m.to_zero();
    assert!(zero.is_zero());
    assert_eq!(zero[(1, 0)], Element::from(Matrix::zeros(2, 2)));
}

#[test]
fn block_inverse_matches_expanded_inverse() {
    // Upper block-triangular with non-commuting blocks.
    let m = Matrix::from_rows(vec![
        vec![block([[2.0, 1.0], [1.0, 1.0]]), block([[1.0, 2.0], [0.0, 1.0]])],
        vec![block([[0.0, 0.0], [0.0, 0.0]]), block([[3.0, 1.0], [2.0, 1.0]])],
    ])
    .unwrap();

    let inv = m.inverse().unwrap();
    assert_eq!(expand(&inv), expand(&m).inverse().unwrap());
    assert_eq!(expand(&m.try_mul(&inv).unwrap()), FlatMatrix::eye(4));
}

#[test]
fn block_sum_and_scale() {
    let a = Matrix::from_rows(vec![vec![block([[1.0, 2.0], [3.0, 4.0]])]]).unwrap();
    let sum = a.try_add(&a).unwrap();
    assert_eq!(sum[(0, 0)], block([[2.0, 4.0], [6.0, 8.0]]));

    let scaled = a.scale(&Element::from(-1.0)).unwrap();
    assert_eq!(scaled, -&a);
    assert_eq!(a.depth(), 2);
}
