//! Linear-algebra (Berlekamp-Welch style) decoding.
//!
//! Writing g(x) for the interpolation of the received word and w(x) for the
//! zero locator, an error locator e(x) of degree t and an evaluator h(x) of
//! degree t−1 must satisfy deg(g·e + w·h) ≤ deg_u with
//! deg_u = k + ⌊(n−k+1)/2⌋ − 1. Forcing the coefficients above deg_u to
//! vanish gives a homogeneous linear system in the 2t+1 unknown
//! coefficients of e and h; any nontrivial solution yields the message as
//! s(x) = (g·e + w·h) / e.

use super::zero_locator;
use crate::codec::EvaluationCode;
use crate::field::{ArithmeticError, Field};
use crate::matrix::MatrixSpace;
use crate::poly::PolyRing;

pub(crate) fn decode<F: Field>(
    code: &EvaluationCode<'_, F>,
    received: &[F::Element],
) -> Result<Vec<F::Element>, ArithmeticError> {
    let field = code.field;
    let ring = PolyRing::new(field);
    let space = MatrixSpace::new(field);
    let n = code.points.len();
    let k = code.k;
    assert_eq!(received.len(), n, "received word length must equal n");

    let t = (n - k) / 2;
    let deg_e = t;
    let deg_h = t - 1;

    let g = ring.interpolate(&code.points, received)?;
    let w = zero_locator(&ring, &code.points);

    // Build the homogeneous system: one column per unknown coefficient,
    // x^i·g for the e part and x^(j)·w for the h part, keeping only the
    // rows above deg_u.
    let deg_g = g.len() as isize - 1;
    let deg_w = w.len() as isize - 1;
    let rows_total = ((deg_g + deg_e as isize).max(deg_w + deg_h as isize) + 1) as usize;
    let deg_u = k + (n - k + 1) / 2 - 1;
    let ec = rows_total - (deg_u + 1);
    let cols = deg_e + deg_h + 2;

    let mut system = space.zero(ec, cols);
    for (i, out) in system[..deg_e + 1].iter_mut().enumerate() {
        let mut col = vec![field.zero(); i];
        col.extend_from_slice(&g);
        col.resize(rows_total, field.zero());
        *out = col[rows_total - ec..].to_vec();
    }
    for (j, out) in system[deg_e + 1..].iter_mut().enumerate() {
        let mut col = vec![field.zero(); j];
        col.extend_from_slice(&w);
        col.resize(rows_total, field.zero());
        *out = col[rows_total - ec..].to_vec();
    }

    let (reduced, _) = space.gauss_jordan(system);

    // Read off a particular solution: free variables are fixed to one, and
    // each pivot variable absorbs the negated sum of the entries to the
    // right of its pivot.
    let one = field.one();
    let mut coefs = vec![one.clone(); cols];
    for i in 0..ec {
        let mut value = field.zero();
        let mut found = false;
        let mut pos = 0;
        for (j, col) in reduced.iter().enumerate() {
            if found {
                value = field.add(&value, &field.neg(&col[i]));
            }
            if col[i] == one && !found {
                found = true;
                pos = j;
            }
        }
        if found {
            coefs[pos] = value;
        }
    }
    let e = ring.normalize(coefs[..deg_e + 1].to_vec());
    let h = ring.normalize(coefs[cols - (deg_h + 1)..].to_vec());

    let u = ring.add(&ring.mul(&g, &e), &ring.mul(&w, &h));
    Ok(ring.div(&u, &e)?.0)
}

#[cfg(test)]
use pretty_assertions::assert_eq;

#[cfg(test)]
fn test_code(field: &crate::field::ExtensionField) -> EvaluationCode<'_, crate::field::ExtensionField> {
    let alpha = vec![0u64, 1];
    let points: Vec<Vec<u64>> = (0..7).map(|j| field.pow(&alpha, j).unwrap()).collect();
    EvaluationCode::new(field, 3, points)
}

#[cfg(test)]
fn gf8() -> crate::field::ExtensionField {
    crate::field::ExtensionField::new(2, vec![1, 1, 0, 1])
}

#[test]
fn clean_word_decodes_to_the_message() {
    let field = gf8();
    let code = test_code(&field);
    let message = vec![vec![1], vec![0, 1], vec![1, 1]];
    let received = code.encode(&message);
    assert_eq!(decode(&code, &received).unwrap(), message);
}

#[test]
fn recovers_from_two_errors() {
    let field = gf8();
    let code = test_code(&field);
    let message = vec![vec![1], vec![0, 1], vec![1, 1]];
    let mut received = code.encode(&message);
    received[1] = field.add(&received[1], &field.one());
    received[5] = field.add(&received[5], &vec![0, 1]);
    assert_eq!(decode(&code, &received).unwrap(), message);
}

#[test]
fn recovers_from_a_single_error() {
    let field = gf8();
    let code = test_code(&field);
    let message = vec![vec![0, 1, 1]];
    let mut received = code.encode(&message);
    received[0] = field.add(&received[0], &vec![1, 1, 1]);
    assert_eq!(decode(&code, &received).unwrap(), message);
}

#[test]
fn zero_message_round_trips() {
    let field = gf8();
    let code = test_code(&field);
    let mut received = code.encode(&[]);
    received[3] = field.one();
    assert_eq!(decode(&code, &received).unwrap(), Vec::<Vec<u64>>::new());
}
