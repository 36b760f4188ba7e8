//! Extended-Euclidean decoding.
//!
//! Instead of solving a linear system, run the extended Euclidean algorithm
//! on the pair (w, g) of zero locator and interpolated received word, and
//! stop as soon as the remainder degree drops to
//! deg_u = k + ⌊(n−k+1)/2⌋ − 1. At that point the remainder u₁ and the
//! Bézout-style coefficient e₁ of the g side satisfy u₁ = s·e₁ for the
//! transmitted message s, which is recovered by one division.

use super::zero_locator;
use crate::codec::EvaluationCode;
use crate::field::{ArithmeticError, Field};
use crate::poly::PolyRing;

pub(crate) fn decode<F: Field>(
    code: &EvaluationCode<'_, F>,
    received: &[F::Element],
) -> Result<Vec<F::Element>, ArithmeticError> {
    let field = code.field;
    let ring = PolyRing::new(field);
    let n = code.points.len();
    let k = code.k;
    assert_eq!(received.len(), n, "received word length must equal n");

    let deg_u = k + (n - k + 1) / 2 - 1;

    let g = ring.interpolate(&code.points, received)?;
    let w = zero_locator(&ring, &code.points);

    let mut h0 = ring.one();
    let mut h1 = ring.zero();
    let mut e0 = ring.zero();
    let mut e1 = ring.one();
    let mut u0 = w;
    let mut u1 = g;

    while u1.len() > deg_u + 1 {
        let (quot, rem) = ring.div(&u0, &u1)?;
        u0 = std::mem::replace(&mut u1, rem);
        let next_h = ring.add(&h0, &ring.neg(&ring.mul(&quot, &h1)));
        h0 = std::mem::replace(&mut h1, next_h);
        let next_e = ring.add(&e0, &ring.neg(&ring.mul(&quot, &e1)));
        e0 = std::mem::replace(&mut e1, next_e);
    }

    Ok(ring.div(&u1, &e1)?.0)
}

#[cfg(test)]
use pretty_assertions::assert_eq;

#[cfg(test)]
fn gf8() -> crate::field::ExtensionField {
    crate::field::ExtensionField::new(2, vec![1, 1, 0, 1])
}

#[cfg(test)]
fn test_code(field: &crate::field::ExtensionField) -> EvaluationCode<'_, crate::field::ExtensionField> {
    let alpha = vec![0u64, 1];
    let points: Vec<Vec<u64>> = (0..7).map(|j| field.pow(&alpha, j).unwrap()).collect();
    EvaluationCode::new(field, 3, points)
}

#[test]
fn clean_word_needs_no_division_steps() {
    let field = gf8();
    let code = test_code(&field);
    let message = vec![vec![1, 1], vec![1], vec![0, 1]];
    let received = code.encode(&message);
    assert_eq!(decode(&code, &received).unwrap(), message);
}

#[test]
fn recovers_from_two_errors() {
    let field = gf8();
    let code = test_code(&field);
    let message = vec![vec![1, 1], vec![1], vec![0, 1]];
    let mut received = code.encode(&message);
    received[0] = field.add(&received[0], &vec![1, 0, 1]);
    received[6] = field.add(&received[6], &field.one());
    assert_eq!(decode(&code, &received).unwrap(), message);
}

#[test]
fn agrees_with_the_linear_algebra_decoder() {
    let field = gf8();
    let code = test_code(&field);
    let message = vec![vec![0, 0, 1], vec![1, 1]];
    let mut received = code.encode(&message);
    received[2] = field.add(&received[2], &vec![0, 1]);
    received[4] = field.add(&received[4], &vec![1, 1]);
    let here = decode(&code, &received).unwrap();
    let there = super::linear::decode(&code, &received).unwrap();
    assert_eq!(here, there);
    assert_eq!(here, message);
}
