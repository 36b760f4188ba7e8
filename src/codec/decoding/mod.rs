//! The three Reed-Solomon decoders.
//!
//! All of them recover the message polynomial s(x) from a received word of
//! n field elements, assuming at most t = ⌊(n−k)/2⌋ corrupted positions.
//! With more corruption the output is silently wrong. There is no failure
//! signal to give, since every syndrome pattern within capacity is
//! explained by exactly one error pattern.
//!
//! An `Err` from a decoder means an algebraic precondition broke down
//! (typically a zero error-locator produced by garbage input), not a
//! detected decoding failure.

pub(crate) mod bch;
pub(crate) mod euclid;
pub(crate) mod linear;

use crate::field::Field;
use crate::poly::PolyRing;

/// The zero locator w(x) = ∏ (x − aᵢ) over the evaluation points, the
/// polynomial vanishing on every uncorrupted position.
pub(crate) fn zero_locator<F: Field>(
    ring: &PolyRing<'_, F>,
    points: &[F::Element],
) -> Vec<F::Element> {
    let field = ring.field();
    let mut w = ring.one();
    for a in points {
        let root_factor = vec![field.neg(a), field.one()];
        w = ring.mul(&w, &root_factor);
    }
    w
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::PrimeField;
    use pretty_assertions::assert_eq;

    #[test]
    fn zero_locator_vanishes_exactly_on_the_points() {
        let field = PrimeField::new(11);
        let ring = PolyRing::new(&field);
        let points = vec![1, 3, 7];
        let w = zero_locator(&ring, &points);
        assert_eq!(w.len(), 4);
        for a in &points {
            assert_eq!(ring.eval(&w, a), 0);
        }
        assert_ne!(ring.eval(&w, &2), 0);
    }
}
