//! Reed-Solomon codes and their decoders.
//!
//! Two classical views of the same code family are provided:
//!
//! - [`EvaluationCode`]: a codeword is the message polynomial evaluated at n
//!   fixed distinct points. Decoding interpolates the received word and
//!   separates the error locator from it, either by solving a linear system
//!   ([`EvaluationCode::decode_linear`]) or by running the extended
//!   Euclidean algorithm to the right degree bound
//!   ([`EvaluationCode::decode_euclidean`]).
//! - [`BchCode`]: a codeword is the message polynomial multiplied by a
//!   generator g(x) = ∏ (x − αʲ) over n−k consecutive powers of a generator
//!   element α. Decoding is syndrome based in the style of
//!   Peterson-Gorenstein-Zierler ([`BchCode::decode`]).
//!
//! Both correct up to t = ⌊(n−k)/2⌋ corrupted positions. Beyond t none of
//! the decoders can detect the failure: they return a well-formed but wrong
//! message. That is inherent to the algorithms, not a bug; callers that need
//! detection can re-encode the result and compare.
//!
//! Code parameters are fixed at construction and the structs borrow their
//! field context, so one field and one code value serve any number of
//! encode/decode calls.

mod decoding;

use crate::field::{ArithmeticError, Field};
use crate::poly::PolyRing;

/// An evaluation-form Reed-Solomon code: length n = number of evaluation
/// points, dimension k.
#[derive(Debug, Clone)]
pub struct EvaluationCode<'a, F: Field> {
    pub(crate) field: &'a F,
    pub(crate) k: usize,
    pub(crate) points: Vec<F::Element>,
}

impl<'a, F: Field> EvaluationCode<'a, F> {
    /// Create a code of dimension `k` from `n` distinct evaluation points.
    ///
    /// Requires n ≥ k + 2 so that at least one error can be corrected.
    pub fn new(field: &'a F, k: usize, points: Vec<F::Element>) -> Self {
        assert!(k >= 1, "dimension must be positive");
        assert!(
            points.len() >= k + 2,
            "need at least two more evaluation points than the dimension"
        );
        for (i, a) in points.iter().enumerate() {
            for b in points.iter().skip(i + 1) {
                assert!(a != b, "evaluation points must be distinct");
            }
        }
        EvaluationCode { field, k, points }
    }

    /// The code length n.
    pub fn length(&self) -> usize {
        self.points.len()
    }

    /// The code dimension k.
    pub fn dimension(&self) -> usize {
        self.k
    }

    /// The evaluation points.
    pub fn points(&self) -> &[F::Element] {
        &self.points
    }

    /// The error-correction capacity t = ⌊(n−k)/2⌋.
    pub fn correctable_errors(&self) -> usize {
        (self.points.len() - self.k) / 2
    }

    /// Encode a message of at most k coefficients by evaluating it at every
    /// code point.
    pub fn encode(&self, message: &[F::Element]) -> Vec<F::Element> {
        assert!(message.len() <= self.k, "message longer than the dimension");
        let ring = PolyRing::new(self.field);
        self.points.iter().map(|a| ring.eval(message, a)).collect()
    }

    /// Decode by interpolation and a homogeneous linear system over the
    /// locator/evaluator coefficients.
    ///
    /// Returns the recovered message polynomial in canonical form (pad with
    /// zeros to k if fixed-width output is needed).
    pub fn decode_linear(&self, received: &[F::Element]) -> Result<Vec<F::Element>, ArithmeticError> {
        decoding::linear::decode(self, received)
    }

    /// Decode by the extended Euclidean algorithm on the zero locator and
    /// the interpolated received word.
    ///
    /// Returns the recovered message polynomial in canonical form.
    pub fn decode_euclidean(
        &self,
        received: &[F::Element],
    ) -> Result<Vec<F::Element>, ArithmeticError> {
        decoding::euclid::decode(self, received)
    }
}

/// A generator-form (BCH view) Reed-Solomon code of length n and dimension
/// k, with generator polynomial ∏ (x − α^j) for j = i, …, i + (n−k) − 1.
#[derive(Debug, Clone)]
pub struct BchCode<'a, F: Field> {
    pub(crate) field: &'a F,
    pub(crate) n: usize,
    pub(crate) k: usize,
    pub(crate) alpha: F::Element,
    pub(crate) power: i64,
    pub(crate) generator: Vec<F::Element>,
}

impl<'a, F: Field> BchCode<'a, F> {
    /// Create the code from a generator element `alpha` of the
    /// multiplicative group and the first root exponent `power` (the i in
    /// αⁱ). The generator polynomial is built on the spot.
    ///
    /// `alpha` must have multiplicative order at least n, so that codeword
    /// positions map to distinct powers.
    pub fn new(
        field: &'a F,
        k: usize,
        n: usize,
        alpha: F::Element,
        power: i64,
    ) -> Result<Self, ArithmeticError> {
        assert!(k >= 1, "dimension must be positive");
        assert!(n > k, "length must exceed the dimension");
        let generator = generator_polynomial(field, k, n, &alpha, power)?;
        Ok(BchCode {
            field,
            n,
            k,
            alpha,
            power,
            generator,
        })
    }

    /// The code length n.
    pub fn length(&self) -> usize {
        self.n
    }

    /// The code dimension k.
    pub fn dimension(&self) -> usize {
        self.k
    }

    /// The generator polynomial, of degree n − k.
    pub fn generator(&self) -> &[F::Element] {
        &self.generator
    }

    /// The error-correction capacity t = ⌊(n−k)/2⌋.
    pub fn correctable_errors(&self) -> usize {
        (self.n - self.k) / 2
    }

    /// Encode a message of at most k coefficients as message · generator,
    /// zero-padded to the code length.
    pub fn encode(&self, message: &[F::Element]) -> Vec<F::Element> {
        assert!(message.len() <= self.k, "message longer than the dimension");
        let ring = PolyRing::new(self.field);
        let mut codeword = ring.mul(&self.generator, message);
        codeword.resize(self.n, self.field.zero());
        codeword
    }

    /// Decode by syndrome computation, locator-system solving with
    /// degenerate-capacity fallback, root search over the α-power positions
    /// and magnitude recovery.
    ///
    /// Returns the recovered message polynomial in canonical form.
    pub fn decode(&self, received: &[F::Element]) -> Result<Vec<F::Element>, ArithmeticError> {
        decoding::bch::decode(self, received)
    }
}

/// The generator polynomial g(x) = ∏ (x − α^j) for j = power, …,
/// power + (n−k) − 1, built incrementally.
pub fn generator_polynomial<F: Field>(
    field: &F,
    k: usize,
    n: usize,
    alpha: &F::Element,
    power: i64,
) -> Result<Vec<F::Element>, ArithmeticError> {
    assert!(n > k, "length must exceed the dimension");
    let ring = PolyRing::new(field);
    let x = vec![field.zero(), field.one()];
    let mut alpha_ij = vec![field.pow(alpha, power)?];
    let mut g = ring.add(&x, &ring.neg(&alpha_ij));
    for _ in 1..(n - k) {
        alpha_ij = ring.mul(&alpha_ij, &[alpha.clone()]);
        let root_factor = ring.add(&x, &ring.neg(&alpha_ij));
        g = ring.mul(&g, &root_factor);
    }
    Ok(g)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::ExtensionField;
    use pretty_assertions::assert_eq;

    /// GF(8) with f = x³ + x + 1; x is primitive.
    fn gf8() -> ExtensionField {
        ExtensionField::new(2, vec![1, 1, 0, 1])
    }

    #[test]
    fn generator_has_degree_n_minus_k_and_the_right_roots() {
        let field = gf8();
        let ring = PolyRing::new(&field);
        let alpha = vec![0, 1];
        let g = generator_polynomial(&field, 3, 7, &alpha, 1).unwrap();
        assert_eq!(g.len(), 5, "degree n - k = 4");
        for j in 1..=4 {
            let root = field.pow(&alpha, j).unwrap();
            assert_eq!(ring.eval(&g, &root), field.zero(), "alpha^{} is a root", j);
        }
        let non_root = field.pow(&alpha, 5).unwrap();
        assert_ne!(ring.eval(&g, &non_root), field.zero());
    }

    #[test]
    fn generator_encoding_pads_to_length() {
        let field = gf8();
        let code = BchCode::new(&field, 3, 7, vec![0, 1], 1).unwrap();
        let message = vec![field.one()];
        let codeword = code.encode(&message);
        assert_eq!(codeword.len(), 7);
        assert_eq!(&codeword[..5], code.generator());
        assert_eq!(codeword[5], field.zero());
        assert_eq!(codeword[6], field.zero());
    }

    #[test]
    fn evaluation_encoding_evaluates_pointwise() {
        let field = gf8();
        let ring = PolyRing::new(&field);
        let alpha = vec![0u64, 1];
        let points: Vec<Vec<u64>> = (0..7).map(|j| field.pow(&alpha, j).unwrap()).collect();
        let code = EvaluationCode::new(&field, 3, points.clone());
        let message = vec![field.one(), vec![0, 1], vec![1, 1]];
        let codeword = code.encode(&message);
        for (c, a) in codeword.iter().zip(points.iter()) {
            assert_eq!(c, &ring.eval(&message, a));
        }
    }

    #[test]
    #[should_panic(expected = "evaluation points must be distinct")]
    fn duplicate_points_are_rejected() {
        let field = gf8();
        let one = field.one();
        EvaluationCode::new(&field, 1, vec![one.clone(), vec![0, 1], one]);
    }
}
