//! The extension field Fq = (Z/pZ)[x]/⟨f⟩.

use rand::Rng;

use super::{ArithmeticError, Field, PrimeField};
use crate::poly::PolyRing;

/// A finite field with q = p^n elements, realized as the residue classes of
/// (Z/pZ)[x] modulo a monic irreducible polynomial f of degree n.
///
/// Elements are canonical polynomials over the base field (little-endian
/// coefficient vectors with no trailing zeros, the empty vector being zero)
/// of degree below deg f. Addition never leaves that range; multiplication
/// and inversion reduce modulo f before returning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionField {
    base: PrimeField,
    modulus: Vec<u64>,
}

impl ExtensionField {
    /// Create the field context for the prime `p` and the monic irreducible
    /// `modulus` f, given as a little-endian coefficient vector.
    ///
    /// Irreducibility is the caller's contract; it is checked in debug
    /// builds only (with Rabin's test). Monicity is always enforced.
    pub fn new(p: u64, modulus: Vec<u64>) -> Self {
        let base = PrimeField::new(p);
        assert!(modulus.len() >= 2, "modulus must have positive degree");
        assert_eq!(*modulus.last().unwrap(), 1, "modulus must be monic");
        assert!(
            modulus.iter().all(|c| *c < p),
            "modulus coefficients must be reduced"
        );
        debug_assert!(
            PolyRing::new(&base).is_irreducible(&modulus) == Ok(true),
            "modulus must be irreducible"
        );
        ExtensionField { base, modulus }
    }

    /// The base field Z/pZ.
    pub fn base(&self) -> &PrimeField {
        &self.base
    }

    /// The defining polynomial f.
    pub fn modulus(&self) -> &[u64] {
        &self.modulus
    }

    /// The extension degree n = deg f.
    pub fn degree(&self) -> usize {
        self.modulus.len() - 1
    }

    fn ring(&self) -> PolyRing<'_, PrimeField> {
        PolyRing::new(&self.base)
    }
}

impl Field for ExtensionField {
    type Element = Vec<u64>;

    fn zero(&self) -> Vec<u64> {
        Vec::new()
    }

    fn one(&self) -> Vec<u64> {
        vec![1]
    }

    fn add(&self, a: &Vec<u64>, b: &Vec<u64>) -> Vec<u64> {
        // Degrees stay below deg f, no reduction needed.
        self.ring().add(a, b)
    }

    fn neg(&self, a: &Vec<u64>) -> Vec<u64> {
        self.ring().neg(a)
    }

    fn mul(&self, a: &Vec<u64>, b: &Vec<u64>) -> Vec<u64> {
        let ring = self.ring();
        let product = ring.mul(a, b);
        let (_, rem) = ring
            .div(&product, &self.modulus)
            .expect("modulus is nonzero");
        rem
    }

    fn inv(&self, a: &Vec<u64>) -> Result<Vec<u64>, ArithmeticError> {
        if a.is_empty() {
            return Err(ArithmeticError::DivisionByZero);
        }
        let ring = self.ring();
        // gcd(f, a) = 1 since f is irreducible and a nonzero, so the Bézout
        // coefficient of a inverts it. The coefficient can come back with
        // degree >= deg f and must itself be reduced modulo f.
        let (_, _, s) = ring.gcd_ext(&self.modulus, a)?;
        let (_, rem) = ring.div(&s, &self.modulus)?;
        Ok(rem)
    }

    fn characteristic(&self) -> u64 {
        self.base.modulus()
    }

    fn order(&self) -> u128 {
        (self.base.modulus() as u128)
            .checked_pow(self.degree() as u32)
            .expect("field order overflows u128")
    }

    /// Draw an element by picking a degree uniformly below deg f and then
    /// uniform coefficients up to that degree. Low-degree elements are more
    /// likely than under a uniform draw over Fq.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<u64> {
        let degree = rng.random_range(0..self.modulus.len() - 1);
        self.ring().random(degree, rng)
    }
}

#[cfg(test)]
use pretty_assertions::assert_eq;

/// GF(8) with f = x³ + x + 1.
#[cfg(test)]
fn gf8() -> ExtensionField {
    ExtensionField::new(2, vec![1, 1, 0, 1])
}

#[test]
fn addition_is_coefficientwise() {
    let field = gf8();
    assert_eq!(field.add(&vec![1, 0, 1], &vec![1, 1]), vec![0, 1, 1]);
    assert_eq!(field.add(&vec![1, 0, 1], &vec![1, 0, 1]), Vec::<u64>::new());
    assert_eq!(field.neg(&vec![1, 1]), vec![1, 1]);
}

#[test]
fn multiplication_reduces_modulo_f() {
    let field = gf8();
    // x² · x = x³ = x + 1
    assert_eq!(field.mul(&vec![0, 0, 1], &vec![0, 1]), vec![1, 1]);
    // x² · x² = x⁴ = x² + x
    assert_eq!(field.mul(&vec![0, 0, 1], &vec![0, 0, 1]), vec![0, 1, 1]);
}

#[test]
fn every_nonzero_element_has_an_inverse() {
    let field = gf8();
    let elements: Vec<Vec<u64>> = (1u64..8)
        .map(|bits| {
            let coeffs: Vec<u64> = (0..3).map(|i| (bits >> i) & 1).collect();
            PolyRing::new(field.base()).normalize(coeffs)
        })
        .collect();
    for a in &elements {
        let inv = field.inv(a).unwrap();
        assert_eq!(field.mul(a, &inv), field.one(), "a = {:?}", a);
    }
}

#[test]
fn inverse_of_zero_fails() {
    let field = gf8();
    assert_eq!(
        field.inv(&Vec::new()),
        Err(ArithmeticError::DivisionByZero)
    );
}

#[test]
fn multiplicative_group_is_cyclic_of_order_seven() {
    let field = gf8();
    let x = vec![0, 1];
    assert_eq!(field.pow(&x, 7).unwrap(), field.one());
    let mut seen = vec![field.one()];
    let mut acc = field.one();
    for _ in 0..6 {
        acc = field.mul(&acc, &x);
        assert!(!seen.contains(&acc), "x generates all of GF(8)*");
        seen.push(acc.clone());
    }
}

#[test]
fn order_and_characteristic() {
    let field = gf8();
    assert_eq!(field.characteristic(), 2);
    assert_eq!(field.order(), 8);
    let aes = ExtensionField::new(2, vec![1, 1, 0, 1, 1, 0, 0, 0, 1]);
    assert_eq!(aes.order(), 256);
}

#[test]
fn sampling_yields_reduced_elements() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let field = gf8();
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..100 {
        let a = field.sample(&mut rng);
        assert!(a.len() <= field.degree());
        if let Some(last) = a.last() {
            assert_ne!(*last, 0, "canonical representation has no trailing zero");
        }
    }
}
