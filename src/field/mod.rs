//! Field contexts for the algebraic tower.
//!
//! All arithmetic in this crate is parameterized over a [`Field`]: the prime
//! field Z/pZ ([`PrimeField`]) or its extension Fq = (Z/pZ)[x]/⟨f⟩
//! ([`ExtensionField`]). A field value is a small immutable context object
//! holding the parameters (p, and f for extensions); the elements it
//! operates on are plain values that carry no reference back to the context.
//! Every operation takes the operands by reference and returns a fresh
//! value, so elements can be reused freely across expressions.

mod extension;
pub(crate) mod prime;

use std::fmt;

use rand::Rng;

pub use extension::ExtensionField;
pub use prime::PrimeField;

/// Failure of an algebraic precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    /// Division by zero, including the multiplicative inverse of the
    /// additive identity.
    DivisionByZero,
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ArithmeticError::DivisionByZero => f.write_str("division by zero"),
        }
    }
}

impl std::error::Error for ArithmeticError {}

/// A finite field.
///
/// The two implementations are [`PrimeField`] (elements are `u64` residues)
/// and [`ExtensionField`] (elements are coefficient vectors over the base
/// field). Polynomials, matrices and the Reed-Solomon codecs are generic
/// over this trait.
pub trait Field {
    /// Element representation. Equality on elements must coincide with
    /// field equality, so representations are kept canonical at all times.
    type Element: Clone + PartialEq + fmt::Debug;

    /// The additive identity.
    fn zero(&self) -> Self::Element;

    /// The multiplicative identity.
    fn one(&self) -> Self::Element;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// The additive inverse.
    fn neg(&self, a: &Self::Element) -> Self::Element;

    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// The multiplicative inverse.
    ///
    /// Fails with [`ArithmeticError::DivisionByZero`] for the additive
    /// identity.
    fn inv(&self, a: &Self::Element) -> Result<Self::Element, ArithmeticError>;

    /// The field characteristic p.
    fn characteristic(&self) -> u64;

    /// The number of elements, p for the prime field and p^deg(f) for an
    /// extension.
    fn order(&self) -> u128;

    /// Draw one element, uniformly for the prime field (see
    /// [`ExtensionField`] for its sampling rule).
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Element;

    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        self.add(a, &self.neg(b))
    }

    /// Raise `a` to any integer power by square-and-multiply. A negative
    /// exponent inverts the base first and therefore fails on zero.
    fn pow(&self, a: &Self::Element, r: i64) -> Result<Self::Element, ArithmeticError> {
        if r < 0 {
            let inverted = self.inv(a)?;
            Ok(pow_unsigned(self, &inverted, r.unsigned_abs()))
        } else {
            Ok(pow_unsigned(self, a, r as u64))
        }
    }
}

fn pow_unsigned<F: Field + ?Sized>(field: &F, a: &F::Element, r: u64) -> F::Element {
    if r == 0 {
        field.one()
    } else if r % 2 == 0 {
        let x = pow_unsigned(field, a, r / 2);
        field.mul(&x, &x)
    } else {
        let x = pow_unsigned(field, a, (r - 1) / 2);
        let x = field.mul(&x, &x);
        field.mul(a, &x)
    }
}
