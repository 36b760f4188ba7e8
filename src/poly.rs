//! Dense polynomial arithmetic over a finite field.
//!
//! A polynomial c0 + c1·x + … + cn·xⁿ is a `Vec` of coefficients in
//! little-endian order. The representation is kept canonical: the leading
//! coefficient of a non-empty vector is never zero, and the empty vector is
//! the one representation of the zero polynomial. Canonical form is restored
//! after every operation that can cancel leading terms (sums, scalar
//! combinations); multiplication over a field cannot produce a spurious
//! leading zero on canonical operands.
//!
//! [`PolyRing`] borrows a [`Field`] context, so the same code serves both
//! (Z/pZ)[x] and Fq[x]. The two rings differ only through the field: its
//! characteristic and order drive the Rabin irreducibility test, and its
//! sampling rule drives random polynomial generation.

use rand::Rng;

use crate::field::prime::is_prime;
use crate::field::{ArithmeticError, Field};

/// The polynomial ring K[x] for a field K.
#[derive(Debug, Clone, Copy)]
pub struct PolyRing<'a, F: Field> {
    field: &'a F,
}

impl<'a, F: Field> PolyRing<'a, F> {
    pub fn new(field: &'a F) -> Self {
        PolyRing { field }
    }

    /// The coefficient field.
    pub fn field(&self) -> &'a F {
        self.field
    }

    /// The zero polynomial.
    pub fn zero(&self) -> Vec<F::Element> {
        Vec::new()
    }

    /// The constant polynomial 1.
    pub fn one(&self) -> Vec<F::Element> {
        vec![self.field.one()]
    }

    /// Trim trailing zero coefficients down to canonical form.
    pub fn normalize(&self, mut g: Vec<F::Element>) -> Vec<F::Element> {
        let zero = self.field.zero();
        while g.last() == Some(&zero) {
            g.pop();
        }
        g
    }

    /// Degree, with `None` for the zero polynomial.
    pub fn degree(&self, g: &[F::Element]) -> Option<usize> {
        g.len().checked_sub(1)
    }

    pub fn add(&self, g: &[F::Element], h: &[F::Element]) -> Vec<F::Element> {
        let len = g.len().max(h.len());
        let zero = self.field.zero();
        let mut sum = Vec::with_capacity(len);
        for i in 0..len {
            let a = g.get(i).unwrap_or(&zero);
            let b = h.get(i).unwrap_or(&zero);
            sum.push(self.field.add(a, b));
        }
        self.normalize(sum)
    }

    pub fn neg(&self, g: &[F::Element]) -> Vec<F::Element> {
        let negated = g.iter().map(|c| self.field.neg(c)).collect();
        self.normalize(negated)
    }

    pub fn sub(&self, g: &[F::Element], h: &[F::Element]) -> Vec<F::Element> {
        self.add(g, &self.neg(h))
    }

    /// Full convolution product.
    pub fn mul(&self, g: &[F::Element], h: &[F::Element]) -> Vec<F::Element> {
        if g.is_empty() || h.is_empty() {
            return Vec::new();
        }
        let mut product = vec![self.field.zero(); g.len() + h.len() - 1];
        for (i, a) in g.iter().enumerate() {
            for (j, b) in h.iter().enumerate() {
                product[i + j] = self.field.add(&self.field.mul(a, b), &product[i + j]);
            }
        }
        self.normalize(product)
    }

    /// Long division: returns (quotient, remainder) with
    /// g = quotient·h + remainder and deg(remainder) < deg(h).
    ///
    /// Fails when `h` is the zero polynomial. Each round eliminates the
    /// current leading term, so the dividend degree strictly decreases; the
    /// loop also stops as soon as the running remainder cancels to zero
    /// outright, which coefficient arithmetic in an extension field can
    /// cause before the degree bound is reached.
    pub fn div(
        &self,
        g: &[F::Element],
        h: &[F::Element],
    ) -> Result<(Vec<F::Element>, Vec<F::Element>), ArithmeticError> {
        if h.is_empty() {
            return Err(ArithmeticError::DivisionByZero);
        }
        let mut rem = g.to_vec();
        let mut quot = if g.len() >= h.len() {
            vec![self.field.zero(); g.len() - h.len() + 1]
        } else {
            Vec::new()
        };
        while !rem.is_empty() && rem.len() >= h.len() {
            let lead_rem = &rem[rem.len() - 1];
            let lead_div = &h[h.len() - 1];
            let c = self.field.mul(lead_rem, &self.field.inv(lead_div)?);
            let shift = rem.len() - h.len();
            quot[shift] = c.clone();
            let neg_c = self.field.neg(&c);
            let mut sub = vec![self.field.zero(); shift];
            sub.extend(h.iter().map(|b| self.field.mul(&neg_c, b)));
            rem = self.add(&rem, &sub);
        }
        Ok((quot, rem))
    }

    /// Monic greatest common divisor by the Euclidean algorithm.
    pub fn gcd(
        &self,
        g: &[F::Element],
        h: &[F::Element],
    ) -> Result<Vec<F::Element>, ArithmeticError> {
        let mut g = g.to_vec();
        let mut h = h.to_vec();
        while !h.is_empty() {
            let (_, rem) = self.div(&g, &h)?;
            g = std::mem::replace(&mut h, rem);
        }
        self.make_monic(g)
    }

    /// Extended Euclidean algorithm: returns (d, r, s) with d = gcd(g, h)
    /// monic and d = r·g + s·h, the Bézout polynomials scaled by the same
    /// factor that makes d monic.
    pub fn gcd_ext(
        &self,
        g: &[F::Element],
        h: &[F::Element],
    ) -> Result<(Vec<F::Element>, Vec<F::Element>, Vec<F::Element>), ArithmeticError> {
        let mut g = g.to_vec();
        let mut h = h.to_vec();
        let mut r0 = self.one();
        let mut r1 = self.zero();
        let mut s0 = self.zero();
        let mut s1 = self.one();
        while !h.is_empty() {
            let (quot, rem) = self.div(&g, &h)?;
            g = std::mem::replace(&mut h, rem);
            let next_r = self.add(&r0, &self.neg(&self.mul(&quot, &r1)));
            r0 = std::mem::replace(&mut r1, next_r);
            let next_s = self.add(&s0, &self.neg(&self.mul(&quot, &s1)));
            s0 = std::mem::replace(&mut s1, next_s);
        }
        let lead = match g.last() {
            Some(lead) => lead.clone(),
            None => return Err(ArithmeticError::DivisionByZero),
        };
        let scale = [self.field.inv(&lead)?];
        Ok((
            self.mul(&scale, &g),
            self.mul(&scale, &r0),
            self.mul(&scale, &s0),
        ))
    }

    fn make_monic(&self, g: Vec<F::Element>) -> Result<Vec<F::Element>, ArithmeticError> {
        let lead = match g.last() {
            Some(lead) => lead.clone(),
            None => return Err(ArithmeticError::DivisionByZero),
        };
        let scale = [self.field.inv(&lead)?];
        Ok(self.mul(&scale, &g))
    }

    /// Lagrange interpolation through the points (xs\[i\], ys\[i\]).
    ///
    /// O(k²) field operations. Fails when two interpolation abscissae
    /// coincide.
    pub fn interpolate(
        &self,
        xs: &[F::Element],
        ys: &[F::Element],
    ) -> Result<Vec<F::Element>, ArithmeticError> {
        assert_eq!(xs.len(), ys.len(), "point coordinates must pair up");
        let mut g = self.zero();
        for i in 0..xs.len() {
            let mut basis = self.one();
            for j in 0..xs.len() {
                if j != i {
                    let p1 = self
                        .field
                        .inv(&self.field.add(&xs[i], &self.field.neg(&xs[j])))?;
                    let p0 = self.field.mul(&self.field.neg(&xs[j]), &p1);
                    basis = self.mul(&basis, &[p0, p1]);
                }
            }
            g = self.add(&g, &self.mul(&[ys[i].clone()], &basis));
        }
        Ok(g)
    }

    /// Evaluate g at the point a by accumulating ascending powers of a.
    pub fn eval(&self, g: &[F::Element], a: &F::Element) -> F::Element {
        let mut coeffs = g.iter();
        let mut value = match coeffs.next() {
            Some(c) => c.clone(),
            None => return self.field.zero(),
        };
        let mut power = self.field.one();
        for c in coeffs {
            power = self.field.mul(&power, a);
            value = self.field.add(&value, &self.field.mul(c, &power));
        }
        value
    }

    /// g^r modulo h by binary exponentiation, reducing after every square
    /// and multiply.
    pub fn pow_mod(
        &self,
        g: &[F::Element],
        mut r: u128,
        h: &[F::Element],
    ) -> Result<Vec<F::Element>, ArithmeticError> {
        let mut acc = self.one();
        let mut base = g.to_vec();
        while r > 0 {
            if r % 2 == 1 {
                acc = self.div(&self.mul(&acc, &base), h)?.1;
            }
            base = self.div(&self.mul(&base, &base), h)?.1;
            r /= 2;
        }
        Ok(acc)
    }

    /// Rabin's irreducibility test.
    ///
    /// For a candidate h of degree n over a field of order q this verifies
    /// x^(qⁿ) ≡ x (mod h), and for each prime divisor of n that the
    /// corresponding Frobenius-gcd check yields a unit. The qⁿ-th power is
    /// taken as n successive q-th powers modulo h. Constants are never
    /// irreducible.
    pub fn is_irreducible(&self, h: &[F::Element]) -> Result<bool, ArithmeticError> {
        if h.len() == 1 {
            return Ok(false);
        }
        let n = h.len().saturating_sub(1);
        let x = vec![self.field.zero(), self.field.one()];
        let mut frobenius = x.clone();
        for _ in 0..n {
            frobenius = self.pow_mod(&frobenius, self.field.order(), h)?;
        }
        let probe = self.add(&frobenius, &self.neg(&x));
        if !self.div(&probe, h)?.1.is_empty() {
            return Ok(false);
        }
        let minus_x = vec![self.field.zero(), self.field.neg(&self.field.one())];
        for pi in prime_cofactors(n) {
            let mut power = x.clone();
            for _ in 0..pi {
                power = self.pow_mod(&power, self.field.characteristic() as u128, h)?;
            }
            let probe = self.add(&power, &minus_x);
            if self.gcd(h, &probe)? != self.one() {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// A random polynomial of degree at most `degree`, each coefficient
    /// drawn independently with the field's sampling rule, in canonical
    /// form.
    pub fn random<R: Rng + ?Sized>(&self, degree: usize, rng: &mut R) -> Vec<F::Element> {
        let mut coeffs = Vec::with_capacity(degree + 1);
        for _ in 0..=degree {
            coeffs.push(self.field.sample(rng));
        }
        self.normalize(coeffs)
    }
}

/// The cofactors n / prime for every prime divisor of n, preceded by 1.
/// These are the exponents probed by the Rabin test.
fn prime_cofactors(n: usize) -> Vec<usize> {
    let mut cofactors = vec![1];
    for i in 2..n {
        if is_prime(i as u64) && n % i == 0 {
            cofactors.push(n / i);
        }
    }
    cofactors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{ExtensionField, PrimeField};
    use pretty_assertions::assert_eq;

    fn gf7() -> PrimeField {
        PrimeField::new(7)
    }

    /// GF(4) with f = z² + z + 1.
    fn gf4() -> ExtensionField {
        ExtensionField::new(2, vec![1, 1, 1])
    }

    #[test]
    fn add_pads_and_trims() {
        let field = gf7();
        let ring = PolyRing::new(&field);
        assert_eq!(ring.add(&[1, 2], &[3, 4, 5]), vec![4, 6, 5]);
        // 3x² cancels against 4x²
        assert_eq!(ring.add(&[1, 0, 3], &[0, 0, 4]), vec![1]);
        assert_eq!(ring.add(&[1, 2], &ring.neg(&[1, 2])), Vec::<u64>::new());
    }

    #[test]
    fn normalize_is_idempotent() {
        let field = gf7();
        let ring = PolyRing::new(&field);
        let g = ring.normalize(vec![1, 2, 0, 0]);
        assert_eq!(g, vec![1, 2]);
        assert_eq!(ring.normalize(g.clone()), g);
        assert_eq!(ring.normalize(vec![0, 0]), Vec::<u64>::new());
    }

    #[test]
    fn mul_convolves() {
        let field = gf7();
        let ring = PolyRing::new(&field);
        // (1 + x)(1 + x) = 1 + 2x + x²
        assert_eq!(ring.mul(&[1, 1], &[1, 1]), vec![1, 2, 1]);
        assert_eq!(ring.mul(&[1, 1], &[]), Vec::<u64>::new());
    }

    #[test]
    fn division_identity_holds() {
        let field = gf7();
        let ring = PolyRing::new(&field);
        let g = vec![3, 0, 5, 1, 2];
        let h = vec![4, 1, 6];
        let (quot, rem) = ring.div(&g, &h).unwrap();
        assert!(rem.len() < h.len());
        assert_eq!(ring.add(&ring.mul(&quot, &h), &rem), g);
    }

    #[test]
    fn division_by_zero_fails() {
        let field = gf7();
        let ring = PolyRing::new(&field);
        assert_eq!(ring.div(&[1, 2], &[]), Err(ArithmeticError::DivisionByZero));
    }

    #[test]
    fn division_over_extension_field_terminates_on_zero_remainder() {
        let field = gf4();
        let ring = PolyRing::new(&field);
        let z = vec![0, 1];
        // (x + z)(x + z + 1) divided by (x + z) leaves no remainder.
        let a = vec![z.clone(), field.one()];
        let b = vec![ring.field().add(&z, &field.one()), field.one()];
        let product = ring.mul(&a, &b);
        let (quot, rem) = ring.div(&product, &a).unwrap();
        assert_eq!(rem, Vec::<Vec<u64>>::new());
        assert_eq!(quot, b);
    }

    #[test]
    fn gcd_is_monic() {
        let field = gf7();
        let ring = PolyRing::new(&field);
        // (x + 1)(x + 2) and (x + 1)(x + 3) share the factor x + 1.
        let a = ring.mul(&[1, 1], &[2, 1]);
        let b = ring.mul(&[1, 1], &[3, 1]);
        let scaled = ring.mul(&[5], &a);
        assert_eq!(ring.gcd(&scaled, &b).unwrap(), vec![1, 1]);
    }

    #[test]
    fn gcd_ext_satisfies_bezout() {
        let field = gf7();
        let ring = PolyRing::new(&field);
        let g = vec![2, 4, 1, 3];
        let h = vec![5, 0, 1];
        let (d, r, s) = ring.gcd_ext(&g, &h).unwrap();
        let combination = ring.add(&ring.mul(&r, &g), &ring.mul(&s, &h));
        assert_eq!(combination, d);
        assert_eq!(*d.last().unwrap(), 1, "gcd is monic");
    }

    #[test]
    fn interpolation_recovers_the_polynomial() {
        let field = gf7();
        let ring = PolyRing::new(&field);
        let g = vec![2, 0, 3];
        let xs: Vec<u64> = vec![0, 1, 2, 3];
        let ys: Vec<u64> = xs.iter().map(|x| ring.eval(&g, x)).collect();
        assert_eq!(ring.interpolate(&xs, &ys).unwrap(), g);
    }

    #[test]
    fn interpolation_with_duplicate_abscissa_fails() {
        let field = gf7();
        let ring = PolyRing::new(&field);
        assert_eq!(
            ring.interpolate(&[1, 1], &[2, 3]),
            Err(ArithmeticError::DivisionByZero)
        );
    }

    #[test]
    fn eval_of_zero_polynomial_is_zero() {
        let field = gf7();
        let ring = PolyRing::new(&field);
        assert_eq!(ring.eval(&[], &5), 0);
        assert_eq!(ring.eval(&[4], &5), 4);
        assert_eq!(ring.eval(&[1, 1, 1], &2), 0); // 1 + 2 + 4 = 7
    }

    #[test]
    fn pow_mod_matches_naive_power() {
        let field = gf7();
        let ring = PolyRing::new(&field);
        let g = vec![1, 1];
        let h = vec![3, 0, 1];
        let mut naive = ring.one();
        for r in 0..10u128 {
            assert_eq!(ring.pow_mod(&g, r, &h).unwrap(), ring.div(&naive, &h).unwrap().1);
            naive = ring.mul(&naive, &g);
        }
    }

    #[test]
    fn irreducibility_oracle_over_gf2() {
        let field = PrimeField::new(2);
        let ring = PolyRing::new(&field);
        // x³ + x + 1 is irreducible over GF(2).
        assert_eq!(ring.is_irreducible(&[1, 1, 0, 1]), Ok(true));
        // x² + 1 = (x + 1)².
        assert_eq!(ring.is_irreducible(&[1, 0, 1]), Ok(false));
        // The AES modulus x⁸ + x⁴ + x³ + x + 1.
        assert_eq!(ring.is_irreducible(&[1, 1, 0, 1, 1, 0, 0, 0, 1]), Ok(true));
        // x⁸ + 1 = (x + 1)⁸.
        assert_eq!(
            ring.is_irreducible(&[1, 0, 0, 0, 0, 0, 0, 0, 1]),
            Ok(false)
        );
    }

    #[test]
    fn irreducibility_oracle_over_gf4() {
        let field = gf4();
        let ring = PolyRing::new(&field);
        let z = vec![0, 1];
        // x² + x + z has no root in GF(4), hence is irreducible there.
        assert_eq!(
            ring.is_irreducible(&[z, field.one(), field.one()]),
            Ok(true)
        );
        // x² + 1 = (x + 1)² over GF(4).
        assert_eq!(
            ring.is_irreducible(&[field.one(), field.zero(), field.one()]),
            Ok(false)
        );
    }

    #[test]
    fn prime_cofactors_start_with_one() {
        assert_eq!(prime_cofactors(1), vec![1]);
        assert_eq!(prime_cofactors(8), vec![1, 4]);
        assert_eq!(prime_cofactors(12), vec![1, 6, 4]);
    }

    #[test]
    fn random_polynomials_are_canonical() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let field = gf7();
        let ring = PolyRing::new(&field);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let g = ring.random(5, &mut rng);
            assert!(g.len() <= 6);
            assert_eq!(ring.normalize(g.clone()), g);
        }
    }
}
