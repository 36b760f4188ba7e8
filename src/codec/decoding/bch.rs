//! Syndrome-based (Peterson-Gorenstein-Zierler style) decoding for the
//! generator-form code.
//!
//! The classic four steps:
//!
//! 1. Compute 2t syndromes by evaluating the received polynomial at the
//!    consecutive powers αⁱ, αⁱ⁺¹, …. These are the generator's roots, so
//!    only the error polynomial contributes.
//! 2. Solve the Hankel system over the syndromes for the error-locator
//!    coefficients. When the system matrix is singular the actual error
//!    count is lower: retry with the capacity reduced by one until the
//!    matrix is regular (or capacity zero).
//! 3. Find the locator's roots by trying every position power α⁰ … αⁿ⁻¹.
//! 4. Solve a second system for the error magnitudes at the located
//!    positions, subtract the reconstructed error polynomial and divide by
//!    the generator.

use crate::codec::BchCode;
use crate::field::{ArithmeticError, Field};
use crate::matrix::MatrixSpace;
use crate::poly::PolyRing;

pub(crate) fn decode<F: Field>(
    code: &BchCode<'_, F>,
    received: &[F::Element],
) -> Result<Vec<F::Element>, ArithmeticError> {
    let field = code.field;
    let ring = PolyRing::new(field);
    let space = MatrixSpace::new(field);
    let n = code.n;
    assert_eq!(received.len(), n, "received word length must equal n");

    // Step 1 + 2: locator system at the largest plausible error count.
    let t0 = (n - code.k) / 2;
    let (matrix, rhs, t) = locator_system(code, received, t0)?;

    let mut augmented = matrix;
    augmented.push(rhs);
    let (reduced, _) = space.gauss_jordan(augmented);
    let solved_rhs = reduced[reduced.len() - 1].clone();

    let one = field.one();
    let mut locator_coeffs = solved_rhs.clone();
    for (j, col) in reduced[..t].iter().enumerate() {
        for (s, entry) in col.iter().enumerate() {
            if *entry == one {
                locator_coeffs[s] = solved_rhs[j].clone();
            }
        }
    }

    // The locator is monic with the solved coefficients negated:
    // w(x) = x^t − w_{t−1}·x^{t−1} − … − w₀.
    let mut locator = ring.neg(&locator_coeffs);
    locator.push(one.clone());

    // Step 3: root search over the position powers α⁰ … αⁿ⁻¹.
    let mut positions: Vec<usize> = Vec::new();
    if ring.eval(&locator, &one) == field.zero() {
        positions.push(0);
    }
    let mut candidate = one.clone();
    for position in 1..n {
        candidate = field.mul(&candidate, &code.alpha);
        if ring.eval(&locator, &candidate) == field.zero() {
            positions.push(position);
        }
    }

    // Step 4: magnitude system. Right-hand side: the first t syndromes.
    let alpha_i = field.pow(&code.alpha, code.power)?;
    let mut point = alpha_i.clone();
    let mut syndromes = vec![ring.eval(received, &alpha_i)];
    for _ in 1..t {
        point = field.mul(&point, &code.alpha);
        syndromes.push(ring.eval(received, &point));
    }

    // One column per located position b, with entries α^((i+j)·b).
    let mut magnitude_system: Vec<Vec<F::Element>> = Vec::new();
    for &b in &positions {
        let alpha_b = field.pow(&code.alpha, b as i64)?;
        let mut entry = field.pow(&alpha_i, b as i64)?;
        let mut col = vec![entry.clone()];
        for _ in 1..t {
            entry = field.mul(&entry, &alpha_b);
            col.push(entry.clone());
        }
        magnitude_system.push(col);
    }
    magnitude_system.push(syndromes);
    let (reduced, _) = space.gauss_jordan(magnitude_system);
    let solved_rhs = reduced[reduced.len() - 1].clone();

    let mut magnitudes = solved_rhs.clone();
    for (j, col) in reduced[..t.min(reduced.len())].iter().enumerate() {
        for (s, entry) in col.iter().enumerate() {
            if *entry == one {
                magnitudes[s] = solved_rhs[j].clone();
            }
        }
    }

    // Reassemble the error polynomial and strip it from the received word.
    let error_poly = if positions.is_empty() {
        ring.zero()
    } else {
        let mut e = vec![field.zero(); positions[positions.len() - 1] + 1];
        for (idx, &b) in positions.iter().enumerate() {
            e[b] = magnitudes[idx].clone();
        }
        e
    };

    let codeword = ring.add(received, &ring.neg(&error_poly));
    Ok(ring.div(&codeword, &code.generator)?.0)
}

/// Build the Hankel locator system for an assumed error count `t`,
/// backing off one error at a time while the system matrix is singular.
///
/// Returns the matrix, the right-hand side and the error count actually
/// used. Recursion depth is bounded by t.
fn locator_system<F: Field>(
    code: &BchCode<'_, F>,
    received: &[F::Element],
    t: usize,
) -> Result<(Vec<Vec<F::Element>>, Vec<F::Element>, usize), ArithmeticError> {
    let field = code.field;
    let ring = PolyRing::new(field);
    let space = MatrixSpace::new(field);

    // Syndromes: the received polynomial evaluated at 2t consecutive powers
    // of alpha starting at alpha^power.
    let mut point = field.pow(&code.alpha, code.power)?;
    let mut syndromes = vec![ring.eval(received, &point)];
    for _ in 1..2 * t {
        point = field.mul(&point, &code.alpha);
        syndromes.push(ring.eval(received, &point));
    }

    let mut matrix = space.zero(t, t);
    for (j, col) in matrix.iter_mut().enumerate() {
        *col = syndromes[j..t + j].to_vec();
    }
    let rhs = if t == 0 {
        syndromes.clone()
    } else {
        syndromes[syndromes.len() - t..].to_vec()
    };

    if space.det(&matrix) == field.zero() && t != 0 {
        return locator_system(code, received, t - 1);
    }
    Ok((matrix, rhs, t))
}

#[cfg(test)]
use pretty_assertions::assert_eq;

#[cfg(test)]
fn gf8() -> crate::field::ExtensionField {
    crate::field::ExtensionField::new(2, vec![1, 1, 0, 1])
}

#[cfg(test)]
fn test_code(field: &crate::field::ExtensionField) -> BchCode<'_, crate::field::ExtensionField> {
    BchCode::new(field, 3, 7, vec![0, 1], 1).unwrap()
}

#[test]
fn clean_word_decodes_to_the_message() {
    let field = gf8();
    let code = test_code(&field);
    let message = vec![vec![1], vec![1, 1], vec![0, 1]];
    let received = code.encode(&message);
    assert_eq!(decode(&code, &received).unwrap(), message);
}

#[test]
fn recovers_from_two_errors() {
    let field = gf8();
    let code = test_code(&field);
    let message = vec![vec![1], vec![1, 1], vec![0, 1]];
    let mut received = code.encode(&message);
    received[2] = field.add(&received[2], &vec![1, 0, 1]);
    received[6] = field.add(&received[6], &field.one());
    assert_eq!(decode(&code, &received).unwrap(), message);
}

#[test]
fn single_error_takes_the_degenerate_capacity_path() {
    // With one actual error the 2×2 syndrome matrix is singular and the
    // decoder must back off to capacity one.
    let field = gf8();
    let code = test_code(&field);
    let message = vec![vec![0, 1], vec![1]];
    let mut received = code.encode(&message);
    received[4] = field.add(&received[4], &vec![1, 1]);
    assert_eq!(decode(&code, &received).unwrap(), message);
}

#[test]
fn corrupted_position_zero_is_found() {
    let field = gf8();
    let code = test_code(&field);
    let message = vec![vec![1, 1], vec![0, 1], vec![1]];
    let mut received = code.encode(&message);
    received[0] = field.add(&received[0], &vec![0, 1, 1]);
    assert_eq!(decode(&code, &received).unwrap(), message);
}
