//! Reed-Solomon codes over configurable finite fields.
//!
//! Most Reed-Solomon implementations hard-wire one field, usually GF(256)
//! with log/antilog tables. This crate instead builds the whole algebraic
//! tower at runtime: a prime field Z/pZ, its polynomial ring, an extension
//! field Fq = (Z/pZ)[x]/⟨f⟩ for an irreducible modulus f, the polynomial
//! ring over Fq, and matrices over either field. On top of that tower sit
//! one encoder pair (evaluation form and generator form) and three decoders
//! (linear algebra, extended Euclidean, BCH/syndrome). The math is covered
//! by any book about coding theory, for example "Error Correction Coding:
//! Mathematical Methods and Algorithms" by Moon.
//!
//! The trade-off is deliberate: exact, inspectable arithmetic over any
//! prime-power field rather than raw throughput over one byte field. Use it
//! to study the algorithms, to work in unusual fields, or to model layered
//! storage codes (see the `disc` example for a two-layer interleaved code
//! with burst errors).
//!
//! Field parameters travel as explicit context values ([`PrimeField`],
//! [`ExtensionField`]) borrowed by every operation; the elements themselves
//! are plain data with no hidden state.

pub mod codec;
pub mod field;
pub mod matrix;
pub mod poly;

pub use codec::{generator_polynomial, BchCode, EvaluationCode};
pub use field::{ArithmeticError, ExtensionField, Field, PrimeField};
pub use matrix::MatrixSpace;
pub use poly::PolyRing;
