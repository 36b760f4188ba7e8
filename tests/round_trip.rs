//! Cross-decoder round trips over GF(256) with the AES field modulus.

use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use rscodec::{BchCode, EvaluationCode, ExtensionField, Field, PolyRing};

/// GF(2⁸) with f = x⁸ + x⁴ + x³ + x + 1.
fn gf256() -> ExtensionField {
    ExtensionField::new(2, vec![1, 1, 0, 1, 1, 0, 0, 0, 1])
}

/// Seven distinct nonzero points: the powers x⁰ … x⁶.
fn points(field: &ExtensionField) -> Vec<Vec<u64>> {
    let x = vec![0u64, 1];
    (0..7).map(|j| field.pow(&x, j).unwrap()).collect()
}

#[test]
fn all_three_decoders_correct_two_errors() {
    let field = gf256();
    let ring = PolyRing::new(&field);
    let mut rng = StdRng::seed_from_u64(2024);

    let eval_code = EvaluationCode::new(&field, 3, points(&field));
    let bch_code = BchCode::new(&field, 3, 7, vec![0, 1], 1).unwrap();
    assert_eq!(eval_code.correctable_errors(), 2);
    assert_eq!(bch_code.correctable_errors(), 2);

    for round in 0..10 {
        let message = ring.random(2, &mut rng);

        for (a, b) in [(0, 3), (1, 6), (2, 4)] {
            let corrupt = |word: &mut Vec<Vec<u64>>| {
                word[a] = field.add(&word[a], &vec![1, 0, 1]);
                word[b] = field.add(&word[b], &vec![0, 1, 1, 1]);
            };

            let mut received = eval_code.encode(&message);
            corrupt(&mut received);
            assert_eq!(
                eval_code.decode_linear(&received).unwrap(),
                message,
                "linear, round {}",
                round
            );
            assert_eq!(
                eval_code.decode_euclidean(&received).unwrap(),
                message,
                "euclidean, round {}",
                round
            );

            let mut received = bch_code.encode(&message);
            corrupt(&mut received);
            assert_eq!(
                bch_code.decode(&received).unwrap(),
                message,
                "bch, round {}",
                round
            );
        }
    }
}

#[test]
fn beyond_capacity_is_silent_corruption() {
    // Three errors exceed t = 2. The decoders still terminate and return a
    // well-formed polynomial, but nothing flags the failure; the output is
    // simply not asserted to match here. This mirrors the documented
    // limitation of the algorithms.
    let field = gf256();
    let ring = PolyRing::new(&field);
    let mut rng = StdRng::seed_from_u64(99);

    let eval_code = EvaluationCode::new(&field, 3, points(&field));
    let bch_code = BchCode::new(&field, 3, 7, vec![0, 1], 1).unwrap();
    let message = ring.random(2, &mut rng);

    let mut received = eval_code.encode(&message);
    for i in 0..3 {
        received[i] = field.add(&received[i], &vec![1, 1]);
    }
    let _ = eval_code.decode_linear(&received);
    let _ = eval_code.decode_euclidean(&received);

    let mut received = bch_code.encode(&message);
    for i in 0..3 {
        received[i] = field.add(&received[i], &vec![1, 1]);
    }
    let _ = bch_code.decode(&received);
}

#[test]
fn encoders_agree_on_the_codeword_space() {
    // A generator-form codeword evaluates to zero at every generator root.
    let field = gf256();
    let ring = PolyRing::new(&field);
    let mut rng = StdRng::seed_from_u64(7);

    let bch_code = BchCode::new(&field, 3, 7, vec![0, 1], 1).unwrap();
    let message = ring.random(2, &mut rng);
    let codeword = bch_code.encode(&message);
    let x = vec![0u64, 1];
    for j in 1..=4 {
        let root = field.pow(&x, j).unwrap();
        assert_eq!(ring.eval(&codeword, &root), field.zero());
    }
}
