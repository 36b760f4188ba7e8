//! Two-layer interleaved Reed-Solomon storage, the way optical discs do it:
//! an inner and an outer BCH-form code over GF(2⁸) with the data interleaved
//! between them, so that a burst wiping out whole inner codewords spreads
//! into few errors per outer codeword.

use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use rscodec::{BchCode, ExtensionField};

type Symbol = Vec<u64>;

/// GF(2⁸) with f = x⁸ + x⁴ + x³ + x + 1.
fn gf256() -> ExtensionField {
    ExtensionField::new(2, vec![1, 1, 0, 1, 1, 0, 0, 0, 1])
}

/// One byte as a field element: bit w is the coefficient of x^w.
fn symbol_from_byte(byte: u8) -> Symbol {
    let mut bits: Symbol = (0..8).map(|w| ((byte >> w) & 1) as u64).collect();
    while bits.last() == Some(&0) {
        bits.pop();
    }
    bits
}

fn byte_from_symbol(symbol: &[u64]) -> u8 {
    (0..8).fold(0, |byte, w| {
        byte + ((symbol.get(w).copied().unwrap_or(0) as u8) << w)
    })
}

/// Read the blocks column by column and re-chunk to the same block length.
fn interleave(blocks: &[Vec<Symbol>]) -> Vec<Vec<Symbol>> {
    let cols = blocks[0].len();
    let mut flat = Vec::with_capacity(blocks.len() * cols);
    for k in 0..cols {
        for block in blocks {
            flat.push(block[k].clone());
        }
    }
    flat.chunks(cols).map(<[Symbol]>::to_vec).collect()
}

fn deinterleave(blocks: &[Vec<Symbol>]) -> Vec<Vec<Symbol>> {
    let cols = blocks[0].len();
    let flat: Vec<Symbol> = blocks.iter().flatten().cloned().collect();
    (0..blocks.len())
        .map(|t| (0..cols).map(|s| flat[t + s * blocks.len()].clone()).collect())
        .collect()
}

fn pad(mut block: Vec<Symbol>, len: usize) -> Vec<Symbol> {
    block.resize(len, Vec::new());
    block
}

#[test]
fn interleaving_round_trips() {
    let blocks: Vec<Vec<Symbol>> = (0u64..4)
        .map(|j| (0u64..6).map(|k| vec![j * 6 + k]).collect())
        .collect();
    assert_eq!(deinterleave(&interleave(&blocks)), blocks);
}

#[test]
fn burst_of_one_inner_block_is_repaired_by_the_outer_layer() {
    let field = gf256();
    let alpha = vec![0u64, 1];
    // Inner code 32/28, outer code 28/24, as on a compact disc.
    let inner = BchCode::new(&field, 28, 32, alpha.clone(), 1).unwrap();
    let outer = BchCode::new(&field, 24, 28, alpha, 1).unwrap();
    let blocks = 16;

    let text: String = "Two stacked Reed-Solomon layers survive scratches. "
        .chars()
        .cycle()
        .take(outer.dimension() * blocks)
        .collect();
    let data = text.as_bytes();

    // Chunk into outer messages and encode both layers with interleaving
    // in between.
    let outer_words: Vec<Vec<Symbol>> = data
        .chunks(outer.dimension())
        .map(|chunk| outer.encode(&chunk.iter().map(|b| symbol_from_byte(*b)).collect::<Vec<_>>()))
        .collect();
    let inner_words: Vec<Vec<Symbol>> = interleave(&outer_words)
        .iter()
        .map(|block| inner.encode(block))
        .collect();

    // A scratch wipes out one full inner codeword.
    let mut rng = StdRng::seed_from_u64(42);
    let mut damaged = inner_words;
    damaged[7] = (0..inner.length())
        .map(|_| {
            let byte: u8 = rng.random();
            symbol_from_byte(byte)
        })
        .collect();

    // Inner decode cannot fix 32 corrupted symbols, but the deinterleave
    // spreads its garbage to at most t = 2 positions per outer word.
    let inner_decoded: Vec<Vec<Symbol>> = damaged
        .iter()
        .map(|word| pad(inner.decode(word).unwrap(), inner.dimension()))
        .collect();
    let recovered: Vec<u8> = deinterleave(&inner_decoded)
        .iter()
        .flat_map(|word| {
            pad(outer.decode(word).unwrap(), outer.dimension())
                .iter()
                .map(|symbol| byte_from_symbol(symbol))
                .collect::<Vec<u8>>()
        })
        .collect();

    assert_eq!(recovered, data);
}
