//! Recording and reading back a message from a simulated optical disc.
//!
//! The disc pipeline stacks two BCH-form Reed-Solomon codes over GF(2⁸)
//! (inner 32/28, outer 28/24) with an interleaving stage between them.
//! A scratch destroys seven consecutive inner codewords, far beyond the
//! inner code's capacity, but deinterleaving spreads the damage to at most
//! two symbols per outer codeword, which the outer layer corrects.
//!
//! Run with `cargo run --example disc`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use rscodec::{BchCode, ExtensionField};

type Symbol = Vec<u64>;

const TEXT: &str = "Reed-Solomon codes protect every compact disc: the data \
is encoded twice, interleaved in between, so that a scratch that wipes out \
whole inner codewords leaves only scattered single errors for the outer \
decoder. ";

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

fn main() {
    // GF(2⁸) with the modulus x⁸ + x⁴ + x³ + x + 1; x generates enough
    // distinct powers for both code lengths.
    let field = ExtensionField::new(2, vec![1, 1, 0, 1, 1, 0, 0, 0, 1]);
    let alpha = vec![0u64, 1];
    let inner = BchCode::new(&field, 28, 32, alpha.clone(), 1).unwrap();
    let outer = BchCode::new(&field, 24, 28, alpha, 1).unwrap();

    let blocks = 109;
    let message: String = TEXT
        .chars()
        .cycle()
        .take(outer.dimension() * blocks)
        .collect();
    let data = message.as_bytes();

    // Burn the disc: outer encode, interleave, inner encode.
    let outer_words: Vec<Vec<Symbol>> = data
        .chunks(outer.dimension())
        .map(|chunk| {
            let symbols: Vec<Symbol> = chunk.iter().map(|b| symbol_from_byte(*b)).collect();
            outer.encode(&symbols)
        })
        .collect();
    let recorded: Vec<Vec<Symbol>> = interleave(&outer_words)
        .iter()
        .map(|block| inner.encode(block))
        .collect();

    // The scratch: seven consecutive inner codewords replaced by noise.
    let mut rng = StdRng::seed_from_u64(0xd15c);
    let mut read_back = recorded;
    for word in read_back[101..=107].iter_mut() {
        *word = (0..inner.length())
            .map(|_| {
                let byte: u8 = rng.random();
                symbol_from_byte(byte)
            })
            .collect();
    }
    println!(
        "recorded {} bytes in {} sectors, scratched sectors 101..=107",
        data.len(),
        read_back.len()
    );

    // Read the disc: inner decode, deinterleave, outer decode.
    let inner_decoded: Vec<Vec<Symbol>> = read_back
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

    assert_eq!(recovered, data, "read-back does not match the recording");
    println!(
        "recovered all {} bytes:\n{}…",
        recovered.len(),
        String::from_utf8_lossy(&recovered[..TEXT.len()])
    );
}
