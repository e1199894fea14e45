//! The MD5 compression function.
//!
//! Each 64-byte block is decoded into sixteen little-endian words and mixed
//! into the running state by 64 rounds, split into four groups of 16 that
//! differ in their boolean function and message-word schedule.

use crate::BLOCK_LEN;
use crate::constants::{K, SHIFTS};

/// Decodes a block into its sixteen little-endian message words.
#[inline]
fn load_words(block: &[u8; BLOCK_LEN]) -> [u32; 16] {
    let mut words = [0_u32; 16];
    for (word, bytes) in words.iter_mut().zip(block.as_chunks::<4>().0) {
        *word = u32::from_le_bytes(*bytes);
    }
    words
}

/// Selects the boolean mix of `b`, `c`, `d` and the message-word index for
/// round `i`.
#[inline(always)]
const fn round_inputs(i: usize, b: u32, c: u32, d: u32) -> (u32, usize) {
    match i {
        0..=15 => ((b & c) | (!b & d), i),
        16..=31 => ((d & b) | (!d & c), (5 * i + 1) % 16),
        32..=47 => (b ^ c ^ d, (3 * i + 5) % 16),
        _ => (c ^ (b | !d), (7 * i) % 16),
    }
}

/// Folds one block into `state`.
pub(crate) fn compress(state: &mut [u32; 4], block: &[u8; BLOCK_LEN]) {
    let x = load_words(block);
    let [mut a, mut b, mut c, mut d] = *state;

    for i in 0..64 {
        let (f, g) = round_inputs(i, b, c, d);
        let f = f.wrapping_add(a).wrapping_add(K[i]).wrapping_add(x[g]);
        a = d;
        d = c;
        c = b;
        b = b.wrapping_add(f.rotate_left(SHIFTS[i]));
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
}
