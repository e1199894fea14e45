//! Message padding and length trailer.

use crate::BLOCK_LEN;

/// Bytes reserved at the end of the final block for the bit-length trailer.
const LENGTH_TRAILER: usize = 8;

/// Returns the length in bytes of the padded message for an input of
/// `input_len` bytes.
///
/// The result always leaves room for the `0x80` marker and the 8-byte length,
/// so it is at least one block even for empty input.
///
/// ```
/// use md5_engine::padded_len;
///
/// assert_eq!(padded_len(0), 64);
/// assert_eq!(padded_len(55), 64);
/// assert_eq!(padded_len(56), 128);
/// ```
#[must_use]
pub const fn padded_len(input_len: usize) -> usize {
    (input_len + 1 + LENGTH_TRAILER).div_ceil(BLOCK_LEN) * BLOCK_LEN
}

/// Builds the padded message for `input`.
///
/// Appends `0x80`, zero-fills until the length is 56 modulo 64, then appends
/// the original length in bits as a little-endian `u64`. Bit lengths beyond
/// 64 bits keep only their low 64 bits.
#[must_use]
pub fn pad_message(input: &[u8]) -> Vec<u8> {
    let bit_len = (input.len() as u64).wrapping_mul(8);
    let total = padded_len(input.len());

    let mut message = Vec::with_capacity(total);
    message.extend_from_slice(input);
    message.push(0x80);
    message.resize(total - LENGTH_TRAILER, 0);
    message.extend_from_slice(&bit_len.to_le_bytes());

    debug_assert_eq!(message.len() % BLOCK_LEN, 0);
    message
}
