#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `md5_engine` is a from-scratch implementation of the MD5 message-digest
//! algorithm described in RFC 1321. Given any byte sequence it produces the
//! 128-bit [`Digest`], which [`to_hex`] renders as the familiar 32-character
//! lowercase hexadecimal string.
//!
//! # Design
//!
//! The engine is a single pure function. [`digest`] pads the input with
//! [`pad_message`], seeds the four-word state with the standard initial values
//! and folds every 64-byte block into it with the four-round compression
//! function. The round constants and shift amounts live in immutable statics
//! so nothing is shared or mutated across calls.
//!
//! # Invariants
//!
//! - The padded message is always a non-empty multiple of [`BLOCK_LEN`] bytes.
//! - All word arithmetic wraps modulo 2^32.
//! - Every word and the length trailer are encoded little-endian explicitly,
//!   independent of the host byte order.
//!
//! # Examples
//!
//! ```
//! use md5_engine::{digest, digest_hex, to_hex};
//!
//! let raw = digest(b"abc");
//! assert_eq!(to_hex(&raw), "900150983cd24fb0d6963f7d28e17f72");
//!
//! // Text is hashed as its UTF-8 bytes.
//! assert_eq!(digest_hex(""), "d41d8cd98f00b204e9800998ecf8427e");
//! ```

mod compress;
mod constants;
pub mod hex;
mod padding;

#[cfg(feature = "parallel")]
#[cfg_attr(docsrs, doc(cfg(feature = "parallel")))]
pub mod parallel;

pub use hex::to_hex;
pub use padding::{pad_message, padded_len};

#[cfg(feature = "parallel")]
pub use parallel::{ParallelMd5, digest_batch};

/// MD5 digest type (16 bytes / 128 bits).
pub type Digest = [u8; DIGEST_LEN];

/// Length of an MD5 digest in bytes.
pub const DIGEST_LEN: usize = 16;

/// Length of one MD5 message block in bytes.
pub const BLOCK_LEN: usize = 64;

/// Compute the MD5 digest of `input`.
///
/// Every byte sequence, including the empty one, has a digest; the function
/// cannot fail short of the allocator aborting on the padded copy.
#[must_use]
pub fn digest(input: &[u8]) -> Digest {
    let message = pad_message(input);
    let mut state = constants::INITIAL_STATE;

    let (blocks, remainder) = message.as_chunks::<BLOCK_LEN>();
    debug_assert!(remainder.is_empty());

    // Blocks chain strictly in order: each one starts from the previous state.
    for block in blocks {
        compress::compress(&mut state, block);
    }

    let mut out = [0_u8; DIGEST_LEN];
    for (chunk, word) in out.chunks_exact_mut(4).zip(state) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    out
}

/// Compute the MD5 digest of `input` and render it as lowercase hex.
///
/// Accepts anything that views as bytes, so `&str` and `String` are hashed as
/// their UTF-8 encoding.
///
/// ```
/// assert_eq!(
///     md5_engine::digest_hex("hello world!"),
///     "fc3ff98e8c6a0d3087d515c0473f8677"
/// );
/// ```
#[must_use]
pub fn digest_hex(input: impl AsRef<[u8]>) -> String {
    to_hex(&digest(input.as_ref()))
}
