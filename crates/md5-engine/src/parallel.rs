//! Rayon integration for hashing many independent inputs.
//!
//! A single digest is inherently sequential because every block starts from
//! the state left by the previous one. Distinct inputs share nothing, so they
//! are spread across the rayon thread pool here.

use rayon::prelude::*;

use crate::{Digest, digest};

/// Compute MD5 digests for multiple inputs in parallel.
///
/// Returns digests in the same order as `inputs`.
///
/// ```
/// use md5_engine::{digest, digest_batch};
///
/// let inputs = [b"input1".as_slice(), b"input2", b"input3"];
/// let digests = digest_batch(&inputs);
/// assert_eq!(digests[1], digest(b"input2"));
/// ```
pub fn digest_batch<T: AsRef<[u8]> + Sync>(inputs: &[T]) -> Vec<Digest> {
    if inputs.is_empty() {
        return Vec::new();
    }

    inputs.par_iter().map(|input| digest(input.as_ref())).collect()
}

/// Extension trait for hashing the items of a parallel iterator.
///
/// ```
/// use md5_engine::ParallelMd5;
/// use rayon::prelude::*;
///
/// let data: Vec<Vec<u8>> = vec![b"hello".to_vec(), b"world".to_vec()];
/// let digests = data.par_iter().md5_digest();
/// assert_eq!(digests.len(), 2);
/// ```
pub trait ParallelMd5 {
    /// Compute the digest of every item, preserving iteration order.
    fn md5_digest(self) -> Vec<Digest>;
}

impl<I, T> ParallelMd5 for I
where
    I: IndexedParallelIterator<Item = T>,
    T: AsRef<[u8]> + Send,
{
    fn md5_digest(self) -> Vec<Digest> {
        self.map(|item| digest(item.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_matches_sequential() {
        let inputs: Vec<Vec<u8>> = (0..32)
            .map(|i| format!("test input {i}").into_bytes())
            .collect();

        let batch = digest_batch(&inputs);
        let sequential: Vec<Digest> = inputs.iter().map(|i| digest(i)).collect();

        assert_eq!(batch, sequential);
    }

    #[test]
    fn batch_empty_returns_empty() {
        let empty: &[&[u8]] = &[];
        assert!(digest_batch(empty).is_empty());
    }

    #[test]
    fn batch_with_different_lengths() {
        let inputs: &[&[u8]] = &[b"", b"a", &[0_u8; 63], &[0_u8; 64], &[7_u8; 1000]];
        let batch = digest_batch(inputs);
        for (i, input) in inputs.iter().enumerate() {
            assert_eq!(batch[i], digest(input), "mismatch at index {i}");
        }
    }

    #[test]
    fn parallel_iterator_preserves_order() {
        let data: Vec<String> = (0..16).map(|i| "x".repeat(i * 10)).collect();
        let parallel = data.par_iter().md5_digest();
        let sequential: Vec<Digest> = data.iter().map(|d| digest(d.as_bytes())).collect();
        assert_eq!(parallel, sequential);
    }
}
