//! crates/checksums/src/parallel.rs
//!
//! Rayon integration for hashing many independent inputs at once.

use rayon::prelude::*;

use crate::{Algorithm, HashError, Hasher};

/// Hashes every input on rayon's thread pool.
///
/// Results are returned in input order. A failure for one input does not
/// affect the others.
///
/// # Example
///
/// ```
/// use checksums::{Algorithm, hash_batch};
///
/// let digests = hash_batch(&["", "abc"], Algorithm::Md5);
/// assert_eq!(digests[0].as_deref(), Ok("d41d8cd98f00b204e9800998ecf8427e"));
/// assert_eq!(digests[1].as_deref(), Ok("900150983cd24fb0d6963f7d28e17f72"));
/// ```
pub fn hash_batch<T>(inputs: &[T], algorithm: Algorithm) -> Vec<Result<String, HashError>>
where
    T: AsRef<str> + Sync,
{
    inputs.par_iter().hash_all(algorithm)
}

/// Extension trait for hashing the items of a parallel iterator.
///
/// # Example
///
/// ```
/// use rayon::prelude::*;
/// use checksums::{Algorithm, ParallelHash};
///
/// let words = vec!["alpha".to_owned(), "beta".to_owned()];
/// let digests = words.par_iter().hash_all(Algorithm::Sha256);
/// assert_eq!(digests.len(), 2);
/// ```
pub trait ParallelHash {
    /// Hashes each item, preserving iteration order.
    fn hash_all(self, algorithm: Algorithm) -> Vec<Result<String, HashError>>;
}

impl<I, T> ParallelHash for I
where
    I: IndexedParallelIterator<Item = T>,
    T: AsRef<str>,
{
    fn hash_all(self, algorithm: Algorithm) -> Vec<Result<String, HashError>> {
        let hasher = Hasher::new(algorithm);
        self.map(|input| hasher.hash(input.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_matches_sequential() {
        let inputs: Vec<String> = (0..64).map(|i| format!("test input {i}")).collect();

        for algorithm in Algorithm::ALL {
            let batch = hash_batch(&inputs, algorithm);
            let sequential: Vec<_> = inputs
                .iter()
                .map(|input| crate::hash(input, algorithm))
                .collect();
            assert_eq!(batch, sequential);
        }
    }

    #[test]
    fn batch_empty_returns_empty() {
        let empty: &[&str] = &[];
        assert!(hash_batch(empty, Algorithm::Md5).is_empty());
    }

    #[test]
    fn batch_with_different_lengths() {
        let long = "x".repeat(1000);
        let inputs = ["", "a", "short", long.as_str()];
        let batch = hash_batch(&inputs, Algorithm::Md5);
        for (index, input) in inputs.iter().enumerate() {
            assert_eq!(
                batch[index],
                crate::hash(input, Algorithm::Md5),
                "mismatch at index {index}"
            );
        }
    }
}
