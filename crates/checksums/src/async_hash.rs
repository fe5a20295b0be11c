//! crates/checksums/src/async_hash.rs
//!
//! Tokio front-end for the dispatcher. Hashing is CPU-bound, so the work runs
//! on the blocking pool via `spawn_blocking` and the caller only awaits it.

use tokio::task;

use crate::{Algorithm, HashError, Hasher};

/// Hashes `input` on tokio's blocking pool.
///
/// Produces exactly what [`hash`](crate::hash) produces for the same
/// arguments.
///
/// # Errors
///
/// Returns the dispatcher's error, or [`HashError::Join`] if the blocking task
/// panicked or was cancelled.
pub async fn hash_async(input: String, algorithm: Algorithm) -> Result<String, HashError> {
    hash_async_with(Hasher::new(algorithm), input).await
}

/// Hashes `input` with a preconfigured [`Hasher`] on tokio's blocking pool.
pub async fn hash_async_with(hasher: Hasher, input: String) -> Result<String, HashError> {
    task::spawn_blocking(move || hasher.hash(&input)).await?
}
