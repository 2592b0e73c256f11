//! Content hashing using FxHash.
//!
//! Used to tell whether a README actually changed, and to recognise the
//! watcher's own writes.

use rustc_hash::FxHasher;
use std::hash::Hasher;

/// Compute 64-bit hash from byte data.
#[inline]
pub fn compute<T: AsRef<[u8]> + ?Sized>(data: &T) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(data.as_ref());
    hasher.finish()
}

/// Hash a file's contents, `None` if it cannot be read.
pub fn compute_file(path: &std::path::Path) -> Option<u64> {
    std::fs::read(path).ok().map(|bytes| compute(&bytes))
}
