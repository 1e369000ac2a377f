//! Structural equality and hash codes
//!
//! Two lists are equal when they hold equal elements in the same order;
//! capacity and modification history never matter.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::ArrayList;

/// Multiplier applied to the running hash before adding each element
pub const HASH_MULTIPLIER: u64 = 31;

/// Multiplier applied to the length-derived seed
pub const SEED_MULTIPLIER: u64 = 7;

/// Starting value of the running hash for a list of `len` elements
#[inline]
pub fn hash_seed(len: usize) -> u64 {
    SEED_MULTIPLIER.wrapping_mul(HASH_MULTIPLIER.wrapping_add(len as u64))
}

/// Fold element hashes into a list hash: `result = 31 * result + hash`
pub fn combine_hashes<I>(len: usize, element_hashes: I) -> u64
where
    I: IntoIterator<Item = u64>,
{
    element_hashes.into_iter().fold(hash_seed(len), |result, hash| {
        HASH_MULTIPLIER.wrapping_mul(result).wrapping_add(hash)
    })
}

/// Hash of a single element through a fixed-key hasher
pub fn element_hash<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

impl<T> ArrayList<T> {
    /// Order-sensitive hash code with a caller-supplied element hash
    ///
    /// For nullable lists, `|e| e.as_ref().map_or(0, element_hash)` hashes
    /// `None` as zero.
    pub fn hash_code_with<F>(&self, element: F) -> u64
    where
        F: FnMut(&T) -> u64,
    {
        combine_hashes(self.len(), self.iter().map(element))
    }
}

impl<T: Hash> ArrayList<T> {
    /// Order-sensitive hash code consistent with `==`
    pub fn hash_code(&self) -> u64 {
        self.hash_code_with(element_hash)
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T: PartialEq> PartialEq<[T]> for ArrayList<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for ArrayList<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        *self == **other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for ArrayList<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        *self == other[..]
    }
}

impl<T: Hash> Hash for ArrayList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}
