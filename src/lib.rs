//! # Elastic Array List
//!
//! A growable, array-backed list that gives memory back when it empties out.
//!
//! ## Core Behaviour
//!
//! 1. **Doubling growth**: appends double the capacity (0 → 1 → 2 → 4 → …)
//! 2. **Exact-fit bulk growth**: `add_all` reallocates at most once per batch
//! 3. **Occupancy shrink**: after a removal, capacity halves once when fewer
//!    than half of the slots are live
//! 4. **Fail-fast cursors**: every structural change bumps a modification
//!    stamp, and cursors refuse to step once the stamp has moved
//! 5. **Single-pass compaction**: `remove_all`/`retain_all` rewrite the live
//!    prefix in one pass instead of shifting per removed element
//!
//! ## Usage Example
//!
//! ```
//! use elastic_list::{ArrayList, ListError};
//!
//! let mut list = ArrayList::try_with_capacity(0)?;
//! list.add("1");
//! list.add("2");
//! assert_eq!(list.capacity(), 2);
//!
//! let mut cursor = list.cursor();
//! while let Some(item) = cursor.try_next(&list)? {
//!     let _ = item;
//! }
//!
//! list.add("3");
//! assert!(matches!(
//!     cursor.has_next(&list),
//!     Err(ListError::ConcurrentMutation { .. })
//! ));
//! # Ok::<(), ListError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

// Core modules - one per component of the list
pub mod storage;    // Buffer ownership, growth and shrink
pub mod iter;       // Fail-fast cursor and borrowing iterators
pub mod bulk;       // Membership tests and single-pass compaction
pub mod equality;   // Structural equality and hash codes
pub mod profile;    // Reallocation accounting

// Re-exports for convenience
pub use storage::ArrayList;
pub use iter::{Cursor, IntoIter, Iter};
pub use profile::{Reallocation, ReallocationKind, ReallocationProfile};

use thiserror::Error;

/// Capacity used by [`ArrayList::new`] and [`ListConfig::default`].
pub const DEFAULT_CAPACITY: usize = 10;

/// Construction parameters for an [`ArrayList`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListConfig {
    /// Slots allocated up front
    pub initial_capacity: usize,

    /// Record every reallocation in a [`ReallocationProfile`]
    pub profile_reallocations: bool,
}

impl ListConfig {
    /// Configuration with an explicit initial capacity and profiling off
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            profile_reallocations: false,
        }
    }

    /// Enable reallocation profiling
    pub fn with_profiling(mut self) -> Self {
        self.profile_reallocations = true;
        self
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

/// Errors raised by list operations
///
/// Every variant is a contract violation reported before any state changes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// Initial capacity was negative or not representable
    #[error("initial capacity cannot be negative: {0}")]
    InvalidArgument(String),

    /// Index outside the live range `0..len`
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Live length at the time of the call
        len: usize,
    },

    /// The list was structurally modified after the cursor was created
    #[error("list modified during iteration (expected stamp {expected}, found {actual})")]
    ConcurrentMutation {
        /// Stamp captured when the cursor was created
        expected: u64,
        /// Stamp observed on the list
        actual: u64,
    },

    /// Destination element type cannot hold the value at `index`
    #[error("element at index {index} cannot be stored in the destination array")]
    TypeMismatch {
        /// Position of the first element that failed conversion
        index: usize,
    },
}

/// Result alias for list operations
pub type Result<T> = std::result::Result<T, ListError>;
