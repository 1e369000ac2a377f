//! Fail-fast cursor
//!
//! A cursor does not hold a borrow of the list between steps, so the owner
//! is free to mutate the list mid-traversal. Each step is handed the list
//! again and compares its modification stamp against the one captured at
//! creation.

use crate::{ArrayList, ListError, Result};

/// Forward-only, non-restartable position over an [`ArrayList`]
///
/// Created by [`ArrayList::cursor`]. Valid until exhausted or until the list
/// is structurally modified, after which every step fails with
/// [`ListError::ConcurrentMutation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    /// Next index to yield
    position: usize,

    /// Stamp captured at creation
    expected: u64,
}

impl Cursor {
    pub(crate) fn new(expected: u64) -> Self {
        Self {
            position: 0,
            expected,
        }
    }

    /// Index of the next element this cursor would yield
    pub fn position(&self) -> usize {
        self.position
    }

    /// True while live elements remain ahead of the cursor
    pub fn has_next<T>(&self, list: &ArrayList<T>) -> Result<bool> {
        self.validate(list)?;
        Ok(self.position < list.len())
    }

    /// Yield the next element by reference into the list's buffer
    ///
    /// Returns `Ok(None)` once exhausted. Does not advance on error.
    pub fn try_next<'a, T>(&mut self, list: &'a ArrayList<T>) -> Result<Option<&'a T>> {
        self.validate(list)?;

        let item = list.get(self.position).ok();
        if item.is_some() {
            self.position += 1;
        }
        Ok(item)
    }

    fn validate<T>(&self, list: &ArrayList<T>) -> Result<()> {
        let actual = list.modification_count();
        if actual != self.expected {
            return Err(ListError::ConcurrentMutation {
                expected: self.expected,
                actual,
            });
        }
        Ok(())
    }
}
