//! Iteration over an [`ArrayList`]
//!
//! [`Cursor`] is the fail-fast primitive. [`Iter`] drives a cursor under a
//! shared borrow, which pins the stamp for its whole lifetime, and
//! [`IntoIter`] consumes the list.

mod cursor;

pub use cursor::Cursor;

use std::iter::FusedIterator;

use crate::ArrayList;

impl<T> ArrayList<T> {
    /// Fail-fast cursor positioned before the first element
    pub fn cursor(&self) -> Cursor {
        Cursor::new(self.modification_count())
    }

    /// Borrowing iterator over the live elements
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.cursor(),
        }
    }
}

/// Borrowing iterator over an [`ArrayList`]
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    list: &'a ArrayList<T>,
    cursor: Cursor,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        // The shared borrow keeps the stamp fixed, so a step can end but not fail.
        self.cursor.try_next(self.list).ok().flatten()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len().saturating_sub(self.cursor.position());
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over an [`ArrayList`]
#[derive(Debug)]
pub struct IntoIter<T> {
    slots: std::vec::IntoIter<Option<T>>,
    remaining: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.slots.next().flatten()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            remaining: self.len,
            slots: self.buffer.into_vec().into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
