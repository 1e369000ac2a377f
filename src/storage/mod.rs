//! Backing storage for [`ArrayList`]
//!
//! Owns the buffer, the live length and the modification stamp, and is the
//! only place that reallocates. The arithmetic behind every reallocation
//! lives in [`policy`].

pub mod policy;

use std::fmt;

use tracing::trace;

use crate::profile::{ReallocationProfile, ReallocationTracker};
use crate::{ListConfig, ListError, Result, DEFAULT_CAPACITY};

/// Array-backed list with doubling growth and occupancy-driven shrink
///
/// Slots `[0, len)` are always `Some`; slots `[len, capacity)` are `None`.
/// Not synchronized: share it behind a lock if several threads need it.
#[derive(Clone)]
pub struct ArrayList<T> {
    /// Exactly `capacity` slots
    pub(crate) buffer: Box<[Option<T>]>,

    /// Live element count
    pub(crate) len: usize,

    /// Bumped on every effective structural change
    pub(crate) modifications: u64,

    tracker: ReallocationTracker,
}

impl<T> ArrayList<T> {
    /// Create an empty list with [`DEFAULT_CAPACITY`] slots
    pub fn new() -> Self {
        Self::with_config(ListConfig::default())
    }

    /// Create an empty list with `capacity` slots
    ///
    /// Accepts any integer type; negative values are rejected with
    /// [`ListError::InvalidArgument`].
    pub fn try_with_capacity<C>(capacity: C) -> Result<Self>
    where
        C: TryInto<usize> + fmt::Display + Copy,
    {
        let initial_capacity = capacity
            .try_into()
            .map_err(|_| ListError::InvalidArgument(capacity.to_string()))?;
        Ok(Self::with_config(ListConfig::with_capacity(initial_capacity)))
    }

    /// Create an empty list from a [`ListConfig`]
    pub fn with_config(config: ListConfig) -> Self {
        Self {
            buffer: empty_buffer(config.initial_capacity),
            len: 0,
            modifications: 0,
            tracker: ReallocationTracker::new(config.profile_reallocations),
        }
    }

    /// Number of live elements
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no elements are live
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocated slots
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Current modification stamp
    #[inline]
    pub fn modification_count(&self) -> u64 {
        self.modifications
    }

    /// Append `value`, doubling capacity when the buffer is full
    ///
    /// Always returns `true`.
    pub fn add(&mut self, value: T) -> bool {
        if policy::free_slots(self.len, self.capacity()) == 0 {
            self.reallocate(policy::doubled_capacity(self.capacity()));
        }

        self.buffer[self.len] = Some(value);
        self.len += 1;
        self.touch();
        true
    }

    /// Append every element of `values` with at most one reallocation
    ///
    /// Returns `false`, leaving the list and its stamp untouched, when
    /// `values` is empty.
    pub fn add_all<I>(&mut self, values: I) -> bool
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let values = values.into_iter();
        let additional = values.len();
        if additional == 0 {
            return false;
        }

        let required = policy::capacity_to_fit(self.capacity(), self.len, additional);
        if required > self.capacity() {
            self.reallocate(required);
        }

        for value in values.take(additional) {
            self.buffer[self.len] = Some(value);
            self.len += 1;
        }

        self.touch();
        true
    }

    /// Element at `index`
    pub fn get(&self, index: usize) -> Result<&T> {
        self.buffer[..self.len]
            .get(index)
            .and_then(Option::as_ref)
            .ok_or(ListError::IndexOutOfRange {
                index,
                len: self.len,
            })
    }

    /// Replace the element at `index`, returning the previous one
    ///
    /// Not a structural change: open cursors stay valid.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let len = self.len;
        self.buffer[..len]
            .get_mut(index)
            .and_then(|slot| slot.replace(value))
            .ok_or(ListError::IndexOutOfRange { index, len })
    }

    /// Remove and return the element at `index`, shifting the tail left
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        let len = self.len;
        let removed = self.take_at(index).ok_or(ListError::IndexOutOfRange { index, len })?;
        self.shrink_if_sparse();
        Ok(removed)
    }

    /// Drop every element; capacity is kept
    ///
    /// Always counts as a modification, even on an empty list.
    pub fn clear(&mut self) {
        for slot in &mut self.buffer[..self.len] {
            *slot = None;
        }
        self.len = 0;
        self.touch();
    }

    /// Reallocation profile, when profiling was enabled
    pub fn profile(&self) -> Option<&ReallocationProfile> {
        self.tracker.profile()
    }

    /// Take the reallocation profile, leaving profiling disabled
    pub fn take_profile(&mut self) -> Option<ReallocationProfile> {
        self.tracker.take_profile()
    }

    /// Live elements in order
    pub(crate) fn live(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        self.buffer[..self.len].iter().filter_map(Option::as_ref)
    }

    /// Remove the element at `index` without applying the shrink check
    pub(crate) fn take_at(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }

        let removed = self.buffer[index].take();
        self.buffer[index..self.len].rotate_left(1);
        self.len -= 1;
        self.touch();
        removed
    }

    /// Halve capacity once if occupancy dropped below one half
    pub(crate) fn shrink_if_sparse(&mut self) {
        let capacity = self.capacity();
        if policy::should_shrink(self.len, capacity) {
            let halved = policy::halved_capacity(capacity);
            if halved < capacity {
                self.reallocate(halved);
            }
        }
    }

    /// Record an effective structural change
    #[inline]
    pub(crate) fn touch(&mut self) {
        self.modifications += 1;
    }

    /// Move the live prefix into a fresh buffer of exactly `new_capacity` slots
    fn reallocate(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.len);

        let old_capacity = self.capacity();
        let mut buffer = empty_buffer(new_capacity);
        for (slot, value) in buffer.iter_mut().zip(self.buffer[..self.len].iter_mut()) {
            *slot = value.take();
        }
        self.buffer = buffer;

        trace!(
            from = old_capacity,
            to = new_capacity,
            len = self.len,
            "reallocated list buffer"
        );
        self.tracker
            .record(self.modifications, old_capacity, new_capacity);
    }
}

impl<T: PartialEq> ArrayList<T> {
    /// True when some live element equals `value`
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Position of the first element equal to `value`
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.live().position(|element| element == value)
    }

    /// Position of the last element equal to `value`
    pub fn last_index_of(&self, value: &T) -> Option<usize> {
        self.buffer[..self.len]
            .iter()
            .rposition(|slot| slot.as_ref() == Some(value))
    }

    /// Remove the first element equal to `value`
    ///
    /// Returns `false` without touching the stamp when nothing matches.
    pub fn remove(&mut self, value: &T) -> bool {
        let Some(index) = self.index_of(value) else {
            return false;
        };

        self.take_at(index);
        self.shrink_if_sparse();
        true
    }
}

impl<T: Clone> ArrayList<T> {
    /// Snapshot of the live elements
    pub fn to_vec(&self) -> Vec<T> {
        self.live().cloned().collect()
    }

    /// Copy the live elements into `dest`, converting each to `U`
    ///
    /// When `dest` has room for every element it is reused: the live prefix
    /// is overwritten and the remaining slots are cleared to `None`.
    /// Otherwise an exact-size vector is returned instead. Conversion
    /// failures report [`ListError::TypeMismatch`] before anything is written.
    pub fn to_array_in<U>(&self, mut dest: Vec<Option<U>>) -> Result<Vec<Option<U>>>
    where
        U: TryFrom<T>,
    {
        let converted = self
            .live()
            .enumerate()
            .map(|(index, value)| {
                U::try_from(value.clone()).map_err(|_| ListError::TypeMismatch { index })
            })
            .collect::<Result<Vec<U>>>()?;

        if dest.len() < converted.len() {
            return Ok(converted.into_iter().map(Some).collect());
        }

        let tail = converted.len();
        for (slot, value) in dest.iter_mut().zip(converted) {
            *slot = Some(value);
        }
        for slot in &mut dest[tail..] {
            *slot = None;
        }
        Ok(dest)
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::with_config(ListConfig::with_capacity(DEFAULT_CAPACITY))
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.live()).finish()
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T> From<Vec<T>> for ArrayList<T> {
    /// Exact-fit: capacity equals the vector's length
    fn from(values: Vec<T>) -> Self {
        let mut list = Self::with_config(ListConfig::with_capacity(values.len()));
        list.add_all(values);
        list
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter.into_iter().collect::<Vec<T>>());
    }
}

fn empty_buffer<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}
