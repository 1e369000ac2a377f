//! Growth and shrink arithmetic
//!
//! Pure functions over `(len, capacity)`; the list decides *when* to call
//! them, these decide *how much*.

/// Slots available for writing without reallocating
#[inline]
pub fn free_slots(len: usize, capacity: usize) -> usize {
    capacity.saturating_sub(len)
}

/// Capacity after a single-element growth step: `max(1, 2 * capacity)`
#[inline]
pub fn doubled_capacity(capacity: usize) -> usize {
    capacity.saturating_add(capacity.max(1))
}

/// Smallest capacity that fits `additional` more elements
///
/// Grows by exactly the shortfall, so a bulk insert costs one reallocation.
/// Returns `capacity` unchanged when the free slots already suffice.
pub fn capacity_to_fit(capacity: usize, len: usize, additional: usize) -> usize {
    let available = free_slots(len, capacity);
    if additional <= available {
        capacity
    } else {
        capacity.saturating_add(additional - available)
    }
}

/// Occupancy below one half: free slots outnumber live ones
#[inline]
pub fn should_shrink(len: usize, capacity: usize) -> bool {
    free_slots(len, capacity) > len
}

/// Capacity after a single shrink step
#[inline]
pub fn halved_capacity(capacity: usize) -> usize {
    capacity - (capacity >> 1)
}
