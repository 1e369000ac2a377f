//! Single-pass compaction kernels
//!
//! Both kernels work on the live prefix of the buffer (`slots`) and leave
//! the survivors packed at the front with `None` behind them.

use bitvec::prelude::*;

/// Mark every live element that equals some member of `values`
pub(crate) fn match_mask<'a, T, I>(live: I, len: usize, values: &[T]) -> BitVec
where
    T: PartialEq + 'a,
    I: Iterator<Item = &'a T>,
{
    let mut mask = bitvec![0; len];
    for (idx, element) in live.enumerate() {
        if values.contains(element) {
            mask.set(idx, true);
        }
    }
    mask
}

/// Indices of live elements that equal some member of `values`, ascending
pub(crate) fn kept_indices<'a, T, I>(live: I, values: &[T]) -> Vec<usize>
where
    T: PartialEq + 'a,
    I: Iterator<Item = &'a T>,
{
    live.enumerate()
        .filter(|(_, element)| values.contains(element))
        .map(|(idx, _)| idx)
        .collect()
}

/// Drop every slot whose mask bit is set
///
/// Survivors are gathered into a right-sized run in one pass and written
/// back as the new prefix. Returns the survivor count.
pub(crate) fn compact_unmatched<T>(slots: &mut [Option<T>], mask: &BitSlice) -> usize {
    let mut survivors = Vec::with_capacity(mask.count_zeros());
    for (slot, matched) in slots.iter_mut().zip(mask.iter().by_vals()) {
        let value = slot.take();
        if !matched {
            survivors.push(value);
        }
    }

    let kept = survivors.len();
    for (slot, value) in slots.iter_mut().zip(survivors) {
        *slot = value;
    }
    kept
}

/// Keep only the slots listed in `kept`, in order
///
/// Each contiguous run of dropped slots is cleared and shifted out with a
/// single rotation; `kept` is rebased by the shift amount as it goes, so on
/// return it holds `0..kept.len()`. Returns the survivor count.
pub(crate) fn shift_out_gaps<T>(slots: &mut [Option<T>], kept: &mut [usize]) -> usize {
    let mut next = 0;
    for k in 0..kept.len() {
        let gap = kept[k] - next;
        if gap > 0 {
            for slot in &mut slots[next..kept[k]] {
                *slot = None;
            }
            slots[next..].rotate_left(gap);
            for idx in &mut kept[k..] {
                *idx -= gap;
            }
        }
        next += 1;
    }

    // Trailing run
    for slot in &mut slots[next..] {
        *slot = None;
    }
    next
}
