//! Set-like bulk operations
//!
//! Membership is structural equality against every member of the argument
//! slice. Removals rewrite the live prefix once and apply the shrink check
//! once per call, however many elements go.

mod compaction;

use tracing::debug;

use crate::ArrayList;

impl<T: PartialEq> ArrayList<T> {
    /// True when every member of `values` is present
    ///
    /// An empty list contains nothing, not even the empty set: this returns
    /// `false` for an empty list whatever `values` holds.
    pub fn contains_all(&self, values: &[T]) -> bool {
        if self.is_empty() {
            return false;
        }
        values.iter().all(|value| self.contains(value))
    }

    /// Remove every element equal to some member of `values`
    ///
    /// Returns `false` without touching the stamp or the buffer when nothing
    /// matches.
    pub fn remove_all(&mut self, values: &[T]) -> bool {
        let mask = compaction::match_mask(self.live(), self.len, values);
        let matched = mask.count_ones();
        if matched == 0 {
            return false;
        }

        let kept = compaction::compact_unmatched(&mut self.buffer[..self.len], &mask);
        debug!(matched, kept, "remove_all compacted list");

        self.len = kept;
        self.touch();
        self.shrink_if_sparse();
        true
    }

    /// Keep only elements equal to some member of `values`
    ///
    /// Duplicates survive. Returns `false` when every element is kept.
    pub fn retain_all(&mut self, values: &[T]) -> bool {
        let mut kept = compaction::kept_indices(self.live(), values);
        if kept.len() == self.len {
            return false;
        }

        let removed = self.len - kept.len();
        let survivors = compaction::shift_out_gaps(&mut self.buffer[..self.len], &mut kept);
        debug!(removed, kept = survivors, "retain_all compacted list");

        self.len = survivors;
        self.touch();
        self.shrink_if_sparse();
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::{ArrayList, ListConfig};

    fn with_capacity<T>(capacity: usize, values: Vec<T>) -> ArrayList<T> {
        let mut list = ArrayList::with_config(ListConfig::with_capacity(capacity));
        for value in values {
            list.add(value);
        }
        list
    }

    #[test]
    fn test_contains_all_empty_list_is_false() {
        let list: ArrayList<i32> = ArrayList::new();
        assert!(!list.contains_all(&[]));
        assert!(!list.contains_all(&[1]));
    }

    #[test]
    fn test_contains_all() {
        let list: ArrayList<Option<i32>> = vec![Some(1), None, Some(3)].into();
        assert!(list.contains_all(&[]));
        assert!(list.contains_all(&[None, Some(3)]));
        assert!(!list.contains_all(&[Some(1), Some(4)]));
    }

    #[test]
    fn test_remove_all_no_match_is_noop() {
        let mut list: ArrayList<i32> = vec![1, 2].into();
        let stamp = list.modification_count();

        assert!(!list.remove_all(&[]));
        assert!(!list.remove_all(&[7, 8]));
        assert_eq!(list.len(), 2);
        assert_eq!(list.modification_count(), stamp);

        let mut empty: ArrayList<i32> = ArrayList::new();
        assert!(!empty.remove_all(&[1, 2]));
    }

    #[test]
    fn test_remove_all_every_occurrence() {
        let mut list: ArrayList<i32> = vec![1, 2, 3, 2, 4, 4].into();
        assert!(list.remove_all(&[2, 4, 2]));
        assert_eq!(list.to_vec(), vec![1, 3]);
    }

    #[test]
    fn test_remove_all_halves_once() {
        let mut list = with_capacity(8, vec!["y", "x", "x", "x", "x"]);
        assert!(list.remove_all(&["x", "z", "x"]));
        assert_eq!(list.to_vec(), vec!["y"]);
        assert_eq!(list.capacity(), 4);
    }

    #[test]
    fn test_retain_all_empty_list() {
        let mut list: ArrayList<i32> = ArrayList::new();
        assert!(!list.retain_all(&[1, 2]));
    }

    #[test]
    fn test_retain_all_no_values_clears() {
        let mut list: ArrayList<i32> = vec![1, 2].into();
        assert!(list.retain_all(&[]));
        assert!(list.is_empty());
    }

    #[test]
    fn test_retain_all_nothing_removed() {
        let mut list: ArrayList<i32> = vec![1, 2, 2, 2].into();
        let stamp = list.modification_count();
        assert!(!list.retain_all(&[1, 2]));
        assert_eq!(list.len(), 4);
        assert_eq!(list.modification_count(), stamp);
    }

    #[test]
    fn test_retain_all_keeps_duplicates_and_nulls() {
        let mut list: ArrayList<Option<i32>> =
            vec![Some(1), Some(2), Some(2), None, Some(1), None].into();
        assert!(list.retain_all(&[Some(1), Some(1), None]));
        assert_eq!(list.to_vec(), vec![Some(1), None, Some(1), None]);
    }

    #[test]
    fn test_retain_all_drops_leading_run() {
        let mut list: ArrayList<i32> = vec![5, 6, 1].into();
        assert!(list.retain_all(&[1]));
        assert_eq!(list.to_vec(), vec![1]);
    }

    #[test]
    fn test_retain_all_halves_once() {
        let mut list = with_capacity(8, vec!["y", "x", "x", "x", "x"]);
        assert!(list.retain_all(&["y"]));
        assert_eq!(list.to_vec(), vec!["y"]);
        assert_eq!(list.capacity(), 4);
    }
}
