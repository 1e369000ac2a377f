//! Reallocation tracking for profiling

use super::{Reallocation, ReallocationKind, ReallocationProfile};

/// Tracks buffer reallocations during the lifetime of a list
#[derive(Debug, Clone)]
pub(crate) struct ReallocationTracker {
    /// Profile data (if enabled)
    profile: Option<ReallocationProfile>,
}

impl ReallocationTracker {
    /// Create new tracker
    pub(crate) fn new(profile_enabled: bool) -> Self {
        Self {
            profile: profile_enabled.then(ReallocationProfile::default),
        }
    }

    /// Record a reallocation from `from` to `to` slots
    pub(crate) fn record(&mut self, stamp: u64, from: usize, to: usize) {
        if let Some(ref mut p) = self.profile {
            let event = Reallocation { stamp, from, to };
            match event.kind() {
                ReallocationKind::Grow => p.grow_count += 1,
                ReallocationKind::Shrink => p.shrink_count += 1,
            }
            p.peak_capacity = p.peak_capacity.max(to);
            p.timeline.push(event);
        }
    }

    /// Borrow the profile
    pub(crate) fn profile(&self) -> Option<&ReallocationProfile> {
        self.profile.as_ref()
    }

    /// Take profile (disables further recording)
    pub(crate) fn take_profile(&mut self) -> Option<ReallocationProfile> {
        self.profile.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_tracker_records_nothing() {
        let mut tracker = ReallocationTracker::new(false);
        tracker.record(1, 0, 1);
        assert!(tracker.profile().is_none());
    }

    #[test]
    fn test_counts_and_peak() {
        let mut tracker = ReallocationTracker::new(true);
        tracker.record(1, 0, 1);
        tracker.record(2, 1, 2);
        tracker.record(3, 2, 4);
        tracker.record(9, 4, 2);

        let profile = tracker.take_profile().unwrap();
        assert_eq!(profile.grow_count, 3);
        assert_eq!(profile.shrink_count, 1);
        assert_eq!(profile.peak_capacity, 4);
        assert_eq!(profile.timeline.len(), 4);
        assert!(tracker.profile().is_none());
    }
}
